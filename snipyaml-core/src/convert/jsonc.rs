//! Comment-tolerant preprocessing for canonical snippet files.
//!
//! Host-written snippet files follow the JSON-with-comments dialect: `//`
//! line comments, `/* */` block comments and trailing commas are all
//! accepted. This module rewrites such input into strict JSON so it can be
//! handed to `serde_json`. Comments are dropped; they are not represented in
//! the data model and do not survive a round-trip.

/// Rewrites JSON-with-comments input into strict JSON.
///
/// String literals and their escape sequences are respected; a `//` or `/*`
/// inside a string is content, not a comment. Unterminated block comments
/// and strings are tolerated without panicking; the downstream JSON parse
/// reports the actual error.
#[must_use]
pub fn strip_jsonc(input: &str) -> String {
    strip_trailing_commas(&strip_comments(input))
}

/// Removes `//` line comments and `/* */` block comments.
///
/// Line comments keep their terminating newline; block comments are replaced
/// with a single space so surrounding tokens stay separated.
fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' => match chars.peek() {
                Some('/') => {
                    chars.next();
                    for next in chars.by_ref() {
                        if next == '\n' {
                            out.push('\n');
                            break;
                        }
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut prev = '\0';
                    for next in chars.by_ref() {
                        if prev == '*' && next == '/' {
                            break;
                        }
                        prev = next;
                    }
                    out.push(' ');
                }
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }
    out
}

/// Removes commas that directly precede a closing `}` or `]`.
fn strip_trailing_commas(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if in_string {
            out.push(c);
            if c == '\\' {
                if i + 1 < chars.len() {
                    out.push(chars[i + 1]);
                    i += 2;
                    continue;
                }
            } else if c == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
                i += 1;
            }
            ',' => {
                let mut j = i + 1;
                while j < chars.len() && chars[j].is_whitespace() {
                    j += 1;
                }
                let trailing = j < chars.len() && (chars[j] == '}' || chars[j] == ']');
                if !trailing {
                    out.push(c);
                }
                i += 1;
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}
