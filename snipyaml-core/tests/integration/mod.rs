//! End-to-end tests for full editing sessions
//!
//! These tests drive the engine the way a host does: create the editing
//! file, simulate user edits and save/close notifications, and verify the
//! canonical file on disk.

mod scenario_tests;
