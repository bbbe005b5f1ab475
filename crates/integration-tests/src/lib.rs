//! Integration tests for OpenClose Hub.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p openclose-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `restart` - State surviving a reopen over shared storage
//! - `file_store` - The same scenarios against the on-disk data file
//!
//! Both stores share one adapter in every test, the way the CLI wires them.
