//! OpenClose Hub Core - Shared domain types.
//!
//! This crate provides the types shared by every OpenClose Hub component:
//! - `store` - Session and inventory stores with their persistence contracts
//! - `cli` - Command-line surface for shop owners and customers
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no storage
//! access, no clocks. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids, prices, shop status, products and users

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
