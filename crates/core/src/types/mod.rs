//! Core types for OpenClose Hub.
//!
//! This module provides type-safe wrappers for the shop's domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod status;
pub mod user;

pub use id::*;
pub use price::Price;
pub use product::{Availability, NewProduct, Product, ProductError};
pub use status::{ShopStatus, StatusParseError};
pub use user::User;
