//! OpenClose Hub Store - Client-side state for the shop.
//!
//! This crate owns all application state. The presentation layer (admin
//! console, customer view, CLI) reads from and issues operations on two
//! stores:
//!
//! - [`SessionStore`] - the single authenticated identity
//! - [`InventoryStore`] - the product catalog and open/closed status
//!
//! Both stores write through a [`KeyValueStore`] after every completed
//! mutation and report outcomes to a [`NotificationSink`]. Stores are plain
//! owned values; pass them explicitly to whatever needs them.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use openclose_store::{
//!     InMemoryKeyValueStore, InventoryStore, RecordingSink, SystemClock,
//! };
//!
//! let adapter = Arc::new(InMemoryKeyValueStore::new());
//! let sink = Arc::new(RecordingSink::new());
//! let inventory = InventoryStore::open(adapter, sink, Arc::new(SystemClock));
//!
//! let hits = inventory.search_products("ee");
//! let names: Vec<_> = hits.iter().map(|p| p.name.as_str()).collect();
//! assert_eq!(names, ["Coffee", "Sandwich"]);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod clock;
pub mod inventory;
pub mod notify;
pub mod observer;
pub mod persistence;
pub mod session;

#[cfg(test)]
mod test_support;

pub use clock::{Clock, SystemClock};
pub use inventory::{InventoryError, InventorySnapshot, InventoryStore};
pub use notify::{Notification, NotificationSink, RecordingSink, Severity, TracingSink};
pub use observer::{Subscribers, SubscriptionId};
pub use persistence::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, PersistenceError};
pub use session::{Credentials, LoginDelay, Session, SessionError, SessionStore};
