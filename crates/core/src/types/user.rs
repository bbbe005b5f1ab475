//! Authenticated user identity.

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// The identity held by an authenticated session.
///
/// Serialized in camelCase (`isAdmin`) so the stored session record keeps
/// the same shape across clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub is_admin: bool,
}
