//! Domain entities and the dynamic filter model.

use chrono::NaiveDateTime;

pub mod filter;
pub mod oil_price;

/// Persisted record with an identifier and a creation timestamp.
///
/// The generic upsert keys on the identifier (`0` means "not yet
/// persisted") and manages the creation timestamp itself.
pub trait Entity {
    fn id(&self) -> i32;
    fn created_at(&self) -> NaiveDateTime;
    fn set_created_at(&mut self, at: NaiveDateTime);
}
