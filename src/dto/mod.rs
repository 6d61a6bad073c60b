//! DTOs bridging callers with the service layer.

pub mod oil_price;
pub mod search;
