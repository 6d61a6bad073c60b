//! Diesel models backing the repository.

pub mod oil_price;
