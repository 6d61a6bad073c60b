//! Persistence and service layer for the fuelwatch oil price backend.
//!
//! The crate provides a generic CRUD service — dynamic filtered paged
//! search plus insert-or-update — built over two seams: a repository
//! ([`repository::EntityReader`] / [`repository::EntityWriter`]) and an
//! object mapper ([`mapper::EntityMapper`]). The concrete
//! [`domain::oil_price::OilPrice`] entity wires both seams to a
//! Diesel/SQLite backend.

pub mod db;
pub mod domain;
pub mod dto;
pub mod mapper;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;
