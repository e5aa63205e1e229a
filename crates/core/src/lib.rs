//! `brewpos-core` — shared foundation for the point-of-sale front-end.
//!
//! This crate contains **pure** building blocks (no IO, no HTTP): the typed
//! identifiers the backend hands out and the domain error model.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{ExpenseId, IngredientId, SaleId, UserId};
