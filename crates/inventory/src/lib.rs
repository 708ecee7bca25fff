//! Inventory domain module.
//!
//! This crate contains the business rules for beer stock: the entity, the
//! repository port it is persisted through, and the service that enforces
//! uniqueness and quantity bounds. No IO, no HTTP, no storage engine.

pub mod beer;
pub mod error;
pub mod repository;
pub mod service;

pub use beer::{
    Beer, BeerType, MAX_ADJUSTMENT, MAX_CAPACITY, MAX_INITIAL_QUANTITY, MAX_TEXT_LEN, NewBeer,
};
pub use error::{Lookup, StockError, StockResult};
pub use repository::BeerRepository;
pub use service::BeerService;
