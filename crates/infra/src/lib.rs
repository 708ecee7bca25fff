//! Infrastructure layer: storage adapters for the inventory domain.

pub mod repository;

pub use repository::InMemoryBeerRepository;
