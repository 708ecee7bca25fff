//! Implementations of [`beerstock_inventory::BeerRepository`].

pub mod in_memory;

pub use in_memory::InMemoryBeerRepository;
