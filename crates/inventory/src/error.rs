//! Stock service failures.

use thiserror::Error;

use beerstock_core::BeerId;

/// Result type returned by [`crate::BeerService`].
pub type StockResult<T> = Result<T, StockError>;

/// How a missing item was looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Name(String),
    Id(BeerId),
}

impl core::fmt::Display for Lookup {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Lookup::Name(name) => write!(f, "name {name}"),
            Lookup::Id(id) => write!(f, "id {id}"),
        }
    }
}

/// Business-rule failure of a stock operation.
///
/// Every variant is request-scoped and recoverable. A failed operation has
/// not written anything to the repository.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// Creation with a name that is already stored.
    #[error("Beer with name {0} has already been registered in our database.")]
    AlreadyRegistered(String),

    /// No item matches the given name or id.
    #[error("We could not find a beer with {0} in our database.")]
    NotFound(Lookup),

    /// An increment would push the quantity above `max`.
    #[error("Beer with id {id} cannot be incremented by {amount}, it exceeds the stock limit.")]
    StockExceeded { id: BeerId, amount: u32 },

    /// A decrement would push the quantity below zero.
    #[error(
        "Beer with id {id} cannot be decremented by {amount}, it cannot have a negative quantity."
    )]
    NegativeQuantity { id: BeerId, amount: u32 },
}

impl StockError {
    pub fn not_found_by_name(name: impl Into<String>) -> Self {
        Self::NotFound(Lookup::Name(name.into()))
    }

    pub fn not_found_by_id(id: BeerId) -> Self {
        Self::NotFound(Lookup::Id(id))
    }
}
