//! Persistence port for stock items.

use std::sync::Arc;

use beerstock_core::BeerId;

use crate::beer::{Beer, NewBeer};

/// Storage collaborator used by [`crate::BeerService`].
///
/// Implementations own identifier assignment and must make each individual
/// call consistent. They are not asked to make a service operation (read,
/// check, write) atomic as a whole.
pub trait BeerRepository: Send + Sync {
    fn find_by_name(&self, name: &str) -> Option<Beer>;
    fn find_by_id(&self, id: &BeerId) -> Option<Beer>;
    /// All stored items, in the order the store yields them.
    fn find_all(&self) -> Vec<Beer>;
    /// Persist a new item, assigning its identifier.
    fn insert(&self, beer: NewBeer) -> Beer;
    /// Persist the full record of an existing item.
    fn update(&self, beer: Beer) -> Beer;
    fn delete(&self, beer: &Beer);
}

impl<S> BeerRepository for Arc<S>
where
    S: BeerRepository + ?Sized,
{
    fn find_by_name(&self, name: &str) -> Option<Beer> {
        (**self).find_by_name(name)
    }

    fn find_by_id(&self, id: &BeerId) -> Option<Beer> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Vec<Beer> {
        (**self).find_all()
    }

    fn insert(&self, beer: NewBeer) -> Beer {
        (**self).insert(beer)
    }

    fn update(&self, beer: Beer) -> Beer {
        (**self).update(beer)
    }

    fn delete(&self, beer: &Beer) {
        (**self).delete(beer)
    }
}
