//! Stock service: business rules around the stock item lifecycle.
//!
//! Each operation is a single read-check-write sequence against the
//! repository. A failed check returns before anything is written.

use tracing::{debug, info, instrument, warn};

use beerstock_core::BeerId;

use crate::beer::{Beer, NewBeer};
use crate::error::{StockError, StockResult};
use crate::repository::BeerRepository;

pub struct BeerService<R> {
    repository: R,
}

impl<R: BeerRepository> BeerService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    #[cfg(test)]
    fn repository(&self) -> &R {
        &self.repository
    }

    /// Register a new item. Fails if the name is already stored.
    #[instrument(skip(self, beer), fields(name = %beer.name(), beer_type = %beer.beer_type()))]
    pub fn create(&self, beer: NewBeer) -> StockResult<Beer> {
        self.ensure_not_registered(beer.name())?;

        let saved = self.repository.insert(beer);
        info!(id = %saved.id_typed(), "beer registered");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub fn find_by_name(&self, name: &str) -> StockResult<Beer> {
        debug!("looking up beer by name");
        self.repository
            .find_by_name(name)
            .ok_or_else(|| StockError::not_found_by_name(name))
    }

    pub fn list_all(&self) -> Vec<Beer> {
        self.repository.find_all()
    }

    #[instrument(skip(self, id), fields(id = %id))]
    pub fn delete_by_id(&self, id: BeerId) -> StockResult<()> {
        let beer = self.ensure_exists(id)?;
        self.repository.delete(&beer);
        info!("beer deleted");
        Ok(())
    }

    /// Add `amount` to the stored quantity. Reaching `max` exactly is allowed.
    #[instrument(skip(self, id), fields(id = %id))]
    pub fn increment(&self, id: BeerId, amount: u32) -> StockResult<Beer> {
        let mut beer = self.ensure_exists(id)?;

        let new_quantity = match beer.quantity().checked_add(amount) {
            Some(q) if q <= beer.max() => q,
            _ => {
                warn!(quantity = beer.quantity(), max = beer.max(), "increment exceeds stock limit");
                return Err(StockError::StockExceeded { id, amount });
            }
        };

        beer.set_quantity(new_quantity);
        let saved = self.repository.update(beer);
        info!(quantity = saved.quantity(), "beer stock incremented");
        Ok(saved)
    }

    /// Remove `amount` from the stored quantity. Reaching zero is allowed.
    #[instrument(skip(self, id), fields(id = %id))]
    pub fn decrement(&self, id: BeerId, amount: u32) -> StockResult<Beer> {
        let mut beer = self.ensure_exists(id)?;

        let Some(new_quantity) = beer.quantity().checked_sub(amount) else {
            warn!(quantity = beer.quantity(), "decrement would go negative");
            return Err(StockError::NegativeQuantity { id, amount });
        };

        beer.set_quantity(new_quantity);
        let saved = self.repository.update(beer);
        info!(quantity = saved.quantity(), "beer stock decremented");
        Ok(saved)
    }

    fn ensure_not_registered(&self, name: &str) -> StockResult<()> {
        if self.repository.find_by_name(name).is_some() {
            warn!("beer name already registered");
            return Err(StockError::AlreadyRegistered(name.to_string()));
        }
        Ok(())
    }

    fn ensure_exists(&self, id: BeerId) -> StockResult<Beer> {
        self.repository
            .find_by_id(&id)
            .ok_or_else(|| StockError::not_found_by_id(id))
    }
}
