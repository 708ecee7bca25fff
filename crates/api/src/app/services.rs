use std::sync::Arc;

use beerstock_infra::InMemoryBeerRepository;
use beerstock_inventory::{BeerRepository, BeerService};

/// Shared application services handed to every handler.
pub struct AppServices {
    pub beers: BeerService<Arc<dyn BeerRepository>>,
}

impl AppServices {
    pub fn new(repository: Arc<dyn BeerRepository>) -> Self {
        Self {
            beers: BeerService::new(repository),
        }
    }

    pub fn in_memory() -> Self {
        tracing::info!("using in-memory beer repository");
        Self::new(Arc::new(InMemoryBeerRepository::new()))
    }
}
