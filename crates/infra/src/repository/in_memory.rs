use std::collections::BTreeMap;
use std::sync::RwLock;

use beerstock_core::BeerId;
use beerstock_inventory::{Beer, BeerRepository, NewBeer};

/// In-memory beer store for tests/dev.
///
/// Keyed by time-ordered [`BeerId`], so `find_all` follows creation order
/// within a process. A poisoned lock reads as empty and drops writes.
#[derive(Debug)]
pub struct InMemoryBeerRepository {
    inner: RwLock<BTreeMap<BeerId, Beer>>,
}

impl InMemoryBeerRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryBeerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BeerRepository for InMemoryBeerRepository {
    fn find_by_name(&self, name: &str) -> Option<Beer> {
        let map = self.inner.read().ok()?;
        map.values().find(|b| b.name() == name).cloned()
    }

    fn find_by_id(&self, id: &BeerId) -> Option<Beer> {
        let map = self.inner.read().ok()?;
        map.get(id).cloned()
    }

    fn find_all(&self) -> Vec<Beer> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        map.values().cloned().collect()
    }

    fn insert(&self, beer: NewBeer) -> Beer {
        let beer = beer.with_id(BeerId::new());
        match self.inner.write() {
            Ok(mut map) => {
                map.insert(beer.id_typed(), beer.clone());
            }
            Err(_) => tracing::error!(id = %beer.id_typed(), "beer store lock poisoned; insert dropped"),
        }
        beer
    }

    fn update(&self, beer: Beer) -> Beer {
        match self.inner.write() {
            Ok(mut map) => {
                map.insert(beer.id_typed(), beer.clone());
            }
            Err(_) => tracing::error!(id = %beer.id_typed(), "beer store lock poisoned; update dropped"),
        }
        beer
    }

    fn delete(&self, beer: &Beer) {
        match self.inner.write() {
            Ok(mut map) => {
                map.remove(&beer.id_typed());
            }
            Err(_) => tracing::error!(id = %beer.id_typed(), "beer store lock poisoned; delete dropped"),
        }
    }
}
