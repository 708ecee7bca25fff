use serde::{Deserialize, Serialize};

use beerstock_core::{BeerId, DomainError, DomainResult, Entity};

/// Longest accepted `name` / `brand`, in characters.
pub const MAX_TEXT_LEN: usize = 200;

/// Largest capacity (`max`) a stock item may be registered with.
pub const MAX_CAPACITY: u32 = 500;

/// Largest quantity a stock item may be registered with.
pub const MAX_INITIAL_QUANTITY: u32 = 100;

/// Largest amount a single increment/decrement request may carry.
pub const MAX_ADJUSTMENT: u32 = 100;

/// Closed set of beer categories.
///
/// Serialized as the upper-case constant name (`"LAGER"`, `"IPA"`, ...).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerType {
    Lager,
    Malzbier,
    Witbier,
    Ale,
    Ipa,
    Stout,
    Weiss,
    Pilsen,
}

impl BeerType {
    #[cfg(test)]
    const ALL: [BeerType; 8] = [
        BeerType::Lager,
        BeerType::Malzbier,
        BeerType::Witbier,
        BeerType::Ale,
        BeerType::Ipa,
        BeerType::Stout,
        BeerType::Weiss,
        BeerType::Pilsen,
    ];

    /// Human-readable label, used in log fields.
    pub fn label(self) -> &'static str {
        match self {
            BeerType::Lager => "Lager",
            BeerType::Malzbier => "Malzbier",
            BeerType::Witbier => "Witbier",
            BeerType::Ale => "Ale",
            BeerType::Ipa => "Ipa",
            BeerType::Stout => "Stout",
            BeerType::Weiss => "Weiss",
            BeerType::Pilsen => "Pilsen",
        }
    }
}

impl core::fmt::Display for BeerType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated stock item that has not been persisted yet (no id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBeer {
    name: String,
    brand: String,
    beer_type: BeerType,
    max: u32,
    quantity: u32,
}

impl NewBeer {
    /// Validate and build a creation candidate.
    ///
    /// `name` and `brand` are stored as given; surrounding whitespace only
    /// counts against the blank/length checks. `quantity` may not exceed
    /// `max`, so the capacity invariant holds from the moment the item exists.
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        beer_type: BeerType,
        max: u32,
        quantity: u32,
    ) -> DomainResult<Self> {
        let name = required_text("name", name.into())?;
        let brand = required_text("brand", brand.into())?;

        if max > MAX_CAPACITY {
            return Err(DomainError::validation(format!(
                "max must be at most {MAX_CAPACITY}"
            )));
        }
        if quantity > MAX_INITIAL_QUANTITY {
            return Err(DomainError::validation(format!(
                "quantity must be at most {MAX_INITIAL_QUANTITY}"
            )));
        }
        if quantity > max {
            return Err(DomainError::validation("quantity cannot exceed max"));
        }

        Ok(Self {
            name,
            brand,
            beer_type,
            max,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn beer_type(&self) -> BeerType {
        self.beer_type
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Attach the identifier chosen by a repository.
    pub fn with_id(self, id: BeerId) -> Beer {
        Beer {
            id,
            name: self.name,
            brand: self.brand,
            beer_type: self.beer_type,
            max: self.max,
            quantity: self.quantity,
        }
    }
}

fn required_text(field: &str, value: String) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(DomainError::validation(format!(
            "{field} must be at most {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(value)
}

/// Entity: one tracked beer product.
///
/// Only `quantity` changes after creation, and only through
/// [`crate::BeerService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beer {
    id: BeerId,
    name: String,
    brand: String,
    beer_type: BeerType,
    max: u32,
    quantity: u32,
}

impl Beer {
    pub fn id_typed(&self) -> BeerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn beer_type(&self) -> BeerType {
        self.beer_type
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

impl Entity for Beer {
    type Id = BeerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
