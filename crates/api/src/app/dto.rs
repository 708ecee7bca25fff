use serde::{Deserialize, Serialize};

use beerstock_core::{BeerId, DomainError, DomainResult};
use beerstock_inventory::{Beer, BeerType, MAX_ADJUSTMENT, NewBeer};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /api/v1/beers`. A client-supplied `id` is ignored.
#[derive(Debug, Deserialize)]
pub struct CreateBeerRequest {
    pub name: String,
    pub brand: String,
    pub max: u32,
    pub quantity: u32,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

impl CreateBeerRequest {
    pub fn into_new_beer(self) -> DomainResult<NewBeer> {
        NewBeer::new(self.name, self.brand, self.beer_type, self.max, self.quantity)
    }
}

/// Body of the increment/decrement endpoints.
#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    pub quantity: u32,
}

impl QuantityRequest {
    pub fn into_amount(self) -> DomainResult<u32> {
        if self.quantity > MAX_ADJUSTMENT {
            return Err(DomainError::validation(format!(
                "quantity must be at most {MAX_ADJUSTMENT}"
            )));
        }
        Ok(self.quantity)
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeerResponse {
    pub id: BeerId,
    pub name: String,
    pub brand: String,
    pub max: u32,
    pub quantity: u32,
    #[serde(rename = "type")]
    pub beer_type: BeerType,
}

impl From<&Beer> for BeerResponse {
    fn from(beer: &Beer) -> Self {
        Self {
            id: beer.id_typed(),
            name: beer.name().to_string(),
            brand: beer.brand().to_string(),
            max: beer.max(),
            quantity: beer.quantity(),
            beer_type: beer.beer_type(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_request(body: serde_json::Value) -> CreateBeerRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn create_request_maps_every_field_and_ignores_id() {
        let req = create_request(json!({
            "id": 1,
            "name": "Brahma",
            "brand": "Ambev",
            "max": 50,
            "quantity": 10,
            "type": "LAGER",
        }));

        let beer = req.into_new_beer().unwrap();
        assert_eq!(beer.name(), "Brahma");
        assert_eq!(beer.brand(), "Ambev");
        assert_eq!(beer.max(), 50);
        assert_eq!(beer.quantity(), 10);
        assert_eq!(beer.beer_type(), BeerType::Lager);
    }

    #[test]
    fn create_request_surfaces_domain_validation() {
        let req = create_request(json!({
            "name": "",
            "brand": "Ambev",
            "max": 50,
            "quantity": 10,
            "type": "LAGER",
        }));

        assert!(matches!(req.into_new_beer(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn create_request_requires_a_known_type() {
        let res = serde_json::from_value::<CreateBeerRequest>(json!({
            "name": "Brahma",
            "brand": "Ambev",
            "max": 50,
            "quantity": 10,
            "type": "PORTER",
        }));
        assert!(res.is_err());
    }

    #[test]
    fn quantity_request_caps_the_adjustment() {
        assert_eq!(QuantityRequest { quantity: 10 }.into_amount(), Ok(10));
        assert_eq!(QuantityRequest { quantity: 0 }.into_amount(), Ok(0));
        assert!(QuantityRequest { quantity: MAX_ADJUSTMENT + 1 }.into_amount().is_err());
    }

    #[test]
    fn response_uses_the_wire_field_names() {
        let id = BeerId::new();
        let beer = NewBeer::new("Brahma", "Ambev", BeerType::Ipa, 50, 10)
            .unwrap()
            .with_id(id);

        let json = serde_json::to_value(BeerResponse::from(&beer)).unwrap();
        assert_eq!(
            json,
            json!({
                "id": id.to_string(),
                "name": "Brahma",
                "brand": "Ambev",
                "max": 50,
                "quantity": 10,
                "type": "IPA",
            })
        );
    }
}
