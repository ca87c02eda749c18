use crate::model::{generate_id, Id};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bike {
    pub id: Id,
    pub brand: Id, // references Brand; existence is checked in the create flow
    pub model: String,
    pub summary: Option<String>,
    pub created_at: String, // ISO 8601 timestamp
}

impl Bike {
    pub fn new(brand: Id, model: String, summary: Option<String>) -> Self {
        Self {
            id: generate_id(),
            brand,
            model,
            summary,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Canonical catalog location, derived from the identifier. Never stored.
    pub fn url(&self) -> String {
        format!("/catalog/bike/{}", self.id)
    }
}

/// Listing projection: only the fields the bike list view consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BikeListItem {
    pub id: Id,
    pub model: String,
}

impl From<&Bike> for BikeListItem {
    fn from(bike: &Bike) -> Self {
        Self {
            id: bike.id.clone(),
            model: bike.model.clone(),
        }
    }
}

/// Join projection for a brand's detail page (`model` and `summary` only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BikeOfBrand {
    pub id: Id,
    pub model: String,
    pub summary: Option<String>,
}

impl From<&Bike> for BikeOfBrand {
    fn from(bike: &Bike) -> Self {
        Self {
            id: bike.id.clone(),
            model: bike.model.clone(),
            summary: bike.summary.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_derived_from_id() {
        let bike = Bike::new("brand-1".to_string(), "Marlin 5".to_string(), None);
        assert_eq!(bike.url(), format!("/catalog/bike/{}", bike.id));
    }

    #[test]
    fn brand_join_projection_drops_the_reference() {
        let bike = Bike::new(
            "brand-1".to_string(),
            "Marlin 5".to_string(),
            Some("Entry trail hardtail".to_string()),
        );
        let json = serde_json::to_value(BikeOfBrand::from(&bike)).unwrap();
        assert_eq!(json["model"], "Marlin 5");
        assert!(json.get("brand").is_none());
    }
}
