use crate::model::{generate_id, Id};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: Id,
    pub name: String,
    pub origin: Option<String>,
    pub created_at: String, // ISO 8601 timestamp
}

impl Brand {
    pub fn new(name: String, origin: Option<String>) -> Self {
        Self {
            id: generate_id(),
            name,
            origin,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Canonical catalog location, derived from the identifier. Never stored.
    pub fn url(&self) -> String {
        format!("/catalog/brand/{}", self.id)
    }
}

/// Listing projection: only the fields the brand list view consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandListItem {
    pub id: Id,
    pub name: String,
}

impl From<&Brand> for BrandListItem {
    fn from(brand: &Brand) -> Self {
        Self {
            id: brand.id.clone(),
            name: brand.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_derived_from_id() {
        let brand = Brand::new("Trek".to_string(), Some("USA".to_string()));
        assert_eq!(brand.url(), format!("/catalog/brand/{}", brand.id));
    }

    #[test]
    fn list_item_carries_projected_fields_only() {
        let brand = Brand::new("Trek".to_string(), Some("USA".to_string()));
        let item = BrandListItem::from(&brand);
        assert_eq!(item.name, "Trek");

        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("origin").is_none());
        assert!(json.get("created_at").is_none());
    }
}
