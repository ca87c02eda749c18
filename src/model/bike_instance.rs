use crate::model::{generate_id, Id};
use serde::{Deserialize, Serialize};

/// Frame sizes a physical bike can be stocked in. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "XXS")]
    Xxs,
    #[serde(rename = "XS")]
    Xs,
    S,
    M,
    L,
    #[serde(rename = "XL")]
    Xl,
    #[serde(rename = "XXL")]
    Xxl,
    #[serde(rename = "S/M")]
    SM,
    #[serde(rename = "M/L")]
    ML,
    #[serde(rename = "L/XL")]
    LXl,
    #[serde(rename = "XL/XXL")]
    XlXxl,
}

impl Size {
    pub const ALL: [Size; 11] = [
        Size::Xxs,
        Size::Xs,
        Size::S,
        Size::M,
        Size::L,
        Size::Xl,
        Size::Xxl,
        Size::SM,
        Size::ML,
        Size::LXl,
        Size::XlXxl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Xxs => "XXS",
            Size::Xs => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::Xl => "XL",
            Size::Xxl => "XXL",
            Size::SM => "S/M",
            Size::ML => "M/L",
            Size::LXl => "L/XL",
            Size::XlXxl => "XL/XXL",
        }
    }

    /// Parse a form value against the closed set.
    pub fn parse(value: &str) -> Option<Size> {
        Size::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// Availability of a physical bike. Closed set, `Available` when omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstanceStatus {
    #[default]
    Available,
    Unavailable,
    #[serde(rename = "Ask for availability")]
    AskForAvailability,
}

impl InstanceStatus {
    pub const ALL: [InstanceStatus; 3] = [
        InstanceStatus::Available,
        InstanceStatus::Unavailable,
        InstanceStatus::AskForAvailability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceStatus::Available => "Available",
            InstanceStatus::Unavailable => "Unavailable",
            InstanceStatus::AskForAvailability => "Ask for availability",
        }
    }

    /// Parse a form value against the closed set.
    pub fn parse(value: &str) -> Option<InstanceStatus> {
        InstanceStatus::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BikeInstance {
    pub id: Id,
    pub bike: Id, // references Bike; existence is checked in the create flow
    pub size: Size,
    pub status: InstanceStatus,
    pub created_at: String, // ISO 8601 timestamp
}

impl BikeInstance {
    pub fn new(bike: Id, size: Size, status: InstanceStatus) -> Self {
        Self {
            id: generate_id(),
            bike,
            size,
            status,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Canonical catalog location, derived from the identifier. Never stored.
    pub fn url(&self) -> String {
        format!("/catalog/bikeinstance/{}", self.id)
    }
}

/// Join projection for a bike's detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceOfBike {
    pub id: Id,
    pub size: Size,
    pub status: InstanceStatus,
}

impl From<&BikeInstance> for InstanceOfBike {
    fn from(instance: &BikeInstance) -> Self {
        Self {
            id: instance.id.clone(),
            size: instance.size,
            status: instance.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_available() {
        assert_eq!(InstanceStatus::default(), InstanceStatus::Available);
    }

    #[test]
    fn size_round_trips_through_its_display_form() {
        for size in Size::ALL {
            assert_eq!(Size::parse(size.as_str()), Some(size));
        }
        assert_eq!(Size::parse("XS/S"), None);
        assert_eq!(Size::parse(""), None);
    }

    #[test]
    fn status_parses_the_closed_set_only() {
        assert_eq!(
            InstanceStatus::parse("Ask for availability"),
            Some(InstanceStatus::AskForAvailability)
        );
        assert_eq!(InstanceStatus::parse("On loan"), None);
    }

    #[test]
    fn combined_sizes_serialize_with_slashes() {
        let json = serde_json::to_value(Size::LXl).unwrap();
        assert_eq!(json, "L/XL");
        let back: Size = serde_json::from_value(json).unwrap();
        assert_eq!(back, Size::LXl);
    }

    #[test]
    fn url_is_derived_from_id() {
        let instance = BikeInstance::new(
            "bike-1".to_string(),
            Size::M,
            InstanceStatus::default(),
        );
        assert_eq!(instance.url(), format!("/catalog/bikeinstance/{}", instance.id));
    }
}
