// src/models/cafe.rs
// DOCUMENTATION: Core data structures for cafes
// PURPOSE: Defines all serialization/deserialization models for API and database

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents a complete cafe record from the database
/// DOCUMENTATION: Maps directly to the cafe table in SQLite
/// Field order here is the key order of every JSON response
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Cafe {
    /// Store-assigned primary key
    pub id: i64,

    /// Unique cafe name
    pub name: String,

    /// Google Maps link
    pub map_url: String,

    /// Photo of the cafe
    pub img_url: String,

    /// Area the cafe is in (exact-match search key)
    pub location: String,

    /// Free-text seat count, e.g. "20-30"
    pub seats: String,

    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,

    /// Price of a coffee as displayed, e.g. "£2.40"
    pub coffee_price: Option<String>,
}

/// Form body for POST /add
/// DOCUMENTATION: Field names follow the public form contract, not the columns.
/// Everything is optional so a missing field reaches the store as NULL.
#[derive(Debug, Clone, Deserialize)]
pub struct AddCafeForm {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub loc: Option<String>,
    pub sockets: Option<String>,
    pub toilet: Option<String>,
    pub wifi: Option<String>,
    pub calls: Option<String>,
    pub seats: Option<String>,
    pub coffee_price: Option<String>,
}

/// Column values for an INSERT, after truthiness coercion
#[derive(Debug, Clone, PartialEq)]
pub struct NewCafe {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// Any submitted non-empty string counts as true, "false" and "0" included.
pub fn truthy(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl AddCafeForm {
    /// Convert submitted form into insertable column values
    pub fn into_new_cafe(self) -> NewCafe {
        NewCafe {
            has_toilet: truthy(&self.toilet),
            has_wifi: truthy(&self.wifi),
            has_sockets: truthy(&self.sockets),
            can_take_calls: truthy(&self.calls),
            name: self.name,
            map_url: self.map_url,
            img_url: self.img_url,
            location: self.loc,
            seats: self.seats,
            coffee_price: self.coffee_price,
        }
    }
}

/// Query string for GET /search
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub loc: Option<String>,
}

/// Query string for /update-price/{id}
#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub new_price: Option<String>,
}

/// Query string for DELETE /report-closed/{id}
#[derive(Debug, Deserialize)]
pub struct ApiKeyQuery {
    #[serde(rename = "api-key")]
    pub api_key: Option<String>,
}

/// `{"cafe": ...}` wrapper shared by the read endpoints
#[derive(Debug, Serialize)]
pub struct CafeEnvelope<T> {
    pub cafe: T,
}

/// `{"response": {label: message}}` acknowledgment for mutations
#[derive(Debug, Serialize)]
pub struct Acknowledgment {
    pub response: serde_json::Map<String, serde_json::Value>,
}

impl Acknowledgment {
    pub fn new(label: &str, message: &str) -> Self {
        let mut response = serde_json::Map::new();
        response.insert(label.to_string(), serde_json::Value::from(message));
        Acknowledgment { response }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> AddCafeForm {
        AddCafeForm {
            name: Some("Costa".into()),
            map_url: Some("https://maps.example/costa".into()),
            img_url: Some("https://img.example/costa.jpg".into()),
            loc: Some("London".into()),
            sockets: Some("1".into()),
            toilet: Some("false".into()),
            wifi: Some(String::new()),
            calls: None,
            seats: Some("10-20".into()),
            coffee_price: Some("£2.40".into()),
        }
    }

    #[test]
    fn test_truthiness_coercion() {
        assert!(truthy(&Some("true".into())));
        assert!(truthy(&Some("false".into())));
        assert!(truthy(&Some("0".into())));
        assert!(!truthy(&Some(String::new())));
        assert!(!truthy(&None));
    }

    #[test]
    fn test_form_maps_to_columns() {
        let cafe = form().into_new_cafe();
        assert_eq!(cafe.location.as_deref(), Some("London"));
        assert!(cafe.has_sockets);
        assert!(cafe.has_toilet);
        assert!(!cafe.has_wifi);
        assert!(!cafe.can_take_calls);
        assert_eq!(cafe.seats.as_deref(), Some("10-20"));
    }

    #[test]
    fn test_cafe_serializes_in_column_order() {
        let cafe = Cafe {
            id: 1,
            name: "Costa".into(),
            map_url: "m".into(),
            img_url: "i".into(),
            location: "London".into(),
            seats: "10-20".into(),
            has_toilet: true,
            has_wifi: true,
            has_sockets: false,
            can_take_calls: false,
            coffee_price: None,
        };

        let json = serde_json::to_string(&cafe).unwrap();
        let keys = [
            "\"id\"", "\"name\"", "\"map_url\"", "\"img_url\"", "\"location\"", "\"seats\"",
            "\"has_toilet\"", "\"has_wifi\"", "\"has_sockets\"", "\"can_take_calls\"",
            "\"coffee_price\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.contains("\"coffee_price\":null"));
    }

    #[test]
    fn test_acknowledgment_shape() {
        let ack = Acknowledgment::new("Success", "done");
        assert_eq!(
            serde_json::to_value(&ack).unwrap(),
            serde_json::json!({"response": {"Success": "done"}})
        );
    }
}
