use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Patch;
use crate::store::Record;
use crate::validate::{non_empty, Validate, ValidationError};

/// A stored item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

/// Request body for POST /items
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct ItemCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

/// Request body for PUT /items/{id}; every field is optional
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct ItemUpdate {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub price: Patch<f64>,
}

impl Validate for ItemCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty("name", &self.name)
    }
}

impl Validate for ItemUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.name.as_set() {
            Some(name) => non_empty("name", name),
            None => Ok(()),
        }
    }
}

impl Record for Item {
    type Create = ItemCreate;
    type Update = ItemUpdate;

    fn from_create(id: u64, created_at: DateTime<Utc>, payload: ItemCreate) -> Self {
        Item {
            id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            created_at,
        }
    }

    fn apply_update(&mut self, update: ItemUpdate) {
        update.name.apply_to(&mut self.name);
        update.description.apply_to_option(&mut self.description);
        update.price.apply_to(&mut self.price);
    }

    fn id(&self) -> u64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Item {
        Item::from_create(
            1,
            Utc::now(),
            ItemCreate {
                name: "Widget".to_string(),
                description: Some("A widget".to_string()),
                price: 9.99,
            },
        )
    }

    #[test]
    fn test_create_payload_defaults_description() {
        let payload: ItemCreate =
            serde_json::from_str(r#"{"name": "Widget", "price": 9.99}"#).unwrap();
        assert_eq!(payload.description, None);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_create_payload_requires_price() {
        let result = serde_json::from_str::<ItemCreate>(r#"{"name": "Widget"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_payload_rejects_empty_name() {
        let payload: ItemCreate =
            serde_json::from_str(r#"{"name": "", "price": 1.0}"#).unwrap();
        assert_eq!(payload.validate().unwrap_err().field, "name");

        let spaces: ItemCreate =
            serde_json::from_str(r#"{"name": "  ", "price": 1.0}"#).unwrap();
        assert!(spaces.validate().is_ok());
    }

    #[test]
    fn test_update_only_price() {
        let mut item = widget();
        let before = item.clone();

        let update: ItemUpdate = serde_json::from_str(r#"{"price": 12.5}"#).unwrap();
        item.apply_update(update);

        assert_eq!(item.price, 12.5);
        assert_eq!(item.name, before.name);
        assert_eq!(item.description, before.description);
        assert_eq!(item.created_at, before.created_at);
    }

    #[test]
    fn test_update_null_fields_are_ignored() {
        let mut item = widget();
        let before = item.clone();

        let update: ItemUpdate =
            serde_json::from_str(r#"{"name": null, "description": null}"#).unwrap();
        item.apply_update(update);

        assert_eq!(item, before);
    }

    #[test]
    fn test_update_validation() {
        let blank: ItemUpdate = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(blank.validate().is_err());
        assert!(ItemUpdate::default().validate().is_ok());
    }

    #[test]
    fn test_item_serializes_null_description() {
        let mut item = widget();
        item.description = None;

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 1);
        assert!(json["description"].is_null());
        assert!(chrono::DateTime::parse_from_rfc3339(json["created_at"].as_str().unwrap()).is_ok());
    }
}
