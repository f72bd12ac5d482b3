//! The Order entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded order
///
/// Serialized with camelCase keys (`entryDate`, `isInvoiced`, `isDeleted`).
/// Missing keys take their defaults on input so that an incomplete payload
/// reaches validation instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Store-assigned identifier; `0` asks the store to assign one
    #[serde(default)]
    pub id: i32,

    /// When the order was recorded
    #[serde(default)]
    pub entry_date: DateTime<Utc>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_invoiced")]
    pub is_invoiced: bool,

    /// Soft-delete flag; deleted orders never appear in query results
    #[serde(default)]
    pub is_deleted: bool,
}

fn default_invoiced() -> bool {
    true
}

impl Order {
    /// Create an unsaved order (id 0, invoiced, not deleted)
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        entry_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            entry_date,
            name: name.into(),
            description: description.into(),
            is_invoiced: true,
            is_deleted: false,
        }
    }

    /// Builder-style id override
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Mark the order as soft-deleted
    pub fn soft_delete(mut self) -> Self {
        self.is_deleted = true;
        self
    }

    pub fn is_visible(&self) -> bool {
        !self.is_deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_defaults_for_missing_fields() {
        let order: Order = serde_json::from_str(r#"{"name": "Widget"}"#).unwrap();

        assert_eq!(order.id, 0);
        assert_eq!(order.name, "Widget");
        assert_eq!(order.description, "");
        assert!(order.is_invoiced);
        assert!(!order.is_deleted);
        assert_eq!(order.entry_date, DateTime::<Utc>::default());
    }

    #[test]
    fn test_camel_case_wire_format() {
        let entry = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let order = Order::new("Desk", "Oak desk", entry).with_id(7);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["entryDate"], "2024-03-01T09:30:00Z");
        assert_eq!(json["isInvoiced"], true);
        assert_eq!(json["isDeleted"], false);
        assert!(json.get("entry_date").is_none());
    }

    #[test]
    fn test_soft_delete_hides_order() {
        let order = Order::new("a", "b", Utc::now());
        assert!(order.is_visible());
        assert!(!order.soft_delete().is_visible());
    }
}
