//! Type definitions for the expense tracker API

use serde::{Deserialize, Serialize};

/// A persisted expense record as returned by the server
///
/// `id` and `created_at` are assigned by the server on creation; the client
/// never fabricates them. Records are immutable from the client's
/// perspective except via delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, server-assigned
    pub id: i64,
    /// Amount spent, as a decimal currency value
    pub amount: f64,
    /// Free-form description of the expense
    pub description: String,
    /// Category label (e.g. "Food")
    pub category: String,
    /// Creation timestamp, server-assigned
    pub created_at: String,
}

/// Payload for creating a new expense
///
/// Carries only the client-supplied fields; `id` and `created_at` are
/// assigned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpensePayload {
    /// Amount spent, as a decimal currency value
    pub amount: f64,
    /// Free-form description of the expense
    pub description: String,
    /// Category label
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_deserializes_server_shape() {
        let json = r#"{
            "id": 7,
            "amount": 12.5,
            "description": "Lunch",
            "category": "Food",
            "created_at": "2024-05-01T12:00:00Z"
        }"#;

        let expense: Expense = serde_json::from_str(json).expect("valid expense JSON");
        assert_eq!(expense.id, 7);
        assert_eq!(expense.amount, 12.5);
        assert_eq!(expense.description, "Lunch");
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.created_at, "2024-05-01T12:00:00Z");
    }

    #[test]
    fn test_payload_serializes_without_server_fields() {
        let payload = ExpensePayload {
            amount: 12.5,
            description: "Lunch".to_string(),
            category: "Food".to_string(),
        };

        let value = serde_json::to_value(&payload).expect("payload serializes");
        assert_eq!(
            value,
            serde_json::json!({
                "amount": 12.5,
                "description": "Lunch",
                "category": "Food"
            })
        );
    }
}
