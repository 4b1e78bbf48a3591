//! HTTP client for the expense tracker API
//!
//! This crate provides a typed client for an expense tracker REST backend.
//! It exposes three operations over the `/api/expenses` resource: listing
//! expenses (optionally filtered by category), creating an expense, and
//! deleting an expense by id. Each call is a single stateless async
//! request/response round trip; errors surface as a single descriptive
//! [`Error`] type.
//!
//! # Example
//!
//! ```no_run
//! use expense_tracker_client::{ExpenseClient, ExpensePayload};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ExpenseClient::new("http://localhost:8080".to_string());
//!
//! client
//!     .create_expense(&ExpensePayload {
//!         amount: 12.5,
//!         description: "Lunch".to_string(),
//!         category: "Food".to_string(),
//!     })
//!     .await?;
//!
//! let food = client.list_expenses(Some("Food")).await?;
//! println!("{} food expenses", food.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod types;

pub use client::{ExpenseClient, ExpenseClientBuilder, CATEGORY_ALL};
pub use error::{Error, Result};
pub use types::{Expense, ExpensePayload};
