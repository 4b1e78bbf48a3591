//! Basic usage example for the expense tracker client
//!
//! This example demonstrates:
//! - Creating a client
//! - Creating an expense
//! - Listing expenses with and without a category filter
//! - Deleting an expense
//! - Error handling

use expense_tracker_client::{ExpenseClient, ExpensePayload};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let base_url =
        std::env::var("EXPENSE_TRACKER_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    let client = ExpenseClient::new(base_url);

    println!("=== Creating an expense ===");
    let payload = ExpensePayload {
        amount: 12.5,
        description: "Lunch".to_string(),
        category: "Food".to_string(),
    };
    match client.create_expense(&payload).await {
        Ok(()) => println!("Expense created"),
        Err(e) => eprintln!("Error creating expense: {e}"),
    }

    println!("\n=== Listing all expenses ===");
    match client.list_expenses(None).await {
        Ok(expenses) => {
            println!("Fetched {} expenses", expenses.len());
            if let Some(first) = expenses.first() {
                println!("\nFirst expense:");
                println!("  ID: {}", first.id);
                println!("  Amount: {}", first.amount);
                println!("  Category: {}", first.category);
            }
        }
        Err(e) => eprintln!("Error listing expenses: {e}"),
    }

    println!("\n=== Listing food expenses ===");
    match client.list_expenses(Some("Food")).await {
        Ok(expenses) => {
            println!("Found {} food expenses", expenses.len());

            if let Some(expense) = expenses.first() {
                println!("\n=== Deleting expense {} ===", expense.id);
                match client.delete_expense(expense.id).await {
                    Ok(()) => println!("Expense deleted"),
                    Err(e) => eprintln!("Error deleting expense: {e}"),
                }
            }
        }
        Err(e) => eprintln!("Error listing food expenses: {e}"),
    }

    Ok(())
}
