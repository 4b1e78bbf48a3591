//! HTTP client for the expense tracker API

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::error::{Error, Result};
use crate::types::{Expense, ExpensePayload};

const API_PATH_EXPENSES: &str = "/api/expenses";

/// Sentinel category meaning "no filter"
///
/// Passing this value (or `None`) to [`ExpenseClient::list_expenses`] omits
/// the category query parameter entirely.
pub const CATEGORY_ALL: &str = "All";

/// Main client for interacting with the expense tracker API
#[derive(Debug, Clone)]
pub struct ExpenseClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ExpenseClient {
    /// Create a new expense client with default HTTP settings
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the expense tracker backend
    ///   (e.g., <http://localhost:8080>)
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http_client: reqwest::Client::new(),
        }
    }

    /// Create a new expense client builder
    pub fn builder(base_url: String) -> ExpenseClientBuilder {
        ExpenseClientBuilder::new(base_url)
    }

    /// Fetch expenses, optionally filtered by category
    ///
    /// # Arguments
    ///
    /// * `category` - Optional category filter. `None` or [`CATEGORY_ALL`]
    ///   fetches all expenses; any other value constrains the result to that
    ///   exact category.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server responds with a
    /// non-success status
    #[instrument(skip(self))]
    pub async fn list_expenses(&self, category: Option<&str>) -> Result<Vec<Expense>> {
        let url = self.build_list_url(category)?;

        tracing::debug!("Making GET request to {}", url);
        let response = self.http_client.get(url.as_str()).send().await?;

        let expenses: Option<Vec<Expense>> = self.handle_response(response).await?;
        // An empty body means the backend had nothing to return
        Ok(expenses.unwrap_or_default())
    }

    /// Create a new expense
    ///
    /// The server assigns `id` and `created_at`; a successful call resolves
    /// with no value.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server responds with a
    /// non-success status
    #[instrument(skip(self, payload))]
    pub async fn create_expense(&self, payload: &ExpensePayload) -> Result<()> {
        let url = format!("{}{}", self.base_url, API_PATH_EXPENSES);

        tracing::debug!("Making POST request to {}", url);
        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        self.handle_response::<serde_json::Value>(response).await?;
        Ok(())
    }

    /// Delete an expense by id
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server responds with a
    /// non-success status
    #[instrument(skip(self))]
    pub async fn delete_expense(&self, id: i64) -> Result<()> {
        let url = format!("{}{}/{}", self.base_url, API_PATH_EXPENSES, id);

        tracing::debug!("Making DELETE request to {}", url);
        let response = self.http_client.delete(&url).send().await?;

        self.handle_response::<serde_json::Value>(response).await?;
        Ok(())
    }

    /// Build the URL for listing expenses with an optional category filter
    fn build_list_url(&self, category: Option<&str>) -> Result<url::Url> {
        let mut url = url::Url::parse(&format!("{}{}", self.base_url, API_PATH_EXPENSES))?;

        if let Some(category) = category {
            if !category.is_empty() && category != CATEGORY_ALL {
                url.query_pairs_mut().append_pair("category", category);
            }
        }

        Ok(url)
    }

    /// Normalize an HTTP response into a typed result
    ///
    /// Error statuses surface the server's `error` field when the body
    /// carries one, falling back to a generic message with the status code.
    /// A 204 response or an empty body yields `None` without a parse
    /// attempt; any other body is deserialized into `T`.
    async fn handle_response<T>(&self, response: reqwest::Response) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("Error response ({}): {}", status, body);
            return Err(Error::from_error_body(status.as_u16(), &body));
        }

        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Ok(None);
        }

        tracing::debug!("Response body: {}", body);
        let data = serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!("JSON parse error: {} - Body: {}", e, body);
            Error::from(e)
        })?;

        Ok(Some(data))
    }
}

/// Builder for configuring an [`ExpenseClient`]
#[derive(Debug)]
pub struct ExpenseClientBuilder {
    base_url: String,
    http_client: Option<reqwest::Client>,
}

impl ExpenseClientBuilder {
    /// Create a builder for the given base URL
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http_client: None,
        }
    }

    /// Use a preconfigured `reqwest::Client` (custom timeouts, proxy, etc.)
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the expense client
    pub fn build(self) -> ExpenseClient {
        ExpenseClient {
            base_url: self.base_url,
            http_client: self.http_client.unwrap_or_default(),
        }
    }
}
