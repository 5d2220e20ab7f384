//! Remote data gateway for the finance API.
//!
//! Every operation degrades to a safe value instead of returning an error:
//! listing yields an empty vec, the summary yields zeros, and create/delete
//! yield `None` as their failure sentinel. The cause of a failure (transport,
//! HTTP status, or an unexpected body) only survives in the log.

use crate::models::{DeleteAck, Summary, Transaction, TransactionDraft, TransactionId};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        })
    }
}

/// A request relative to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Delete,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    /// Full URL against `base_url`, query included.
    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!("{}{}", base_url.trim_end_matches('/'), self.path);
        for (i, (key, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced an HTTP response
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// Why a gateway call failed; logged, never returned to callers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("HTTP error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Shape(String),
}

/// Sends requests to the finance API. Implemented with gloo-net in the
/// browser and with scripted responses in tests.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

pub struct FinanceGateway<T> {
    transport: T,
}

impl<T: HttpTransport> FinanceGateway<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// All transactions, or only those attributed to `date`. Empty on failure.
    pub async fn list_transactions(&self, date: Option<NaiveDate>) -> Vec<Transaction> {
        let mut request = ApiRequest::get("/transactions");
        if let Some(date) = date {
            request = request.with_query("date", date.format("%Y-%m-%d").to_string());
        }

        match self.request_as::<Vec<Transaction>>(request).await {
            Ok(transactions) => {
                log::debug!("Fetched {} transactions", transactions.len());
                transactions
            }
            Err(e) => {
                log::error!("Error fetching transactions: {}", e);
                Vec::new()
            }
        }
    }

    /// Store a draft. `None` unless the backend answered with an id.
    pub async fn create_transaction(&self, draft: &TransactionDraft) -> Option<Transaction> {
        match self.try_create(draft).await {
            Ok(transaction) => {
                log::info!("Created transaction {}", transaction.id);
                Some(transaction)
            }
            Err(e) => {
                log::error!("Error adding transaction: {}", e);
                None
            }
        }
    }

    /// Remove a transaction. `None` unless the backend explicitly acknowledged it.
    pub async fn delete_transaction(&self, id: &TransactionId) -> Option<DeleteAck> {
        let path = format!("/transactions/{}", urlencoding::encode(id.as_str()));
        let request = ApiRequest::delete(path);
        let result = self
            .request_as::<DeleteAck>(request)
            .await
            .and_then(|ack| {
                if ack.ok {
                    Ok(ack)
                } else {
                    Err(GatewayError::Shape("delete was not acknowledged".to_string()))
                }
            });

        match result {
            Ok(ack) => {
                log::info!("Deleted transaction {}", id);
                Some(ack)
            }
            Err(e) => {
                log::error!("Error deleting transaction {}: {}", id, e);
                None
            }
        }
    }

    /// Totals for `date`; zeros when the summary can't be fetched.
    pub async fn fetch_summary(&self, date: NaiveDate) -> Summary {
        let request =
            ApiRequest::get("/summary").with_query("date", date.format("%Y-%m-%d").to_string());

        match self.request_as::<Summary>(request).await {
            Ok(summary) => summary,
            Err(e) => {
                log::error!("Error fetching summary for {}: {}", date, e);
                Summary::default()
            }
        }
    }

    async fn try_create(&self, draft: &TransactionDraft) -> Result<Transaction, GatewayError> {
        let body = serde_json::to_value(draft).map_err(|e| TransportError::Encode(e.to_string()))?;
        let value = self.request_json(ApiRequest::post("/transactions", body)).await?;

        let id = match value.get("id") {
            Some(id) if !id.is_null() => serde_json::from_value::<TransactionId>(id.clone())
                .map_err(|e| GatewayError::Shape(format!("invalid id: {}", e)))?,
            _ => return Err(GatewayError::Shape("response has no id".to_string())),
        };

        // Some backends only echo the id; fill in the rest from what was sent.
        match serde_json::from_value::<Transaction>(value) {
            Ok(transaction) => Ok(transaction),
            Err(_) => Ok(draft.clone().into_transaction(id)),
        }
    }

    async fn request_as<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<R, GatewayError> {
        let value = self.request_json(request).await?;
        serde_json::from_value(value).map_err(|e| GatewayError::Shape(e.to_string()))
    }

    async fn request_json(&self, request: ApiRequest) -> Result<Value, GatewayError> {
        log::debug!("{} {}", request.method, request.url(""));
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            return Err(GatewayError::Status {
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| GatewayError::Shape(e.to_string()))
    }
}
