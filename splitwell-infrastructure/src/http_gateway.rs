//! `ExpenseGateway` over the backend REST API.
//!
//! One `POST /api/expenses` per submission, no retry. A non-success status is
//! mapped to `GatewayError::Rejected` with whatever message can be pulled out
//! of the response body; the body may be absent, non-JSON, or JSON without a
//! message field.

use crate::config::ApiConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use splitwell_application::{CreateExpenseRequest, ExpenseGateway, GatewayError};

pub struct HttpExpenseGateway {
    client: Client,
    base_url: String,
}

impl HttpExpenseGateway {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config.base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/expenses", self.base_url.trim_end_matches('/'))
    }
}

fn extract_error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => {
            for key in ["message", "error"] {
                if let Some(message) = value.get(key).and_then(|field| field.as_str()) {
                    if !message.is_empty() {
                        return message.to_owned();
                    }
                }
            }
            // JSON without a usable message field; the raw blob would only
            // confuse the user.
        }
        Err(_) => {
            let trimmed = body.trim();
            if !trimmed.is_empty() {
                return trimmed.to_owned();
            }
        }
    }

    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_owned()
}

#[async_trait]
impl ExpenseGateway for HttpExpenseGateway {
    async fn create_expense(&self, request: &CreateExpenseRequest) -> Result<(), GatewayError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(request)
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "expense created");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(status, &body);
        tracing::warn!(
            status = status.as_u16(),
            message = %message,
            "expense creation rejected by backend"
        );

        Err(GatewayError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
