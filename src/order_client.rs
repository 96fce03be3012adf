use reqwest::{Client, StatusCode};

use crate::domain::{OrderId, OrderRecord};
use crate::util::error_chain_fmt;

pub const ORDERS_PATH: &str = "/api/v1/orders";

#[derive(Clone, Debug)]
pub struct OrderClient {
    http_client: Client,
    base_url: String,
}

impl OrderClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn order_url(&self, order_id: &OrderId) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            ORDERS_PATH,
            order_id.percent_encoded()
        )
    }

    /// One GET against the order service. No retries, no deadline.
    #[tracing::instrument(name = "Fetch order", skip(self, order_id), fields(order_id = %order_id))]
    pub async fn fetch_order(&self, order_id: &OrderId) -> Result<OrderRecord, LookupError> {
        let response = self
            .http_client
            .get(self.order_url(order_id))
            .send()
            .await
            .map_err(LookupError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(LookupError::Transport)?;

        if !status.is_success() {
            return Err(LookupError::Rejected { status, body });
        }

        OrderRecord::parse(&body).map_err(LookupError::MalformedBody)
    }
}

#[derive(thiserror::Error)]
pub enum LookupError {
    #[error("Failed to reach the order service")]
    Transport(#[source] reqwest::Error),
    #[error("The order service answered {status}")]
    Rejected { status: StatusCode, body: String },
    #[error("The order service returned invalid JSON")]
    MalformedBody(#[source] serde_json::Error),
}

impl std::fmt::Debug for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
