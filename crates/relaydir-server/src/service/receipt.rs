//! App Store receipt verification passthrough.
//!
//! The raw receipt bytes are base64-encoded and posted to the production
//! verification endpoint. Status 0 accepts; status 21007 means the receipt
//! came from the sandbox environment and is retried once against the
//! sandbox endpoint; anything else is a rejection carrying the upstream
//! status. A transport or decoding failure talking to the App Store is an
//! unclassified internal error; only the relay feed fetch reports an
//! upstream outage.

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;

const STATUS_OK: i64 = 0;
const STATUS_SANDBOX_RECEIPT: i64 = 21007;

#[derive(Debug, Serialize)]
struct VerifyRequest {
    #[serde(rename = "receipt-data")]
    receipt_data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    status: i64,
}

#[derive(Clone)]
pub struct ReceiptVerifier {
    http: reqwest::Client,
    production_url: String,
    sandbox_url: String,
    shared_secret: Option<String>,
}

impl ReceiptVerifier {
    pub fn new(
        production_url: String,
        sandbox_url: String,
        shared_secret: Option<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Unknown(e.to_string()))?;
        Ok(Self {
            http,
            production_url,
            sandbox_url,
            shared_secret,
        })
    }

    /// Verifies raw receipt bytes against the App Store.
    pub async fn verify(&self, receipt_data: &[u8]) -> Result<(), AppError> {
        let payload = VerifyRequest {
            receipt_data: BASE64.encode(receipt_data),
            password: self.shared_secret.clone(),
        };

        let status = self.post(&self.production_url, &payload).await?;
        let status = if status == STATUS_SANDBOX_RECEIPT {
            debug!("production endpoint reported a sandbox receipt, retrying");
            self.post(&self.sandbox_url, &payload).await?
        } else {
            status
        };

        if status == STATUS_OK {
            Ok(())
        } else {
            Err(AppError::ReceiptRejected(status))
        }
    }

    async fn post(&self, url: &str, payload: &VerifyRequest) -> Result<i64, AppError> {
        let response = self
            .http
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::Unknown(e.to_string()))?;
        let body: VerifyResponse = response
            .json()
            .await
            .map_err(|e| AppError::Unknown(e.to_string()))?;
        Ok(body.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on port 1, so the connection is refused immediately.
    fn unreachable_verifier() -> ReceiptVerifier {
        ReceiptVerifier::new(
            "http://127.0.0.1:1/verifyReceipt".to_string(),
            "http://127.0.0.1:1/verifyReceipt".to_string(),
            None,
            Duration::from_secs(1),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn transport_failure_is_classified_as_unknown() {
        let err = unreachable_verifier().verify(b"receipt").await.unwrap_err();
        assert!(matches!(err, AppError::Unknown(_)), "got {err:?}");
    }
}
