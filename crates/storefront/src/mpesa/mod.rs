//! M-Pesa STK push client.
//!
//! Issues a single fire-and-forget POST to the configured payment backend
//! with a hard cancellation deadline. There is no retry, no idempotency
//! key, and no queueing - at most one request is in flight per submission.
//!
//! The STK push itself is an opaque remote side effect: a 2xx response
//! means the provider will prompt the subscriber's phone, nothing more.

mod types;

pub use types::StkPushRequest;

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, instrument};

use duka_core::{PaymentAmount, PhoneNumber};

use crate::config::BackendConfig;

use types::StkPushErrorBody;

/// Path of the STK push endpoint, appended to the backend base URL.
pub const STK_PUSH_PATH: &str = "/api/mpesa/stk-push";

/// Errors that can occur when initiating a payment.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The hard deadline elapsed before the backend responded.
    #[error("payment request timed out")]
    Timeout,

    /// Network-level failure (connection, DNS, TLS).
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Backend rejected the request with a non-success status.
    ///
    /// `message` carries the backend's structured error message when the
    /// response body had one; `None` when the body was absent or unparseable.
    #[error("payment rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
}

impl From<reqwest::Error> for PaymentError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

// =============================================================================
// MpesaClient
// =============================================================================

/// Client for the payment backend's STK push endpoint.
#[derive(Clone)]
pub struct MpesaClient {
    inner: Arc<MpesaClientInner>,
}

struct MpesaClientInner {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl MpesaClient {
    /// Create a new payment client.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        // Plain concatenation: the endpoint path is appended to whatever
        // base the deployment configured, including any path prefix.
        let endpoint = format!(
            "{}{STK_PUSH_PATH}",
            config.base_url.as_str().trim_end_matches('/')
        );

        Self {
            inner: Arc::new(MpesaClientInner {
                client: reqwest::Client::new(),
                endpoint,
                timeout: config.payment_timeout,
            }),
        }
    }

    /// Initiate an STK push for the given phone number and amount.
    ///
    /// Resolves once the backend has accepted or rejected the request, or
    /// the deadline has elapsed. A success means the provider was asked to
    /// prompt the subscriber's phone; completion of the payment itself is
    /// out of band.
    ///
    /// # Errors
    ///
    /// - [`PaymentError::Timeout`] when the deadline elapses
    /// - [`PaymentError::Rejected`] on a non-success status, with the
    ///   backend's message when one was supplied
    /// - [`PaymentError::Http`] on any other network failure
    #[instrument(skip_all, fields(amount = %amount))]
    pub async fn initiate_stk_push(
        &self,
        phone: &PhoneNumber,
        amount: PaymentAmount,
    ) -> Result<(), PaymentError> {
        let body = StkPushRequest::new(phone, amount);

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .timeout(self.inner.timeout)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            debug!("STK push accepted by backend");
            return Ok(());
        }

        // Try to get a structured error message from the response body,
        // falling back to None if parsing fails.
        let message = response
            .json::<StkPushErrorBody>()
            .await
            .ok()
            .and_then(|b| b.message);

        Err(PaymentError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    /// The full endpoint URL this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }
}
