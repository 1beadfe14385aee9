//! In-memory order transport for testing and demos.

use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use crate::application::ports::{
    OrderTransportPort, SubmitOrderRequest, TransportAck, TransportError,
};
use crate::domain::shared::VenueOrderId;

/// Records every submission and acknowledges it, unless a failure was
/// scripted for the next call.
///
/// Suitable for testing and development. Not for production use.
#[derive(Debug, Default)]
pub struct InMemoryOrderTransport {
    submitted: RwLock<Vec<SubmitOrderRequest>>,
    scripted_failures: RwLock<VecDeque<TransportError>>,
}

impl InMemoryOrderTransport {
    /// Create a new transport with no submissions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next submission with `error`.
    ///
    /// Failures queue up and are consumed one per call.
    pub fn fail_next(&self, error: TransportError) {
        self.scripted_failures
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(error);
    }

    /// Requests accepted so far, oldest first.
    #[must_use]
    pub fn submitted(&self) -> Vec<SubmitOrderRequest> {
        self.submitted
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of accepted requests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.submitted
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if nothing was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget all submissions and scripted failures.
    pub fn clear(&self) {
        self.submitted
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.scripted_failures
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[async_trait]
impl OrderTransportPort for InMemoryOrderTransport {
    async fn submit_order(
        &self,
        request: SubmitOrderRequest,
    ) -> Result<TransportAck, TransportError> {
        let failure = self
            .scripted_failures
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        if let Some(error) = failure {
            return Err(error);
        }

        let mut submitted = self
            .submitted
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let ack = TransportAck {
            venue_order_id: VenueOrderId::new(format!("mem-{}", submitted.len() + 1)),
            client_order_id: request.client_order_id.clone(),
            accepted_at: Utc::now(),
        };
        submitted.push(request);
        Ok(ack)
    }
}
