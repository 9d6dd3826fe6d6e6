//! Payment service - takes payments through the gateway port.

use std::sync::Arc;

use crate::domain::{NewPayment, Payment, PaymentRequest, PaymentStatus};
use crate::events::AppEvent;
use crate::ports::{
    AppEventEmitter, CoreError, GatewayError, PaymentGatewayPort, PaymentRepository,
    RepositoryError,
};

/// Longest accepted idempotency key.
const MAX_IDEMPOTENCY_KEY_LEN: usize = 128;

pub struct PaymentService {
    payments: Arc<dyn PaymentRepository>,
    gateway: Arc<dyn PaymentGatewayPort>,
    emitter: Arc<dyn AppEventEmitter>,
}

impl PaymentService {
    pub fn new(
        payments: Arc<dyn PaymentRepository>,
        gateway: Arc<dyn PaymentGatewayPort>,
        emitter: Arc<dyn AppEventEmitter>,
    ) -> Self {
        Self {
            payments,
            gateway,
            emitter,
        }
    }

    /// Take a payment.
    ///
    /// A repeated idempotency key returns the payment recorded the first
    /// time without contacting the gateway. Declined payments are recorded;
    /// an unreachable gateway records nothing.
    pub async fn process_payment(&self, request: PaymentRequest) -> Result<Payment, CoreError> {
        if request.amount.is_zero() {
            return Err(CoreError::Validation(
                "Payment amount must be greater than zero".to_string(),
            ));
        }
        let request = PaymentRequest {
            idempotency_key: normalize_key(request.idempotency_key)?,
            ..request
        };

        if let Some(ref key) = request.idempotency_key {
            if let Some(existing) = self.payments.find_by_idempotency_key(key).await? {
                tracing::debug!(
                    target: "tillpoint.payments",
                    payment_id = existing.id,
                    "Replayed idempotent payment"
                );
                return Ok(existing);
            }
        }

        let (status, gateway_reference) = match self.gateway.authorize(&request).await {
            Ok(outcome) if outcome.approved => (PaymentStatus::Approved, outcome.reference),
            Ok(outcome) => (PaymentStatus::Declined, outcome.reference),
            Err(GatewayError::Rejected { reference, reason }) => {
                tracing::warn!(
                    target: "tillpoint.payments",
                    gateway = self.gateway.name(),
                    %reason,
                    "Payment rejected"
                );
                (PaymentStatus::Declined, reference)
            }
            Err(e @ GatewayError::Unavailable(_)) => {
                tracing::error!(
                    target: "tillpoint.payments",
                    gateway = self.gateway.name(),
                    error = %e,
                    "Payment gateway unavailable"
                );
                return Err(CoreError::ExternalService(e.to_string()));
            }
        };

        let new_payment = NewPayment {
            amount: request.amount,
            method: request.method,
            status,
            gateway_reference,
            idempotency_key: request.idempotency_key.clone(),
        };

        let payment = match self.payments.insert(&new_payment).await {
            Ok(payment) => payment,
            // A concurrent request with the same key won the insert.
            Err(RepositoryError::AlreadyExists(_)) if request.idempotency_key.is_some() => {
                let key = request.idempotency_key.as_deref().unwrap_or_default();
                return self
                    .payments
                    .find_by_idempotency_key(key)
                    .await?
                    .ok_or_else(|| {
                        CoreError::Internal(format!("payment with key {key} vanished"))
                    });
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            target: "tillpoint.payments",
            payment_id = payment.id,
            amount = %payment.amount,
            method = %payment.method,
            status = %payment.status,
            gateway = self.gateway.name(),
            "Payment processed"
        );
        self.emitter.emit(AppEvent::payment_completed(&payment));
        Ok(payment)
    }

    pub async fn get(&self, id: i64) -> Result<Payment, CoreError> {
        self.payments.get_by_id(id).await.map_err(CoreError::from)
    }

    pub async fn list(&self) -> Result<Vec<Payment>, CoreError> {
        self.payments.list().await.map_err(CoreError::from)
    }
}

fn normalize_key(key: Option<String>) -> Result<Option<String>, CoreError> {
    match key {
        None => Ok(None),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(CoreError::Validation(
                    "Idempotency key cannot be empty".to_string(),
                ));
            }
            if trimmed.len() > MAX_IDEMPOTENCY_KEY_LEN {
                return Err(CoreError::Validation(format!(
                    "Idempotency key must be at most {MAX_IDEMPOTENCY_KEY_LEN} bytes"
                )));
            }
            Ok(Some(trimmed.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Money, PaymentMethod};
    use crate::ports::GatewayOutcome;
    use crate::ports::payment_gateway::MockPaymentGatewayPort;
    use crate::services::test_support::{MemoryStore, RecordingEmitter};

    fn amount(text: &str) -> Money {
        text.parse().unwrap()
    }

    fn gateway_returning(
        result: Result<GatewayOutcome, GatewayError>,
        times: usize,
    ) -> MockPaymentGatewayPort {
        let mut gateway = MockPaymentGatewayPort::new();
        gateway.expect_name().return_const("mock");
        gateway
            .expect_authorize()
            .times(times)
            .returning(move |_| result.clone());
        gateway
    }

    fn approved() -> Result<GatewayOutcome, GatewayError> {
        Ok(GatewayOutcome {
            approved: true,
            reference: "ref-1".to_string(),
        })
    }

    #[tokio::test]
    async fn approved_payment_is_recorded_and_emitted() {
        let store = MemoryStore::new();
        let emitter = RecordingEmitter::new();
        let service = PaymentService::new(
            store.clone(),
            Arc::new(gateway_returning(approved(), 1)),
            emitter.clone(),
        );

        let payment = service
            .process_payment(PaymentRequest::cash(amount("9.75")))
            .await
            .unwrap();

        assert_eq!(payment.status, PaymentStatus::Approved);
        assert_eq!(payment.gateway_reference, "ref-1");
        assert_eq!(payment.method, PaymentMethod::Cash);
        assert_eq!(service.list().await.unwrap().len(), 1);
        assert!(matches!(
            emitter.events().as_slice(),
            [AppEvent::PaymentCompleted { .. }]
        ));
    }

    #[tokio::test]
    async fn zero_amount_never_reaches_gateway() {
        let store = MemoryStore::new();
        let service = PaymentService::new(
            store.clone(),
            Arc::new(gateway_returning(approved(), 0)),
            RecordingEmitter::new(),
        );

        let result = service.process_payment(PaymentRequest::cash(Money::ZERO)).await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn idempotency_key_replays_first_payment() {
        let store = MemoryStore::new();
        let service = PaymentService::new(
            store.clone(),
            Arc::new(gateway_returning(approved(), 1)),
            RecordingEmitter::new(),
        );

        let request = PaymentRequest::cash(amount("4.00")).with_idempotency_key("order-17");
        let first = service.process_payment(request.clone()).await.unwrap();
        let second = service
            .process_payment(request.with_idempotency_key(" order-17 "))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(store.payment_count(), 1);
    }

    #[tokio::test]
    async fn rejected_payment_is_recorded_as_declined() {
        let store = MemoryStore::new();
        let rejection = Err(GatewayError::Rejected {
            reference: "ref-9".to_string(),
            reason: "insufficient funds".to_string(),
        });
        let service = PaymentService::new(
            store.clone(),
            Arc::new(gateway_returning(rejection, 1)),
            RecordingEmitter::new(),
        );

        let payment = service
            .process_payment(PaymentRequest::cash(amount("12")))
            .await
            .unwrap();
        assert_eq!(payment.status, PaymentStatus::Declined);
        assert_eq!(payment.gateway_reference, "ref-9");
    }

    #[tokio::test]
    async fn unavailable_gateway_records_nothing() {
        let store = MemoryStore::new();
        let emitter = RecordingEmitter::new();
        let service = PaymentService::new(
            store.clone(),
            Arc::new(gateway_returning(
                Err(GatewayError::Unavailable("timeout".to_string())),
                1,
            )),
            emitter.clone(),
        );

        let result = service
            .process_payment(PaymentRequest::cash(amount("1.00")))
            .await;
        assert!(matches!(result, Err(CoreError::ExternalService(_))));
        assert_eq!(store.payment_count(), 0);
        assert!(emitter.events().is_empty());
    }

    #[tokio::test]
    async fn blank_idempotency_key_is_invalid() {
        let store = MemoryStore::new();
        let service = PaymentService::new(
            store,
            Arc::new(gateway_returning(approved(), 0)),
            RecordingEmitter::new(),
        );
        let result = service
            .process_payment(PaymentRequest::cash(amount("1")).with_idempotency_key("  "))
            .await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn losing_an_idempotency_race_returns_the_winner() {
        let store = MemoryStore::new();
        let emitter = RecordingEmitter::new();

        // The gateway call is where a concurrent request with the same key
        // gets to insert first
        let racing = store.clone();
        let mut gateway = MockPaymentGatewayPort::new();
        gateway.expect_name().return_const("mock");
        gateway.expect_authorize().times(1).returning(move |_| {
            racing
                .insert_payment(&NewPayment {
                    amount: "4.00".parse().unwrap(),
                    method: PaymentMethod::Card,
                    status: PaymentStatus::Approved,
                    gateway_reference: "ref-winner".to_string(),
                    idempotency_key: Some("order-21".to_string()),
                })
                .unwrap();
            approved()
        });
        let service = PaymentService::new(store.clone(), Arc::new(gateway), emitter.clone());

        let payment = service
            .process_payment(
                PaymentRequest::cash(amount("4.00")).with_idempotency_key("order-21"),
            )
            .await
            .unwrap();

        assert_eq!(payment.gateway_reference, "ref-winner");
        assert_eq!(payment.method, PaymentMethod::Card);
        assert_eq!(store.payment_count(), 1);
        assert!(emitter.events().is_empty());
    }
}
