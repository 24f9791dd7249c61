use crate::{error::GatewayError, wire::CreateExpenseRequest};
use async_trait::async_trait;

/// Outbound port to the expense backend.
///
/// One call per user action: fire-and-forget, no retry. Implementations
/// translate transport details into `GatewayError`.
#[async_trait]
pub trait ExpenseGateway: Send + Sync {
    async fn create_expense(&self, request: &CreateExpenseRequest) -> Result<(), GatewayError>;
}
