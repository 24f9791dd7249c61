use crate::{
    error::SubmitError,
    model::{ExpenseDraft, ExpenseReview},
    ports::ExpenseGateway,
    wire::CreateExpenseRequest,
};
use splitwell_domain::{resolve_shares, AllocationContext, ShareValidation};

/// Drives the review-and-submit flow for one expense form.
///
/// `review` is pure and cheap; the caller re-runs it on every edit. `submit`
/// re-reviews, refuses while any gate fails, and otherwise performs a single
/// request through the gateway.
#[derive(Clone, Copy)]
pub struct ExpenseProcessor<'a> {
    gateway: &'a dyn ExpenseGateway,
    context: AllocationContext,
}

impl<'a> ExpenseProcessor<'a> {
    pub fn new(gateway: &'a dyn ExpenseGateway) -> Self {
        Self::with_context(gateway, AllocationContext::standard())
    }

    pub fn with_context(gateway: &'a dyn ExpenseGateway, context: AllocationContext) -> Self {
        Self { gateway, context }
    }

    pub fn context(&self) -> AllocationContext {
        self.context
    }

    /// Resolves the draft's shares and evaluates every submission gate.
    pub fn review(&self, draft: &ExpenseDraft) -> ExpenseReview {
        let resolved = resolve_shares(draft.total, self.context, draft.shares.clone());
        let validation = ShareValidation::evaluate(
            draft.total,
            self.context,
            draft.group_member_count,
            &draft.shares,
            &resolved,
        );

        ExpenseReview {
            resolved,
            validation,
            has_payer: draft.paid_by.is_some(),
        }
    }

    /// Submits the draft if every gate passes. The request is sent once; a
    /// backend rejection is returned as-is, with no retry and no rollback.
    pub async fn submit(&self, draft: &ExpenseDraft) -> Result<(), SubmitError> {
        let review = self.review(draft);
        if !review.is_submittable() {
            tracing::info!(
                group_id = %draft.group_id,
                gates = ?review.validation,
                has_payer = review.has_payer,
                "expense submission blocked by validation"
            );
            return Err(SubmitError::Blocked(review));
        }

        let request = match draft.paid_by.as_ref() {
            Some(paid_by) => {
                CreateExpenseRequest::from_draft(draft, paid_by, self.context, &review.resolved)
            }
            None => return Err(SubmitError::Blocked(review)),
        };

        self.gateway.create_expense(&request).await?;
        tracing::debug!(
            group_id = %draft.group_id,
            share_count = request.shares.len(),
            "expense submitted"
        );
        Ok(())
    }
}
