//! Wire model for the expense backend: the body of `POST /api/expenses`.
//!
//! Amounts cross the wire as JSON numbers. The expense total is rounded to
//! the cash scale; per-share amounts keep the scale the resolution pipeline
//! gave them (equal splits carry one extra decimal, closed out server-side).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use splitwell_domain::{AllocationContext, MemberId, Share, ShareKind};

use crate::model::ExpenseDraft;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub group_id: String,
    pub paid_by_id: String,
    pub shares: Vec<SharePayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    pub user_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: ShareKind,
}

impl From<&Share> for SharePayload {
    fn from(share: &Share) -> Self {
        Self {
            user_id: share.member.as_str().to_owned(),
            amount: share.amount.as_decimal(),
            kind: share.kind,
        }
    }
}

impl CreateExpenseRequest {
    /// Builds the request body from a draft and its resolved breakdown.
    pub fn from_draft(
        draft: &ExpenseDraft,
        paid_by: &MemberId,
        context: AllocationContext,
        resolved: &[Share],
    ) -> Self {
        Self {
            amount: draft.total.round_to(context.cash_scale).as_decimal(),
            group_id: draft.group_id.clone(),
            paid_by_id: paid_by.as_str().to_owned(),
            shares: resolved.iter().map(SharePayload::from).collect(),
            description: draft.description.clone(),
            currency: draft.currency.clone(),
            notes: draft.notes.clone(),
            date: draft.date,
            location: draft.location.clone(),
        }
    }
}
