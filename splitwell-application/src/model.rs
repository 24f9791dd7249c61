use chrono::NaiveDate;
use splitwell_domain::{MemberId, Money, Share, ShareValidation};

/// Client-side working state for one expense being edited.
///
/// The caller mutates this freely between keystrokes; nothing here is
/// persisted. Only the resolved breakdown leaves the client, as part of the
/// expense-creation request.
#[derive(Clone, Debug, Default)]
pub struct ExpenseDraft {
    pub group_id: String,
    pub paid_by: Option<MemberId>,
    /// Member count of the owning group; bounds the share list.
    pub group_member_count: usize,
    pub total: Money,
    pub shares: Vec<Share>,
    pub description: Option<String>,
    pub currency: Option<String>,
    pub notes: Option<String>,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
}

/// Outcome of running the allocation pipeline and every submission gate
/// against a draft. Recomputed on every edit.
#[derive(Clone, Debug)]
pub struct ExpenseReview {
    pub resolved: Vec<Share>,
    pub validation: ShareValidation,
    pub has_payer: bool,
}

impl ExpenseReview {
    pub fn is_submittable(&self) -> bool {
        self.validation.is_submittable(self.has_payer)
    }

    /// Inline messages for every failed gate, in display order.
    pub fn blocking_messages(&self) -> Vec<&'static str> {
        let mut messages = Vec::new();
        if !self.validation.percent_sum_is_exactly_100 {
            messages.push(splitwell_i18n::PERCENT_SUM_NOT_100);
        }
        if !self.validation.equal_allowed_given_percentages {
            messages.push(splitwell_i18n::EQUAL_WITH_PERCENTAGES);
        }
        if !self.validation.fixed_within_total {
            messages.push(splitwell_i18n::FIXED_EXCEEDS_TOTAL);
        }
        if !self.validation.no_duplicate_members {
            messages.push(splitwell_i18n::DUPLICATE_PARTICIPANTS);
        }
        if !self.validation.share_count_within_group {
            messages.push(splitwell_i18n::TOO_MANY_PARTICIPANTS);
        }
        if !self.validation.resolved_sum_within_total {
            messages.push(splitwell_i18n::ALLOCATED_EXCEEDS_TOTAL);
        }
        if !self.has_payer {
            messages.push(splitwell_i18n::MISSING_PAYER);
        }
        messages
    }
}
