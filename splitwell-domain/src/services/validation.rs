//! Submission gates over a share declaration set.
//!
//! Infeasible declaration sets are never an error inside the engine; each
//! predicate simply evaluates to false and the caller keeps the expense from
//! being submitted. All predicates work on the declared list except
//! `resolved_sum_within_total`, which inspects the resolved amounts.

use crate::model::{AllocationContext, Money, Share, ShareKind};
use crate::services::allocation::{fixed_sum, percentage_sum, resolved_sum};
use fxhash::FxHashSet;
use rust_decimal::{Decimal, RoundingStrategy};

/// True when no percentage shares exist, or their declared points sum to
/// exactly 100 after rounding to the nearest integer.
pub fn percent_sum_is_exactly_100(shares: &[Share]) -> bool {
    if !shares
        .iter()
        .any(|share| share.kind == ShareKind::Percentage)
    {
        return true;
    }
    let sum = percentage_sum(shares)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    sum == Decimal::ONE_HUNDRED
}

/// Equal splits are incompatible with percentage shares in the same expense.
pub fn equal_allowed_given_percentages(shares: &[Share]) -> bool {
    !shares
        .iter()
        .any(|share| share.kind == ShareKind::Percentage)
}

/// Committed fixed amounts may never exceed the rounded total.
pub fn fixed_within_total(total: Money, context: AllocationContext, shares: &[Share]) -> bool {
    fixed_sum(shares) <= total.round_to(context.cash_scale)
}

/// True when any member appears more than once in the declaration set.
pub fn has_duplicate_members(shares: &[Share]) -> bool {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    shares.iter().any(|share| !seen.insert(share.member.as_str()))
}

/// An expense cannot carry more shares than the owning group has members.
pub fn share_count_within_group(group_member_count: usize, shares: &[Share]) -> bool {
    shares.len() <= group_member_count
}

/// The rounded sum of resolved amounts must stay at or under the rounded
/// total. Exact equality is the target; a slight undershoot from rounding is
/// tolerated.
pub fn resolved_sum_within_total(
    total: Money,
    context: AllocationContext,
    resolved: &[Share],
) -> bool {
    resolved_sum(resolved).round_to(context.cash_scale) <= total.round_to(context.cash_scale)
}

/// Result of evaluating every submission gate. Flags are stored in their
/// passing direction so submittability is a plain conjunction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShareValidation {
    pub percent_sum_is_exactly_100: bool,
    pub equal_allowed_given_percentages: bool,
    pub fixed_within_total: bool,
    pub no_duplicate_members: bool,
    pub share_count_within_group: bool,
    pub resolved_sum_within_total: bool,
}

impl ShareValidation {
    /// Evaluates every gate; `declared` is the caller's working list and
    /// `resolved` the output of the resolution pipeline for the same list.
    pub fn evaluate(
        total: Money,
        context: AllocationContext,
        group_member_count: usize,
        declared: &[Share],
        resolved: &[Share],
    ) -> Self {
        // The coexistence rule only bites when an equal share is present; a
        // percentage-only expense must still pass the conjunction.
        let has_equal = declared.iter().any(|share| share.kind == ShareKind::Equal);
        let validation = Self {
            percent_sum_is_exactly_100: percent_sum_is_exactly_100(declared),
            equal_allowed_given_percentages: !has_equal
                || equal_allowed_given_percentages(declared),
            fixed_within_total: fixed_within_total(total, context, declared),
            no_duplicate_members: !has_duplicate_members(declared),
            share_count_within_group: share_count_within_group(group_member_count, declared),
            resolved_sum_within_total: resolved_sum_within_total(total, context, resolved),
        };

        if !validation.all_pass() {
            tracing::debug!(
                share_count = declared.len(),
                total = %total,
                gates = ?validation,
                "share declarations failed one or more submission gates"
            );
        }

        validation
    }

    pub fn all_pass(&self) -> bool {
        self.percent_sum_is_exactly_100
            && self.equal_allowed_given_percentages
            && self.fixed_within_total
            && self.no_duplicate_members
            && self.share_count_within_group
            && self.resolved_sum_within_total
    }

    /// Submission additionally requires a designated payer.
    pub fn is_submittable(&self, has_payer: bool) -> bool {
        has_payer && self.all_pass()
    }
}
