//! Share resolution: turns a set of heterogeneous share declarations into a
//! concrete monetary breakdown of the expense total.
//!
//! Fixed amounts are committed first; the remainder (total minus fixed) is the
//! base both the percentage pass and the equal pass allocate against. Rounding
//! slack from an inexact even split is assigned to one designated share per
//! `RemainderPolicy`, so the equal subset sums exactly to the remainder.
//!
//! Every function here is total: infeasible inputs produce a best-effort
//! breakdown and the validation predicates block submission instead.

use crate::model::{AllocationContext, Money, RemainderPolicy, Share, ShareKind};
use fxhash::FxHashSet;
use rust_decimal::Decimal;

/// Sum of declared stakes over shares of one kind.
pub fn sum_by_kind(shares: &[Share], kind: ShareKind) -> Decimal {
    shares
        .iter()
        .filter(|share| share.kind == kind)
        .map(|share| share.declared)
        .sum()
}

/// Committed currency amount across fixed shares.
pub fn fixed_sum(shares: &[Share]) -> Money {
    Money::from_decimal(sum_by_kind(shares, ShareKind::Fixed))
}

/// Declared percentage points across percentage shares.
pub fn percentage_sum(shares: &[Share]) -> Decimal {
    sum_by_kind(shares, ShareKind::Percentage)
}

/// Sum of engine-computed amounts across all shares.
pub fn resolved_sum(shares: &[Share]) -> Money {
    shares.iter().map(|share| share.amount).sum()
}

/// The base that percentage and equal shares are computed from.
pub fn remainder_after_fixed(total: Money, shares: &[Share]) -> Money {
    total - fixed_sum(shares)
}

/// Keeps the first share per member, dropping later duplicates.
pub fn dedup_by_member(shares: Vec<Share>) -> Vec<Share> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    shares
        .into_iter()
        .filter(|share| seen.insert(share.member.as_str().to_owned()))
        .collect()
}

/// Resolves every percentage share against the fixed-free remainder.
///
/// Amounts are recomputed from the declared percentage points, so calling
/// this again on an already-resolved list yields the same values. Shares of
/// other kinds pass through untouched.
pub fn resolve_percentage_shares(total: Money, context: AllocationContext, shares: &mut [Share]) {
    let remainder = remainder_after_fixed(total, shares);
    for share in shares
        .iter_mut()
        .filter(|share| share.kind == ShareKind::Percentage)
    {
        let fraction = share.declared / Decimal::ONE_HUNDRED;
        share.amount = (remainder * fraction).round_to(context.cash_scale);
    }
}

/// Splits the fixed-free remainder evenly across all equal shares.
///
/// Each share gets the rounded even quotient; the discrepancy between the
/// remainder and the sum of rounded quotients goes to the share designated by
/// the context's `RemainderPolicy`, which keeps the equal subset summing
/// exactly to the remainder.
pub fn resolve_equal_shares(total: Money, context: AllocationContext, shares: &mut [Share]) {
    let remainder = remainder_after_fixed(total, shares);
    let count = shares
        .iter()
        .filter(|share| share.kind == ShareKind::Equal)
        .count();
    if count == 0 {
        return;
    }

    let base = (remainder / Decimal::from(count)).round_to(context.cash_scale);
    let mut last_equal = None;
    for (idx, share) in shares
        .iter_mut()
        .enumerate()
        .filter(|(_, share)| share.kind == ShareKind::Equal)
    {
        share.amount = base;
        last_equal = Some(idx);
    }

    let slack = remainder - base * Decimal::from(count);
    if slack.is_zero() {
        return;
    }

    match context.remainder_policy {
        RemainderPolicy::LastShareAbsorbs => {
            if let Some(idx) = last_equal {
                shares[idx].amount = base + slack;
                tracing::debug!(
                    equal_count = count,
                    remainder = %remainder,
                    base = %base,
                    slack = %slack,
                    "even split left rounding slack, assigned to last equal share"
                );
            }
        }
    }
}

/// The combined resolution pipeline the caller re-runs on every edit.
///
/// De-duplicates by member, re-commits fixed amounts from their declared
/// values, resolves percentage shares (when present) and equal shares (when
/// present), then re-rounds each amount to its kind's scale.
pub fn resolve_shares(total: Money, context: AllocationContext, shares: Vec<Share>) -> Vec<Share> {
    let mut shares = dedup_by_member(shares);

    for share in shares
        .iter_mut()
        .filter(|share| share.kind == ShareKind::Fixed)
    {
        share.amount = Money::from_decimal(share.declared);
    }

    if shares
        .iter()
        .any(|share| share.kind == ShareKind::Percentage)
    {
        resolve_percentage_shares(total, context, &mut shares);
    }
    if shares.iter().any(|share| share.kind == ShareKind::Equal) {
        resolve_equal_shares(total, context, &mut shares);
    }

    for share in &mut shares {
        let scale = match share.kind {
            ShareKind::Equal => context.equal_scale,
            ShareKind::Fixed | ShareKind::Percentage => context.cash_scale,
        };
        share.amount = share.amount.round_to(scale);
    }

    shares
}
