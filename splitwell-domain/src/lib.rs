#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{AllocationContext, MemberId, Money, RemainderPolicy, Share, ShareKind};
pub use services::{
    dedup_by_member, equal_allowed_given_percentages, fixed_sum, fixed_within_total,
    has_duplicate_members, percent_sum_is_exactly_100, percentage_sum, remainder_after_fixed,
    resolve_equal_shares, resolve_percentage_shares, resolve_shares, resolved_sum,
    resolved_sum_within_total, share_count_within_group, sum_by_kind, ShareValidation,
};
