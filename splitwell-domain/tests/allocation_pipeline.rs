use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use splitwell_domain::{
    resolve_shares, resolved_sum, AllocationContext, Money, Share, ShareValidation,
};
use std::str::FromStr;

fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).expect("valid decimal")
}

fn money(value: &str) -> Money {
    Money::from_decimal(dec(value))
}

fn assert_amounts(resolved: &[Share], expected: &[(&str, &str)]) {
    let actual: Vec<(&str, Decimal)> = resolved
        .iter()
        .map(|share| (share.member.as_str(), share.amount.as_decimal()))
        .collect();
    let expected: Vec<(&str, Decimal)> = expected
        .iter()
        .map(|(member, amount)| (*member, dec(amount)))
        .collect();
    assert_eq!(actual, expected);
}

fn review(
    total: Money,
    context: AllocationContext,
    group_member_count: usize,
    shares: Vec<Share>,
) -> (Vec<Share>, ShareValidation) {
    let resolved = resolve_shares(total, context, shares.clone());
    let validation =
        ShareValidation::evaluate(total, context, group_member_count, &shares, &resolved);
    (resolved, validation)
}

#[fixture]
fn context() -> AllocationContext {
    AllocationContext::standard()
}

#[rstest]
fn mixed_fixed_and_equal_expense_reconciles(context: AllocationContext) {
    let shares = vec![
        Share::fixed("alice", dec("25")),
        Share::equal("bob"),
        Share::equal("carol"),
        Share::equal("dave"),
    ];

    let (resolved, validation) = review(money("100"), context, 4, shares);

    // 75 remainder over three equal shares: 25 each, no slack.
    assert_amounts(
        &resolved,
        &[
            ("alice", "25.00"),
            ("bob", "25.000"),
            ("carol", "25.000"),
            ("dave", "25.000"),
        ],
    );
    assert_eq!(resolved_sum(&resolved), money("100"));
    assert!(validation.is_submittable(true));
}

#[rstest]
fn mixed_fixed_and_percentage_expense_uses_the_remainder(context: AllocationContext) {
    let shares = vec![
        Share::fixed("alice", dec("40")),
        Share::percentage("bob", dec("25")),
        Share::percentage("carol", dec("75")),
    ];

    let (resolved, validation) = review(money("100"), context, 3, shares);

    assert_amounts(
        &resolved,
        &[("alice", "40.00"), ("bob", "15.00"), ("carol", "45.00")],
    );
    assert_eq!(resolved_sum(&resolved), money("100"));
    assert!(validation.is_submittable(true));
}

#[rstest]
fn equal_slack_lands_on_the_last_participant(context: AllocationContext) {
    let shares = vec![
        Share::equal("alice"),
        Share::equal("bob"),
        Share::equal("carol"),
    ];

    let (resolved, validation) = review(money("10"), context, 3, shares);

    assert_amounts(
        &resolved,
        &[("alice", "3.330"), ("bob", "3.330"), ("carol", "3.340")],
    );
    assert_eq!(resolved_sum(&resolved), money("10"));
    assert!(validation.is_submittable(true));
}

#[rstest]
fn quarter_percentages_resolve_exactly(context: AllocationContext) {
    let shares = vec![
        Share::percentage("a", dec("25")),
        Share::percentage("b", dec("25")),
        Share::percentage("c", dec("25")),
        Share::percentage("d", dec("25")),
    ];

    let (resolved, validation) = review(money("100"), context, 4, shares);

    assert_amounts(
        &resolved,
        &[("a", "25.00"), ("b", "25.00"), ("c", "25.00"), ("d", "25.00")],
    );
    assert!(validation.percent_sum_is_exactly_100);
    assert!(validation.is_submittable(true));
}

#[rstest]
#[case::percentages_short_of_hundred(
    vec![Share::percentage("a", dec("45")), Share::percentage("b", dec("45"))],
)]
#[case::percentage_mixed_with_equal(
    vec![Share::percentage("a", dec("100")), Share::equal("b")],
)]
#[case::duplicate_participants(
    vec![Share::equal("a"), Share::equal("a")],
)]
#[case::fixed_exceeding_total(
    vec![Share::fixed("a", dec("60"))],
)]
fn infeasible_declarations_block_submission(
    context: AllocationContext,
    #[case] shares: Vec<Share>,
) {
    let (_, validation) = review(money("50"), context, 4, shares);
    assert!(!validation.is_submittable(true));
}

#[rstest]
fn duplicate_declarations_are_dropped_before_resolution(context: AllocationContext) {
    let shares = vec![
        Share::equal("alice"),
        Share::equal("alice"),
        Share::equal("bob"),
    ];

    let resolved = resolve_shares(money("30"), context, shares);

    assert_amounts(&resolved, &[("alice", "15.000"), ("bob", "15.000")]);
}

#[rstest]
fn pipeline_is_idempotent_across_mixed_kinds(context: AllocationContext) {
    let total = money("123.45");
    let shares = vec![
        Share::fixed("alice", dec("23.45")),
        Share::equal("bob"),
        Share::equal("carol"),
        Share::equal("dave"),
    ];

    let once = resolve_shares(total, context, shares);
    let twice = resolve_shares(total, context, once.clone());

    assert_eq!(once, twice);
    assert_eq!(resolved_sum(&twice), total);
}
