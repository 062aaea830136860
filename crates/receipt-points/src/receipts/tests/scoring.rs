use super::common::*;

use crate::receipts::scoring::{score, ScoringRule};
use crate::receipts::validation::validate;
use crate::receipts::Receipt;

fn points_for(receipt: &Receipt, rule: ScoringRule) -> u64 {
    score(receipt)
        .components
        .iter()
        .find(|component| component.rule == rule)
        .map(|component| component.points)
        .expect("rule applied")
}

#[test]
fn corner_store_scores_every_rule() {
    let breakdown = score(&corner_store_receipt());

    assert_eq!(
        breakdown.explanations(),
        vec![
            "11 points for retailer name (Corner Store)",
            "50 points for round dollar amount (3.00)",
            "25 points for being multiple of 0.25 (3.00)",
            "5 points for number of items (2)",
            "0 point(s) for item (Skittles | 1.50)",
            "0 point(s) for item (Skittles | 1.50)",
            "6 points for purchase day being odd (2024-12-11)",
            "10 points for time of purchase between 2pm and 4pm (15:05)",
        ]
    );
    // 91 from the first six lines, plus the odd day and afternoon window.
    assert_eq!(breakdown.total_points, 91 + 6 + 10);
}

#[test]
fn target_receipt_totals_twenty_eight() {
    let breakdown = score(&target_receipt());
    assert_eq!(breakdown.total_points, 28);
    assert_eq!(breakdown.components.len(), 5 + 6);
}

#[test]
fn market_receipt_totals_one_hundred_nine() {
    let breakdown = score(&market_receipt());
    assert_eq!(breakdown.total_points, 109);
}

#[test]
fn retailer_rule_counts_only_alphanumerics() {
    let mut receipt = corner_store_receipt();
    receipt.retailer = "Walgreens".to_string();
    assert_eq!(points_for(&receipt, ScoringRule::RetailerName), 9);

    receipt.retailer = "M&M Corner Market".to_string();
    assert_eq!(points_for(&receipt, ScoringRule::RetailerName), 14);

    receipt.retailer = "  -_- ".to_string();
    assert_eq!(points_for(&receipt, ScoringRule::RetailerName), 0);
}

#[test]
fn round_dollar_and_quarter_rules_are_independent() {
    let mut receipt = corner_store_receipt();

    receipt.total = "3.00".to_string();
    assert_eq!(points_for(&receipt, ScoringRule::RoundDollar), 50);
    assert_eq!(points_for(&receipt, ScoringRule::QuarterMultiple), 25);

    receipt.total = "3.25".to_string();
    assert_eq!(points_for(&receipt, ScoringRule::RoundDollar), 0);
    assert_eq!(points_for(&receipt, ScoringRule::QuarterMultiple), 25);

    receipt.total = "3.10".to_string();
    assert_eq!(points_for(&receipt, ScoringRule::RoundDollar), 0);
    assert_eq!(points_for(&receipt, ScoringRule::QuarterMultiple), 0);
}

#[test]
fn item_count_rewards_complete_pairs() {
    let mut receipt = corner_store_receipt();
    for (count, expected) in [(0, 0), (1, 0), (2, 5), (3, 5), (5, 10)] {
        receipt.items = vec![item("Skittles", "1.50"); count];
        assert_eq!(
            points_for(&receipt, ScoringRule::ItemCount),
            expected,
            "{count} items"
        );
    }
}

#[test]
fn description_rule_rounds_price_fifth_up() {
    let mut receipt = corner_store_receipt();
    receipt.items = vec![
        item("Skittles", "1.50"),
        item("Dasani", "1.40"),
        item("Emils Cheese Pizza", "12.25"),
        item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        item("Ice", "35.00"),
    ];

    let per_item: Vec<u64> = (0..receipt.items.len())
        .map(|index| points_for(&receipt, ScoringRule::ItemDescription { index }))
        .collect();

    assert_eq!(per_item, vec![0, 1, 3, 3, 7]);
}

#[test]
fn description_length_counts_characters_not_bytes() {
    let mut receipt = corner_store_receipt();
    receipt.items = vec![item("Café", "5.00")];
    assert_eq!(
        points_for(&receipt, ScoringRule::ItemDescription { index: 0 }),
        0
    );

    receipt.items = vec![item("Crème", "5.00")];
    assert_eq!(
        points_for(&receipt, ScoringRule::ItemDescription { index: 0 }),
        0
    );

    receipt.items = vec![item("Crèmes", "5.00")];
    assert_eq!(
        points_for(&receipt, ScoringRule::ItemDescription { index: 0 }),
        1
    );
}

#[test]
fn odd_day_rule() {
    let mut receipt = corner_store_receipt();
    receipt.purchase_date = "2024-12-11".to_string();
    assert_eq!(points_for(&receipt, ScoringRule::OddDay), 6);

    receipt.purchase_date = "2024-12-12".to_string();
    assert_eq!(points_for(&receipt, ScoringRule::OddDay), 0);
}

#[test]
fn afternoon_window_excludes_both_ends() {
    let mut receipt = corner_store_receipt();
    for (time, expected) in [
        ("14:00", 0),
        ("14:01", 10),
        ("15:00", 10),
        ("15:59", 10),
        ("16:00", 0),
        ("11:05", 0),
        ("17:05", 0),
    ] {
        receipt.purchase_time = time.to_string();
        assert_eq!(
            points_for(&receipt, ScoringRule::AfternoonWindow),
            expected,
            "purchase at {time}"
        );
    }
}

#[test]
fn breakdown_has_six_lines_plus_one_per_item() {
    for receipt in [corner_store_receipt(), target_receipt(), market_receipt()] {
        assert!(validate(&receipt).is_ok());
        let breakdown = score(&receipt);
        assert_eq!(breakdown.components.len(), receipt.items.len() + 6);
    }

    let mut empty = corner_store_receipt();
    empty.items.clear();
    empty.total = "0.00".to_string();
    assert_eq!(score(&empty).components.len(), 6);
}

#[test]
fn scoring_is_repeatable() {
    let receipt = target_receipt();
    assert_eq!(score(&receipt), score(&receipt));
}

#[test]
fn total_line_is_appended_for_display() {
    let lines = score(&corner_store_receipt()).explanations_with_total();
    assert_eq!(lines.len(), 2 + 6 + 1);
    assert_eq!(lines.last().map(String::as_str), Some("107 points total"));
}

#[test]
fn unvalidated_receipt_scores_unreadable_parts_as_zero() {
    let receipt = Receipt {
        retailer: "Shop".to_string(),
        purchase_date: "2024-02-31".to_string(),
        purchase_time: "noon".to_string(),
        items: vec![item("abc", "n/a")],
        total: "free".to_string(),
    };

    let breakdown = score(&receipt);
    assert_eq!(breakdown.components.len(), 7);
    assert_eq!(breakdown.total_points, 4);
}

#[test]
fn unvalidated_receipt_with_huge_prices_saturates_total() {
    let receipt = Receipt {
        retailer: "Shop".to_string(),
        items: vec![item("abc", "18446744073709551615.99"); 6],
        ..Receipt::default()
    };

    let breakdown = score(&receipt);
    assert_eq!(breakdown.components.len(), 6 + 6);
    assert_eq!(breakdown.total_points, u64::MAX);
}
