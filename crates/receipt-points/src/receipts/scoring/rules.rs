use chrono::NaiveTime;

use super::super::domain::{LineItem, Receipt};
use super::{ScoreComponent, ScoringRule};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;
/// `price * 0.2` in cents is `cents / 500`.
const CENTS_PER_DESCRIPTION_POINT: u128 = 500;

pub(super) fn apply(receipt: &Receipt) -> Vec<ScoreComponent> {
    let mut components = Vec::with_capacity(receipt.items.len() + 6);

    components.push(retailer_name(receipt));
    components.push(round_dollar(receipt));
    components.push(quarter_multiple(receipt));
    components.push(item_count(receipt));
    components.extend(
        receipt
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| item_description(index, item)),
    );
    components.push(odd_day(receipt));
    components.push(afternoon_window(receipt));

    components
}

fn retailer_name(receipt: &Receipt) -> ScoreComponent {
    let points = receipt
        .retailer
        .chars()
        .filter(|c| c.is_alphanumeric())
        .count() as u64;

    ScoreComponent {
        rule: ScoringRule::RetailerName,
        points,
        notes: format!("{points} points for retailer name ({})", receipt.retailer),
    }
}

fn round_dollar(receipt: &Receipt) -> ScoreComponent {
    let points = match receipt.total_cents() {
        Some(total) if total.fraction() == 0 => ROUND_DOLLAR_POINTS,
        _ => 0,
    };

    ScoreComponent {
        rule: ScoringRule::RoundDollar,
        points,
        notes: format!("{points} points for round dollar amount ({})", receipt.total),
    }
}

fn quarter_multiple(receipt: &Receipt) -> ScoreComponent {
    let points = match receipt.total_cents() {
        Some(total) if total.fraction() % 25 == 0 => QUARTER_MULTIPLE_POINTS,
        _ => 0,
    };

    ScoreComponent {
        rule: ScoringRule::QuarterMultiple,
        points,
        notes: format!(
            "{points} points for being multiple of 0.25 ({})",
            receipt.total
        ),
    }
}

fn item_count(receipt: &Receipt) -> ScoreComponent {
    let count = receipt.items.len();
    let points = (count / 2) as u64 * POINTS_PER_ITEM_PAIR;

    ScoreComponent {
        rule: ScoringRule::ItemCount,
        points,
        notes: format!("{points} points for number of items ({count})"),
    }
}

fn item_description(index: usize, item: &LineItem) -> ScoreComponent {
    let points = match item.price_cents() {
        Some(price) if item.trimmed_description_len() % 3 == 0 => {
            // ceil(cents / 500)
            let rounded_up = price.0.div_ceil(CENTS_PER_DESCRIPTION_POINT);
            u64::try_from(rounded_up).unwrap_or(u64::MAX)
        }
        _ => 0,
    };

    ScoreComponent {
        rule: ScoringRule::ItemDescription { index },
        points,
        notes: format!(
            "{points} point(s) for item ({} | {})",
            item.short_description, item.price
        ),
    }
}

fn odd_day(receipt: &Receipt) -> ScoreComponent {
    let points = match receipt.purchase_day() {
        Some(day) if day % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    };

    ScoreComponent {
        rule: ScoringRule::OddDay,
        points,
        notes: format!(
            "{points} points for purchase day being odd ({})",
            receipt.purchase_date
        ),
    }
}

fn afternoon_window(receipt: &Receipt) -> ScoreComponent {
    let points = match receipt.purchased_at() {
        Some(time) if within_afternoon_window(time) => AFTERNOON_POINTS,
        _ => 0,
    };

    ScoreComponent {
        rule: ScoringRule::AfternoonWindow,
        points,
        notes: format!(
            "{points} points for time of purchase between 2pm and 4pm ({})",
            receipt.purchase_time
        ),
    }
}

/// Strictly after 14:00 and strictly before 16:00.
fn within_afternoon_window(time: NaiveTime) -> bool {
    let start = NaiveTime::from_hms_opt(14, 0, 0);
    let end = NaiveTime::from_hms_opt(16, 0, 0);
    matches!((start, end), (Some(start), Some(end)) if time > start && time < end)
}
