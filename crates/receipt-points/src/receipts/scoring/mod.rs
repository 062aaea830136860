mod rules;

use serde::{Deserialize, Serialize};

use super::domain::Receipt;

/// Which rule produced a score component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "rule")]
pub enum ScoringRule {
    RetailerName,
    RoundDollar,
    QuarterMultiple,
    ItemCount,
    ItemDescription { index: usize },
    OddDay,
    AfternoonWindow,
}

/// Discrete contribution to a score, kept for the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    #[serde(flatten)]
    pub rule: ScoringRule,
    pub points: u64,
    pub notes: String,
}

/// Total points plus one component per rule application, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total_points: u64,
    pub components: Vec<ScoreComponent>,
}

impl ScoreBreakdown {
    pub fn explanations(&self) -> Vec<String> {
        self.components
            .iter()
            .map(|component| component.notes.clone())
            .collect()
    }

    /// Explanations followed by the `"<n> points total"` summary line.
    pub fn explanations_with_total(&self) -> Vec<String> {
        let mut lines = self.explanations();
        lines.push(format!("{} points total", self.total_points));
        lines
    }
}

/// Score a receipt that has already passed [`validate`](super::validate).
///
/// For a valid receipt the breakdown always holds `items + 6` components. An
/// unvalidated receipt never panics; any part that cannot be read scores zero.
pub fn score(receipt: &Receipt) -> ScoreBreakdown {
    let components = rules::apply(receipt);
    let total_points = components
        .iter()
        .fold(0u64, |total, component| total.saturating_add(component.points));

    ScoreBreakdown {
        total_points,
        components,
    }
}
