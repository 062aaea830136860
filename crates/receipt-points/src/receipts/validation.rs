use std::fmt;
use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde::Serialize;

use super::domain::{Cents, LineItem, Receipt, DATE_FORMAT, TIME_FORMAT};

// Whitespace is ASCII only: tab, newline, form feed, carriage return, space.
const RETAILER_PATTERN: &str = r"^[A-Za-z0-9_\t\n\x0C\r &-]+$";
const DESCRIPTION_PATTERN: &str = r"^[A-Za-z0-9_\t\n\x0C\r -]+$";
const DATE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";
const TIME_PATTERN: &str = r"^[0-9]{2}:[0-9]{2}$";

static RETAILER_RX: OnceLock<Regex> = OnceLock::new();
static DESCRIPTION_RX: OnceLock<Regex> = OnceLock::new();
static DATE_RX: OnceLock<Regex> = OnceLock::new();
static TIME_RX: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static pattern compiles"))
}

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// Blank or whitespace-only.
    Empty,
    /// Present but does not match the lexical pattern.
    Format { value: String },
    /// Matches the pattern but is not a real calendar date or time of day.
    Unparsable { value: String },
    /// Declared total differs from the recomputed item sum.
    TotalMismatch { computed: String, declared: String },
}

/// One reason a receipt was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    /// Position of the offending line item, when the violation is item scoped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<usize>,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl Violation {
    pub fn receipt(field: &'static str, kind: ViolationKind) -> Self {
        Self {
            field,
            item: None,
            kind,
        }
    }

    pub fn item(index: usize, field: &'static str, kind: ViolationKind) -> Self {
        Self {
            field,
            item: Some(index),
            kind,
        }
    }

    fn write_message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::Empty => write!(f, "{} cannot be empty", self.field),
            ViolationKind::Format { value } => {
                write!(f, "invalid format for {} ({})", self.field, value)
            }
            ViolationKind::Unparsable { value } => {
                write!(f, "{} cannot be parsed ({})", self.field, value)
            }
            ViolationKind::TotalMismatch { computed, declared } => write!(
                f,
                "sum of item prices ({computed}) != given total ({declared})"
            ),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(index) = self.item {
            write!(f, "item {index} errors ... ")?;
        }
        self.write_message(f)
    }
}

/// Every violation found in a receipt, in reporting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, violation) in self.violations.iter().enumerate() {
            if position > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Check a receipt and all of its items, collecting every violation.
///
/// Order is retailer, purchaseDate, purchaseTime, total, each item in turn,
/// then the item-sum comparison. The sum check runs even when the total or an
/// item price is itself malformed.
pub fn validate(receipt: &Receipt) -> Result<(), ValidationReport> {
    let mut violations = Vec::new();

    let mut push = |field: &'static str, kind: Option<ViolationKind>| {
        if let Some(kind) = kind {
            violations.push(Violation::receipt(field, kind));
        }
    };

    push(
        "retailer",
        check_pattern(&receipt.retailer, compiled(&RETAILER_RX, RETAILER_PATTERN)),
    );
    push("purchaseDate", check_date(&receipt.purchase_date));
    push("purchaseTime", check_time(&receipt.purchase_time));
    push("total", check_amount(&receipt.total));

    for (index, item) in receipt.items.iter().enumerate() {
        violations.extend(validate_item(index, item));
    }

    let computed = receipt.item_total().to_string();
    if computed != receipt.total {
        violations.push(Violation::receipt(
            "total",
            ViolationKind::TotalMismatch {
                computed,
                declared: receipt.total.clone(),
            },
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationReport::new(violations))
    }
}

/// Description and price checks for one item. There is no parse step for
/// either field.
pub fn validate_item(index: usize, item: &LineItem) -> Vec<Violation> {
    let description = check_pattern(
        &item.short_description,
        compiled(&DESCRIPTION_RX, DESCRIPTION_PATTERN),
    );
    let price = check_amount(&item.price);

    [("shortDescription", description), ("price", price)]
        .into_iter()
        .filter_map(|(field, kind)| kind.map(|kind| Violation::item(index, field, kind)))
        .collect()
}

fn check_pattern(value: &str, pattern: &Regex) -> Option<ViolationKind> {
    if value.trim().is_empty() {
        Some(ViolationKind::Empty)
    } else if !pattern.is_match(value) {
        Some(ViolationKind::Format {
            value: value.to_string(),
        })
    } else {
        None
    }
}

fn check_amount(value: &str) -> Option<ViolationKind> {
    if value.trim().is_empty() {
        Some(ViolationKind::Empty)
    } else if !Cents::is_well_formed(value) {
        Some(ViolationKind::Format {
            value: value.to_string(),
        })
    } else {
        None
    }
}

fn check_date(value: &str) -> Option<ViolationKind> {
    check_pattern(value, compiled(&DATE_RX, DATE_PATTERN)).or_else(|| {
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .is_err()
            .then(|| ViolationKind::Unparsable {
                value: value.to_string(),
            })
    })
}

fn check_time(value: &str) -> Option<ViolationKind> {
    check_pattern(value, compiled(&TIME_RX, TIME_PATTERN)).or_else(|| {
        NaiveTime::parse_from_str(value, TIME_FORMAT)
            .is_err()
            .then(|| ViolationKind::Unparsable {
                value: value.to_string(),
            })
    })
}
