use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{load_receipt, score, validate, ScoreBreakdown};
use serde_json::json;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON file
    pub(crate) path: PathBuf,
    /// Print the breakdown as JSON instead of plain text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let receipt = load_receipt(&args.path)?;

    if let Err(report) = validate(&receipt) {
        if args.json {
            println!(
                "{}",
                json!({ "error": format!("Validation errors: {report}"), "violations": report })
            );
        } else {
            println!("{} is not a valid receipt:", args.path.display());
            for message in report.messages() {
                println!("  - {message}");
            }
        }
        return Err(report.into());
    }

    let breakdown = score(&receipt);
    if args.json {
        println!("{}", json!({ "breakdown": breakdown.explanations_with_total() }));
    } else {
        print!("{}", render_breakdown(&receipt.retailer, &breakdown));
    }

    Ok(())
}

fn render_breakdown(retailer: &str, breakdown: &ScoreBreakdown) -> String {
    let mut output = format!("Receipt from {retailer}\n");
    output.push_str(&"-".repeat(48));
    output.push('\n');
    for line in breakdown.explanations() {
        output.push_str("  ");
        output.push_str(&line);
        output.push('\n');
    }
    output.push_str(&"-".repeat(48));
    output.push('\n');
    output.push_str(&format!("{} points total\n", breakdown.total_points));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_points::receipts::{LineItem, Receipt};

    fn demo_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../demos/receipts")
            .join(name)
    }

    #[test]
    fn renders_one_line_per_rule_and_total() {
        let receipt = Receipt {
            retailer: "Corner Store".to_string(),
            purchase_date: "2024-12-11".to_string(),
            purchase_time: "15:05".to_string(),
            items: vec![LineItem::new("Skittles", "1.50")],
            total: "1.50".to_string(),
        };

        let rendered = render_breakdown(&receipt.retailer, &score(&receipt));

        assert!(rendered.starts_with("Receipt from Corner Store\n"));
        assert!(rendered.contains("  0 point(s) for item (Skittles | 1.50)\n"));
        assert!(rendered.ends_with("52 points total\n"));
    }

    #[test]
    fn scoring_a_valid_demo_file_succeeds() {
        let args = ScoreArgs {
            path: demo_path("target.json"),
            json: true,
        };
        assert!(run_score(args).is_ok());
    }

    #[test]
    fn scoring_an_invalid_demo_file_fails_with_validation_error() {
        let args = ScoreArgs {
            path: demo_path("mismatched-total.json"),
            json: false,
        };
        assert!(matches!(run_score(args), Err(AppError::Validation(_))));
    }

    #[test]
    fn missing_file_is_a_receipt_file_error() {
        let args = ScoreArgs {
            path: demo_path("absent.json"),
            json: false,
        };
        assert!(matches!(run_score(args), Err(AppError::ReceiptFile(_))));
    }
}
