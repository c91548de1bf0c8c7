//! Display formatting for catalog figures.
//!
//! Missing and zero amounts are treated alike: both render as absent.

use crate::entities::FranchiseBrand;

/// Format a USD amount with no cents and thousands separators.
///
/// Returns `None` for a missing or zero amount.
#[must_use]
pub fn format_currency(amount: Option<f64>) -> Option<String> {
    let amount = amount.filter(|value| *value != 0.0 && value.is_finite())?;
    #[allow(clippy::cast_possible_truncation)]
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if whole < 0 { "-" } else { "" };
    Some(format!("{sign}${grouped}"))
}

/// Render a startup cost range.
#[must_use]
pub fn format_cost_range(min: Option<f64>, max: Option<f64>) -> String {
    match (format_currency(min), format_currency(max)) {
        (None, None) => "N/A".to_string(),
        (None, Some(max)) => format!("Up to {max}"),
        (Some(min), None) => format!("From {min}"),
        (Some(min), Some(max)) => format!("{min} - {max}"),
    }
}

#[must_use]
pub fn format_percentage(value: Option<f64>) -> String {
    match value.filter(|v| *v != 0.0) {
        Some(value) => format!("{value}%"),
        None => "N/A".to_string(),
    }
}

/// Prose summary shown on a brand's detail page.
#[must_use]
pub fn brand_overview(brand: &FranchiseBrand) -> String {
    let mut paragraphs = vec![format!(
        "{} operates in the {} sector, offering franchise opportunities with an initial investment of {}.",
        brand.name,
        brand.sector.to_lowercase(),
        format_cost_range(brand.startup_cost_min, brand.startup_cost_max)
    )];

    if brand.net_profit_margin.is_some_and(|margin| margin != 0.0) {
        paragraphs.push(format!(
            "With a reported net profit margin of {}, this franchise presents a potentially attractive investment opportunity for qualified candidates.",
            format_percentage(brand.net_profit_margin)
        ));
    }

    paragraphs.push(
        "For detailed franchise information, financial performance data, and territory availability, we recommend contacting the franchisor directly through their official website."
            .to_string(),
    );
    paragraphs.join("\n\n")
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(Some(150_000.0)).as_deref(), Some("$150,000"));
        assert_eq!(format_currency(Some(999.0)).as_deref(), Some("$999"));
        assert_eq!(
            format_currency(Some(1_234_567.4)).as_deref(),
            Some("$1,234,567")
        );
    }

    #[test]
    fn currency_treats_zero_as_missing() {
        assert_eq!(format_currency(Some(0.0)), None);
        assert_eq!(format_currency(None), None);
    }

    #[test]
    fn cost_range_variants() {
        assert_eq!(format_cost_range(None, None), "N/A");
        assert_eq!(format_cost_range(None, Some(80_000.0)), "Up to $80,000");
        assert_eq!(format_cost_range(Some(80_000.0), None), "From $80,000");
        assert_eq!(
            format_cost_range(Some(150_000.0), Some(300_000.0)),
            "$150,000 - $300,000"
        );
    }

    #[test]
    fn percentage_renders_number_as_is() {
        assert_eq!(format_percentage(Some(18.5)), "18.5%");
        assert_eq!(format_percentage(Some(12.0)), "12%");
        assert_eq!(format_percentage(None), "N/A");
    }

    #[test]
    fn overview_mentions_margin_only_when_present() {
        let mut brand = FranchiseBrand {
            id: "brd-1".into(),
            name: "F45 Training".into(),
            sector: "Fitness & Health".into(),
            description: "Functional group training".into(),
            logo_url: None,
            website: None,
            startup_cost_min: Some(150_000.0),
            startup_cost_max: Some(300_000.0),
            net_profit_margin: Some(22.0),
            summary_pdf_url: None,
            created_at: Utc::now(),
        };
        let text = brand_overview(&brand);
        assert!(text.starts_with(
            "F45 Training operates in the fitness & health sector, offering franchise opportunities with an initial investment of $150,000 - $300,000."
        ));
        assert!(text.contains("net profit margin of 22%"));

        brand.net_profit_margin = None;
        assert!(!brand_overview(&brand).contains("net profit margin"));
    }
}
