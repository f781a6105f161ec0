//! Plain-text suitability report.
//!
//! Fixed 80-column layout. Money is printed with two decimals and the
//! configured currency symbol, risk scores with four decimals, profile
//! ceilings and thresholds with two, percentages with a trailing `%`.

use std::fmt::Write as _;

use rust_decimal::Decimal;

use crate::application::ports::{RenderedReport, ReportRendererPort};
use crate::domain::shared::{Money, Timestamp};
use crate::domain::suitability::{SuitabilityReport, ValidationStatus};

const RULE: &str =
    "================================================================================";
const BOX_WIDTH: usize = 77;

/// Renders reports as a downloadable `.txt` document.
#[derive(Debug, Clone)]
pub struct TextReportRenderer {
    currency_symbol: String,
    institution: String,
    system_version: String,
}

impl TextReportRenderer {
    /// Create a renderer with presentation settings.
    #[must_use]
    pub fn new(
        currency_symbol: impl Into<String>,
        institution: impl Into<String>,
        system_version: impl Into<String>,
    ) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            institution: institution.into(),
            system_version: system_version.into(),
        }
    }

    fn money(&self, value: Money) -> String {
        value.format_with_symbol(&self.currency_symbol)
    }
}

fn fixed(value: Decimal, dp: u32) -> String {
    format!("{:.*}", dp as usize, value.round_dp(dp))
}

fn percent(value: Decimal) -> String {
    format!("{}%", fixed(value, 2))
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{title:^80}");
    let _ = writeln!(out, "{RULE}");
    out.push('\n');
}

fn boxed(out: &mut String, title: &str, lines: &[(&str, String)]) {
    let bar = "─".repeat(BOX_WIDTH);
    let _ = writeln!(out, "┌{bar}┐");
    let _ = writeln!(out, "│ {title:<width$}│", width = BOX_WIDTH - 1);
    let _ = writeln!(out, "├{bar}┤");
    for (label, value) in lines {
        let line = format!("{label}: {value}");
        let _ = writeln!(out, "│ {line:<width$}│", width = BOX_WIDTH - 1);
    }
    let _ = writeln!(out, "└{bar}┘");
    out.push('\n');
}

impl ReportRendererPort for TextReportRenderer {
    fn render(&self, report: &SuitabilityReport, generated_at: Timestamp) -> RenderedReport {
        let profile = &report.profile;
        let validation = &report.validation;
        let detail = &validation.detail;
        let mut out = String::new();

        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "{:^80}", "SUITABILITY VALIDATION REPORT");
        let _ = writeln!(out, "{:^80}", self.institution);
        let _ = writeln!(out, "{RULE}");
        out.push('\n');
        let _ = writeln!(out, "PROTOCOL: {}", report.protocol());
        let _ = writeln!(out, "DATE/TIME: {}", report.timestamp.to_display_string());
        let _ = writeln!(out, "COMPLIANCE: CVM Resolution No. 30");
        out.push('\n');

        section(&mut out, "CLIENT DATA");
        let _ = writeln!(out, "Name: {}", profile.name);
        let _ = writeln!(out, "Email: {}", profile.email);
        let _ = writeln!(out, "Investor Profile: {}", profile.profile_class);
        let _ = writeln!(out, "Maximum Risk Score: {}", fixed(profile.max_risk_score, 2));
        out.push('\n');

        section(&mut out, "PORTFOLIO RISK ANALYSIS");
        boxed(
            &mut out,
            "CURRENT PORTFOLIO",
            &[
                ("Total Invested", self.money(detail.current_portfolio_total)),
                ("Weighted Average Risk", fixed(detail.current_portfolio_risk, 4)),
            ],
        );
        boxed(
            &mut out,
            "PROJECTION AFTER PURCHASE",
            &[
                ("Projected Total", self.money(detail.projected_portfolio_total)),
                ("Projected Average Risk", fixed(detail.projected_portfolio_risk, 4)),
                ("Risk Increase", percent(detail.risk_increase_percent)),
            ],
        );

        section(&mut out, "VALIDATION PARAMETERS");
        let _ = writeln!(
            out,
            "Maximum Permitted Score (Profile): {}",
            fixed(validation.max_permitted_score, 2)
        );
        let _ = writeln!(
            out,
            "Alert Threshold (110% of Score): {}",
            fixed(validation.alert_threshold, 2)
        );
        let _ = writeln!(out, "Current Portfolio Risk: {}", fixed(validation.current_risk, 4));
        let _ = writeln!(
            out,
            "Projected Portfolio Risk: {}",
            fixed(validation.projected_risk, 4)
        );
        out.push('\n');

        section(&mut out, "VALIDATION RESULT");
        let _ = writeln!(out, "STATUS: {}", validation.status);
        out.push('\n');
        let _ = writeln!(out, "{}", validation.message);
        out.push('\n');
        match validation.status {
            ValidationStatus::Approved => {
                out.push_str("[OK] The order is APPROVED and may be executed.\n");
                out.push_str("     The portfolio remains compliant with the client's profile.\n");
            }
            ValidationStatus::Alert => {
                out.push_str("[!] ATTENTION: this order requires a client ACKNOWLEDGEMENT TERM.\n");
                out.push('\n');
                out.push_str("The client must be aware that the order results in a portfolio whose\n");
                out.push_str("risk is above the level recommended for their profile, but within the\n");
                let _ = writeln!(out, "alert threshold set by the suitability policy of {}.", self.institution);
            }
            ValidationStatus::Rejected => {
                out.push_str("[X] The order was REJECTED.\n");
                out.push_str("    Projected risk exceeds the maximum allowed by the suitability policy.\n");
                out.push_str("    Review the order or reassess the client's profile.\n");
            }
        }
        out.push('\n');

        section(&mut out, "REGULATORY NOTES");
        out.push_str("This report was produced under CVM Resolution No. 30, which sets the\n");
        out.push_str("guidelines for matching products, services and operations to the\n");
        out.push_str("investor's risk profile.\n");
        out.push('\n');
        out.push_str("Portfolio risk is the weighted average of every holding by amount invested.\n");
        out.push('\n');
        out.push_str("Formula:\n");
        out.push_str("RC = Σ(Risk_i × AmountInvested_i) / Σ(AmountInvested_i)\n");
        if validation.requires_acknowledgement {
            out.push('\n');
            out.push_str("IMPORTANT: if the client decides to proceed, the Acknowledgement Term\n");
            out.push_str("must be recorded in the system for audit and compliance purposes.\n");
        }
        out.push('\n');

        section(&mut out, "DIGITAL SIGNATURE");
        let _ = writeln!(
            out,
            "This document was generated automatically by the Suitability Validation\nSystem of {}.",
            self.institution
        );
        out.push('\n');
        let _ = writeln!(out, "Generated At: {}", generated_at.to_display_string());
        let _ = writeln!(out, "System Version: {}", self.system_version);
        out.push_str("Module: Suitability Validation Engine\n");
        out.push('\n');
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "{:^80}", "END OF REPORT");
        let _ = write!(out, "{RULE}");

        RenderedReport {
            filename: format!("suitability-report-{}.txt", report.id),
            content_type: "text/plain; charset=utf-8",
            content: out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::ReportId;
    use crate::domain::suitability::{Holding, ProfileClass, ProposedOrder, RiskProfile, engine};
    use rust_decimal_macros::dec;

    fn renderer() -> TextReportRenderer {
        TextReportRenderer::new("R$", "Example Brokerage", "1.0.0")
    }

    fn report(max: Decimal, order_score: Decimal, order_amount: Decimal) -> SuitabilityReport {
        let profile = RiskProfile::new(
            "Maria Santos",
            "maria@example.com",
            ProfileClass::Moderate,
            max,
        );
        let portfolio = vec![
            Holding::new("CDB XPTO", dec!(2.3), Money::new(dec!(50000))),
            Holding::new("Stock ABC", dec!(2.7), Money::new(dec!(30000))),
        ];
        let order = ProposedOrder::new("FII YYY", order_score, Money::new(order_amount));
        let validation = engine::validate_suitability(&profile, &portfolio, &order);
        let mut report = SuitabilityReport::issue(profile, validation);
        report.id = ReportId::new("abc123");
        report
    }

    #[test]
    fn alert_report_contains_figures_and_notice() {
        let rendered = renderer().render(&report(dec!(2.5), dec!(4.5), dec!(10000)), Timestamp::now());
        let text = &rendered.content;

        assert!(text.contains("PROTOCOL: ABC123"));
        assert!(text.contains("STATUS: Alert"));
        assert!(text.contains("R$ 80000.00"));
        assert!(text.contains("R$ 90000.00"));
        assert!(text.contains("2.4500"));
        assert!(text.contains("2.6778"));
        assert!(text.contains("Alert Threshold (110% of Score): 2.75"));
        assert!(text.contains("ACKNOWLEDGEMENT TERM"));
        assert!(text.contains("must be recorded"));
        assert!(text.contains("Example Brokerage"));
        assert!(text.contains("System Version: 1.0.0"));
    }

    #[test]
    fn approved_report_has_no_acknowledgement_notice() {
        let rendered = renderer().render(&report(dec!(3.0), dec!(1.0), dec!(1000)), Timestamp::now());
        assert!(rendered.content.contains("STATUS: Approved"));
        assert!(rendered.content.contains("APPROVED"));
        assert!(!rendered.content.contains("ACKNOWLEDGEMENT TERM"));
    }

    #[test]
    fn rejected_report_says_so() {
        let rendered = renderer().render(&report(dec!(1.0), dec!(5.0), dec!(100000)), Timestamp::now());
        assert!(rendered.content.contains("STATUS: Rejected"));
        assert!(rendered.content.contains("REJECTED"));
    }

    #[test]
    fn risk_increase_is_a_percentage() {
        let rendered = renderer().render(&report(dec!(2.5), dec!(4.5), dec!(10000)), Timestamp::now());
        // (2.6778 - 2.45) / 2.45 ≈ 9.30%
        assert!(rendered.content.contains("Risk Increase: 9.30%"));
    }

    #[test]
    fn filename_and_content_type() {
        let rendered = renderer().render(&report(dec!(2.5), dec!(4.5), dec!(10000)), Timestamp::now());
        assert_eq!(rendered.filename, "suitability-report-abc123.txt");
        assert_eq!(rendered.content_type, "text/plain; charset=utf-8");
    }

    #[test]
    fn box_lines_have_constant_width() {
        let rendered = renderer().render(&report(dec!(2.5), dec!(4.5), dec!(10000)), Timestamp::now());
        for line in rendered.content.lines().filter(|l| l.starts_with('│')) {
            assert_eq!(line.chars().count(), BOX_WIDTH + 2, "{line}");
        }
    }
}
