//! Plain-text statistics report formatting.
//!
//! One `key: value` line per metric, preceded by the input/processed
//! sizes, so a comparison run leaves a self-describing `statistics.txt`
//! next to its outputs.

use crate::metrics::ComparisonReport;
use crate::normalize::TargetSize;

/// Everything needed to render one comparison report.
#[derive(Debug)]
pub struct ReportContext<'a> {
    pub first_label: &'a str,
    pub second_label: &'a str,
    pub first_original_size: (u32, u32),
    pub second_original_size: (u32, u32),
    pub target: TargetSize,
}

/// Render the report as `key: value` text lines.
pub fn format_text(report: &ComparisonReport, ctx: &ReportContext<'_>) -> String {
    let mut out = String::new();
    out.push_str("Image Comparison Statistics\n");
    out.push_str("===========================\n");
    out.push_str(&format!(
        "Original Size ({}): {}x{}\n",
        ctx.first_label, ctx.first_original_size.0, ctx.first_original_size.1
    ));
    out.push_str(&format!(
        "Original Size ({}): {}x{}\n",
        ctx.second_label, ctx.second_original_size.0, ctx.second_original_size.1
    ));
    out.push_str(&format!(
        "Processed Size: {}x{}\n\n",
        ctx.target.width, ctx.target.height
    ));

    out.push_str(&format!("MAE: {:.6}\n", report.mae));
    out.push_str(&format!("MSE: {:.6}\n", report.mse));
    out.push_str(&format!("RMSE: {:.6}\n", report.rmse));
    for (name, value) in ["R", "G", "B"].iter().zip(report.correlations) {
        out.push_str(&format!("Correlation_{}: {:.6}\n", name, value));
    }
    for (name, value) in ["R", "G", "B"].iter().zip(report.kl_divergences) {
        out.push_str(&format!("KL_Divergence_{}: {:.6}\n", name, value));
    }
    out.push_str(&format!(
        "Significant_Difference_Ratio: {:.6}\n",
        report.significant_diff_ratio
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_contains_every_metric_line() {
        let report = ComparisonReport {
            mae: 0.1,
            mse: 0.02,
            rmse: 0.141421,
            correlations: [0.9, 0.8, 0.7],
            kl_divergences: [0.01, 0.02, 0.03],
            significant_diff_ratio: 0.05,
        };
        let ctx = ReportContext {
            first_label: "model",
            second_label: "observed",
            first_original_size: (1024, 768),
            second_original_size: (512, 512),
            target: TargetSize::default(),
        };
        let text = format_text(&report, &ctx);
        assert!(text.contains("MAE: 0.100000"));
        assert!(text.contains("RMSE: 0.141421"));
        assert!(text.contains("Correlation_G: 0.800000"));
        assert!(text.contains("KL_Divergence_B: 0.030000"));
        assert!(text.contains("Significant_Difference_Ratio: 0.050000"));
        assert!(text.contains("Original Size (model): 1024x768"));
        assert!(text.contains("Processed Size: 512x512"));
    }
}
