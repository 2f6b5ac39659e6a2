use crate::report::{format_count, format_f64_2};

#[derive(Debug, Clone)]
pub struct ReportContext {
    pub shipment_count: usize,
    pub avg_ping_coverage: Option<f64>,
    pub prediction_rows: usize,
    pub stop_range: Option<(f64, f64)>,
    pub lanes: Option<Vec<String>>,
    pub selected_buckets: Vec<u32>,
    pub columns: Vec<String>,
    pub dropped: Vec<String>,
}

pub fn render_report_text(ctx: &ReportContext) -> String {
    let mut out = String::new();

    out.push_str("ETA Accuracy Report - Shipment Level\n");
    out.push_str("====================================\n\n");

    out.push_str("1. Key figures\n");
    out.push_str(&format!(
        "Shipments (unique BILL_OF_LADING): {}\n",
        format_count(ctx.shipment_count)
    ));
    out.push_str(&format!(
        "Avg ping coverage: {}\n",
        coverage_label(ctx.avg_ping_coverage)
    ));
    out.push_str(&format!(
        "Total predictions (rows): {}\n\n",
        format_count(ctx.prediction_rows)
    ));

    out.push_str("2. Active filters\n");
    match ctx.stop_range {
        Some((lo, hi)) => out.push_str(&format!(
            "Stop range: {} to {} (inclusive)\n",
            bound_label(lo),
            bound_label(hi)
        )),
        None => out.push_str("Stop range: all stops\n"),
    }
    match &ctx.lanes {
        Some(lanes) => out.push_str(&format!("Lanes: {}\n", lanes.join(", "))),
        None => out.push_str("Lanes: all lanes\n"),
    }
    out.push_str(&format!(
        "Buckets: {}\n\n",
        bucket_label(&ctx.selected_buckets)
    ));

    out.push_str("3. Report columns\n");
    out.push_str(&ctx.columns.join(", "));
    out.push('\n');
    if !ctx.dropped.is_empty() {
        out.push_str(&format!(
            "Skipped (missing from table): {}\n",
            ctx.dropped.join(", ")
        ));
    }

    out
}

fn coverage_label(avg: Option<f64>) -> String {
    match avg {
        Some(v) => format_f64_2(v),
        None => "n/a".to_string(),
    }
}

fn bound_label(v: f64) -> String {
    if v.is_finite() {
        v.to_string()
    } else {
        "open".to_string()
    }
}

fn bucket_label(buckets: &[u32]) -> String {
    if buckets.is_empty() {
        return "none".to_string();
    }
    buckets
        .iter()
        .map(|m| format!("{m} mins"))
        .collect::<Vec<_>>()
        .join(", ")
}
