// src/output.rs
use crate::scenario::ScenarioReport;
use bitflags::bitflags;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

bitflags! {
    /// Curve columns written next to the price column
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CurveColumns: u32 {
        const GROSS = 1 << 0;
        const NET   = 1 << 1;
        const COST  = 1 << 2;
    }
}

impl Default for CurveColumns {
    fn default() -> Self {
        CurveColumns::all()
    }
}

/// Write `price` plus the selected curve columns, one row per grid point
pub fn write_curve_csv<W: Write>(
    mut out: W,
    report: &ScenarioReport,
    columns: CurveColumns,
) -> io::Result<()> {
    let mut header = vec!["price"];
    if columns.contains(CurveColumns::GROSS) {
        header.push("gross_payoff");
    }
    if columns.contains(CurveColumns::NET) {
        header.push("net_payoff");
    }
    if columns.contains(CurveColumns::COST) {
        header.push("cost");
    }
    writeln!(out, "{}", header.join(","))?;

    let prices = report.grid.prices();
    for i in 0..prices.len() {
        write!(out, "{}", prices[i])?;
        if columns.contains(CurveColumns::GROSS) {
            write!(out, ",{}", report.gross[i])?;
        }
        if columns.contains(CurveColumns::NET) {
            write!(out, ",{}", report.net[i])?;
        }
        if columns.contains(CurveColumns::COST) {
            write!(out, ",{}", report.cost)?;
        }
        writeln!(out)?;
    }
    out.flush()
}

pub fn write_curve_to_csv(
    filename: impl AsRef<Path>,
    report: &ScenarioReport,
    columns: CurveColumns,
) -> io::Result<()> {
    let file = File::create(filename)?;
    write_curve_csv(BufWriter::new(file), report, columns)
}

pub fn write_summary_to_csv(filename: impl AsRef<Path>, summary_data: &[(&str, String)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}

/// Key/value rows describing a report, suitable for [`write_summary_to_csv`]
pub fn summary_rows(report: &ScenarioReport) -> Vec<(&'static str, String)> {
    let breakevens = report
        .summary
        .breakevens
        .iter()
        .map(|b| format!("{:.4}", b))
        .collect::<Vec<_>>()
        .join(" ");

    vec![
        ("strategy", report.strategy.to_string()),
        ("spot", report.grid.spot().to_string()),
        ("cost", report.cost.to_string()),
        ("max_profit", report.summary.max_profit.to_string()),
        ("max_profit_price", report.summary.max_profit_price.to_string()),
        ("max_loss", report.summary.max_loss.to_string()),
        ("max_loss_price", report.summary.max_loss_price.to_string()),
        ("breakevens", breakevens),
        ("daily_volatility_pct", report.context.daily_volatility_pct.to_string()),
        ("horizon_volatility_pct", report.context.horizon_volatility_pct.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{evaluate, ScenarioConfig};

    #[test]
    fn test_curve_csv_columns() {
        let report = evaluate(&ScenarioConfig::default()).unwrap();
        let mut buf = Vec::new();
        write_curve_csv(&mut buf, &report, CurveColumns::NET | CurveColumns::COST).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("price,net_payoff,cost"));
        assert_eq!(lines.next(), Some("50,-2,1"));
        assert_eq!(text.lines().count(), report.grid.len() + 1);
    }

    #[test]
    fn test_summary_rows_contain_cost() {
        let report = evaluate(&ScenarioConfig::default()).unwrap();
        let rows = summary_rows(&report);
        assert!(rows.contains(&("cost", "1".to_string())));
        assert!(rows.contains(&("strategy", "Bull Spread".to_string())));
    }
}
