// scripts/simulate.rs
use anyhow::{Context, Result};
use clap::Parser;
use payoff_sim::output::{self, CurveColumns};
use payoff_sim::scenario::{evaluate, BoxParams, ScenarioConfig, SpreadParams, StrategyParams};
use payoff_sim::telemetry;
use payoff_sim::{OptionType, ScenarioReport, Strategy};
use std::path::PathBuf;
use tracing::info;

/// Expiry payoff of a bull, bear or box option spread
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Load the whole scenario from a JSON file (other scenario flags are ignored)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Strategy: "Bull Spread", "Bear Spread" or "Box Spread"
    #[arg(short, long, default_value = "Bull Spread")]
    strategy: String,

    /// Current spot price
    #[arg(long, default_value = "100.0")]
    spot: f64,

    /// Annual volatility in percent
    #[arg(long, default_value = "30.0")]
    volatility: f64,

    /// Days to maturity
    #[arg(long, default_value = "30")]
    days: u32,

    /// Lower strike price
    #[arg(long, default_value = "95.0")]
    strike1: f64,

    /// Higher strike price
    #[arg(long, default_value = "105.0")]
    strike2: f64,

    /// Premium of the lower-strike option (call at lower strike for box spreads)
    #[arg(long, default_value = "2.0")]
    premium1: f64,

    /// Premium of the higher-strike option (call at higher strike for box spreads)
    #[arg(long, default_value = "1.0")]
    premium2: f64,

    /// Put at the lower strike (box spreads only)
    #[arg(long, default_value = "1.5")]
    premium3: f64,

    /// Put at the higher strike (box spreads only)
    #[arg(long, default_value = "0.5")]
    premium4: f64,

    /// Option type for spreads: call or put
    #[arg(long, default_value = "call")]
    option_type: String,

    /// Write the payoff curve to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the key figures to this CSV file
    #[arg(long)]
    summary_csv: Option<PathBuf>,

    /// Print the full report as JSON instead of the text view
    #[arg(long, default_value = "false")]
    json: bool,

    /// Rows of the curve table in the text view
    #[arg(long, default_value = "11")]
    rows: usize,
}

impl Args {
    fn scenario(&self) -> Result<ScenarioConfig> {
        if let Some(path) = &self.config {
            return Ok(ScenarioConfig::from_json_file(path)?);
        }

        let strategy: Strategy = self.strategy.parse()?;
        let params = match strategy {
            Strategy::BullSpread | Strategy::BearSpread => {
                let spread = SpreadParams {
                    strike1: self.strike1,
                    strike2: self.strike2,
                    premium1: self.premium1,
                    premium2: self.premium2,
                    option_type: self.option_type.parse::<OptionType>()?,
                };
                if strategy == Strategy::BullSpread {
                    StrategyParams::BullSpread(spread)
                } else {
                    StrategyParams::BearSpread(spread)
                }
            }
            Strategy::BoxSpread => StrategyParams::BoxSpread(BoxParams {
                strike1: self.strike1,
                strike2: self.strike2,
                premium1: self.premium1,
                premium2: self.premium2,
                premium3: self.premium3,
                premium4: self.premium4,
            }),
        };

        Ok(ScenarioConfig {
            spot: self.spot,
            annual_volatility_pct: self.volatility,
            days_to_maturity: self.days,
            strategy: params,
        })
    }
}

fn print_report(report: &ScenarioReport, rows: usize) {
    println!("{} Strategy Payoff", report.strategy);
    println!("{}", "=".repeat(40));
    for leg in &report.legs {
        println!(
            "  {:<5} {:<4} @ {:>10.2}  premium {:.4}",
            leg.position, leg.option_type, leg.strike_price, leg.premium
        );
    }
    println!();
    println!("Total cost of setting up {}: {}", report.strategy, report.cost);
    println!(
        "Daily volatility: {:.4}%  ({}-day horizon: {:.4}%)",
        report.context.daily_volatility_pct,
        report.context.days_to_maturity,
        report.context.horizon_volatility_pct
    );
    println!(
        "Max profit: {:.4} at {:.2}   Max loss: {:.4} at {:.2}",
        report.summary.max_profit,
        report.summary.max_profit_price,
        report.summary.max_loss,
        report.summary.max_loss_price
    );
    if report.summary.breakevens.is_empty() {
        println!("Breakevens: none on the grid");
    } else {
        let list: Vec<String> = report
            .summary
            .breakevens
            .iter()
            .map(|b| format!("{:.4}", b))
            .collect();
        println!("Breakevens: {}", list.join(", "));
    }

    println!();
    println!("{:>12} {:>14} {:>14}", "Price", "Gross Payoff", "Net Payoff");
    let n = report.grid.len();
    let rows = rows.clamp(2, n);
    let prices = report.grid.prices();
    for r in 0..rows {
        let i = r * (n - 1) / (rows - 1);
        println!(
            "{:>12.4} {:>14.4} {:>14.4}",
            prices[i], report.gross[i], report.net[i]
        );
    }
}

fn main() -> Result<()> {
    telemetry::init_tracing("payoff_sim=info");
    let args = Args::parse();

    let cfg = args.scenario()?;
    let report = evaluate(&cfg)?;
    info!(strategy = %report.strategy, cost = report.cost, "scenario evaluated");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.rows);
    }

    if let Some(path) = &args.csv {
        output::write_curve_to_csv(path, &report, CurveColumns::all())
            .with_context(|| format!("writing curve to {}", path.display()))?;
        info!(path = %path.display(), "curve written");
    }

    if let Some(path) = &args.summary_csv {
        output::write_summary_to_csv(path, &output::summary_rows(&report))
            .with_context(|| format!("writing summary to {}", path.display()))?;
        info!(path = %path.display(), "summary written");
    }

    Ok(())
}
