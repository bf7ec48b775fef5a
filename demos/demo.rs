// demos/demo.rs
use payoff_sim::payoff::{OptionType, PriceGrid};
use payoff_sim::scenario::{evaluate, BoxParams, ScenarioConfig, SpreadParams, StrategyParams};
use payoff_sim::strategy::{compute_bear_spread, compute_bull_spread, compute_box_spread};
use payoff_sim::telemetry;

fn print_curve(label: &str, grid: &PriceGrid, gross: &[f64], cost: f64) {
    println!("{}", label);
    println!("  cost = {:.4}", cost);
    println!("  {:>10} {:>12} {:>12}", "price", "gross", "net");
    let prices = grid.prices();
    for i in (0..grid.len()).step_by(11) {
        println!(
            "  {:>10.2} {:>12.4} {:>12.4}",
            prices[i],
            gross[i],
            gross[i] - cost
        );
    }
    println!();
}

fn main() {
    telemetry::init_tracing("payoff_sim=debug");

    println!("Running payoff-sim Strategy Demo\n");

    let spot = 100.0;
    let grid = PriceGrid::new(spot).expect("positive spot");

    // Direct engine calls
    for option_type in [OptionType::Call, OptionType::Put] {
        let bull = compute_bull_spread(grid.prices(), 95.0, 105.0, 2.0, 1.0, option_type);
        print_curve(
            &format!("Bull {} spread 95/105", option_type),
            &grid,
            bull.gross.as_slice().unwrap_or_default(),
            bull.cost,
        );

        let bear = compute_bear_spread(grid.prices(), 95.0, 105.0, 2.0, 1.0, option_type);
        print_curve(
            &format!("Bear {} spread 95/105", option_type),
            &grid,
            bear.gross.as_slice().unwrap_or_default(),
            bear.cost,
        );
    }

    let boxed = compute_box_spread(grid.prices(), 95.0, 105.0, 2.0, 1.0, 1.5, 0.5);
    print_curve(
        "Box spread 95/105",
        &grid,
        boxed.gross.as_slice().unwrap_or_default(),
        boxed.cost,
    );

    // Same thing through the scenario layer
    let scenarios = [
        ScenarioConfig::default(),
        ScenarioConfig {
            strategy: StrategyParams::BearSpread(SpreadParams {
                option_type: OptionType::Put,
                ..Default::default()
            }),
            ..Default::default()
        },
        ScenarioConfig {
            strategy: StrategyParams::BoxSpread(BoxParams::default()),
            ..Default::default()
        },
    ];

    println!("{:<14} {:>8} {:>12} {:>12} {:>20}", "Strategy", "Cost", "Max profit", "Max loss", "Breakevens");
    for cfg in &scenarios {
        let report = evaluate(cfg).expect("valid scenario");
        let breakevens: Vec<String> = report
            .summary
            .breakevens
            .iter()
            .map(|b| format!("{:.2}", b))
            .collect();
        println!(
            "{:<14} {:>8.4} {:>12.4} {:>12.4} {:>20}",
            report.strategy,
            report.cost,
            report.summary.max_profit,
            report.summary.max_loss,
            breakevens.join(" ")
        );
    }
}
