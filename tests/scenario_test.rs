// tests/scenario_test.rs
use payoff_sim::output::{write_curve_to_csv, write_summary_to_csv, summary_rows, CurveColumns};
use payoff_sim::payoff::GRID_POINTS;
use payoff_sim::scenario::{
    evaluate, evaluate_batch, BoxParams, ScenarioConfig, SpreadParams, StrategyParams,
};
use payoff_sim::{OptionType, PayoffError, Strategy};
use std::io::Write;

const TOL: f64 = 1e-9;

fn box_scenario() -> ScenarioConfig {
    ScenarioConfig {
        strategy: StrategyParams::BoxSpread(BoxParams::default()),
        ..Default::default()
    }
}

#[test]
fn test_report_shapes_and_grid() {
    let report = evaluate(&ScenarioConfig::default()).unwrap();

    assert_eq!(report.grid.len(), GRID_POINTS);
    assert_eq!(report.gross.len(), GRID_POINTS);
    assert_eq!(report.net.len(), GRID_POINTS);
    assert_eq!(report.grid.lower(), 50.0);
    assert_eq!(report.grid.upper(), 150.0);

    for i in 0..GRID_POINTS {
        assert_eq!(report.net[i], report.gross[i] - report.cost);
    }
}

#[test]
fn test_bull_call_summary() {
    let report = evaluate(&ScenarioConfig::default()).unwrap();
    let summary = &report.summary;

    // net = gross - 1: -2 below 95, 8 above 105, zero at 97
    assert!((summary.max_loss - (-2.0)).abs() < TOL);
    assert_eq!(summary.max_loss_price, 50.0);
    assert!((summary.max_profit - 8.0).abs() < TOL);
    assert!(summary.max_profit_price >= 105.0);
    assert_eq!(summary.breakevens.len(), 1);
    assert!((summary.breakevens[0] - 97.0).abs() < 1e-9);
}

#[test]
fn test_box_scenario_is_flat() {
    let report = evaluate(&box_scenario()).unwrap();

    assert_eq!(report.strategy, Strategy::BoxSpread);
    assert_eq!(report.legs.len(), Strategy::BoxSpread.leg_count());
    assert_eq!(report.cost, 2.0);
    assert!(report.summary.is_flat(1e-9));
    assert!(report.summary.breakevens.is_empty());
    for (g, n) in report.gross.iter().zip(report.net.iter()) {
        assert!((g - 10.0).abs() < TOL);
        assert!((n - 8.0).abs() < TOL);
    }
}

#[test]
fn test_bear_put_scenario() {
    let cfg = ScenarioConfig {
        strategy: StrategyParams::BearSpread(SpreadParams {
            option_type: OptionType::Put,
            ..Default::default()
        }),
        ..Default::default()
    };
    let report = evaluate(&cfg).unwrap();

    // Short put @95 (2.0), long put @105 (1.0); cost = 1.0 - 2.0
    assert_eq!(report.cost, -1.0);
    // S <= 95: -(95 - S) + 2 + (105 - S) - 1 = 11
    assert!((report.gross[0] - 11.0).abs() < TOL);
    // S >= 105: 2 - 1 = 1
    assert!((report.gross[GRID_POINTS - 1] - 1.0).abs() < TOL);
}

#[test]
fn test_batch_matches_sequential() {
    let scenarios: Vec<ScenarioConfig> = Strategy::ALL
        .iter()
        .flat_map(|&s| {
            [50.0, 100.0, 400.0].into_iter().map(move |spot| ScenarioConfig {
                spot,
                strategy: StrategyParams::defaults_for(s),
                ..Default::default()
            })
        })
        .collect();

    let batch = evaluate_batch(&scenarios);
    assert_eq!(batch.len(), scenarios.len());
    for (cfg, result) in scenarios.iter().zip(batch) {
        assert_eq!(result.unwrap(), evaluate(cfg).unwrap());
    }
}

#[test]
fn test_batch_isolates_failures() {
    let bad = ScenarioConfig {
        spot: -5.0,
        ..Default::default()
    };
    let results = evaluate_batch(&[ScenarioConfig::default(), bad, box_scenario()]);

    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(PayoffError::InvalidParameters { ref parameter, .. }) if parameter == "spot"
    ));
    assert!(results[2].is_ok());
}

#[test]
fn test_load_scenario_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"spot": 100.0, "strategy": {{"kind": "box_spread", "strike1": 95.0, "strike2": 105.0,
            "premium1": 2.0, "premium2": 1.0, "premium3": 1.5, "premium4": 0.5}}}}"#
    )
    .unwrap();

    let cfg = ScenarioConfig::from_json_file(file.path()).unwrap();
    assert_eq!(cfg, box_scenario());
}

#[test]
fn test_missing_scenario_file() {
    let err = ScenarioConfig::from_json_file("/nonexistent/scenario.json").unwrap_err();
    assert!(matches!(err, PayoffError::ScenarioLoad { .. }));
}

#[test]
fn test_csv_outputs() {
    let report = evaluate(&box_scenario()).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let curve_path = dir.path().join("curve.csv");
    write_curve_to_csv(&curve_path, &report, CurveColumns::all()).unwrap();
    let curve = std::fs::read_to_string(&curve_path).unwrap();
    let mut lines = curve.lines();
    assert_eq!(lines.next(), Some("price,gross_payoff,net_payoff,cost"));
    assert_eq!(lines.count(), GRID_POINTS);

    let summary_path = dir.path().join("summary.csv");
    write_summary_to_csv(&summary_path, &summary_rows(&report)).unwrap();
    let summary = std::fs::read_to_string(&summary_path).unwrap();
    assert!(summary.lines().any(|l| l == "strategy,Box Spread"));
    assert!(summary.lines().any(|l| l == "cost,2"));
}

#[test]
fn test_zero_net_box_reports_one_breakeven() {
    // gross = 10 - 6 + 1 + 1.5 - 0.5 = 6, cost = 6 - 1 + 1.5 - 0.5 = 6
    let cfg = ScenarioConfig {
        strategy: StrategyParams::BoxSpread(BoxParams {
            premium1: 6.0,
            ..Default::default()
        }),
        ..Default::default()
    };
    let report = evaluate(&cfg).unwrap();

    assert!(report.net.iter().all(|n| n.abs() < TOL));
    assert_eq!(report.summary.breakevens, vec![report.grid.lower()]);
}
