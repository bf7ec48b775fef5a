// demos/error_handling_demo.rs
use payoff_sim::error::PayoffError;
use payoff_sim::payoff::{OptionType, Position, PriceGrid};
use payoff_sim::scenario::{evaluate, BoxParams, ScenarioConfig, SpreadParams, StrategyParams};
use payoff_sim::{telemetry, Strategy};

fn main() {
    telemetry::init_tracing("payoff_sim=warn");

    println!("Error Handling Demo for payoff-sim");
    println!("==================================\n");

    // Test 1: Unknown option type
    println!("1. Parsing an unknown option type...");
    match "straddle".parse::<OptionType>() {
        Ok(t) => println!("   Unexpected: parsed as {}", t),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Unknown position and strategy names
    println!("\n2. Parsing unknown position and strategy names...");
    match "flat".parse::<Position>() {
        Ok(p) => println!("   Unexpected: parsed as {}", p),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }
    match "Iron Condor".parse::<Strategy>() {
        Ok(s) => println!("   Unexpected: parsed as {}", s),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Unknown option type inside a JSON scenario
    println!("\n3. Loading a scenario with an unknown option type...");
    let json = r#"{ "strategy": { "kind": "bull_spread", "option_type": "straddle" } }"#;
    match ScenarioConfig::from_json_str(json) {
        Ok(_) => println!("   Unexpected: scenario loaded"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: Non-positive spot
    println!("\n4. Building a grid around a zero spot...");
    match PriceGrid::new(0.0) {
        Ok(_) => println!("   Unexpected: grid built"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 5: Negative premium
    println!("\n5. Evaluating a box spread with a negative premium...");
    let cfg = ScenarioConfig {
        strategy: StrategyParams::BoxSpread(BoxParams {
            premium4: -0.5,
            ..Default::default()
        }),
        ..Default::default()
    };
    match evaluate(&cfg) {
        Ok(_) => println!("   Unexpected: evaluated"),
        Err(PayoffError::InvalidParameters { parameter, value, .. }) => {
            println!("   ✓ Rejected parameter '{}' = {}", parameter, value)
        }
        Err(e) => println!("   Error: {}", e),
    }

    // Test 6: Inverted strikes are allowed but logged
    println!("\n6. Evaluating a bull spread with inverted strikes...");
    let cfg = ScenarioConfig {
        strategy: StrategyParams::BullSpread(SpreadParams {
            strike1: 105.0,
            strike2: 95.0,
            ..Default::default()
        }),
        ..Default::default()
    };
    match evaluate(&cfg) {
        Ok(report) => println!("   ✓ Evaluated with warning, cost = {}", report.cost),
        Err(e) => println!("   Error: {}", e),
    }

    println!("\nError handling demo complete.");
}
