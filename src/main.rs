use pricing_sim::io::reporting;
use pricing_sim::{EngineConfig, PricingSimulation, SimulationParams};

fn main() {
    println!("=== Dynamic Pricing Simulation in Rust ===");

    // 1. SETUP PARAMETERS
    // The reference scenario: healthy margin, a month of stock, elastic demand.
    let params = SimulationParams {
        initial_price: 50.0,
        cost_price: 30.0,
        total_inventory: 1000,
        base_demand: 100,
        sensitivity: 2.0,
    };

    let config = EngineConfig::default();

    // 2. INITIALIZE SIMULATION
    // Seeded so repeated demo runs print the same story.
    let mut sim = match PricingSimulation::from_seed(params, config, 2024) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Invalid parameters: {}", e);
            std::process::exit(1);
        }
    };

    // 3. RUN SIMULATION
    println!("Running simulation for 30 days...\n");
    let outcome = sim.run();

    // 4. DAILY LOG
    for record in &outcome.history {
        println!(
            "Day {:02} | Price: ${:6.2} | Competitor: ${:6.2} | Sold: {:3} | Stock: {:4} | Share: {:5.1}% | {}",
            record.day,
            record.user_price,
            record.competitor_price,
            record.items_sold,
            record.stock_level,
            record.market_share,
            record.insight,
        );
    }

    // 5. EXPORT RESULTS
    let output_file = "simulation_results.csv";
    match reporting::write_simulation_log(output_file, &outcome.history) {
        Ok(_) => println!("Success! Data written to ./{}", output_file),
        Err(e) => eprintln!("Error writing CSV: {}", e),
    }

    // 6. PRINT SUMMARY
    println!("\n=== Simulation Summary ===");
    println!("Total Profit:          ${:.2}", outcome.summary.total_profit);
    println!("Total Units Sold:      {}", outcome.summary.total_units_sold);
    println!("Avg Price (active):    ${:.2}", outcome.summary.avg_user_price);
    println!(
        "Avg Competitor Price:  ${:.2}",
        outcome.summary.avg_competitor_price
    );

    println!("\nSimulation Complete.");
}
