use fieldplan::{
    init_logging, print_assignments, print_placement, print_profile, print_zone_table,
    random_baseline_cost, FieldPlanner, SearchConfig, DEFAULT_FIELDERS, MAX_ITERATIONS,
    COVERAGE_RADIUS,
};

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "A* fielding placement for cricket deliveries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a field placement for one delivery type.
    Place {
        /// Delivery type, e.g. "yorker" or "off spin". Unknown names use the fallback profile.
        delivery: String,
        #[arg(long, default_value_t = DEFAULT_FIELDERS)]
        fielders: usize,
        #[arg(long, help = "Print the placement as JSON")]
        json: bool,
        #[arg(long, default_value_t = MAX_ITERATIONS)]
        max_iterations: usize,
        #[arg(long, default_value_t = COVERAGE_RADIUS)]
        coverage_radius: f64,
        #[arg(long, default_value_t = 0, help = "Random placements to average for a baseline cost")]
        baseline: usize,
        #[arg(long, help = "Fix RNG seed for a reproducible baseline (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Place fields for yorker, bouncer and off spin and print the top fielders.
    Demo,
    /// List the zone catalog.
    Zones,
    /// List the known delivery types and their shot profiles.
    Deliveries,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Place {
            delivery,
            fielders,
            json,
            max_iterations,
            coverage_radius,
            baseline,
            seed,
        } => {
            if !(coverage_radius.is_finite() && coverage_radius > 0.0) {
                anyhow::bail!("coverage radius must be a positive number, got {}", coverage_radius);
            }
            let config = SearchConfig {
                coverage_radius,
                max_iterations,
                ..SearchConfig::default()
            };
            let planner = FieldPlanner::standard_with_config(config);
            let placement = planner.place(&delivery, fielders);

            if json {
                println!("{}", serde_json::to_string_pretty(&placement)?);
            } else {
                print_placement(&placement, 4);
                println!();
                print_assignments(&placement);
            }

            if baseline > 0 {
                let mut rng = if let Some(s) = seed {
                    SmallRng::seed_from_u64(s)
                } else {
                    let mut seed_rng = rand::rng();
                    SmallRng::from_rng(&mut seed_rng)
                };
                let profile = planner.profile(&delivery);
                let cost = random_baseline_cost(
                    planner.catalog(),
                    &profile,
                    fielders,
                    baseline,
                    config.coverage_radius,
                    &mut rng,
                );
                eprintln!(
                    "random baseline over {} samples: h(n)={:.4} (search: {})",
                    baseline, cost, placement.final_cost
                );
            }
        }
        Commands::Demo => {
            let planner = FieldPlanner::standard();
            for delivery in ["yorker", "bouncer", "off spin"] {
                let placement = planner.place(delivery, DEFAULT_FIELDERS);
                print_placement(&placement, 4);
            }
        }
        Commands::Zones => {
            print_zone_table(FieldPlanner::standard().catalog());
        }
        Commands::Deliveries => {
            let planner = FieldPlanner::standard();
            for delivery in planner.deliveries() {
                print_profile(planner.catalog(), &planner.profile(delivery));
            }
        }
    }
    Ok(())
}
