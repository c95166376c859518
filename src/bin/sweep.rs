use fieldplan::{random_baseline_cost, FieldPlanner, DEFAULT_FIELDERS};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

const BASELINE_SAMPLES: usize = 64;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let planner = FieldPlanner::standard();
    let mut rows = Vec::new();
    for delivery in planner.deliveries() {
        let placement = planner.place(delivery, DEFAULT_FIELDERS);
        let profile = planner.profile(delivery);
        let baseline = random_baseline_cost(
            planner.catalog(),
            &profile,
            DEFAULT_FIELDERS,
            BASELINE_SAMPLES,
            planner.config().coverage_radius,
            &mut rng,
        );
        rows.push(json!({
            "delivery": delivery,
            "efficiency": placement.efficiency,
            "best_cost": placement.best_cost,
            "final_cost": placement.final_cost,
            "iterations": placement.iterations,
            "assigned": placement.assigned,
            "key_zones": placement
                .fielders
                .iter()
                .filter(|f| f.is_key)
                .map(|f| f.zone.as_str())
                .collect::<Vec<_>>(),
            "random_baseline_cost": baseline,
        }));
    }

    println!("{}", serde_json::to_string(&rows)?);
    Ok(())
}
