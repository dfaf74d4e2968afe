#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

mod config;
mod cube;
mod harness;
mod heuristic;
mod r#move;
mod problem;
mod search;
mod truck;

mod prelude;
use prelude::*;


fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    simple_logger::SimpleLogger::new()
        .with_level(config.log_level)
        .init()
        .map_err(|e| anyhow::anyhow!("Could not install logger: {}", e))?;

    println!("\n{}", "=".repeat(50));
    println!("=== MAGIC TRUCK ===");
    let truck = MagicTruck;
    let start = TruckState::new(config.truck_start, config.truck_goal)?;
    println!("{}", truck.describe(&start)?);
    let comparison = compare(
        &truck,
        &start,
        &[
            ("A* with h1", &relaxed_doublings as &dyn Heuristic<TruckState>),
            ("A* with h2", &backward_greedy as &dyn Heuristic<TruckState>),
            ("A* with 0", &zero::<TruckState> as &dyn Heuristic<TruckState>),
        ],
        config.limits,
    )?;
    println!("{}", comparison);

    println!("\n{}", "=".repeat(50));
    println!("=== RUBIK'S CUBE ===");
    let cube = RubiksCube::new();
    let scrambled = Cube::solved().apply_all(config.scramble.iter().copied());
    println!("{}", cube.describe(&scrambled)?);
    let comparison = compare(
        &cube,
        &scrambled,
        &[
            ("A* with h1", &generous_footprint as &dyn Heuristic<Cube>),
            ("A* with h2", &turn_footprint as &dyn Heuristic<Cube>),
        ],
        config.limits,
    )?;
    println!("{}", comparison);

    Ok(())
}
