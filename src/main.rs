use ant_forage::prelude::*;
use ant_forage::terrain::{MapFile, OpenField};
use clap::Parser;
use colored::Colorize;
use std::time::Instant;

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let seed = args.seed.unwrap_or_else(|| fastrand::u64(..));
    let terrain = match &args.map {
        Some(path) => MapFile::new(path.as_str()).terrain()?,
        None => OpenField {
            rows: args.rows,
            cols: args.cols,
        }
        .terrain()?,
    };

    let mut simulator = AntColonySimulator::new(seed);
    simulator.setup(terrain);
    simulator.initialize()?;
    if let Some((x, y)) = args.nest {
        simulator.place_nest(x, y)?;
    }

    let (worker, events) = SimulationWorker::spawn(simulator)?;

    // Parameters and food land before the first tick
    let params = [
        args.ants.map(Command::SetMaxAnts),
        args.max_steps.map(Command::SetMaxAntSteps),
        args.strength.map(Command::SetPheromoneStrength),
        args.spread.map(Command::SetPheromoneSpread),
        args.decay.map(Command::SetPheromoneDecay),
    ];
    for command in params.into_iter().flatten() {
        worker.send(command)?;
    }
    for &(x, y) in &args.food {
        worker.send(Command::PlaceFood { x, y })?;
    }

    let sim_start = Instant::now();
    worker.send(Command::Step(args.ticks))?;
    let simulator = worker.join()?;
    let simulation_time = sim_start.elapsed();

    for event in events.try_iter() {
        if let SimEvent::FoodCount { delivered, total } = event {
            if !args.quiet && delivered > 0 {
                println!(
                    "{} {}",
                    "🍃".green(),
                    format!("food delivered {}/{}", delivered, total).bright_green()
                );
            }
        }
    }

    let (nest_x, nest_y) = simulator.nest().unwrap_or((-1, -1));
    println!(
        "\n{}\n{} {:.3} ms {} {} {} {} {} {} {}",
        "===".bright_blue().bold(),
        "⏱️  Simulation Latency:".green().bold(),
        simulation_time.as_secs_f64() * 1000.0,
        "|".dimmed(),
        format!("seed={}", seed).cyan(),
        format!("ticks={}", simulator.tick()).cyan(),
        format!("ants={}", simulator.ants().len()).cyan(),
        format!("nest={},{}", nest_x, nest_y).cyan(),
        format!("delivered={}", simulator.delivered_food()).cyan(),
        format!("total_food={}", simulator.total_food()).cyan(),
    );

    Ok(())
}
