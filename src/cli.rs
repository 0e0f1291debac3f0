use clap::Parser;

/// CLI arguments for the headless foraging run
#[derive(Parser, Debug)]
#[command(name = "ant_forage", about = "🐜 Ant colony foraging on a cave grid")]
pub struct Args {
    /// Terrain map file ('#' rock, '.' floor). Without it an open field is used
    #[arg(short = 'm', long = "map")]
    pub map: Option<String>,

    /// Rows of the open field
    #[arg(long, default_value_t = 40)]
    pub rows: usize,

    /// Columns of the open field
    #[arg(long, default_value_t = 60)]
    pub cols: usize,

    /// Number of ticks to run
    #[arg(short = 't', long, default_value_t = 500)]
    pub ticks: u32,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Target number of ants (0-100)
    #[arg(short = 'n', long = "ants")]
    pub ants: Option<i32>,

    /// Steps an ant searches before heading home (0-300)
    #[arg(long)]
    pub max_steps: Option<i32>,

    /// Pheromone strength in percent (0-100)
    #[arg(long)]
    pub strength: Option<i32>,

    /// Pheromone spread radius (0-5)
    #[arg(long)]
    pub spread: Option<i32>,

    /// Pheromone decay per tick in percent (0-100)
    #[arg(long)]
    pub decay: Option<i32>,

    /// Nest position as X,Y. Random when omitted
    #[arg(long, value_parser = parse_point)]
    pub nest: Option<(i32, i32)>,

    /// Drop food around X,Y (repeatable)
    #[arg(long, value_parser = parse_point)]
    pub food: Vec<(i32, i32)>,

    /// Suppress per-delivery logs (for benchmarks)
    #[arg(short = 'q', long, default_value_t = false)]
    pub quiet: bool,
}

/// Parse an `X,Y` pair
pub fn parse_point(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad X in '{}': {}", s, e))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad Y in '{}': {}", s, e))?;
    Ok((x, y))
}
