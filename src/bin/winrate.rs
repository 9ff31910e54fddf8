use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser;
use plotters::prelude::*;
use rayon::prelude::*;
use tracing::{debug, info};

use tunk::visualize::seat_name;
use tunk::{
    GameConfig, GameError, GameResult, GameSettings, Lineup, RotationAverages, SEAT_COUNT,
    SeatConfig, Tally, Tier, parse_seat_spec, play_game_with_events,
};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xC0FFEE_u64 << 32 | 0x5EED_u64;

#[derive(Parser, Debug)]
#[command(
    name = "winrate",
    about = "Run many games per seat lineup and report per-seat win ratios."
)]
struct Args {
    /// Number of games to simulate per lineup
    #[arg(short = 'g', long = "games", default_value_t = 1000)]
    games: u32,

    /// Base RNG seed (each game's seed is derived deterministically)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Lineups to compare, e.g. all-expert or basic-vs-intermediate (default: all nine)
    #[arg(short = 'l', long = "lineup")]
    lineups: Vec<String>,

    /// Explicit seat specs (4 total); replaces --lineup
    #[arg(long = "seats", num_args = 4, conflicts_with = "lineups")]
    seats: Option<Vec<String>>,

    /// Sweep seat 0's beta from 0 to 10 against three default experts
    #[arg(long = "beta-sweep", conflicts_with_all = ["lineups", "seats"])]
    beta_sweep: bool,

    /// JSON file with rule overrides
    #[arg(long = "rules")]
    rules: Option<PathBuf>,

    /// Directory for per-lineup text summaries
    #[arg(long = "out-dir")]
    out_dir: Option<PathBuf>,

    /// Render seat 0 win ratios to this PNG file
    #[arg(long = "chart")]
    chart: Option<PathBuf>,

    /// Print mean hand totals per table rotation
    #[arg(long = "rotations")]
    rotations: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// One configuration under test.
struct Experiment {
    name: String,
    seats: Vec<SeatConfig>,
}

struct Summary {
    name: String,
    tally: Tally,
    rotations: RotationAverages,
}

fn main() {
    let args = Args::parse();
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.games == 0 {
        return Err("games must be positive".into());
    }
    let settings = load_settings(args.rules.as_deref())?;
    settings.validate()?;
    let experiments = experiments(&args)?;
    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir)?;
    }

    let mut summaries = Vec::with_capacity(experiments.len());
    for experiment in experiments {
        let started = Instant::now();
        let summary = run_experiment(&experiment, settings, args.games, args.seed)?;
        info!(
            lineup = %summary.name,
            games = args.games,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "lineup finished"
        );

        let report = render_report(&experiment, &summary, args.rotations);
        println!("{report}");
        if let Some(dir) = &args.out_dir {
            let path = dir.join(format!("tunk_output_{}.txt", summary.name));
            fs::write(&path, &report)
                .map_err(|err| format!("failed to write {}: {err}", path.display()))?;
            debug!(path = %path.display(), "summary written");
        }
        summaries.push(summary);
    }

    if let Some(chart) = &args.chart {
        render_bar_chart(chart, &summaries)?;
        println!("Chart written to {}", chart.display());
    }
    Ok(())
}

fn experiments(args: &Args) -> Result<Vec<Experiment>, GameError> {
    if args.beta_sweep {
        return Ok((0..=10u8)
            .map(|beta| {
                let mut seats = vec![SeatConfig::new(Tier::Expert); SEAT_COUNT];
                seats[0] = SeatConfig::new(Tier::Expert).with_beta(beta);
                Experiment {
                    name: format!("expert-beta-{beta}"),
                    seats,
                }
            })
            .collect());
    }
    if let Some(specs) = &args.seats {
        let seats = specs
            .iter()
            .map(|spec| parse_seat_spec(spec))
            .collect::<Result<Vec<_>, _>>()?;
        let name = seats
            .iter()
            .map(|seat| seat.to_string().replace(':', "-"))
            .collect::<Vec<_>>()
            .join("_");
        return Ok(vec![Experiment { name, seats }]);
    }
    let lineups = if args.lineups.is_empty() {
        Lineup::standard()
    } else {
        args.lineups
            .iter()
            .map(|name| name.parse())
            .collect::<Result<Vec<Lineup>, _>>()?
    };
    Ok(lineups
        .into_iter()
        .map(|lineup| Experiment {
            name: lineup.name(),
            seats: lineup.seats().to_vec(),
        })
        .collect())
}

fn run_experiment(
    experiment: &Experiment,
    settings: GameSettings,
    games: u32,
    base_seed: u64,
) -> Result<Summary, GameError> {
    // Every game owns its state, so games run independently across threads.
    let outcomes = (0..games)
        .into_par_iter()
        .map(|game_idx| -> Result<(GameResult, RotationAverages), GameError> {
            let config = GameConfig {
                seats: experiment.seats.clone(),
                settings,
                seed: mix_seed(base_seed, u64::from(game_idx)),
            };
            let mut rotations = RotationAverages::default();
            let result = play_game_with_events(&config, &mut rotations)?;
            Ok((result, rotations))
        })
        .collect::<Result<Vec<(GameResult, RotationAverages)>, GameError>>()?;

    let mut tally = Tally::default();
    let mut rotations = RotationAverages::default();
    for (result, game_rotations) in outcomes {
        tally.record(&result);
        rotations = rotations.merge(game_rotations);
    }
    Ok(Summary {
        name: experiment.name.clone(),
        tally,
        rotations,
    })
}

fn render_report(experiment: &Experiment, summary: &Summary, rotations: bool) -> String {
    let mut out = String::new();
    let seats = experiment
        .seats
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "Lineup {} [{seats}]", summary.name);
    let tally = &summary.tally;
    for seat in 0..SEAT_COUNT {
        let name = seat_name(seat);
        let _ = writeln!(out, "{name} wins: {}", tally.wins[seat]);
        let _ = writeln!(out, "{name} losses: {}", tally.losses[seat]);
        let _ = writeln!(out, "{name} win ratio: {:.4}", tally.win_ratio(seat));
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "Average rounds per game: {:.2}", tally.mean_rounds());
    if rotations {
        for (index, average) in summary.rotations.averages().iter().enumerate() {
            let _ = writeln!(out, "Rotation {} average hand: {average:.2}", index + 1);
        }
    }
    out
}

fn mix_seed(base: u64, game: u64) -> u64 {
    // Simple reversible mixer (xorshift-like mix).
    let mut z = base ^ game.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z ^= z >> 12;
    z ^= z << 25;
    z ^= z >> 27;
    z
}

fn load_settings(path: Option<&Path>) -> Result<GameSettings, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(GameSettings::default());
    };
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("failed to read rules file {}: {err}", path.display()))?;
    Ok(serde_json::from_str(&raw)?)
}

fn render_bar_chart(out: &Path, data: &[Summary]) -> Result<(), Box<dyn Error>> {
    let labels: Vec<String> = data.iter().map(|s| s.name.clone()).collect();
    let values: Vec<f64> = data.iter().map(|s| s.tally.win_ratio(0) * 100.0).collect();

    let root = BitMapBackend::new(out, (1200, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| format!("{e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Tunk seat 0 win ratio", ("sans-serif", 28).into_font())
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..labels.len(), 0.0f64..100.0)
        .map_err(|e| format!("{e}"))?;

    chart
        .configure_mesh()
        .y_desc("Win ratio (%)")
        .x_desc("Lineup")
        .x_labels(labels.len())
        .x_label_formatter(&|idx| labels.get(*idx).cloned().unwrap_or_default())
        .y_label_formatter(&|v| format!("{v:.0}"))
        .light_line_style(&WHITE.mix(0.0))
        .draw()
        .map_err(|e| format!("{e}"))?;

    for (i, value) in values.iter().enumerate() {
        let rect = Rectangle::new([(i, 0.0), (i + 1, *value)], BLUE.filled());
        chart
            .draw_series(std::iter::once(rect))
            .map_err(|e| format!("{e}"))?;
    }

    root.present().map_err(|e| format!("{e}"))?;
    Ok(())
}
