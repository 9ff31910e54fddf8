use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;

use tunk::{
    Event, FnSink, GameConfig, GameSettings, LogOptions, SeatConfig, describe_event_with_options,
    parse_seat_spec, play_game_with_events,
};

const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Play a single game of Tunk and print its log.")]
struct Args {
    /// Seed for shuffling
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Score at which the game ends (overrides the rules file)
    #[arg(short = 't', long = "threshold")]
    threshold: Option<u32>,

    /// JSON file with rule overrides (hand_size, declare_threshold, ...)
    #[arg(long = "rules")]
    rules: Option<PathBuf>,

    /// Print events as JSON lines instead of the text log
    #[arg(long = "json")]
    json: bool,

    /// Include the mean hand total after every table rotation
    #[arg(long = "rotations")]
    rotations: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Seat specs in turn order: basic, intermediate, expert[:beta] (4 total)
    seats: Vec<String>,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let seats: Vec<SeatConfig> = if args.seats.is_empty() {
        vec![parse_seat_spec("basic")?; 4]
    } else {
        args.seats
            .iter()
            .map(|spec| parse_seat_spec(spec))
            .collect::<Result<_, _>>()?
    };

    let mut config = GameConfig::new(seats, args.seed)?;
    config.settings = load_settings(args.rules.as_ref())?;
    if let Some(threshold) = args.threshold {
        config.settings.score_threshold = threshold;
    }
    info!(seed = config.seed, seats = ?config.seats, "starting game");

    let options = LogOptions {
        show_rotations: args.rotations,
        ..LogOptions::default()
    };
    let json = args.json;
    let mut write_error: Option<serde_json::Error> = None;
    let mut sink = FnSink(|event: Event| {
        if json {
            match serde_json::to_string(&event) {
                Ok(line) => println!("{line}"),
                Err(err) => {
                    write_error.get_or_insert(err);
                }
            }
        } else {
            let text = describe_event_with_options(&event, options);
            if !text.is_empty() {
                println!("{text}");
            }
        }
    });

    let result = play_game_with_events(&config, &mut sink)?;
    if let Some(err) = write_error {
        return Err(err.into());
    }
    if !json {
        println!("Final scores: {:?}", result.final_scores);
        println!("Rounds played: {}", result.rounds_played);
    }
    Ok(())
}

fn load_settings(path: Option<&PathBuf>) -> Result<GameSettings, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(GameSettings::default());
    };
    let raw = fs::read_to_string(path)
        .map_err(|err| format!("failed to read rules file {}: {err}", path.display()))?;
    Ok(serde_json::from_str(&raw)?)
}
