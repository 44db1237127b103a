// algotty: step-by-step algorithm visualizer for the terminal

use std::error::Error;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use algotty::config::{clamp_speed, Config, DEFAULT_SPEED_MS, RANDOM_MAX};
use algotty::dataset::{Dataset, DEFAULT_DATASET};
use algotty::session::Session;
use algotty::tracer::Algorithm;
use algotty::ui::App;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "algotty",
    version,
    about = "Watch sorting, searching and BST algorithms run one step at a time"
)]
struct Cli {
    /// bubble, selection, insertion, quick, merge, linear, binary or bst
    #[arg(short, long, default_value = "bubble")]
    algorithm: Algorithm,

    /// Comma-separated dataset, e.g. "64,34,25,12"
    #[arg(short, long, allow_hyphen_values = true, conflicts_with = "random")]
    data: Option<Dataset>,

    /// Start from N random values instead
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Exclusive upper bound for random values
    #[arg(long, default_value_t = RANDOM_MAX)]
    max: i64,

    /// Seed for random datasets (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,

    /// Value to look for (linear and binary search)
    #[arg(short, long, allow_hyphen_values = true)]
    target: Option<String>,

    /// Delay between steps in milliseconds (100-2000)
    #[arg(short, long, default_value_t = DEFAULT_SPEED_MS)]
    speed: u64,

    /// Print the trace to stdout instead of starting the TUI
    #[arg(long)]
    print: bool,

    /// Write logs to this file (controlled by RUST_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let dataset = match (cli.data, cli.random) {
        (Some(data), _) => data,
        (None, Some(count)) => Dataset::random(&mut rng, count, cli.max),
        (None, None) => Dataset::new(DEFAULT_DATASET.to_vec()),
    };

    let speed_ms = clamp_speed(cli.speed);
    if speed_ms != cli.speed {
        warn!(requested = cli.speed, effective = speed_ms, "speed clamped");
    }

    let config = Config {
        algorithm: cli.algorithm,
        dataset,
        target: cli.target,
        speed_ms,
    };
    info!(algorithm = %config.algorithm, dataset = %config.dataset, "starting");

    if cli.print {
        let trace = match config
            .algorithm
            .trace(config.dataset.values(), config.target.as_deref())
        {
            Ok(trace) => trace,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
        for (i, line) in trace.describe().iter().enumerate() {
            println!("{:>4}  {}", i, line);
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(Session::new(config), rng);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
