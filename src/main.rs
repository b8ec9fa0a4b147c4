use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tessera_core::{init_file_logging, init_logging, AppConfig};
use tessera_lib::app::{run_headless, write_report, App, Mode};
use tessera_tui::{Tui, DEFAULT_FRAME};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Automaton to run
    #[arg(short, long, value_enum, default_value = "line")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Run without the terminal UI and print a JSON report
    #[arg(long)]
    headless: bool,

    /// Number of steps in headless mode
    #[arg(long, default_value_t = 1000)]
    steps: u64,

    /// Report destination in headless mode (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for both simulations, overriding the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Initial rule number of the line automaton
    #[arg(long)]
    rule: Option<u64>,

    /// Log file used while the terminal UI is active
    #[arg(long, default_value = "tessera.log")]
    log_file: PathBuf,

    /// Redraw interval of the terminal UI in milliseconds
    #[arg(long, default_value_t = DEFAULT_FRAME.as_millis() as u64)]
    frame_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if args.headless {
        init_logging();
    } else {
        init_file_logging(&args.log_file)?;
    }

    let mut config = AppConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.rule.is_some() {
        config.line.rule = args.rule;
    }
    config.validate()?;

    if args.headless {
        let report = run_headless(args.mode, &config, args.steps)?;
        write_report(&report, args.output.as_deref())?;
        return Ok(());
    }

    let mut tui = Tui::new(Duration::from_millis(args.frame_ms))?;
    tui.init()?;

    let mut app = App::new(args.mode, &config)?;
    let res = app.run(&mut tui).await;

    tui.exit()?;

    if let Err(e) = res {
        eprintln!("Application error: {e}");
    }
    Ok(())
}
