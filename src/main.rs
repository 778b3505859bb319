// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/smartguard-rs

//! SmartGuard - Home Security Control Panel
//!
//! Runs the simulated security panel either as a native desktop window or,
//! with `--headless`, as a line-oriented console on stdin/stdout.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use smartguard::console::{self, Command, ParseCommandError};
use smartguard::core::{ControllerEvent, SystemClock};
use smartguard::{Config, SecurityController, TickScheduler, VERSION};

/// SmartGuard - Home Security Control Panel
#[derive(Parser, Debug)]
#[command(name = "smartguard")]
#[command(author = "SmartGuard Project")]
#[command(version = VERSION)]
#[command(about = "Simulated home security control panel")]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run in headless mode (console on stdin)
    #[arg(long)]
    headless: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable trace-level logging
    #[arg(long)]
    trace: bool,

    /// Seed the sensor simulator
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds between simulator ticks
    #[arg(long)]
    tick_secs: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Configuration comes first so its log level can seed the filter
    let config_path = args.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load_or_create(&config_path)?;

    if let Some(seed) = args.seed {
        config.simulator.seed = Some(seed);
    }
    if let Some(secs) = args.tick_secs {
        config.simulator.tick_interval_secs = secs;
    }
    config.validate()?;

    // --trace / --debug win over RUST_LOG, which wins over the config file
    let filter = if args.trace {
        EnvFilter::new("trace")
    } else if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_directive()))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(args.debug)
        .with_line_number(args.debug)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("SmartGuard v{} - Home Security Control Panel", VERSION);
    info!("Configuration loaded from {:?}", config_path);

    if args.headless {
        info!("Starting in headless mode...");
        let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        rt.block_on(run_headless(config))?;
    } else {
        #[cfg(feature = "gui")]
        {
            info!("Starting control panel window...");
            smartguard::ui::run_gui(config)?;
        }

        #[cfg(not(feature = "gui"))]
        {
            anyhow::bail!("GUI feature not enabled. Build with --features gui or use --headless");
        }
    }

    Ok(())
}

/// Console loop. Commands, simulator ticks and shutdown are serviced from
/// one task, so the controller never sees two operations at once.
async fn run_headless(config: Config) -> Result<()> {
    let mut controller = SecurityController::new(&config);
    let mut events = controller.subscribe();

    let mut scheduler = TickScheduler::new(
        SystemClock::new(),
        Duration::from_secs(config.simulator.tick_interval_secs),
    );
    if !config.simulator.enabled {
        scheduler.stop();
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    println!("{}", console::HELP);
    info!("SmartGuard console ready, press Ctrl+C or type `quit` to exit");

    loop {
        tokio::select! {
            _ = tokio::time::sleep(scheduler.time_until_next()), if scheduler.is_running() => {
                for _ in 0..scheduler.poll() {
                    controller.simulate_tick();
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(command) => println!("{}", console::execute(&mut controller, &command)),
                    Err(ParseCommandError::Empty) => {}
                    Err(e) => println!("{}", e),
                }
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
        }

        while let Ok(event) = events.try_recv() {
            match event {
                ControllerEvent::LogChanged(entry) => println!("{}", entry),
                ControllerEvent::Alarm { reason } => {
                    warn!("Security alert raised");
                    println!("*** SECURITY ALERT: ALARM TRIGGERED! Reason: {} ***", reason);
                }
            }
        }
    }

    scheduler.stop();
    info!("SmartGuard shutdown complete");
    Ok(())
}
