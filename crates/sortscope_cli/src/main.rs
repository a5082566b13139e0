//! SORTSCOPE CLI
//!
//! Plays sorting traces in the terminal, dumps them as JSON, and verifies the
//! generators against seeded inputs.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod keys;
mod render;
mod settings;

use clap::{Parser, Subcommand};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use console::{style, Key, Term};
use indicatif::{ProgressBar, ProgressStyle};
use keys::KeyAction;
use serde::Serialize;
use settings::PlaybackArgs;
use sortscope_core::{Algorithm, Complexity, PlaybackConfig, PlaybackStatus, SizeBounds};
use sortscope_replay::PlaybackController;
use sortscope_sim::{Harness, HarnessConfig, InputGenerator, SimSeed, VerifyReport};
use sortscope_trace::generate;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sortscope")]
#[command(about = "SORTSCOPE - step-by-step sorting algorithm playback", long_about = None)]
struct Cli {
    /// Log filter directive, e.g. `sortscope=debug` (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a trace in the terminal
    Play {
        #[command(flatten)]
        playback: PlaybackArgs,
    },
    /// Print a trace as JSON
    Trace {
        #[command(flatten)]
        playback: PlaybackArgs,
        /// Explicit input instead of a random one, e.g. `5,3,4,1,2`
        #[arg(long, value_delimiter = ',')]
        values: Vec<u32>,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Check every generator against seeded inputs
    Verify {
        /// Restrict to one algorithm
        #[arg(short, long)]
        algorithm: Option<Algorithm>,
        /// Base seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Inputs per size and shape
        #[arg(long, default_value_t = 3)]
        runs: usize,
        /// Print the full reports as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show algorithm facts
    Info {
        /// Only this algorithm
        algorithm: Option<Algorithm>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // playback redraws stdout in place, so keep routine logs out of the way
    let default_filter = match cli.command {
        Commands::Play { .. } => "sortscope=warn",
        _ => "sortscope=info",
    };
    init_tracing(cli.log_level.as_deref().unwrap_or(default_filter), cli.log_json);

    match cli.command {
        Commands::Play { playback } => play(playback.resolve()?),
        Commands::Trace {
            playback,
            values,
            pretty,
        } => trace(&playback, values, pretty),
        Commands::Verify {
            algorithm,
            seed,
            runs,
            json,
        } => verify(algorithm, seed, runs, json),
        Commands::Info { algorithm, json } => info_command(algorithm, json),
    }
}

fn init_tracing(directive: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn play(config: PlaybackConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async move {
        let controller = PlaybackController::new(config)?;
        let (player, handle) = sortscope_replay::channel(controller);
        let task = tokio::spawn(player.run());
        let mut frames = handle.subscribe();
        let mut screen = render::Screen::stdout();

        let interactive = Term::stdout().is_term();
        let (key_tx, mut keys) = mpsc::channel::<Key>(16);
        if interactive {
            screen.header(keys::HELP)?;
            tokio::task::spawn_blocking(move || {
                let term = Term::stdout();
                // Ctrl-C in raw mode surfaces as an error and ends the reader
                while let Ok(key) = term.read_key() {
                    if key_tx.blocking_send(key).is_err() {
                        break;
                    }
                }
            });
        } else {
            drop(key_tx);
        }

        handle.play().await?;
        loop {
            let view = frames.borrow_and_update().clone();
            screen.draw(&view)?;
            if !interactive && view.status == PlaybackStatus::Finished {
                break;
            }
            tokio::select! {
                changed = frames.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                key = keys.recv(), if interactive => {
                    let Some(key) = key else {
                        info!("key reader stopped");
                        break;
                    };
                    match keys::action_for_key(&key, &view) {
                        Some(KeyAction::Send(command)) => handle.send(command).await?,
                        Some(KeyAction::Quit) => break,
                        None => {}
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("interrupted");
                    break;
                }
            }
        }

        handle.shutdown().await?;
        task.await?;
        Ok::<(), color_eyre::Report>(())
    });

    // the key reader stays blocked in read_key until the next key press
    runtime.shutdown_background();
    result
}

fn trace(playback: &PlaybackArgs, values: Vec<u32>, pretty: bool) -> Result<()> {
    let config = playback.resolve()?;
    let input = if values.is_empty() {
        InputGenerator::new(&SimSeed::from_option(config.seed)).random(config.size)
    } else {
        values
    };

    let trace = generate(config.algorithm, &input)?;
    info!(algorithm = %config.algorithm, steps = trace.len(), "trace generated");
    if pretty {
        println!("{}", trace.to_json_pretty());
    } else {
        println!("{}", trace.to_json());
    }
    Ok(())
}

fn verify(algorithm: Option<Algorithm>, seed: u64, runs: usize, json: bool) -> Result<()> {
    let harness = Harness::new(
        HarnessConfig::new(SimSeed::from_literal(seed)).with_runs_per_size(runs),
    );
    let algorithms = algorithm.map_or_else(|| Algorithm::ALL.to_vec(), |one| vec![one]);
    let total: usize = algorithms.iter().map(|a| harness.planned_traces(*a)).sum();

    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg:<15} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let reports: Vec<VerifyReport> = algorithms
        .into_iter()
        .map(|algorithm| {
            bar.set_message(algorithm.display_name());
            harness.run_with_progress(algorithm, |_| bar.inc(1))
        })
        .collect();
    bar.finish_and_clear();

    for report in &reports {
        let summary = report.summary();
        if report.passed() {
            println!("{}", style(summary).green());
        } else {
            println!("{}", style(summary).red());
            for finding in report.findings.iter().take(5) {
                println!("  {} on {:?}", finding.violation, finding.input);
            }
        }
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    let failed = reports.iter().filter(|report| !report.passed()).count();
    if failed > 0 {
        return Err(eyre!("{failed} algorithm(s) failed verification"));
    }
    Ok(())
}

/// Facts shown by `info`
#[derive(Serialize)]
struct AlgorithmInfo {
    name: &'static str,
    display_name: &'static str,
    complexity: Complexity,
    stable: bool,
    size_bounds: SizeBounds,
    default_size: usize,
    default_speed: u32,
    mutation_counter: &'static str,
}

impl From<Algorithm> for AlgorithmInfo {
    fn from(algorithm: Algorithm) -> Self {
        Self {
            name: algorithm.name(),
            display_name: algorithm.display_name(),
            complexity: algorithm.complexity(),
            stable: algorithm.is_stable(),
            size_bounds: algorithm.size_bounds(),
            default_size: algorithm.default_size(),
            default_speed: algorithm.default_speed(),
            mutation_counter: algorithm.mutation_label(),
        }
    }
}

fn info_command(algorithm: Option<Algorithm>, json: bool) -> Result<()> {
    let infos: Vec<AlgorithmInfo> = algorithm
        .map_or_else(|| Algorithm::ALL.to_vec(), |one| vec![one])
        .into_iter()
        .map(AlgorithmInfo::from)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    for info in &infos {
        println!("{} ({})", style(info.display_name).bold(), info.name);
        println!(
            "  time: best {}, average {}, worst {}",
            info.complexity.best, info.complexity.average, info.complexity.worst
        );
        println!("  space: {}", info.complexity.space);
        println!("  stable: {}", if info.stable { "yes" } else { "no" });
        println!(
            "  size: {}..={} (default {}), speed default {}, counts {}",
            info.size_bounds.min,
            info.size_bounds.max,
            info.default_size,
            info.default_speed,
            info.mutation_counter
        );
    }
    Ok(())
}
