#![deny(unsafe_code)]
//! CLI driver for the magball physics engine.
//!
//! Subcommands:
//! - `run` — advance the engine N steps under a fixed activity mask
//! - `schema` — print the engine parameter schema

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use glam::DVec2;
use magball_core::{corner_positions, PhysicsEngine};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "magball", about = "Magnet-ball physics simulation CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the simulation for N steps and print the final ball state.
    Run {
        /// Domain width.
        #[arg(short = 'W', long, default_value_t = 100.0)]
        width: f64,

        /// Domain height.
        #[arg(short = 'H', long, default_value_t = 100.0)]
        height: f64,

        /// Number of simulation steps.
        #[arg(short, long, default_value_t = 500)]
        steps: usize,

        /// Time delta per step.
        #[arg(long, default_value_t = 0.01)]
        dt: f64,

        /// Activity mask, one '0' or '1' per source (e.g. 1001).
        /// Omitted means all sources off.
        #[arg(short, long)]
        active: Option<String>,

        /// Engine parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Optional path for a JSON-lines trajectory file (one record per step).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the engine parameter schema.
    Schema,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Schema => {
            let engine = PhysicsEngine::corner_layout(
                DVec2::new(100.0, 100.0),
                magball_core::PhysicsParams::default(),
            )?;
            println!("{}", serde_json::to_string_pretty(&engine.param_schema())?);
        }
        Command::Run {
            width,
            height,
            steps,
            dt,
            active,
            params,
            output,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

            let domain = DVec2::new(width, height);
            let mut engine =
                PhysicsEngine::from_json(domain, &corner_positions(domain), &params)?;

            let activities = parse_activity_mask(active.as_deref(), engine.sources().len())?;
            engine.set_source_activity(&activities)?;

            let mut trajectory = output.as_ref().map(|_| String::new());
            for step in 0..steps {
                engine.step(dt)?;
                if let Some(buf) = trajectory.as_mut() {
                    let pos = engine.position();
                    let vel = engine.velocity();
                    let record = serde_json::json!({
                        "step": step,
                        "position": [pos.x, pos.y],
                        "velocity": [vel.x, vel.y],
                    });
                    buf.push_str(&serde_json::to_string(&record)?);
                    buf.push('\n');
                }
            }

            if let (Some(path), Some(buf)) = (output.as_ref(), trajectory) {
                std::fs::write(path, buf).map_err(|e| {
                    CliError::Io(format!("failed to write {}: {e}", path.display()))
                })?;
            }

            let pos = engine.position();
            let vel = engine.velocity();
            if cli.json {
                let info = serde_json::json!({
                    "width": width,
                    "height": height,
                    "steps": steps,
                    "dt": dt,
                    "active": activities,
                    "position": [pos.x, pos.y],
                    "velocity": [vel.x, vel.y],
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "ran {steps} steps ({width}x{height}, dt {dt}) -> position ({:.3}, {:.3}), velocity ({:.3}, {:.3})",
                    pos.x, pos.y, vel.x, vel.y
                );
            }
        }
    }

    Ok(())
}

/// Parses a bitstring activity mask ("1001") into one flag per source.
///
/// `None` means all sources off. Length and characters are validated
/// against the engine's source count.
fn parse_activity_mask(mask: Option<&str>, n_sources: usize) -> Result<Vec<bool>, CliError> {
    let Some(mask) = mask else {
        return Ok(vec![false; n_sources]);
    };
    if mask.len() != n_sources {
        return Err(CliError::Input(format!(
            "activity mask must have {n_sources} digits, got {}",
            mask.len()
        )));
    }
    mask.chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(CliError::Input(format!(
                "activity mask digit must be 0 or 1, got '{other}'"
            ))),
        })
        .collect()
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
