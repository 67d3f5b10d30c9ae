//! Replays a recorded arena session through the decision engine.
//!
//! Run with: `cargo run -p arena-replay -- <SCRIPT>`
//!
//! Decisions go to stdout, logs to stderr (`RUST_LOG` controls verbosity).
//! Agent tuning comes from `ARENA_*` environment variables, optionally
//! loaded from a `.env` file.

mod script;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use arena_agent::{Agent, AgentConfig};
use clap::Parser;

use script::{Frame, ScriptLine};

/// Replay a recorded arena session
#[derive(Parser)]
#[command(name = "arena-replay")]
#[command(about = "Replay a JSON-lines session script through the arena agent", long_about = None)]
#[command(version)]
struct Cli {
    /// Session script (JSON lines, one frame per line)
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Override the disengage coin seed (ARENA_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Override the scoreboard name (ARENA_PLAYER_NAME)
    #[arg(long, value_name = "NAME")]
    player: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One human-readable line per decision
    Text,
    /// One JSON object per decision
    Json,
}

fn main() -> Result<()> {
    // Load .env file if it exists (for ARENA_* and RUST_LOG)
    let _ = dotenvy::dotenv();
    setup_logging();

    let cli = Cli::parse();

    let mut config = AgentConfig::from_env();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(player) = cli.player.clone() {
        config = config.with_player_name(player);
    }
    config
        .validate()
        .context("Agent configuration rejected")?;

    let file = File::open(&cli.script)
        .with_context(|| format!("Failed to open script: {}", cli.script.display()))?;
    let frames = script::parse_script(BufReader::new(file))?;
    tracing::info!("Loaded {} frames from {}", frames.len(), cli.script.display());

    let mismatches = replay(Agent::new(config), &frames, cli.format)?;
    if mismatches > 0 {
        anyhow::bail!("{} decision(s) differed from the script's expectations", mismatches);
    }
    Ok(())
}

/// Logs to stderr so stdout stays machine-readable.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

/// Feeds every frame to `agent`, printing each decision. Returns the number
/// of decisions that contradicted an `expect`.
fn replay(mut agent: Agent, frames: &[ScriptLine], format: OutputFormat) -> Result<usize> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut cycle = 0usize;
    let mut mismatches = 0usize;

    for ScriptLine { line, frame } in frames {
        match frame {
            Frame::Status(status) => agent.record_status(*status),
            Frame::Observe { cues } => agent.record_raw_observation(cues),
            Frame::Clear => agent.clear_observations(),
            Frame::Scoreboard(update) => agent.update_scoreboard(update),
            Frame::Decide { expect } => {
                cycle += 1;
                let action = agent.decide();
                let tier = agent.last_decision().map(|d| d.tier).unwrap_or_default();
                let status = agent.status();

                match format {
                    OutputFormat::Text => writeln!(
                        out,
                        "{:>4}  {:<16} {:<16} {} {}",
                        cycle,
                        action.as_protocol(),
                        tier,
                        status.position,
                        status.facing
                    )?,
                    OutputFormat::Json => writeln!(
                        out,
                        "{}",
                        serde_json::json!({
                            "cycle": cycle,
                            "line": line,
                            "action": action,
                            "tier": tier,
                            "state": agent.state().as_ref(),
                            "position": status.position,
                            "facing": status.facing,
                        })
                    )?,
                }

                if let Some(expected) = expect {
                    if *expected != action {
                        tracing::warn!(
                            "line {}: expected {} but decided {} via {}",
                            line,
                            expected,
                            action,
                            tier
                        );
                        mismatches += 1;
                    }
                }
            }
        }
    }

    tracing::info!("Replayed {} decisions, {} mismatched", cycle, mismatches);
    Ok(mismatches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_strafe_script_matches_expectations() {
        let bundled = include_str!("../scripts/strafe.jsonl");
        let frames = script::parse_script(bundled.as_bytes()).unwrap();
        let agent = Agent::new(AgentConfig::default());
        let mismatches = replay(agent, &frames, OutputFormat::Json).unwrap();
        assert_eq!(mismatches, 0);
    }

    #[test]
    fn wrong_expectation_is_counted() {
        let script = concat!(
            r#"{"frame":"status","position":{"x":0,"y":0},"facing":"north","lifecycle":"game","score":0,"energy":100}"#,
            "\n",
            r#"{"frame":"observe","cues":["blueLight"]}"#,
            "\n",
            r#"{"frame":"decide","expect":"atacar"}"#,
            "\n",
        );
        let frames = script::parse_script(script.as_bytes()).unwrap();
        let agent = Agent::new(AgentConfig::default());
        let mismatches = replay(agent, &frames, OutputFormat::Text).unwrap();
        assert_eq!(mismatches, 1);
    }
}
