//! Session script format.
//!
//! A script is a JSON-lines file, one frame per line, in the order the
//! transport delivered them. Blank lines and lines starting with `#` are
//! skipped.
//!
//! ```text
//! {"frame":"status","position":{"x":0,"y":0},"facing":"north","lifecycle":"game","score":0,"energy":100}
//! {"frame":"observe","cues":["breeze","enemy#3"]}
//! {"frame":"clear"}
//! {"frame":"scoreboard","entries":[{"name":"arena-agent","score":10}],"game_time_secs":42,"lifecycle":"game"}
//! {"frame":"decide","expect":"atacar"}
//! ```

use std::io::BufRead;

use anyhow::{Context, Result};
use arena_core::{Action, AgentStatus, ScoreboardUpdate};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "frame", rename_all = "snake_case")]
pub enum Frame {
    Status(AgentStatus),
    /// Raw cue strings, parsed the same way the live transport would.
    Observe {
        cues: Vec<String>,
    },
    Clear,
    Scoreboard(ScoreboardUpdate),
    /// Ask for a decision; `expect` turns the replay into a regression check.
    Decide {
        #[serde(default)]
        expect: Option<Action>,
    },
}

/// A frame with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub frame: Frame,
}

pub fn parse_script<R: BufRead>(reader: R) -> Result<Vec<ScriptLine>> {
    let mut frames = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let frame = serde_json::from_str(trimmed)
            .with_context(|| format!("Invalid frame on line {}: {}", line_no, trimmed))?;
        frames.push(ScriptLine {
            line: line_no,
            frame,
        });
    }
    Ok(frames)
}
