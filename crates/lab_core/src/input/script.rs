// crates/lab_core/src/input/script.rs

//! Scripted keyboard input for headless runs.
//!
//! A script is a comma-separated list of frames. Each frame is a `+`-joined
//! set of keys, optionally repeated with `*N`:
//!
//! ```text
//! right*30,right+jump,idle*10
//! ```
//!
//! `left`, `right`, `jump`, `restart` and `space` are aliases for the
//! default keys; `idle` holds nothing; any other token is taken as a raw
//! key name ("d", "ArrowUp").

use std::str::FromStr;

use crate::error::CoreError;

fn alias(token: &str) -> Option<&'static str> {
    match token {
        "left" => Some("ArrowLeft"),
        "right" => Some("ArrowRight"),
        "jump" => Some("ArrowUp"),
        "restart" => Some("r"),
        "space" => Some(" "),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Segment {
    keys: Vec<String>,
    repeat: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputScript {
    segments: Vec<Segment>,
    cursor: usize,
    used: u32,
}

impl InputScript {
    /// Total number of frames the script covers.
    pub fn total_frames(&self) -> u64 {
        self.segments.iter().map(|s| u64::from(s.repeat)).sum()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.segments.len()
    }

    /// Keys held on the next frame, or `None` once the script has run out.
    pub fn next_frame(&mut self) -> Option<&[String]> {
        while let Some(segment) = self.segments.get(self.cursor) {
            if self.used < segment.repeat {
                self.used += 1;
                return self.segments.get(self.cursor).map(|s| s.keys.as_slice());
            }
            self.cursor += 1;
            self.used = 0;
        }
        None
    }
}

fn script_error(token: &str, reason: impl Into<String>) -> CoreError {
    CoreError::Script {
        token: token.to_string(),
        reason: reason.into(),
    }
}

fn parse_segment(token: &str) -> Result<Segment, CoreError> {
    let (body, repeat) = match token.split_once('*') {
        Some((body, count)) => {
            let repeat = count
                .trim()
                .parse::<u32>()
                .map_err(|e| script_error(token, e.to_string()))?;
            if repeat == 0 {
                return Err(script_error(token, "repeat count must be at least 1"));
            }
            (body.trim(), repeat)
        }
        None => (token, 1),
    };

    if body.is_empty() {
        return Err(script_error(token, "empty frame"));
    }

    let mut keys = Vec::new();
    for part in body.split('+').map(str::trim) {
        match part {
            "" => return Err(script_error(token, "empty key")),
            "idle" => {}
            other => keys.push(alias(other).unwrap_or(other).to_string()),
        }
    }
    Ok(Segment { keys, repeat })
}

impl FromStr for InputScript {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = s
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(parse_segment)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            segments,
            cursor: 0,
            used: 0,
        })
    }
}
