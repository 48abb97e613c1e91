//! Reading event logs
//!
//! Two formats are understood: a JSON scenario document and a plain text log
//! with one `enter|exit <PLATE> <MINUTE>` event per line.

use crate::error::{Error, Result};
use crate::ledger::{Event, EventKind, RateSchedule};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON when the input starts with `{`, text otherwise
    #[default]
    Auto,
    Json,
    Text,
}

/// A parsed input. Capacity and rates are only present when the document
/// carried them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub capacity: Option<usize>,
    pub rates: Option<RateSchedule>,
    pub events: Vec<Event>,
}

/// Read a scenario from a file, or stdin when `path` is `-`
pub fn read_scenario(path: &Path, format: InputFormat) -> Result<Scenario> {
    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        std::fs::read(path)?
    };
    let contents = decode(bytes)?;
    parse_scenario(&contents, format)
}

/// Undecodable bytes are bad input, not an I/O failure
fn decode(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        Error::InvalidInput(format!(
            "not valid UTF-8 (byte offset {})",
            e.utf8_error().valid_up_to()
        ))
    })
}

pub fn parse_scenario(contents: &str, format: InputFormat) -> Result<Scenario> {
    let format = match format {
        InputFormat::Auto if contents.trim_start().starts_with('{') => InputFormat::Json,
        InputFormat::Auto => InputFormat::Text,
        other => other,
    };

    match format {
        InputFormat::Json => Ok(serde_json::from_str(contents)?),
        _ => Ok(Scenario {
            events: parse_event_log(contents)?,
            ..Default::default()
        }),
    }
}

/// Parse the text log format
pub fn parse_event_log(contents: &str) -> Result<Vec<Event>> {
    let mut events = Vec::new();

    for (idx, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        events.push(parse_line(line).map_err(|message| Error::Parse {
            line: idx + 1,
            message,
        })?);
    }

    Ok(events)
}

fn parse_line(line: &str) -> std::result::Result<Event, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [kind, plate, minute] = fields[..] else {
        return Err(format!(
            "expected `enter|exit <PLATE> <MINUTE>`, got {} field(s)",
            fields.len()
        ));
    };

    let kind = match kind.to_ascii_lowercase().as_str() {
        "enter" => EventKind::Enter,
        "exit" => EventKind::Exit,
        other => return Err(format!("unknown event kind '{}'", other)),
    };
    let timestamp = minute
        .parse::<i64>()
        .map_err(|_| format!("invalid minute '{}'", minute))?;

    Ok(Event::new(kind, plate, timestamp))
}
