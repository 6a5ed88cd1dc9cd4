//! Show information about a cast.

use std::collections::BTreeMap;
use std::path::PathBuf;

use castedit_cast_model::{Recording, StreamStats};
use castedit_common::clock::{format_duration, unix_to_utc};
use serde::Serialize;

/// Machine-readable form printed by `info --json`.
#[derive(Debug, Serialize)]
struct CastInfo<'a> {
    version: u8,
    width: u32,
    height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    recorded_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    idle_time_limit: Option<f64>,
    env: &'a BTreeMap<String, String>,
    events: usize,
    output_events: usize,
    input_events: usize,
    output_bytes: usize,
    input_bytes: usize,
    duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    longest_delay: Option<LongestDelay>,
}

#[derive(Debug, Serialize)]
struct LongestDelay {
    index: usize,
    at: f64,
    delay: f64,
}

impl<'a> CastInfo<'a> {
    fn new(recording: &'a Recording, stats: &StreamStats) -> Self {
        let header = &recording.header;
        Self {
            version: header.version,
            width: header.width,
            height: header.height,
            recorded_at: header
                .timestamp
                .and_then(unix_to_utc)
                .map(|t| t.to_rfc3339()),
            title: header.title.as_deref(),
            command: header.command.as_deref(),
            idle_time_limit: header.idle_time_limit,
            env: &header.env,
            events: recording.len(),
            output_events: stats.output_events,
            input_events: stats.input_events,
            output_bytes: stats.output_bytes,
            input_bytes: stats.input_bytes,
            duration: recording.duration(),
            longest_delay: stats.longest_delay.map(|(index, delay)| LongestDelay {
                index,
                at: recording.events[index].time,
                delay,
            }),
        }
    }
}

pub fn run(input: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let label = super::describe(input.as_deref());
    let recording = super::load(input.as_deref())?;
    let stats = recording.stats();
    let info = CastInfo::new(&recording, &stats);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Cast: {label}");
    println!("  Version: {}", info.version);
    println!("  Terminal: {}x{}", info.width, info.height);
    if let Some(ref at) = info.recorded_at {
        println!("  Recorded: {at}");
    }
    if let Some(title) = info.title {
        println!("  Title: {title}");
    }
    if let Some(command) = info.command {
        println!("  Command: {command}");
    }
    if let Some(limit) = info.idle_time_limit {
        println!("  Idle time limit: {limit}s");
    }
    for (key, value) in info.env {
        println!("  {key}: {value}");
    }
    println!();

    println!("Events:");
    println!(
        "  Output: {} ({} bytes)",
        info.output_events, info.output_bytes
    );
    println!("  Input: {} ({} bytes)", info.input_events, info.input_bytes);
    println!("  Duration: {}", format_duration(info.duration));
    match info.longest_delay {
        Some(ref d) => println!(
            "  Longest delay: {:.3}s before event {} at {}",
            d.delay,
            d.index,
            format_duration(d.at)
        ),
        None => println!("  Longest delay: n/a"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use castedit_cast_model::decode_str;

    #[test]
    fn test_info_json_layout() {
        let recording = decode_str(
            "{\"version\":2,\"width\":80,\"height\":24,\"timestamp\":1504467315,\"title\":\"Demo\"}\n\
             [0.5,\"o\",\"ab\"]\n[1.0,\"i\",\"c\"]\n[4.0,\"o\",\"d\"]\n",
        )
        .unwrap();
        let stats = recording.stats();
        let value = serde_json::to_value(CastInfo::new(&recording, &stats)).unwrap();

        assert_eq!(value["recorded_at"], "2017-09-03T19:35:15+00:00");
        assert_eq!(value["title"], "Demo");
        assert!(value.get("command").is_none());
        assert_eq!(value["events"], 3);
        assert_eq!(value["output_bytes"], 3);
        assert_eq!(value["input_events"], 1);
        assert_eq!(value["duration"], 4.0);
        assert_eq!(value["longest_delay"]["index"], 2);
        assert_eq!(value["longest_delay"]["delay"], 3.0);
    }
}
