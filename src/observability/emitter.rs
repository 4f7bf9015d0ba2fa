//! JSONL event emitter

#![allow(dead_code)]

use chrono::Utc;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::hook::HookEvent;

/// One audit record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Timestamp (UTC ISO 8601)
    pub timestamp: String,
    /// Event type
    pub event_type: String,
    /// Session ID if available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Tool name if applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
    /// Whether the dispatch produced a directive on stdout
    pub emitted: bool,
}

impl Event {
    /// Create a new record from a hook event and payload
    pub fn from_hook(hook_event: HookEvent, payload: &serde_json::Value, emitted: bool) -> Self {
        let session_id = payload
            .get("session_id")
            .or_else(|| payload.get("sessionId"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        let tool_name = payload
            .get("tool_name")
            .or_else(|| payload.get("toolName"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        Self {
            timestamp: Utc::now().to_rfc3339(),
            event_type: hook_event.name().to_string(),
            session_id,
            tool_name,
            emitted,
        }
    }
}

/// Path of the JSONL event log
pub fn events_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gg-hooks")
        .join("events.jsonl")
}

/// Record one dispatched event. Failures are logged and swallowed.
pub fn record(hook_event: HookEvent, payload: &serde_json::Value, emitted: bool) {
    let event = Event::from_hook(hook_event, payload, emitted);
    if let Err(err) = append(&event) {
        log::warn!("Failed to record hook event: {err:#}");
    }
}

fn append(event: &Event) -> Result<()> {
    let path = events_file();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create event log directory")?;
    }

    let line = serde_json::to_string(event).context("Failed to encode event")?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .context("Failed to open event log")?;
    writeln!(file, "{line}").context("Failed to append event")?;

    Ok(())
}
