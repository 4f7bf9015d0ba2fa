//! `gg-hooks hook` - the entry points Claude Code invokes
//!
//! Dispatch reads one event payload from stdin, runs the matching handler,
//! and prints at most one directive document. It exits 0 no matter what:
//! the host treats a non-zero hook exit or malformed output as a hard
//! failure of the turn, so every internal error degrades to "no opinion"
//! with a diagnostic on stderr.

use colored::*;
use eyre::{eyre, Context, Result};
use std::io::{self, Read};

use crate::cli::HookAction;
use crate::config::HookContext;
use crate::hook::{dispatch, HookEvent};
use crate::observability;

const HANDLED_EVENTS: &[(&str, &str)] = &[
    ("pre-tool-use", "auto-approves safe editing tools and unchained mkdir"),
    ("user-prompt-submit", "injects the per-turn protocol reminder"),
    ("session-start", "injects the protocol primer (full or compact)"),
];

pub fn run(action: HookAction) -> Result<()> {
    match action {
        HookAction::Dispatch { event, payload } => dispatch_event(&event, payload.as_deref()),
        HookAction::List { event } => list(event.as_deref()),
    }
}

/// Error boundary: never returns to the caller, never exits non-zero.
fn dispatch_event(event: &str, payload: Option<&str>) -> ! {
    if let Err(err) = try_dispatch(event, payload) {
        log::error!("{event} dispatch failed: {err:#}");
        eprintln!("gg-hooks {event} error: {err:#}");
    }
    std::process::exit(0);
}

fn try_dispatch(event: &str, payload: Option<&str>) -> Result<()> {
    let event = HookEvent::from_str(event).ok_or_else(|| eyre!("unknown hook event: {event}"))?;

    // Read payload from stdin if not provided
    let raw = match payload {
        Some(p) => p.to_string(),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read payload from stdin")?;
            buffer
        }
    };

    let payload: serde_json::Value = serde_json::from_str(&raw).context("Failed to parse payload JSON")?;

    let event_cwd = payload.get("cwd").and_then(|v| v.as_str()).map(str::to_string);
    let ctx = HookContext::capture(event_cwd);

    log::info!("Dispatching hook event: {}", event.name());
    log::debug!("Payload: {payload}");

    let output = dispatch::dispatch(event, &payload, &ctx);
    observability::record(event, &payload, output.is_some());

    if let Some(directive) = output {
        let document = serde_json::to_string(&directive.into_document()).context("Failed to encode hook output")?;
        println!("{document}");
    }

    Ok(())
}

fn list(event_filter: Option<&str>) -> Result<()> {
    println!("{}", "Handled hook events:".bold());
    println!();

    for (name, summary) in HANDLED_EVENTS {
        if let Some(filter) = event_filter {
            if HookEvent::from_str(filter) != HookEvent::from_str(name) {
                continue;
            }
        }
        println!("  {} {}", name.cyan(), summary);
    }

    Ok(())
}
