//! Diagnose gg-hooks setup issues

use colored::*;
use eyre::Result;
use std::path::Path;

use crate::config::{BackendConfig, HookContext};
use crate::hook::language;
use crate::observability::emitter;

pub fn run() -> Result<()> {
    println!("{}", "gg-hooks Doctor".bold());
    println!("{}", "═".repeat(50));
    println!();

    // Backend config, resolved the way the hooks would from here
    let ctx = HookContext::capture(None);
    let here = ctx
        .process_cwd
        .as_deref()
        .unwrap_or_else(|| Path::new("?"))
        .display()
        .to_string();

    match BackendConfig::resolve_with_path(&ctx) {
        Some((path, config)) => {
            println!("{} Backend config: {}", "✓".green(), path.display());
            println!("  Backends: {}", config.render().cyan());
        }
        None => {
            println!("{} No .gg/config.json found upward of {}", "⚠".yellow(), here);
            println!("  Hooks will report: {}", "Claude only".cyan());
        }
    }

    // Language preference
    match language::load() {
        Some(lang) => println!("{} Response language: {}", "✓".green(), lang.cyan()),
        None => println!(
            "{} Response language: {}",
            "⚠".yellow(),
            "not configured (~/.claude/LANGUAGE.md)".dimmed()
        ),
    }

    // Host binary
    match which::which("claude") {
        Ok(path) => println!("{} claude binary: {}", "✓".green(), path.display()),
        Err(_) => {
            println!("{} claude binary not found on PATH", "✗".red());
        }
    }

    // Event log
    let events = emitter::events_file();
    if events.exists() {
        println!("{} Event log: {}", "✓".green(), events.display());
    } else {
        println!(
            "{} Event log: {} {}",
            "⚠".yellow(),
            events.display(),
            "(no events recorded yet)".dimmed()
        );
    }

    Ok(())
}
