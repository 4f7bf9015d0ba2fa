//! Backend configuration discovery
//!
//! Finds the nearest project-scoped `.gg/config.json` and decodes it into
//! the backend-availability record the primers report. Hooks may be invoked
//! from a subdirectory of the project, or from a directory unrelated to it
//! depending on what the host reports as "current directory", so the search
//! is both upward-recursive and multi-rooted: every candidate root's full
//! ancestor chain is probed, in priority order, until a document parses.

#![allow(dead_code)]

use std::collections::HashSet;
use std::env;
use std::fs;
use std::iter;
use std::path::{Path, PathBuf};

/// Environment variable the host sets to name the project root
pub const PROJECT_DIR_ENV: &str = "CLAUDE_PROJECT_DIR";

/// Snapshot of the ambient state a hook invocation runs in.
///
/// Captured once at the binary edge and passed down, so the resolution
/// logic never reads process globals inline.
#[derive(Debug, Clone)]
pub struct HookContext {
    /// Working directory carried on the event payload, if any
    pub event_cwd: Option<String>,
    /// Project root named by `CLAUDE_PROJECT_DIR`, if set
    pub project_dir: Option<String>,
    /// The process's own working directory
    pub process_cwd: Option<PathBuf>,
}

impl HookContext {
    /// Capture the ambient environment for one invocation.
    pub fn capture(event_cwd: Option<String>) -> Self {
        Self {
            event_cwd,
            project_dir: env::var(PROJECT_DIR_ENV).ok(),
            process_cwd: env::current_dir().ok(),
        }
    }

    /// Build a context from explicit parts (used by tests and doctor).
    pub fn from_parts(event_cwd: Option<&str>, project_dir: Option<&str>, process_cwd: Option<&Path>) -> Self {
        Self {
            event_cwd: event_cwd.map(String::from),
            project_dir: project_dir.map(String::from),
            process_cwd: process_cwd.map(Path::to_path_buf),
        }
    }
}

/// Backend availability for the current project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackendConfig {
    pub gemini: bool,
    pub codex: bool,
}

impl BackendConfig {
    /// Find and decode the nearest config document, if any.
    ///
    /// Unreadable and malformed candidates are skipped; the walk continues
    /// to the next ancestor or root.
    pub fn resolve(ctx: &HookContext) -> Option<Self> {
        Self::resolve_with_path(ctx).map(|(_, config)| config)
    }

    /// Like [`resolve`](Self::resolve), but reports which file won.
    pub fn resolve_with_path(ctx: &HookContext) -> Option<(PathBuf, Self)> {
        for path in config_candidates(ctx) {
            let Ok(raw) = fs::read_to_string(&path) else {
                continue;
            };
            let Ok(document) = serde_json::from_str::<serde_json::Value>(&raw) else {
                log::debug!("Skipping malformed config: {}", path.display());
                continue;
            };
            if let Some(config) = Self::decode(&document) {
                log::debug!("Resolved backend config: {}", path.display());
                return Some((path, config));
            }
        }
        None
    }

    /// Permissive decode: a missing `backends` key, missing flags, and
    /// non-boolean flags all read as `false`; unknown keys are ignored.
    /// Only a non-object top level disqualifies the document.
    pub fn decode(document: &serde_json::Value) -> Option<Self> {
        if !document.is_object() {
            return None;
        }
        let backends = document.get("backends");
        let flag = |name: &str| {
            backends
                .and_then(|b| b.get(name))
                .and_then(|v| v.as_bool())
                .unwrap_or(false)
        };
        Some(Self {
            gemini: flag("gemini"),
            codex: flag("codex"),
        })
    }

    /// Render the enabled backends, primary first: `Claude + Gemini + Codex`.
    pub fn render(&self) -> String {
        let mut parts = vec!["Claude"];
        if self.gemini {
            parts.push("Gemini");
        }
        if self.codex {
            parts.push("Codex");
        }
        parts.join(" + ")
    }
}

/// Candidate project roots in priority order: event cwd, env project dir,
/// process cwd. Absolute, deduplicated, first-seen wins. Blank candidates
/// are absent, never relative paths.
fn candidate_roots(ctx: &HookContext) -> Vec<PathBuf> {
    let mut roots = Vec::new();

    for candidate in [ctx.event_cwd.as_deref(), ctx.project_dir.as_deref()] {
        if let Some(dir) = candidate {
            let trimmed = dir.trim();
            if !trimmed.is_empty() {
                roots.push(absolutize(Path::new(trimmed), ctx.process_cwd.as_deref()));
            }
        }
    }

    if let Some(cwd) = &ctx.process_cwd {
        roots.push(cwd.clone());
    }

    let mut seen = HashSet::new();
    roots.into_iter().filter(|root| seen.insert(root.clone())).collect()
}

/// Normalize a candidate to an absolute path without touching the filesystem.
fn absolutize(path: &Path, process_cwd: Option<&Path>) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        match process_cwd {
            Some(cwd) => cwd.join(path),
            None => path.to_path_buf(),
        }
    }
}

/// Lazy sequence of `.gg/config.json` probe paths: each root's full
/// ancestor chain up to the filesystem root, in priority order. A directory
/// reachable from two roots is only probed once.
pub fn config_candidates(ctx: &HookContext) -> impl Iterator<Item = PathBuf> {
    let mut visited = HashSet::new();
    candidate_roots(ctx)
        .into_iter()
        .flat_map(|root| iter::successors(Some(root), |dir| dir.parent().map(Path::to_path_buf)))
        .filter(move |dir| visited.insert(dir.clone()))
        .map(|dir| dir.join(".gg").join("config.json"))
}
