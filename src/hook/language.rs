//! Response language preference
//!
//! The user may pin a response language in `~/.claude/LANGUAGE.md`. Only
//! the first line counts, which guards against multi-line or otherwise
//! malformed content polluting the injected primer. The value itself is
//! opaque text and is substituted verbatim.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

fn language_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".claude").join("LANGUAGE.md"))
}

/// Read the preferred response language, if one is configured.
pub fn load() -> Option<String> {
    load_from(&language_file()?)
}

/// First line of the file, trimmed. Empty or unreadable means no preference.
pub fn load_from(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let language = content.lines().next().unwrap_or("").trim();
    if language.is_empty() {
        None
    } else {
        Some(language.to_string())
    }
}

/// Directive line injected into primers when a language is configured.
pub fn language_line(language: &str) -> String {
    format!("RESPONSE LANGUAGE: {language}. ALL user-facing responses MUST be in {language}.")
}
