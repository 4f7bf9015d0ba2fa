//! Auto-approval of safe tool invocations
//!
//! Pre-approves file editing tools and unchained `mkdir` commands so the
//! host can skip its interactive permission prompt. Anything ambiguous is
//! left to the host's default flow: the check is biased toward false
//! negatives and must never approve a command that could chain into an
//! unreviewed action.
//!
//! Note: Write is usually also in the host's own allow list; this handler
//! is kept as a safety net, not the sole gate.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Decision;

/// Tools that are unconditionally safe to run
const SAFE_TOOLS: &[&str] = &["Write", "Edit", "MultiEdit"];

/// Shell chaining operators: statement separator, background, pipe
static CHAIN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[;&|]").unwrap());

/// Decide whether a proposed tool invocation can skip manual approval.
pub fn decide(tool_name: &str, tool_input: &serde_json::Value) -> Decision {
    if SAFE_TOOLS.contains(&tool_name) {
        return Decision::Allow {
            reason: format!("Auto-approved: {tool_name}"),
        };
    }

    if tool_name == "Bash" {
        let command = tool_input
            .get("command")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .trim();
        if command.starts_with("mkdir") && !CHAIN_PATTERN.is_match(command) {
            return Decision::Allow {
                reason: format!("Auto-approved: {tool_name}"),
            };
        }
    }

    Decision::NoOpinion
}
