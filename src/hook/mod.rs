//! Hook event handling
//!
//! Hooks are events fired by Claude Code at fixed lifecycle points. Each
//! invocation consumes one event payload on stdin and emits at most one
//! directive document on stdout for the host to merge.

#![allow(dead_code)]

use serde::Serialize;

pub mod approve;
pub mod dispatch;
pub mod language;
pub mod primer;

/// Hook event types handled by this binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookEvent {
    PreToolUse,
    UserPromptSubmit,
    SessionStart,
}

impl HookEvent {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "pretooluse" => Some(Self::PreToolUse),
            "userpromptsubmit" => Some(Self::UserPromptSubmit),
            "sessionstart" => Some(Self::SessionStart),
            _ => None,
        }
    }

    /// Event name as Claude Code spells it in `hookSpecificOutput`
    pub fn name(&self) -> &'static str {
        match self {
            Self::PreToolUse => "PreToolUse",
            Self::UserPromptSubmit => "UserPromptSubmit",
            Self::SessionStart => "SessionStart",
        }
    }
}

/// Where a session-start event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    Startup,
    Resume,
    Compact,
    Clear,
    Unknown,
}

impl SessionSource {
    /// A missing `source` means a fresh startup; an unrecognized value is
    /// handled like a post-compact refresh.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("startup") => Self::Startup,
            Some("resume") => Self::Resume,
            Some("compact") => Self::Compact,
            Some("clear") => Self::Clear,
            Some(_) => Self::Unknown,
        }
    }

    pub fn wants_full_primer(&self) -> bool {
        matches!(self, Self::Startup | Self::Resume)
    }
}

/// Outcome of the approval policy for one tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Pre-approve the action, skipping the interactive prompt
    Allow { reason: String },
    /// Defer to the host's default permission flow
    NoOpinion,
}

/// Document printed on stdout for the host to merge
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_decision: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_decision_reason: Option<String>,
}

impl HookSpecificOutput {
    /// Inject additional context text into the conversation.
    pub fn context(event: HookEvent, text: String) -> Self {
        Self {
            hook_event_name: event.name(),
            additional_context: Some(text),
            permission_decision: None,
            permission_decision_reason: None,
        }
    }

    /// Pre-approve a tool invocation.
    pub fn allow(event: HookEvent, reason: String) -> Self {
        Self {
            hook_event_name: event.name(),
            additional_context: None,
            permission_decision: Some("allow"),
            permission_decision_reason: Some(reason),
        }
    }

    pub fn into_document(self) -> HookOutput {
        HookOutput { hook_specific_output: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_variants() {
        assert_eq!(HookEvent::from_str("pre-tool-use"), Some(HookEvent::PreToolUse));
        assert_eq!(HookEvent::from_str("PreToolUse"), Some(HookEvent::PreToolUse));
        assert_eq!(HookEvent::from_str("user_prompt_submit"), Some(HookEvent::UserPromptSubmit));
        assert_eq!(HookEvent::from_str("SessionStart"), Some(HookEvent::SessionStart));
        assert_eq!(HookEvent::from_str("post-tool-use"), None);
    }

    #[test]
    fn test_session_source_defaults_to_startup() {
        assert_eq!(SessionSource::parse(None), SessionSource::Startup);
        assert_eq!(SessionSource::parse(Some("startup")), SessionSource::Startup);
    }

    #[test]
    fn test_session_source_unknown_value() {
        assert_eq!(SessionSource::parse(Some("vscode")), SessionSource::Unknown);
        assert!(!SessionSource::Unknown.wants_full_primer());
    }

    #[test]
    fn test_full_primer_selection() {
        assert!(SessionSource::Startup.wants_full_primer());
        assert!(SessionSource::Resume.wants_full_primer());
        assert!(!SessionSource::Compact.wants_full_primer());
        assert!(!SessionSource::Clear.wants_full_primer());
    }

    #[test]
    fn test_context_output_shape() {
        let output = HookSpecificOutput::context(HookEvent::SessionStart, "primer".into()).into_document();
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["hookSpecificOutput"]["hookEventName"], "SessionStart");
        assert_eq!(json["hookSpecificOutput"]["additionalContext"], "primer");
        assert!(json["hookSpecificOutput"].get("permissionDecision").is_none());
    }

    #[test]
    fn test_allow_output_shape() {
        let output = HookSpecificOutput::allow(HookEvent::PreToolUse, "Auto-approved: Write".into()).into_document();
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["hookSpecificOutput"]["hookEventName"], "PreToolUse");
        assert_eq!(json["hookSpecificOutput"]["permissionDecision"], "allow");
        assert_eq!(json["hookSpecificOutput"]["permissionDecisionReason"], "Auto-approved: Write");
        assert!(json["hookSpecificOutput"].get("additionalContext").is_none());
    }
}
