//! Hook event dispatching
//!
//! Routes one decoded event payload to its handler and returns the
//! directive to print, if any. Ambient state comes in through the
//! [`HookContext`] snapshot, never read inline.

use serde_json::Value;

use super::{approve, language, primer, Decision, HookEvent, HookSpecificOutput, SessionSource};
use crate::config::{BackendConfig, HookContext};

/// Dispatch a hook event. `None` means no opinion: nothing is printed and
/// the host proceeds as if the hook did not fire.
pub fn dispatch(event: HookEvent, payload: &Value, ctx: &HookContext) -> Option<HookSpecificOutput> {
    match event {
        HookEvent::PreToolUse => on_pre_tool_use(payload),
        HookEvent::UserPromptSubmit => Some(on_user_prompt_submit(ctx)),
        HookEvent::SessionStart => Some(on_session_start(payload, ctx)),
    }
}

fn on_pre_tool_use(payload: &Value) -> Option<HookSpecificOutput> {
    let tool_name = payload.get("tool_name").and_then(|v| v.as_str()).unwrap_or("");
    let tool_input = payload.get("tool_input").unwrap_or(&Value::Null);

    match approve::decide(tool_name, tool_input) {
        Decision::Allow { reason } => {
            log::info!("Auto-approving tool: {tool_name}");
            Some(HookSpecificOutput::allow(HookEvent::PreToolUse, reason))
        }
        Decision::NoOpinion => {
            log::debug!("No approval opinion for tool: {tool_name}");
            None
        }
    }
}

fn on_user_prompt_submit(ctx: &HookContext) -> HookSpecificOutput {
    let status = BackendConfig::resolve(ctx)
        .map(|config| config.render())
        .unwrap_or_else(|| "Claude only".to_string());

    HookSpecificOutput::context(HookEvent::UserPromptSubmit, primer::turn_reminder(&status))
}

fn on_session_start(payload: &Value, ctx: &HookContext) -> HookSpecificOutput {
    let source = SessionSource::parse(payload.get("source").and_then(|v| v.as_str()));

    let backend_line = match BackendConfig::resolve(ctx) {
        Some(config) => primer::backend_line(&config.render()),
        None => primer::NO_CONFIG_BACKEND_LINE.to_string(),
    };
    let preferred_language = language::load();

    log::info!("Session start ({source:?})");

    HookSpecificOutput::context(
        HookEvent::SessionStart,
        primer::session_primer(source, &backend_line, preferred_language.as_deref()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn project_with_config(body: &str) -> TempDir {
        let tmp = TempDir::new().unwrap();
        let gg = tmp.path().join(".gg");
        fs::create_dir_all(&gg).unwrap();
        fs::write(gg.join("config.json"), body).unwrap();
        tmp
    }

    fn ctx_for(tmp: &TempDir) -> HookContext {
        HookContext::from_parts(Some(tmp.path().to_str().unwrap()), None, None)
    }

    #[test]
    fn test_pre_tool_use_allow() {
        let ctx = HookContext::from_parts(None, None, None);
        let payload = json!({ "tool_name": "Write", "tool_input": { "file_path": "/tmp/x" } });
        let output = dispatch(HookEvent::PreToolUse, &payload, &ctx).unwrap();
        assert_eq!(output.permission_decision, Some("allow"));
        assert_eq!(output.hook_event_name, "PreToolUse");
    }

    #[test]
    fn test_pre_tool_use_no_opinion_is_silent() {
        let ctx = HookContext::from_parts(None, None, None);
        let payload = json!({ "tool_name": "Bash", "tool_input": { "command": "ls" } });
        assert!(dispatch(HookEvent::PreToolUse, &payload, &ctx).is_none());
    }

    #[test]
    fn test_pre_tool_use_missing_fields() {
        let ctx = HookContext::from_parts(None, None, None);
        assert!(dispatch(HookEvent::PreToolUse, &json!({}), &ctx).is_none());
    }

    #[test]
    fn test_prompt_submit_includes_backend_status() {
        let tmp = project_with_config(r#"{"backends": {"codex": true}}"#);
        let output = dispatch(HookEvent::UserPromptSubmit, &json!({}), &ctx_for(&tmp)).unwrap();
        let context = output.additional_context.unwrap();
        assert!(context.contains("AI BACKENDS: Claude + Codex."));
    }

    #[test]
    fn test_prompt_submit_defaults_when_unresolved() {
        let tmp = TempDir::new().unwrap();
        let output = dispatch(HookEvent::UserPromptSubmit, &json!({}), &ctx_for(&tmp)).unwrap();
        let context = output.additional_context.unwrap();
        assert!(context.contains("AI BACKENDS: Claude only."));
    }

    #[test]
    fn test_session_start_startup_full() {
        let tmp = project_with_config(r#"{"backends": {"gemini": true}}"#);
        let payload = json!({ "source": "startup" });
        let output = dispatch(HookEvent::SessionStart, &payload, &ctx_for(&tmp)).unwrap();
        let context = output.additional_context.unwrap();
        assert!(context.contains("CORRECT BEHAVIOR EXAMPLES"));
        assert!(context.contains("AI BACKENDS: Claude + Gemini."));
    }

    #[test]
    fn test_session_start_compact_branch() {
        let tmp = TempDir::new().unwrap();
        let payload = json!({ "source": "compact" });
        let output = dispatch(HookEvent::SessionStart, &payload, &ctx_for(&tmp)).unwrap();
        let context = output.additional_context.unwrap();
        assert!(context.contains("POST-COMPACT REFRESH"));
        assert!(context.contains("no .gg/config.json found"));
    }

    #[test]
    fn test_session_start_missing_source_is_startup() {
        let tmp = TempDir::new().unwrap();
        let output = dispatch(HookEvent::SessionStart, &json!({}), &ctx_for(&tmp)).unwrap();
        assert!(output.additional_context.unwrap().contains("SESSION INITIALIZED"));
    }
}
