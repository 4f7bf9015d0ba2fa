use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gg-hooks",
    about = "Claude Code lifecycle hooks for the GG orchestrator",
    version,
    after_help = "Logs are written to: ~/.local/share/gg-hooks/logs/gg-hooks.log"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Handle hook events from Claude Code
    Hook {
        #[command(subcommand)]
        action: HookAction,
    },

    /// Diagnose setup issues
    Doctor,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum HookAction {
    /// Dispatch a hook event to its handler
    Dispatch {
        /// Event type (pre-tool-use, user-prompt-submit, session-start)
        event: String,

        /// Event payload JSON (reads from stdin if not provided)
        #[arg(long)]
        payload: Option<String>,
    },

    /// List handled hook events
    List {
        /// Filter by event type
        #[arg(long)]
        event: Option<String>,
    },
}
