//! Observability for hook dispatch
//!
//! Appends one JSONL record per dispatched event so a user can audit what
//! the hooks injected or approved. Strictly best-effort: an unwritable
//! data directory never affects the hook result.

pub mod emitter;

pub use emitter::record;
