mod context;
mod error;
mod registry;
mod stop_reason;

pub use context::{ContextFlags, DebugContext};
pub use error::ContextError;
pub use stop_reason::StopReason;

/// One call-stack entry: source location plus the opaque scope and receiver
/// handles supplied by the trace hook. `V` is the embedder's value-handle
/// type; the frame holds the handles but never looks inside them.
#[derive(Debug, Clone)]
pub struct Frame<V> {
    pub file: String,
    pub line: u32,
    pub binding: V,
    pub receiver: V,
}

impl<V> Frame<V> {
    pub fn new(file: &str, line: u32, binding: V, receiver: V) -> Self {
        Self {
            file: file.to_string(),
            line,
            binding,
            receiver,
        }
    }
}

/// Helper: whether a thread should be skipped by user-visible stepping.
/// A thread with no context yet is always skipped.
pub fn ignored<T, V>(context: Option<&DebugContext<T, V>>) -> bool {
    match context {
        Some(ctx) => ctx.is_ignored(),
        None => true,
    }
}
