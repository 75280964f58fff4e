use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// Requested frame index is outside the live stack.
    #[error("Invalid frame number {index}, stack (0...{stack_size})")]
    InvalidFrameIndex { index: usize, stack_size: usize },
}
