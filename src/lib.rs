//! Per-thread execution-context tracking for a debugger attached to a
//! managed, interpreted runtime.
//!
//! The host runtime's trace hook drives [`DebugContext`] with push/pop/update
//! events as the observed thread enters, leaves, and moves within calls.
//! Higher debugger layers (breakpoint matching, stepping, frame inspection)
//! query the context while the thread is paused. Scope and receiver values
//! stay opaque: the context holds them, reports them, and exposes them to the
//! host collector through [`RootVisitor`], nothing more.

pub mod debugger;
pub mod runtime;

pub use debugger::{ignored, ContextError, ContextFlags, DebugContext, Frame, StopReason};
pub use runtime::{RootVisitor, RuntimeThread};
