//! Contracts the embedding runtime fulfils for the context tracker.

/// Queries the host runtime answers about an observed thread.
pub trait RuntimeThread {
    /// Whether the thread is still running. Computed by the runtime on every
    /// call; the context never caches liveness.
    fn is_alive(&self) -> bool;

    /// Whether the thread belongs to the debugger itself (worker threads the
    /// debugger spawns for its own machinery). Such threads are excluded from
    /// user-visible stepping and breakpoints.
    fn is_debugger_thread(&self) -> bool;
}

/// Mark sink the host collector passes to [`DebugContext::mark_roots`]
/// during its trace phase.
///
/// [`DebugContext::mark_roots`]: crate::DebugContext::mark_roots
pub trait RootVisitor<T, V> {
    fn visit_thread(&mut self, thread: &T);
    fn visit_value(&mut self, value: &V);
}
