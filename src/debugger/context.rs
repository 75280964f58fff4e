use super::registry;
use super::{ContextError, Frame, StopReason};
use crate::runtime::{RootVisitor, RuntimeThread};
use log::{debug, trace};

bitflags::bitflags! {
    /// Per-context state bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ContextFlags: u16 {
        /// Debugger-internal thread, never surfaced to user-level stepping.
        const IGNORE = 1 << 0;
        /// Context marked terminated; stop reason reports post-mortem.
        const DEAD = 1 << 1;
        /// Thread is currently held suspended by the debugger.
        const SUSPEND = 1 << 2;
        /// Thread was running when the debugger suspended it.
        const WAS_RUNNING = 1 << 3;
    }
}

/// Per-thread debugger state. The debugger keeps exactly one of these for
/// each observed thread; the trace hook for that thread is the only caller
/// of the mutation methods, so no locking happens here.
///
/// `T` is the runtime's thread handle, `V` its opaque value handle (used for
/// both the lexical scope and the receiver of a frame).
pub struct DebugContext<T, V> {
    thnum: u32,
    thread: T,
    call_stack: Vec<Frame<V>>,
    stop_reason: StopReason,
    flags: ContextFlags,
}

impl<T: RuntimeThread, V> DebugContext<T, V> {
    pub fn new(thread: T) -> Self {
        let thnum = registry::next_thnum();
        let mut flags = ContextFlags::empty();
        if thread.is_debugger_thread() {
            flags.insert(ContextFlags::IGNORE);
        }
        debug!("created context {} (ignored: {})", thnum, flags.contains(ContextFlags::IGNORE));
        Self {
            thnum,
            thread,
            call_stack: Vec::new(),
            stop_reason: StopReason::None,
            flags,
        }
    }

    /// Whether the observed thread has finished. Asked of the runtime on
    /// every call, never cached.
    pub fn is_dead(&self) -> bool {
        !self.thread.is_alive()
    }
}

impl<T, V> DebugContext<T, V> {
    pub fn thnum(&self) -> u32 {
        self.thnum
    }

    pub fn thread(&self) -> &T {
        &self.thread
    }

    pub fn stack_size(&self) -> usize {
        self.call_stack.len()
    }

    pub fn is_ignored(&self) -> bool {
        self.flags.contains(ContextFlags::IGNORE)
    }

    pub fn flags(&self) -> ContextFlags {
        self.flags
    }

    pub fn set_flag(&mut self, flag: ContextFlags) {
        self.flags.insert(flag);
    }

    pub fn clear_flag(&mut self, flag: ContextFlags) {
        self.flags.remove(flag);
    }

    pub fn set_stop_reason(&mut self, reason: StopReason) {
        self.stop_reason = reason;
    }

    /// Why the thread is paused, as the symbol higher layers display. A
    /// context flagged `DEAD` always reports "post-mortem", whatever the
    /// stored reason.
    pub fn stop_reason(&self) -> &'static str {
        if self.flags.contains(ContextFlags::DEAD) {
            return "post-mortem";
        }
        self.stop_reason.as_symbol()
    }

    /// Enter a call: link a new frame above the current top.
    pub fn push_frame(&mut self, file: &str, line: u32, binding: V, receiver: V) {
        trace!("context {}: push {}:{} depth {}", self.thnum, file, line, self.call_stack.len() + 1);
        self.call_stack.push(Frame::new(file, line, binding, receiver));
    }

    /// Leave a call: drop the top frame. Return events for calls entered
    /// before the debugger attached have no matching frame, so an empty
    /// stack is left alone rather than treated as an error.
    pub fn pop_frame(&mut self) {
        if self.call_stack.pop().is_some() {
            trace!("context {}: pop, depth {}", self.thnum, self.call_stack.len());
        }
    }

    /// Movement within the current call: overwrite the top frame's fields
    /// without changing the stack depth. On an empty stack this bootstraps
    /// the stack exactly like [`push_frame`](Self::push_frame).
    pub fn update_frame(&mut self, file: &str, line: u32, binding: V, receiver: V) {
        match self.call_stack.last_mut() {
            Some(top) => {
                top.file = file.to_string();
                top.line = line;
                top.binding = binding;
                top.receiver = receiver;
            }
            None => self.push_frame(file, line, binding, receiver),
        }
    }

    fn frame_at(&self, n: usize) -> Result<&Frame<V>, ContextError> {
        if n >= self.call_stack.len() {
            return Err(ContextError::InvalidFrameIndex {
                index: n,
                stack_size: self.call_stack.len(),
            });
        }
        // Frame 0 is the most recent push, i.e. the back of the vector.
        Ok(&self.call_stack[self.call_stack.len() - 1 - n])
    }

    pub fn frame_file(&self, n: usize) -> Result<&str, ContextError> {
        Ok(&self.frame_at(n)?.file)
    }

    pub fn frame_line(&self, n: usize) -> Result<u32, ContextError> {
        Ok(self.frame_at(n)?.line)
    }

    pub fn frame_binding(&self, n: usize) -> Result<&V, ContextError> {
        Ok(&self.frame_at(n)?.binding)
    }

    pub fn frame_self(&self, n: usize) -> Result<&V, ContextError> {
        Ok(&self.frame_at(n)?.receiver)
    }

    /// Collector trace phase: report every handle this context keeps alive.
    /// Visits the thread handle, then each frame's receiver and binding from
    /// the top of the stack down.
    pub fn mark_roots(&self, visitor: &mut dyn RootVisitor<T, V>) {
        visitor.visit_thread(&self.thread);
        for frame in self.call_stack.iter().rev() {
            visitor.visit_value(&frame.receiver);
            visitor.visit_value(&frame.binding);
        }
    }

    /// Tear down the frame stack, dropping the handles it holds. Called when
    /// the collector decides the context is unreachable; also runs on drop.
    pub fn release(&mut self) {
        while self.call_stack.pop().is_some() {}
        debug!("released context {}", self.thnum);
    }
}

impl<T, V> Drop for DebugContext<T, V> {
    fn drop(&mut self) {
        self.release();
    }
}
