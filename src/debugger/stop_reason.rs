/// Why the observed thread is currently paused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    None,
    Step,
    Breakpoint,
    Catchpoint,
}

impl StopReason {
    /// Symbol reported to higher debugger layers.
    pub fn as_symbol(self) -> &'static str {
        match self {
            StopReason::Step => "step",
            StopReason::Breakpoint => "breakpoint",
            StopReason::Catchpoint => "catchpoint",
            StopReason::None => "none",
        }
    }
}
