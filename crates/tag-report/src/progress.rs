/// Receives the completion percentage after every exported page.
///
/// Values arrive in non-decreasing order and the last one of a successful
/// export is exactly 100.
pub trait ProgressSink {
    fn publish(&mut self, percent: u8);
}

impl<F: FnMut(u8)> ProgressSink for F {
    fn publish(&mut self, percent: u8) {
        self(percent);
    }
}

/// Sink that drops every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn publish(&mut self, _percent: u8) {}
}
