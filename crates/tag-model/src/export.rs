use serde::Serialize;

/// Snapshot of the PDF export progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExportState {
    pub in_progress: bool,
    /// Completion in percent, 0 to 100.
    pub percent_complete: u8,
}

impl ExportState {
    /// The state outside of any export run.
    pub const IDLE: Self = Self {
        in_progress: false,
        percent_complete: 0,
    };

    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}

/// `floor(done / total * 100)`, clamped to 100. Zero when `total` is zero.
pub fn percent_of(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (done.min(total) * 100) / total;
    percent as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_floors() {
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 66);
        assert_eq!(percent_of(3, 3), 100);
        assert_eq!(percent_of(1, 1), 100);
        assert_eq!(percent_of(0, 0), 0);
    }

    #[test]
    fn default_state_is_idle() {
        assert!(ExportState::default().is_idle());
    }
}
