// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-drag bookkeeping.

/// Where the drag state machine currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag-start was seen and its drag-end has not arrived yet.
    Active,
}

/// Data recorded at drag-start and read back at the matching drag-end.
///
/// A new drag-start always overwrites the previous session. A drag-end that
/// arrives without a preceding drag-start reads whatever the last session left
/// behind; the primitive source is trusted to pair starts and ends.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSession {
    /// Timestamp of the most recent drag-start, in milliseconds.
    pub start_time: u64,
    /// Horizontal position of the most recent drag-start.
    pub start_x: f64,
}

impl GestureSession {
    /// Horizontal travel from the drag-start position to `x`.
    #[must_use]
    pub fn distance_to(&self, x: f64) -> f64 {
        x - self.start_x
    }

    /// Milliseconds from the drag-start to `time`. Saturates at zero.
    #[must_use]
    pub fn elapsed_at(&self, time: u64) -> u64 {
        time.saturating_sub(self.start_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_and_elapsed() {
        let session = GestureSession {
            start_time: 1_000,
            start_x: 120.0,
        };
        assert_eq!(session.distance_to(180.0), 60.0);
        assert_eq!(session.distance_to(100.0), -20.0);
        assert_eq!(session.elapsed_at(1_200), 200);
    }

    #[test]
    fn elapsed_saturates_when_clock_goes_backwards() {
        let session = GestureSession {
            start_time: 1_000,
            start_x: 0.0,
        };
        assert_eq!(session.elapsed_at(900), 0);
    }
}
