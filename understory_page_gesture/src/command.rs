// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Commands issued to a [`Viewport`](crate::Viewport) and swipe classification results.

use kurbo::{Point, Vec2};

/// A mutation the coordinator asks the viewport to perform.
///
/// The coordinator never mutates view state itself. It decides on at most one
/// command per gesture primitive and hands it to [`Viewport::apply`](crate::Viewport::apply).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewCommand {
    /// Multiply the zoom by `delta`, keeping `pivot` fixed on screen.
    Zoom {
        /// Relative scale factor, already clamped to the configured bounds.
        delta: f64,
        /// Screen-space point held fixed during the transform.
        pivot: Point,
    },
    /// Translate the pan offset by a screen-space delta.
    Pan {
        /// Screen-space translation.
        delta: Vec2,
    },
    /// Navigate (usually animated) to a page. The viewport clamps the index.
    ShowPage {
        /// Target page index. May be out of range at the document edges.
        index: i32,
    },
    /// Refresh the visible page content after a pan or zoom settles.
    ReloadVisible,
    /// Animate the zoom back to its baseline.
    ResetZoom,
}

/// Which neighbour a finished swipe moves towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageDirection {
    /// Towards the previous page (the content was dragged towards positive x).
    Previous,
    /// Towards the next page.
    Next,
}

impl PageDirection {
    /// Direction implied by a horizontal drag distance.
    ///
    /// Strictly positive distances go back a page; zero and negative distances go forward.
    #[must_use]
    pub fn from_drag_distance(distance: f64) -> Self {
        if distance > 0.0 { Self::Previous } else { Self::Next }
    }

    /// Page index offset: `-1` for [`Previous`](Self::Previous), `+1` for [`Next`](Self::Next).
    #[must_use]
    pub const fn offset(self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Classification of a finished drag while swiping is enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwipeOutcome {
    /// Direction the page would move in.
    pub direction: PageDirection,
    /// Far enough, fast enough.
    pub quick_move: bool,
    /// Covered the configured fraction of the scaled page width.
    pub page_change: bool,
}

impl SwipeOutcome {
    /// Returns `true` if the drag should turn the page.
    #[must_use]
    pub const fn turns_page(&self) -> bool {
        self.quick_move || self.page_change
    }

    /// Page the viewport should settle on, given the page shown when the drag ended.
    #[must_use]
    pub const fn target_page(&self, current_page: i32) -> i32 {
        if self.turns_page() {
            current_page.saturating_add(self.direction.offset())
        } else {
            current_page
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_table() {
        assert_eq!(PageDirection::from_drag_distance(60.0), PageDirection::Previous);
        assert_eq!(PageDirection::from_drag_distance(-60.0), PageDirection::Next);
        // Strict comparison: a zero-length drag counts as forward.
        assert_eq!(PageDirection::from_drag_distance(0.0), PageDirection::Next);
        assert_eq!(PageDirection::Previous.offset(), -1);
        assert_eq!(PageDirection::Next.offset(), 1);
    }

    #[test]
    fn target_page_only_moves_when_turning() {
        let settle = SwipeOutcome {
            direction: PageDirection::Previous,
            quick_move: false,
            page_change: false,
        };
        assert!(!settle.turns_page());
        assert_eq!(settle.target_page(4), 4);

        let flick = SwipeOutcome {
            quick_move: true,
            ..settle
        };
        assert_eq!(flick.target_page(4), 3);

        let slow = SwipeOutcome {
            direction: PageDirection::Next,
            quick_move: false,
            page_change: true,
        };
        assert_eq!(slow.target_page(4), 5);
    }

    #[test]
    fn target_page_may_leave_document_range() {
        // Clamping is the viewport's job.
        let back = SwipeOutcome {
            direction: PageDirection::Previous,
            quick_move: true,
            page_change: false,
        };
        assert_eq!(back.target_page(0), -1);
    }
}
