// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classified gesture primitives, as produced by an upstream recognizer.

use kurbo::{Point, Vec2};

use crate::observer::ClickEvent;

/// One classified gesture primitive.
///
/// Times are event timestamps in milliseconds from any monotonic origin the
/// host likes, as long as it is the same for the start and end of a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// A single-pointer drag began.
    DragStart {
        /// Screen-space pointer position.
        position: Point,
        /// Event timestamp in milliseconds.
        time: u64,
    },
    /// The dragging pointer moved.
    Drag {
        /// Movement since the previous drag primitive.
        delta: Vec2,
    },
    /// The drag finished.
    DragEnd {
        /// Screen-space pointer position.
        position: Point,
        /// Event timestamp in milliseconds.
        time: u64,
    },
    /// A two-pointer pinch changed scale.
    Pinch {
        /// Relative scale change since the previous pinch primitive.
        scale_delta: f64,
        /// Screen-space point to keep fixed.
        pivot: Point,
    },
    /// A double tap was recognized.
    DoubleTap {
        /// Screen-space position of the second tap.
        position: Point,
    },
    /// A single click was recognized.
    Click(ClickEvent),
}
