// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Application observers, notified after the coordinator's own policy has run.
//!
//! Each capability is bound independently and is optional. An absent binding
//! simply means nobody is told; it is never an error.
//!
//! Single-method capabilities accept closures directly:
//!
//! ```
//! use kurbo::Point;
//! use understory_page_gesture::{ClickEvent, Observers};
//!
//! let mut observers = Observers::default();
//! observers.set_pinch(|delta: f64, pivot: Point| {
//!     assert!(delta > 0.0);
//!     let _ = pivot;
//! });
//! observers.set_click(|event: &ClickEvent| {
//!     let _ = event.position;
//! });
//! assert!(observers.has_pinch());
//! assert!(!observers.has_drag());
//! ```

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Vec2};

/// A click recognized upstream and forwarded to the click observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickEvent {
    /// Screen-space position of the click.
    pub position: Point,
    /// Event timestamp in milliseconds.
    pub time: u64,
}

/// Receives every drag primitive, whether or not it moved the view.
pub trait DragObserver {
    /// A drag began at `position`.
    fn drag_start(&mut self, position: Point);
    /// The pointer moved by `delta` since the previous drag primitive.
    fn drag(&mut self, delta: Vec2);
    /// The drag ended at `position`.
    fn drag_end(&mut self, position: Point);
}

/// Receives pinch updates with the scale delta that was actually applied.
pub trait PinchObserver {
    /// The view was scaled by `scale_delta` around `pivot`.
    fn pinch(&mut self, scale_delta: f64, pivot: Point);
}

impl<F: FnMut(f64, Point)> PinchObserver for F {
    fn pinch(&mut self, scale_delta: f64, pivot: Point) {
        self(scale_delta, pivot);
    }
}

/// Receives clicks.
pub trait ClickObserver {
    /// A click was recognized.
    fn click(&mut self, event: &ClickEvent);
}

impl<F: FnMut(&ClickEvent)> ClickObserver for F {
    fn click(&mut self, event: &ClickEvent) {
        self(event);
    }
}

/// Dispatch table of optional observer bindings, one slot per capability.
#[derive(Default)]
pub struct Observers {
    drag: Option<Box<dyn DragObserver>>,
    pinch: Option<Box<dyn PinchObserver>>,
    click: Option<Box<dyn ClickObserver>>,
}

impl Observers {
    /// Bind the drag observer, replacing any previous one.
    pub fn set_drag(&mut self, observer: impl DragObserver + 'static) {
        self.drag = Some(Box::new(observer));
    }

    /// Bind the pinch observer, replacing any previous one.
    pub fn set_pinch(&mut self, observer: impl PinchObserver + 'static) {
        self.pinch = Some(Box::new(observer));
    }

    /// Bind the click observer, replacing any previous one.
    pub fn set_click(&mut self, observer: impl ClickObserver + 'static) {
        self.click = Some(Box::new(observer));
    }

    /// Remove the drag observer, returning it if one was bound.
    pub fn take_drag(&mut self) -> Option<Box<dyn DragObserver>> {
        self.drag.take()
    }

    /// Remove the pinch observer, returning it if one was bound.
    pub fn take_pinch(&mut self) -> Option<Box<dyn PinchObserver>> {
        self.pinch.take()
    }

    /// Remove the click observer, returning it if one was bound.
    pub fn take_click(&mut self) -> Option<Box<dyn ClickObserver>> {
        self.click.take()
    }

    /// Unbind every observer.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if a drag observer is bound.
    #[must_use]
    pub fn has_drag(&self) -> bool {
        self.drag.is_some()
    }

    /// Returns `true` if a pinch observer is bound.
    #[must_use]
    pub fn has_pinch(&self) -> bool {
        self.pinch.is_some()
    }

    /// Returns `true` if a click observer is bound.
    #[must_use]
    pub fn has_click(&self) -> bool {
        self.click.is_some()
    }

    pub(crate) fn drag_start(&mut self, position: Point) {
        if let Some(observer) = self.drag.as_mut() {
            observer.drag_start(position);
        }
    }

    pub(crate) fn drag(&mut self, delta: Vec2) {
        if let Some(observer) = self.drag.as_mut() {
            observer.drag(delta);
        }
    }

    pub(crate) fn drag_end(&mut self, position: Point) {
        if let Some(observer) = self.drag.as_mut() {
            observer.drag_end(position);
        }
    }

    pub(crate) fn pinch(&mut self, scale_delta: f64, pivot: Point) {
        if let Some(observer) = self.pinch.as_mut() {
            observer.pinch(scale_delta, pivot);
        }
    }

    pub(crate) fn click(&mut self, event: &ClickEvent) {
        if let Some(observer) = self.click.as_mut() {
            observer.click(event);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("drag", &self.drag.is_some())
            .field("pinch", &self.pinch.is_some())
            .field("click", &self.click.is_some())
            .finish()
    }
}
