// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view the coordinator drives.

use crate::command::ViewCommand;

/// A pannable, zoomable, paginated view.
///
/// The read methods are queried while the coordinator decides on a policy;
/// [`apply`](Self::apply) executes the resulting [`ViewCommand`]. Implementations
/// own the zoom level, pan offset, current page, and page geometry, and are
/// responsible for clamping page indices and running any animation.
///
/// The coordinator does not validate values returned here. Hosts are expected
/// to report a positive zoom and sane page geometry.
pub trait Viewport {
    /// Current zoom factor. Expected to be `> 0`.
    fn zoom(&self) -> f64;

    /// Returns `true` while a zoom gesture is in progress or the view is zoomed in.
    fn is_zooming(&self) -> bool;

    /// Convert a content-space length to its current screen-space length.
    fn to_current_scale(&self, value: f64) -> f64;

    /// Baseline content-space width of a page at 100% zoom.
    fn optimal_page_width(&self) -> f64;

    /// Index of the page currently shown.
    fn current_page(&self) -> i32;

    /// Execute a command decided by the coordinator.
    fn apply(&mut self, command: ViewCommand);
}

impl<V: Viewport + ?Sized> Viewport for &mut V {
    fn zoom(&self) -> f64 {
        (**self).zoom()
    }

    fn is_zooming(&self) -> bool {
        (**self).is_zooming()
    }

    fn to_current_scale(&self, value: f64) -> f64 {
        (**self).to_current_scale(value)
    }

    fn optimal_page_width(&self) -> f64 {
        (**self).optimal_page_width()
    }

    fn current_page(&self) -> i32 {
        (**self).current_page()
    }

    fn apply(&mut self, command: ViewCommand) {
        (**self).apply(command);
    }
}
