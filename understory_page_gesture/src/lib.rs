// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_page_gesture --heading-base-level=0

//! Understory Page Gesture: gesture policy for zoomable, paginated document views.
//!
//! ## Overview
//!
//! This crate sits between a gesture recognizer and a document view. It consumes
//! already classified primitives (drag start/move/end, pinch, double tap, click)
//! and decides what the view should do:
//!
//! - clamp pinch zoom to a configured range,
//! - pan while zooming, or while swiping is enabled,
//! - turn the page when a finished drag is either a quick flick or covers enough
//!   of the page width, and settle back otherwise.
//!
//! It does not decode touch input, render pages, or run animations. Decisions are
//! expressed as [`ViewCommand`]s handed to a host-implemented [`Viewport`].
//! Application observers ([`DragObserver`], [`PinchObserver`], [`ClickObserver`])
//! are notified after the viewport has applied the command.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_page_gesture::{GestureConfig, GestureCoordinator, ViewCommand, Viewport};
//!
//! struct Pages {
//!     zoom: f64,
//!     page: i32,
//! }
//!
//! impl Viewport for Pages {
//!     fn zoom(&self) -> f64 { self.zoom }
//!     fn is_zooming(&self) -> bool { self.zoom != 1.0 }
//!     fn to_current_scale(&self, value: f64) -> f64 { value * self.zoom }
//!     fn optimal_page_width(&self) -> f64 { 600.0 }
//!     fn current_page(&self) -> i32 { self.page }
//!     fn apply(&mut self, command: ViewCommand) {
//!         match command {
//!             ViewCommand::Zoom { delta, .. } => self.zoom *= delta,
//!             ViewCommand::ShowPage { index } => self.page = index.clamp(0, 9),
//!             ViewCommand::ResetZoom => self.zoom = 1.0,
//!             ViewCommand::Pan { .. } | ViewCommand::ReloadVisible => {}
//!         }
//!     }
//! }
//!
//! let mut pages = Pages { zoom: 1.0, page: 2 };
//! let mut gestures = GestureCoordinator::new(GestureConfig::default().with_swipe_enabled(true));
//!
//! // A quick flick to the left moves to the next page.
//! gestures.on_drag_start(Point::new(400.0, 300.0), 10_000);
//! gestures.on_drag_end(&mut pages, Point::new(320.0, 305.0), 10_120);
//! assert_eq!(pages.page, 3);
//!
//! // Pinch zoom is clamped to the configured maximum (6x by default).
//! gestures.on_pinch(&mut pages, 50.0, Point::new(200.0, 200.0));
//! assert_eq!(pages.zoom, 6.0);
//!
//! // While zoomed, a double tap resets the zoom.
//! gestures.on_double_tap(&mut pages, Point::new(200.0, 200.0));
//! assert_eq!(pages.zoom, 1.0);
//! ```
//!
//! ## Configuration
//!
//! All thresholds live in a [`GestureConfig`] owned by the coordinator:
//! [`SwipeConfig`] for page-turn classification and [`ZoomBounds`] for the pinch
//! range. Validating constructors report a [`ConfigError`].
//!
//! ## Logging
//!
//! Primitives are traced and policy decisions are logged at debug level through
//! the [`log`] facade. Install any logger in the host to see them.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: `Serialize`/`Deserialize` for the configuration types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod command;
pub mod config;
mod coordinator;
mod error;
mod event;
pub mod observer;
mod session;
mod viewport;

pub use command::{PageDirection, SwipeOutcome, ViewCommand};
pub use config::{GestureConfig, SwipeConfig, ZoomBounds};
pub use coordinator::GestureCoordinator;
pub use error::ConfigError;
pub use event::GestureEvent;
pub use observer::{ClickEvent, ClickObserver, DragObserver, Observers, PinchObserver};
pub use session::{DragState, GestureSession};
pub use viewport::Viewport;
