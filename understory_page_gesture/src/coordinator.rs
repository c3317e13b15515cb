// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture coordinator: zoom clamping, pan gating, and swipe page turns.
//!
//! ## Policy
//!
//! - **Pinch**: the requested scale delta is clamped so the resulting zoom stays
//!   within [`ZoomBounds`](crate::ZoomBounds), then applied around the pivot.
//! - **Drag move**: pans the view while it is zooming or when swiping is enabled.
//! - **Drag end**:
//!   - while zooming, reloads the visible pages and never navigates;
//!   - with swiping enabled, classifies the drag (see [`SwipeOutcome`]) and shows
//!     the neighbouring page or re-settles on the current one;
//!   - otherwise does nothing.
//! - **Double tap**: resets the zoom when zooming. At rest it does nothing; it
//!   never zooms in.
//!
//! ## Ordering
//!
//! Every `on_*` handler applies its command to the [`Viewport`] first and only
//! then notifies the matching observer, so observers always see post-policy
//! state. Observers are told about every primitive exactly once, including
//! drag moves that did not pan the view.
//!
//! The `*_command` methods expose the same policy without side effects, which
//! is handy when the host wants to queue or inspect commands itself.

use kurbo::{Point, Vec2};

use crate::command::{PageDirection, SwipeOutcome, ViewCommand};
use crate::config::GestureConfig;
use crate::event::GestureEvent;
use crate::observer::{ClickEvent, ClickObserver, DragObserver, Observers, PinchObserver};
use crate::session::{DragState, GestureSession};
use crate::viewport::Viewport;

/// Turns classified gesture primitives into viewport commands and observer notifications.
///
/// One coordinator serves one view. It is single-threaded: primitives are fed
/// in one at a time and every handler runs to completion before returning.
#[derive(Debug, Default)]
pub struct GestureCoordinator {
    config: GestureConfig,
    session: GestureSession,
    drag_state: DragState,
    observers: Observers,
}

impl GestureCoordinator {
    /// Create a coordinator with the given configuration and no observers.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: GestureSession::default(),
            drag_state: DragState::Idle,
            observers: Observers::default(),
        }
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Enable or disable swipe page turns. Takes effect on the next primitive.
    pub fn set_swipe_enabled(&mut self, enabled: bool) {
        self.config.swipe_enabled = enabled;
    }

    /// Whether finished drags turn pages.
    #[must_use]
    pub const fn swipe_enabled(&self) -> bool {
        self.config.swipe_enabled
    }

    /// Bind the drag observer.
    pub fn set_drag_observer(&mut self, observer: impl DragObserver + 'static) {
        self.observers.set_drag(observer);
    }

    /// Bind the pinch observer.
    pub fn set_pinch_observer(&mut self, observer: impl PinchObserver + 'static) {
        self.observers.set_pinch(observer);
    }

    /// Bind the click observer.
    pub fn set_click_observer(&mut self, observer: impl ClickObserver + 'static) {
        self.observers.set_click(observer);
    }

    /// Mutable access to the observer table, for unbinding individual observers.
    pub fn observers_mut(&mut self) -> &mut Observers {
        &mut self.observers
    }

    /// Unbind every observer.
    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }

    /// Data recorded by the most recent drag-start.
    #[must_use]
    pub const fn session(&self) -> GestureSession {
        self.session
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn drag_state(&self) -> DragState {
        self.drag_state
    }

    /// Convenience for [`Viewport::is_zooming`].
    #[must_use]
    pub fn is_zooming(&self, viewport: &impl Viewport) -> bool {
        viewport.is_zooming()
    }

    /// Zoom command for a pinch, with the delta clamped to the zoom bounds.
    #[must_use]
    pub fn pinch_command(
        &self,
        viewport: &impl Viewport,
        scale_delta: f64,
        pivot: Point,
    ) -> ViewCommand {
        let delta = self.config.zoom.clamp_scale(viewport.zoom(), scale_delta);
        ViewCommand::Zoom { delta, pivot }
    }

    /// Pan command for a drag move, if panning is currently allowed.
    #[must_use]
    pub fn drag_command(&self, viewport: &impl Viewport, delta: Vec2) -> Option<ViewCommand> {
        (viewport.is_zooming() || self.config.swipe_enabled).then_some(ViewCommand::Pan { delta })
    }

    /// Classify a drag ending at `position` and `time` against the current session.
    ///
    /// A drag is a *quick move* when it covered at least
    /// [`quick_move_distance`](crate::SwipeConfig::quick_move_distance) within
    /// [`quick_move_time`](crate::SwipeConfig::quick_move_time) (both inclusive),
    /// and a *page change* when it covered strictly more than
    /// [`page_change_width_fraction`](crate::SwipeConfig::page_change_width_fraction)
    /// of the optimal page width at the current scale.
    #[must_use]
    pub fn classify_swipe(
        &self,
        viewport: &impl Viewport,
        position: Point,
        time: u64,
    ) -> SwipeOutcome {
        let swipe = &self.config.swipe;
        let distance = self.session.distance_to(position.x);
        let elapsed = self.session.elapsed_at(time);
        let page_width = viewport
            .to_current_scale(viewport.optimal_page_width())
            .abs();

        SwipeOutcome {
            direction: PageDirection::from_drag_distance(distance),
            quick_move: distance.abs() >= swipe.quick_move_distance
                && elapsed <= swipe.quick_move_time,
            page_change: distance.abs() > page_width * swipe.page_change_width_fraction,
        }
    }

    /// Command for a drag ending at `position` and `time`, if any.
    #[must_use]
    pub fn drag_end_command(
        &self,
        viewport: &impl Viewport,
        position: Point,
        time: u64,
    ) -> Option<ViewCommand> {
        if viewport.is_zooming() {
            return Some(ViewCommand::ReloadVisible);
        }
        if !self.config.swipe_enabled {
            return None;
        }
        let outcome = self.classify_swipe(viewport, position, time);
        let current = viewport.current_page();
        let index = outcome.target_page(current);
        if outcome.turns_page() {
            log::debug!(
                "swipe turns page {current} -> {index} (quick: {}, page change: {})",
                outcome.quick_move,
                outcome.page_change
            );
        } else {
            log::debug!("swipe too short, settling on page {current}");
        }
        Some(ViewCommand::ShowPage { index })
    }

    /// Command for a double tap, if any.
    ///
    /// Only resets the zoom while zooming. A double tap at rest does not zoom in.
    #[must_use]
    pub fn double_tap_command(&self, viewport: &impl Viewport) -> Option<ViewCommand> {
        viewport.is_zooming().then_some(ViewCommand::ResetZoom)
    }

    /// Handle a pinch. Returns the zoom command that was applied.
    pub fn on_pinch(
        &mut self,
        viewport: &mut impl Viewport,
        scale_delta: f64,
        pivot: Point,
    ) -> ViewCommand {
        log::trace!("pinch {scale_delta} around {pivot:?}");
        let delta = self.config.zoom.clamp_scale(viewport.zoom(), scale_delta);
        let command = ViewCommand::Zoom { delta, pivot };
        if delta != scale_delta {
            log::debug!("pinch delta {scale_delta} clamped to {delta}");
        }
        viewport.apply(command);
        self.observers.pinch(delta, pivot);
        command
    }

    /// Handle the start of a drag. Records a fresh session, replacing any previous one.
    pub fn on_drag_start(&mut self, position: Point, time: u64) {
        log::trace!("drag start at {position:?}, t={time}");
        self.session = GestureSession {
            start_time: time,
            start_x: position.x,
        };
        self.drag_state = DragState::Active;
        self.observers.drag_start(position);
    }

    /// Handle a drag move. Returns the pan command, if one was applied.
    pub fn on_drag(&mut self, viewport: &mut impl Viewport, delta: Vec2) -> Option<ViewCommand> {
        log::trace!("drag by {delta:?}");
        let command = self.drag_command(&*viewport, delta);
        if let Some(command) = command {
            viewport.apply(command);
        }
        self.observers.drag(delta);
        command
    }

    /// Handle the end of a drag. Returns the command that was applied, if any.
    pub fn on_drag_end(
        &mut self,
        viewport: &mut impl Viewport,
        position: Point,
        time: u64,
    ) -> Option<ViewCommand> {
        log::trace!("drag end at {position:?}, t={time}");
        let command = self.drag_end_command(&*viewport, position, time);
        if let Some(command) = command {
            viewport.apply(command);
        }
        self.drag_state = DragState::Idle;
        self.observers.drag_end(position);
        command
    }

    /// Handle a double tap. Returns the command that was applied, if any.
    pub fn on_double_tap(
        &mut self,
        viewport: &mut impl Viewport,
        position: Point,
    ) -> Option<ViewCommand> {
        log::trace!("double tap at {position:?}");
        let command = self.double_tap_command(&*viewport);
        if let Some(command) = command {
            viewport.apply(command);
        }
        command
    }

    /// Forward a click to the click observer.
    pub fn on_click(&mut self, event: &ClickEvent) {
        log::trace!("click at {:?}", event.position);
        self.observers.click(event);
    }

    /// Route a primitive to the matching handler.
    ///
    /// Returns the command applied to the viewport, if any.
    pub fn handle(
        &mut self,
        viewport: &mut impl Viewport,
        event: GestureEvent,
    ) -> Option<ViewCommand> {
        match event {
            GestureEvent::DragStart { position, time } => {
                self.on_drag_start(position, time);
                None
            }
            GestureEvent::Drag { delta } => self.on_drag(viewport, delta),
            GestureEvent::DragEnd { position, time } => self.on_drag_end(viewport, position, time),
            GestureEvent::Pinch { scale_delta, pivot } => {
                Some(self.on_pinch(viewport, scale_delta, pivot))
            }
            GestureEvent::DoubleTap { position } => self.on_double_tap(viewport, position),
            GestureEvent::Click(event) => {
                self.on_click(&event);
                None
            }
        }
    }
}
