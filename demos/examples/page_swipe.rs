// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a simulated document view through a scripted gesture session.
//!
//! This example shows how to:
//! - implement `Viewport` for a host view that owns zoom, pan, and page state,
//! - bind drag and pinch observers that run after the coordinator's policy,
//! - feed classified primitives through `GestureCoordinator::handle`.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example page_swipe`

use kurbo::{Point, Vec2};
use understory_page_gesture::{
    DragObserver, GestureConfig, GestureCoordinator, GestureEvent, ViewCommand, Viewport,
    ZoomBounds,
};

/// A document view with a fixed number of pages.
#[derive(Debug)]
struct DocumentView {
    pages: i32,
    page: i32,
    zoom: f64,
    pan: Vec2,
    page_width: f64,
}

impl Viewport for DocumentView {
    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn is_zooming(&self) -> bool {
        self.zoom != 1.0
    }

    fn to_current_scale(&self, value: f64) -> f64 {
        value * self.zoom
    }

    fn optimal_page_width(&self) -> f64 {
        self.page_width
    }

    fn current_page(&self) -> i32 {
        self.page
    }

    fn apply(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::Zoom { delta, pivot } => {
                // Keep `pivot` fixed: content under it stays under it.
                self.pan = (self.pan - pivot.to_vec2()) * delta + pivot.to_vec2();
                self.zoom *= delta;
            }
            ViewCommand::Pan { delta } => self.pan += delta,
            ViewCommand::ShowPage { index } => {
                self.page = index.clamp(0, self.pages - 1);
                self.pan = Vec2::ZERO;
            }
            ViewCommand::ReloadVisible => log::info!("reloading tiles around page {}", self.page),
            ViewCommand::ResetZoom => {
                self.zoom = 1.0;
                self.pan = Vec2::ZERO;
            }
        }
    }
}

/// Prints every drag primitive it sees.
struct PrintDrag;

impl DragObserver for PrintDrag {
    fn drag_start(&mut self, position: Point) {
        println!("  observer: drag start at ({:.0}, {:.0})", position.x, position.y);
    }

    fn drag(&mut self, delta: Vec2) {
        println!("  observer: drag by ({:.0}, {:.0})", delta.x, delta.y);
    }

    fn drag_end(&mut self, position: Point) {
        println!("  observer: drag end at ({:.0}, {:.0})", position.x, position.y);
    }
}

fn flick(from: Point, to: Point, start: u64, duration: u64) -> [GestureEvent; 3] {
    [
        GestureEvent::DragStart {
            position: from,
            time: start,
        },
        GestureEvent::Drag { delta: to - from },
        GestureEvent::DragEnd {
            position: to,
            time: start + duration,
        },
    ]
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut view = DocumentView {
        pages: 5,
        page: 0,
        zoom: 1.0,
        pan: Vec2::ZERO,
        page_width: 600.0,
    };

    let config = GestureConfig::default()
        .with_zoom(ZoomBounds::HIGH)
        .with_swipe_enabled(true);
    let mut gestures = GestureCoordinator::new(config);
    gestures.set_drag_observer(PrintDrag);
    gestures.set_pinch_observer(|delta: f64, pivot: Point| {
        println!(
            "  observer: pinch x{delta:.2} around ({:.0}, {:.0})",
            pivot.x, pivot.y
        );
    });

    let centre = Point::new(300.0, 400.0);
    let mut script = Vec::new();
    // Quick flick left: next page.
    script.extend(flick(Point::new(500.0, 400.0), Point::new(420.0, 400.0), 0, 120));
    // Slow drag over half a page to the left: next page.
    script.extend(flick(Point::new(550.0, 400.0), Point::new(200.0, 400.0), 1_000, 900));
    // Short, slow drag: settle on the current page.
    script.extend(flick(Point::new(300.0, 400.0), Point::new(330.0, 400.0), 3_000, 700));
    // Pinch far past the maximum, then pan around while zoomed.
    script.push(GestureEvent::Pinch {
        scale_delta: 20.0,
        pivot: centre,
    });
    script.extend(flick(Point::new(300.0, 400.0), Point::new(100.0, 400.0), 5_000, 60));
    // Double tap to get back to 1x, then flick right to the previous page.
    script.push(GestureEvent::DoubleTap { position: centre });
    script.extend(flick(Point::new(100.0, 400.0), Point::new(180.0, 400.0), 7_000, 100));

    for event in script {
        let command = gestures.handle(&mut view, event);
        println!("{event:?}\n  -> {command:?}");
        println!(
            "  view: page {} of {}, zoom {:.2}, pan ({:.0}, {:.0})",
            view.page + 1,
            view.pages,
            view.zoom,
            view.pan.x,
            view.pan.y
        );
    }
}
