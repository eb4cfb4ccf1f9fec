//! Analogue Face
//!
//! A single analogue clock view in a window, ticked once per second. Style
//! attributes come from `analogue_face.toml` in the clock config directory.

mod surface;
mod ticker;
mod ui;

use std::time::Duration;

use chrono::Utc;
use clockview::{ClockView, Density};
use nannou::prelude::*;
use nannou_egui::{self, Egui};

use crate::surface::NannouSurface;
use crate::ticker::Ticker;
use crate::ui::{draw_settings_panel, draw_time_bar};

const CLOCK_NAME: &str = "analogue_face";
const TICK_PERIOD: Duration = Duration::from_secs(1);
/// Space around the clock square
const PADDING: f32 = 24.0;
/// Height reserved for the egui time bar
const TIME_BAR_HEIGHT: f32 = 36.0;

/// Color palette for the host window
mod colors {
    use nannou::prelude::*;

    pub const BACKGROUND: Srgb<u8> = Srgb {
        red: 236,
        green: 239,
        blue: 241,
        standard: std::marker::PhantomData,
    };
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

/// Application state
struct Model {
    /// The clock view being hosted
    clock: ClockView,
    /// Once-per-second time source
    ticker: Ticker,
    /// "HH:MM:SS" text refreshed on every redraw request
    readout: String,
    /// Whether the settings panel is visible
    show_settings: bool,
    /// egui integration
    egui: Egui,
}

fn model(app: &App) -> Model {
    // Create window
    let window_id = app
        .new_window()
        .title("Analogue Face")
        .size(480, 540)
        .view(view)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .closed(window_closed)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let mut clock = ClockView::from_config(CLOCK_NAME);
    clock.set_density(logical_density());

    Model {
        readout: clock.time().format_time(),
        clock,
        ticker: Ticker::new(TICK_PERIOD),
        show_settings: false,
        egui,
    }
}

/// nannou draws in logical points, so one dp is one drawing unit
///
/// The window scale factor is applied by the renderer and must not be
/// applied again here.
fn logical_density() -> Density {
    Density::default()
}

/// Square area available to the clock, below the time bar
fn clock_area(window_rect: Rect) -> Rect {
    let area = window_rect.pad_top(TIME_BAR_HEIGHT).pad(PADDING);
    let side = area.w().min(area.h()).max(0.0);
    Rect::from_x_y_w_h(area.x(), area.y(), side, side)
}

fn update(app: &App, model: &mut Model, update: Update) {
    if model.ticker.poll(update.since_start) {
        model.clock.set_time_millis(Utc::now().timestamp_millis());
    }

    let area = clock_area(app.window_rect());
    model.clock.measure(area.w(), area.h());

    if model.clock.take_redraw() {
        model.readout = model.clock.time().format_time();
    }

    // Begin egui frame
    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();

    draw_time_bar(&ctx, &model.readout);
    if model.show_settings {
        draw_settings_panel(&ctx, &mut model.clock);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    // Clear background
    draw.background().color(colors::BACKGROUND);

    let area = clock_area(app.window_rect());
    let mut surface = NannouSurface::new(&draw, area.top_left());
    model.clock.draw(&mut surface);

    // Render to frame
    draw.to_frame(app, &frame).unwrap();

    // Render egui on top
    model.egui.draw_to_frame(&frame).unwrap();
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // S toggles the settings panel
        Key::S => model.show_settings = !model.show_settings,
        // Escape closes it
        Key::Escape => model.show_settings = false,
        _ => {}
    }
}

fn window_closed(_app: &App, model: &mut Model) {
    // Stop ticking once the view is gone
    model.ticker.cancel();
    log::info!("Window closed, ticker stopped");
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Let egui handle raw events for keyboard and mouse input
    model.egui.handle_raw_event(event);
}
