//! Analogue clock face: time model, layout geometry and rendering
//!
//! Independent of any windowing toolkit. Hosts implement [`Surface`] for their
//! drawing API and drive a [`ClockView`].

pub mod clock_time;
pub mod config;
pub mod geometry;
pub mod render;
pub mod state;
pub mod style;
pub mod view;

pub use clock_time::{decompose_millis, overlay_fields, ClockTime};
pub use config::{
    config_dir, config_path, load_config, load_config_from, load_style, style_from_attributes,
    ConfigError, StyleAttributes,
};
pub use geometry::{ClockGeometry, Hand, HandSelection, Label, LayoutRatios, Point, Rect};
pub use render::{render, DrawOp, RecordingSurface, Surface, TextBounds};
pub use state::ClockState;
pub use style::{
    Color, Density, Paints, ParseColorError, ShadowPaint, StrokePaint, StyleConfig, TextPaint,
};
pub use view::ClockView;
