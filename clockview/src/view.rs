//! Clock view - the analogue clock component a host embeds
//!
//! Owns the clock state, the style and the cached paints. Hosts call
//! [`ClockView::measure`] on layout, push time on their tick, and call
//! [`ClockView::draw`] whenever [`ClockView::take_redraw`] reports a request.

use std::time::Instant;

use chrono::{Local, TimeZone};

use crate::clock_time::ClockTime;
use crate::config;
use crate::geometry::{ClockGeometry, LayoutRatios};
use crate::render::{render, Surface};
use crate::state::ClockState;
use crate::style::{Color, Density, Paints, StyleConfig};

#[derive(Debug, Clone)]
pub struct ClockView<Tz: TimeZone = Local> {
    state: ClockState<Tz>,
    style: StyleConfig,
    density: Density,
    paints: Paints,
    side: Option<f32>,
}

impl ClockView<Local> {
    /// View with the default style in the local time zone
    pub fn new() -> Self {
        Self::with_state(ClockState::new(), StyleConfig::default())
    }

    /// View styled from the config file of `clock_name`
    ///
    /// A missing or malformed file leaves the default style in place.
    pub fn from_config(clock_name: &str) -> Self {
        Self::with_state(ClockState::new(), config::load_style(clock_name))
    }
}

impl Default for ClockView<Local> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz: TimeZone> ClockView<Tz> {
    pub fn with_state(state: ClockState<Tz>, style: StyleConfig) -> Self {
        let density = Density::default();
        Self {
            paints: Paints::from_style(&style, density),
            state,
            style,
            density,
            side: None,
        }
    }

    /// Lay out for the offered size; the height always follows the width
    pub fn measure(&mut self, width: f32, _height: f32) -> (f32, f32) {
        let side = width.max(0.0);
        if self.side != Some(side) {
            self.side = Some(side);
            self.state.request_redraw();
        }
        (side, side)
    }

    /// Side length from the last measure pass
    pub fn side(&self) -> Option<f32> {
        self.side
    }

    /// Geometry for the current size and time, if laid out
    ///
    /// Hidden hands are left out of the layout.
    pub fn geometry(&self) -> Option<ClockGeometry> {
        let side = self.side?;
        ClockGeometry::compute_hands(
            side,
            &self.state.time(),
            LayoutRatios::for_rectangle(self.style.show_rectangle),
            self.style.visible_hands(),
        )
    }

    /// Paint the current frame; returns false if nothing could be drawn
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> bool {
        let started = Instant::now();
        let Some(geometry) = self.geometry() else {
            return false;
        };
        let time = self.state.time();
        log::debug!(
            "angles: hour {} minute {} second {}",
            time.hour_angle(),
            time.minute_angle(),
            time.second_angle()
        );
        render(&geometry, &self.style, &self.paints, surface);
        log::debug!("draw: {:?}", started.elapsed());
        true
    }

    /// Consume the pending redraw request, if any
    pub fn take_redraw(&mut self) -> bool {
        self.state.take_redraw()
    }

    pub fn redraw_requested(&self) -> bool {
        self.state.redraw_requested()
    }

    // Time

    pub fn time(&self) -> ClockTime {
        self.state.time()
    }

    pub fn set_time_millis(&mut self, millis: i64) {
        self.state.set_time_millis(millis);
    }

    pub fn set_time_hm(&mut self, hour: u32, minute: u32) {
        self.state.set_time_hm(hour, minute);
    }

    pub fn set_time_hms(&mut self, hour: u32, minute: u32, second: u32) {
        self.state.set_time_hms(hour, minute, second);
    }

    pub fn time_millis(&self) -> i64 {
        self.state.time_millis()
    }

    pub fn attach_time(&self, base_millis: i64) -> i64 {
        self.state.attach_time(base_millis)
    }

    // Style

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn paints(&self) -> &Paints {
        &self.paints
    }

    pub fn set_style(&mut self, style: StyleConfig) {
        self.update_style(|current| *current = style);
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn set_density(&mut self, density: Density) {
        self.density = density;
        self.update_style(|_| {});
    }

    fn update_style(&mut self, update: impl FnOnce(&mut StyleConfig)) {
        update(&mut self.style);
        self.paints = Paints::from_style(&self.style, self.density);
        self.state.request_redraw();
    }

    pub fn set_show_hour_arrow(&mut self, show: bool) {
        self.update_style(|s| s.show_hour_arrow = show);
    }

    pub fn is_show_hour_arrow(&self) -> bool {
        self.style.show_hour_arrow
    }

    pub fn set_show_minute_arrow(&mut self, show: bool) {
        self.update_style(|s| s.show_minute_arrow = show);
    }

    pub fn is_show_minute_arrow(&self) -> bool {
        self.style.show_minute_arrow
    }

    pub fn set_show_second_arrow(&mut self, show: bool) {
        self.update_style(|s| s.show_second_arrow = show);
    }

    pub fn is_show_second_arrow(&self) -> bool {
        self.style.show_second_arrow
    }

    pub fn set_show_hour_labels(&mut self, show: bool) {
        self.update_style(|s| s.show_hour_labels = show);
    }

    pub fn is_show_hour_labels(&self) -> bool {
        self.style.show_hour_labels
    }

    pub fn set_show_circles(&mut self, show: bool) {
        self.update_style(|s| s.show_circles = show);
    }

    pub fn is_show_circles(&self) -> bool {
        self.style.show_circles
    }

    pub fn set_show_shadow(&mut self, show: bool) {
        self.update_style(|s| s.show_shadow = show);
    }

    pub fn is_show_shadow(&self) -> bool {
        self.style.show_shadow
    }

    pub fn set_show_rectangle(&mut self, show: bool) {
        self.update_style(|s| s.show_rectangle = show);
    }

    pub fn is_show_rectangle(&self) -> bool {
        self.style.show_rectangle
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.update_style(|s| s.background_color = color);
    }

    pub fn background_color(&self) -> Color {
        self.style.background_color
    }

    pub fn set_shadow_color(&mut self, color: Color) {
        self.update_style(|s| s.shadow_color = color);
    }

    pub fn shadow_color(&self) -> Color {
        self.style.shadow_color
    }

    pub fn set_arrows_color(&mut self, color: Color) {
        self.update_style(|s| s.arrows_color = color);
    }

    pub fn arrows_color(&self) -> Color {
        self.style.arrows_color
    }

    pub fn set_hour_labels_color(&mut self, color: Color) {
        self.update_style(|s| s.hour_labels_color = color);
    }

    pub fn hour_labels_color(&self) -> Color {
        self.style.hour_labels_color
    }

    pub fn set_circles_color(&mut self, color: Color) {
        self.update_style(|s| s.circles_color = color);
    }

    pub fn circles_color(&self) -> Color {
        self.style.circles_color
    }

    /// Label text size in pixels; negative sizes clamp to zero
    pub fn set_label_text_size(&mut self, size: f32) {
        self.update_style(|s| s.label_text_size = size.max(0.0));
    }

    pub fn label_text_size(&self) -> f32 {
        self.style.label_text_size
    }
}
