//! UI module - egui time readout and clock settings panel

use clockview::{ClockView, Color};
use nannou_egui::egui;

/// Draw the time readout bar (top)
pub fn draw_time_bar(ctx: &egui::Context, readout: &str) {
    egui::TopBottomPanel::top("time_bar")
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(readout);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("S: settings");
                });
            });
        });
}

/// Edit `color` in place; returns the new color if the user changed it
fn color_row(ui: &mut egui::Ui, label: &str, color: Color) -> Option<Color> {
    let mut rgba = [color.red, color.green, color.blue, color.alpha];
    let changed = ui
        .horizontal(|ui| {
            let response = ui.color_edit_button_srgba_unmultiplied(&mut rgba);
            ui.label(label);
            response.changed()
        })
        .inner;
    changed.then(|| {
        let [red, green, blue, alpha] = rgba;
        Color::argb(alpha, red, green, blue)
    })
}

/// Toggle `value`; returns the new value if the user changed it
fn flag_row(ui: &mut egui::Ui, label: &str, value: bool) -> Option<bool> {
    let mut value = value;
    ui.checkbox(&mut value, label).changed().then_some(value)
}

/// Draw the settings panel, routing every change through the view's setters
pub fn draw_settings_panel(ctx: &egui::Context, clock: &mut ClockView) {
    egui::Window::new("Clock Settings")
        .collapsible(true)
        .resizable(false)
        .default_width(220.0)
        .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
        .show(ctx, |ui| {
            ui.label("Show");
            if let Some(v) = flag_row(ui, "Hour hand", clock.is_show_hour_arrow()) {
                clock.set_show_hour_arrow(v);
            }
            if let Some(v) = flag_row(ui, "Minute hand", clock.is_show_minute_arrow()) {
                clock.set_show_minute_arrow(v);
            }
            if let Some(v) = flag_row(ui, "Second hand", clock.is_show_second_arrow()) {
                clock.set_show_second_arrow(v);
            }
            if let Some(v) = flag_row(ui, "Hour labels", clock.is_show_hour_labels()) {
                clock.set_show_hour_labels(v);
            }
            if let Some(v) = flag_row(ui, "Circles", clock.is_show_circles()) {
                clock.set_show_circles(v);
            }
            if let Some(v) = flag_row(ui, "Shadow", clock.is_show_shadow()) {
                clock.set_show_shadow(v);
            }
            if let Some(v) = flag_row(ui, "Rectangle", clock.is_show_rectangle()) {
                clock.set_show_rectangle(v);
            }

            ui.separator();
            ui.label("Colors");
            if let Some(c) = color_row(ui, "Background", clock.background_color()) {
                clock.set_background_color(c);
            }
            if let Some(c) = color_row(ui, "Shadow", clock.shadow_color()) {
                clock.set_shadow_color(c);
            }
            if let Some(c) = color_row(ui, "Hands", clock.arrows_color()) {
                clock.set_arrows_color(c);
            }
            if let Some(c) = color_row(ui, "Labels", clock.hour_labels_color()) {
                clock.set_hour_labels_color(c);
            }
            if let Some(c) = color_row(ui, "Circles", clock.circles_color()) {
                clock.set_circles_color(c);
            }

            ui.separator();
            let mut size = clock.label_text_size();
            if ui
                .add(egui::Slider::new(&mut size, 8.0..=64.0).text("Label size"))
                .changed()
            {
                clock.set_label_text_size(size);
            }
        });
}
