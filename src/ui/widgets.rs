// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/smartguard-rs

//! Custom UI widgets

use eframe::egui;

use super::theme::SmartGuardColors;
use crate::sensors::SensorKind;

/// Title over a colored value, as used for doors/lights/camera/alarm
pub fn status_tile(ui: &mut egui::Ui, title: &str, value: &str, color: egui::Color32) {
    ui.vertical(|ui| {
        ui.label(title);
        ui.label(egui::RichText::new(value).color(color).strong().size(16.0));
    });
}

/// Green/red flag, true meaning good
pub fn flag_tile(ui: &mut egui::Ui, title: &str, good: bool, yes: &str, no: &str) {
    let (text, color) = if good {
        (yes, SmartGuardColors::OK)
    } else {
        (no, SmartGuardColors::DANGER)
    };
    status_tile(ui, title, text, color);
}

/// Wide colored action button
pub fn action_button(ui: &mut egui::Ui, enabled: bool, text: &str, fill: egui::Color32) -> bool {
    let button = egui::Button::new(egui::RichText::new(text).color(egui::Color32::WHITE).strong())
        .fill(fill)
        .min_size(egui::vec2(140.0, 32.0));
    ui.add_enabled(enabled, button).clicked()
}

pub fn sensor_icon(kind: SensorKind) -> &'static str {
    match kind {
        SensorKind::Door => "🚪",
        SensorKind::Window => "⊞",
        SensorKind::Motion => "👣",
    }
}
