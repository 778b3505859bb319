// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/smartguard-rs

//! Theme configuration

use eframe::egui;

use crate::config::Theme;
use crate::core::ArmState;

/// Apply theme to egui context
pub fn apply_theme(ctx: &egui::Context, theme: Theme) {
    match theme {
        Theme::Dark | Theme::System => apply_dark_theme(ctx),
        Theme::Light => apply_light_theme(ctx),
    }
}

fn apply_dark_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::dark();

    style.visuals.panel_fill = SmartGuardColors::PANEL;
    style.visuals.window_fill = SmartGuardColors::SURFACE;
    style.visuals.extreme_bg_color = SmartGuardColors::SURFACE;
    style.visuals.faint_bg_color = SmartGuardColors::SURFACE;

    style.visuals.widgets.noninteractive.bg_fill = SmartGuardColors::PANEL;
    style.visuals.widgets.inactive.bg_fill = SmartGuardColors::SURFACE;
    style.visuals.widgets.hovered.bg_fill = egui::Color32::from_rgb(65, 90, 115);
    style.visuals.widgets.active.bg_fill = SmartGuardColors::ACCENT;

    // Selected tab
    style.visuals.selection.bg_fill = SmartGuardColors::ACCENT;

    style.visuals.window_shadow = egui::epaint::Shadow::small_dark();
    style.visuals.window_rounding = egui::Rounding::same(6.0);
    style.visuals.widgets.inactive.rounding = egui::Rounding::same(4.0);
    style.visuals.widgets.hovered.rounding = egui::Rounding::same(4.0);
    style.visuals.widgets.active.rounding = egui::Rounding::same(4.0);

    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(12.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    ctx.set_style(style);
}

fn apply_light_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.selection.bg_fill = egui::Color32::from_rgb(120, 170, 220);
    style.visuals.window_rounding = egui::Rounding::same(6.0);

    ctx.set_style(style);
}

/// SmartGuard color palette
pub struct SmartGuardColors;

impl SmartGuardColors {
    pub const PANEL: egui::Color32 = egui::Color32::from_rgb(44, 62, 80);
    pub const SURFACE: egui::Color32 = egui::Color32::from_rgb(52, 73, 94);
    pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(41, 128, 185);

    pub const ARM: egui::Color32 = egui::Color32::from_rgb(231, 76, 60);
    pub const DISARM: egui::Color32 = egui::Color32::from_rgb(46, 204, 113);

    pub const OK: egui::Color32 = egui::Color32::from_rgb(46, 204, 113);
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(243, 156, 18);
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(231, 76, 60);
}

/// Label and color of the alarm indicator
pub fn arm_state_style(state: ArmState) -> (&'static str, egui::Color32) {
    match state {
        ArmState::Disarmed => ("READY", SmartGuardColors::OK),
        ArmState::Armed => ("ARMED", SmartGuardColors::WARNING),
        ArmState::Alarm => ("ALARM!", SmartGuardColors::DANGER),
    }
}
