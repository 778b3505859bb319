// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/smartguard-rs

//! UI module - egui control panel

mod app;
mod panels;
mod theme;
mod widgets;

pub use app::*;
pub use panels::*;
pub use theme::*;
pub use widgets::*;

use anyhow::Result;
use eframe::egui;

use crate::config::Config;

/// Tabs of the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Control,
    Sensors,
    ActivityLog,
}

/// Launch GUI application
pub fn run_gui(config: Config) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.gui.width as f32, config.gui.height as f32])
            .with_title("SmartGuard Home Security System")
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "SmartGuard",
        options,
        Box::new(move |cc| {
            apply_theme(&cc.egui_ctx, config.gui.theme);
            Box::new(SmartGuardApp::new(cc, config))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))
}

fn load_icon() -> egui::IconData {
    // Flat panel-blue square; no image assets are shipped
    egui::IconData {
        rgba: vec![44u8, 62, 80, 255].repeat(32 * 32),
        width: 32,
        height: 32,
    }
}
