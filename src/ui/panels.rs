//! UI panels

use eframe::egui;

use super::theme::*;
use super::widgets::*;
use crate::core::{ArmState, SecurityController};

/// Arm/disarm buttons, quick actions and status tiles
#[derive(Default)]
pub struct ControlPanel;

impl ControlPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, controller: &mut SecurityController) {
        let armed = controller.state().armed;

        ui.add_space(20.0);
        ui.horizontal(|ui| {
            if action_button(ui, !armed, "ARM SYSTEM", SmartGuardColors::ARM) {
                controller.arm();
            }
            if action_button(ui, armed, "DISARM SYSTEM", SmartGuardColors::DISARM) {
                controller.disarm();
            }
        });

        ui.add_space(10.0);
        ui.group(|ui| {
            ui.label(egui::RichText::new("Quick Actions").strong());
            ui.horizontal_wrapped(|ui| {
                if ui.button("Lock All Doors").clicked() {
                    controller.lock_doors();
                }
                if ui.button("Unlock All Doors").clicked() {
                    controller.unlock_doors();
                }
                if ui.button("Turn On Lights").clicked() {
                    controller.set_lights(true);
                }
                if ui.button("Turn Off Lights").clicked() {
                    controller.set_lights(false);
                }
                let camera = if controller.state().camera_active {
                    "Deactivate Camera"
                } else {
                    "Activate Camera"
                };
                if ui.button(camera).clicked() {
                    controller.toggle_camera();
                }
            });
        });

        ui.add_space(20.0);
        let state = *controller.state();
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 40.0;
            flag_tile(ui, "Doors:", state.doors_locked, "LOCKED", "UNLOCKED");
            flag_tile(ui, "Lights:", state.lights_on, "ON", "OFF");
            flag_tile(ui, "Camera:", state.camera_active, "ACTIVE", "INACTIVE");
            let (text, color) = arm_state_style(controller.arm_state());
            status_tile(ui, "Alarm:", text, color);
        });
    }
}

/// Two-column grid of sensor states
#[derive(Default)]
pub struct SensorsPanel;

impl SensorsPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, controller: &SecurityController) {
        ui.add_space(10.0);
        egui::Grid::new("sensor_grid")
            .num_columns(2)
            .spacing([60.0, 24.0])
            .show(ui, |ui| {
                for (i, (sensor, triggered)) in controller.sensors().iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(sensor_icon(sensor.kind())).size(22.0));
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(sensor.name()).strong());
                            if triggered {
                                ui.colored_label(SmartGuardColors::DANGER, "Status: Triggered");
                            } else {
                                ui.colored_label(SmartGuardColors::OK, "Status: Secure");
                            }
                        });
                    });
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    }
}

/// Scrolling view of the most recent log entries
#[derive(Default)]
pub struct LogPanel;

impl LogPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, controller: &SecurityController) {
        egui::Frame::none()
            .fill(SmartGuardColors::SURFACE)
            .inner_margin(egui::Margin::same(8.0))
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in controller.recent_log() {
                            let text = egui::RichText::new(entry.to_string()).monospace();
                            if entry.message.starts_with("ALARM") {
                                ui.label(text.color(SmartGuardColors::DANGER));
                            } else {
                                ui.label(text);
                            }
                        }
                    });
            });
    }
}

/// Status bar text, as in "System Status: ARMED"
pub fn status_line(state: ArmState) -> String {
    format!("System Status: {}", state)
}
