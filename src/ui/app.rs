//! Main application window

use eframe::egui;
use std::collections::VecDeque;
use tracing::debug;

use super::panels::*;
use super::theme::*;
use super::Tab;
use crate::config::Config;
use crate::core::{ControllerEvent, EventReceiver, SecurityController, SystemClock, TickScheduler};

/// Main SmartGuard application
pub struct SmartGuardApp {
    controller: SecurityController,
    events: EventReceiver,
    scheduler: TickScheduler<SystemClock>,

    tab: Tab,
    control_panel: ControlPanel,
    sensors_panel: SensorsPanel,
    log_panel: LogPanel,

    // Alerts waiting for acknowledgement, oldest first
    alerts: VecDeque<String>,
    unread_log: usize,
}

impl SmartGuardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let mut controller = SecurityController::new(&config);
        let events = controller.subscribe();

        let mut scheduler = TickScheduler::new(
            SystemClock::new(),
            std::time::Duration::from_secs(config.simulator.tick_interval_secs),
        );
        if !config.simulator.enabled {
            scheduler.stop();
        }

        Self {
            controller,
            events,
            scheduler,
            tab: Tab::Control,
            control_panel: ControlPanel::new(),
            sensors_panel: SensorsPanel::new(),
            log_panel: LogPanel::new(),
            alerts: VecDeque::new(),
            unread_log: 0,
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                ControllerEvent::LogChanged(_) => {
                    if self.tab != Tab::ActivityLog {
                        self.unread_log += 1;
                    }
                }
                ControllerEvent::Alarm { reason } => {
                    debug!(%reason, "Queued alarm popup");
                    self.alerts.push_back(reason);
                }
            }
        }
    }

    fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(reason) = self.alerts.front().cloned() else {
            return;
        };

        let mut acknowledged = false;
        egui::Window::new("SECURITY ALERT")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("ALARM TRIGGERED!")
                        .color(SmartGuardColors::DANGER)
                        .strong()
                        .size(18.0),
                );
                ui.label(format!("Reason: {}", reason));
                ui.add_space(8.0);
                ui.label("Take appropriate action immediately!");
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });

        if acknowledged {
            self.alerts.pop_front();
        }
    }
}

impl eframe::App for SmartGuardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for _ in 0..self.scheduler.poll() {
            self.controller.simulate_tick();
        }
        self.drain_events();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("SmartGuard Home Security");
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, Tab::Control, "Control Panel");
                ui.selectable_value(&mut self.tab, Tab::Sensors, "Sensors");
                let log_title = if self.unread_log > 0 {
                    format!("Activity Log ({})", self.unread_log)
                } else {
                    "Activity Log".to_string()
                };
                ui.selectable_value(&mut self.tab, Tab::ActivityLog, log_title);
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let state = self.controller.arm_state();
                let (_, color) = arm_state_style(state);
                ui.label(egui::RichText::new(status_line(state)).color(color).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(chrono::Local::now().format("%H:%M:%S").to_string());
                });
            });
        });

        // Modal alert blocks the panels until acknowledged
        let blocked = !self.alerts.is_empty();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| match self.tab {
                Tab::Control => self.control_panel.show(ui, &mut self.controller),
                Tab::Sensors => self.sensors_panel.show(ui, &self.controller),
                Tab::ActivityLog => {
                    self.unread_log = 0;
                    self.log_panel.show(ui, &self.controller);
                }
            });
        });

        // Button handlers above may have produced events
        self.drain_events();
        self.show_alert(ctx);

        // Wake for the next simulator tick and for the status bar clock
        let wake = if self.scheduler.is_running() {
            self.scheduler.time_until_next().min(std::time::Duration::from_secs(1))
        } else {
            std::time::Duration::from_secs(1)
        };
        ctx.request_repaint_after(wake);
    }
}
