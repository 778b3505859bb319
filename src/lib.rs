// Copyright (c) 2026 bad-antics
// Licensed under the MIT License. See LICENSE file in the project root.
// https://github.com/bad-antics/smartguard-rs

//! SmartGuard - Home Security Control Panel
//!
//! A simulated home security panel with:
//! - Arm/disarm state machine with sensor and door alarms
//! - Door lock, light and camera controls
//! - Six door/window/motion sensors and a random trip simulator
//! - Chronological activity log with change notifications
//! - Native desktop panel (egui) and a headless console
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 Presentation layer                   │
//! │        ┌──────────────┐      ┌──────────────┐        │
//! │        │  GUI (egui)  │      │   Console    │        │
//! │        └──────┬───────┘      └──────┬───────┘        │
//! │               ↓ commands            ↓                │
//! │  ┌──────────────────────────────────────────────┐    │
//! │  │            SecurityController                │    │
//! │  │  SystemState · SensorRegistry · ActivityLog  │    │
//! │  └──────┬──────────────────────────────┬────────┘    │
//! │         ↑ simulate_tick                ↓ events      │
//! │  ┌──────────────┐               ┌──────────────┐     │
//! │  │TickScheduler │               │   EventBus   │     │
//! │  │Clock · Source│               │ log · alarm  │     │
//! │  └──────────────┘               └──────────────┘     │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod console;
pub mod core;
pub mod error;
pub mod sensors;

#[cfg(feature = "gui")]
pub mod ui;

// Re-exports for convenience
pub use config::Config;
pub use crate::core::{
    ActivityLogEntry, ArmState, ControllerEvent, SecurityController, SystemState, TickScheduler,
};
pub use error::{Result, SmartGuardError};
pub use sensors::{Sensor, SensorRegistry, TriggerSource};

/// SmartGuard version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// SmartGuard name
pub const NAME: &str = "SmartGuard";
