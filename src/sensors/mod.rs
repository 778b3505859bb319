//! Sensor module - the fixed sensor set and the random trigger source

mod registry;
mod simulator;

pub use registry::{Sensor, SensorKind, SensorRegistry, UnknownSensor};
pub use simulator::{source_from_seed, ScriptedSource, TriggerSource};
