pub mod config;
pub mod thermostat;
pub mod types;

pub use config::{AdjustmentConfig, RoomScenario, ScenarioError};
pub use thermostat::RoomThermostat;
pub use types::{OccupancyState, RoomStatus, TemperaturePreferences};
