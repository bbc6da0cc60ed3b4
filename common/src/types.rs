use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OccupancyState {
    Occupied,
    Vacant,
}

impl OccupancyState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Occupied => "OCCUPIED",
            Self::Vacant => "VACANT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperaturePreferences {
    #[serde(rename = "minTemp")]
    pub min_temp: f64,
    #[serde(rename = "maxTemp")]
    pub max_temp: f64,
}

impl TemperaturePreferences {
    pub fn new(min_temp: f64, max_temp: f64) -> Self {
        Self { min_temp, max_temp }
    }

    pub fn contains(&self, temp: f64) -> bool {
        temp >= self.min_temp && temp <= self.max_temp
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoomStatus {
    #[serde(rename = "currentTemp")]
    pub current_temp: f64,
    #[serde(rename = "outsideTemp")]
    pub outside_temp: f64,
    pub occupancy: &'static str,
    #[serde(rename = "energyConsumption")]
    pub energy_consumption: f64,
    pub preferences: Option<TemperaturePreferences>,
    #[serde(rename = "withinPreferences")]
    pub within_preferences: bool,
}
