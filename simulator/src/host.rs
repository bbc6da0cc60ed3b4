use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Context;
use tracing::{info, warn};

use room_thermostat_common::{RoomScenario, RoomThermostat};

const DEFAULT_STEPS: u32 = 1;
const MAX_STEPS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepKind {
    Heating,
    Cooling,
    Idle,
}

impl StepKind {
    fn classify(before: f64, after: f64) -> Self {
        if after > before {
            Self::Heating
        } else if after < before {
            Self::Cooling
        } else {
            Self::Idle
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Heating => "HEATING",
            Self::Cooling => "COOLING",
            Self::Idle => "IDLE",
        }
    }
}

pub async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let scenario_path = std::env::var("ROOM_SCENARIO")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./room.json"));
    let steps = parse_steps(std::env::var("ROOM_STEPS").ok().as_deref());

    let scenario = load_scenario(&scenario_path)
        .await
        .with_context(|| format!("failed to load scenario from {}", scenario_path.display()))?;

    let mut thermostat = scenario.build();
    info!(
        occupancy = thermostat.occupancy().as_str(),
        current = thermostat.current_temperature(),
        outside = thermostat.outside_temperature(),
        preferences_set = thermostat.preferences().is_some(),
        "room thermostat ready"
    );
    if thermostat.preferences().is_none() {
        warn!("no temperature preferences set; adjustments will be skipped");
    }

    for step in 1..=steps {
        run_step(&mut thermostat, step);
    }

    let status = serde_json::to_string_pretty(&thermostat.status())
        .context("failed to serialize room status")?;
    println!("{status}");
    Ok(())
}

fn run_step(thermostat: &mut RoomThermostat, step: u32) -> StepKind {
    let before = thermostat.current_temperature();
    thermostat.adjust_temperature();
    let after = thermostat.current_temperature();

    let kind = StepKind::classify(before, after);
    info!(
        step,
        kind = kind.as_str(),
        before,
        after,
        energy = thermostat.energy_consumption(),
        "adjustment step"
    );
    kind
}

async fn load_scenario(path: &Path) -> anyhow::Result<RoomScenario> {
    match tokio::fs::read(path).await {
        Ok(raw) => Ok(RoomScenario::from_json(&raw)?),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(
                "scenario file {} not found, using default room",
                path.display()
            );
            Ok(RoomScenario::default())
        }
        Err(err) => Err(err.into()),
    }
}

fn parse_steps(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .map(|steps| steps.clamp(1, MAX_STEPS))
        .unwrap_or(DEFAULT_STEPS)
}
