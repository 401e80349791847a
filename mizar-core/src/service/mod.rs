mod scenario_service;

pub use scenario_service::{Scenario, ScenarioService};
