use mizar_common::prelude::*;
use mizar_core::{ProtectedResource, ScenarioService, TimedLock};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("mizar lock contention demo");
    let lock = Arc::new(TimedLock::new());
    let resource = Arc::new(ProtectedResource::new());
    ScenarioService::run_demo(&lock, &resource);
}
