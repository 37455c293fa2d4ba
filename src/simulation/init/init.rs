use crate::core::utils::random::sanitize_seed;
use crate::domain::SceneConfig;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_ragdoll_world(width: u32, height: u32) -> WorldCore {
    let scene = SceneConfig::ragdoll();
    match create_world_core(&scene, width, height) {
        Ok(world) => world,
        // Static data, covered by the content tests
        Err(e) => panic!("built-in ragdoll scene is invalid: {}", e),
    }
}

pub(super) fn create_world_core(
    config: &SceneConfig,
    width: u32,
    height: u32,
) -> Result<WorldCore, String> {
    let scene = config.build()?;
    let settings = config.settings.clone();
    Ok(WorldCore {
        width,
        height,
        particles: scene.particles,
        joints: scene.joints,
        keys: scene.keys,
        controlled: scene.controlled,
        rng_state: sanitize_seed(settings.seed),
        settings,
        frame: 0,
        last_timestamp_ms: None,
        degenerate_warned: false,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
