use std::fs;
use std::path::Path;

use ragdoll_engine::{SceneConfig, WorldCore};

fn read_bundled(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("content").join(name);
    fs::read_to_string(&path).expect("bundled scene should exist")
}

#[test]
fn bundled_ragdoll_matches_the_built_in_one() {
    let json = read_bundled("ragdoll.json");
    let config = SceneConfig::from_json(&json).expect("ragdoll.json should parse");
    assert_eq!(config, SceneConfig::ragdoll());
}

#[test]
fn bundled_ragdoll_builds_a_world() {
    let json = read_bundled("ragdoll.json");
    let world = WorldCore::from_config_json(&json, 800, 600).expect("ragdoll.json should build");
    assert_eq!(world.particle_count(), 6);
    assert_eq!(world.joint_count(), 5);
    assert_eq!(world.id_of("torso"), Some(world.controlled()));
}

#[test]
fn to_json_output_reloads() {
    let json = SceneConfig::ragdoll().to_json().unwrap();
    let reloaded = SceneConfig::from_json(&json).unwrap();
    assert_eq!(reloaded.particles.len(), 6);
    assert_eq!(reloaded.controlled, "torso");
}
