use crate::systems::input::Direction;

use super::WorldCore;

pub(super) fn apply_impulse(world: &mut WorldCore, fx: f64, fy: f64) {
    let id = world.controlled.0;
    world.particles[id].apply_force(fx, fy);
}

pub(super) fn push(world: &mut WorldCore, direction: Direction) {
    let impulse = direction.impulse(world.settings.impulse);
    apply_impulse(world, impulse.x, impulse.y);
}

pub(super) fn handle_key(world: &mut WorldCore, key: &str) -> bool {
    match Direction::from_key(key) {
        Some(direction) => {
            push(world, direction);
            true
        }
        None => false,
    }
}
