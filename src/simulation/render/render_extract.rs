use super::WorldCore;

pub(super) fn positions(world: &WorldCore) -> Vec<f64> {
    let mut out = Vec::with_capacity(world.particles.len() * 2);
    for p in &world.particles {
        out.push(p.pos.x);
        out.push(p.pos.y);
    }
    out
}

pub(super) fn joint_endpoints(world: &WorldCore) -> Vec<u32> {
    let mut out = Vec::with_capacity(world.joints.len() * 2);
    for j in &world.joints {
        out.push(j.a.0 as u32);
        out.push(j.b.0 as u32);
    }
    out
}
