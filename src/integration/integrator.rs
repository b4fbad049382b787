use crate::math::vec2::Vec2;
use crate::objects::body::Body;

/// Advances `body` by `dt` seconds and clears its force and impulse accumulators.
///
/// Bodies with finite, non-zero mass turn the accumulated force into a velocity
/// change of `dt * F / m` and the accumulated impulse into `J / m` (impulses are
/// instantaneous, so not scaled by `dt`). The centroid then advances by the
/// average of the pre- and post-tick velocities, a trapezoidal step that holds
/// energy far better than plain Euler.
///
/// Massless (`0`) and immovable (`INFINITY`) bodies ignore force and impulse
/// and drift at their current velocity. Every body turns at its angular velocity.
pub fn integrate(body: &mut Body, dt: f64) {
    let mass = body.mass;
    if mass.is_finite() && mass != 0.0 {
        // --- Linear Motion --- //
        let from_force = body.force * (dt / mass);
        let from_impulse = body.impulse * (1.0 / mass);
        let initial_velocity = body.velocity;
        let final_velocity = initial_velocity + from_force + from_impulse;
        let average_velocity = (initial_velocity + final_velocity) * 0.5;

        body.velocity = final_velocity;
        body.acceleration = body.force * (1.0 / mass);
        body.set_centroid(body.centroid + average_velocity * dt);
    } else {
        body.set_centroid(body.centroid + body.velocity * dt);
    }

    // --- Angular Motion --- //
    // A zero turn is skipped so resting shapes don't pick up rounding drift.
    if body.angular_velocity != 0.0 {
        body.set_rotation(wrap_angle(body.rotation + body.angular_velocity * dt));
    }

    body.force = Vec2::ZERO;
    body.impulse = Vec2::ZERO;
}

/// Wraps an angle in radians to the range [-PI, PI].
fn wrap_angle(angle: f64) -> f64 {
    angle.sin().atan2(angle.cos())
}
