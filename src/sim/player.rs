//! Kinematic body integration and the rope-swing controller
//!
//! The player has two kinematic regimes dispatched on [`Motion`]: linear
//! walk/fall integration, and pendulum motion around a rope anchor. The
//! grapple transitions project linear velocity onto the rope tangent, so
//! attaching and releasing introduce no velocity discontinuity.
//!
//! Horizontal velocity is stored in pre-scaled units: position integration
//! multiplies it by `move_speed`, and the grapple transitions scale it by
//! `release_x_divisor` to convert to and from true px/s.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use super::state::{Motion, Player};
use crate::consts::*;
use crate::tuning::Tuning;

impl Player {
    /// Advance one tick of the active kinematic regime
    ///
    /// Clears `can_jump`; the collision pass or the world floor re-asserts
    /// it later in the same tick.
    pub fn integrate(&mut self, tuning: &Tuning, dt: f32) {
        self.can_jump = false;
        match self.motion {
            Motion::Falling => self.integrate_linear(tuning, dt),
            Motion::Swinging { .. } => self.integrate_swing(tuning, dt),
        }
    }

    /// Walk/fall integration: input plus friction on X, gravity on Y
    fn integrate_linear(&mut self, tuning: &Tuning, dt: f32) {
        self.x_velocity = (self.x_velocity + self.move_dir as f32) * tuning.friction;
        self.position.x += self.x_velocity * dt * tuning.move_speed;

        self.y_velocity += tuning.gravity * dt;
        self.position.y += self.y_velocity * dt;
    }

    /// Pendulum integration: gravity torque, player pump, damping
    fn integrate_swing(&mut self, tuning: &Tuning, dt: f32) {
        if let Motion::Swinging { anchor, length, ref mut angle, ref mut angular_vel } = self.motion
        {
            // Gravity torque vanishes at the bottom of the arc (angle = π/2
            // in this Y-down frame). A zero-length rope has no gravity term.
            let mut accel = if length > 0.0 {
                -(tuning.gravity / length) * (*angle - FRAC_PI_2).sin()
            } else {
                0.0
            };
            // Pumping: holding right drives the swing clockwise
            accel -= self.move_dir as f32 * tuning.swing_torque;

            *angular_vel += accel * dt;
            *angular_vel *= tuning.swing_damping;
            *angle += *angular_vel * dt;

            self.position = anchor + length * Vec2::new(angle.cos(), angle.sin());
        }
    }

    /// Jump if grounded; silently does nothing in the air
    pub fn jump(&mut self, tuning: &Tuning) {
        if self.can_jump {
            self.y_velocity = -tuning.jump_impulse;
            self.can_jump = false;
        }
    }

    /// Fire the grapple: attach the rope at a world-space anchor
    ///
    /// The initial angular velocity is the current linear velocity projected
    /// onto the rope tangent at the attach instant. A zero-length rope skips
    /// the projection and starts at rest. Ignored while already swinging;
    /// returns whether the rope attached.
    pub fn attach_grapple(&mut self, anchor: Vec2, tuning: &Tuning) -> bool {
        if self.is_swinging() {
            return false;
        }
        let delta = self.position - anchor;
        let length = delta.length();
        let angle = delta.y.atan2(delta.x);
        let angular_vel = if length > 0.0 {
            let tangent = Vec2::new(-delta.y, delta.x) / length;
            let velocity = Vec2::new(self.x_velocity * tuning.release_x_divisor, self.y_velocity);
            velocity.dot(tangent) / length
        } else {
            0.0
        };
        self.motion = Motion::Swinging { anchor, length, angle, angular_vel };
        true
    }

    /// Release the grapple, converting angular motion back to linear velocity
    ///
    /// Release at zero distance from the anchor leaves the velocities
    /// untouched. Returns whether a rope was released.
    pub fn release_grapple(&mut self, tuning: &Tuning) -> bool {
        let Motion::Swinging { anchor, length, angular_vel, .. } = self.motion else {
            return false;
        };
        let delta = self.position - anchor;
        let len = delta.length();
        if len > 0.0 {
            let tangent = Vec2::new(-delta.y, delta.x) / len;
            let release_speed = angular_vel * length;
            self.x_velocity = tangent.x * release_speed / tuning.release_x_divisor;
            self.y_velocity = tangent.y * release_speed;
        }
        self.motion = Motion::Falling;
        true
    }

    /// Drop the swing with no exit velocity (collision-forced cancel)
    pub fn cancel_swing(&mut self) {
        self.x_velocity = 0.0;
        self.y_velocity = 0.0;
        self.motion = Motion::Falling;
    }

    /// Keep the body inside the world; the bottom edge acts as a floor
    ///
    /// Returns true if the floor grounded a previously airborne body.
    pub fn clamp_to_world(&mut self) -> bool {
        let half = PLAYER_SIZE / 2.0;
        self.position.x = self.position.x.clamp(half, WORLD_WIDTH - half);
        if self.position.y > WORLD_HEIGHT - half {
            self.position.y = WORLD_HEIGHT - half;
            self.y_velocity = 0.0;
            let landed = !self.can_jump;
            self.can_jump = true;
            return landed;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    fn tuning() -> Tuning {
        Tuning::default()
    }

    #[test]
    fn idle_body_stays_at_rest() {
        let tuning = tuning();
        let mut player = Player::new(Vec2::new(400.0, 400.0));
        player.can_jump = true;
        let start_x = player.position.x;
        for _ in 0..120 {
            player.integrate(&tuning, SIM_DT);
            // Pretend something grounds us each tick so only X is in question
            player.y_velocity = 0.0;
        }
        assert_eq!(player.x_velocity, 0.0);
        assert_eq!(player.position.x, start_x);
    }

    #[test]
    fn friction_decays_residual_velocity() {
        let tuning = tuning();
        let mut player = Player::new(Vec2::new(400.0, 400.0));
        player.x_velocity = 5.0;
        let mut previous = player.x_velocity;
        for _ in 0..60 {
            player.integrate(&tuning, SIM_DT);
            assert!(player.x_velocity.abs() < previous.abs());
            previous = player.x_velocity;
        }
        assert!(player.x_velocity.abs() < 0.02);
    }

    #[test]
    fn jump_consumes_grounding() {
        let tuning = tuning();
        let mut player = Player::new(Vec2::new(400.0, 400.0));
        player.can_jump = true;
        player.jump(&tuning);
        assert_eq!(player.y_velocity, -tuning.jump_impulse);
        assert!(!player.can_jump);

        // A second jump in the air is a no-op
        player.jump(&tuning);
        assert_eq!(player.y_velocity, -tuning.jump_impulse);
    }

    #[test]
    fn attach_then_release_preserves_tangential_velocity() {
        let tuning = tuning();
        let mut player = Player::new(Vec2::new(400.0, 400.0));
        player.x_velocity = 3.0;

        // Anchor straight up: horizontal velocity is purely tangential
        assert!(player.attach_grapple(Vec2::new(400.0, 100.0), &tuning));
        let Motion::Swinging { length, angular_vel, .. } = player.motion else {
            panic!("expected swing");
        };
        assert!((length - 300.0).abs() < 1e-4);
        assert!(angular_vel != 0.0);

        assert!(player.release_grapple(&tuning));
        assert!((player.x_velocity - 3.0).abs() < 1e-4);
        assert!(player.y_velocity.abs() < 1e-4);
        assert!(!player.is_swinging());
    }

    #[test]
    fn zero_length_rope_is_degenerate_but_safe() {
        let tuning = tuning();
        let mut player = Player::new(Vec2::new(400.0, 400.0));
        player.x_velocity = 2.0;
        player.y_velocity = -1.0;

        assert!(player.attach_grapple(player.position, &tuning));
        let Motion::Swinging { length, angular_vel, .. } = player.motion else {
            panic!("expected swing");
        };
        assert_eq!(length, 0.0);
        assert_eq!(angular_vel, 0.0);

        player.integrate(&tuning, SIM_DT);
        assert!(player.position.x.is_finite() && player.position.y.is_finite());

        // Release at zero distance leaves the velocities untouched
        assert!(player.release_grapple(&tuning));
        assert_eq!(player.x_velocity, 2.0);
        assert_eq!(player.y_velocity, -1.0);
    }

    #[test]
    fn refire_while_swinging_is_ignored() {
        let tuning = tuning();
        let mut player = Player::new(Vec2::new(400.0, 400.0));
        assert!(player.attach_grapple(Vec2::new(400.0, 100.0), &tuning));
        assert!(!player.attach_grapple(Vec2::new(600.0, 100.0), &tuning));
        let Motion::Swinging { anchor, .. } = player.motion else {
            panic!("expected swing");
        };
        assert_eq!(anchor, Vec2::new(400.0, 100.0));
    }

    #[test]
    fn swing_at_rest_at_bottom_stays_put() {
        let tuning = tuning();
        let mut player = Player::new(Vec2::new(400.0, 400.0));
        // Directly below the anchor with no angular velocity
        player.attach_grapple(Vec2::new(400.0, 200.0), &tuning);
        let before = player.position;
        for _ in 0..60 {
            player.integrate(&tuning, SIM_DT);
        }
        assert!((player.position - before).length() < 1e-3);
    }

    #[test]
    fn swing_keeps_body_on_the_rope_circle() {
        let tuning = tuning();
        let mut player = Player::new(Vec2::new(500.0, 400.0));
        player.x_velocity = 4.0;
        let anchor = Vec2::new(400.0, 200.0);
        player.attach_grapple(anchor, &tuning);
        let Motion::Swinging { length, .. } = player.motion else {
            panic!("expected swing");
        };
        for _ in 0..180 {
            player.integrate(&tuning, SIM_DT);
            assert!(((player.position - anchor).length() - length).abs() < 1e-2);
        }
    }

    #[test]
    fn world_clamp_floors_and_grounds() {
        let tuning = tuning();
        let mut player = Player::new(Vec2::new(400.0, WORLD_HEIGHT));
        player.y_velocity = 500.0;
        player.integrate(&tuning, SIM_DT);
        let landed = player.clamp_to_world();
        assert!(landed);
        assert!(player.can_jump);
        assert_eq!(player.y_velocity, 0.0);
        assert_eq!(player.position.y, WORLD_HEIGHT - PLAYER_SIZE / 2.0);

        // Already grounded: no second landing
        assert!(!player.clamp_to_world());
    }

    #[test]
    fn world_clamp_holds_horizontal_bounds() {
        let mut player = Player::new(Vec2::new(-50.0, 300.0));
        player.clamp_to_world();
        assert_eq!(player.position.x, PLAYER_SIZE / 2.0);

        player.position.x = WORLD_WIDTH + 50.0;
        player.clamp_to_world();
        assert_eq!(player.position.x, WORLD_WIDTH - PLAYER_SIZE / 2.0);
    }
}
