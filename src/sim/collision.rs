//! Body-vs-world collision resolution
//!
//! While walking or falling, platform overlaps resolve along the minimum
//! translation vector. While swinging, the body is constrained to its rope
//! arc, so platform hits reflect the angular velocity instead; once the
//! swing has decayed below a threshold the hit cancels the swing outright,
//! which stops infinite micro-bouncing against geometry the arc intersects.
//! Spikes are lethal and hard-reset the session.

use glam::Vec2;

use super::rect::{Mtv, minimum_translation};
use super::state::{GameEvent, Motion, Platform, Player, Spike};
use crate::tuning::Tuning;

/// Resolve the body against every overlapping platform
pub fn resolve_platform_collisions(
    player: &mut Player,
    platforms: &[Platform],
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    for platform in platforms {
        let rect = platform.rect();
        let hitbox = player.hitbox();
        if !hitbox.overlaps(&rect) {
            continue;
        }

        let mut stalled = false;
        match &mut player.motion {
            Motion::Falling => match minimum_translation(&hitbox, &rect) {
                Mtv::PushX(push) => {
                    player.position.x -= push;
                    player.x_velocity = 0.0;
                }
                Mtv::PushY(push) => {
                    player.position.y -= push;
                    player.y_velocity = 0.0;
                    // A positive push moves the body up: it landed on top
                    if push > 0.0 {
                        if !player.can_jump {
                            events.push(GameEvent::Landed);
                        }
                        player.can_jump = true;
                    }
                }
            },
            Motion::Swinging { angular_vel, .. } => {
                if angular_vel.abs() < tuning.swing_stall_threshold {
                    stalled = true;
                } else {
                    // Inelastic reflection along the arc
                    *angular_vel = -*angular_vel * tuning.swing_restitution;
                }
            }
        }

        if stalled {
            // The swing has decayed into the platform: cancel it and push
            // the body out like a normal hit.
            player.cancel_swing();
            match minimum_translation(&hitbox, &rect) {
                Mtv::PushX(push) => player.position.x -= push,
                Mtv::PushY(push) => {
                    player.position.y -= push;
                    if push > 0.0 {
                        if !player.can_jump {
                            events.push(GameEvent::Landed);
                        }
                        player.can_jump = true;
                    }
                }
            }
        }
    }
}

/// Check the body against every spike; any contact is a hard reset
pub fn resolve_spike_collisions(
    player: &mut Player,
    spikes: &[Spike],
    spawn: Vec2,
    events: &mut Vec<GameEvent>,
) {
    let hitbox = player.hitbox();
    for spike in spikes {
        if hitbox.overlaps(&spike.hitbox()) {
            player.position = spawn;
            player.x_velocity = 0.0;
            player.y_velocity = 0.0;
            player.motion = Motion::Falling;
            events.push(GameEvent::HazardHit);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(x: f32, y: f32, w: f32, h: f32) -> Platform {
        Platform::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn falling_body_lands_on_platform_top() {
        let tuning = Tuning::default();
        let platforms = [platform(0.0, 500.0, 400.0, 100.0)];
        let mut player = Player::new(Vec2::new(200.0, 480.0));
        player.y_velocity = 300.0;
        let mut events = Vec::new();

        resolve_platform_collisions(&mut player, &platforms, &tuning, &mut events);

        assert_eq!(player.position.y, 475.0);
        assert_eq!(player.y_velocity, 0.0);
        assert!(player.can_jump);
        assert_eq!(events, vec![GameEvent::Landed]);
        assert!(!player.hitbox().overlaps(&platforms[0].rect()));
    }

    #[test]
    fn side_hit_zeroes_horizontal_velocity_only() {
        let tuning = Tuning::default();
        let platforms = [platform(300.0, 0.0, 100.0, 400.0)];
        let mut player = Player::new(Vec2::new(280.0, 200.0));
        player.x_velocity = 5.0;
        player.y_velocity = 100.0;
        let mut events = Vec::new();

        resolve_platform_collisions(&mut player, &platforms, &tuning, &mut events);

        assert_eq!(player.position.x, 275.0);
        assert_eq!(player.x_velocity, 0.0);
        assert_eq!(player.y_velocity, 100.0);
        assert!(!player.can_jump);
        assert!(events.is_empty());
    }

    #[test]
    fn swing_hit_reflects_angular_velocity() {
        let tuning = Tuning::default();
        let platforms = [platform(0.0, 500.0, 400.0, 100.0)];
        let mut player = Player::new(Vec2::new(200.0, 490.0));
        player.motion = Motion::Swinging {
            anchor: Vec2::new(200.0, 200.0),
            length: 290.0,
            angle: std::f32::consts::FRAC_PI_2,
            angular_vel: 2.0,
        };
        let before = player.position;
        let mut events = Vec::new();

        resolve_platform_collisions(&mut player, &platforms, &tuning, &mut events);

        let Motion::Swinging { angular_vel, .. } = player.motion else {
            panic!("swing must survive a live reflection");
        };
        assert!((angular_vel - (-2.0 * tuning.swing_restitution)).abs() < 1e-5);
        // The body stays on its arc: no positional correction
        assert_eq!(player.position, before);
        assert!(events.is_empty());
    }

    #[test]
    fn decayed_swing_cancels_and_pushes_out() {
        let tuning = Tuning::default();
        let platforms = [platform(0.0, 500.0, 400.0, 100.0)];
        let mut player = Player::new(Vec2::new(200.0, 490.0));
        player.x_velocity = 1.5;
        player.motion = Motion::Swinging {
            anchor: Vec2::new(200.0, 200.0),
            length: 290.0,
            angle: std::f32::consts::FRAC_PI_2,
            angular_vel: tuning.swing_stall_threshold / 2.0,
        };
        let mut events = Vec::new();

        resolve_platform_collisions(&mut player, &platforms, &tuning, &mut events);

        assert!(!player.is_swinging());
        assert_eq!(player.x_velocity, 0.0);
        assert_eq!(player.y_velocity, 0.0);
        assert!(!player.hitbox().overlaps(&platforms[0].rect()));
    }

    #[test]
    fn spike_contact_resets_to_spawn() {
        let spawn = Vec2::new(640.0, 360.0);
        let spikes = [Spike::new(Vec2::new(180.0, 520.0), 50.0)];
        let mut player = Player::new(Vec2::new(200.0, 500.0));
        player.x_velocity = 40.0;
        player.y_velocity = -900.0;
        player.motion = Motion::Swinging {
            anchor: Vec2::new(200.0, 100.0),
            length: 400.0,
            angle: std::f32::consts::FRAC_PI_2,
            angular_vel: 5.0,
        };
        let mut events = Vec::new();

        resolve_spike_collisions(&mut player, &spikes, spawn, &mut events);

        assert_eq!(player.position, spawn);
        assert_eq!(player.x_velocity, 0.0);
        assert_eq!(player.y_velocity, 0.0);
        assert!(!player.is_swinging());
        assert_eq!(events, vec![GameEvent::HazardHit]);
    }

    #[test]
    fn near_miss_spike_is_harmless() {
        let spawn = Vec2::new(640.0, 360.0);
        let spikes = [Spike::new(Vec2::new(500.0, 520.0), 50.0)];
        let mut player = Player::new(Vec2::new(200.0, 500.0));
        let mut events = Vec::new();

        resolve_spike_collisions(&mut player, &spikes, spawn, &mut events);

        assert_eq!(player.position, Vec2::new(200.0, 500.0));
        assert!(events.is_empty());
    }
}
