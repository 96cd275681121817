//! The autonomous runner
//!
//! Kinematic state plus the instantaneous actions the controller, platforms
//! and traps apply to it.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;

/// The runner entity (one per round)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runner {
    /// Top-left corner of the bounding box
    pub position: DVec2,
    pub velocity: DVec2,
    pub on_ground: bool,
    pub alive: bool,
    /// Trap-driven multiplier (1.0 normally, lowered by slow zones)
    pub speed_multiplier: f64,
    /// The level's multiplier, fixed for the round
    pub base_speed_multiplier: f64,
}

impl Runner {
    pub fn new(spawn: DVec2, level_speed_multiplier: f64) -> Self {
        Self {
            position: spawn,
            velocity: DVec2::new(BASE_SPEED * level_speed_multiplier, 0.0),
            on_ground: false,
            alive: true,
            speed_multiplier: 1.0,
            base_speed_multiplier: level_speed_multiplier,
        }
    }

    /// Current horizontal speed target
    #[inline]
    pub fn run_speed(&self) -> f64 {
        BASE_SPEED * self.base_speed_multiplier * self.speed_multiplier
    }

    /// Semi-implicit Euler step: gravity accumulates into vy, vx is set
    /// fresh from the multipliers, then position moves by the new velocity.
    /// Clears `on_ground`; landing resolution may set it again.
    pub fn integrate(&mut self, dt: f64) {
        if !self.alive {
            return;
        }
        self.velocity = DVec2::new(self.run_speed(), self.velocity.y + GRAVITY * dt);
        self.position += self.velocity * dt;
        self.on_ground = false;
    }

    /// Jump, only from the ground
    pub fn jump(&mut self) {
        if self.on_ground && self.alive {
            self.velocity.y = JUMP_FORCE;
            self.on_ground = false;
        }
    }

    /// Bounce-pad launch, works in mid-air too
    pub fn bounce(&mut self) {
        self.velocity.y = JUMP_FORCE * BOUNCE_FACTOR;
        self.on_ground = false;
    }

    /// Rest the runner's feet on a platform top
    pub fn land(&mut self, platform_top: f64) {
        self.position.y = platform_top - RUNNER_HEIGHT;
        self.velocity.y = 0.0;
        self.on_ground = true;
    }

    pub fn die(&mut self) {
        self.alive = false;
        self.velocity = DVec2::ZERO;
    }

    pub fn set_speed_multiplier(&mut self, multiplier: f64) {
        self.speed_multiplier = multiplier;
    }

    pub fn reset_speed_multiplier(&mut self) {
        self.speed_multiplier = 1.0;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, RUNNER_WIDTH, RUNNER_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grounded() -> Runner {
        let mut runner = Runner::new(DVec2::new(100.0, 100.0), 1.0);
        runner.land(130.0);
        runner
    }

    #[test]
    fn test_new_runner() {
        let runner = Runner::new(DVec2::new(50.0, 300.0), 1.2);
        assert_eq!(runner.position, DVec2::new(50.0, 300.0));
        assert!((runner.velocity.x - 180.0).abs() < 1e-9);
        assert!(runner.alive);
        assert!(!runner.on_ground);
        assert_eq!(runner.speed_multiplier, 1.0);
    }

    #[test]
    fn test_integrate_applies_gravity_and_moves() {
        let mut runner = Runner::new(DVec2::new(0.0, 0.0), 1.0);
        runner.integrate(0.1);
        assert!((runner.velocity.y - 80.0).abs() < 1e-9);
        // Position uses the already-updated velocity
        assert!((runner.position.x - 15.0).abs() < 1e-9);
        assert!((runner.position.y - 8.0).abs() < 1e-9);

        runner.integrate(0.1);
        assert!((runner.velocity.y - 160.0).abs() < 1e-9);
    }

    #[test]
    fn test_horizontal_speed_has_no_inertia() {
        let mut runner = grounded();
        runner.integrate(0.016);
        assert!((runner.velocity.x - BASE_SPEED).abs() < 1e-9);

        runner.set_speed_multiplier(0.5);
        runner.integrate(0.016);
        assert!((runner.velocity.x - BASE_SPEED * 0.5).abs() < 1e-9);

        runner.reset_speed_multiplier();
        runner.integrate(0.016);
        assert!((runner.velocity.x - BASE_SPEED).abs() < 1e-9);
    }

    #[test]
    fn test_level_multiplier_scales_speed() {
        let mut runner = Runner::new(DVec2::ZERO, 1.8);
        runner.set_speed_multiplier(0.5);
        runner.integrate(0.016);
        assert!((runner.velocity.x - BASE_SPEED * 1.8 * 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_integrate_clears_on_ground() {
        let mut runner = grounded();
        runner.integrate(0.016);
        assert!(!runner.on_ground);
    }

    #[test]
    fn test_dead_runner_does_not_move() {
        let mut runner = grounded();
        runner.die();
        let before = runner.position;
        runner.integrate(0.016);
        assert_eq!(runner.position, before);
        assert_eq!(runner.velocity, DVec2::ZERO);
    }

    #[test]
    fn test_jump_requires_ground() {
        let mut runner = Runner::new(DVec2::ZERO, 1.0);
        let before = runner.velocity;
        runner.jump();
        assert_eq!(runner.velocity, before);

        let mut runner = grounded();
        runner.jump();
        assert_eq!(runner.velocity.y, JUMP_FORCE);
        assert!(!runner.on_ground);
    }

    #[test]
    fn test_dead_runner_cannot_jump() {
        let mut runner = grounded();
        runner.die();
        runner.jump();
        assert_eq!(runner.velocity.y, 0.0);
    }

    #[test]
    fn test_bounce_works_anywhere() {
        let mut airborne = Runner::new(DVec2::ZERO, 1.0);
        airborne.bounce();
        assert_eq!(airborne.velocity.y, JUMP_FORCE * 1.5);

        let mut runner = grounded();
        runner.bounce();
        assert_eq!(runner.velocity.y, JUMP_FORCE * 1.5);
        assert!(!runner.on_ground);
    }

    #[test]
    fn test_land_snaps_feet_to_platform() {
        let mut runner = Runner::new(DVec2::new(0.0, 95.0), 1.0);
        runner.velocity.y = 200.0;
        runner.land(120.0);
        assert_eq!(runner.bounds().bottom(), 120.0);
        assert_eq!(runner.velocity.y, 0.0);
        assert!(runner.on_ground);
    }
}
