//! Runner physics and collision resolution
//!
//! Integration is semi-implicit Euler. Landing is resolved against at most one
//! platform per tick: the first platform in level order that satisfies the
//! landing test wins, regardless of which one is closest.

use super::geometry::Rect;
use super::level::Platform;
use super::runner::Runner;
use super::trap::Trap;
use crate::consts::{LANDING_TOLERANCE, MAP_MARGIN};

/// Advance the runner by `dt` and resolve landing
///
/// Returns the id of the platform landed on, if any.
pub fn step<'a>(runner: &mut Runner, platforms: &'a [Platform], dt: f64) -> Option<&'a str> {
    runner.integrate(dt);
    resolve_landing(runner, platforms)
}

fn resolve_landing<'a>(runner: &mut Runner, platforms: &'a [Platform]) -> Option<&'a str> {
    let bounds = runner.bounds();
    let vy = runner.velocity.y;

    let platform = platforms
        .iter()
        .filter(|p| p.is_active())
        .find(|p| is_landing(&bounds, &p.bounds(), vy))?;

    runner.land(platform.bounds().y);
    Some(platform.id())
}

/// Landing test: falling, horizontally overlapping, and feet within the
/// tolerance band just below the platform top
pub fn is_landing(runner: &Rect, platform: &Rect, vy: f64) -> bool {
    if vy <= 0.0 {
        return false;
    }

    let horizontal_overlap = runner.right() > platform.x && runner.x < platform.right();
    let feet = runner.bottom();
    let vertical_contact = feet >= platform.y && feet <= platform.y + LANDING_TOLERANCE;

    horizontal_overlap && vertical_contact
}

/// Runner overlaps a trap's footprint
pub fn hits_trap(runner: &Runner, trap: &Trap) -> bool {
    runner.bounds().intersects(&trap.bounds())
}

/// Runner overlaps the goal
pub fn reached_goal(runner: &Runner, goal: &Rect) -> bool {
    runner.bounds().intersects(goal)
}

/// Runner dropped below the bottom of the world
pub fn fell_off_map(runner: &Runner, level_height: f64) -> bool {
    runner.position.y > level_height + MAP_MARGIN
}

/// Runner ran past the right edge (the only enforced horizontal bound)
pub fn out_of_bounds(runner: &Runner, level_width: f64) -> bool {
    runner.position.x > level_width + MAP_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::trap::TrapKind;
    use glam::DVec2;

    fn runner_at(x: f64, y: f64) -> Runner {
        Runner::new(DVec2::new(x, y), 1.0)
    }

    fn platform(id: &str, x: f64, y: f64, w: f64, h: f64) -> Platform {
        Platform::new(id, x, y, w, h).expect("valid platform")
    }

    #[test]
    fn test_step_moves_runner_forward() {
        let mut runner = runner_at(100.0, 100.0);
        step(&mut runner, &[], 0.016);
        assert!(runner.position.x > 100.0);
        assert!(!runner.on_ground);
    }

    #[test]
    fn test_lands_on_platform_below() {
        // Falling at 80/s with feet already inside the band under the top at 300
        let mut runner = runner_at(100.0, 280.0);
        runner.integrate(0.1);
        let platforms = vec![platform("p1", 50.0, 300.0, 200.0, 20.0)];

        let landed = step(&mut runner, &platforms, 0.016);

        assert_eq!(landed, Some("p1"));
        assert!(runner.on_ground);
        assert_eq!(runner.velocity.y, 0.0);
        assert_eq!(runner.bounds().bottom(), 300.0);
    }

    #[test]
    fn test_ignores_inactive_platforms() {
        let mut runner = runner_at(100.0, 280.0);
        runner.integrate(0.1);
        let platforms = vec![platform("p1", 50.0, 300.0, 200.0, 20.0).with_active(false)];

        assert_eq!(step(&mut runner, &platforms, 0.016), None);
        assert!(!runner.on_ground);
    }

    #[test]
    fn test_first_platform_in_order_wins() {
        let mut runner = runner_at(100.0, 280.0);
        runner.integrate(0.1);
        // Both within tolerance; the lower one is listed first
        let platforms = vec![
            platform("low", 50.0, 305.0, 200.0, 20.0),
            platform("high", 50.0, 300.0, 200.0, 20.0),
        ];

        let landed = step(&mut runner, &platforms, 0.016);

        assert_eq!(landed, Some("low"));
        assert_eq!(runner.bounds().bottom(), 305.0);
    }

    #[test]
    fn test_no_landing_while_rising() {
        let r = Rect::new(100.0, 275.0, 20.0, 30.0);
        let p = Rect::new(50.0, 300.0, 200.0, 20.0);
        assert!(!is_landing(&r, &p, -10.0));
        assert!(!is_landing(&r, &p, 0.0));
        assert!(is_landing(&r, &p, 10.0));
    }

    #[test]
    fn test_landing_tolerance_band() {
        let p = Rect::new(0.0, 300.0, 200.0, 20.0);
        // Feet exactly on top, at the bottom of the band, and just past it
        assert!(is_landing(&Rect::new(10.0, 270.0, 20.0, 30.0), &p, 1.0));
        assert!(is_landing(&Rect::new(10.0, 290.0, 20.0, 30.0), &p, 1.0));
        assert!(!is_landing(&Rect::new(10.0, 290.5, 20.0, 30.0), &p, 1.0));
        // Feet above the top
        assert!(!is_landing(&Rect::new(10.0, 269.0, 20.0, 30.0), &p, 1.0));
    }

    #[test]
    fn test_landing_needs_strict_horizontal_overlap() {
        let p = Rect::new(100.0, 300.0, 100.0, 20.0);
        assert!(!is_landing(&Rect::new(80.0, 275.0, 20.0, 30.0), &p, 1.0));
        assert!(is_landing(&Rect::new(81.0, 275.0, 20.0, 30.0), &p, 1.0));
        assert!(!is_landing(&Rect::new(200.0, 275.0, 20.0, 30.0), &p, 1.0));
    }

    #[test]
    fn test_trap_collision() {
        let runner = runner_at(100.0, 100.0);
        let near = Trap::new("t1", TrapKind::Spike, 110.0, 115.0).expect("trap");
        let far = Trap::new("t2", TrapKind::Spike, 500.0, 500.0).expect("trap");
        assert!(hits_trap(&runner, &near));
        assert!(!hits_trap(&runner, &far));
    }

    #[test]
    fn test_goal_reached() {
        let runner = runner_at(100.0, 100.0);
        assert!(reached_goal(&runner, &Rect::new(90.0, 90.0, 50.0, 50.0)));
        assert!(!reached_goal(&runner, &Rect::new(500.0, 500.0, 50.0, 50.0)));
    }

    #[test]
    fn test_fell_off_map() {
        assert!(fell_off_map(&runner_at(100.0, 600.0), 500.0));
        assert!(!fell_off_map(&runner_at(100.0, 200.0), 500.0));
        assert!(!fell_off_map(&runner_at(100.0, 550.0), 500.0));
    }

    #[test]
    fn test_out_of_bounds_right_edge_only() {
        assert!(out_of_bounds(&runner_at(900.0, 100.0), 800.0));
        assert!(!out_of_bounds(&runner_at(400.0, 100.0), 800.0));
        // No left bound
        assert!(!out_of_bounds(&runner_at(-500.0, 100.0), 800.0));
    }
}
