//! Level catalog
//!
//! Each level is an immutable template: world bounds, spawn point, goal,
//! an ordered platform layout, the runner's speed multiplier, and the
//! player's starting point budget. Difficulty rises with the level number:
//! fewer points, a faster runner, narrower platforms.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::error::BuildError;
use crate::session::MAX_LEVEL;

/// A solid platform the runner can land on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    id: String,
    bounds: Rect,
    active: bool,
}

impl Platform {
    /// Build a platform, rejecting empty ids and degenerate geometry
    pub fn new(
        id: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<Self, BuildError> {
        let id = id.into();
        if id.is_empty() {
            return Err(BuildError::EmptyId { entity: "platform" });
        }
        for (field, value) in [("x", x), ("y", y), ("width", width), ("height", height)] {
            if !value.is_finite() {
                return Err(BuildError::NonFinite {
                    entity: "platform",
                    field,
                    value,
                });
            }
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(BuildError::InvalidSize {
                entity: "platform",
                width,
                height,
            });
        }
        Ok(Self::fixed(&id, x, y, width, height))
    }

    /// Catalog platforms are known-good; skip validation
    fn fixed(id: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.to_string(),
            bounds: Rect::new(x, y, width, height),
            active: true,
        }
    }

    /// Same platform with the given active flag
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// An immutable level template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    number: u32,
    width: f64,
    height: f64,
    spawn: DVec2,
    goal: Rect,
    platforms: Vec<Platform>,
    runner_speed_multiplier: f64,
    starting_points: u32,
}

impl Level {
    /// Level template for `number`; anything outside 1..=MAX_LEVEL gets the
    /// hardest level
    pub fn create(number: u32) -> Self {
        let level = match number {
            1 => Self::level_1(),
            2 => Self::level_2(),
            3 => Self::level_3(),
            4 => Self::level_4(),
            _ => Self::level_5(),
        };
        debug_assert_eq!(level.validate(), Ok(()), "level {} template", level.number);
        level
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn spawn(&self) -> DVec2 {
        self.spawn
    }

    pub fn goal(&self) -> Rect {
        self.goal
    }

    /// Platforms in resolution order
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn runner_speed_multiplier(&self) -> f64 {
        self.runner_speed_multiplier
    }

    pub fn starting_points(&self) -> u32 {
        self.starting_points
    }

    /// Check the template is usable: number in range, finite geometry,
    /// at least one platform, all ids present
    pub fn validate(&self) -> Result<(), BuildError> {
        if !(1..=MAX_LEVEL).contains(&self.number) {
            return Err(BuildError::LevelNumber(self.number));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(BuildError::InvalidSize {
                entity: "level",
                width: self.width,
                height: self.height,
            });
        }
        if !self.spawn.is_finite() || !self.goal.is_finite() {
            return Err(BuildError::NonFinite {
                entity: "level",
                field: "spawn/goal",
                value: f64::NAN,
            });
        }
        if self.platforms.is_empty() {
            return Err(BuildError::NoPlatforms(self.number));
        }
        for p in &self.platforms {
            let b = p.bounds;
            Platform::new(p.id.as_str(), b.x, b.y, b.width, b.height)?;
        }
        Ok(())
    }

    fn base(number: u32, spawn: DVec2, goal: Rect, speed: f64, points: u32) -> Self {
        Self {
            number,
            width: 800.0,
            height: 450.0,
            spawn,
            goal,
            platforms: Vec::new(),
            runner_speed_multiplier: speed,
            starting_points: points,
        }
    }

    fn with_platforms(mut self, layout: &[(&str, f64, f64, f64, f64)]) -> Self {
        self.platforms = layout
            .iter()
            .map(|&(id, x, y, w, h)| Platform::fixed(id, x, y, w, h))
            .collect();
        self
    }

    /// Three wide ground slabs, two small gaps
    fn level_1() -> Self {
        Self::base(
            1,
            DVec2::new(50.0, 300.0),
            Rect::new(750.0, 320.0, 40.0, 80.0),
            1.0,
            150,
        )
        .with_platforms(&[
            ("p1", 0.0, 400.0, 250.0, 20.0),
            ("p2", 300.0, 400.0, 200.0, 20.0),
            ("p3", 550.0, 400.0, 250.0, 20.0),
        ])
    }

    fn level_2() -> Self {
        Self::base(
            2,
            DVec2::new(50.0, 300.0),
            Rect::new(750.0, 320.0, 40.0, 80.0),
            1.2,
            120,
        )
        .with_platforms(&[
            ("p1", 0.0, 400.0, 180.0, 20.0),
            ("p2", 230.0, 400.0, 150.0, 20.0),
            ("p3", 430.0, 400.0, 120.0, 20.0),
            ("p4", 600.0, 400.0, 200.0, 20.0),
            ("p5", 320.0, 320.0, 100.0, 15.0),
        ])
    }

    /// Ground row plus an upper row
    fn level_3() -> Self {
        Self::base(
            3,
            DVec2::new(50.0, 250.0),
            Rect::new(750.0, 320.0, 40.0, 80.0),
            1.4,
            100,
        )
        .with_platforms(&[
            ("p1", 0.0, 400.0, 150.0, 20.0),
            ("p2", 200.0, 400.0, 100.0, 20.0),
            ("p3", 350.0, 400.0, 100.0, 20.0),
            ("p4", 500.0, 400.0, 80.0, 20.0),
            ("p5", 630.0, 400.0, 170.0, 20.0),
            ("p6", 0.0, 300.0, 120.0, 15.0),
            ("p7", 170.0, 280.0, 100.0, 15.0),
            ("p8", 320.0, 260.0, 120.0, 15.0),
            ("p9", 490.0, 280.0, 100.0, 15.0),
            ("p10", 640.0, 300.0, 160.0, 15.0),
        ])
    }

    fn level_4() -> Self {
        Self::base(
            4,
            DVec2::new(50.0, 300.0),
            Rect::new(750.0, 370.0, 40.0, 80.0),
            1.6,
            80,
        )
        .with_platforms(&[
            ("p1", 0.0, 400.0, 100.0, 20.0),
            ("p2", 150.0, 380.0, 70.0, 15.0),
            ("p3", 270.0, 360.0, 70.0, 15.0),
            ("p4", 390.0, 380.0, 70.0, 15.0),
            ("p5", 510.0, 400.0, 80.0, 20.0),
            ("p6", 640.0, 400.0, 160.0, 20.0),
            ("p7", 180.0, 300.0, 60.0, 12.0),
            ("p8", 350.0, 280.0, 80.0, 12.0),
            ("p9", 520.0, 300.0, 60.0, 12.0),
        ])
    }

    /// Stepping stones; hardest and the fallback for unknown numbers
    fn level_5() -> Self {
        Self::base(
            5,
            DVec2::new(30.0, 280.0),
            Rect::new(760.0, 370.0, 35.0, 80.0),
            1.8,
            60,
        )
        .with_platforms(&[
            ("p1", 0.0, 400.0, 80.0, 20.0),
            ("p2", 120.0, 370.0, 50.0, 12.0),
            ("p3", 210.0, 340.0, 50.0, 12.0),
            ("p4", 300.0, 370.0, 50.0, 12.0),
            ("p5", 390.0, 400.0, 60.0, 20.0),
            ("p6", 490.0, 370.0, 50.0, 12.0),
            ("p7", 580.0, 340.0, 50.0, 12.0),
            ("p8", 670.0, 370.0, 50.0, 12.0),
            ("p9", 750.0, 400.0, 50.0, 20.0),
            ("p10", 200.0, 260.0, 40.0, 10.0),
            ("p11", 350.0, 240.0, 40.0, 10.0),
            ("p12", 500.0, 260.0, 40.0, 10.0),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_is_well_formed() {
        for n in 1..=MAX_LEVEL {
            let level = Level::create(n);
            assert_eq!(level.number(), n);
            assert!(!level.platforms().is_empty());
            assert!(level.spawn().is_finite());
            assert!(level.goal().width > 0.0 && level.goal().height > 0.0);
            assert_eq!(level.validate(), Ok(()));
        }
    }

    #[test]
    fn test_validate_rejects_empty_layout() {
        let broken = Level::create(2).with_platforms(&[]);
        assert_eq!(broken.validate(), Err(BuildError::NoPlatforms(2)));
    }

    #[test]
    fn test_out_of_range_falls_back_to_hardest() {
        let hardest = Level::create(MAX_LEVEL);
        assert_eq!(Level::create(0), hardest);
        assert_eq!(Level::create(6), hardest);
        assert_eq!(Level::create(u32::MAX), hardest);
    }

    #[test]
    fn test_difficulty_rises() {
        let l1 = Level::create(1);
        let l5 = Level::create(5);
        assert_eq!(l1.starting_points(), 150);
        assert!(l5.starting_points() < l1.starting_points());
        assert!(l5.runner_speed_multiplier() > l1.runner_speed_multiplier());
    }

    #[test]
    fn test_platform_order_is_preserved() {
        let level = Level::create(3);
        let ids: Vec<&str> = level.platforms().iter().map(|p| p.id()).collect();
        assert_eq!(ids.first(), Some(&"p1"));
        assert_eq!(ids.last(), Some(&"p10"));
    }

    #[test]
    fn test_platform_validation() {
        assert_eq!(
            Platform::new("", 0.0, 0.0, 10.0, 10.0),
            Err(BuildError::EmptyId { entity: "platform" })
        );
        assert!(matches!(
            Platform::new("p", 0.0, 0.0, 0.0, 10.0),
            Err(BuildError::InvalidSize { .. })
        ));
        assert!(matches!(
            Platform::new("p", f64::INFINITY, 0.0, 10.0, 10.0),
            Err(BuildError::NonFinite { field: "x", .. })
        ));

        let p = Platform::new("p", 1.0, 2.0, 3.0, 4.0).expect("valid platform");
        assert!(p.is_active());
        assert!(!p.with_active(false).is_active());
    }
}
