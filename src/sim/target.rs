//! Shrinking circular targets

use glam::Vec2;

use crate::renderer::Color;
use crate::settings::Palette;

/// Outcome of clicking a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitResult {
    /// Click landed inside the current radius
    Hit,
    /// Click landed outside the current radius
    Miss,
    /// Target was already resolved, nothing changed
    Ignored,
}

/// Resolution state of a target. Set once, never reverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    #[default]
    Unresolved,
    Hit,
    Miss,
}

/// A clickable hit zone that shrinks linearly to zero over its lifetime
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: u32,
    /// Centre in screen space
    pub pos: Vec2,
    /// Session-relative spawn time (seconds)
    pub spawn_time: f64,
    pub lifetime_secs: f64,
    /// Radius at spawn time
    pub base_radius: f32,
    pub resolution: Resolution,
}

impl Target {
    pub fn new(id: u32, pos: Vec2, spawn_time: f64, lifetime_secs: f64, base_radius: f32) -> Self {
        Self {
            id,
            pos,
            spawn_time,
            lifetime_secs,
            base_radius,
            resolution: Resolution::Unresolved,
        }
    }

    /// Clickable (and drawn) radius at `now`, never negative
    pub fn shrink_radius(&self, now: f64) -> f32 {
        let elapsed = now - self.spawn_time;
        let remaining = 1.0 - elapsed / self.lifetime_secs;
        (self.base_radius as f64 * remaining).clamp(0.0, self.base_radius as f64) as f32
    }

    /// Lifetime has fully elapsed
    pub fn is_expired(&self, now: f64) -> bool {
        now - self.spawn_time >= self.lifetime_secs
    }

    pub fn is_clicked(&self) -> bool {
        self.resolution != Resolution::Unresolved
    }

    pub fn is_hit(&self) -> bool {
        self.resolution == Resolution::Hit
    }

    /// Resolve a click at `click`. Only the first call on a target has any effect.
    pub fn resolve_click(&mut self, click: Vec2, now: f64) -> HitResult {
        if self.is_clicked() {
            return HitResult::Ignored;
        }

        if click.distance(self.pos) <= self.shrink_radius(now) {
            self.resolution = Resolution::Hit;
            HitResult::Hit
        } else {
            self.resolution = Resolution::Miss;
            HitResult::Miss
        }
    }

    /// Fill colour for the current resolution state
    pub fn color(&self, palette: &Palette) -> Color {
        match self.resolution {
            Resolution::Unresolved => palette.target,
            Resolution::Hit => palette.hit,
            Resolution::Miss => palette.miss,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn target_at(x: f32, y: f32, lifetime: f64) -> Target {
        Target::new(1, Vec2::new(x, y), 0.0, lifetime, 60.0)
    }

    #[test]
    fn test_shrink_radius_linear() {
        let t = target_at(100.0, 100.0, 2.0);
        assert_eq!(t.shrink_radius(0.0), 60.0);
        assert!((t.shrink_radius(1.0) - 30.0).abs() < 1e-4);
        assert_eq!(t.shrink_radius(2.0), 0.0);
        assert_eq!(t.shrink_radius(50.0), 0.0);
    }

    #[test]
    fn test_click_center_halfway_is_hit() {
        let mut t = target_at(100.0, 100.0, 2.0);
        assert_eq!(t.resolve_click(Vec2::new(100.0, 100.0), 1.0), HitResult::Hit);
        assert!(t.is_hit());
        assert!(t.is_clicked());
    }

    #[test]
    fn test_click_outside_radius_is_miss() {
        let mut t = target_at(100.0, 100.0, 2.0);
        // radius at t=0.1 is 57, click is 70 away
        assert_eq!(t.resolve_click(Vec2::new(170.0, 100.0), 0.1), HitResult::Miss);
        assert!(t.is_clicked());
        assert!(!t.is_hit());
    }

    #[test]
    fn test_click_on_edge_is_hit() {
        let mut t = target_at(0.0, 0.0, 2.0);
        assert_eq!(t.resolve_click(Vec2::new(60.0, 0.0), 0.0), HitResult::Hit);
    }

    #[test]
    fn test_expired_target_cannot_be_hit() {
        let mut t = target_at(100.0, 100.0, 1.5);
        assert_eq!(t.resolve_click(Vec2::new(101.0, 100.0), 10.0), HitResult::Miss);
    }

    #[test]
    fn test_first_click_wins() {
        let mut t = target_at(100.0, 100.0, 2.0);
        assert_eq!(t.resolve_click(Vec2::new(500.0, 500.0), 0.5), HitResult::Miss);
        assert_eq!(t.resolve_click(Vec2::new(100.0, 100.0), 0.5), HitResult::Ignored);
        assert_eq!(t.resolution, Resolution::Miss);
    }

    #[test]
    fn test_color_policy() {
        let palette = Palette::default();
        let mut t = target_at(100.0, 100.0, 2.0);
        assert_eq!(t.color(&palette), palette.target);
        t.resolve_click(Vec2::new(100.0, 100.0), 0.0);
        assert_eq!(t.color(&palette), palette.hit);

        let mut t = target_at(100.0, 100.0, 2.0);
        t.resolve_click(Vec2::new(300.0, 100.0), 0.0);
        assert_eq!(t.color(&palette), palette.miss);
    }

    proptest! {
        #[test]
        fn prop_shrink_radius_bounded_and_monotonic(
            lifetime in 0.05f64..10.0,
            a in 0.0f64..20.0,
            b in 0.0f64..20.0,
        ) {
            let t = target_at(0.0, 0.0, lifetime);
            let (early, late) = if a <= b { (a, b) } else { (b, a) };
            let r_early = t.shrink_radius(early);
            let r_late = t.shrink_radius(late);
            prop_assert!((0.0..=60.0).contains(&r_early));
            prop_assert!((0.0..=60.0).contains(&r_late));
            prop_assert!(r_late <= r_early);
        }

        #[test]
        fn prop_resolve_click_idempotent(
            x in 0.0f32..800.0,
            y in 0.0f32..600.0,
            x2 in 0.0f32..800.0,
            y2 in 0.0f32..600.0,
            now in 0.0f64..3.0,
            later in 0.0f64..3.0,
        ) {
            let mut t = target_at(400.0, 300.0, 2.0);
            let first = t.resolve_click(Vec2::new(x, y), now);
            prop_assert_ne!(first, HitResult::Ignored);
            let snapshot = t.clone();
            prop_assert_eq!(t.resolve_click(Vec2::new(x2, y2), later), HitResult::Ignored);
            prop_assert_eq!(t, snapshot);
        }
    }
}
