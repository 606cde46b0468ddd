//! # Wheel Physics
//!
//! The wheel advances in fixed ticks (60 per second by default) no matter how
//! often frames are drawn. Each tick adds the speed to the angle and scales
//! the speed by the decay factor; below the stop threshold the wheel halts.

use rand::Rng;

use crate::config::WheelConfig;

/// Index of the segment under the top pointer for a wheel rotated by `angle` degrees.
///
/// Segments are equal slices of 360° laid out clockwise from the top, starting
/// at the wheel's rotation. `None` when there are no segments.
pub fn segment_index(angle: f32, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    // Multiply before dividing, in f64, so angles on a boundary land on the right side
    let turned = (-f64::from(angle)).rem_euclid(360.0);
    let index = (turned * count as f64 / 360.0).floor() as usize;
    Some(index.min(count - 1))
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelPhysics {
    /// Rotation in degrees, kept in [0, 360)
    angle: f32,
    /// Degrees per tick
    speed: f32,
    spinning: bool,
    /// Fractional ticks carried over between frames
    pending_ticks: f32,
    settings: WheelConfig,
}

impl WheelPhysics {
    pub fn new(settings: WheelConfig) -> Self {
        Self {
            angle: 0.0,
            speed: 0.0,
            spinning: false,
            pending_ticks: 0.0,
            settings,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// Kick off a spin with a random speed. Returns false if already spinning.
    pub fn start_spin<G: Rng + ?Sized>(&mut self, rng: &mut G) -> bool {
        if self.spinning {
            return false;
        }
        self.speed = rng.gen_range(self.settings.min_speed..self.settings.max_speed);
        self.spinning = true;
        self.pending_ticks = 0.0;
        true
    }

    /// Advance one tick. Returns true on the tick where the wheel stops.
    pub fn tick(&mut self) -> bool {
        if !self.spinning {
            return false;
        }

        self.angle = (self.angle + self.speed).rem_euclid(360.0);
        self.speed *= self.settings.decay;

        if self.speed.abs() < self.settings.stop_threshold {
            self.speed = 0.0;
            self.spinning = false;
            return true;
        }
        false
    }

    /// Run as many whole ticks as `dt` seconds cover. Returns true if the wheel stopped.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.spinning {
            self.pending_ticks = 0.0;
            return false;
        }

        self.pending_ticks += dt.max(0.0) * self.settings.ticks_per_second;
        let ticks = self.pending_ticks.floor();
        self.pending_ticks -= ticks;

        for _ in 0..ticks as u64 {
            if self.tick() {
                self.pending_ticks = 0.0;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spinning_wheel(seed: u64) -> WheelPhysics {
        let mut physics = WheelPhysics::new(WheelConfig::default());
        let mut rng = StdRng::seed_from_u64(seed);
        assert!(physics.start_spin(&mut rng));
        physics
    }

    #[test]
    fn test_segment_index_quarters() {
        assert_eq!(segment_index(0.0, 4), Some(0));
        assert_eq!(segment_index(-10.0, 4), Some(0));
        assert_eq!(segment_index(10.0, 4), Some(3));
        assert_eq!(segment_index(90.0, 4), Some(3));
        assert_eq!(segment_index(180.0, 4), Some(2));
        assert_eq!(segment_index(270.0, 4), Some(1));
        assert_eq!(segment_index(359.5, 4), Some(0));
    }

    #[test]
    fn test_segment_index_edge_counts() {
        assert_eq!(segment_index(123.0, 0), None);
        for degrees in 0..360 {
            assert_eq!(segment_index(degrees as f32, 1), Some(0));
        }
    }

    #[test]
    fn test_segment_index_always_in_range() {
        for count in 1..=12 {
            for tenth in 0..3600 {
                let index = segment_index(tenth as f32 / 10.0, count);
                assert!(index.is_some_and(|i| i < count));
            }
        }
    }

    /// Exact segment for `angle` using integer arithmetic on its binary value
    fn exact_segment(angle: f32, count: usize) -> usize {
        let scale = 2f64.powi(40);
        let scaled = (f64::from(angle) * scale) as i128;
        let full_turn = 360 * scale as i128;
        let turned = (-scaled).rem_euclid(full_turn);
        (turned * count as i128 / full_turn) as usize
    }

    #[test]
    fn test_segment_index_matches_exact_division() {
        // 43.2 rounds up as an f32, so the pointer sits just inside segment 21
        assert_eq!(segment_index(43.2, 25), Some(21));

        for count in 1..=40 {
            for tenth in -3600..3600 {
                let angle = tenth as f32 / 10.0;
                assert_eq!(
                    segment_index(angle, count),
                    Some(exact_segment(angle, count)),
                    "angle {} with {} segments",
                    angle,
                    count
                );
            }
        }
    }

    #[test]
    fn test_start_spin_speed_in_range() {
        for seed in 0..50 {
            let physics = spinning_wheel(seed);
            assert!(physics.speed() >= 20.0 && physics.speed() < 30.0);
            assert!(physics.is_spinning());
        }
    }

    #[test]
    fn test_start_spin_while_spinning_is_noop() {
        let mut physics = spinning_wheel(3);
        let speed = physics.speed();
        let mut rng = StdRng::seed_from_u64(99);

        assert!(!physics.start_spin(&mut rng));
        assert_eq!(physics.speed(), speed);
    }

    #[test]
    fn test_tick_moves_and_decays() {
        let mut physics = spinning_wheel(5);
        let speed = physics.speed();

        assert!(!physics.tick());
        assert!((physics.angle() - speed).abs() < 1e-4);
        assert!((physics.speed() - speed * 0.98).abs() < 1e-4);
    }

    #[test]
    fn test_wheel_eventually_stops() {
        let mut physics = spinning_wheel(11);
        let stopped_after = (1..=1000).find(|_| physics.tick());

        // 30 * 0.98^n < 0.5 needs about 203 ticks
        assert!(stopped_after.is_some_and(|n| n <= 210));
        assert!(!physics.is_spinning());
        assert!((0.0..360.0).contains(&physics.angle()));
        assert!(!physics.tick());
    }

    #[test]
    fn test_advance_runs_whole_ticks() {
        let mut reference = spinning_wheel(8);
        let mut physics = reference.clone();

        // Half a second at 60 ticks per second
        physics.advance(0.5);
        for _ in 0..30 {
            reference.tick();
        }
        assert!((physics.angle() - reference.angle()).abs() < 1e-3);
        assert!((physics.speed() - reference.speed()).abs() < 1e-4);
    }

    #[test]
    fn test_advance_carries_fractions() {
        let mut physics = spinning_wheel(2);
        let speed = physics.speed();

        // Two frames of 0.6 ticks make one tick
        physics.advance(0.01);
        assert_eq!(physics.angle(), 0.0);
        physics.advance(0.01);
        assert!((physics.angle() - speed).abs() < 1e-4);
    }

    #[test]
    fn test_advance_when_idle_does_nothing() {
        let mut physics = WheelPhysics::new(WheelConfig::default());
        assert!(!physics.advance(10.0));
        assert_eq!(physics.angle(), 0.0);
    }
}
