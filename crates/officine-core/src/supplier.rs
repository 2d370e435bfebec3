//! # Supplier Map Simulation
//!
//! The supplier screen shows each supplier as a pin on a 0-100 demo map and
//! a truck crawling along a route. Neither is real logistics data.
//!
//! ```text
//!   0 ┌───────────────────────────────┐
//!     │                               │
//!  30 │      ┌─────────────────┐      │   new suppliers land in the
//!     │      │    50 ± 20      │      │   centre square [30, 70)²
//!  70 │      └─────────────────┘      │
//!     │                               │
//! 100 └───────────────────────────────┘
//!
//!   progress: 0.0 ─(+0.5 per tick)─► 100.0 ─(next tick)─► 0.0
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::GeoPoint;

/// Centre of the demo map.
pub const MAP_CENTER: f64 = 50.0;

/// Half-width of the square new suppliers are dropped into.
pub const MAP_SPREAD: f64 = 20.0;

/// Percentage points added per tick.
pub const DELIVERY_STEP: f64 = 0.5;

impl GeoPoint {
    /// Random pin in `[30, 70)` on both axes.
    pub fn random_near_center<R: Rng>(rng: &mut R) -> Self {
        let low = MAP_CENTER - MAP_SPREAD;
        let high = MAP_CENTER + MAP_SPREAD;
        GeoPoint {
            lat: rng.gen_range(low..high),
            lng: rng.gen_range(low..high),
        }
    }
}

/// Cosmetic truck position along the delivery route, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct DeliveryProgress(f64);

impl DeliveryProgress {
    pub const fn start() -> Self {
        DeliveryProgress(0.0)
    }

    pub const fn percent(&self) -> f64 {
        self.0
    }

    /// One animation step: +0.5, or back to 0 once 100 has been reached.
    pub fn tick(&mut self) {
        self.0 = if self.0 >= 100.0 {
            0.0
        } else {
            self.0 + DELIVERY_STEP
        };
    }

    /// Returns the value after one tick.
    pub fn ticked(mut self) -> Self {
        self.tick();
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_position_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let p = GeoPoint::random_near_center(&mut rng);
            assert!((30.0..70.0).contains(&p.lat), "lat {}", p.lat);
            assert!((30.0..70.0).contains(&p.lng), "lng {}", p.lng);
        }
    }

    #[test]
    fn test_progress_steps_by_half() {
        let mut progress = DeliveryProgress::start();
        progress.tick();
        progress.tick();
        assert_eq!(progress.percent(), 1.0);
    }

    #[test]
    fn test_progress_wraps_after_reaching_100() {
        let mut progress = DeliveryProgress::start();
        for _ in 0..200 {
            progress.tick();
        }
        assert_eq!(progress.percent(), 100.0);

        progress.tick();
        assert_eq!(progress.percent(), 0.0);
        assert_eq!(progress.ticked().percent(), 0.5);
    }
}
