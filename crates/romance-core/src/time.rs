//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter owned by the host.  The
//! engine only compares ticks (cooldowns) and offsets them by configured
//! durations, so no wall-clock mapping lives here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ticks in one in-game hour.
pub const TICKS_PER_HOUR: u64 = 2_500;

/// Ticks in one in-game day.
pub const TICKS_PER_DAY: u64 = 60_000;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0.saturating_add(n))
    }

    /// Ticks elapsed from `earlier` to `self`, or 0 if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Ticks remaining until `later`, or 0 if it has already passed.
    #[inline]
    pub fn until(self, later: Tick) -> u64 {
        later.0.saturating_sub(self.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        self.offset(rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.since(rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Render a tick span as a short "Nd Nh" period, used in cooldown messages.
pub fn ticks_to_period(ticks: u64) -> String {
    // Whole hours, rounded up, carried into days.
    let total_hours = ticks.div_ceil(TICKS_PER_HOUR);
    let hours_per_day = TICKS_PER_DAY / TICKS_PER_HOUR;
    let (days, hours) = (total_hours / hours_per_day, total_hours % hours_per_day);
    match (days, hours) {
        (0, h) => format!("{h}h"),
        (d, 0) => format!("{d}d"),
        (d, h) => format!("{d}d {h}h"),
    }
}
