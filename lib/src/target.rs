use crate::results::GameError;
use log::{debug, warn};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// The default lowest number that can be picked.
pub const DEFAULT_LOW: i64 = 1;
/// The default highest number that can be picked.
pub const DEFAULT_HIGH: i64 = 100;

/// An inclusive range of numbers that a target can be picked from.
///
/// `low` is always less than or equal to `high`.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct Bounds {
    low: i64,
    high: i64,
}

impl Bounds {
    /// Constructs new bounds, or fails if `low` is greater than `high`.
    pub fn new(low: i64, high: i64) -> Result<Bounds, GameError> {
        if low > high {
            return Err(GameError::InvalidBounds { low, high });
        }
        Ok(Bounds { low, high })
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    /// Returns `true` iff `value` lies within these bounds.
    pub fn contains(&self, value: i64) -> bool {
        self.low <= value && value <= self.high
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
        }
    }
}

/// A source of random numbers, which can be swapped out to make games deterministic.
pub trait RandomSource {
    /// Draws a number from the inclusive range `[low, high]`. Callers guarantee that
    /// `low <= high`.
    fn next_in_range(&mut self, low: i64, high: i64) -> i64;
}

impl<F> RandomSource for F
where
    F: FnMut(i64, i64) -> i64,
{
    fn next_in_range(&mut self, low: i64, high: i64) -> i64 {
        self(low, high)
    }
}

/// Draws numbers uniformly from any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> RngSource<R> {
        RngSource { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Uses the thread-local generator, seeded by the operating system.
    pub fn thread() -> RngSource<ThreadRng> {
        RngSource::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Uses a generator with a fixed seed, so that the same numbers are drawn every time.
    pub fn seeded(seed: u64) -> RngSource<StdRng> {
        RngSource::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_in_range(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..=high)
    }
}

/// Picks a number uniformly within the given bounds, using the thread-local generator.
pub fn choose_target(bounds: Bounds) -> i64 {
    choose_target_with(bounds, &mut RngSource::thread())
}

/// Picks a number within the given bounds, using the given source of randomness.
///
/// The result always lies within `bounds`. If the source misbehaves and returns a number
/// outside of the requested range, it is clamped to the nearest bound.
pub fn choose_target_with<S: RandomSource + ?Sized>(bounds: Bounds, source: &mut S) -> i64 {
    let drawn = source.next_in_range(bounds.low, bounds.high);
    if !bounds.contains(drawn) {
        warn!(
            "Random source returned {} outside of [{}, {}], clamping",
            drawn, bounds.low, bounds.high
        );
    }
    let target = drawn.clamp(bounds.low, bounds.high);
    debug!("Chose target {} in [{}, {}]", target, bounds.low, bounds.high);
    target
}
