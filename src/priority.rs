//! Sources of carrier tie-break priorities.
//!
//! Priorities are drawn when a carrier is constructed and never change
//! afterwards. The solver itself never touches a random number generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces the priority value for each newly created carrier.
pub trait PrioritySource {
    /// Returns the priority for the next carrier.
    fn next_priority(&mut self) -> u32;
}

/// Gives every carrier the same priority.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPriority {
    value: u32,
}

impl FixedPriority {
    pub fn new(value: u32) -> Self {
        Self { value }
    }
}

impl PrioritySource for FixedPriority {
    fn next_priority(&mut self) -> u32 {
        self.value
    }
}

/// Draws priorities uniformly from an inclusive range with a seeded RNG.
///
/// # Examples
///
/// ```
/// use u_assign::priority::{PrioritySource, UniformPriority};
///
/// let mut a = UniformPriority::new(7);
/// let mut b = UniformPriority::new(7);
/// let pa: Vec<u32> = (0..5).map(|_| a.next_priority()).collect();
/// let pb: Vec<u32> = (0..5).map(|_| b.next_priority()).collect();
/// assert_eq!(pa, pb);
/// assert!(pa.iter().all(|&p| p <= UniformPriority::DEFAULT_MAX));
/// ```
#[derive(Debug, Clone)]
pub struct UniformPriority {
    rng: StdRng,
    low: u32,
    high: u32,
}

impl UniformPriority {
    /// Upper bound of the default range `0..=5`.
    pub const DEFAULT_MAX: u32 = 5;

    /// Creates a source over `0..=DEFAULT_MAX`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            low: 0,
            high: Self::DEFAULT_MAX,
        }
    }

    /// Restricts draws to `low..=high`.
    ///
    /// Returns `None` if `low > high`.
    pub fn with_range(mut self, low: u32, high: u32) -> Option<Self> {
        if low > high {
            return None;
        }
        self.low = low;
        self.high = high;
        Some(self)
    }
}

impl PrioritySource for UniformPriority {
    fn next_priority(&mut self) -> u32 {
        self.rng.random_range(self.low..=self.high)
    }
}

impl<F: FnMut() -> u32> PrioritySource for F {
    fn next_priority(&mut self) -> u32 {
        self()
    }
}
