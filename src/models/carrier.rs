//! Carrier (truck) type.

use serde::{Deserialize, Serialize};

use super::Position;
use crate::priority::PrioritySource;

/// A carrier that can serve at most one job.
///
/// The priority is only consulted to break ties between equal-cost
/// assignments. It is always supplied from outside, either directly or by a
/// [`PrioritySource`].
///
/// # Examples
///
/// ```
/// use u_assign::models::{Carrier, Position};
///
/// let c = Carrier::new("Apples", Position::new(30.876719, -95.876719, "Lenapah"))
///     .with_priority(3);
/// assert_eq!(c.name(), "Apples");
/// assert_eq!(c.priority(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carrier {
    name: String,
    home: Position,
    #[serde(default)]
    priority: u32,
}

impl Carrier {
    /// Creates a carrier with priority 0.
    pub fn new(name: impl Into<String>, home: Position) -> Self {
        Self {
            name: name.into(),
            home,
            priority: 0,
        }
    }

    /// Creates a carrier whose priority is drawn from `source`.
    pub fn from_source<S: PrioritySource + ?Sized>(
        name: impl Into<String>,
        home: Position,
        source: &mut S,
    ) -> Self {
        Self::new(name, home).with_priority(source.next_priority())
    }

    /// Sets the tie-break priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the carrier currently is.
    pub fn home(&self) -> &Position {
        &self.home
    }

    /// Tie-break priority ("rate").
    pub fn priority(&self) -> u32 {
        self.priority
    }
}
