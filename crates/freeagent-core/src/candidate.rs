// Free-agent candidate representation.

use std::fmt;

/// A free agent available for signing.
///
/// Candidates are built once by the caller and only ever read by the
/// ranking and selection passes.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Display name, used in the signed list.
    pub name: String,
    /// Field position index. At most one candidate per position is signed.
    pub position: u32,
    /// Salary required to sign. Must be non-zero for ranking to be meaningful.
    pub cost: u64,
    /// Value over replacement player (VORP).
    pub value: f64,
}

impl Candidate {
    pub fn new(name: impl Into<String>, position: u32, cost: u64, value: f64) -> Self {
        Candidate {
            name: name.into(),
            position,
            cost,
            value,
        }
    }

    /// VORP per dollar, the greedy ranking key.
    ///
    /// A zero cost yields an infinite ratio, or NaN when the value is also
    /// zero. See [`crate::ranking::rank`] for where those land.
    pub fn ratio(&self) -> f64 {
        self.value / self.cost as f64
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (pos {}, ${}, {} VORP)",
            self.name, self.position, self.cost, self.value
        )
    }
}
