// Greedy free-agent signing.
//
// Walks the ranked candidate list once, signing each candidate whose
// position is open, whose salary fits under the budget, and whose position
// index is within the position limit. There is no backtracking: this is a
// single-pass heuristic, not an optimizer.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::candidate::Candidate;
use crate::config::SelectionConfig;
use crate::ranking::rank_refs;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Input precondition violations reported by [`try_select`].
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("candidate `{name}` has zero cost")]
    ZeroCost { name: String },

    #[error("candidate `{name}` has a non-finite value")]
    NonFiniteValue { name: String },
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Which early-termination check ended the walk.
///
/// The checks run before each step in declaration order, so when several
/// hold at once the earliest variant is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Running cost equals the budget exactly.
    BudgetReached,
    /// Every ranked candidate has been considered.
    CandidatesExhausted,
    /// More positions are filled than the position limit.
    PositionsExhausted,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopReason::BudgetReached => "budget reached",
            StopReason::CandidatesExhausted => "candidates exhausted",
            StopReason::PositionsExhausted => "positions exhausted",
        };
        f.write_str(s)
    }
}

/// Outcome of a signing pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Sum of VORP over signed candidates.
    pub total_value: f64,
    /// Sum of salaries over signed candidates.
    pub total_cost: u64,
    /// Signed candidate names, in signing order.
    pub signed: Vec<String>,
    pub stop: StopReason,
}

impl Selection {
    /// Split into the `(total_value, total_cost, signed)` triple.
    pub fn into_parts(self) -> (f64, u64, Vec<String>) {
        (self.total_value, self.total_cost, self.signed)
    }

    /// Budget left unspent. Saturates at zero.
    pub fn remaining(&self, budget: u64) -> u64 {
        budget.saturating_sub(self.total_cost)
    }
}

// ---------------------------------------------------------------------------
// Core computation
// ---------------------------------------------------------------------------

/// Sign free agents greedily by VORP per dollar.
///
/// Before each step the walk stops if:
/// 1. the running cost equals `budget` exactly (a cheaper candidate that
///    would still fit under a partly spent budget does not stop the walk),
/// 2. every candidate has been considered, or
/// 3. the number of filled positions is strictly greater than
///    `position_limit`.
///
/// A candidate is signed when its position is still open, its cost fits in
/// the remaining budget, and its position is `<= position_limit`. The cursor
/// advances after every candidate whether or not it was signed.
///
/// No input validation is done here. Zero costs and non-finite values are
/// ranked as [`crate::ranking::rank`] describes (infinite ratios first, NaN
/// ratios last); use [`try_select`] to reject them up front.
pub fn select(candidates: &[Candidate], budget: u64, position_limit: u32) -> Selection {
    let ranked = rank_refs(candidates);

    let mut total_value = 0.0;
    let mut total_cost: u64 = 0;
    let mut signed: Vec<String> = Vec::new();
    let mut filled: HashSet<u32> = HashSet::new();
    let mut cursor = 0;

    let stop = loop {
        if total_cost == budget {
            break StopReason::BudgetReached;
        }
        let Some(c) = ranked.get(cursor) else {
            break StopReason::CandidatesExhausted;
        };
        if filled.len() > position_limit as usize {
            break StopReason::PositionsExhausted;
        }

        let open = !filled.contains(&c.position);
        let affordable = total_cost
            .checked_add(c.cost)
            .is_some_and(|cost| cost <= budget);
        let eligible = c.position <= position_limit;

        if open && affordable && eligible {
            total_cost += c.cost;
            total_value += c.value;
            signed.push(c.name.clone());
            filled.insert(c.position);
            debug!(
                "signed {} at position {} for ${} (total ${total_cost} / {total_value} VORP)",
                c.name, c.position, c.cost
            );
        } else if !open {
            trace!("skipping {}: position {} already filled", c.name, c.position);
        } else if !affordable {
            let remaining = budget - total_cost;
            trace!("skipping {}: ${} exceeds remaining ${remaining}", c.name, c.cost);
        } else {
            trace!(
                "skipping {}: position {} above limit {position_limit}",
                c.name, c.position
            );
        }

        cursor += 1;
    };

    debug!(
        "signing pass finished ({stop}): {} signed, ${total_cost} of ${budget}, {total_value} VORP",
        signed.len()
    );

    Selection {
        total_value,
        total_cost,
        signed,
        stop,
    }
}

/// Validate the roster, then run [`select`] with the configured limits.
pub fn try_select(
    candidates: &[Candidate],
    config: &SelectionConfig,
) -> Result<Selection, SelectionError> {
    if let Err(e) = validate_all(candidates) {
        warn!("rejecting roster: {e}");
        return Err(e);
    }
    Ok(select(candidates, config.budget, config.position_limit))
}

// ---------------------------------------------------------------------------
// Precondition checks
// ---------------------------------------------------------------------------

/// Check every candidate against the selector's input preconditions.
///
/// Returns the first violation found, in input order. Nothing is corrected:
/// a bad roster is reported, never patched.
pub fn validate_all(candidates: &[Candidate]) -> Result<(), SelectionError> {
    for c in candidates {
        if c.cost == 0 {
            return Err(SelectionError::ZeroCost {
                name: c.name.clone(),
            });
        }
        if !c.value.is_finite() {
            return Err(SelectionError::NonFiniteValue {
                name: c.name.clone(),
            });
        }
    }
    Ok(())
}
