// Ranking candidates by VORP per dollar.

use std::cmp::Ordering;

use crate::candidate::Candidate;

/// Order candidates by descending value ratio into a new vector.
///
/// The sort is stable: candidates with equal ratios keep their input order.
/// The input slice is not modified.
///
/// A zero-cost candidate with a positive value has an infinite ratio and
/// ranks first. A NaN ratio (zero cost and zero value, or a NaN value) ranks
/// after every other candidate, with NaN candidates in input order.
pub fn rank(candidates: &[Candidate]) -> Vec<Candidate> {
    rank_refs(candidates).into_iter().cloned().collect()
}

/// Same ordering as [`rank`], borrowing instead of cloning.
pub fn rank_refs(candidates: &[Candidate]) -> Vec<&Candidate> {
    let mut ranked: Vec<&Candidate> = candidates.iter().collect();
    // Vec::sort_by is stable, which gives the input-order tie-break.
    ranked.sort_by(|a, b| by_ratio_desc(a.ratio(), b.ratio()));
    ranked
}

/// Total order on ratios: descending, with every NaN equal and last.
///
/// `0.0 / 0.0` may produce a NaN of either sign, so NaNs are grouped here
/// instead of by `total_cmp`.
fn by_ratio_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.total_cmp(&a),
        (true, true) => Ordering::Equal,
        (a_nan, b_nan) => a_nan.cmp(&b_nan),
    }
}
