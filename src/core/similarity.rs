use std::collections::HashSet;
use crate::models::{Personality, TimePreference, TimeSlot};

/// Calculate time-slot compatibility between two availability records
///
/// Ratio of slots both parties marked to slots either party marked.
/// Returns 0 when neither party marked any slot.
///
/// # Returns
/// Compatibility in [0, 1]
#[inline]
pub fn time_compatibility(a: &TimePreference, b: &TimePreference) -> f64 {
    let mut overlaps = 0u32;
    let mut active = 0u32;

    for slot in TimeSlot::ALL {
        let (in_a, in_b) = (a.is_available(slot), b.is_available(slot));
        if in_a && in_b {
            overlaps += 1;
        }
        if in_a || in_b {
            active += 1;
        }
    }

    if active == 0 {
        return 0.0;
    }

    overlaps as f64 / active as f64
}

/// Jaccard index of two string sets, compared by exact string equality
///
/// Duplicate entries are ignored. Two empty sets score 0, not 1:
/// no shared evidence is not the same as perfect similarity.
pub fn jaccard_similarity<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let set_b: HashSet<&str> = b.iter().map(AsRef::as_ref).collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}

/// Cosine similarity of two personality vectors
///
/// Returns 0 when either vector has zero magnitude. Components are
/// non-negative, so the result never drops below 0.
#[inline]
pub fn cosine_similarity(a: &Personality, b: &Personality) -> f64 {
    let v1 = a.as_array();
    let v2 = b.as_array();

    let dot: f64 = v1.iter().zip(v2.iter()).map(|(x, y)| x * y).sum();
    let norm1: f64 = v1.iter().map(|x| x * x).sum();
    let norm2: f64 = v2.iter().map(|x| x * x).sum();

    if norm1 == 0.0 || norm2 == 0.0 {
        return 0.0;
    }

    // sqrt(n1 * n2) keeps identical vectors at exactly 1.0
    (dot / (norm1 * norm2).sqrt()).min(1.0)
}
