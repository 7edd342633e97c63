//! Qualified-name resolution — matching partial dotted names against the
//! fully qualified names collected during extraction.
//!
//! A candidate scores one point for each of its segments that also appears
//! anywhere in the target. The highest score wins; ties go to the candidate
//! listed first, so the result is deterministic for a stable input order.

use rustc_hash::FxHashSet;

use crate::base::constants::PATH_SEPARATOR;

/// Split a dotted name into its segments.
pub fn segments(name: &str) -> impl Iterator<Item = &str> {
    name.split(PATH_SEPARATOR)
}

/// Last segment of a dotted name (the simple name).
pub fn last_segment(name: &str) -> &str {
    name.rsplit(PATH_SEPARATOR).next().unwrap_or(name)
}

/// Number of segments of `candidate` that appear in `target_segments`.
fn score(target_segments: &FxHashSet<&str>, candidate: &str) -> usize {
    segments(candidate)
        .filter(|segment| target_segments.contains(segment))
        .count()
}

/// Return the candidate whose dotted name best matches `target`.
///
/// Returns `None` only when there are no candidates; a candidate sharing no
/// segment with the target is still returned if nothing scores higher.
///
/// # Example
/// ```
/// use hdldoc::hir::closest_match;
///
/// let candidates = [("pkg.util.add", 1), ("pkg2.util.add", 2)];
/// assert_eq!(closest_match("util.add", candidates), Some(("pkg.util.add", 1)));
/// ```
pub fn closest_match<'a, T>(
    target: &str,
    candidates: impl IntoIterator<Item = (&'a str, T)>,
) -> Option<(&'a str, T)> {
    let target_segments: FxHashSet<&str> = segments(target).collect();
    let mut best: Option<(usize, (&'a str, T))> = None;
    for (name, payload) in candidates {
        let candidate_score = score(&target_segments, name);
        let better = match &best {
            Some((best_score, _)) => candidate_score > *best_score,
            None => true,
        };
        if better {
            best = Some((candidate_score, (name, payload)));
        }
    }
    let (best_score, found) = best?;
    tracing::trace!(
        "[RESOLVE] target='{}' -> '{}' (score {})",
        target,
        found.0,
        best_score
    );
    Some(found)
}

/// Resolve a partial name, considering only candidates with the same simple
/// name as the target.
///
/// This is the lookup used for cross-reference targets: `add` or
/// `unsigned.add` both find `unsigned.add`, but `sub` never falls back to an
/// unrelated symbol.
pub fn resolve_partial<'a, T>(
    target: &str,
    candidates: impl IntoIterator<Item = (&'a str, T)>,
) -> Option<(&'a str, T)> {
    let simple = last_segment(target);
    closest_match(
        target,
        candidates
            .into_iter()
            .filter(|(name, _)| last_segment(name) == simple),
    )
}
