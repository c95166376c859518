//! Best-first (A*) search over sets of fielded zones.
//!
//! A state is the set of zones that already have a fielder. Each state is
//! scored with `f = g + h`, where `g` is the number of fielders committed and
//! `h` the uncovered risk from [`crate::heuristic`]. The frontier is a min-heap
//! on `(f, g, state)`; states order by their raw bit pattern, so ties are
//! resolved the same way on every run.

use alloc::collections::{BTreeMap, BinaryHeap};
use core::cmp::Ordering;

use crate::{
    catalog::Catalog,
    config::SearchConfig,
    heuristic::state_heuristic,
    profile::ShotProfile,
    zoneset::ZoneSet,
};

/// Frontier entry.
#[derive(Debug, Clone, Copy)]
struct Node {
    f: f64,
    g: usize,
    state: ZoneSet,
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap pops the greatest element.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.state.cmp(&self.state))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

/// Raw result of a placement search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// Best candidate found, before any padding.
    pub best: ZoneSet,
    /// `f` of the best candidate; infinite if nothing was ever selected.
    pub best_cost: f64,
    /// Frontier pops performed.
    pub iterations: usize,
    /// States actually expanded.
    pub expanded: usize,
    /// Whether the search stopped on the iteration cap with work left.
    pub exhausted: bool,
}

impl SearchOutcome {
    /// Whether the best candidate already holds `fielders` zones.
    pub fn reached(&self, fielders: usize) -> bool {
        self.best.len() >= fielders
    }
}

/// Search for a low-risk set of `fielders` zones drawn from `profile`.
///
/// States of the target size are completed candidates and are never
/// expanded. Any non-empty expanded state with a lower `f` than the best so
/// far also becomes the candidate, so a result exists even when the budget
/// runs out or the profile lists fewer zones than `fielders`. The search is
/// not guaranteed optimal when the iteration cap is hit.
pub fn astar_search(
    catalog: &Catalog,
    profile: &ShotProfile,
    fielders: usize,
    config: &SearchConfig,
) -> SearchOutcome {
    let mut open = BinaryHeap::new();
    let mut visited: BTreeMap<ZoneSet, usize> = BTreeMap::new();

    let initial = ZoneSet::new();
    let h0 = state_heuristic(catalog, &initial, profile, config.coverage_radius);
    open.push(Node {
        f: h0,
        g: 0,
        state: initial,
    });

    let mut best_state = initial;
    let mut best_f = f64::INFINITY;
    let mut iterations = 0;
    let mut expanded = 0;

    log::debug!(
        "search start: delivery={} fielders={} h0={}",
        profile.delivery(),
        fielders,
        h0
    );

    while iterations < config.max_iterations {
        let Some(Node { f, g, state }) = open.pop() else {
            break;
        };
        iterations += 1;

        if state.len() >= fielders {
            if f < best_f {
                best_f = f;
                best_state = state;
            }
            continue;
        }

        if visited.get(&state).is_some_and(|&seen| seen <= g) {
            continue;
        }
        visited.insert(state, g);
        expanded += 1;

        for &(zone, _) in profile.entries() {
            if state.contains(zone) {
                continue;
            }
            let Ok(next) = state.with(zone) else {
                continue;
            };
            let next_g = g + 1;
            let next_h = state_heuristic(catalog, &next, profile, config.coverage_radius);
            open.push(Node {
                f: next_g as f64 + next_h,
                g: next_g,
                state: next,
            });
        }
        log::trace!(
            "expanded {:?} g={} f={} frontier={}",
            state,
            g,
            f,
            open.len()
        );

        if f < best_f && !state.is_empty() {
            best_f = f;
            best_state = state;
        }
    }

    let exhausted = iterations >= config.max_iterations && !open.is_empty();
    if exhausted {
        log::warn!(
            "search for {} hit the iteration cap ({}); result may be suboptimal",
            profile.delivery(),
            config.max_iterations
        );
    }
    log::debug!(
        "search done: iterations={} expanded={} best_f={} best_len={}",
        iterations,
        expanded,
        best_f,
        best_state.len()
    );

    SearchOutcome {
        best: best_state,
        best_cost: best_f,
        iterations,
        expanded,
        exhausted,
    }
}

/// Pad `assigned` with catalog zones in declaration order until it holds
/// `fielders` zones or the catalog runs out.
pub fn pad_assignment(catalog: &Catalog, assigned: ZoneSet, fielders: usize) -> ZoneSet {
    let mut padded = assigned;
    for id in 0..catalog.len() {
        if padded.len() >= fielders {
            break;
        }
        if !padded.contains(id) {
            padded.insert_unchecked(id);
        }
    }
    padded
}
