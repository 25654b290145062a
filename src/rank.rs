//! Ranking of scored profiles.
//!
//! Order: descending weighted score, then descending percentage, then
//! original pool order. Both strategies are stable, so the final tie-break
//! falls out of the algorithm rather than an explicit ordinal.

use crate::config::SortStrategy;
use crate::record::ScoredProfile;

/// Orders scored profiles with a configured [`SortStrategy`].
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    strategy: SortStrategy,
}

impl Ranker {
    /// Create a ranker with the given strategy.
    pub fn new(strategy: SortStrategy) -> Self {
        Ranker { strategy }
    }

    /// The configured strategy.
    pub fn strategy(&self) -> SortStrategy {
        self.strategy
    }

    /// Order `scored` by descending `(weighted_score, percentage)`.
    ///
    /// Ranking an already-ranked collection is a no-op for order.
    pub fn rank(&self, scored: Vec<ScoredProfile>) -> Vec<ScoredProfile> {
        match self.strategy {
            SortStrategy::Insertion => insertion_sort(scored),
            SortStrategy::Merge => merge_sort(scored),
        }
    }
}

/// `a` ranks strictly before `b`.
fn ranks_before(a: &ScoredProfile, b: &ScoredProfile) -> bool {
    if a.weighted_score != b.weighted_score {
        return a.weighted_score > b.weighted_score;
    }
    a.percentage > b.percentage
}

/// Stable in-place insertion sort. O(n) on near-sorted input, which makes
/// it the default for pools of a few hundred profiles.
fn insertion_sort(mut items: Vec<ScoredProfile>) -> Vec<ScoredProfile> {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && ranks_before(&items[j], &items[j - 1]) {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
    items
}

/// Stable merge sort over a forward-linked index chain: split at the
/// midpoint via slow/fast traversal, sort both halves, merge taking the
/// front half on ties. Linked-sequence heritage; splice is a link rewrite.
fn merge_sort(items: Vec<ScoredProfile>) -> Vec<ScoredProfile> {
    if items.len() <= 1 {
        return items;
    }
    // links[i] is the successor of item i; the chain starts in pool order.
    let mut links: Vec<Option<usize>> = (1..items.len())
        .map(Some)
        .chain(std::iter::once(None))
        .collect();
    let head = sort_chain(&items, &mut links, Some(0));

    // Read the chain back into arrangement order.
    let mut order = Vec::with_capacity(items.len());
    let mut cursor = head;
    while let Some(id) = cursor {
        order.push(id);
        cursor = links[id];
    }
    let mut slots: Vec<Option<ScoredProfile>> = items.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|id| slots[id].take())
        .collect()
}

fn sort_chain(
    items: &[ScoredProfile],
    links: &mut [Option<usize>],
    head: Option<usize>,
) -> Option<usize> {
    let first = match head {
        Some(first) if links[first].is_some() => first,
        trivial => return trivial,
    };
    let back = split_chain(links, first);
    let front = sort_chain(items, links, Some(first));
    let back = sort_chain(items, links, back);
    merge_chains(items, links, front, back)
}

/// Cut the chain after its midpoint (slow/fast traversal) and return the
/// head of the back half.
fn split_chain(links: &mut [Option<usize>], head: usize) -> Option<usize> {
    let mut slow = head;
    let mut fast = links[head];
    while let Some(step) = fast {
        match links[step] {
            Some(two) => {
                if let Some(next) = links[slow] {
                    slow = next;
                }
                fast = links[two];
            }
            None => break,
        }
    }
    links[slow].take()
}

/// Merge two sorted chains. The front chain wins ties, which keeps the
/// sort stable.
fn merge_chains(
    items: &[ScoredProfile],
    links: &mut [Option<usize>],
    a: Option<usize>,
    b: Option<usize>,
) -> Option<usize> {
    match (a, b) {
        (None, other) | (other, None) => other,
        (Some(x), Some(y)) => {
            if ranks_before(&items[y], &items[x]) {
                let y_next = links[y];
                let rest = merge_chains(items, links, Some(x), y_next);
                links[y] = rest;
                Some(y)
            } else {
                let x_next = links[x];
                let rest = merge_chains(items, links, x_next, Some(y));
                links[x] = rest;
                Some(x)
            }
        }
    }
}

/// The best `k` entries of a ranked list. Never fails: an empty input or
/// oversized `k` just shortens the slice, and callers render an empty
/// slice as "no matches".
pub fn top_k(ranked: &[ScoredProfile], k: usize) -> &[ScoredProfile] {
    &ranked[..k.min(ranked.len())]
}
