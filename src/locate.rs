//! Title lookup over a record store.
//!
//! Three interchangeable strategies. Binary and jump require the store to
//! be key-sorted (the engine sorts once after bulk load); linear tolerates
//! any arrangement. All three agree on every sorted store, which the
//! strategy-agreement tests pin down.

use log::debug;

use crate::config::SearchStrategy;
use crate::error::{Result, ShortlistError};
use crate::record::Record;
use crate::store::RecordStore;

/// Finds a record by key using a configured [`SearchStrategy`].
#[derive(Debug, Clone, Copy)]
pub struct TitleLocator {
    strategy: SearchStrategy,
}

impl TitleLocator {
    /// Create a locator with the given strategy.
    pub fn new(strategy: SearchStrategy) -> Self {
        TitleLocator { strategy }
    }

    /// The configured strategy.
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Locate a record by case-insensitive exact key match.
    ///
    /// A miss is `Ok(None)`: a normal outcome the caller renders as
    /// "not found", never a fault. Running the binary or jump strategy
    /// against an unsorted store is a contract violation and fails with
    /// `InvalidOperation`.
    pub fn locate<T: Record>(&self, store: &RecordStore<T>, query: &str) -> Result<Option<usize>> {
        let target = query.trim().to_lowercase();
        if target.is_empty() {
            return Ok(None);
        }
        if self.strategy.requires_sorted() && !store.is_sorted() {
            return Err(ShortlistError::invalid_operation(format!(
                "{:?} search requires a key-sorted store",
                self.strategy
            )));
        }
        debug!("locating {target:?} via {:?}", self.strategy);
        let found = match self.strategy {
            SearchStrategy::Linear => linear_search(store, &target),
            SearchStrategy::Binary => binary_search(store, &target),
            SearchStrategy::Jump => jump_search(store, &target),
        };
        Ok(found)
    }
}

fn key_at<T: Record>(store: &RecordStore<T>, index: usize) -> String {
    store
        .get(index)
        .map(|record| record.sort_key())
        .unwrap_or_default()
}

/// Front-to-back scan; first equality wins. Works unsorted.
fn linear_search<T: Record>(store: &RecordStore<T>, target: &str) -> Option<usize> {
    store.iter().position(|record| record.sort_key() == target)
}

/// Classic halving search over the closed interval `[low, high]`.
/// Invariant: the target, if present, lies in `[low, high]`.
fn binary_search<T: Record>(store: &RecordStore<T>, target: &str) -> Option<usize> {
    if store.is_empty() {
        return None;
    }
    let mut low = 0usize;
    let mut high = store.len() - 1;
    while low <= high {
        // Midpoint written to avoid overflow on large stores.
        let mid = low + (high - low) / 2;
        let key = key_at(store, mid);
        if key == *target {
            return Some(mid);
        }
        if key.as_str() < target {
            low = mid + 1;
        } else {
            if mid == 0 {
                break;
            }
            high = mid - 1;
        }
    }
    None
}

/// Jump search: advance in blocks of `ceil(sqrt(n))`, then scan the block
/// that could contain the target.
fn jump_search<T: Record>(store: &RecordStore<T>, target: &str) -> Option<usize> {
    let n = store.len();
    if n == 0 {
        return None;
    }
    let stride = (n as f64).sqrt().ceil() as usize;
    let mut prev = 0usize;
    let mut bound = stride;
    while key_at(store, bound.min(n) - 1).as_str() < target {
        prev = bound;
        bound += stride;
        if prev >= n {
            return None;
        }
    }
    (prev..bound.min(n)).find(|&i| key_at(store, i) == *target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Posting;
    use crate::skill_set::SkillSet;

    fn sorted_store(titles: &[&str]) -> RecordStore<Posting> {
        let mut store = RecordStore::array(titles.len().max(1));
        for title in titles {
            store
                .insert(Posting::new(*title, SkillSet::from_line("sql")))
                .unwrap();
        }
        store.sort_by_key();
        store
    }

    const TITLES: &[&str] = &[
        "accountant",
        "data analyst",
        "devops engineer",
        "nurse",
        "teacher",
        "web developer",
    ];

    #[test]
    fn test_every_strategy_finds_every_title() {
        let store = sorted_store(TITLES);
        for strategy in [
            SearchStrategy::Linear,
            SearchStrategy::Binary,
            SearchStrategy::Jump,
        ] {
            let locator = TitleLocator::new(strategy);
            for (i, title) in TITLES.iter().enumerate() {
                assert_eq!(
                    locator.locate(&store, title).unwrap(),
                    Some(i),
                    "{strategy:?} failed on {title:?}"
                );
            }
            assert_eq!(locator.locate(&store, "zzz-absent").unwrap(), None);
            assert_eq!(locator.locate(&store, "aaa-absent").unwrap(), None);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trimmed() {
        let store = sorted_store(TITLES);
        let locator = TitleLocator::new(SearchStrategy::Binary);
        assert_eq!(locator.locate(&store, "  Data Analyst ").unwrap(), Some(1));
    }

    #[test]
    fn test_empty_query_is_a_miss() {
        let store = sorted_store(TITLES);
        let locator = TitleLocator::new(SearchStrategy::Binary);
        assert_eq!(locator.locate(&store, "   ").unwrap(), None);
    }

    #[test]
    fn test_empty_store_is_a_miss() {
        let store = sorted_store(&[]);
        for strategy in [
            SearchStrategy::Linear,
            SearchStrategy::Binary,
            SearchStrategy::Jump,
        ] {
            let locator = TitleLocator::new(strategy);
            assert_eq!(locator.locate(&store, "anything").unwrap(), None);
        }
    }

    #[test]
    fn test_sorted_precondition_enforced() {
        let mut store = RecordStore::array(4);
        for title in ["zebra", "apple", "mango"] {
            store
                .insert(Posting::new(title, SkillSet::from_line("sql")))
                .unwrap();
        }
        for strategy in [SearchStrategy::Binary, SearchStrategy::Jump] {
            let err = TitleLocator::new(strategy)
                .locate(&store, "apple")
                .unwrap_err();
            assert!(matches!(err, ShortlistError::InvalidOperation(_)));
        }
        // Linear tolerates the unsorted arrangement.
        let locator = TitleLocator::new(SearchStrategy::Linear);
        assert_eq!(locator.locate(&store, "apple").unwrap(), Some(1));
    }

    #[test]
    fn test_singleton_store() {
        let store = sorted_store(&["only role"]);
        for strategy in [
            SearchStrategy::Linear,
            SearchStrategy::Binary,
            SearchStrategy::Jump,
        ] {
            let locator = TitleLocator::new(strategy);
            assert_eq!(locator.locate(&store, "Only Role").unwrap(), Some(0));
            assert_eq!(locator.locate(&store, "other").unwrap(), None);
        }
    }
}
