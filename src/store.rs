//! Record stores: an ordered collection of records behind one of two
//! backings.
//!
//! The array backing is a contiguous, capacity-bounded buffer; the linked
//! backing is a chain of forward-linked nodes held in an owned slab, with a
//! position table for indexed access. There are no raw back-pointers:
//! backward navigation goes through the position table, so splicing during
//! a sort can never leave a dangling reference.
//!
//! A store is mutated only during the one-time load-and-sort step and is
//! read-only for the rest of a session.

use crate::config::StorageBacking;
use crate::error::{Result, ShortlistError};
use crate::record::Record;

/// An ordered, exclusively-owned collection of records.
#[derive(Debug, Clone)]
pub struct RecordStore<T: Record> {
    backing: Backing<T>,
    sorted: bool,
}

#[derive(Debug, Clone)]
enum Backing<T> {
    Array { records: Vec<T>, capacity: usize },
    Linked(LinkedSeq<T>),
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<usize>,
}

/// Forward-linked sequence over an owned node slab.
#[derive(Debug, Clone)]
struct LinkedSeq<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
    /// Node ids in arrangement order; doubles as the position table for
    /// indexed and backward navigation.
    positions: Vec<usize>,
}

impl<T> LinkedSeq<T> {
    fn new() -> Self {
        LinkedSeq {
            nodes: Vec::new(),
            head: None,
            positions: Vec::new(),
        }
    }

    fn push(&mut self, value: T) {
        let id = self.nodes.len();
        self.nodes.push(Node { value, next: None });
        match self.positions.last() {
            Some(&tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.positions.push(id);
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.positions.get(index).map(|&id| &self.nodes[id].value)
    }

    /// Rewrite the next links to match the position table's order.
    fn relink(&mut self) {
        self.head = self.positions.first().copied();
        for window in self.positions.windows(2) {
            self.nodes[window[0]].next = Some(window[1]);
        }
        if let Some(&tail) = self.positions.last() {
            self.nodes[tail].next = None;
        }
    }
}

impl<T: Record> RecordStore<T> {
    /// Create an array-backed store with a fixed capacity bound.
    pub fn array(capacity: usize) -> Self {
        RecordStore {
            backing: Backing::Array {
                records: Vec::with_capacity(capacity),
                capacity,
            },
            sorted: false,
        }
    }

    /// Create a linked-backed store, bounded only by memory.
    pub fn linked() -> Self {
        RecordStore {
            backing: Backing::Linked(LinkedSeq::new()),
            sorted: false,
        }
    }

    /// Create a store for the given backing. `capacity` applies to the
    /// array backing only.
    pub fn with_backing(backing: StorageBacking, capacity: usize) -> Self {
        match backing {
            StorageBacking::Array => RecordStore::array(capacity),
            StorageBacking::Linked => RecordStore::linked(),
        }
    }

    /// Append a record.
    ///
    /// Fails with `CapacityExceeded` once an array backing reaches its
    /// bound; the linked backing never fails.
    pub fn insert(&mut self, record: T) -> Result<()> {
        match &mut self.backing {
            Backing::Array { records, capacity } => {
                if records.len() >= *capacity {
                    return Err(ShortlistError::capacity(format!(
                        "store is full ({capacity} records)"
                    )));
                }
                records.push(record);
            }
            Backing::Linked(seq) => seq.push(record),
        }
        self.sorted = false;
        Ok(())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        match &self.backing {
            Backing::Array { records, .. } => records.len(),
            Backing::Linked(seq) => seq.positions.len(),
        }
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The record at `index` in the current arrangement, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        match &self.backing {
            Backing::Array { records, .. } => records.get(index),
            Backing::Linked(seq) => seq.get(index),
        }
    }

    /// Exact, case-insensitive key lookup via a front-to-back scan.
    pub fn find_by_key(&self, key: &str) -> Option<usize> {
        let target = key.trim().to_lowercase();
        self.iter().position(|record| record.sort_key() == target)
    }

    /// Arrange records in ascending lower-cased key order.
    ///
    /// One-time normalization after bulk load; a precondition for the
    /// binary and jump locators. The sort is stable.
    pub fn sort_by_key(&mut self) {
        match &mut self.backing {
            Backing::Array { records, .. } => {
                records.sort_by_cached_key(|record| record.sort_key());
            }
            Backing::Linked(seq) => {
                let nodes = &seq.nodes;
                seq.positions
                    .sort_by_cached_key(|&id| nodes[id].value.sort_key());
                seq.relink();
            }
        }
        self.sorted = true;
    }

    /// Whether the store is in ascending key order. Stores of at most one
    /// record are trivially sorted.
    pub fn is_sorted(&self) -> bool {
        self.sorted || self.len() <= 1
    }

    /// A lazy, restartable iterator over the records in arrangement order.
    pub fn iter(&self) -> Iter<'_, T> {
        let inner = match &self.backing {
            Backing::Array { records, .. } => IterInner::Array(records.iter()),
            Backing::Linked(seq) => IterInner::Linked {
                nodes: &seq.nodes,
                next: seq.head,
            },
        };
        Iter { inner }
    }
}

/// Iterator over a [`RecordStore`]. The linked backing follows the next
/// chain from the head node.
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: IterInner<'a, T>,
}

#[derive(Debug)]
enum IterInner<'a, T> {
    Array(std::slice::Iter<'a, T>),
    Linked {
        nodes: &'a [Node<T>],
        next: Option<usize>,
    },
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match &mut self.inner {
            IterInner::Array(inner) => inner.next(),
            IterInner::Linked { nodes, next } => {
                let id = (*next)?;
                let node = &nodes[id];
                *next = node.next;
                Some(&node.value)
            }
        }
    }
}
