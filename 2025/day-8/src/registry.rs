use std::collections::{HashMap, HashSet};

/// Label shared by every junction box of one circuit.
pub type CircuitId = u32;

/// Maps junction box indices to the circuit they belong to.
///
/// A box missing from the map is not part of any circuit yet. Merging is done
/// by [`CircuitRegistry::relabel_all`], a full scan over every assigned box.
/// With at most `n - 1` merges that is O(n²) overall, which only holds up
/// because inputs are capped at [`crate::parser::MAX_JUNCTION_BOXES`]; a
/// union-find with path compression is the right tool past that.
#[derive(Debug, Default, Clone)]
pub struct CircuitRegistry {
    circuits: HashMap<usize, CircuitId>,
}

impl CircuitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            circuits: HashMap::with_capacity(capacity),
        }
    }

    pub fn lookup(&self, point: usize) -> Option<CircuitId> {
        self.circuits.get(&point).copied()
    }

    /// Inserts the box or overwrites its circuit.
    pub fn assign(&mut self, point: usize, id: CircuitId) {
        self.circuits.insert(point, id);
    }

    /// Moves every box of circuit `from` into circuit `to`, returning how many moved.
    pub fn relabel_all(&mut self, from: CircuitId, to: CircuitId) -> usize {
        let mut moved = 0;
        for id in self.circuits.values_mut().filter(|id| **id == from) {
            *id = to;
            moved += 1;
        }
        moved
    }

    pub fn count_by_id(&self) -> HashMap<CircuitId, usize> {
        let mut counts = HashMap::new();
        for &id in self.circuits.values() {
            *counts.entry(id).or_insert(0) += 1;
        }
        counts
    }

    pub fn total_assigned_count(&self) -> usize {
        self.circuits.len()
    }

    /// Number of circuit ids currently carried by at least one box.
    pub fn distinct_ids(&self) -> usize {
        self.circuits.values().collect::<HashSet<_>>().len()
    }
}
