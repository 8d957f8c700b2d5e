use miette::*;

use crate::point::Point;
use crate::queue::{Connection, ConnectionQueue};
use crate::registry::{CircuitId, CircuitRegistry};

/// What applying a single connection did to the circuits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Link {
    /// Both boxes were loose; they now form a new circuit.
    Created(CircuitId),
    /// A loose box joined an existing circuit.
    Extended(CircuitId),
    /// Two circuits became one; `from` is retired.
    Merged { into: CircuitId, from: CircuitId },
    /// Both boxes already shared a circuit.
    Redundant,
}

/// Connects junction boxes shortest-first and keeps track of the circuits they form.
///
/// Circuits are labelled in a [`CircuitRegistry`]. When two circuits meet, the
/// circuit of `b` is folded into the circuit of `a`.
#[derive(Debug)]
pub struct Circuits<'a> {
    points: &'a [Point],
    registry: CircuitRegistry,
    next_circuit_id: CircuitId,
    /// Distinct ids currently in the registry, not ids ever allocated.
    circuit_count: usize,
    merges: usize,
    spanning: Option<Connection>,
}

impl<'a> Circuits<'a> {
    pub fn new(points: &'a [Point]) -> Self {
        Self {
            points,
            registry: CircuitRegistry::with_capacity(points.len()),
            next_circuit_id: 0,
            circuit_count: 0,
            merges: 0,
            spanning: None,
        }
    }

    pub fn points(&self) -> &'a [Point] {
        self.points
    }

    pub fn registry(&self) -> &CircuitRegistry {
        &self.registry
    }

    pub fn circuit_count(&self) -> usize {
        self.circuit_count
    }

    pub fn next_circuit_id(&self) -> CircuitId {
        self.next_circuit_id
    }

    /// Applications that joined two previously disconnected groups of boxes.
    pub fn merges(&self) -> usize {
        self.merges
    }

    /// Every box is assigned and they all share one circuit.
    pub fn is_spanning(&self) -> bool {
        self.circuit_count == 1 && self.registry.total_assigned_count() == self.points.len()
    }

    /// The connection whose application first made the boxes span.
    pub fn spanning_connection(&self) -> Option<Connection> {
        self.spanning
    }

    /// Applies one connection to the registry.
    ///
    /// Both ends must index into the boxes this driver was built over.
    pub fn apply(&mut self, connection: Connection) -> Link {
        let Connection { a, b, .. } = connection;
        debug_assert!(
            a < self.points.len() && b < self.points.len(),
            "connection {connection:?} outside of {} junction boxes",
            self.points.len()
        );

        let link = match (self.registry.lookup(a), self.registry.lookup(b)) {
            (None, None) => {
                let id = self.next_circuit_id;
                self.registry.assign(a, id);
                self.registry.assign(b, id);
                self.next_circuit_id += 1;
                self.circuit_count += 1;
                Link::Created(id)
            }
            (Some(id), None) => {
                self.registry.assign(b, id);
                Link::Extended(id)
            }
            (None, Some(id)) => {
                self.registry.assign(a, id);
                Link::Extended(id)
            }
            (Some(id_a), Some(id_b)) if id_a == id_b => Link::Redundant,
            (Some(id_a), Some(id_b)) => {
                let moved = self.registry.relabel_all(id_b, id_a);
                tracing::trace!(into = id_a, from = id_b, moved, "merged circuits");
                self.circuit_count -= 1;
                Link::Merged {
                    into: id_a,
                    from: id_b,
                }
            }
        };

        if link != Link::Redundant {
            self.merges += 1;
        }
        if self.spanning.is_none() && self.is_spanning() {
            tracing::debug!(?connection, "all junction boxes share one circuit");
            self.spanning = Some(connection);
        }

        tracing::trace!(?connection, ?link, circuits = self.circuit_count);
        link
    }

    /// Applies exactly the next `n` shortest connections.
    #[tracing::instrument(skip(self, queue), fields(remaining = queue.len()))]
    pub fn connect_shortest(&mut self, queue: &mut ConnectionQueue, n: usize) -> Result<()> {
        for applied in 0..n {
            let connection = queue.pop().ok_or_else(|| {
                miette!(
                    "Ran out of connections after {} of {} shortest connections",
                    applied,
                    n
                )
            })?;
            self.apply(connection);
        }

        tracing::debug!(
            circuits = self.circuit_count,
            assigned = self.registry.total_assigned_count(),
            "connected shortest pairs"
        );
        Ok(())
    }

    /// Keeps connecting until every box shares one circuit and returns the
    /// connection that got there.
    #[tracing::instrument(skip(self, queue), fields(remaining = queue.len()))]
    pub fn connect_until_spanning(&mut self, queue: &mut ConnectionQueue) -> Result<Connection> {
        loop {
            if let Some(connection) = self.spanning {
                return Ok(connection);
            }

            let connection = queue.pop().ok_or_else(|| {
                miette!(
                    "Junction boxes cannot all be connected: {} circuits over {} of {} boxes left",
                    self.circuit_count,
                    self.registry.total_assigned_count(),
                    self.points.len()
                )
            })?;
            self.apply(connection);
        }
    }
}
