use std::cmp::Reverse;
use std::collections::BinaryHeap;

use itertools::Itertools;

use crate::point::{distance, Point};

/// A candidate link between the junction boxes at indices `a` and `b` (`a < b`).
///
/// Field order matters: the derived ordering compares `dist` first and then
/// the index pair, which is the tie-break for equal distances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Connection {
    pub dist: u64,
    pub a: usize,
    pub b: usize,
}

impl Connection {
    pub fn new(a: usize, b: usize, dist: u64) -> Self {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        Self { dist, a, b }
    }
}

/// Min-heap of connections, shortest first, equal distances by ascending `(a, b)`.
#[derive(Debug, Default)]
pub struct ConnectionQueue {
    heap: BinaryHeap<Reverse<Connection>>,
}

impl ConnectionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Builds the queue from every unordered pair of points.
    #[tracing::instrument(skip_all, fields(points = points.len()))]
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut queue = Self::with_capacity(n * n.saturating_sub(1) / 2);
        queue.extend(
            (0..n)
                .tuple_combinations()
                .map(|(i, j)| Connection::new(i, j, distance(points[i], points[j]))),
        );
        tracing::debug!(connections = queue.len(), "built connection queue");
        queue
    }

    pub fn push(&mut self, connection: Connection) {
        self.heap.push(Reverse(connection));
    }

    pub fn peek(&self) -> Option<&Connection> {
        self.heap.peek().map(|Reverse(c)| c)
    }

    pub fn pop(&mut self) -> Option<Connection> {
        self.heap.pop().map(|Reverse(c)| c)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Extend<Connection> for ConnectionQueue {
    fn extend<I: IntoIterator<Item = Connection>>(&mut self, iter: I) {
        self.heap.extend(iter.into_iter().map(Reverse));
    }
}

impl FromIterator<Connection> for ConnectionQueue {
    fn from_iter<I: IntoIterator<Item = Connection>>(iter: I) -> Self {
        Self {
            heap: iter.into_iter().map(Reverse).collect(),
        }
    }
}
