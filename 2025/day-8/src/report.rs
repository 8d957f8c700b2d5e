use itertools::Itertools;
use miette::*;

use crate::circuits::Circuits;
use crate::point::Point;
use crate::queue::{Connection, ConnectionQueue};
use crate::registry::CircuitRegistry;

/// Shortest connections applied before measuring the largest circuits.
pub const CONNECTIONS: usize = 1000;

/// [`CONNECTIONS`], capped at the number of pairs `point_count` boxes can form.
pub fn shortest_connections(point_count: usize) -> usize {
    let pairs = point_count * point_count.saturating_sub(1) / 2;
    CONNECTIONS.min(pairs)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Sizes of the three largest circuits after the shortest connections, multiplied.
    pub top_three_product: u64,
    /// X coordinates of the connection that joined everything, multiplied.
    pub spanning_x_product: u64,
}

/// Multiplies the sizes of the three largest circuits.
///
/// Missing circuits count as size 0, so fewer than three circuits give 0.
pub fn top_three_product(registry: &CircuitRegistry) -> u64 {
    let sizes = registry
        .count_by_id()
        .into_values()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .take(3)
        .collect::<Vec<_>>();

    if sizes.len() < 3 {
        return 0;
    }
    sizes.iter().map(|&size| size as u64).product()
}

pub fn x_product(points: &[Point], connection: &Connection) -> Result<u64> {
    let a = points
        .get(connection.a)
        .ok_or_else(|| miette!("No junction box at index {}", connection.a))?;
    let b = points
        .get(connection.b)
        .ok_or_else(|| miette!("No junction box at index {}", connection.b))?;

    let product = i64::from(a.x) * i64::from(b.x);
    u64::try_from(product).map_err(|_| miette!("X product {} is negative", product))
}

/// Runs both phases over one shared queue: the first `connections` shortest
/// links, then onwards until every junction box shares one circuit.
#[tracing::instrument(skip(points), fields(points = points.len()))]
pub fn solve(points: &[Point], connections: usize) -> Result<Solution> {
    ensure!(
        points.len() >= 2,
        "need at least two junction boxes, got {}",
        points.len()
    );

    let mut queue = ConnectionQueue::from_points(points);
    let mut circuits = Circuits::new(points);

    circuits.connect_shortest(&mut queue, connections)?;
    let top_three_product = top_three_product(circuits.registry());

    let last = circuits.connect_until_spanning(&mut queue)?;
    let spanning_x_product = x_product(circuits.points(), &last)?;

    tracing::debug!(
        top_three_product,
        spanning_x_product,
        merges = circuits.merges(),
        "solved"
    );
    Ok(Solution {
        top_three_product,
        spanning_x_product,
    })
}
