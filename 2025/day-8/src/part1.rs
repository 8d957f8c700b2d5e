use miette::*;

use crate::parser::parse_points;
use crate::report::{shortest_connections, solve};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let points = parse_points(input)?;
    let solution = solve(&points, shortest_connections(points.len()))?;

    Ok(solution.top_three_product.to_string())
}

/// Product of the three largest circuit sizes after `connections` shortest links.
#[tracing::instrument]
pub fn process_with(input: &str, connections: usize) -> Result<String> {
    let points = parse_points(input)?;
    let solution = solve(&points, connections)?;

    Ok(solution.top_three_product.to_string())
}
