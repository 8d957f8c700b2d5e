use chumsky::prelude::*;
use glam::IVec3;
use miette::*;

use crate::point::Point;

/// Merging circuits rescans every assigned box, so inputs are capped.
pub const MAX_JUNCTION_BOXES: usize = 1000;

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Point>, extra::Err<Rich<'a, char>>> {
    // Handles CRLF (\r\n) as well as LF (\n)
    let newline = just('\r').or_not().ignore_then(just('\n'));

    let coord = text::int(10).try_map(|digits: &str, span| {
        digits
            .parse::<i32>()
            .map_err(|e| Rich::custom(span, format!("coordinate {digits}: {e}")))
    });

    let point = coord
        .then_ignore(just(','))
        .then(coord)
        .then_ignore(just(','))
        .then(coord)
        .map(|((x, y), z)| IVec3::new(x, y, z));

    point
        .separated_by(newline.repeated().at_least(1))
        .allow_leading()
        .allow_trailing()
        .collect()
        .padded()
}

/// Parses one `x,y,z` junction box per line.
#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn parse_points(input: &str) -> Result<Vec<Point>> {
    let points = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    ensure!(
        points.len() <= MAX_JUNCTION_BOXES,
        "too many junction boxes: {} (max: {})",
        points.len(),
        MAX_JUNCTION_BOXES
    );

    tracing::debug!(points = points.len(), "parsed junction boxes");
    Ok(points)
}
