use miette::*;

use crate::parser::parse_points;
use crate::report::{shortest_connections, solve};

/// X coordinates of the connection that first joins every junction box, multiplied.
#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let points = parse_points(input)?;
    let solution = solve(&points, shortest_connections(points.len()))?;

    Ok(solution.spanning_x_product.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689";

        assert_eq!("25272", process(input)?);
        Ok(())
    }

    #[test]
    fn crlf_input() -> Result<()> {
        let input = "0,0,0\r\n3,0,0\r\n10,0,0\r\n";
        assert_eq!("30", process(input)?);
        Ok(())
    }

    #[test]
    fn single_box_is_an_error() {
        assert!(process("1,2,3").is_err());
    }
}
