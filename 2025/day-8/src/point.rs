use glam::IVec3;

/// A junction box position. Identity is the index in the input, not the coordinates.
pub type Point = IVec3;

/// Euclidean distance between two points, truncated towards zero.
///
/// Deltas are taken as unsigned and their squares summed in `u128`, so any
/// two points in the `i32` range give an exact result.
pub fn distance(a: Point, b: Point) -> u64 {
    let squared = [(a.x, b.x), (a.y, b.y), (a.z, b.z)]
        .into_iter()
        .map(|(p, q)| {
            let delta = u128::from(p.abs_diff(q));
            delta * delta
        })
        .sum::<u128>();
    isqrt(squared)
}

/// Floor square root. The float estimate is only a starting point; the
/// integer checks make the result exact near perfect squares.
fn isqrt(n: u128) -> u64 {
    let mut root = (n as f64).sqrt() as u128;
    while root.saturating_mul(root) > n {
        root -= 1;
    }
    while (root + 1).saturating_mul(root + 1) <= n {
        root += 1;
    }
    root as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(IVec3::ZERO, IVec3::ZERO, 0)]
    #[case(IVec3::new(0, 0, 0), IVec3::new(1, 0, 0), 1)]
    #[case(IVec3::new(0, 0, 0), IVec3::new(0, 5, 0), 5)]
    #[case(IVec3::new(1, 0, 0), IVec3::new(0, 5, 0), 5)]
    #[case(IVec3::new(0, 0, 0), IVec3::new(1, 1, 1), 1)]
    #[case(IVec3::new(0, 0, 0), IVec3::new(10, 10, 10), 17)]
    #[case(IVec3::new(162, 817, 812), IVec3::new(425, 690, 689), 316)]
    fn truncates_euclidean_distance(#[case] a: Point, #[case] b: Point, #[case] expected: u64) {
        assert_eq!(expected, distance(a, b));
        assert_eq!(expected, distance(b, a));
    }

    #[test]
    fn large_coordinates_do_not_overflow() {
        let a = IVec3::new(0, 0, 0);
        let b = IVec3::new(99_999, 99_999, 99_999);
        // sqrt(3) * 99999 = 173203.35...
        assert_eq!(173_203, distance(a, b));

        let c = IVec3::new(-100_000, -100_000, -100_000);
        let d = IVec3::new(100_000, 100_000, 100_000);
        assert_eq!(346_410, distance(c, d));
    }

    #[test]
    fn full_i32_range_is_exact() {
        // sqrt(3) * (2^32 - 1), well past u32::MAX
        assert_eq!(
            7_439_101_571,
            distance(IVec3::splat(i32::MIN), IVec3::splat(i32::MAX))
        );
        assert_eq!(3_719_550_785, distance(IVec3::ZERO, IVec3::splat(i32::MAX)));
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(3, 1)]
    #[case(4, 2)]
    #[case(99, 9)]
    #[case(100, 10)]
    #[case(u128::from(u32::MAX) * u128::from(u32::MAX), u64::from(u32::MAX))]
    #[case(u128::from(u32::MAX) * u128::from(u32::MAX) - 1, u64::from(u32::MAX) - 1)]
    #[case(u128::from(u64::MAX) * u128::from(u64::MAX), u64::MAX)]
    fn isqrt_is_exact(#[case] n: u128, #[case] expected: u64) {
        assert_eq!(expected, isqrt(n));
    }
}
