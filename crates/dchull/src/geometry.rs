use nalgebra::{Matrix2, Vector2};

/// Pre: `a` and `b` are 2D column vectors.
/// Post: returns the signed area of the parallelogram spanned by (a,b);
/// positive for a→b counterclockwise.
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    // determinant of [a b]
    let m = Matrix2::from_columns(&[a, b]);
    m.determinant()
}

/// Orientation of the triple `(a, b, c)`: `> 0` for a left turn, `< 0` for a
/// right turn, `0` when collinear.
#[inline]
pub fn orient(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn area_axis_aligned() {
        let a = vector![1.0, 0.0];
        let b = vector![0.0, 2.5];
        assert!((parallelogram_area(a, b) - 2.5).abs() < 1e-12);
        assert!((parallelogram_area(b, a) + 2.5).abs() < 1e-12);
    }

    #[test]
    fn orient_matches_area_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..16 {
            let a = Vector2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            let b = Vector2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            let c = Vector2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            let expected = parallelogram_area(b - a, c - a);
            assert!((orient(a, b, c) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn orient_signs() {
        let o = vector![0.0, 0.0];
        let x = vector![1.0, 0.0];
        assert!(orient(o, x, vector![0.0, 1.0]) > 0.0);
        assert!(orient(o, x, vector![0.0, -1.0]) < 0.0);
        assert_eq!(orient(o, x, vector![3.0, 0.0]), 0.0);
    }
}
