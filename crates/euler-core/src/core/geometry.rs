use nalgebra::{Point2, Vector2};

/// A triangle with integer vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub vertices: [Point2<i64>; 3],
}

#[inline]
fn cross(u: &Vector2<i64>, v: &Vector2<i64>) -> i64 {
    u.x * v.y - u.y * v.x
}

impl Triangle {
    pub fn new(a: Point2<i64>, b: Point2<i64>, c: Point2<i64>) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Builds a triangle from `[x1, y1, x2, y2, x3, y3]`.
    pub fn from_coords(coords: [i64; 6]) -> Self {
        Self::new(
            Point2::new(coords[0], coords[1]),
            Point2::new(coords[2], coords[3]),
            Point2::new(coords[4], coords[5]),
        )
    }

    /// Twice the signed area; positive for counter-clockwise vertex order.
    pub fn doubled_signed_area(&self) -> i64 {
        let [a, b, c] = self.vertices;
        cross(&(b - a), &(c - a))
    }

    /// Whether `p` lies inside or on the boundary.
    ///
    /// `p` is inside when it sits on the same side of all three edges, i.e. the edge
    /// cross products never take both signs.
    pub fn contains(&self, p: &Point2<i64>) -> bool {
        let [a, b, c] = self.vertices;
        let sides = [
            cross(&(b - a), &(*p - a)),
            cross(&(c - b), &(*p - b)),
            cross(&(a - c), &(*p - c)),
        ];
        let has_negative = sides.iter().any(|&s| s < 0);
        let has_positive = sides.iter().any(|&s| s > 0);
        !(has_negative && has_positive)
    }

    pub fn contains_origin(&self) -> bool {
        self.contains(&Point2::origin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_abc_contains_origin() {
        let abc = Triangle::from_coords([-340, 495, -153, -910, 835, -947]);
        assert!(abc.contains_origin());
    }

    #[test]
    fn triangle_xyz_does_not_contain_origin() {
        let xyz = Triangle::from_coords([-175, 41, -421, -714, 574, -645]);
        assert!(!xyz.contains_origin());
    }

    #[test]
    fn containment_ignores_vertex_order() {
        let cw = Triangle::from_coords([0, 10, 10, -10, -10, -10]);
        let ccw = Triangle::from_coords([0, 10, -10, -10, 10, -10]);
        assert!(cw.contains_origin());
        assert!(ccw.contains_origin());
        assert_eq!(cw.doubled_signed_area(), -ccw.doubled_signed_area());
    }

    #[test]
    fn boundary_points_count_as_contained() {
        let t = Triangle::from_coords([0, 0, 4, 0, 0, 4]);
        assert!(t.contains_origin());
        assert!(t.contains(&Point2::new(2, 2)));
        assert!(!t.contains(&Point2::new(3, 3)));
    }
}
