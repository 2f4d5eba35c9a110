/// 2D vector used for every point-mass position.
///
/// The mutating helpers write into `self` and return `&mut Self` so several
/// operations can be chained on a scratch vector without allocating.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn set(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn copy(&mut self, v: &Vec2) -> &mut Self {
        self.x = v.x;
        self.y = v.y;
        self
    }

    pub fn neg(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    /// `self = a - b`
    pub fn sub(&mut self, a: &Vec2, b: &Vec2) -> &mut Self {
        self.x = a.x - b.x;
        self.y = a.y - b.y;
        self
    }

    /// `self = v * s`
    pub fn scale(&mut self, v: &Vec2, s: f32) -> &mut Self {
        self.x = v.x * s;
        self.y = v.y * s;
        self
    }

    /// `self = (-v.y, v.x)`
    pub fn perp(&mut self, v: &Vec2) -> &mut Self {
        let (x, y) = (-v.y, v.x);
        self.x = x;
        self.y = y;
        self
    }

    /// Unit normal of the segment `p0 -> p1`.
    ///
    /// `p0 == p1` divides by zero and leaves NaN components. Body
    /// construction rejects zero-length edges so the collision pass never
    /// sees one.
    pub fn edge_normal(&mut self, p0: &Vec2, p1: &Vec2) -> &mut Self {
        let nx = p0.y - p1.y;
        let ny = p1.x - p0.x;
        let inv_len = 1.0 / (nx * nx + ny * ny).sqrt();
        self.x = nx * inv_len;
        self.y = ny * inv_len;
        self
    }

    pub fn dot(&self, other: &Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn square_dist(&self, other: &Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_ops_write_in_place() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(1.0, 1.0);
        let mut v = Vec2::zero();
        v.sub(&a, &b).neg();
        assert_eq!(v, Vec2::new(-2.0, -3.0));

        let mut s = Vec2::zero();
        s.scale(&a, 0.5).perp(&Vec2::new(1.5, 2.0));
        assert_eq!(s, Vec2::new(-2.0, 1.5));
    }

    #[test]
    fn edge_normal_is_unit_and_left_of_segment() {
        let mut n = Vec2::zero();
        n.edge_normal(&Vec2::new(0.0, 0.0), &Vec2::new(10.0, 0.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert_eq!(n, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn degenerate_edge_normal_is_not_finite() {
        let p = Vec2::new(5.0, 5.0);
        let mut n = Vec2::zero();
        n.edge_normal(&p, &p);
        assert!(!n.is_finite());
    }

    #[test]
    fn scalar_queries() {
        let a = Vec2::new(3.0, 4.0);
        assert_eq!(a.length(), 5.0);
        assert_eq!(a.dot(&Vec2::new(2.0, 0.5)), 8.0);
        assert_eq!(a.square_dist(&Vec2::zero()), 25.0);
    }
}
