use super::Vec2;

/// Axis-aligned rectangle.
///
/// In surface space the origin is the top-left corner (y down); in world
/// space it is the min-x/min-y corner (y up). Width and height are expected
/// to be non-negative; use [`normalized`](Rect::normalized) for untrusted input.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Smallest rect containing every point in `points`.
    ///
    /// Returns `None` for an empty slice.
    pub fn bounding(points: &[Vec2]) -> Option<Self> {
        let first = *points.first()?;
        let mut min = first;
        let mut max = first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Rect::from_origin_size(min, max - min))
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Grows the rect by `amount` on every side.
    #[inline]
    pub fn expanded(self, amount: f32) -> Self {
        Rect::new(
            self.origin.x - amount,
            self.origin.y - amount,
            self.size.x + amount * 2.0,
            self.size.y + amount * 2.0,
        )
    }

    /// Smallest rect containing both `self` and `other`.
    #[inline]
    pub fn union(self, other: Rect) -> Self {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.min(b.origin.x);
        let y0 = a.origin.y.min(b.origin.y);
        let x1 = a.max().x.max(b.max().x);
        let y1 = a.max().y.max(b.max().y);

        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.x)
            && p.y < (r.origin.y + r.size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── bounding ──────────────────────────────────────────────────────────

    #[test]
    fn bounding_empty_is_none() {
        assert!(Rect::bounding(&[]).is_none());
    }

    #[test]
    fn bounding_single_point_is_degenerate() {
        let b = Rect::bounding(&[Vec2::new(3.0, 4.0)]).unwrap();
        assert_eq!(b, r(3.0, 4.0, 0.0, 0.0));
    }

    #[test]
    fn bounding_spans_all_points() {
        let b = Rect::bounding(&[
            Vec2::new(-1.0, 2.0),
            Vec2::new(5.0, -3.0),
            Vec2::new(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(b, r(-1.0, -3.0, 6.0, 5.0));
    }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let rect = r(10.0, 0.0, -4.0, 5.0);
        let n = rect.normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── union / expanded ──────────────────────────────────────────────────

    #[test]
    fn union_disjoint() {
        let u = r(0.0, 0.0, 1.0, 1.0).union(r(4.0, 4.0, 1.0, 1.0));
        assert_eq!(u, r(0.0, 0.0, 5.0, 5.0));
    }

    #[test]
    fn union_contained() {
        let outer = r(0.0, 0.0, 10.0, 10.0);
        assert_eq!(outer.union(r(2.0, 2.0, 3.0, 3.0)), outer);
    }

    #[test]
    fn expanded_grows_all_sides() {
        let e = r(2.0, 2.0, 4.0, 4.0).expanded(1.0);
        assert_eq!(e, r(1.0, 1.0, 6.0, 6.0));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn contains_max_edge_exclusive() {
        // Half-open [min, max): the max edge is not contained.
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn center_of_unit_rect() {
        assert_eq!(r(0.0, 0.0, 2.0, 4.0).center(), Vec2::new(1.0, 2.0));
    }
}
