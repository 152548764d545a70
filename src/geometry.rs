//! Affine geometry for page placement
//!
//! Matrices use the row-vector convention common to document renderers:
//! `x' = x*a + y*c + e`, `y' = x*b + y*d + f`. `one.concat(&two)` applies
//! `one` first, then `two`.

/// Tolerance used when snapping float rectangles to pixel bounds
const ROUND_EPSILON: f32 = 0.001;

/// Tolerance for recognising exact quarter-turn rotations
const ANGLE_EPSILON: f32 = f32::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn transform(&self, m: &Matrix) -> Self {
        m.transform_point(*self)
    }
}

/// Float rectangle in page or device space (`x0,y0` inclusive, `x1,y1` exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    #[inline]
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle with its origin at zero, e.g. a page media box
    #[inline]
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// Bounding box of the four transformed corners
    pub fn transform(&self, m: &Matrix) -> Rect {
        let corners = [
            Point::new(self.x0, self.y0).transform(m),
            Point::new(self.x1, self.y0).transform(m),
            Point::new(self.x0, self.y1).transform(m),
            Point::new(self.x1, self.y1).transform(m),
        ];

        let mut out = Rect::new(corners[0].x, corners[0].y, corners[0].x, corners[0].y);
        for p in &corners[1..] {
            out.x0 = out.x0.min(p.x);
            out.y0 = out.y0.min(p.y);
            out.x1 = out.x1.max(p.x);
            out.y1 = out.y1.max(p.y);
        }
        out
    }

    /// Snap to whole pixels, ignoring float noise just past an integer edge
    pub fn round(&self) -> IRect {
        IRect {
            x0: (self.x0 + ROUND_EPSILON).floor() as i32,
            y0: (self.y0 + ROUND_EPSILON).floor() as i32,
            x1: (self.x1 - ROUND_EPSILON).ceil() as i32,
            y1: (self.y1 - ROUND_EPSILON).ceil() as i32,
        }
    }
}

/// Integer pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct IRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl IRect {
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle from origin and size
    #[inline]
    pub fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 as f64 && x < self.x1 as f64 && y >= self.y0 as f64 && y < self.y1 as f64
    }

    pub fn intersect(&self, other: &IRect) -> IRect {
        IRect {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }
}

/// 2x3 affine matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    #[inline]
    pub fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    #[inline]
    pub fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation by `degrees` clockwise in device space.
    ///
    /// Quarter turns produce exact 0/1 coefficients so rotated page bounds
    /// land on whole pixels.
    pub fn rotate(degrees: f32) -> Self {
        let mut theta = degrees % 360.0;
        if theta < 0.0 {
            theta += 360.0;
        }

        if theta.abs() < ANGLE_EPSILON || (theta - 360.0).abs() < ANGLE_EPSILON {
            Self::IDENTITY
        } else if (theta - 90.0).abs() < ANGLE_EPSILON {
            Self::new(0.0, 1.0, -1.0, 0.0, 0.0, 0.0)
        } else if (theta - 180.0).abs() < ANGLE_EPSILON {
            Self::new(-1.0, 0.0, 0.0, -1.0, 0.0, 0.0)
        } else if (theta - 270.0).abs() < ANGLE_EPSILON {
            Self::new(0.0, -1.0, 1.0, 0.0, 0.0, 0.0)
        } else {
            let (s, c) = theta.to_radians().sin_cos();
            Self::new(c, s, -s, c, 0.0, 0.0)
        }
    }

    /// `self` followed by `m`
    pub fn concat(&self, m: &Matrix) -> Self {
        Self {
            a: self.a * m.a + self.b * m.c,
            b: self.a * m.b + self.b * m.d,
            c: self.c * m.a + self.d * m.c,
            d: self.c * m.b + self.d * m.d,
            e: self.e * m.a + self.f * m.c + m.e,
            f: self.e * m.b + self.f * m.d + m.f,
        }
    }

    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        Point {
            x: p.x * self.a + p.y * self.c + self.e,
            y: p.x * self.b + p.y * self.d + self.f,
        }
    }

    /// Rotation of this matrix snapped to the nearest quarter turn (0..4)
    pub fn quarter_turns(&self) -> u8 {
        let degrees = self.b.atan2(self.a).to_degrees();
        let turns = (degrees / 90.0).round() as i32;
        turns.rem_euclid(4) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_rotate_quarter_turns_are_exact() {
        assert_eq!(Matrix::rotate(0.0), Matrix::IDENTITY);
        assert_eq!(Matrix::rotate(90.0), Matrix::new(0.0, 1.0, -1.0, 0.0, 0.0, 0.0));
        assert_eq!(Matrix::rotate(-90.0), Matrix::rotate(270.0));
        assert_eq!(Matrix::rotate(450.0), Matrix::rotate(90.0));
    }

    #[test]
    fn test_concat_applies_left_first() {
        // Scale first: (1, 0) -> (2, 0), then a quarter turn -> (0, 2)
        let m = Matrix::scale(2.0, 3.0).concat(&Matrix::rotate(90.0));
        let p = m.transform_point(Point::new(1.0, 0.0));
        assert!(approx(p.x, 0.0));
        assert!(approx(p.y, 2.0));
    }

    #[test]
    fn test_transform_rect_rotated_swaps_dimensions() {
        let r = Rect::from_size(100.0, 50.0).transform(&Matrix::rotate(90.0));
        assert!(approx(r.width(), 50.0));
        assert!(approx(r.height(), 100.0));
        assert!(approx(r.x0, -50.0));
    }

    #[test]
    fn test_round_ignores_float_noise() {
        let r = Rect::new(-0.0004, 0.0, 611.9996, 792.0004);
        assert_eq!(r.round(), IRect::new(0, 0, 612, 792));
    }

    #[test]
    fn test_round_expands_partial_pixels() {
        let r = Rect::new(0.5, 0.5, 10.2, 10.7);
        assert_eq!(r.round(), IRect::new(0, 0, 11, 11));
    }

    #[test]
    fn test_quarter_turns() {
        assert_eq!(Matrix::rotate(0.0).quarter_turns(), 0);
        assert_eq!(Matrix::rotate(90.0).quarter_turns(), 1);
        assert_eq!(Matrix::rotate(180.0).quarter_turns(), 2);
        assert_eq!(Matrix::rotate(270.0).quarter_turns(), 3);
        assert_eq!(
            Matrix::scale(2.0, 2.0)
                .concat(&Matrix::rotate(90.0))
                .quarter_turns(),
            1
        );
    }

    #[test]
    fn test_irect_contains_and_intersect() {
        let a = IRect::new(0, 0, 10, 10);
        let b = IRect::new(5, 5, 20, 20);
        assert!(a.contains(0.0, 0.0));
        assert!(!a.contains(10.0, 5.0));
        assert_eq!(a.intersect(&b), IRect::new(5, 5, 10, 10));
        assert!(IRect::new(0, 0, 5, 5).intersect(&IRect::new(6, 6, 8, 8)).is_empty());
    }
}
