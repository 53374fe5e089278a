//! Arc-length path sampling
//!
//! Extracts the leading part of the checkmark, measured by distance along the
//! path rather than by vertex count. Sampling only reads the cumulative
//! lengths cached in [`CheckmarkPath`], so repeated calls for the same path
//! always agree with each other.

use crate::geometry::CheckmarkPath;
use checkring_core::{Path, Point};
use smallvec::SmallVec;

/// An open polyline, at most one vertex longer than the checkmark
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    points: SmallVec<[Point; 4]>,
}

impl Polyline {
    pub fn new() -> Self {
        Self {
            points: SmallVec::new(),
        }
    }

    pub fn from_points(points: &[Point]) -> Self {
        Self {
            points: SmallVec::from_slice(points),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total length of all segments
    pub fn length(&self) -> f32 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// Last vertex, if any
    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn to_path(&self) -> Path {
        Path::polyline(&self.points)
    }
}

/// The leading `fraction` of `path`, by arc length
///
/// `total_length` is the measured length of `path`; `fraction` is clamped to
/// `[0, 1]` with NaN treated as 0. A zero fraction or a zero-length path gives
/// an empty polyline, a fraction of 1 gives the path's own vertices.
pub fn sample_leading_segment(path: &CheckmarkPath, total_length: f32, fraction: f32) -> Polyline {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };

    if fraction == 0.0 || !total_length.is_finite() || total_length <= 0.0 {
        return Polyline::new();
    }
    if fraction == 1.0 {
        return Polyline::from_points(path.points());
    }

    let target = total_length * fraction;
    let vertices = path.points();
    let cumulative = path.cumulative_lengths();

    let mut out = Polyline::new();
    out.points.push(vertices[0]);

    for i in 1..vertices.len() {
        if cumulative[i] <= target {
            out.points.push(vertices[i]);
            continue;
        }

        let start = cumulative[i - 1];
        let t = (target - start) / (cumulative[i] - start);
        if t > 0.0 {
            out.points.push(vertices[i - 1].lerp(vertices[i], t));
        }
        break;
    }

    tracing::trace!(
        "sample_leading_segment: {:.3} of {:.1}px -> {} points",
        fraction,
        total_length,
        out.len()
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{compute_geometry, Dimensions};

    fn checkmark() -> CheckmarkPath {
        compute_geometry(&Dimensions::new(100.0, 100.0, 5.0)).1
    }

    /// Whether `point` lies on the segment `a`-`b`
    fn on_segment(point: Point, a: Point, b: Point) -> bool {
        let ab = a.distance(b);
        (a.distance(point) + point.distance(b) - ab).abs() < 1e-3
    }

    #[test]
    fn test_zero_fraction_is_empty() {
        let path = checkmark();
        assert!(sample_leading_segment(&path, path.total_length(), 0.0).is_empty());
        assert!(sample_leading_segment(&path, path.total_length(), -1.0).is_empty());
        assert!(sample_leading_segment(&path, path.total_length(), f32::NAN).is_empty());
    }

    #[test]
    fn test_full_fraction_is_identical() {
        let path = checkmark();
        let full = sample_leading_segment(&path, path.total_length(), 1.0);
        assert_eq!(full.points(), path.points());

        let over = sample_leading_segment(&path, path.total_length(), 3.5);
        assert_eq!(over.points(), path.points());
    }

    #[test]
    fn test_zero_length_path() {
        let path = CheckmarkPath::for_size(0.0, 0.0);
        assert_eq!(path.total_length(), 0.0);
        for fraction in [0.0, 0.5, 1.0] {
            assert!(sample_leading_segment(&path, path.total_length(), fraction).is_empty());
        }
    }

    #[test]
    fn test_length_is_proportional() {
        let path = checkmark();
        let total = path.total_length();
        for i in 1..20 {
            let fraction = i as f32 / 20.0;
            let sub = sample_leading_segment(&path, total, fraction);
            assert!((sub.length() - total * fraction).abs() < 1e-3);
        }
    }

    #[test]
    fn test_stops_inside_first_segment() {
        let path = checkmark();
        let total = path.total_length();
        let first = path.cumulative_lengths()[1];

        let sub = sample_leading_segment(&path, total, first / total / 2.0);
        assert_eq!(sub.len(), 2);
        let end = sub.end().unwrap();
        assert!((end.x - 30.0).abs() < 1e-3);
        assert!((end.y - 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_prefix_property() {
        let path = checkmark();
        let total = path.total_length();

        let samples: Vec<_> = (0..=50)
            .map(|i| sample_leading_segment(&path, total, i as f32 / 50.0))
            .collect();

        for (i, shorter) in samples.iter().enumerate() {
            for longer in &samples[i..] {
                if shorter.is_empty() {
                    continue;
                }
                let n = shorter.len();
                // Every full vertex of the shorter sample is shared
                assert_eq!(&longer.points()[..n - 1], &shorter.points()[..n - 1]);

                // Its trailing point lies on the longer sample
                let end = shorter.end().unwrap();
                let on_longer = longer
                    .points()
                    .windows(2)
                    .any(|w| on_segment(end, w[0], w[1]));
                assert!(on_longer, "{end:?} not on {longer:?}");
            }
        }
    }

    #[test]
    fn test_to_path() {
        let path = checkmark();
        let sub = sample_leading_segment(&path, path.total_length(), 1.0);
        assert_eq!(sub.to_path(), path.to_path());
    }
}
