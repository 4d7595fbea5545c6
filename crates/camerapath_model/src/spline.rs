// SPDX-License-Identifier: MIT OR Apache-2.0
//! 1-D interpolating spline channel.
//!
//! [`ScalarSpline`] is a Kochanek-Bartels cubic through a set of
//! `(t, value)` control points over a fixed parametric domain. With the
//! default tension/continuity/bias of zero the tangents reduce to
//! Catmull-Rom-style averaged slopes, adjusted for non-uniform knot spacing.
//! Endpoint first derivatives are pinned at zero.

use crate::error::{PathError, Result};

/// One interpolating curve over a scalar parametric domain.
///
/// Control points are kept sorted by `t`; adding a point at an existing `t`
/// replaces its value, which is how single-keyframe edits propagate without
/// a full rebuild. All parameter checks use the exact domain bounds set by
/// [`ScalarSpline::initialize`].
#[derive(Debug, Clone)]
pub struct ScalarSpline {
    min_t: f64,
    max_t: f64,
    /// Sorted ascending by `t`, unique `t` values.
    points: Vec<(f64, f64)>,
    /// Per-interval cubic coefficients `[c0, c1, c2, c3]` in normalized
    /// interval time, rebuilt after every mutation.
    coefficients: Vec<[f64; 4]>,
    tension: f64,
    continuity: f64,
    bias: f64,
}

impl ScalarSpline {
    /// Create an empty spline with a degenerate `[0, 0]` domain.
    pub fn new() -> Self {
        Self {
            min_t: 0.0,
            max_t: 0.0,
            points: Vec::new(),
            coefficients: Vec::new(),
            tension: 0.0,
            continuity: 0.0,
            bias: 0.0,
        }
    }

    /// Lower bound of the parametric domain.
    pub fn minimum_t(&self) -> f64 {
        self.min_t
    }

    /// Upper bound of the parametric domain.
    pub fn maximum_t(&self) -> f64 {
        self.max_t
    }

    /// Number of control points.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Control points, sorted ascending by `t`.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Set the tension parameter and recompute the curve.
    pub fn set_tension(&mut self, tension: f64) {
        self.tension = tension;
        self.rebuild_coefficients();
    }

    /// Set the continuity parameter and recompute the curve.
    pub fn set_continuity(&mut self, continuity: f64) {
        self.continuity = continuity;
        self.rebuild_coefficients();
    }

    /// Set the bias parameter and recompute the curve.
    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
        self.rebuild_coefficients();
    }

    /// Clear all control points and set the parametric domain to `[min, max]`.
    pub fn initialize(&mut self, min: f64, max: f64) -> Result<()> {
        if min > max {
            return Err(PathError::InvalidInput(format!(
                "invalid parametric range [{min}, {max}]"
            )));
        }
        self.points.clear();
        self.coefficients.clear();
        self.min_t = min;
        self.max_t = max;
        Ok(())
    }

    fn check_domain(&self, t: f64) -> Result<()> {
        if t < self.min_t || t > self.max_t {
            return Err(PathError::OutOfDomain {
                t,
                min: self.min_t,
                max: self.max_t,
            });
        }
        Ok(())
    }

    /// Add a control point, replacing the value of an existing point at
    /// exactly the same `t`.
    pub fn add_point(&mut self, t: f64, value: f64) -> Result<()> {
        self.check_domain(t)?;
        match self.points.iter().position(|&(pt, _)| pt == t) {
            Some(i) => self.points[i].1 = value,
            None => {
                let at = self.points.partition_point(|&(pt, _)| pt < t);
                self.points.insert(at, (t, value));
            }
        }
        self.rebuild_coefficients();
        Ok(())
    }

    /// Remove the control point at exactly `t`.
    ///
    /// No-op when no point sits at that exact value; the match is exact
    /// (no epsilon), so callers must pass back a `t` they previously added.
    pub fn remove_point(&mut self, t: f64) -> Result<()> {
        self.check_domain(t)?;
        if let Some(i) = self.points.iter().position(|&(pt, _)| pt == t) {
            self.points.remove(i);
            self.rebuild_coefficients();
        }
        Ok(())
    }

    /// Evaluate the curve at `t`.
    ///
    /// Control-point times evaluate to their stored value exactly. Fails
    /// with [`PathError::OutOfDomain`] outside the domain and
    /// [`PathError::NotReady`] when the spline holds no points.
    pub fn evaluate(&self, t: f64) -> Result<f64> {
        self.check_domain(t)?;
        let n = self.points.len();
        if n == 0 {
            return Err(PathError::NotReady);
        }
        // Exact hit on a control point: return the stored value as-is.
        if let Some(i) = self.points.iter().position(|&(pt, _)| pt == t) {
            return Ok(self.points[i].1);
        }
        if n == 1 {
            return Ok(self.points[0].1);
        }

        // Interval index such that t lies in [t_i, t_{i+1}].
        let i = self
            .points
            .partition_point(|&(pt, _)| pt <= t)
            .saturating_sub(1)
            .min(n - 2);
        let (t0, _) = self.points[i];
        let (t1, _) = self.points[i + 1];
        let u = (t - t0) / (t1 - t0);
        let [c0, c1, c2, c3] = self.coefficients[i];
        Ok(((c3 * u + c2) * u + c1) * u + c0)
    }

    /// Recompute the per-interval cubics from the current control points.
    ///
    /// Interior tangents use the Kochanek-Bartels incoming/outgoing slope
    /// split with a `2*h/(h0+h1)` correction for non-uniform knot spacing;
    /// the outermost tangents are zero except in the two-point case, which
    /// degenerates to a straight line.
    fn rebuild_coefficients(&mut self) {
        let n = self.points.len();
        self.coefficients.clear();
        if n < 2 {
            return;
        }

        let mut outgoing = vec![0.0; n];
        let mut incoming = vec![0.0; n];

        if n == 2 {
            let slope = self.points[1].1 - self.points[0].1;
            outgoing[0] = slope;
            incoming[1] = slope;
        } else {
            let (ts, c, b) = (self.tension, self.continuity, self.bias);
            for i in 1..n - 1 {
                let cs = self.points[i].1 - self.points[i - 1].1;
                let cd = self.points[i + 1].1 - self.points[i].1;

                let mut ds = cs * ((1.0 - ts) * (1.0 - c) * (1.0 + b)) * 0.5
                    + cd * ((1.0 - ts) * (1.0 + c) * (1.0 - b)) * 0.5;
                let mut dd = cs * ((1.0 - ts) * (1.0 + c) * (1.0 + b)) * 0.5
                    + cd * ((1.0 - ts) * (1.0 - c) * (1.0 - b)) * 0.5;

                // Correct for unequal knot intervals on each side.
                let h0 = self.points[i].0 - self.points[i - 1].0;
                let h1 = self.points[i + 1].0 - self.points[i].0;
                ds *= 2.0 * h0 / (h0 + h1);
                dd *= 2.0 * h1 / (h0 + h1);

                outgoing[i] = ds;
                incoming[i] = dd;
            }
        }

        for i in 0..n - 1 {
            let y0 = self.points[i].1;
            let y1 = self.points[i + 1].1;
            let d0 = outgoing[i];
            let d1 = incoming[i + 1];
            let c2 = 3.0 * (y1 - y0) - 2.0 * d0 - d1;
            let c3 = 2.0 * (y0 - y1) + d0 + d1;
            self.coefficients.push([y0, d0, c2, c3]);
        }
    }
}

impl Default for ScalarSpline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spline_with(points: &[(f64, f64)]) -> ScalarSpline {
        let mut s = ScalarSpline::new();
        let min = points.first().map(|p| p.0).unwrap_or(0.0);
        let max = points.last().map(|p| p.0).unwrap_or(0.0);
        s.initialize(min, max).unwrap();
        for &(t, v) in points {
            s.add_point(t, v).unwrap();
        }
        s
    }

    #[test]
    fn test_initialize_rejects_inverted_range() {
        let mut s = ScalarSpline::new();
        assert!(matches!(
            s.initialize(5.0, 1.0),
            Err(PathError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_initialize_clears_points() {
        let mut s = spline_with(&[(0.0, 1.0), (1.0, 2.0)]);
        s.initialize(0.0, 10.0).unwrap();
        assert_eq!(s.point_count(), 0);
        assert_eq!(s.minimum_t(), 0.0);
        assert_eq!(s.maximum_t(), 10.0);
    }

    #[test]
    fn test_add_point_out_of_domain() {
        let mut s = ScalarSpline::new();
        s.initialize(0.0, 1.0).unwrap();
        let err = s.add_point(2.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            PathError::OutOfDomain {
                t: 2.0,
                min: 0.0,
                max: 1.0
            }
        );
    }

    #[test]
    fn test_add_point_replaces_existing() {
        let mut s = spline_with(&[(0.0, 1.0), (1.0, 2.0)]);
        s.add_point(1.0, 7.0).unwrap();
        assert_eq!(s.point_count(), 2);
        assert_eq!(s.evaluate(1.0).unwrap(), 7.0);
    }

    #[test]
    fn test_remove_point_is_exact_match_noop() {
        let mut s = spline_with(&[(0.0, 1.0), (5.0, 2.0), (10.0, 3.0)]);
        // In-domain but no point exactly there: silently ignored.
        s.remove_point(5.000001).unwrap();
        assert_eq!(s.point_count(), 3);
        s.remove_point(5.0).unwrap();
        assert_eq!(s.point_count(), 2);
        // Out of domain is still an error.
        assert!(matches!(
            s.remove_point(42.0),
            Err(PathError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn test_evaluate_empty_not_ready() {
        let mut s = ScalarSpline::new();
        s.initialize(0.0, 1.0).unwrap();
        assert_eq!(s.evaluate(0.5).unwrap_err(), PathError::NotReady);
    }

    #[test]
    fn test_evaluate_single_point_constant() {
        let s = spline_with(&[(3.0, 4.5)]);
        assert_eq!(s.evaluate(3.0).unwrap(), 4.5);
    }

    #[test]
    fn test_evaluate_reproduces_control_points_exactly() {
        let pts = [(0.0, 0.0), (1.0, 10.0), (4.0, -2.5), (5.0, 3.0)];
        let s = spline_with(&pts);
        for &(t, v) in &pts {
            assert_eq!(s.evaluate(t).unwrap(), v);
        }
    }

    #[test]
    fn test_evaluate_two_points_is_linear() {
        let s = spline_with(&[(0.0, 0.0), (2.0, 4.0)]);
        assert!((s.evaluate(0.5).unwrap() - 1.0).abs() < 1e-12);
        assert!((s.evaluate(1.0).unwrap() - 2.0).abs() < 1e-12);
        assert!((s.evaluate(1.5).unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_out_of_domain() {
        let s = spline_with(&[(0.0, 0.0), (1.0, 1.0)]);
        assert!(matches!(
            s.evaluate(-0.1),
            Err(PathError::OutOfDomain { .. })
        ));
        assert!(matches!(s.evaluate(1.1), Err(PathError::OutOfDomain { .. })));
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let s = spline_with(&[(0.0, 0.0), (5.0, 10.0), (10.0, 0.0)]);
        let a = s.evaluate(2.34).unwrap();
        let b = s.evaluate(2.34).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_symmetric_bump_peaks_at_middle_knot() {
        let s = spline_with(&[(0.0, 0.0), (5.0, 10.0), (10.0, 0.0)]);
        assert_eq!(s.evaluate(5.0).unwrap(), 10.0);
        // Symmetric input, symmetric curve.
        let left = s.evaluate(2.5).unwrap();
        let right = s.evaluate(7.5).unwrap();
        assert!((left - right).abs() < 1e-9);
        assert!(left < 10.0);
    }

    #[test]
    fn test_tension_changes_curve_shape() {
        let pts = [(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (3.0, 9.0)];
        let relaxed = spline_with(&pts);
        let mut tight = spline_with(&pts);
        tight.set_tension(1.0);
        // Knots still interpolate under full tension.
        assert_eq!(tight.evaluate(2.0).unwrap(), 4.0);
        assert_ne!(
            relaxed.evaluate(1.5).unwrap(),
            tight.evaluate(1.5).unwrap()
        );
    }

    #[test]
    fn test_unsorted_insertion_order() {
        let mut s = ScalarSpline::new();
        s.initialize(0.0, 10.0).unwrap();
        s.add_point(10.0, 3.0).unwrap();
        s.add_point(0.0, 1.0).unwrap();
        s.add_point(5.0, 2.0).unwrap();
        let ts: Vec<f64> = s.points().iter().map(|p| p.0).collect();
        assert_eq!(ts, vec![0.0, 5.0, 10.0]);
    }
}
