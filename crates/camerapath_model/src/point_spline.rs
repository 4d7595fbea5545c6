// SPDX-License-Identifier: MIT OR Apache-2.0
//! Vector-valued spline: three scalar channels sharing one domain.

use crate::error::{PathError, Result};
use crate::spline::ScalarSpline;

/// A 3-D interpolating spline backed by one [`ScalarSpline`] per axis.
///
/// Every mutation goes to all three channels together, so their domains and
/// control times can never diverge. The dense polyline is a derived cache
/// for display; evaluation never reads it.
#[derive(Debug, Clone, Default)]
pub struct PointSpline {
    x: ScalarSpline,
    y: ScalarSpline,
    z: ScalarSpline,
    polyline: Vec<[f64; 3]>,
}

impl PointSpline {
    /// Create an empty point spline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower bound of the shared parametric domain.
    pub fn minimum_t(&self) -> f64 {
        self.x.minimum_t()
    }

    /// Upper bound of the shared parametric domain.
    pub fn maximum_t(&self) -> f64 {
        self.x.maximum_t()
    }

    /// Number of control points (identical across the three channels).
    pub fn point_count(&self) -> usize {
        self.x.point_count()
    }

    /// Clear all control points and set the domain on every channel.
    pub fn initialize(&mut self, min: f64, max: f64) -> Result<()> {
        self.x.initialize(min, max)?;
        self.y.initialize(min, max)?;
        self.z.initialize(min, max)?;
        self.polyline.clear();
        Ok(())
    }

    /// Add one 3-D control point at `t`, replacing an existing point there.
    pub fn add_point(&mut self, t: f64, point: [f64; 3]) -> Result<()> {
        // Domain is shared; checking the first channel rejects the point
        // before any channel is touched.
        self.x.add_point(t, point[0])?;
        self.y.add_point(t, point[1])?;
        self.z.add_point(t, point[2])?;
        Ok(())
    }

    /// Remove the control point at exactly `t` from every channel.
    pub fn remove_point(&mut self, t: f64) -> Result<()> {
        self.x.remove_point(t)?;
        self.y.remove_point(t)?;
        self.z.remove_point(t)?;
        Ok(())
    }

    /// Evaluate the three channels at the same `t`.
    pub fn evaluate(&self, t: f64) -> Result<[f64; 3]> {
        Ok([
            self.x.evaluate(t)?,
            self.y.evaluate(t)?,
            self.z.evaluate(t)?,
        ])
    }

    /// Regenerate the dense polyline at `rate` samples per unit time.
    ///
    /// Sampling is endpoint-inclusive across `[min, max]`; a degenerate
    /// domain yields a single sample. Fails with
    /// [`PathError::InvalidInput`] for a non-positive rate and
    /// [`PathError::NotReady`] when the channels hold no points.
    pub fn update_polyline(&mut self, rate: f64) -> Result<&[[f64; 3]]> {
        if !(rate > 0.0) {
            return Err(PathError::InvalidInput(format!(
                "sample rate must be positive, got {rate}"
            )));
        }
        let min = self.minimum_t();
        let max = self.maximum_t();
        let span = max - min;

        let mut samples = Vec::new();
        if span <= 0.0 {
            samples.push(self.evaluate(min)?);
        } else {
            let steps = (span * rate).ceil() as usize;
            samples.reserve(steps + 1);
            for i in 0..=steps {
                let t = min + span * (i as f64 / steps as f64);
                samples.push(self.evaluate(t)?);
            }
        }
        self.polyline = samples;
        Ok(&self.polyline)
    }

    /// The last polyline produced by [`PointSpline::update_polyline`].
    pub fn polyline(&self) -> &[[f64; 3]] {
        &self.polyline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal() -> PointSpline {
        let mut s = PointSpline::new();
        s.initialize(0.0, 10.0).unwrap();
        s.add_point(0.0, [0.0, 0.0, 0.0]).unwrap();
        s.add_point(10.0, [10.0, 20.0, 30.0]).unwrap();
        s
    }

    #[test]
    fn test_channels_share_domain() {
        let s = diagonal();
        assert_eq!(s.minimum_t(), 0.0);
        assert_eq!(s.maximum_t(), 10.0);
        assert_eq!(s.point_count(), 2);
    }

    #[test]
    fn test_evaluate_assembles_all_axes() {
        let s = diagonal();
        assert_eq!(s.evaluate(10.0).unwrap(), [10.0, 20.0, 30.0]);
        let mid = s.evaluate(5.0).unwrap();
        assert!((mid[0] - 5.0).abs() < 1e-12);
        assert!((mid[1] - 10.0).abs() < 1e-12);
        assert!((mid[2] - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_fails_as_a_unit() {
        let s = diagonal();
        assert!(matches!(
            s.evaluate(11.0),
            Err(PathError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn test_out_of_domain_add_leaves_channels_untouched() {
        let mut s = diagonal();
        assert!(s.add_point(99.0, [1.0, 1.0, 1.0]).is_err());
        assert_eq!(s.point_count(), 2);
    }

    #[test]
    fn test_polyline_sample_count() {
        let mut s = diagonal();
        // 10 units at 30 samples/unit: 300 steps, endpoints inclusive.
        let samples = s.update_polyline(30.0).unwrap();
        assert_eq!(samples.len(), 301);
        assert_eq!(samples[0], [0.0, 0.0, 0.0]);
        assert_eq!(samples[300], [10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_polyline_degenerate_domain() {
        let mut s = PointSpline::new();
        s.initialize(2.0, 2.0).unwrap();
        s.add_point(2.0, [1.0, 2.0, 3.0]).unwrap();
        let samples = s.update_polyline(30.0).unwrap();
        assert_eq!(samples, &[[1.0, 2.0, 3.0]]);
    }

    #[test]
    fn test_polyline_rejects_bad_rate() {
        let mut s = diagonal();
        assert!(matches!(
            s.update_polyline(0.0),
            Err(PathError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_polyline_is_disposable_cache() {
        let mut s = diagonal();
        s.update_polyline(1.0).unwrap();
        assert_eq!(s.polyline().len(), 11);
        // Re-initializing drops the cache along with the points.
        s.initialize(0.0, 1.0).unwrap();
        assert!(s.polyline().is_empty());
    }
}
