use std::{borrow::Cow, fs, path::Path};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{prelude::*, quantity::ratios::Percentage};

/// Single measured point of the taper curve.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationPoint {
    /// State of charge.
    pub soc: Percentage,

    /// Charging power as a share of the nominal maximum.
    pub rate: Percentage,
}

impl CalibrationPoint {
    pub const fn new(soc: f64, rate: f64) -> Self {
        Self { soc: Percentage(soc), rate: Percentage(rate) }
    }

    /// Linearly interpolate between `self` and `next` at the given state of charge.
    fn interpolate(self, next: Self, soc: Percentage) -> Percentage {
        self.rate + (next.rate - self.rate) * (soc - self.soc).0 / (next.soc - self.soc).0
    }
}

/// Full power up to half charge, then progressively throttled, sharply above 80% and 90%.
const DEFAULT_POINTS: [CalibrationPoint; 6] = [
    CalibrationPoint::new(0.0, 100.0),
    CalibrationPoint::new(50.0, 95.0),
    CalibrationPoint::new(70.0, 85.0),
    CalibrationPoint::new(80.0, 70.0),
    CalibrationPoint::new(90.0, 40.0),
    CalibrationPoint::new(100.0, 10.0),
];

/// Piecewise-linear taper: maps the state of charge onto the accepted fraction of the nominal charging power.
///
/// Invariants, enforced by [`TaperCurve::try_new`]:
///
/// - at least two points
/// - strictly increasing state of charge, from exactly 0% to exactly 100%
/// - every rate within `0%..=100%`
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaperCurve {
    points: Cow<'static, [CalibrationPoint]>,
}

impl Default for TaperCurve {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Deserialize)]
struct CurveFile {
    points: Vec<CalibrationPoint>,
}

impl TaperCurve {
    pub const DEFAULT: Self = Self { points: Cow::Borrowed(&DEFAULT_POINTS) };

    pub fn try_new(points: Vec<CalibrationPoint>) -> Result<Self> {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            bail!("the curve must contain calibration points");
        };
        ensure!(points.len() >= 2, "the curve needs at least two calibration points");
        ensure!(first.soc == Percentage::ZERO, "the curve must start at 0%, got {:?}", first.soc);
        ensure!(last.soc == Percentage::HUNDRED, "the curve must end at 100%, got {:?}", last.soc);
        for point in &points {
            if !point.soc.is_within_bounds() || !point.rate.is_within_bounds() {
                bail!("calibration point is out of bounds: {point:?}");
            }
        }
        for (lhs, rhs) in points.iter().tuple_windows() {
            if lhs.soc >= rhs.soc {
                bail!("calibration points must be sorted by state of charge: {lhs:?} precedes {rhs:?}");
            }
        }
        Ok(Self { points: Cow::Owned(points) })
    }

    /// Parse the TOML curve definition:
    ///
    /// ```toml
    /// [[points]]
    /// soc = 0
    /// rate = 100
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: CurveFile = toml::from_str(text).context("failed to parse the curve")?;
        Self::try_new(file.points)
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read the curve from `{}`", path.display()))?;
        let curve = Self::from_toml_str(&text)
            .with_context(|| format!("invalid curve in `{}`", path.display()))?;
        info!(n_points = curve.points.len(), "loaded the custom curve");
        Ok(curve)
    }

    pub fn points(&self) -> &[CalibrationPoint] {
        &self.points
    }

    /// Charging power fraction accepted by the battery at the given state of charge.
    ///
    /// Outside of the calibrated range, including `NaN`, the last rate applies on both sides.
    pub fn rate_fraction(&self, soc: Percentage) -> Percentage {
        let last = self.points[self.points.len() - 1];
        self.points
            .iter()
            .tuple_windows()
            .find(|(lhs, rhs)| (lhs.soc <= soc) && (soc <= rhs.soc))
            .map_or(last.rate, |(lhs, rhs)| lhs.interpolate(*rhs, soc))
    }

    /// Sample the curve from 0% up to 100% with the given resolution.
    pub fn sample(
        &self,
        resolution: Percentage,
    ) -> Result<impl Iterator<Item = (Percentage, Percentage)> + '_> {
        ensure!(
            resolution.is_finite() && resolution > Percentage::ZERO,
            "the resolution must be positive, got {resolution:?}",
        );
        let samples = (0_u32..)
            .map(move |index| resolution * f64::from(index))
            .take_while(|soc| *soc <= Percentage::HUNDRED)
            .map(move |soc| (soc, self.rate_fraction(soc)));
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn knots_ok() {
        let curve = TaperCurve::DEFAULT;
        for point in DEFAULT_POINTS {
            assert_eq!(curve.rate_fraction(point.soc), point.rate);
        }
        assert_eq!(curve.rate_fraction(Percentage(80.0)), Percentage(70.0));
    }

    #[test]
    fn interpolation_ok() {
        let curve = TaperCurve::DEFAULT;
        assert_abs_diff_eq!(curve.rate_fraction(Percentage(25.0)).0, 97.5);
        assert_abs_diff_eq!(curve.rate_fraction(Percentage(75.0)).0, 77.5);
        assert_abs_diff_eq!(curve.rate_fraction(Percentage(85.0)).0, 55.0);
        assert_abs_diff_eq!(curve.rate_fraction(Percentage(95.0)).0, 25.0);
    }

    #[test]
    fn clamp_high() {
        let curve = TaperCurve::DEFAULT;
        assert_eq!(curve.rate_fraction(Percentage(150.0)), Percentage(10.0));
        assert_eq!(curve.rate_fraction(Percentage(100.000_001)), Percentage(10.0));
        assert_eq!(curve.rate_fraction(Percentage(f64::NAN)), Percentage(10.0));
        assert_eq!(curve.rate_fraction(Percentage(f64::INFINITY)), Percentage(10.0));
    }

    #[test]
    fn below_range_falls_back_to_last_rate() {
        let curve = TaperCurve::DEFAULT;
        assert_eq!(curve.rate_fraction(Percentage(-0.5)), Percentage(10.0));
        assert_eq!(curve.rate_fraction(Percentage(-5.0)), Percentage(10.0));
        assert_eq!(curve.rate_fraction(Percentage(f64::NEG_INFINITY)), Percentage(10.0));
    }

    #[test]
    fn non_increasing() {
        let curve = TaperCurve::DEFAULT;
        let rates: Vec<_> =
            curve.sample(Percentage(0.1)).unwrap().map(|(_, rate)| rate).collect();
        assert!(rates.len() > 900);
        for (lhs, rhs) in rates.iter().tuple_windows() {
            assert!(lhs >= rhs, "{lhs:?} < {rhs:?}");
        }
    }

    #[test]
    fn sample_ok() {
        let samples: Vec<_> = TaperCurve::DEFAULT.sample(Percentage(10.0)).unwrap().collect();
        assert_eq!(samples.len(), 11);
        assert_eq!(samples[0], (Percentage::ZERO, Percentage(100.0)));
        assert_eq!(samples[10], (Percentage::HUNDRED, Percentage(10.0)));
    }

    #[test]
    fn sample_zero_resolution_fails() {
        assert!(TaperCurve::DEFAULT.sample(Percentage::ZERO).is_err());
        assert!(TaperCurve::DEFAULT.sample(Percentage(f64::NAN)).is_err());
    }

    #[test]
    fn try_new_ok() {
        let curve = TaperCurve::try_new(vec![
            CalibrationPoint::new(0.0, 100.0),
            CalibrationPoint::new(100.0, 0.0),
        ])
        .unwrap();
        assert_abs_diff_eq!(curve.rate_fraction(Percentage(30.0)).0, 70.0);
    }

    #[test]
    fn try_new_rejects_invalid_points() {
        assert!(TaperCurve::try_new(vec![]).is_err());
        assert!(TaperCurve::try_new(vec![CalibrationPoint::new(0.0, 100.0)]).is_err());
        assert!(
            TaperCurve::try_new(vec![
                CalibrationPoint::new(10.0, 100.0),
                CalibrationPoint::new(100.0, 10.0),
            ])
            .is_err()
        );
        assert!(
            TaperCurve::try_new(vec![
                CalibrationPoint::new(0.0, 100.0),
                CalibrationPoint::new(90.0, 10.0),
            ])
            .is_err()
        );
        assert!(
            TaperCurve::try_new(vec![
                CalibrationPoint::new(0.0, 100.0),
                CalibrationPoint::new(60.0, 90.0),
                CalibrationPoint::new(50.0, 80.0),
                CalibrationPoint::new(100.0, 10.0),
            ])
            .is_err()
        );
        assert!(
            TaperCurve::try_new(vec![
                CalibrationPoint::new(0.0, 120.0),
                CalibrationPoint::new(100.0, 10.0),
            ])
            .is_err()
        );
    }

    #[test]
    fn from_toml_str_ok() {
        let curve = TaperCurve::from_toml_str(
            r"
            [[points]]
            soc = 0
            rate = 100

            [[points]]
            soc = 80.0
            rate = 80

            [[points]]
            soc = 100
            rate = 20
            ",
        )
        .unwrap();
        assert_eq!(curve.points().len(), 3);
        assert_abs_diff_eq!(curve.rate_fraction(Percentage(90.0)).0, 50.0);
    }

    #[test]
    fn from_toml_str_rejects_garbage() {
        assert!(TaperCurve::from_toml_str("points = 42").is_err());
    }
}
