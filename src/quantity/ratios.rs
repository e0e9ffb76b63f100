quantity!(
    /// Percentage points, normally within `0.0..=100.0`.
    ///
    /// Used both for the state of charge and for the fraction of the nominal charging power.
    Percentage, via: f64, suffix: "%", precision: 1
);

impl Percentage {
    pub const HUNDRED: Self = Self(100.0);

    /// Convert the percentage into `0.0..=1.0`.
    pub const fn to_ratio(self) -> f64 {
        self.0 / 100.0
    }

    /// Check whether the percentage lies within `0%..=100%`.
    pub fn is_within_bounds(self) -> bool {
        self.is_finite() && (Self::ZERO..=Self::HUNDRED).contains(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_ratio_ok() {
        assert_eq!(Percentage(50.0).to_ratio(), 0.5);
    }

    #[test]
    fn bounds_ok() {
        assert!(Percentage::ZERO.is_within_bounds());
        assert!(Percentage::HUNDRED.is_within_bounds());
        assert!(!Percentage(100.5).is_within_bounds());
        assert!(!Percentage(-0.1).is_within_bounds());
        assert!(!Percentage(f64::NAN).is_within_bounds());
    }

    #[test]
    fn ordering_ok() {
        assert!(Percentage(10.0) < Percentage(20.0));
        assert_eq!(Percentage(10.0).max(Percentage(20.0)), Percentage(20.0));
        assert_eq!(Percentage(10.0).clamp(Percentage::ZERO, Percentage(5.0)), Percentage(5.0));
    }

    #[test]
    fn parse_ok() {
        assert_eq!("80".parse::<Percentage>().unwrap(), Percentage(80.0));
    }
}
