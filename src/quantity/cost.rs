quantity!(Cost, via: f64, prefix: "$", precision: 2);

impl Cost {
    /// Round the cost to cents.
    pub fn round_to_cents(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn round_to_cents_ok() {
        assert_abs_diff_eq!(Cost(6.888).round_to_cents().0, 6.89);
        assert_abs_diff_eq!(Cost(16.800_000_000_000_001).round_to_cents().0, 16.8);
    }

    #[test]
    fn display_ok() {
        assert_eq!(Cost(6.888).to_string(), "$6.89");
        assert_eq!(Cost::ZERO.to_string(), "$0.00");
        assert_eq!(Cost(-1.5).to_string(), "-$1.50");
    }
}
