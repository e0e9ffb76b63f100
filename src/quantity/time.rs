quantity!(Hours, via: f64, suffix: "h", precision: 2);
quantity!(Minutes, via: f64, suffix: "min", precision: 1);

impl From<Hours> for Minutes {
    fn from(hours: Hours) -> Self {
        Self(hours.0 * 60.0)
    }
}

impl From<Minutes> for Hours {
    fn from(minutes: Minutes) -> Self {
        Self(minutes.0 / 60.0)
    }
}
