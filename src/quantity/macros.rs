macro_rules! quantity {
    ($(#[$attribute:meta])* $name:ident, via: $container:tt, suffix: $suffix:literal, precision: $precision:literal) => {
        quantity!(@base $(#[$attribute])* $name, $container);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(formatter, "{:.*} {}", $precision, self.0, $suffix)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(formatter, "{:?}{}", self.0, $suffix)
            }
        }
    };

    ($(#[$attribute:meta])* $name:ident, via: $container:tt, prefix: $prefix:literal, precision: $precision:literal) => {
        quantity!(@base $(#[$attribute])* $name, $container);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let sign = if self.0 < 0.0 { "-" } else { "" };
                write!(formatter, "{sign}{}{:.*}", $prefix, $precision, self.0.abs())
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(formatter, "{}{:?}", $prefix, self.0)
            }
        }
    };

    (@base $(#[$attribute:meta])* $name:ident, $container:tt) => {
        $(#[$attribute])*
        #[must_use]
        #[repr(transparent)]
        #[derive(
            ::derive_more::Add,
            ::derive_more::AddAssign,
            ::derive_more::From,
            ::derive_more::FromStr,
            ::derive_more::Sub,
            ::derive_more::SubAssign,
            ::derive_more::Sum,
            ::serde::Deserialize,
            ::serde::Serialize,
            ::std::clone::Clone,
            ::std::marker::Copy,
        )]
        pub struct $name(pub $container);

        impl $name {
            pub const ZERO: Self = Self(0.0);

            pub const fn is_finite(self) -> bool {
                self.0.is_finite()
            }
        }

        impl ::std::ops::Mul<$container> for $name {
            type Output = Self;

            fn mul(self, rhs: $container) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl ::std::ops::Div<$container> for $name {
            type Output = Self;

            fn div(self, rhs: $container) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl ::std::ops::Div<Self> for $name {
            type Output = $container;

            fn div(self, rhs: Self) -> Self::Output {
                self.0 / rhs.0
            }
        }

        ordering!($name, $container);
    };
}

macro_rules! ordering {
    ($name:ty,f64) => {
        impl ::std::ops::Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl ::std::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl ::std::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                ::ordered_float::OrderedFloat(self.0).cmp(&::ordered_float::OrderedFloat(other.0))
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                ::ordered_float::OrderedFloat(self.0).eq(&::ordered_float::OrderedFloat(other.0))
            }
        }

        impl ::std::cmp::Eq for $name {}
    };
}

/// Implement `lhs * rhs = output` in both directions.
macro_rules! implement_mul {
    ($lhs:ty, $rhs:ty, $output:ty) => {
        impl ::std::ops::Mul<$rhs> for $lhs {
            type Output = $output;

            fn mul(self, rhs: $rhs) -> Self::Output {
                <$output>::from(self.0 * rhs.0)
            }
        }

        impl ::std::ops::Mul<$lhs> for $rhs {
            type Output = $output;

            fn mul(self, rhs: $lhs) -> Self::Output {
                <$output>::from(self.0 * rhs.0)
            }
        }
    };
}

/// Implement `lhs / rhs = output`.
macro_rules! implement_div {
    ($lhs:ty, $rhs:ty, $output:ty) => {
        impl ::std::ops::Div<$rhs> for $lhs {
            type Output = $output;

            fn div(self, rhs: $rhs) -> Self::Output {
                <$output>::from(self.0 / rhs.0)
            }
        }
    };
}
