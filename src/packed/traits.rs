use ::std::cmp::Ordering;

/// Provides min/max functions for `PartialOrd` types.
///
/// This is useful in generic contexts between types which are `Ord` and
/// types which are "mostly" `Ord`; that is, with the removal of a few
/// miscreant values (such as `nan` for floating point types), they would
/// form a total order.
///
/// These emulate the behavior of `min` and `max`, and produce `None` in
/// the case where `partial_cmp` returns `None`.
pub trait PartialMinMax: PartialOrd<Self> + Sized {
    /// Returns the lesser of the two elements, if one can be determined.
    fn partial_min(self, rhs: Self) -> Option<Self> {
        match self.partial_cmp(&rhs)? {
            // ties resolve like ::std::cmp::min
            Ordering::Less | Ordering::Equal => Some(self),
            Ordering::Greater => Some(rhs),
        }
    }

    /// Returns the greater of the two elements, if one can be determined.
    fn partial_max(self, rhs: Self) -> Option<Self> {
        match self.partial_cmp(&rhs)? {
            Ordering::Greater => Some(self),
            // ties resolve like ::std::cmp::max
            Ordering::Equal | Ordering::Less => Some(rhs),
        }
    }
}

impl<T: PartialOrd<T>> PartialMinMax for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_min_max() {
        assert_eq!(1i32.partial_min(2), Some(1));
        assert_eq!(1i32.partial_max(2), Some(2));
        assert_eq!(2.0f64.partial_min(1.0), Some(1.0));
        assert_eq!(2.0f64.partial_max(1.0), Some(2.0));
    }

    #[test]
    fn test_unorderable() {
        assert_eq!(1.0f64.partial_min(::std::f64::NAN), None);
        assert_eq!(::std::f64::NAN.partial_max(1.0), None);
    }
}
