//! Relative time spans.

use crate::error::ArithError;

/// A relative span of civil time.
///
/// The component fields carry magnitudes only; direction lives in the
/// `invert` flag. Negative components appear transiently inside the
/// normalization pass but never in a value handed to or returned from the
/// public operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interval {
    /// Years.
    pub y: i64,
    /// Months.
    pub m: i64,
    /// Days.
    pub d: i64,
    /// Hours.
    pub h: i64,
    /// Minutes.
    pub i: i64,
    /// Seconds.
    pub s: i64,
    /// Microseconds.
    pub us: i64,
    /// Set when the span runs from a later point to an earlier one.
    pub invert: bool,
    /// Absolute day count of the span, when known.
    ///
    /// Filled in by the difference operation; `None` on intervals built by
    /// hand.
    pub days: Option<i64>,
    /// The span expresses relative weekday motion ("next Tuesday") and must
    /// be interpreted by an external relative-date resolver.
    pub weekday_relative: bool,
    /// The span expresses non-linear relative motion ("first day of next
    /// month") and must be interpreted by an external relative-date
    /// resolver.
    pub special_relative: bool,
}

impl Interval {
    /// Creates an interval from component magnitudes.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::NegativeComponent`] for any negative
    /// component; direction is expressed with [`Interval::inverted`].
    pub fn new(y: i64, m: i64, d: i64, h: i64, i: i64, s: i64, us: i64) -> Result<Self, ArithError> {
        for (field, value) in [
            ("y", y),
            ("m", m),
            ("d", d),
            ("h", h),
            ("i", i),
            ("s", s),
            ("us", us),
        ] {
            if value < 0 {
                return Err(ArithError::NegativeComponent { field, value });
            }
        }
        Ok(Self {
            y,
            m,
            d,
            h,
            i,
            s,
            us,
            ..Self::default()
        })
    }

    /// Flips the direction flag.
    pub fn inverted(mut self) -> Self {
        self.invert = !self.invert;
        self
    }

    /// Sets the absolute day count.
    pub fn with_days(mut self, days: i64) -> Self {
        self.days = Some(days);
        self
    }

    /// Marks the span as weekday-relative.
    pub fn with_weekday_relative(mut self) -> Self {
        self.weekday_relative = true;
        self
    }

    /// Marks the span as special-relative.
    pub fn with_special_relative(mut self) -> Self {
        self.special_relative = true;
        self
    }

    /// Returns true when the span cannot be applied as plain field
    /// arithmetic and must go to the external relative-date resolver.
    pub fn requires_resolver(&self) -> bool {
        self.weekday_relative || self.special_relative
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArithError;

    #[test]
    fn new_valid() {
        let iv = Interval::new(1, 2, 3, 4, 5, 6, 7).unwrap();
        assert_eq!((iv.y, iv.m, iv.d, iv.h, iv.i, iv.s, iv.us), (1, 2, 3, 4, 5, 6, 7));
        assert!(!iv.invert);
        assert_eq!(iv.days, None);
        assert!(!iv.requires_resolver());
    }

    #[test]
    fn new_rejects_negative() {
        assert_eq!(
            Interval::new(0, 0, 0, -1, 0, 0, 0).unwrap_err(),
            ArithError::NegativeComponent {
                field: "h",
                value: -1
            }
        );
        assert_eq!(
            Interval::new(0, 0, 0, 0, 0, 0, -500000).unwrap_err(),
            ArithError::NegativeComponent {
                field: "us",
                value: -500000
            }
        );
    }

    #[test]
    fn inverted_flips() {
        let iv = Interval::new(0, 0, 1, 0, 0, 0, 0).unwrap().inverted();
        assert!(iv.invert);
        assert!(!iv.clone().inverted().invert);
    }

    #[test]
    fn builder_flags() {
        let iv = Interval::default().with_weekday_relative();
        assert!(iv.requires_resolver());
        let iv = Interval::default().with_special_relative();
        assert!(iv.requires_resolver());
    }

    #[test]
    fn with_days() {
        assert_eq!(Interval::default().with_days(5).days, Some(5));
    }

    #[test]
    fn default_is_zero() {
        let iv = Interval::default();
        assert_eq!((iv.y, iv.m, iv.d, iv.h, iv.i, iv.s, iv.us), (0, 0, 0, 0, 0, 0, 0));
        assert!(!iv.invert);
        assert_eq!(iv.days, None);
    }
}
