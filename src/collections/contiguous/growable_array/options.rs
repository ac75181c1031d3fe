use std::cmp;

use tracing::debug;

use super::GrowableArray;
use crate::util::error::{ConfigError, InvalidGrowthFactor};
use crate::util::result::ResultExtension;

/// The capacity used by [`GrowableArray::new`] and [`ArrayOptions::new`].
pub const DEFAULT_CAP: usize = 10;

/// A validated multiplier used to compute the next capacity of a [`GrowableArray`]. The contained
/// factor is always finite and strictly greater than `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct GrowthFactor(f64);

impl GrowthFactor {
    /// The factor used by [`GrowableArray::new`].
    pub const DEFAULT: GrowthFactor = GrowthFactor(2.0);

    /// Validates `factor`, rejecting any value that wouldn't increase the capacity of an array.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowthFactor;
    /// assert_eq!(GrowthFactor::new(1.5).map(GrowthFactor::get), Ok(1.5));
    /// assert!(GrowthFactor::new(1.0).is_err());
    /// assert!(GrowthFactor::new(f64::NAN).is_err());
    /// ```
    pub fn new(factor: f64) -> Result<GrowthFactor, InvalidGrowthFactor> {
        // NaN fails the comparison as well.
        if factor.is_finite() && factor > 1.0 {
            Ok(GrowthFactor(factor))
        } else {
            debug!(factor, "rejected growth factor");
            Err(InvalidGrowthFactor { factor })
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }

    /// Computes the capacity that follows `cap`, which is `floor(cap * factor)`. If the product
    /// doesn't exceed `cap` (such as for a capacity of 0, or small capacities with a factor close to
    /// 1.0), `cap + 1` is used instead so that every step grows.
    ///
    /// # Examples
    /// ```
    /// # use linear_collections::collections::contiguous::GrowthFactor;
    /// assert_eq!(GrowthFactor::DEFAULT.next_cap(10), 20);
    /// assert_eq!(GrowthFactor::new(1.5).unwrap().next_cap(5), 7);
    /// assert_eq!(GrowthFactor::new(1.01).unwrap().next_cap(10), 11);
    /// assert_eq!(GrowthFactor::DEFAULT.next_cap(0), 1);
    /// ```
    pub fn next_cap(self, cap: usize) -> usize {
        // Float to int casts saturate, so huge capacities clamp to usize::MAX.
        let scaled = (cap as f64 * self.0) as usize;
        cmp::max(scaled, cap.saturating_add(1))
    }
}

impl Default for GrowthFactor {
    fn default() -> Self {
        GrowthFactor::DEFAULT
    }
}

impl TryFrom<f64> for GrowthFactor {
    type Error = InvalidGrowthFactor;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        GrowthFactor::new(value)
    }
}

impl From<GrowthFactor> for f64 {
    fn from(value: GrowthFactor) -> Self {
        value.0
    }
}

/// A builder struct for creating a [`GrowableArray`] with a custom initial capacity and growth
/// factor. Available via [`GrowableArray::options`].
///
/// The growth factor is only validated when [`build`](ArrayOptions::build) is called.
///
/// # Examples
/// ```
/// # use linear_collections::collections::contiguous::ArrayOptions;
/// let arr = ArrayOptions::new().cap(4).growth_factor(1.5).build().unwrap();
/// assert_eq!(arr.cap(), 4);
/// assert_eq!(arr.growth_factor().get(), 1.5);
///
/// assert!(ArrayOptions::new().growth_factor(0.5).build().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayOptions {
    pub(crate) cap: usize,
    pub(crate) growth_factor: f64,
}

impl ArrayOptions {
    pub const fn new() -> ArrayOptions {
        ArrayOptions {
            cap: DEFAULT_CAP,
            growth_factor: GrowthFactor::DEFAULT.get(),
        }
    }

    /// Sets the number of slots allocated up front.
    pub const fn cap(&mut self, value: usize) -> &mut Self {
        self.cap = value;
        self
    }

    /// Sets the multiplier applied to the capacity whenever the array runs out of room.
    pub const fn growth_factor(&mut self, value: f64) -> &mut Self {
        self.growth_factor = value;
        self
    }

    /// Creates an empty [`GrowableArray`] with the configured options.
    ///
    /// # Errors
    /// Returns [`InvalidGrowthFactor`] if the growth factor isn't a finite value greater than 1.0.
    ///
    /// # Panics
    /// Panics if the initial allocation would have a size that exceeds [`isize::MAX`] bytes. See
    /// [`try_build`](ArrayOptions::try_build) for a non-panicking alternative.
    pub fn build(&self) -> Result<GrowableArray, InvalidGrowthFactor> {
        let growth = GrowthFactor::new(self.growth_factor)?;
        Ok(GrowableArray::with_cap_and_growth(self.cap, growth).throw())
    }

    /// Creates an empty [`GrowableArray`] with the configured options, returning any error rather
    /// than panicking.
    pub fn try_build(&self) -> Result<GrowableArray, ConfigError> {
        let growth = GrowthFactor::new(self.growth_factor)?;
        Ok(GrowableArray::with_cap_and_growth(self.cap, growth)?)
    }
}

impl Default for ArrayOptions {
    fn default() -> Self {
        Self::new()
    }
}
