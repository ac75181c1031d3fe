use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Operation requires a collection with at least one element!")]
pub struct EmptyContainer;

/// Returned when a rotation is requested on an array with no elements, where the rotation offset
/// can't be reduced modulo the length.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to rotate a collection with no elements!")]
pub struct InvalidState;

/// A growth factor that would never increase the capacity of an array. Only finite factors
/// strictly greater than `1.0` are accepted.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq)]
#[display("Growth factor {factor} must be a finite value greater than 1.0!")]
pub struct InvalidGrowthFactor {
    pub factor: f64,
}

#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum IndexOrCapOverflow {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityOverflow(CapacityOverflow),
}

/// Any error that can occur while building a collection from a set of options.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidGrowthFactor(InvalidGrowthFactor),
    CapacityOverflow(CapacityOverflow),
}
