use std::ops::Add;

/// A directed, weighted connection between two vertices.
///
/// Two edges are equal iff all three fields match. The graph keeps
/// duplicate edges rather than de-duplicating them, so the same triple
/// may occur more than once in a vertex's outgoing list.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V, D> {
    pub from: V,
    pub to: V,
    pub distance: D,
}

/// Numeric contract for edge distances: a zero value, an additive
/// combine, an ordering, and a representable positive infinity.
///
/// Comparisons are exact — no epsilon tolerance is applied anywhere.
/// Integer types use their MAX as infinity; the solver never adds to a
/// distance that is already infinite, so the sentinel cannot overflow.
pub trait Measure: Copy + PartialOrd + Add<Output = Self> {
    /// The distance from a vertex to itself.
    fn zero() -> Self;

    /// The initial "unreached" distance estimate.
    fn infinity() -> Self;

    fn is_infinite(self) -> bool {
        self >= Self::infinity()
    }

    /// Lossy numeric view, used when averaging distances over many
    /// paths.
    fn as_f64(self) -> f64;
}

impl Measure for f64 {
    fn zero() -> Self {
        0.0
    }

    fn infinity() -> Self {
        f64::INFINITY
    }

    fn as_f64(self) -> f64 {
        self
    }
}

impl Measure for f32 {
    fn zero() -> Self {
        0.0
    }

    fn infinity() -> Self {
        f32::INFINITY
    }

    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Measure for i64 {
    fn zero() -> Self {
        0
    }

    fn infinity() -> Self {
        i64::MAX
    }

    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Measure for i32 {
    fn zero() -> Self {
        0
    }

    fn infinity() -> Self {
        i32::MAX
    }

    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}
