//! Value and size constraints (PER-visible subset of X.680 constraints).

/// Value range of an INTEGER, `lb..=ub`, optionally extensible (`(lb..ub, ...)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    pub lb: i64,
    pub ub: i64,
    pub extensible: bool,
}

impl Constraint {
    pub const fn new(lb: i64, ub: i64) -> Self {
        Self {
            lb,
            ub,
            extensible: false,
        }
    }

    pub const fn extensible(lb: i64, ub: i64) -> Self {
        Self {
            lb,
            ub,
            extensible: true,
        }
    }

    /// Number of values in the root, `ub - lb + 1`.
    pub fn range(&self) -> u128 {
        if self.ub >= self.lb {
            (i128::from(self.ub) - i128::from(self.lb) + 1) as u128
        } else {
            0
        }
    }

    /// Width of the bit-field holding `value - lb` in unaligned PER.
    pub fn bits_needed(&self) -> usize {
        bits_for_range(self.range())
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.lb..=self.ub).contains(&value)
    }
}

/// Number of bits needed for a whole number in `0..range`.
pub(crate) fn bits_for_range(range: u128) -> usize {
    if range <= 1 {
        0
    } else {
        (128 - (range - 1).leading_zeros()) as usize
    }
}

/// Number of octets in the minimal non-negative binary encoding of `value`,
/// never less than one.
pub(crate) fn octets_for(value: u64) -> usize {
    (((64 - value.leading_zeros()) as usize).div_ceil(8)).max(1)
}

/// `SIZE(...)` constraint on a string or SEQUENCE OF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeConstraint {
    pub lb: usize,
    /// `None` for `SIZE(lb..MAX)`
    pub ub: Option<usize>,
    pub extensible: bool,
}

impl SizeConstraint {
    /// `SIZE(n)`
    pub const fn fixed(size: usize) -> Self {
        Self {
            lb: size,
            ub: Some(size),
            extensible: false,
        }
    }

    /// `SIZE(lb..ub)`
    pub const fn range(lb: usize, ub: usize) -> Self {
        Self {
            lb,
            ub: Some(ub),
            extensible: false,
        }
    }

    /// `SIZE(lb..ub, ...)`
    pub const fn range_ext(lb: usize, ub: usize) -> Self {
        Self {
            lb,
            ub: Some(ub),
            extensible: true,
        }
    }

    /// No upper bound
    pub const fn unbounded() -> Self {
        Self {
            lb: 0,
            ub: None,
            extensible: false,
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.ub == Some(self.lb)
    }

    /// True if `size` lies in the extension root.
    pub fn contains(&self, size: usize) -> bool {
        size >= self.lb && self.ub.map_or(true, |ub| size <= ub)
    }

    /// Whether the contents following the length are octet aligned in the
    /// aligned variant.
    ///
    /// Fixed-size strings of at most 16 bits are not aligned; an empty body
    /// is never padded.
    pub(crate) fn aligns_content(&self, size: usize, unit_bits: usize) -> bool {
        if size == 0 {
            return false;
        }
        if self.is_fixed() && self.contains(size) {
            return size * unit_bits > 16;
        }
        true
    }
}
