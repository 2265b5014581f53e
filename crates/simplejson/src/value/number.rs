//! Numbers: the integer and floating point sub-kinds

/// A JSON number.
///
/// The sub-kind is preserved so that values built from integers come back out
/// as integers. Equality ignores it: two numbers are equal when their double
/// representations are equal.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// 32-bit signed integer
    Int(i32),
    /// 64-bit floating point
    Double(f64),
}

impl Number {
    /// Integer value; doubles are truncated toward zero (saturating, NaN is 0)
    pub fn as_int(self) -> i32 {
        match self {
            Number::Int(n) => n,
            Number::Double(d) => d as i32,
        }
    }

    /// Double value; integers are widened losslessly
    pub fn as_double(self) -> f64 {
        match self {
            Number::Int(n) => f64::from(n),
            Number::Double(d) => d,
        }
    }

    /// Check if this number was built from an integer
    pub fn is_int(self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Check if this number was built from a floating point value
    pub fn is_double(self) -> bool {
        matches!(self, Number::Double(_))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.as_double() == other.as_double()
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Int(n)
    }
}

impl From<f64> for Number {
    fn from(d: f64) -> Self {
        Number::Double(d)
    }
}
