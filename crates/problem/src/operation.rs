use std::fmt;

/// The four operators a worksheet can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Display glyph. Multiplication and division use the Latin-1 signs
    /// (U+00D7 and U+00F7), which map one-to-one onto WinAnsi bytes in the
    /// renderer.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '\u{00D7}',
            Operator::Divide => '\u{00F7}',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One arithmetic fact: operands, operator and the expected result.
///
/// Immutable once constructed. `result` is always algebraically consistent
/// with `left`, `right` and `operator`; for division, `left == result * right`
/// by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    pub left: i64,
    pub right: i64,
    pub operator: Operator,
    pub result: i64,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left, self.operator, self.right, self.result
        )
    }
}
