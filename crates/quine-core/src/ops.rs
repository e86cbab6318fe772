use std::fmt;

/// Binary operators over boolean functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    And,
    Or,
    Xor,
}

impl BinOp {
    /// The operator denoted by `c`, if any.
    pub fn from_char(c: char) -> Option<BinOp> {
        match c {
            '&' => Some(BinOp::And),
            '|' => Some(BinOp::Or),
            '^' => Some(BinOp::Xor),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::And => '&',
            BinOp::Or => '|',
            BinOp::Xor => '^',
        }
    }

    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            BinOp::And => lhs && rhs,
            BinOp::Or => lhs || rhs,
            BinOp::Xor => lhs != rhs,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Unary operators over boolean functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
}

impl UnaryOp {
    pub fn from_char(c: char) -> Option<UnaryOp> {
        match c {
            '!' => Some(UnaryOp::Not),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            UnaryOp::Not => '!',
        }
    }

    pub fn apply(self, value: bool) -> bool {
        match self {
            UnaryOp::Not => !value,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_truth_values() {
        assert!(!BinOp::And.apply(false, false));
        assert!(!BinOp::And.apply(false, true));
        assert!(!BinOp::And.apply(true, false));
        assert!(BinOp::And.apply(true, true));
    }

    #[test]
    fn test_or_truth_values() {
        assert!(!BinOp::Or.apply(false, false));
        assert!(BinOp::Or.apply(false, true));
        assert!(BinOp::Or.apply(true, false));
        assert!(BinOp::Or.apply(true, true));
    }

    #[test]
    fn test_xor_truth_values() {
        assert!(!BinOp::Xor.apply(false, false));
        assert!(BinOp::Xor.apply(false, true));
        assert!(BinOp::Xor.apply(true, false));
        assert!(!BinOp::Xor.apply(true, true));
    }

    #[test]
    fn test_not_truth_values() {
        assert!(UnaryOp::Not.apply(false));
        assert!(!UnaryOp::Not.apply(true));
    }

    #[test]
    fn test_symbol_round_trip() {
        for op in [BinOp::And, BinOp::Or, BinOp::Xor] {
            assert_eq!(BinOp::from_char(op.symbol()), Some(op));
        }
        assert_eq!(UnaryOp::from_char('!'), Some(UnaryOp::Not));
        assert_eq!(BinOp::from_char('!'), None);
        assert_eq!(UnaryOp::from_char('&'), None);
    }
}
