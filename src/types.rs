//! The tri-state cell value shared by observation tables and implicants.

use std::fmt;

use crate::error::{Error, Result};

/// One position of a table row or an implicant.
///
/// A `Literal` is three-valued: a definite `Zero` or `One`, or `DontCare`
/// when the observed output was ambiguous or the position is irrelevant.
/// Joining two implicants introduces `DontCare` at the position where they
/// differ; the join engine exploits don't-cares injected by the excitation
/// encoder to produce smaller covers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Literal {
    Zero,
    One,
    DontCare,
}

impl Literal {
    /// Returns the definite boolean value, or `None` for a don't-care.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Literal::Zero => Some(false),
            Literal::One => Some(true),
            Literal::DontCare => None,
        }
    }

    pub fn is_dont_care(self) -> bool {
        matches!(self, Literal::DontCare)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        if value {
            Literal::One
        } else {
            Literal::Zero
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Literal::Zero => '0',
            Literal::One => '1',
            Literal::DontCare => '-',
        };
        write!(f, "{}", c)
    }
}

/// Parses a row pattern like `"01-0"` into literals.
///
/// `0` and `1` are definite values, `-` is a don't-care. Any other
/// character is rejected.
pub fn pattern(s: &str) -> Result<Vec<Literal>> {
    s.chars()
        .map(|ch| match ch {
            '0' => Ok(Literal::Zero),
            '1' => Ok(Literal::One),
            '-' => Ok(Literal::DontCare),
            _ => Err(Error::BadPatternChar { ch }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_roundtrip() {
        let lits = pattern("01-0").unwrap();
        assert_eq!(
            lits,
            vec![Literal::Zero, Literal::One, Literal::DontCare, Literal::Zero]
        );
        let shown: String = lits.iter().map(|l| l.to_string()).collect();
        assert_eq!(shown, "01-0");
    }

    #[test]
    fn test_pattern_rejects_garbage() {
        assert!(pattern("01x").is_err());
    }

    #[test]
    fn test_as_bool() {
        assert_eq!(Literal::Zero.as_bool(), Some(false));
        assert_eq!(Literal::One.as_bool(), Some(true));
        assert_eq!(Literal::DontCare.as_bool(), None);
        assert_eq!(Literal::from(true), Literal::One);
    }
}
