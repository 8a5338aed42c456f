//! Implicants: tri-state literal vectors and the adjacency join rule.

use std::fmt;

use crate::types::Literal;

/// A (possibly partial) variable assignment covering one or more minterms.
///
/// An implicant holds one [`Literal`] per free variable, in variable order.
/// A *minterm* is simply an implicant with no `DontCare` positions. The
/// `optional` flag marks implicants derived purely from don't-care minterms:
/// they may enlarge other implicants through joins but are never reported as
/// essential prime implicants themselves.
///
/// The optional flag of a joined implicant is determined by the set of
/// minterms it covers, so two implicants produced by different join paths
/// from the same inputs compare equal under the derived `Eq`/`Hash`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Implicant {
    literals: Vec<Literal>,
    optional: bool,
}

// Constructors
impl Implicant {
    pub fn new(literals: Vec<Literal>, optional: bool) -> Self {
        Self { literals, optional }
    }

    /// A required minterm (no don't-care origin).
    pub fn minterm(literals: Vec<Literal>) -> Self {
        Self::new(literals, false)
    }
}

// Getters
impl Implicant {
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Number of `One` literals; the join bucket key.
    pub fn one_count(&self) -> usize {
        self.literals.iter().filter(|&&l| l == Literal::One).count()
    }

    /// Number of `DontCare` literals; the generation level.
    pub fn dont_care_count(&self) -> usize {
        self.literals.iter().filter(|&&l| l.is_dont_care()).count()
    }
}

impl Implicant {
    /// Try to join two adjacent implicants.
    ///
    /// The join succeeds iff the vectors are identical except at exactly one
    /// position holding a `Zero`/`One` pair (in either order). In particular
    /// every `DontCare` must appear in both vectors at the same position.
    /// The result carries `DontCare` at the differing position and is
    /// optional only if both parents are.
    pub fn join(&self, other: &Self) -> Option<Implicant> {
        if self.len() != other.len() {
            return None;
        }
        let mut diff = None;
        for (i, (&a, &b)) in self.literals.iter().zip(&other.literals).enumerate() {
            if a == b {
                continue;
            }
            let swappable = matches!(
                (a, b),
                (Literal::Zero, Literal::One) | (Literal::One, Literal::Zero)
            );
            if !swappable || diff.is_some() {
                return None;
            }
            diff = Some(i);
        }
        let diff = diff?;
        let mut literals = self.literals.clone();
        literals[diff] = Literal::DontCare;
        Some(Implicant::new(literals, self.optional && other.optional))
    }

    /// Does this implicant cover the given fully specified assignment?
    ///
    /// Every non-don't-care literal must agree with the assignment.
    pub fn covers(&self, assignment: &[Literal]) -> bool {
        self.literals
            .iter()
            .zip(assignment)
            .all(|(&l, &a)| l.is_dont_care() || l == a)
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lit in &self.literals {
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pattern;

    fn imp(s: &str) -> Implicant {
        Implicant::minterm(pattern(s).unwrap())
    }

    #[test]
    fn test_counts() {
        let i = imp("1-10");
        assert_eq!(i.one_count(), 2);
        assert_eq!(i.dont_care_count(), 1);
        assert_eq!(i.to_string(), "1-10");
    }

    #[test]
    fn test_join_single_difference() {
        let joined = imp("010").join(&imp("011")).unwrap();
        assert_eq!(joined.to_string(), "01-");
        assert!(!joined.is_optional());

        // order-independent
        let joined = imp("011").join(&imp("010")).unwrap();
        assert_eq!(joined.to_string(), "01-");
    }

    #[test]
    fn test_join_rejects_multiple_differences() {
        assert!(imp("00").join(&imp("11")).is_none());
        assert!(imp("000").join(&imp("011")).is_none());
    }

    #[test]
    fn test_join_requires_matching_dont_cares() {
        let a = imp("0-1");
        let b = imp("001");
        assert!(a.join(&b).is_none());
        let c = imp("1-1");
        assert_eq!(a.join(&c).unwrap().to_string(), "--1");
    }

    #[test]
    fn test_join_optional_flag() {
        let req = Implicant::new(pattern("01").unwrap(), false);
        let opt = Implicant::new(pattern("11").unwrap(), true);
        assert!(!req.join(&opt).unwrap().is_optional());
        let opt2 = Implicant::new(pattern("01").unwrap(), true);
        assert!(opt2.join(&opt).unwrap().is_optional());
    }

    #[test]
    fn test_covers() {
        let i = Implicant::new(pattern("1-0").unwrap(), false);
        assert!(i.covers(&pattern("110").unwrap()));
        assert!(i.covers(&pattern("100").unwrap()));
        assert!(!i.covers(&pattern("101").unwrap()));
        assert!(!i.covers(&pattern("010").unwrap()));
    }

    #[test]
    fn test_structural_equality_ignores_origin() {
        let from_low = imp("010").join(&imp("011")).unwrap();
        let direct = Implicant::minterm(pattern("01-").unwrap());
        assert_eq!(from_low, direct);
    }
}
