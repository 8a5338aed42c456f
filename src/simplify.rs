//! Algebraic factoring of sum-of-products expressions.
//!
//! # Algorithm
//!
//! The two-level cover coming out of the join engine is minimal in terms,
//! but repeats literals across terms. This pass shrinks the literal count by
//! pulling shared factors out of groups of terms:
//!
//! ```text
//! ac + ad + bc + bd  =>  a(c + d) + bc + bd  =>  (c + d)(b + a)
//! ```
//!
//! One step works as follows. For every product term of the sum (ascending
//! index) and every non-empty subset of its factors (subset sizes ascending,
//! subsets in index order), collect the later terms that contain every
//! factor of the subset, comparing factors by structural equivalence. Each
//! such candidate is scored as the number of matching terms (including the
//! base term) times the subset size, and the best-scoring candidate wins;
//! a tie keeps the candidate discovered first. That fixed iteration order
//! makes the output deterministic, so it must not be "improved".
//!
//! The winning subset is removed from every matching term, the matching
//! terms are replaced by a single `Product(subset..., Sum(remainders))`
//! placed at the front of the sum, the remainder sum is factored
//! recursively, and the whole procedure repeats until a full pass finds no
//! candidate. Termination is guaranteed: every application strictly
//! decreases the total literal count.

use itertools::Itertools;
use log::debug;

use crate::expr::Expr;

/// Factor a sum-of-products expression to a fixpoint.
///
/// Anything other than a `Sum` is already a single term and is returned
/// unchanged. The result is logically equivalent to the input and never has
/// more literals; running the pass on its own output changes nothing.
pub fn simplify(expr: &Expr) -> Expr {
    match expr {
        Expr::Sum(terms) => simplify_sum(terms.clone()),
        other => other.clone(),
    }
}

/// One factoring opportunity: pull `factors` (indices into the base term's
/// factor list) out of the base term and every term in `matches`.
struct Factoring {
    base: usize,
    factor_indices: Vec<usize>,
    /// Later terms sharing all selected factors, ascending.
    matches: Vec<usize>,
    score: usize,
}

fn simplify_sum(mut terms: Vec<Expr>) -> Expr {
    while let Some(found) = find_best_factoring(&terms) {
        debug!(
            "factoring {} shared factor(s) out of {} terms (score {})",
            found.factor_indices.len(),
            found.matches.len() + 1,
            found.score
        );
        terms = apply_factoring(terms, found);
        if terms.len() == 1 {
            return terms.pop().unwrap();
        }
    }
    match terms.len() {
        0 => Expr::Constant(false),
        1 => terms.pop().unwrap(),
        _ => Expr::Sum(terms),
    }
}

/// The factor list a term exposes for matching: a product's children, or
/// the term itself as a single factor.
fn factors_of(term: &Expr) -> &[Expr] {
    match term {
        Expr::Product(factors) => factors,
        other => std::slice::from_ref(other),
    }
}

fn find_best_factoring(terms: &[Expr]) -> Option<Factoring> {
    let mut best: Option<Factoring> = None;

    for (base, term) in terms.iter().enumerate() {
        // Only product terms can donate factors.
        let Expr::Product(factors) = term else {
            continue;
        };

        // For each factor, the later terms that also contain it. Earlier
        // terms were already paired with this one when they were the base.
        let mut shares: Vec<(usize, Vec<usize>)> = Vec::new();
        for (fi, factor) in factors.iter().enumerate() {
            let sharing: Vec<usize> = (base + 1..terms.len())
                .filter(|&tj| {
                    factors_of(&terms[tj])
                        .iter()
                        .any(|f| f.structural_eq(factor))
                })
                .collect();
            if !sharing.is_empty() {
                shares.push((fi, sharing));
            }
        }

        // Subset sizes ascending, subsets in lexicographic index order; the
        // first-wins tie-break below depends on this enumeration order.
        for size in 1..=shares.len() {
            for combo in (0..shares.len()).combinations(size) {
                let mut matches = shares[combo[0]].1.clone();
                for &ci in &combo[1..] {
                    matches.retain(|t| shares[ci].1.contains(t));
                }
                if matches.is_empty() {
                    continue;
                }
                let score = (matches.len() + 1) * size;
                // Strictly greater: ties keep the first candidate found.
                if best.as_ref().map_or(true, |b| score > b.score) {
                    best = Some(Factoring {
                        base,
                        factor_indices: combo.iter().map(|&ci| shares[ci].0).collect(),
                        matches,
                        score,
                    });
                }
            }
        }
    }
    best
}

fn apply_factoring(terms: Vec<Expr>, found: Factoring) -> Vec<Expr> {
    let pulled: Vec<Expr> = {
        let base_factors = factors_of(&terms[found.base]);
        found
            .factor_indices
            .iter()
            .map(|&fi| base_factors[fi].clone())
            .collect()
    };

    let mut remainders = Vec::new();
    let mut untouched = Vec::new();
    for (ti, term) in terms.into_iter().enumerate() {
        if ti == found.base || found.matches.contains(&ti) {
            remainders.push(strip_factors(&term, &pulled));
        } else {
            untouched.push(term);
        }
    }

    // The extracted remainder sum is factored recursively before it is
    // plugged back in as the last factor of the new product.
    let mut product = pulled;
    product.push(simplify_sum(remainders));

    let mut new_terms = Vec::with_capacity(untouched.len() + 1);
    new_terms.push(Expr::Product(product));
    new_terms.extend(untouched);
    new_terms
}

/// Remove every factor equivalent to one of `pulled` from a term.
fn strip_factors(term: &Expr, pulled: &[Expr]) -> Expr {
    let mut remaining: Vec<Expr> = factors_of(term)
        .iter()
        .filter(|f| !pulled.iter().any(|p| p.structural_eq(f)))
        .cloned()
        .collect();
    match remaining.len() {
        0 => Expr::Constant(true),
        1 => remaining.pop().unwrap(),
        _ => Expr::Product(remaining),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;

    use test_log::test;

    fn v(i: usize) -> Expr {
        Expr::var(i)
    }

    fn prod(children: Vec<Expr>) -> Expr {
        Expr::product(children)
    }

    const NAMES: [&str; 4] = ["a", "b", "c", "d"];

    #[test]
    fn test_equal_scores_keep_first_candidate() {
        // ab + ac + bc: pulling a (score 2) and pulling b (score 2) tie;
        // the candidate found first wins, so a comes out.
        let sum = Expr::sum(vec![
            prod(vec![v(0), v(1)]),
            prod(vec![v(0), v(2)]),
            prod(vec![v(1), v(2)]),
        ]);
        assert_eq!(render(&simplify(&sum), &NAMES), "a(b + c) + bc");
    }

    #[test]
    fn test_distributive_factoring() {
        // ac + ad + bc + bd (8 literals) factors down to 4 literals.
        let sum = Expr::sum(vec![
            prod(vec![v(0), v(2)]),
            prod(vec![v(0), v(3)]),
            prod(vec![v(1), v(2)]),
            prod(vec![v(1), v(3)]),
        ]);
        let simplified = simplify(&sum);
        assert_eq!(simplified.literal_count(), 4);
        assert_eq!(render(&simplified, &NAMES), "(c + d)(b + a)");

        // logically equivalent to (a+b)(c+d) on all assignments
        for bits in 0..16u32 {
            let assignment: Vec<bool> = (0..4).map(|i| bits & (1 << i) != 0).collect();
            assert_eq!(sum.eval(&assignment), simplified.eval(&assignment));
        }
    }

    #[test]
    fn test_no_shared_factors_is_untouched() {
        let sum = Expr::sum(vec![prod(vec![v(0), v(1)]), prod(vec![v(2), v(3)])]);
        assert_eq!(simplify(&sum), sum);
    }

    #[test]
    fn test_single_term_passthrough() {
        let term = prod(vec![v(0), Expr::not(v(1))]);
        assert_eq!(simplify(&term), term);
        assert_eq!(simplify(&Expr::Constant(true)), Expr::Constant(true));
    }

    #[test]
    fn test_idempotent() {
        let sum = Expr::sum(vec![
            prod(vec![v(0), v(2)]),
            prod(vec![v(0), v(3)]),
            prod(vec![v(1), v(2)]),
        ]);
        let once = simplify(&sum);
        let twice = simplify(&once);
        assert_eq!(once, twice);
        assert_eq!(once.literal_count(), twice.literal_count());
    }

    #[test]
    fn test_deterministic() {
        let sum = Expr::sum(vec![
            prod(vec![v(0), v(2)]),
            prod(vec![v(0), v(3)]),
            prod(vec![v(1), v(2)]),
            prod(vec![v(1), v(3)]),
        ]);
        let first = render(&simplify(&sum), &NAMES);
        let second = render(&simplify(&sum), &NAMES);
        assert_eq!(first, second);
    }

    #[test]
    fn test_negated_factors_are_shared() {
        // a'b + a'c => a'(b + c)
        let sum = Expr::sum(vec![
            prod(vec![Expr::not(v(0)), v(1)]),
            prod(vec![Expr::not(v(0)), v(2)]),
        ]);
        let simplified = simplify(&sum);
        assert_eq!(render(&simplified, &NAMES), "a'(b + c)");
        assert_eq!(simplified.literal_count(), 3);
    }

    #[test]
    fn test_superset_term_fully_extracted() {
        // ab + abc: both factors of the base can be pulled, leaving the
        // base term as the constant 1.
        let sum = Expr::sum(vec![prod(vec![v(0), v(1)]), prod(vec![v(0), v(1), v(2)])]);
        let simplified = simplify(&sum);
        assert_eq!(render(&simplified, &NAMES), "ab(1 + c)");
        for bits in 0..8u32 {
            let assignment: Vec<bool> = (0..3).map(|i| bits & (1 << i) != 0).collect();
            assert_eq!(sum.eval(&assignment), simplified.eval(&assignment));
        }
    }
}
