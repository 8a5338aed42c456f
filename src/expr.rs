//! Boolean expression trees.
//!
//! [`Expr`] is the closed union of node kinds the pipeline produces: n-ary
//! sums and products, negation, variables (by free-variable index) and
//! constants. Every traversal matches exhaustively, so adding a node kind
//! is a compile-time event.

use std::cmp::Ordering;

use crate::implicant::Implicant;
use crate::types::Literal;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expr {
    Sum(Vec<Expr>),
    Product(Vec<Expr>),
    Negation(Box<Expr>),
    Variable(usize),
    Constant(bool),
}

// Constructors
impl Expr {
    pub fn var(index: usize) -> Self {
        Expr::Variable(index)
    }

    pub fn constant(value: bool) -> Self {
        Expr::Constant(value)
    }

    /// Negation, collapsing a double negation.
    pub fn not(value: Self) -> Self {
        match value {
            Expr::Negation(inner) => *inner,
            other => Expr::Negation(Box::new(other)),
        }
    }

    pub fn sum(children: Vec<Expr>) -> Self {
        Expr::Sum(children)
    }

    pub fn product(children: Vec<Expr>) -> Self {
        Expr::Product(children)
    }
}

impl Expr {
    /// Build the sum-of-products expression for a list of essential prime
    /// implicants.
    ///
    /// Each implicant becomes a product over its fixed positions (`One` as
    /// the variable, `Zero` as its negation, don't-cares skipped). An
    /// implicant with no fixed position is the constant `1`; an empty list
    /// is the constant `0`; a single-term sum collapses to the term.
    pub fn from_implicants(implicants: &[Implicant]) -> Self {
        if implicants.is_empty() {
            return Expr::Constant(false);
        }

        let mut terms = Vec::with_capacity(implicants.len());
        for imp in implicants {
            let mut factors = Vec::new();
            for (index, &lit) in imp.literals().iter().enumerate() {
                match lit {
                    Literal::One => factors.push(Expr::var(index)),
                    Literal::Zero => factors.push(Expr::not(Expr::var(index))),
                    Literal::DontCare => {}
                }
            }
            if factors.is_empty() {
                terms.push(Expr::Constant(true));
            } else {
                terms.push(Expr::Product(factors));
            }
        }

        if terms.len() == 1 {
            terms.pop().unwrap()
        } else {
            Expr::Sum(terms)
        }
    }

    /// Count variable occurrences, including negated ones.
    pub fn literal_count(&self) -> usize {
        match self {
            Expr::Sum(children) | Expr::Product(children) => {
                children.iter().map(Expr::literal_count).sum()
            }
            Expr::Negation(inner) => inner.literal_count(),
            Expr::Variable(_) => 1,
            Expr::Constant(_) => 0,
        }
    }

    /// Evaluate under a fully specified assignment (indexed by variable).
    pub fn eval(&self, assignment: &[bool]) -> bool {
        match self {
            Expr::Sum(children) => children.iter().any(|c| c.eval(assignment)),
            Expr::Product(children) => children.iter().all(|c| c.eval(assignment)),
            Expr::Negation(inner) => !inner.eval(assignment),
            Expr::Variable(index) => assignment[*index],
            Expr::Constant(value) => *value,
        }
    }

    /// Structural equivalence: order-independent for sum and product
    /// children, order-sensitive everywhere else.
    pub fn structural_eq(&self, other: &Expr) -> bool {
        canonical_cmp(self, other) == Ordering::Equal
    }
}

fn rank(expr: &Expr) -> u8 {
    match expr {
        Expr::Constant(_) => 0,
        Expr::Variable(_) => 1,
        Expr::Negation(_) => 2,
        Expr::Product(_) => 3,
        Expr::Sum(_) => 4,
    }
}

/// Total order on expressions up to sum/product child reordering.
///
/// Children of commutative nodes are compared as sorted multisets, so two
/// expressions compare `Equal` iff they are structurally equivalent.
fn canonical_cmp(a: &Expr, b: &Expr) -> Ordering {
    match (a, b) {
        (Expr::Constant(x), Expr::Constant(y)) => x.cmp(y),
        (Expr::Variable(x), Expr::Variable(y)) => x.cmp(y),
        (Expr::Negation(x), Expr::Negation(y)) => canonical_cmp(x, y),
        (Expr::Product(xs), Expr::Product(ys)) | (Expr::Sum(xs), Expr::Sum(ys)) => {
            cmp_children(xs, ys)
        }
        _ => rank(a).cmp(&rank(b)),
    }
}

fn cmp_children(xs: &[Expr], ys: &[Expr]) -> Ordering {
    let mut xs: Vec<&Expr> = xs.iter().collect();
    let mut ys: Vec<&Expr> = ys.iter().collect();
    xs.sort_by(|p, q| canonical_cmp(p, q));
    ys.sort_by(|p, q| canonical_cmp(p, q));
    xs.len().cmp(&ys.len()).then_with(|| {
        xs.iter()
            .zip(&ys)
            .map(|(p, q)| canonical_cmp(p, q))
            .find(|&ord| ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    })
}
