//! Expression rendering.
//!
//! Depth-first conversion of an expression tree to infix text: sum children
//! are joined by `" + "`, product children are concatenated directly, and
//! negation is a trailing apostrophe. Atomic operands (variables, constants
//! and negations of them) render bare; anything else is parenthesized
//! first. The result is deterministic for a fixed variable-name mapping.

use crate::expr::Expr;

/// Is the node printable inside a product or under a negation without
/// parentheses?
fn is_atomic(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Variable(_) | Expr::Constant(_) | Expr::Negation(_)
    )
}

/// Render an expression using the caller-supplied variable names,
/// indexed by the free-variable order the expression was built with.
pub fn render<S: AsRef<str>>(expr: &Expr, names: &[S]) -> String {
    match expr {
        Expr::Sum(children) => children
            .iter()
            .map(|c| render(c, names))
            .collect::<Vec<_>>()
            .join(" + "),
        Expr::Product(children) => children
            .iter()
            .map(|c| {
                if is_atomic(c) {
                    render(c, names)
                } else {
                    format!("({})", render(c, names))
                }
            })
            .collect(),
        Expr::Negation(inner) => match inner.as_ref() {
            Expr::Variable(_) | Expr::Constant(_) => format!("{}'", render(inner, names)),
            other => format!("({})'", render(other, names)),
        },
        Expr::Variable(index) => names[*index].as_ref().to_string(),
        Expr::Constant(value) => if *value { "1" } else { "0" }.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 3] = ["a", "b", "c"];

    fn v(i: usize) -> Expr {
        Expr::var(i)
    }

    #[test]
    fn test_atoms() {
        assert_eq!(render(&v(0), &NAMES), "a");
        assert_eq!(render(&Expr::Constant(false), &NAMES), "0");
        assert_eq!(render(&Expr::Constant(true), &NAMES), "1");
        assert_eq!(render(&Expr::not(v(2)), &NAMES), "c'");
    }

    #[test]
    fn test_sum_of_products() {
        let expr = Expr::sum(vec![
            Expr::product(vec![v(0), Expr::not(v(1))]),
            Expr::product(vec![v(1), v(2)]),
        ]);
        assert_eq!(render(&expr, &NAMES), "ab' + bc");
    }

    #[test]
    fn test_nested_sum_is_parenthesized() {
        let expr = Expr::product(vec![v(0), Expr::sum(vec![v(1), v(2)])]);
        assert_eq!(render(&expr, &NAMES), "a(b + c)");
    }

    #[test]
    fn test_negated_sum_is_parenthesized() {
        let expr = Expr::not(Expr::sum(vec![v(0), v(1)]));
        assert_eq!(render(&expr, &NAMES), "(a + b)'");
    }

    #[test]
    fn test_factored_product_of_sums() {
        let expr = Expr::product(vec![
            Expr::sum(vec![v(0), v(1)]),
            Expr::sum(vec![v(2), Expr::not(v(0))]),
        ]);
        assert_eq!(render(&expr, &NAMES), "(a + b)(c + a')");
    }
}
