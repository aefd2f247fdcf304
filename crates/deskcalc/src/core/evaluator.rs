//! AST evaluator and result formatting

use crate::core::operations::check_finite;
use crate::core::parser::{AstNode, Parser};
use crate::core::CalcResult;

/// Evaluator for AST expressions
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an AST node and returns the result
    ///
    /// Chains are folded left to right in a loop, so recursion depth is
    /// bounded by the grammar levels and not by expression length.
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            AstNode::Number(n) => check_finite(*n),
            AstNode::Negate(inner) => self.evaluate(inner).map(|v| -v),
            AstNode::Chain { first, rest } => {
                rest.iter().try_fold(self.evaluate(first)?, |acc, (op, operand)| {
                    op.apply(acc, self.evaluate(operand)?)
                })
            }
        }
    }

    /// Evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        self.evaluate(&ast)
    }
}

/// Formats a value the way it is written back into the current buffer
///
/// Integral values have no fractional part and negative zero prints as `0`.
/// The output never uses exponent notation, so it always tokenizes again.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, Operator};

    // ===== Basic evaluation tests =====

    #[test]
    fn test_evaluate_number() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate(&AstNode::number(42.0)), Ok(42.0));
    }

    #[test]
    fn test_evaluate_negate() {
        let eval = Evaluator::new();
        let ast = AstNode::negate(AstNode::number(5.0));
        assert_eq!(eval.evaluate(&ast), Ok(-5.0));
    }

    #[test]
    fn test_evaluate_nested_expression() {
        let eval = Evaluator::default();
        // (2 + 3) * 4 = 20
        let sum = AstNode::chain(AstNode::number(2.0), vec![(Operator::Add, AstNode::number(3.0))]);
        let ast = AstNode::chain(sum, vec![(Operator::Multiply, AstNode::number(4.0))]);
        assert_eq!(eval.evaluate(&ast), Ok(20.0));
    }

    #[test]
    fn test_evaluate_non_finite_literal() {
        let eval = Evaluator::new();
        assert_eq!(
            eval.evaluate(&AstNode::number(f64::INFINITY)),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_evaluate_error_propagates_from_right() {
        let eval = Evaluator::new();
        // 5 + (10 / 0)
        let quotient = AstNode::chain(
            AstNode::number(10.0),
            vec![(Operator::Divide, AstNode::number(0.0))],
        );
        let ast = AstNode::chain(AstNode::number(5.0), vec![(Operator::Add, quotient)]);
        assert_eq!(eval.evaluate(&ast), Err(CalcError::DivisionByZero));
    }

    // ===== String evaluation tests =====

    #[test]
    fn test_evaluate_str_all_operators() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("2+3"), Ok(5.0));
        assert_eq!(eval.evaluate_str("10-3"), Ok(7.0));
        assert_eq!(eval.evaluate_str("6*7"), Ok(42.0));
        assert_eq!(eval.evaluate_str("10/4"), Ok(2.5));
    }

    #[test]
    fn test_evaluate_str_precedence() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("2+3*4"), Ok(14.0));
        assert_eq!(eval.evaluate_str("20/4/5"), Ok(1.0));
        assert_eq!(eval.evaluate_str("8-3-2"), Ok(3.0));
    }

    #[test]
    fn test_evaluate_chain_left_to_right() {
        let eval = Evaluator::new();
        let ast = AstNode::chain(
            AstNode::number(100.0),
            vec![
                (Operator::Divide, AstNode::number(10.0)),
                (Operator::Multiply, AstNode::number(3.0)),
                (Operator::Divide, AstNode::number(2.0)),
            ],
        );
        assert_eq!(eval.evaluate(&ast), Ok(15.0));
    }

    #[test]
    fn test_evaluate_chain_stops_at_first_error() {
        let eval = Evaluator::new();
        let ast = AstNode::chain(
            AstNode::number(1.0),
            vec![
                (Operator::Divide, AstNode::number(0.0)),
                (Operator::Multiply, AstNode::number(f64::INFINITY)),
            ],
        );
        assert_eq!(eval.evaluate(&ast), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_evaluate_str_long_chains() {
        let eval = Evaluator::new();
        let sum = format!("{}1", "1+".repeat(100_000));
        assert_eq!(eval.evaluate_str(&sum), Ok(100_001.0));

        let product = format!("{}1", "1*".repeat(100_000));
        assert_eq!(eval.evaluate_str(&product), Ok(1.0));
    }

    #[test]
    fn test_evaluate_str_signs() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("-3+2"), Ok(-1.0));
        assert_eq!(eval.evaluate_str("5+-3"), Ok(2.0));
        assert_eq!(eval.evaluate_str("5*-2"), Ok(-10.0));
    }

    #[test]
    fn test_evaluate_str_division_by_zero() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("1/0"), Err(CalcError::DivisionByZero));
        assert_eq!(eval.evaluate_str("0/0"), Err(CalcError::DivisionByZero));
        assert_eq!(eval.evaluate_str("1/0.0"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_evaluate_str_division_by_zero_expression() {
        let eval = Evaluator::new();
        // divisor is the unary operand only: 1/2-2 is (1/2)-2, not 1/(2-2)
        assert_eq!(eval.evaluate_str("1/2-2"), Ok(-1.5));
        assert_eq!(eval.evaluate_str("3/-0"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_evaluate_str_invalid() {
        let eval = Evaluator::new();
        assert!(matches!(
            eval.evaluate_str("5+"),
            Err(CalcError::InvalidExpression(_))
        ));
        assert!(matches!(
            eval.evaluate_str(""),
            Err(CalcError::InvalidExpression(_))
        ));
        assert!(matches!(
            eval.evaluate_str("1.2.3+1"),
            Err(CalcError::InvalidExpression(_))
        ));
    }

    #[test]
    fn test_evaluate_str_overflow() {
        let eval = Evaluator::new();
        let big = format!("1{}", "0".repeat(300));
        assert_eq!(
            eval.evaluate_str(&format!("{big}*{big}")),
            Err(CalcError::Overflow)
        );
    }

    // ===== Formatting tests =====

    #[test]
    fn test_format_integral() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(2.0), "2");
    }

    #[test]
    fn test_format_fractional() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_large_and_small_without_exponent() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e-7), "0.0000001");
    }

    #[test]
    fn test_formatted_results_reparse() {
        let eval = Evaluator::new();
        for value in [2.5, -1.5, 1e20, 1e-7, 123_456.789, -0.0] {
            let text = format_number(value);
            assert_eq!(eval.evaluate_str(&text), Ok(value));
        }
    }
}
