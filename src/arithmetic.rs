use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::utils::format_number;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Real-number division. `-0.0` counts as zero.
pub fn divide(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }

    Ok(a / b)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    pub fn to_symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    pub fn apply(&self, left: f64, right: f64) -> Result<f64, ArithmeticError> {
        Ok(match self {
            Self::Add => add(left, right),
            Self::Sub => subtract(left, right),
            Self::Mul => multiply(left, right),
            Self::Div => divide(left, right)?,
        })
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_symbol())
    }
}

/// A single calculation, displayed as `A OPERATOR B`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    pub left: f64,
    pub operator: BinaryOperator,
    pub right: f64,
}

impl Expression {
    pub fn new(left: f64, operator: BinaryOperator, right: f64) -> Self {
        Self {
            left,
            operator,
            right,
        }
    }

    pub fn evaluate(&self) -> Result<f64, ArithmeticError> {
        self.operator.apply(self.left, self.right)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            format_number(self.left),
            self.operator,
            format_number(self.right)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(add(10.0, 5.0), 15.0);
        assert_eq!(subtract(10.0, 5.0), 5.0);
        assert_eq!(multiply(10.0, 5.0), 50.0);
        assert_eq!(divide(10.0, 4.0), Ok(2.5));
        assert_eq!(add(0.1, 0.2), 0.1 + 0.2);
        assert_eq!(subtract(-3.5, 1.25), -4.75);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(1.0, 0.0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(divide(0.0, 0.0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(divide(-7.0, -0.0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(
            ArithmeticError::DivisionByZero.to_string(),
            "Cannot divide by zero"
        );
    }

    #[test]
    fn test_divide_tiny_divisor_is_not_zero() {
        assert!(divide(1.0, f64::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn test_non_finite_operands() {
        assert_eq!(divide(f64::NAN, 0.0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(divide(f64::INFINITY, 0.0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(divide(1.0, f64::INFINITY), Ok(0.0));
        assert_eq!(divide(-1.0, f64::INFINITY), Ok(-0.0));
        assert!(divide(f64::INFINITY, f64::INFINITY).unwrap().is_nan());
        assert!(divide(f64::NAN, 2.0).unwrap().is_nan());

        assert_eq!(add(f64::INFINITY, 1.0), f64::INFINITY);
        assert!(add(f64::INFINITY, f64::NEG_INFINITY).is_nan());
        assert!(subtract(f64::INFINITY, f64::INFINITY).is_nan());
        assert_eq!(subtract(f64::NEG_INFINITY, 1.0), f64::NEG_INFINITY);
        assert!(multiply(f64::INFINITY, 0.0).is_nan());
        assert_eq!(multiply(f64::MAX, 2.0), f64::INFINITY);
        assert!(multiply(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_operator_symbols() {
        for symbol in ["+", "-", "*", "/"] {
            let operator = BinaryOperator::from_symbol(symbol).unwrap();
            assert_eq!(operator.to_symbol().to_string(), symbol);
        }
        for operator in BinaryOperator::ALL {
            let symbol = operator.to_symbol().to_string();
            assert_eq!(BinaryOperator::from_symbol(&symbol), Some(operator));
        }
        assert_eq!(BinaryOperator::from_symbol(" + "), None);
        assert_eq!(BinaryOperator::from_symbol("%"), None);
        assert_eq!(BinaryOperator::from_symbol("^"), None);
        assert_eq!(BinaryOperator::from_symbol(""), None);
        assert_eq!(BinaryOperator::from_symbol("++"), None);
    }

    #[test]
    fn test_expression_evaluate_and_display() {
        let expression = Expression::new(10.0, BinaryOperator::Add, 5.0);
        assert_eq!(expression.evaluate(), Ok(15.0));
        assert_eq!(expression.to_string(), "10.0 + 5.0");

        let expression = Expression::new(10.0, BinaryOperator::Div, 0.0);
        assert_eq!(expression.evaluate(), Err(ArithmeticError::DivisionByZero));
        assert_eq!(expression.to_string(), "10.0 / 0.0");
    }
}
