pub mod arithmetic;
pub mod cli;
pub mod logger;
pub mod number_theory;
pub mod session;
pub mod utils;

pub use arithmetic::{
    ArithmeticError, BinaryOperator, Expression, add, divide, multiply, subtract,
};
pub use number_theory::{NumberTheoryError, factorial, gcd, is_prime, lcm};
