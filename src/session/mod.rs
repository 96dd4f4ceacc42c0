use std::io::{self, Write};

use rustyline::error::ReadlineError;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    arithmetic::{ArithmeticError, BinaryOperator, Expression},
    utils::{format_number, operator_list},
};

pub mod input;

pub use input::Prompter;

pub const TITLE: &str = "Simple Calculator";
pub const FIRST_OPERAND_PROMPT: &str = "Enter first number: ";
pub const SECOND_OPERAND_PROMPT: &str = "Enter second number: ";
pub const TERMINATED: &str = "Calculator terminated.";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("could not convert string to float: '{0}'")]
    InvalidNumber(String),
    #[error("{0}")]
    Arithmetic(#[from] ArithmeticError),
    #[error("Input interrupted")]
    Interrupted,
    #[error("End of input")]
    EndOfInput,
    #[error("{0}")]
    Readline(ReadlineError),
}

impl From<ReadlineError> for SessionError {
    fn from(value: ReadlineError) -> Self {
        match value {
            ReadlineError::Interrupted => Self::Interrupted,
            ReadlineError::Eof => Self::EndOfInput,
            other => Self::Readline(other),
        }
    }
}

/// How a single calculation attempt ended. Every variant is a normal exit.
#[derive(Debug)]
pub enum Outcome {
    Computed { expression: Expression, result: f64 },
    InvalidOperation(String),
    Failed(SessionError),
    Terminated,
}

fn read_operand<P: Prompter>(prompter: &mut P, message: &str) -> Result<f64, SessionError> {
    let line = prompter.prompt(message)?;
    line.trim()
        .parse::<f64>()
        .map_err(|_| SessionError::InvalidNumber(line))
}

fn calculate<P: Prompter>(prompter: &mut P) -> Result<Outcome, SessionError> {
    let left = read_operand(prompter, FIRST_OPERAND_PROMPT)?;
    debug!(left, "parsed first operand");

    let symbol = prompter.prompt(&format!("Enter operation ({}): ", operator_list()))?;
    let right = read_operand(prompter, SECOND_OPERAND_PROMPT)?;
    debug!(right, "parsed second operand");

    let Some(operator) = BinaryOperator::from_symbol(&symbol) else {
        debug!(symbol = symbol.as_str(), "unrecognised operator");
        return Ok(Outcome::InvalidOperation(symbol));
    };

    let expression = Expression::new(left, operator, right);
    debug!(%expression, "dispatching");
    let result = expression.evaluate()?;

    Ok(Outcome::Computed { expression, result })
}

/// Runs one calculation: banner, three prompts, one report line.
pub fn run<P: Prompter, W: Write>(prompter: &mut P, out: &mut W) -> io::Result<Outcome> {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "Available operations: {}", operator_list())?;
    out.flush()?;

    let outcome = match calculate(prompter) {
        Ok(outcome) => outcome,
        Err(SessionError::Interrupted | SessionError::EndOfInput) => Outcome::Terminated,
        Err(err) => {
            if let SessionError::Readline(inner) = &err {
                warn!(error = %inner, "line editor failed");
            }
            Outcome::Failed(err)
        }
    };

    match &outcome {
        Outcome::Computed { expression, result } => {
            writeln!(out, "Result: {expression} = {}", format_number(*result))?
        }
        Outcome::InvalidOperation(_) => writeln!(out, "Invalid operation")?,
        Outcome::Failed(err) => writeln!(out, "Error: {err}")?,
        Outcome::Terminated => writeln!(out, "\n{TERMINATED}")?,
    }
    out.flush()?;

    Ok(outcome)
}
