// ABOUTME: Error types for evaluation failures in the Lisp interpreter

use crate::value::{Symbol, Value};
use thiserror::Error;

/// Which way an arity check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArityDirection {
    TooMany,
    TooFew,
}

impl std::fmt::Display for ArityDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArityDirection::TooMany => write!(f, "too many"),
            ArityDirection::TooFew => write!(f, "too few"),
        }
    }
}

/// The five error kinds the evaluator core can raise (§7).
///
/// None of these are caught within `evaluate`/`apply`; the in-flight call
/// terminates and the error propagates to whatever called the core.
#[derive(Error, Debug, Clone)]
pub enum EvalError {
    #[error("unbound variable: {0}")]
    UnboundVariable(Symbol),

    #[error("arity mismatch: expected {expected} argument{}, got {actual} ({direction})",
        if *expected == 1 { "" } else { "s" })]
    ArityMismatch {
        expected: usize,
        actual: usize,
        direction: ArityDirection,
    },

    #[error("not a procedure: {0}")]
    NotAProcedure(Value),

    #[error("syntax error in: {0}")]
    SyntaxError(Value),

    #[error("{name}: {message}")]
    PrimitiveError { name: String, message: String },
}

impl EvalError {
    pub fn arity_mismatch(expected: usize, actual: usize) -> Self {
        let direction = if actual > expected {
            ArityDirection::TooMany
        } else {
            ArityDirection::TooFew
        };
        EvalError::ArityMismatch {
            expected,
            actual,
            direction,
        }
    }

    pub fn primitive_error(name: &str, message: impl Into<String>) -> Self {
        EvalError::PrimitiveError {
            name: name.to_string(),
            message: message.into(),
        }
    }
}
