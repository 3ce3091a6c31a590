//! Expression classifier and accessors.
//!
//! An Expression is just a `Value` tree — the language is homoiconic (§3).
//! Everything here is pure inspection: no evaluation happens in this module.
//! Each `is_*` predicate keys off the leading symbol of a pair-form (or the
//! shape of an atom); each accessor is the matching projector, and returns a
//! `syntax-error` if the form it was asked to project from is malformed.

use crate::error::EvalError;
use crate::value::Value;

fn tagged(expr: &Value, tag: &str) -> Option<Vec<Value>> {
    let items = expr.list_to_vec()?;
    match items.first() {
        Some(Value::Symbol(s)) if s.as_ref() == tag => Some(items),
        _ => None,
    }
}

pub fn is_self_evaluating(expr: &Value) -> bool {
    matches!(expr, Value::Number(_) | Value::String(_) | Value::Bool(_))
}

pub fn is_variable(expr: &Value) -> bool {
    matches!(expr, Value::Symbol(_))
}

// ---------------------------------------------------------------- quote ---

pub fn is_quoted(expr: &Value) -> bool {
    tagged(expr, "quote").is_some()
}

pub fn quoted_datum(expr: &Value) -> Result<Value, EvalError> {
    let items = tagged(expr, "quote").ok_or_else(|| EvalError::SyntaxError(expr.clone()))?;
    if items.len() != 2 {
        return Err(EvalError::SyntaxError(expr.clone()));
    }
    Ok(items[1].clone())
}

// -------------------------------------------------------------- set! -----

pub fn is_assignment(expr: &Value) -> bool {
    tagged(expr, "set!").is_some()
}

pub fn assignment_variable(expr: &Value) -> Result<Value, EvalError> {
    let items = tagged(expr, "set!").ok_or_else(|| EvalError::SyntaxError(expr.clone()))?;
    if items.len() != 3 || !is_variable(&items[1]) {
        return Err(EvalError::SyntaxError(expr.clone()));
    }
    Ok(items[1].clone())
}

pub fn assignment_value(expr: &Value) -> Result<Value, EvalError> {
    let items = tagged(expr, "set!").ok_or_else(|| EvalError::SyntaxError(expr.clone()))?;
    if items.len() != 3 {
        return Err(EvalError::SyntaxError(expr.clone()));
    }
    Ok(items[2].clone())
}

// ------------------------------------------------------------ define -----

pub fn is_definition(expr: &Value) -> bool {
    tagged(expr, "define").is_some()
}

pub fn definition_variable(expr: &Value) -> Result<Value, EvalError> {
    let items = tagged(expr, "define").ok_or_else(|| EvalError::SyntaxError(expr.clone()))?;
    if items.len() < 3 {
        return Err(EvalError::SyntaxError(expr.clone()));
    }
    match &items[1] {
        Value::Symbol(_) => Ok(items[1].clone()),
        Value::Pair(_) => {
            let target = items[1].list_to_vec().ok_or_else(|| EvalError::SyntaxError(expr.clone()))?;
            match target.first() {
                Some(name @ Value::Symbol(_)) => Ok(name.clone()),
                _ => Err(EvalError::SyntaxError(expr.clone())),
            }
        }
        _ => Err(EvalError::SyntaxError(expr.clone())),
    }
}

/// Returns the (unevaluated) value expression for a definition. For the
/// `(define (name . formals) body…)` sugar, synthesizes the equivalent
/// `(lambda formals body…)` form per §4.3.
pub fn definition_value(expr: &Value) -> Result<Value, EvalError> {
    let items = tagged(expr, "define").ok_or_else(|| EvalError::SyntaxError(expr.clone()))?;
    if items.len() < 3 {
        return Err(EvalError::SyntaxError(expr.clone()));
    }
    match &items[1] {
        Value::Symbol(_) => {
            if items.len() != 3 {
                return Err(EvalError::SyntaxError(expr.clone()));
            }
            Ok(items[2].clone())
        }
        Value::Pair(_) => {
            let target = items[1].list_to_vec().ok_or_else(|| EvalError::SyntaxError(expr.clone()))?;
            if target.is_empty() {
                return Err(EvalError::SyntaxError(expr.clone()));
            }
            let formals = Value::list_from(target[1..].iter().cloned());
            let body = items[2..].iter().cloned();
            let mut lambda_items = vec![Value::symbol("lambda"), formals];
            lambda_items.extend(body);
            Ok(Value::list_from(lambda_items.into_iter()))
        }
        _ => Err(EvalError::SyntaxError(expr.clone())),
    }
}

// ---------------------------------------------------------------- if -----

pub fn is_if(expr: &Value) -> bool {
    tagged(expr, "if").is_some()
}

pub fn if_predicate(expr: &Value) -> Result<Value, EvalError> {
    let items = tagged(expr, "if").ok_or_else(|| EvalError::SyntaxError(expr.clone()))?;
    if items.len() < 3 || items.len() > 4 {
        return Err(EvalError::SyntaxError(expr.clone()));
    }
    Ok(items[1].clone())
}

pub fn if_consequent(expr: &Value) -> Result<Value, EvalError> {
    let items = tagged(expr, "if").ok_or_else(|| EvalError::SyntaxError(expr.clone()))?;
    if items.len() < 3 || items.len() > 4 {
        return Err(EvalError::SyntaxError(expr.clone()));
    }
    Ok(items[2].clone())
}

/// `None` when the alternative was omitted — the evaluator treats that as
/// `Bool(false)` per §4.4, not this module.
pub fn if_alternative(expr: &Value) -> Result<Option<Value>, EvalError> {
    let items = tagged(expr, "if").ok_or_else(|| EvalError::SyntaxError(expr.clone()))?;
    if items.len() < 3 || items.len() > 4 {
        return Err(EvalError::SyntaxError(expr.clone()));
    }
    Ok(items.get(3).cloned())
}

// ------------------------------------------------------------ lambda -----

pub fn is_lambda(expr: &Value) -> bool {
    tagged(expr, "lambda").is_some()
}

pub fn lambda_parameters(expr: &Value) -> Result<Vec<Value>, EvalError> {
    let items = tagged(expr, "lambda").ok_or_else(|| EvalError::SyntaxError(expr.clone()))?;
    if items.len() < 3 {
        return Err(EvalError::SyntaxError(expr.clone()));
    }
    let params = items[1]
        .list_to_vec()
        .ok_or_else(|| EvalError::SyntaxError(expr.clone()))?;
    for p in &params {
        if !is_variable(p) {
            return Err(EvalError::SyntaxError(expr.clone()));
        }
    }
    Ok(params)
}

pub fn lambda_body(expr: &Value) -> Result<Vec<Value>, EvalError> {
    let items = tagged(expr, "lambda").ok_or_else(|| EvalError::SyntaxError(expr.clone()))?;
    if items.len() < 3 {
        return Err(EvalError::SyntaxError(expr.clone()));
    }
    Ok(items[2..].to_vec())
}

// ------------------------------------------------------------- begin -----

pub fn is_begin(expr: &Value) -> bool {
    tagged(expr, "begin").is_some()
}

pub fn begin_actions(expr: &Value) -> Result<Vec<Value>, EvalError> {
    let items = tagged(expr, "begin").ok_or_else(|| EvalError::SyntaxError(expr.clone()))?;
    if items.len() < 2 {
        return Err(EvalError::SyntaxError(expr.clone()));
    }
    Ok(items[1..].to_vec())
}

// --------------------------------------------------------- application ---

pub fn is_application(expr: &Value) -> bool {
    expr.list_to_vec().is_some_and(|items| !items.is_empty())
}

pub fn operator(expr: &Value) -> Result<Value, EvalError> {
    let items = expr.list_to_vec().ok_or_else(|| EvalError::SyntaxError(expr.clone()))?;
    items.first().cloned().ok_or_else(|| EvalError::SyntaxError(expr.clone()))
}

pub fn operands(expr: &Value) -> Result<Vec<Value>, EvalError> {
    let items = expr.list_to_vec().ok_or_else(|| EvalError::SyntaxError(expr.clone()))?;
    if items.is_empty() {
        return Err(EvalError::SyntaxError(expr.clone()));
    }
    Ok(items[1..].to_vec())
}
