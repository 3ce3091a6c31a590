//! Arithmetic operations: +, -, *, /
//!
//! `+` and `*` are variadic with identities 0 and 1. `-` and `/` require at
//! least one argument; with exactly one argument they negate or invert it.

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

fn as_number(v: &Value, who: &str) -> Result<f64, EvalError> {
    match v {
        Value::Number(n) => Ok(*n),
        other => Err(EvalError::primitive_error(who, format!("expected a number, got a {}", other.type_name()))),
    }
}

pub fn builtin_add(args: &[Value]) -> Result<Value, EvalError> {
    let mut sum = 0.0;
    for arg in args {
        sum += as_number(arg, "+")?;
    }
    Ok(Value::Number(sum))
}

pub fn builtin_sub(args: &[Value]) -> Result<Value, EvalError> {
    let Some((first, rest)) = args.split_first() else {
        return Err(EvalError::primitive_error("-", "requires at least one argument"));
    };
    let first = as_number(first, "-")?;
    if rest.is_empty() {
        return Ok(Value::Number(-first));
    }
    let mut result = first;
    for arg in rest {
        result -= as_number(arg, "-")?;
    }
    Ok(Value::Number(result))
}

pub fn builtin_mul(args: &[Value]) -> Result<Value, EvalError> {
    let mut product = 1.0;
    for arg in args {
        product *= as_number(arg, "*")?;
    }
    Ok(Value::Number(product))
}

pub fn builtin_div(args: &[Value]) -> Result<Value, EvalError> {
    let Some((first, rest)) = args.split_first() else {
        return Err(EvalError::primitive_error("/", "requires at least one argument"));
    };
    let first = as_number(first, "/")?;
    if rest.is_empty() {
        if first == 0.0 {
            return Err(EvalError::primitive_error("/", "division by zero"));
        }
        return Ok(Value::Number(1.0 / first));
    }
    let mut result = first;
    for arg in rest {
        let divisor = as_number(arg, "/")?;
        if divisor == 0.0 {
            return Err(EvalError::primitive_error("/", "division by zero"));
        }
        result /= divisor;
    }
    Ok(Value::Number(result))
}

pub fn register(env: &Rc<Environment>) {
    super::define_primitive(env, "+", builtin_add);
    super::define_primitive(env, "-", builtin_sub);
    super::define_primitive(env, "*", builtin_mul);
    super::define_primitive(env, "/", builtin_div);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_variadic_with_identity() {
        assert!(matches!(builtin_add(&[]).unwrap(), Value::Number(n) if n == 0.0));
        assert!(matches!(
            builtin_add(&[Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]).unwrap(),
            Value::Number(n) if n == 6.0
        ));
    }

    #[test]
    fn sub_negates_single_argument() {
        assert!(matches!(builtin_sub(&[Value::Number(5.0)]).unwrap(), Value::Number(n) if n == -5.0));
    }

    #[test]
    fn sub_requires_at_least_one_argument() {
        assert!(builtin_sub(&[]).is_err());
    }

    #[test]
    fn mul_variadic_with_identity() {
        assert!(matches!(builtin_mul(&[]).unwrap(), Value::Number(n) if n == 1.0));
    }

    #[test]
    fn div_inverts_single_argument() {
        assert!(matches!(builtin_div(&[Value::Number(4.0)]).unwrap(), Value::Number(n) if n == 0.25));
    }

    #[test]
    fn div_by_zero_is_a_primitive_error() {
        assert!(matches!(
            builtin_div(&[Value::Number(1.0), Value::Number(0.0)]),
            Err(EvalError::PrimitiveError { .. })
        ));
    }

    #[test]
    fn arithmetic_rejects_non_numbers() {
        assert!(builtin_add(&[Value::Bool(true)]).is_err());
    }
}
