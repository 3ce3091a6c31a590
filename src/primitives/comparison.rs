//! Numeric comparisons: =, <, >
//!
//! All three are variadic, chaining the comparison across every consecutive
//! pair of arguments (so `(< 1 2 3)` checks `1 < 2` and `2 < 3`).

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

fn chained(args: &[Value], who: &str, ok: fn(f64, f64) -> bool) -> Result<Value, EvalError> {
    if args.len() < 2 {
        return Err(EvalError::primitive_error(who, "requires at least two arguments"));
    }
    let numbers = args.iter().map(|a| as_number(a, who)).collect::<Result<Vec<_>, _>>()?;
    Ok(Value::Bool(numbers.windows(2).all(|pair| ok(pair[0], pair[1]))))
}

pub fn builtin_num_eq(args: &[Value]) -> Result<Value, EvalError> {
    chained(args, "=", |a, b| a == b)
}

pub fn builtin_lt(args: &[Value]) -> Result<Value, EvalError> {
    chained(args, "<", |a, b| a < b)
}

pub fn builtin_gt(args: &[Value]) -> Result<Value, EvalError> {
    chained(args, ">", |a, b| a > b)
}

pub fn register(env: &Rc<Environment>) {
    super::define_primitive(env, "=", builtin_num_eq);
    super::define_primitive(env, "<", builtin_lt);
    super::define_primitive(env, ">", builtin_gt);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_chains() {
        assert!(matches!(
            builtin_num_eq(&[Value::Number(1.0), Value::Number(1.0), Value::Number(1.0)]).unwrap(),
            Value::Bool(true)
        ));
        assert!(matches!(
            builtin_num_eq(&[Value::Number(1.0), Value::Number(2.0)]).unwrap(),
            Value::Bool(false)
        ));
    }

    #[test]
    fn less_than_chains() {
        assert!(matches!(
            builtin_lt(&[Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]).unwrap(),
            Value::Bool(true)
        ));
        assert!(matches!(
            builtin_lt(&[Value::Number(1.0), Value::Number(3.0), Value::Number(2.0)]).unwrap(),
            Value::Bool(false)
        ));
    }

    #[test]
    fn greater_than_requires_two_arguments() {
        assert!(builtin_gt(&[Value::Number(1.0)]).is_err());
    }
}
