//! Identity and boolean predicates: eq?, not, pair?

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

pub fn builtin_eq_q(args: &[Value]) -> Result<Value, EvalError> {
    match args {
        [a, b] => Ok(Value::Bool(a.is_eq(b))),
        _ => Err(EvalError::primitive_error("eq?", format!("expected 2 arguments, got {}", args.len()))),
    }
}

pub fn builtin_not(args: &[Value]) -> Result<Value, EvalError> {
    match args {
        [value] => Ok(Value::Bool(!value.is_truthy())),
        _ => Err(EvalError::primitive_error("not", format!("expected 1 argument, got {}", args.len()))),
    }
}

pub fn builtin_pair_q(args: &[Value]) -> Result<Value, EvalError> {
    match args {
        [value] => Ok(Value::Bool(value.is_pair())),
        _ => Err(EvalError::primitive_error("pair?", format!("expected 1 argument, got {}", args.len()))),
    }
}

pub fn register(env: &Rc<Environment>) {
    super::define_primitive(env, "eq?", builtin_eq_q);
    super::define_primitive(env, "not", builtin_not);
    super::define_primitive(env, "pair?", builtin_pair_q);
}
