//! Pair and list construction: cons, car, cdr, null?, list
//!
//! `car`/`cdr` only accept `Value::Pair`; unlike the teacher's `Vec`-backed
//! lists, there is no special-casing of the empty list here because
//! `EmptyList` is its own distinct atom, never a zero-length pair.

use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;
use std::rc::Rc;

pub fn builtin_cons(args: &[Value]) -> Result<Value, EvalError> {
    match args {
        [first, rest] => Ok(Value::cons(first.clone(), rest.clone())),
        _ => Err(EvalError::primitive_error("cons", format!("expected 2 arguments, got {}", args.len()))),
    }
}

pub fn builtin_car(args: &[Value]) -> Result<Value, EvalError> {
    match args {
        [Value::Pair(cell)] => Ok(cell.first.borrow().clone()),
        [other] => Err(EvalError::primitive_error("car", format!("expected a pair, got a {}", other.type_name()))),
        _ => Err(EvalError::primitive_error("car", format!("expected 1 argument, got {}", args.len()))),
    }
}

pub fn builtin_cdr(args: &[Value]) -> Result<Value, EvalError> {
    match args {
        [Value::Pair(cell)] => Ok(cell.rest.borrow().clone()),
        [other] => Err(EvalError::primitive_error("cdr", format!("expected a pair, got a {}", other.type_name()))),
        _ => Err(EvalError::primitive_error("cdr", format!("expected 1 argument, got {}", args.len()))),
    }
}

pub fn builtin_null_q(args: &[Value]) -> Result<Value, EvalError> {
    match args {
        [value] => Ok(Value::Bool(matches!(value, Value::EmptyList))),
        _ => Err(EvalError::primitive_error("null?", format!("expected 1 argument, got {}", args.len()))),
    }
}

pub fn builtin_list(args: &[Value]) -> Result<Value, EvalError> {
    Ok(Value::list_from(args.iter().cloned()))
}

pub fn register(env: &Rc<Environment>) {
    super::define_primitive(env, "cons", builtin_cons);
    super::define_primitive(env, "car", builtin_car);
    super::define_primitive(env, "cdr", builtin_cdr);
    super::define_primitive(env, "null?", builtin_null_q);
    super::define_primitive(env, "list", builtin_list);
}
