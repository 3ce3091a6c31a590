//! # Primitive procedures
//!
//! The required primitive table (§4.7): `car`, `cdr`, `cons`, `null?`, `+`,
//! `-`, `*`, `/`, `=`, `<`, `>`, `eq?`, plus the three ambient additions
//! (`not`, `list`, `pair?`) needed to express the end-to-end scenarios in §8
//! without introducing any new special form.
//!
//! Each sub-module owns one category and exposes a `register` function; a
//! primitive's Rust name always carries a `builtin_` prefix so it can never
//! be confused with the evaluator's own vocabulary.

use crate::env::Environment;
use crate::value::{Primitive, Value};
use std::rc::Rc;

pub mod arithmetic;
pub mod comparison;
pub mod pairs;
pub mod predicates;

pub use arithmetic::register as register_arithmetic;
pub use comparison::register as register_comparison;
pub use pairs::register as register_pairs;
pub use predicates::register as register_predicates;

/// Binds `name` to a fresh `Value::Primitive` wrapping `func` in `env`.
fn define_primitive(env: &Rc<Environment>, name: &str, func: fn(&[Value]) -> Result<Value, crate::error::EvalError>) {
    env.define(
        crate::intern::intern(name),
        Value::Primitive(Rc::new(Primitive {
            name: crate::intern::intern(name),
            func,
        })),
    );
}

/// Registers every primitive from every category into `env`.
pub fn setup_environment(env: &Rc<Environment>) {
    register_arithmetic(env);
    register_comparison(env);
    register_pairs(env);
    register_predicates(env);
}

/// Builds a fresh top-level environment with the full primitive table
/// installed, plus the `true`/`false` bindings §6 requires
/// (this is what the driver calls once per run, §4.8).
pub fn make_global_environment() -> Rc<Environment> {
    let env = Environment::new();
    setup_environment(&env);
    env.define(crate::intern::intern("true"), Value::Bool(true));
    env.define(crate::intern::intern("false"), Value::Bool(false));
    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::evaluate;

    fn sym(s: &str) -> Value {
        Value::symbol(s)
    }

    fn list(items: Vec<Value>) -> Value {
        Value::list_from(items.into_iter())
    }

    #[test]
    fn global_environment_has_required_primitives() {
        let env = make_global_environment();
        for name in ["car", "cdr", "cons", "null?", "+", "-", "*", "/", "=", "<", ">", "eq?", "not", "list", "pair?"] {
            assert!(
                env.lookup(&crate::intern::intern(name)).is_ok(),
                "missing required primitive: {name}"
            );
        }
    }

    #[test]
    fn global_environment_seeds_true_and_false() {
        let env = make_global_environment();
        assert!(matches!(env.lookup(&crate::intern::intern("true")).unwrap(), Value::Bool(true)));
        assert!(matches!(env.lookup(&crate::intern::intern("false")).unwrap(), Value::Bool(false)));
    }

    #[test]
    fn primitives_compose_in_an_expression() {
        let env = make_global_environment();
        let expr = list(vec![sym("+"), Value::Number(1.0), list(vec![sym("*"), Value::Number(2.0), Value::Number(3.0)])]);
        assert!(matches!(evaluate(expr, env).unwrap(), Value::Number(n) if n == 7.0));
    }
}
