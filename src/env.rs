// ABOUTME: Environment module for managing variable bindings and scopes

use crate::error::EvalError;
use crate::value::{Symbol, Value};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One frame plus a link to its enclosing environment. The chain's
/// terminator — the spec's "empty environment" — is simply the `None` at the
/// bottom of the `parent` chain; there is no separate zero-frame type,
/// because `Option<Rc<Environment>>` already expresses that duality.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<Symbol, Value>>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a fresh environment with one empty frame and no parent.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: None,
        })
    }

    fn child(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: Some(parent),
        })
    }

    /// Prepends a fresh frame binding each parameter to the corresponding
    /// argument onto `base`. Fails with `arity-mismatch` if the lists differ
    /// in length, distinguishing too-many from too-few (§4.2).
    pub fn extend(
        params: &[Symbol],
        args: &[Value],
        base: Rc<Environment>,
    ) -> Result<Rc<Environment>, EvalError> {
        if params.len() != args.len() {
            return Err(EvalError::arity_mismatch(params.len(), args.len()));
        }
        let frame = Environment::child(base);
        for (param, arg) in params.iter().zip(args.iter()) {
            frame.define(param.clone(), arg.clone());
        }
        Ok(frame)
    }

    /// Walks frames head-to-tail, returning the first binding found.
    pub fn lookup(&self, name: &Symbol) -> Result<Value, EvalError> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Ok(value.clone());
        }
        match &self.parent {
            Some(parent) => parent.lookup(name),
            None => Err(EvalError::UnboundVariable(name.clone())),
        }
    }

    /// Mutates the first frame (head-to-tail) that already binds `name`.
    /// Never creates a new binding — unlike `define`, this walks the full
    /// chain, which is what lets `set!` reach variables captured by an
    /// enclosing closure.
    pub fn assign(&self, name: &Symbol, value: Value) -> Result<(), EvalError> {
        if self.bindings.borrow().contains_key(name) {
            self.bindings.borrow_mut().insert(name.clone(), value);
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.assign(name, value),
            None => Err(EvalError::UnboundVariable(name.clone())),
        }
    }

    /// Binds `name` in THIS frame only, overwriting any existing binding
    /// here. Never traverses enclosing frames — the sole reason nested
    /// `define` introduces a local binding instead of mutating an outer one.
    pub fn define(&self, name: Symbol, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intern::intern;

    #[test]
    fn test_define_and_lookup() {
        let env = Environment::new();
        env.define(intern("x"), Value::Number(42.0));
        match env.lookup(&intern("x")) {
            Ok(Value::Number(n)) => assert_eq!(n, 42.0),
            other => panic!("expected Number(42.0), got {:?}", other),
        }
    }

    #[test]
    fn test_unbound_variable() {
        let env = Environment::new();
        assert!(matches!(
            env.lookup(&intern("undefined")),
            Err(EvalError::UnboundVariable(_))
        ));
    }

    #[test]
    fn test_extend_binds_parameters() {
        let base = Environment::new();
        let params = vec![intern("x"), intern("y")];
        let args = vec![Value::Number(1.0), Value::Number(2.0)];
        let child = Environment::extend(&params, &args, base).unwrap();
        match child.lookup(&intern("x")) {
            Ok(Value::Number(n)) => assert_eq!(n, 1.0),
            other => panic!("expected Number(1.0), got {:?}", other),
        }
        match child.lookup(&intern("y")) {
            Ok(Value::Number(n)) => assert_eq!(n, 2.0),
            other => panic!("expected Number(2.0), got {:?}", other),
        }
    }

    #[test]
    fn test_extend_too_many_arguments() {
        let base = Environment::new();
        let params = vec![intern("x")];
        let args = vec![Value::Number(1.0), Value::Number(2.0)];
        let err = Environment::extend(&params, &args, base).unwrap_err();
        match err {
            EvalError::ArityMismatch { direction, .. } => {
                assert_eq!(direction, crate::error::ArityDirection::TooMany)
            }
            other => panic!("expected ArityMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_extend_too_few_arguments() {
        let base = Environment::new();
        let params = vec![intern("x"), intern("y")];
        let args = vec![Value::Number(1.0)];
        let err = Environment::extend(&params, &args, base).unwrap_err();
        match err {
            EvalError::ArityMismatch { direction, .. } => {
                assert_eq!(direction, crate::error::ArityDirection::TooFew)
            }
            other => panic!("expected ArityMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_shadowing() {
        let parent = Environment::new();
        parent.define(intern("x"), Value::Number(42.0));
        let child = Environment::extend(&[], &[], parent).unwrap();
        child.define(intern("x"), Value::Number(100.0));
        match child.lookup(&intern("x")) {
            Ok(Value::Number(n)) => assert_eq!(n, 100.0),
            other => panic!("expected Number(100.0), got {:?}", other),
        }
    }

    #[test]
    fn test_assign_reaches_enclosing_frame() {
        let parent = Environment::new();
        parent.define(intern("x"), Value::Number(1.0));
        let child = Environment::extend(&[], &[], parent.clone()).unwrap();
        child.assign(&intern("x"), Value::Number(7.0)).unwrap();
        match parent.lookup(&intern("x")) {
            Ok(Value::Number(n)) => assert_eq!(n, 7.0),
            other => panic!("expected Number(7.0), got {:?}", other),
        }
    }

    #[test]
    fn test_assign_never_creates_binding() {
        let env = Environment::new();
        let err = env.assign(&intern("never-defined"), Value::Number(1.0));
        assert!(matches!(err, Err(EvalError::UnboundVariable(_))));
        assert!(env.lookup(&intern("never-defined")).is_err());
    }

    #[test]
    fn test_define_only_affects_head_frame() {
        let parent = Environment::new();
        let child = Environment::extend(&[], &[], parent.clone()).unwrap();
        child.define(intern("local"), Value::Number(1.0));
        assert!(parent.lookup(&intern("local")).is_err());
    }
}
