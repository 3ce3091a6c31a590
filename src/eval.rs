// ABOUTME: Evaluator module for executing parsed Lisp expressions

use crate::env::Environment;
use crate::error::EvalError;
use crate::expr;
use crate::value::{Compound, Value};
use std::rc::Rc;

/// Evaluates one expression against one environment (§4.4).
///
/// Tail-call optimization is an explicit non-goal (§1): this function
/// recurses through the host call stack exactly as the decision order below
/// implies. There is no trampoline and no special-casing of tail position.
pub fn evaluate(expr: Value, env: Rc<Environment>) -> Result<Value, EvalError> {
    if expr::is_self_evaluating(&expr) {
        return Ok(expr);
    }

    if expr::is_variable(&expr) {
        let name = match &expr {
            Value::Symbol(s) => s.clone(),
            _ => unreachable!("is_variable guarantees Value::Symbol"),
        };
        return env.lookup(&name);
    }

    if expr::is_quoted(&expr) {
        return expr::quoted_datum(&expr);
    }

    if expr::is_assignment(&expr) {
        let name = match expr::assignment_variable(&expr)? {
            Value::Symbol(s) => s,
            _ => unreachable!("assignment_variable guarantees Value::Symbol"),
        };
        let value = evaluate(expr::assignment_value(&expr)?, env.clone())?;
        env.assign(&name, value)?;
        return Ok(Value::symbol("ok"));
    }

    if expr::is_definition(&expr) {
        let name = match expr::definition_variable(&expr)? {
            Value::Symbol(s) => s,
            _ => unreachable!("definition_variable guarantees Value::Symbol"),
        };
        let value = evaluate(expr::definition_value(&expr)?, env.clone())?;
        env.define(name, value);
        return Ok(Value::symbol("ok"));
    }

    if expr::is_if(&expr) {
        let predicate = evaluate(expr::if_predicate(&expr)?, env.clone())?;
        return if predicate.is_truthy() {
            evaluate(expr::if_consequent(&expr)?, env)
        } else {
            match expr::if_alternative(&expr)? {
                Some(alternative) => evaluate(alternative, env),
                None => Ok(Value::Bool(false)),
            }
        };
    }

    if expr::is_lambda(&expr) {
        let params = expr::lambda_parameters(&expr)?
            .into_iter()
            .map(|p| match p {
                Value::Symbol(s) => s,
                _ => unreachable!("lambda_parameters guarantees symbols"),
            })
            .collect();
        let body = expr::lambda_body(&expr)?;
        return Ok(Value::Compound(Rc::new(Compound { params, body, env })));
    }

    if expr::is_begin(&expr) {
        return eval_sequence(&expr::begin_actions(&expr)?, env);
    }

    if expr::is_application(&expr) {
        let operator = evaluate(expr::operator(&expr)?, env.clone())?;
        let operands = expr::operands(&expr)?
            .into_iter()
            .map(|operand| evaluate(operand, env.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        return apply(operator, operands);
    }

    Err(EvalError::SyntaxError(expr))
}

/// Invokes `procedure` on already-evaluated `arguments` (§4.4).
pub fn apply(procedure: Value, arguments: Vec<Value>) -> Result<Value, EvalError> {
    match procedure {
        Value::Primitive(primitive) => (primitive.func)(&arguments),
        Value::Compound(compound) => {
            let call_env = Environment::extend(&compound.params, &arguments, compound.env.clone())?;
            eval_sequence(&compound.body, call_env)
        }
        other => Err(EvalError::NotAProcedure(other)),
    }
}

/// Evaluates a non-empty sequence of expressions in order, returning the
/// value of the last one. Used for `begin` and for procedure bodies.
fn eval_sequence(actions: &[Value], env: Rc<Environment>) -> Result<Value, EvalError> {
    let (last, init) = actions.split_last().expect("classifier rejects empty sequences");
    for action in init {
        evaluate(action.clone(), env.clone())?;
    }
    evaluate(last.clone(), env)
}
