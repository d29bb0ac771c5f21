use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        env::{Binding, BindingKey, Environment},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree against an environment.
///
/// Evaluation is eager, depth-first, and left-to-right, and it is a
/// pure function of the tree and the environment: no hidden state, no
/// memoization, and the tree is never mutated. Errors propagate outward
/// from the first failing subevaluation; later siblings are not
/// evaluated after a failure.
///
/// Note that the logical connectives do **not** short-circuit: both
/// operands of `&&` and `||` are evaluated before the operator binding
/// runs, because operand evaluation happens here at the operator site,
/// before the binding is applied.
///
/// # Errors
/// Returns an [`EvalError`] for unbound identifiers, missing or
/// malformed operator bindings, operand kind mismatches, host-function
/// failures, and value-domain failures.
///
/// # Example
/// ```
/// use predica::{evaluate, parse, Environment, Value};
///
/// let tree = parse("1 + 2 * 3").unwrap();
/// let env = Environment::new();
///
/// assert_eq!(evaluate(&tree, &env).unwrap(), Value::Int(7));
/// ```
pub fn evaluate(expr: &Expr, env: &Environment) -> EvalResult<Value> {
    match expr {
        Expr::Literal(lit) => Ok(Value::from(lit)),
        Expr::Ident(name) => eval_ident(name, env),
        Expr::Subexpression(inner) => evaluate(inner, env),
        Expr::Unary { op, operand } => eval_unary_site(*op, operand, env),
        Expr::Binary { op, left, right } => eval_binary_site(*op, left, right, env),
        Expr::Call { callee, args } => eval_call(callee, args, env),
    }
}

/// Resolves an identifier, caller environment first, default
/// environment second.
fn eval_ident(name: &str, env: &Environment) -> EvalResult<Value> {
    match env.resolve(&BindingKey::Name(name.to_string())) {
        Some(Binding::Value(v)) => Ok(v.clone()),
        Some(_) => Err(EvalError::TypeMismatch { details: format!("name '{name}' is bound to an \
                                                                   operator implementation") }),
        None => Err(EvalError::UnboundVariable { name: name.to_string() }),
    }
}

/// Applies a prefix modifier: the operand is evaluated, then the
/// binding is resolved and applied.
fn eval_unary_site(op: crate::ast::UnaryOperator,
                   operand: &Expr,
                   env: &Environment)
                   -> EvalResult<Value> {
    let val = evaluate(operand, env)?;
    let f = match env.resolve(&BindingKey::Mod(op)) {
        Some(Binding::Unary(f)) => f,
        Some(_) => return Err(EvalError::InvalidOperatorBinding { op: op.to_string() }),
        None => return Err(EvalError::UnknownOperator { op: op.to_string() }),
    };
    f(env, &val)
}

/// Applies a binary operator: the binding is resolved first, then both
/// operands are evaluated left to right, then the binding is applied.
fn eval_binary_site(op: crate::ast::BinaryOperator,
                    left: &Expr,
                    right: &Expr,
                    env: &Environment)
                    -> EvalResult<Value> {
    let f = match env.resolve(&BindingKey::Op(op)) {
        Some(Binding::Binary(f)) => f,
        Some(_) => return Err(EvalError::InvalidOperatorBinding { op: op.to_string() }),
        None => return Err(EvalError::UnknownOperator { op: op.to_string() }),
    };
    let lhs = evaluate(left, env)?;
    let rhs = evaluate(right, env)?;
    f(env, &lhs, &rhs)
}

/// Performs a dynamic host-function call: callee first, then each
/// argument in order, then the invocation itself.
fn eval_call(callee: &Expr, args: &[Expr], env: &Environment) -> EvalResult<Value> {
    let callee = evaluate(callee, env)?;
    let mut values = Vec::with_capacity(args.len());
    for arg in args {
        values.push(evaluate(arg, env)?);
    }
    match callee {
        Value::HostFn(f) => f.call(&values),
        other => Err(EvalError::TypeMismatch { details: format!("value of kind {} is not \
                                                                 callable",
                                                                other.kind()) }),
    }
}
