use std::{
    collections::HashMap,
    sync::{Arc, LazyLock},
};

use crate::{
    ast::{BinaryOperator, UnaryOperator},
    interpreter::{
        evaluator::{
            binary::{addsub, comparison, logic, muldiv, power},
            core::EvalResult,
            unary,
        },
        value::core::Value,
    },
};

/// The implementation of a binary operator: receives the environment the
/// evaluation runs under plus both already-evaluated operands.
pub type BinaryFn = Arc<dyn Fn(&Environment, &Value, &Value) -> EvalResult<Value> + Send + Sync>;

/// The implementation of a prefix modifier: receives the environment
/// plus the already-evaluated operand.
pub type UnaryFn = Arc<dyn Fn(&Environment, &Value) -> EvalResult<Value> + Send + Sync>;

/// What a binding key resolves to: a plain value (which includes host
/// functions), or the implementation of a binary or unary operator.
///
/// Operator sites check the shape at evaluation time; resolving a
/// binding of the wrong shape is an invalid-operator-binding error.
#[derive(Clone)]
pub enum Binding {
    /// A value, bound under a name.
    Value(Value),
    /// A binary operator implementation, bound under an operator key.
    Binary(BinaryFn),
    /// A prefix modifier implementation, bound under a modifier key.
    Unary(UnaryFn),
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Binary(_) => write!(f, "Binary(..)"),
            Self::Unary(_) => write!(f, "Unary(..)"),
        }
    }
}

/// A key in the environment's binding table.
///
/// Keys come in two disjoint shapes: names, which identifier lookups
/// use, and operator/modifier tokens, which operator sites use. There
/// is deliberately no "no operator" sentinel key; the parser models
/// that case with `Option`, so it can never collide with a binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BindingKey {
    /// A name, as looked up by an identifier occurrence.
    Name(String),
    /// A binary operator token.
    Op(BinaryOperator),
    /// A prefix modifier token.
    Mod(UnaryOperator),
}

/// A mapping from binding keys to values and operator implementations.
///
/// Every lookup consults the caller's environment first and falls back
/// to the process-wide default environment, which defines all operators
/// plus the constants `true` and `false`. A caller may therefore
/// override any built-in behavior, including arithmetic, by binding the
/// same key.
///
/// The environment is read-only during an evaluation; host functions
/// may close over their own mutable state, but that is opaque here.
///
/// # Example
/// ```
/// use predica::{parse_and_evaluate, Environment, Value};
///
/// let mut env = Environment::new();
/// env.bind("elevation", 1200_i64);
///
/// let v = parse_and_evaluate("elevation >= 100", &env).unwrap();
/// assert_eq!(v, Value::Bool(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: HashMap<BindingKey, Binding>,
}

impl Environment {
    /// Creates an empty environment. Everything not bound here resolves
    /// through the default environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a value under a name.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.bindings
            .insert(BindingKey::Name(name.into()), Binding::Value(value.into()));
        self
    }

    /// Binds a binary operator implementation, replacing the default
    /// semantics of `op` for expressions evaluated under this
    /// environment.
    pub fn bind_binary<F>(&mut self, op: BinaryOperator, f: F) -> &mut Self
        where F: Fn(&Self, &Value, &Value) -> EvalResult<Value> + Send + Sync + 'static
    {
        self.bindings
            .insert(BindingKey::Op(op), Binding::Binary(Arc::new(f)));
        self
    }

    /// Binds a prefix modifier implementation.
    pub fn bind_unary<F>(&mut self, op: UnaryOperator, f: F) -> &mut Self
        where F: Fn(&Self, &Value) -> EvalResult<Value> + Send + Sync + 'static
    {
        self.bindings
            .insert(BindingKey::Mod(op), Binding::Unary(Arc::new(f)));
        self
    }

    /// Inserts a raw binding under any key, without the shape checks the
    /// typed helpers imply. Operator sites surface a shape mismatch as
    /// an invalid-operator-binding error at evaluation time.
    pub fn insert(&mut self, key: BindingKey, binding: Binding) -> &mut Self {
        self.bindings.insert(key, binding);
        self
    }

    /// Gets the binding for a key in this environment alone, without the
    /// default-environment fallback.
    #[must_use]
    pub fn get(&self, key: &BindingKey) -> Option<&Binding> {
        self.bindings.get(key)
    }

    /// Resolves a key against this environment first and the default
    /// environment second.
    #[must_use]
    pub fn resolve(&self, key: &BindingKey) -> Option<&Binding> {
        self.get(key).or_else(|| default_environment().get(key))
    }
}

/// Gets the default environment: one binding per operator, plus the
/// constants `true` and `false`.
///
/// Built once, lazily, and shared for the lifetime of the process.
#[must_use]
pub fn default_environment() -> &'static Environment {
    static DEFAULT: LazyLock<Environment> = LazyLock::new(build_default);
    &DEFAULT
}

fn build_default() -> Environment {
    let mut env = Environment::new();
    env.bind_binary(BinaryOperator::Pow, power::pow)
       .bind_binary(BinaryOperator::Mul, muldiv::mul)
       .bind_binary(BinaryOperator::Div, muldiv::div)
       .bind_binary(BinaryOperator::Add, addsub::add)
       .bind_binary(BinaryOperator::Sub, addsub::sub)
       .bind_binary(BinaryOperator::Less, comparison::less)
       .bind_binary(BinaryOperator::LessEqual, comparison::less_equal)
       .bind_binary(BinaryOperator::Equal, comparison::equal)
       .bind_binary(BinaryOperator::NotEqual, comparison::not_equal)
       .bind_binary(BinaryOperator::Greater, comparison::greater)
       .bind_binary(BinaryOperator::GreaterEqual, comparison::greater_equal)
       .bind_binary(BinaryOperator::And, logic::and)
       .bind_binary(BinaryOperator::Or, logic::or)
       .bind_unary(UnaryOperator::Negate, unary::negate)
       .bind_unary(UnaryOperator::Not, unary::not)
       .bind("true", true)
       .bind("false", false);
    env
}
