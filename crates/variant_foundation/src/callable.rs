//! Callable payloads: native procedures and lambdas.
//!
//! Neither kind is displayable or serializable. They exist so that a
//! [`Variant`] can hold everything an interpreter binds to a name.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::value::Variant;

/// Signature of a host-provided native procedure.
pub type NativeProc = fn(&[Variant]) -> Variant;

/// Native procedure callable from the interpreter.
#[derive(Clone, Copy)]
pub struct Procedure {
    /// Procedure name for debugging.
    pub name: Option<&'static str>,
    /// Function pointer.
    pub func: NativeProc,
}

impl Procedure {
    /// Wraps an anonymous function pointer.
    #[must_use]
    pub const fn new(func: NativeProc) -> Self {
        Self { name: None, func }
    }

    /// Wraps a function pointer under a debug name.
    #[must_use]
    pub const fn named(name: &'static str, func: NativeProc) -> Self {
        Self {
            name: Some(name),
            func,
        }
    }
}

impl PartialEq for Procedure {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.func, other.func)
    }
}

impl Eq for Procedure {}

impl Hash for Procedure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.func as usize).hash(state);
    }
}

impl fmt::Debug for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "<procedure {name}>"),
            None => write!(f, "<procedure>"),
        }
    }
}

/// Opaque handle to an environment owned by the embedding interpreter.
///
/// The handle is type-erased; only code that knows the concrete
/// environment type can look inside it via [`Environment::downcast_ref`].
#[derive(Clone)]
pub struct Environment(Arc<dyn Any + Send + Sync>);

impl Environment {
    /// Wraps an environment value in a new shared handle.
    #[must_use]
    pub fn new<T: Any + Send + Sync>(env: T) -> Self {
        Self(Arc::new(env))
    }

    /// Reuses an existing shared environment.
    #[must_use]
    pub fn from_arc(env: Arc<dyn Any + Send + Sync>) -> Self {
        Self(env)
    }

    /// Returns the environment if it has concrete type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns true if both handles point at the same environment.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    fn addr(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<environment {:#x}>", self.addr())
    }
}

/// User-defined callable.
///
/// Holds the form it was built from (parameters and body, as variants)
/// and the environment it closed over.
#[derive(Clone, Debug)]
pub struct Lambda {
    /// Parameter list and body.
    pub form: Vec<Variant>,
    /// Captured environment.
    pub env: Environment,
}

impl Lambda {
    /// Creates a lambda from its form and captured environment.
    #[must_use]
    pub fn new(form: Vec<Variant>, env: Environment) -> Self {
        Self { form, env }
    }
}

// Lambdas are equal only when they close over the same environment.
impl PartialEq for Lambda {
    fn eq(&self, other: &Self) -> bool {
        self.env.ptr_eq(&other.env) && self.form == other.form
    }
}

impl Eq for Lambda {}

impl Hash for Lambda {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.env.addr().hash(state);
        self.form.hash(state);
    }
}
