// crates/engine/src/multicast.rs
//! Ordered handler lists invoked against shared mutable state.
use std::fmt;
use std::ops::AddAssign;

use lazyq_shared_kernel::{BoxError, QueryError, Result};
use log::debug;

type Action<S> = Box<dyn Fn(&mut S)>;
type Fallible<S> = Box<dyn Fn(&mut S) -> std::result::Result<(), BoxError>>;

/// A registered handler.
pub enum Handler<S> {
    /// Cannot fail.
    Action(Action<S>),
    /// May abort the rest of the chain.
    Fallible(Fallible<S>),
}

impl<S> Handler<S> {
    fn call(&self, state: &mut S) -> std::result::Result<(), BoxError> {
        match self {
            Self::Action(f) => {
                f(state);
                Ok(())
            }
            Self::Fallible(f) => f(state),
        }
    }
}

/// Handlers run in registration order; appending never reorders or drops
/// earlier handlers.
///
/// Every handler receives the same `&mut S`, so later handlers observe what
/// earlier ones wrote. The first failing handler stops the chain.
pub struct Multicast<S> {
    handlers: Vec<Handler<S>>,
}

impl<S: 'static> Multicast<S> {
    pub const fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    pub fn register<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&mut S) + 'static,
    {
        self.handlers.push(Handler::Action(Box::new(handler)));
        self
    }

    pub fn try_register<F, E>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&mut S) -> std::result::Result<(), E> + 'static,
        E: Into<BoxError>,
    {
        let fallible: Fallible<S> = Box::new(move |state: &mut S| {
            handler(state).map_err(|err| -> BoxError { err.into() })
        });
        self.handlers.push(Handler::Fallible(fallible));
        self
    }

    /// Calls every handler in order against `state`.
    ///
    /// # Errors
    ///
    /// `HandlerFailure` carrying the index of the first handler that failed;
    /// the handlers after it are not called.
    pub fn invoke(&self, state: &mut S) -> Result<()> {
        for (index, handler) in self.handlers.iter().enumerate() {
            if let Err(source) = handler.call(state) {
                debug!("multicast handler #{index} failed, {} skipped", self.handlers.len() - index - 1);
                return Err(QueryError::HandlerFailure { index, source });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<S: 'static> Default for Multicast<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: 'static, F> AddAssign<F> for Multicast<S>
where
    F: Fn(&mut S) + 'static,
{
    fn add_assign(&mut self, handler: F) {
        self.register(handler);
    }
}

impl<S> fmt::Debug for Multicast<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Multicast")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
