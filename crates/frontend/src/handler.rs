//! Event handler slots.
//!
//! Some controls in the shell have no behavior yet. Rather than leaving their
//! callbacks unset, they carry a named stub that logs when triggered.

use std::fmt;

use yew::Callback;

/// What happened when a handler slot was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    Unimplemented(&'static str),
}

/// A callback slot that is either bound or an explicit stub.
pub enum Handler<IN> {
    Bound(Callback<IN>),
    Unimplemented(&'static str),
}

impl<IN> Handler<IN> {
    pub fn bound(callback: Callback<IN>) -> Self {
        Self::Bound(callback)
    }

    /// Stub for a control whose behavior has not been written.
    pub fn unimplemented(name: &'static str) -> Self {
        Self::Unimplemented(name)
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, Self::Bound(_))
    }

    /// Trigger the slot.
    pub fn emit(&self, input: IN) -> Dispatch {
        match self {
            Self::Bound(callback) => {
                callback.emit(input);
                Dispatch::Handled
            }
            Self::Unimplemented(name) => {
                log::warn!("{name} handler is not implemented");
                Dispatch::Unimplemented(name)
            }
        }
    }
}

impl<IN: 'static> Handler<IN> {
    /// Adapt the slot into a Yew callback taking a different event type.
    pub fn reform<E, F>(&self, f: F) -> Callback<E>
    where
        F: Fn(E) -> IN + 'static,
    {
        let handler = self.clone();
        Callback::from(move |event: E| {
            handler.emit(f(event));
        })
    }
}

impl<IN> Clone for Handler<IN> {
    fn clone(&self) -> Self {
        match self {
            Self::Bound(callback) => Self::Bound(callback.clone()),
            Self::Unimplemented(name) => Self::Unimplemented(name),
        }
    }
}

// Callback equality is pointer equality, which is what props diffing wants.
impl<IN> PartialEq for Handler<IN> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bound(a), Self::Bound(b)) => a == b,
            (Self::Unimplemented(a), Self::Unimplemented(b)) => a == b,
            _ => false,
        }
    }
}

impl<IN> fmt::Debug for Handler<IN> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bound(_) => f.write_str("Handler::Bound"),
            Self::Unimplemented(name) => write!(f, "Handler::Unimplemented({name})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_unimplemented_reports_its_name() {
        let handler = Handler::<()>::unimplemented("fab");

        assert!(!handler.is_bound());
        assert_eq!(handler.emit(()), Dispatch::Unimplemented("fab"));
    }

    #[test]
    fn test_bound_handler_runs_callback() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let handler = {
            let seen = seen.clone();
            Handler::bound(Callback::from(move |query: String| seen.borrow_mut().push(query)))
        };

        assert_eq!(handler.emit("rust".to_string()), Dispatch::Handled);
        assert_eq!(*seen.borrow(), vec!["rust".to_string()]);
    }

    #[test]
    fn test_reform_routes_through_stub() {
        let handler = Handler::<String>::unimplemented("search");
        let callback = handler.reform(|n: u32| n.to_string());

        // Must not panic.
        callback.emit(7);
    }

    #[test]
    fn test_equality() {
        let callback = Callback::from(|_: ()| ());
        let a = Handler::bound(callback.clone());
        let b = Handler::bound(callback);

        assert_eq!(a, b);
        assert_eq!(Handler::<()>::unimplemented("fab"), Handler::unimplemented("fab"));
        assert_ne!(a, Handler::unimplemented("fab"));
    }
}
