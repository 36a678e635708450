//! Event handlers and the call-all combinator

use smallvec::SmallVec;
use std::sync::Arc;

/// A shareable event handler
pub type Handler<A> = Arc<dyn Fn(&A) + Send + Sync>;

/// Handler bound to a trigger element's click
pub type ClickHandler = Handler<ClickEvent>;

/// A click delivered to a trigger element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickEvent {
    /// Identifier of the element that was clicked, if the host knows it
    pub target: Option<String>,
}

impl ClickEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
        }
    }
}

/// Merge optional handlers into one
///
/// The returned handler calls every present handler in order with the same
/// argument. Missing handlers are skipped.
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use toggle_core::handler::{call_all, Handler};
///
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let first: Handler<u32> = {
///     let log = log.clone();
///     Arc::new(move |n: &u32| log.lock().unwrap().push(("first", *n)))
/// };
/// let second: Handler<u32> = {
///     let log = log.clone();
///     Arc::new(move |n: &u32| log.lock().unwrap().push(("second", *n)))
/// };
///
/// let both = call_all([Some(first), None, Some(second)]);
/// both(&7);
/// assert_eq!(*log.lock().unwrap(), vec![("first", 7), ("second", 7)]);
/// ```
pub fn call_all<A, I>(handlers: I) -> Handler<A>
where
    A: 'static,
    I: IntoIterator<Item = Option<Handler<A>>>,
{
    let handlers: SmallVec<[Handler<A>; 2]> = handlers.into_iter().flatten().collect();
    Arc::new(move |arg: &A| {
        for handler in &handlers {
            handler(arg);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recorder(log: &Arc<Mutex<Vec<&'static str>>>, name: &'static str) -> ClickHandler {
        let log = log.clone();
        Arc::new(move |_: &ClickEvent| log.lock().unwrap().push(name))
    }

    #[test]
    fn test_call_all_runs_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let merged = call_all([
            Some(recorder(&log, "a")),
            Some(recorder(&log, "b")),
            Some(recorder(&log, "c")),
        ]);

        merged(&ClickEvent::new());
        assert_eq!(*log.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_call_all_skips_missing() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let merged = call_all([None, Some(recorder(&log, "only")), None]);

        merged(&ClickEvent::new());
        merged(&ClickEvent::new());
        assert_eq!(*log.lock().unwrap(), vec!["only", "only"]);
    }

    #[test]
    fn test_call_all_empty() {
        let merged: ClickHandler = call_all(std::iter::empty());
        merged(&ClickEvent::new());
    }

    #[test]
    fn test_call_all_passes_same_argument() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let make = |seen: &Arc<Mutex<Vec<Option<String>>>>| -> ClickHandler {
            let seen = seen.clone();
            Arc::new(move |event: &ClickEvent| seen.lock().unwrap().push(event.target.clone()))
        };

        let merged = call_all([Some(make(&seen)), Some(make(&seen))]);
        merged(&ClickEvent::on("switch-a"));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen.iter().all(|t| t.as_deref() == Some("switch-a")));
    }
}
