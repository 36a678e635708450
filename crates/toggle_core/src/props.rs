//! Prop bundles for trigger elements
//!
//! [`TriggerProps`] is what a toggle hands to the element that flips it or
//! resets it. Callers pass their own bundle in as overrides; the toggle adds
//! its click handler behind the caller's and fills in `pressed` when the
//! caller left it empty.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

use crate::handler::{call_all, ClickEvent, ClickHandler};

/// Attributes and handlers for a trigger element
#[derive(Clone, Default)]
pub struct TriggerProps {
    /// Pressed-state indicator (`aria-pressed` on the web)
    pub pressed: Option<bool>,
    /// Click handler
    pub on_click: Option<ClickHandler>,
    /// Everything else, passed through untouched
    pub attributes: FxHashMap<String, String>,
}

impl TriggerProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pressed indicator
    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = Some(pressed);
        self
    }

    /// Set the click handler
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ClickEvent) + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(handler));
        self
    }

    /// Add a pass-through attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Look up a pass-through attribute
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Fire the click handler, if any
    pub fn click(&self, event: &ClickEvent) {
        if let Some(handler) = &self.on_click {
            handler(event);
        }
    }

    /// Put `internal` behind whatever click handler the caller supplied
    pub(crate) fn chain_click(mut self, internal: ClickHandler) -> Self {
        self.on_click = Some(call_all([self.on_click.take(), Some(internal)]));
        self
    }
}

impl fmt::Debug for TriggerProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerProps")
            .field("pressed", &self.pressed)
            .field("on_click", &self.on_click.is_some())
            .field("attributes", &self.attributes)
            .finish()
    }
}
