//! The toggle engine
//!
//! A [`Toggle`] tracks a boolean that is either driven by the caller
//! (controlled, `on` supplied on every update cycle) or by its own state
//! (uncontrolled). Either way every requested change is reported through the
//! `on_change` callback, which is how a controlling caller learns it should
//! push a new value back in.
//!
//! # Example
//!
//! ```rust
//! use toggle_core::{ControlProps, Toggle, ToggleConfig};
//!
//! // Uncontrolled: the toggle keeps its own state
//! let toggle = Toggle::with_props(ToggleConfig::new(), ControlProps::new());
//! toggle.toggle();
//! assert!(toggle.on());
//! toggle.reset();
//! assert!(!toggle.on());
//!
//! // Controlled: the caller owns the value
//! let controlled = Toggle::with_props(
//!     ToggleConfig::new(),
//!     ControlProps::new().on(true).read_only(true),
//! );
//! controlled.toggle();
//! assert!(controlled.on());
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::diagnostics::{ControlObserver, DiagnosticSink, Mode, TracingSink};
use crate::handler::{ClickEvent, ClickHandler};
use crate::props::TriggerProps;
use crate::state::{default_reducer, Action, Reducer, ToggleState};

/// Change callback, called with the reduced state and the action behind it
pub type ChangeHandler = Arc<dyn Fn(ToggleState, &Action) + Send + Sync>;

/// One-time toggle configuration
///
/// Everything here is read once, when the toggle is created.
#[derive(Clone)]
pub struct ToggleConfig {
    /// Starting value, and the value `reset` goes back to
    pub initial_on: bool,
    /// State transition function
    pub reducer: Reducer,
    /// Name used in usage warnings
    pub component_name: String,
    /// Where usage warnings go
    pub diagnostics: Arc<dyn DiagnosticSink>,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            initial_on: false,
            reducer: default_reducer(),
            component_name: "Toggle".to_string(),
            diagnostics: Arc::new(TracingSink),
        }
    }
}

impl ToggleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting value
    pub fn initial_on(mut self, on: bool) -> Self {
        self.initial_on = on;
        self
    }

    /// Replace the built-in reducer
    pub fn reducer<F>(mut self, reducer: F) -> Self
    where
        F: Fn(&ToggleState, &Action) -> ToggleState + Send + Sync + 'static,
    {
        self.reducer = Arc::new(reducer);
        self
    }

    /// Set the name used in usage warnings
    pub fn component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = name.into();
        self
    }

    /// Send usage warnings somewhere other than `tracing`
    pub fn diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }
}

/// Props supplied on every update cycle
#[derive(Clone, Default)]
pub struct ControlProps {
    /// Externally controlled value; `None` leaves the toggle uncontrolled
    pub on: Option<bool>,
    /// Called on every requested change, controlled or not
    pub on_change: Option<ChangeHandler>,
    /// Acknowledge a controlled toggle without `on_change`
    pub read_only: bool,
}

impl ControlProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Control the value from outside
    pub fn on(mut self, on: bool) -> Self {
        self.on = Some(on);
        self
    }

    /// Set or clear the controlled value
    pub fn controlled(mut self, on: Option<bool>) -> Self {
        self.on = on;
        self
    }

    /// Set the change callback
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(ToggleState, &Action) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(callback));
        self
    }

    /// Set an already shared change callback
    pub fn on_change_shared(mut self, callback: ChangeHandler) -> Self {
        self.on_change = Some(callback);
        self
    }

    /// Declare the controlled value read-only
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn mode(&self) -> Mode {
        Mode::of(self.on)
    }
}

impl fmt::Debug for ControlProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlProps")
            .field("on", &self.on)
            .field("on_change", &self.on_change.is_some())
            .field("read_only", &self.read_only)
            .finish()
    }
}

struct ToggleInner {
    /// Internally tracked state; authoritative only when uncontrolled
    state: ToggleState,
    /// Captured at construction, carried by every `Reset`
    initial_state: ToggleState,
    reducer: Reducer,
    props: ControlProps,
    observer: ControlObserver,
}

impl ToggleInner {
    fn effective_on(&self) -> bool {
        self.props.on.unwrap_or(self.state.on)
    }
}

/// A toggle instance
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct Toggle {
    inner: Arc<Mutex<ToggleInner>>,
}

impl Toggle {
    /// Create a toggle. Until the first [`update`](Self::update) it is
    /// uncontrolled.
    pub fn new(config: ToggleConfig) -> Self {
        let initial_state = ToggleState::new(config.initial_on);
        Self {
            inner: Arc::new(Mutex::new(ToggleInner {
                state: initial_state,
                initial_state,
                reducer: config.reducer,
                props: ControlProps::default(),
                observer: ControlObserver::new(config.component_name, config.diagnostics),
            })),
        }
    }

    /// Create a toggle and run its first update cycle
    pub fn with_props(config: ToggleConfig, props: ControlProps) -> Self {
        let toggle = Self::new(config);
        toggle.update(props);
        toggle
    }

    fn lock(&self) -> MutexGuard<'_, ToggleInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run one update cycle with fresh control props
    ///
    /// Usage warnings are checked after the props are committed and have no
    /// effect on the toggle's behavior.
    pub fn update(&self, props: ControlProps) {
        let mut guard = self.lock();
        let inner = &mut *guard;
        tracing::trace!(on = ?props.on, read_only = props.read_only, "toggle update");
        inner.props = props;
        inner
            .observer
            .observe(inner.props.on, inner.props.on_change.is_some(), inner.props.read_only);
    }

    /// Current effective value
    pub fn on(&self) -> bool {
        self.lock().effective_on()
    }

    /// Mode of the last update cycle
    pub fn mode(&self) -> Mode {
        self.lock().props.mode()
    }

    /// Mode seen on the first update cycle
    pub fn first_mode(&self) -> Option<Mode> {
        self.lock().observer.first_mode()
    }

    /// Internally tracked state, whether or not it is authoritative
    pub fn state(&self) -> ToggleState {
        self.lock().state
    }

    /// State captured at construction
    pub fn initial_state(&self) -> ToggleState {
        self.lock().initial_state
    }

    /// Request a flip
    pub fn toggle(&self) {
        self.dispatch(Action::Toggle);
    }

    /// Request a return to the initial state
    pub fn reset(&self) {
        let initial_state = self.lock().initial_state;
        self.dispatch(Action::Reset { initial_state });
    }

    /// Apply an action
    ///
    /// Uncontrolled toggles update their own state. The reduced state is
    /// computed against the effective value and handed to `on_change` in
    /// both modes. The callback runs after the lock is released, so it may
    /// call back into this toggle.
    pub fn dispatch(&self, action: Action) {
        let (next, on_change) = {
            let mut guard = self.lock();
            let inner = &mut *guard;

            let mut current = inner.state;
            current.on = inner.effective_on();
            let next = (inner.reducer)(&current, &action);

            if inner.props.on.is_none() {
                inner.state = (inner.reducer)(&inner.state, &action);
            }

            tracing::debug!(
                action = %action.kind(),
                mode = %inner.props.mode(),
                on = next.on,
                "toggle dispatch"
            );
            (next, inner.props.on_change.clone())
        };

        if let Some(on_change) = on_change {
            on_change(next, &action);
        }
    }

    /// Props for the element that flips the toggle
    ///
    /// The caller's click handler runs before the toggle's. `pressed` is
    /// filled with the current value unless the caller set it.
    pub fn toggler_props(&self, overrides: TriggerProps) -> TriggerProps {
        let on = self.on();
        let toggle = self.clone();
        let internal: ClickHandler = Arc::new(move |_: &ClickEvent| toggle.toggle());

        let mut props = overrides.chain_click(internal);
        props.pressed = props.pressed.or(Some(on));
        props
    }

    /// Props for the element that resets the toggle
    pub fn resetter_props(&self, overrides: TriggerProps) -> TriggerProps {
        let toggle = self.clone();
        let internal: ClickHandler = Arc::new(move |_: &ClickEvent| toggle.reset());
        overrides.chain_click(internal)
    }
}

impl fmt::Debug for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("Toggle")
            .field("on", &inner.effective_on())
            .field("state", &inner.state)
            .field("initial_state", &inner.initial_state)
            .field("props", &inner.props)
            .finish()
    }
}
