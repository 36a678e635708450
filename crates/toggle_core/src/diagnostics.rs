//! Development-time usage warnings
//!
//! Two things are worth warning about when a toggle is driven from outside:
//!
//! - the instance flips between controlled and uncontrolled over its
//!   lifetime ([`UsageWarning::ModeSwitch`]);
//! - it is controlled but nobody listens for change requests and the caller
//!   did not declare it read-only ([`UsageWarning::ReadOnly`]).
//!
//! Warnings never fail and never change what the toggle reports. They are
//! only produced when [`BuildMode::current`] is [`BuildMode::Development`],
//! which is decided once, here, from `debug_assertions` or the
//! `dev-warnings` feature. In production builds [`ControlObserver::observe`]
//! compiles to nothing.

use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use thiserror::Error;

/// Whether the toggle was fed an external value this cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The `on` prop drives the value
    Controlled,
    /// Internal state drives the value
    Uncontrolled,
}

impl Mode {
    /// Derive the mode from the external value
    pub fn of(on: Option<bool>) -> Self {
        if on.is_some() {
            Mode::Controlled
        } else {
            Mode::Uncontrolled
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, Mode::Controlled)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Controlled => f.write_str("controlled"),
            Mode::Uncontrolled => f.write_str("uncontrolled"),
        }
    }
}

/// Build flavour, fixed at compile time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    pub const fn current() -> Self {
        if cfg!(any(debug_assertions, feature = "dev-warnings")) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    pub const fn warnings_enabled(&self) -> bool {
        matches!(self, BuildMode::Development)
    }
}

/// An advisory warning about how a toggle is being driven
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageWarning {
    #[error(
        "`{component}` is changing from {from} to be {to}. Components should not switch \
         from uncontrolled to controlled (or vice versa). Decide between using a controlled \
         or uncontrolled `{component}` for the lifetime of the component. \
         Check the `{prop}` prop."
    )]
    ModeSwitch {
        component: String,
        prop: &'static str,
        from: Mode,
        to: Mode,
    },

    #[error(
        "A `{prop}` prop was provided to `{component}` without an `{on_change}` handler. \
         This will result in a read-only `{prop}` value. If you want it to be mutable, \
         use `{initial}`. Otherwise, set either `{on_change}` or `{read_only}`."
    )]
    ReadOnly {
        component: String,
        prop: &'static str,
        on_change: &'static str,
        initial: &'static str,
        read_only: &'static str,
    },
}

/// Receives usage warnings
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, warning: &UsageWarning);
}

/// Default sink: forwards warnings to `tracing`
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, warning: &UsageWarning) {
        tracing::warn!(target: "toggle_core::diagnostics", "{}", warning);
    }
}

/// Sink that keeps every warning in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    warnings: Mutex<Vec<UsageWarning>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Everything recorded so far
    pub fn warnings(&self) -> Vec<UsageWarning> {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count warnings of one kind
    pub fn count(&self, pred: impl Fn(&UsageWarning) -> bool) -> usize {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|w| pred(w))
            .count()
    }

    pub fn clear(&self) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn warn(&self, warning: &UsageWarning) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(warning.clone());
    }
}

/// The inputs the read-only check depends on
#[cfg_attr(not(any(debug_assertions, feature = "dev-warnings")), allow(dead_code))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ReadOnlyInputs {
    controlled: bool,
    has_on_change: bool,
    read_only: bool,
}

/// Watches one toggle's control props across update cycles
#[cfg_attr(not(any(debug_assertions, feature = "dev-warnings")), allow(dead_code))]
pub struct ControlObserver {
    component: String,
    sink: Arc<dyn DiagnosticSink>,
    /// Mode seen on the first update cycle, written once
    first_mode: OnceLock<Mode>,
    last_mode: Option<Mode>,
    last_read_only: Option<ReadOnlyInputs>,
}

impl ControlObserver {
    pub fn new(component: impl Into<String>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            component: component.into(),
            sink,
            first_mode: OnceLock::new(),
            last_mode: None,
            last_read_only: None,
        }
    }

    /// The mode seen on the first update cycle
    pub fn first_mode(&self) -> Option<Mode> {
        self.first_mode.get().copied()
    }

    /// Check one committed update cycle
    ///
    /// The mode-switch check fires once per actual change of mode after the
    /// first cycle. The read-only check runs whenever one of its inputs
    /// changed since the previous cycle.
    #[cfg(any(debug_assertions, feature = "dev-warnings"))]
    pub fn observe(&mut self, on: Option<bool>, has_on_change: bool, read_only: bool) {
        let mode = Mode::of(on);
        self.first_mode.get_or_init(|| mode);

        if let Some(previous) = self.last_mode.replace(mode) {
            if previous != mode {
                self.sink.warn(&UsageWarning::ModeSwitch {
                    component: self.component.clone(),
                    prop: "on",
                    from: previous,
                    to: mode,
                });
            }
        }

        let inputs = ReadOnlyInputs {
            controlled: mode.is_controlled(),
            has_on_change,
            read_only,
        };
        if self.last_read_only.replace(inputs) != Some(inputs)
            && inputs.controlled
            && !inputs.has_on_change
            && !inputs.read_only
        {
            self.sink.warn(&UsageWarning::ReadOnly {
                component: self.component.clone(),
                prop: "on",
                on_change: "on_change",
                initial: "initial_on",
                read_only: "read_only",
            });
        }
    }

    #[cfg(not(any(debug_assertions, feature = "dev-warnings")))]
    #[inline(always)]
    pub fn observe(&mut self, _on: Option<bool>, _has_on_change: bool, _read_only: bool) {}
}

impl fmt::Debug for ControlObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlObserver")
            .field("component", &self.component)
            .field("first_mode", &self.first_mode.get())
            .field("last_mode", &self.last_mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observer() -> (ControlObserver, Arc<RecordingSink>) {
        let sink = RecordingSink::new();
        (ControlObserver::new("Toggle", sink.clone()), sink)
    }

    fn is_mode_switch(w: &UsageWarning) -> bool {
        matches!(w, UsageWarning::ModeSwitch { .. })
    }

    fn is_read_only(w: &UsageWarning) -> bool {
        matches!(w, UsageWarning::ReadOnly { .. })
    }

    #[test]
    fn test_mode_of() {
        assert_eq!(Mode::of(None), Mode::Uncontrolled);
        assert_eq!(Mode::of(Some(false)), Mode::Controlled);
        assert_eq!(Mode::of(Some(true)), Mode::Controlled);
    }

    #[test]
    fn test_build_mode_matches_cfg() {
        let expected = cfg!(any(debug_assertions, feature = "dev-warnings"));
        assert_eq!(BuildMode::current().warnings_enabled(), expected);
    }

    #[test]
    #[cfg_attr(not(any(debug_assertions, feature = "dev-warnings")), ignore)]
    fn test_first_cycle_never_warns_about_mode() {
        let (mut obs, sink) = observer();
        obs.observe(Some(true), true, false);
        assert!(sink.is_empty());
        assert_eq!(obs.first_mode(), Some(Mode::Controlled));
    }

    #[test]
    #[cfg_attr(not(any(debug_assertions, feature = "dev-warnings")), ignore)]
    fn test_mode_switch_once_per_change() {
        let (mut obs, sink) = observer();
        obs.observe(None, true, false);
        obs.observe(None, true, false);
        assert_eq!(sink.count(is_mode_switch), 0);

        obs.observe(Some(false), true, false);
        obs.observe(Some(true), true, false);
        assert_eq!(sink.count(is_mode_switch), 1);

        obs.observe(None, true, false);
        obs.observe(None, true, false);
        assert_eq!(sink.count(is_mode_switch), 2);

        assert_eq!(obs.first_mode(), Some(Mode::Uncontrolled));
        let warnings = sink.warnings();
        assert_eq!(
            warnings[0],
            UsageWarning::ModeSwitch {
                component: "Toggle".into(),
                prop: "on",
                from: Mode::Uncontrolled,
                to: Mode::Controlled,
            }
        );
    }

    #[test]
    #[cfg_attr(not(any(debug_assertions, feature = "dev-warnings")), ignore)]
    fn test_read_only_warning_per_input_change() {
        let (mut obs, sink) = observer();
        obs.observe(Some(false), false, false);
        assert_eq!(sink.count(is_read_only), 1);

        // Value changes alone are not a relevant input
        obs.observe(Some(true), false, false);
        assert_eq!(sink.count(is_read_only), 1);

        // Gaining a handler clears it, losing it again warns again
        obs.observe(Some(true), true, false);
        assert_eq!(sink.count(is_read_only), 1);
        obs.observe(Some(true), false, false);
        assert_eq!(sink.count(is_read_only), 2);
    }

    #[test]
    #[cfg_attr(not(any(debug_assertions, feature = "dev-warnings")), ignore)]
    fn test_read_only_suppressed() {
        let (mut obs, sink) = observer();
        obs.observe(Some(true), false, true);
        obs.observe(Some(false), true, false);
        obs.observe(None, false, false);
        assert_eq!(sink.count(is_read_only), 0);
    }

    #[test]
    fn test_warning_text() {
        let warning = UsageWarning::ReadOnly {
            component: "Toggle".into(),
            prop: "on",
            on_change: "on_change",
            initial: "initial_on",
            read_only: "read_only",
        };
        let text = warning.to_string();
        assert!(text.starts_with("A `on` prop was provided to `Toggle` without an `on_change`"));
        assert!(text.contains("use `initial_on`"));
        assert!(text.contains("`read_only`"));

        let switch = UsageWarning::ModeSwitch {
            component: "Toggle".into(),
            prop: "on",
            from: Mode::Controlled,
            to: Mode::Uncontrolled,
        };
        assert!(switch
            .to_string()
            .starts_with("`Toggle` is changing from controlled to be uncontrolled."));
    }
}
