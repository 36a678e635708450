//! Toggle Core
//!
//! A boolean toggle with "control props": the value can be owned by the
//! toggle itself (uncontrolled) or supplied by the caller on every update
//! cycle (controlled).
//!
//! - **State & reducer**: [`ToggleState`] only moves through [`Action`]s fed
//!   to a [`Reducer`]
//! - **Engine**: [`Toggle`] resolves the effective value, dispatches actions
//!   and reports every requested change through `on_change`
//! - **Prop helpers**: [`Toggle::toggler_props`] and
//!   [`Toggle::resetter_props`] merge caller click handlers with the
//!   toggle's own
//! - **Diagnostics**: development builds warn when an instance switches
//!   between controlled and uncontrolled, or is controlled with no way to
//!   change
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use toggle_core::{ClickEvent, ControlProps, Toggle, ToggleConfig, TriggerProps};
//!
//! let shared = Arc::new(Mutex::new(false));
//! let toggle = Toggle::new(ToggleConfig::new());
//!
//! let store = shared.clone();
//! toggle.update(
//!     ControlProps::new()
//!         .on(*shared.lock().unwrap())
//!         .on_change(move |state, _| *store.lock().unwrap() = state.on),
//! );
//!
//! let button = toggle.toggler_props(TriggerProps::new());
//! assert_eq!(button.pressed, Some(false));
//! button.click(&ClickEvent::new());
//!
//! // The toggle asked; the caller decides
//! assert!(*shared.lock().unwrap());
//! assert!(!toggle.on());
//! ```

pub mod diagnostics;
pub mod error;
pub mod handler;
pub mod props;
pub mod state;
pub mod toggle;

pub use diagnostics::{
    BuildMode, ControlObserver, DiagnosticSink, Mode, RecordingSink, TracingSink, UsageWarning,
};
pub use error::{Result, ToggleError};
pub use handler::{call_all, ClickEvent, ClickHandler, Handler};
pub use props::TriggerProps;
pub use state::{default_reducer, toggle_reducer, Action, ActionKind, Reducer, ToggleState};
pub use toggle::{ChangeHandler, ControlProps, Toggle, ToggleConfig};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::handler::ClickEvent;
    pub use crate::props::TriggerProps;
    pub use crate::state::{Action, ToggleState};
    pub use crate::toggle::{ControlProps, Toggle, ToggleConfig};
}
