//! Toggle state, actions and the default reducer
//!
//! A toggle holds a single boolean. The only way to move it is to feed an
//! [`Action`] through a reducer:
//!
//! ```rust
//! use toggle_core::state::{toggle_reducer, Action, ToggleState};
//!
//! let initial = ToggleState::new(false);
//! let on = toggle_reducer(&initial, &Action::Toggle);
//! assert!(on.on);
//!
//! let back = toggle_reducer(&on, &Action::Reset { initial_state: initial });
//! assert_eq!(back, initial);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::ToggleError;

/// The toggle's state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ToggleState {
    /// Whether the toggle is on
    pub on: bool,
}

impl ToggleState {
    pub fn new(on: bool) -> Self {
        Self { on }
    }
}

/// A requested state transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Flip `on`
    Toggle,
    /// Go back to the state captured when the toggle was created
    Reset { initial_state: ToggleState },
}

impl Action {
    /// The tag of this action, without its payload
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Toggle => ActionKind::Toggle,
            Action::Reset { .. } => ActionKind::Reset,
        }
    }
}

/// Action tags
///
/// Parsing a tag is the one place an unsupported action can show up, since
/// [`Action`] itself is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Toggle,
    Reset,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Toggle => "toggle",
            ActionKind::Reset => "reset",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = ToggleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toggle" => Ok(ActionKind::Toggle),
            "reset" => Ok(ActionKind::Reset),
            other => Err(ToggleError::UnsupportedActionType(other.to_string())),
        }
    }
}

/// A state transition function
///
/// Custom reducers replace [`toggle_reducer`] entirely, so they have to
/// answer both action kinds themselves.
pub type Reducer = Arc<dyn Fn(&ToggleState, &Action) -> ToggleState + Send + Sync>;

/// The built-in reducer
///
/// `Reset` hands back the carried initial state as is rather than deriving
/// a fresh default.
pub fn toggle_reducer(state: &ToggleState, action: &Action) -> ToggleState {
    match action {
        Action::Toggle => ToggleState { on: !state.on },
        Action::Reset { initial_state } => *initial_state,
    }
}

/// The built-in reducer as a shareable [`Reducer`]
pub fn default_reducer() -> Reducer {
    Arc::new(toggle_reducer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let off = ToggleState::new(false);
        assert!(toggle_reducer(&off, &Action::Toggle).on);
        assert!(!toggle_reducer(&ToggleState::new(true), &Action::Toggle).on);
    }

    #[test]
    fn test_reset_returns_carried_state() {
        let carried = ToggleState::new(true);
        let current = ToggleState::new(false);

        let next = toggle_reducer(
            &current,
            &Action::Reset {
                initial_state: carried,
            },
        );
        assert_eq!(next, carried);
    }

    #[test]
    fn test_action_kind() {
        assert_eq!(Action::Toggle.kind(), ActionKind::Toggle);
        let reset = Action::Reset {
            initial_state: ToggleState::default(),
        };
        assert_eq!(reset.kind(), ActionKind::Reset);
        assert_eq!(reset.kind().to_string(), "reset");
    }

    #[test]
    fn test_parse_action_kind() {
        assert_eq!("toggle".parse::<ActionKind>(), Ok(ActionKind::Toggle));
        assert_eq!("reset".parse::<ActionKind>(), Ok(ActionKind::Reset));

        let err = "explode".parse::<ActionKind>().unwrap_err();
        assert_eq!(err, ToggleError::UnsupportedActionType("explode".into()));
        assert_eq!(err.to_string(), "Unsupported action type: explode");
    }

    #[test]
    fn test_default_reducer_is_builtin() {
        let reducer = default_reducer();
        let state = ToggleState::new(false);
        assert_eq!(
            reducer(&state, &Action::Toggle),
            toggle_reducer(&state, &Action::Toggle)
        );
    }
}
