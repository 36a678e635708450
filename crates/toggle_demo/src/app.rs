//! Demo application
//!
//! Two controlled switches share one boolean and one change handler, so
//! they move together. The handler stops accepting toggles once
//! `max_clicks` of them went through, until the reset button is pressed.
//! A third switch is left uncontrolled and keeps its own state.

use clap::ValueEnum;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use toggle_core::prelude::*;
use toggle_core::ChangeHandler;
use tracing::debug;

use crate::config::DemoConfig;
use crate::switch::{Button, Switch};

/// Something the user can click
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Target {
    /// First controlled switch
    A,
    /// Second controlled switch
    B,
    /// Uncontrolled switch
    C,
    /// Reset button
    Reset,
}

impl Target {
    fn id(&self) -> &'static str {
        match self {
            Target::A => "a",
            Target::B => "b",
            Target::C => "c",
            Target::Reset => "reset",
        }
    }
}

/// State owned by the parent
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub both_on: bool,
    pub times_clicked: u32,
}

/// One rendered frame
pub struct Frame {
    switches: Vec<(Target, Switch)>,
    reset: Button,
    status: String,
}

impl Frame {
    pub fn switch(&self, target: Target) -> Option<&Switch> {
        self.switches
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, switch)| switch)
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Deliver a click to the element behind `target`
    pub fn click(&self, target: Target) {
        match target {
            Target::Reset => self.reset.click(),
            other => {
                if let Some(switch) = self.switch(other) {
                    switch.click();
                }
            }
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (target, switch) in &self.switches {
            writeln!(f, "  {:<5} {}", target.id(), switch)?;
        }
        writeln!(f, "  {}", self.status)?;
        write!(f, "  {:<5} {}", Target::Reset.id(), self.reset)
    }
}

/// The demo parent
pub struct App {
    config: DemoConfig,
    state: Arc<Mutex<AppState>>,
    on_change: ChangeHandler,
    first: Toggle,
    second: Toggle,
    free: Toggle,
}

impl App {
    pub fn new(config: DemoConfig) -> Self {
        let state = Arc::new(Mutex::new(AppState::default()));
        let on_change = Self::change_handler(state.clone(), config.max_clicks);
        let switch = ToggleConfig::new().component_name("Switch");

        Self {
            first: Toggle::new(switch.clone()),
            second: Toggle::new(switch.clone()),
            free: Toggle::new(switch.initial_on(config.uncontrolled_initial_on)),
            config,
            state,
            on_change,
        }
    }

    /// The change handler shared by both controlled switches
    fn change_handler(state: Arc<Mutex<AppState>>, max_clicks: u32) -> ChangeHandler {
        Arc::new(move |next: ToggleState, action: &Action| {
            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            match action {
                Action::Toggle if state.times_clicked >= max_clicks => {
                    debug!(clicks = state.times_clicked, "toggle ignored");
                }
                Action::Toggle => {
                    state.both_on = next.on;
                    state.times_clicked += 1;
                }
                Action::Reset { .. } => {
                    state.both_on = next.on;
                    state.times_clicked = 0;
                }
            }
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> AppState {
        *self.lock_state()
    }

    pub fn first(&self) -> &Toggle {
        &self.first
    }

    pub fn second(&self) -> &Toggle {
        &self.second
    }

    pub fn free(&self) -> &Toggle {
        &self.free
    }

    /// Run an update cycle and build the frame
    pub fn render(&self) -> Frame {
        let state = self.state();
        let controlled = || {
            ControlProps::new()
                .on(state.both_on)
                .on_change_shared(self.on_change.clone())
        };

        self.first.update(controlled());
        self.second.update(controlled());
        self.free.update(ControlProps::new());

        let labels = &self.config.labels;
        let switch = |target: Target, label: &str, toggle: &Toggle| {
            let props = toggle.toggler_props(TriggerProps::new().attr("id", target.id()));
            (target, Switch::new(label, props))
        };

        let status = if state.times_clicked >= self.config.max_clicks {
            "Whoa, you clicked too much!".to_string()
        } else {
            format!("Click count: {}", state.times_clicked)
        };

        Frame {
            switches: vec![
                switch(Target::A, &labels.first, &self.first),
                switch(Target::B, &labels.second, &self.second),
                switch(Target::C, &labels.free, &self.free),
            ],
            reset: Button::new(
                "Reset",
                self.first
                    .resetter_props(TriggerProps::new().attr("id", Target::Reset.id())),
            ),
            status,
        }
    }

    /// Click on the current frame and render the next one
    pub fn click(&self, target: Target) -> Frame {
        debug!(?target, "click");
        self.render().click(target);
        self.render()
    }
}
