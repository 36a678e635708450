//! Text switch
//!
//! Stand-in for a real switch widget: draws a track from the pressed
//! indicator and forwards clicks to whatever handler it was given.

use std::fmt;
use toggle_core::{ClickEvent, TriggerProps};

/// A labelled switch bound to trigger props
pub struct Switch {
    label: String,
    props: TriggerProps,
}

impl Switch {
    pub fn new(label: impl Into<String>, props: TriggerProps) -> Self {
        Self {
            label: label.into(),
            props,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the track is drawn as on
    pub fn is_on(&self) -> bool {
        self.props.pressed.unwrap_or(false)
    }

    pub fn click(&self) {
        let target = self.props.get_attr("id").map(str::to_string);
        self.props.click(&ClickEvent { target });
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let track = if self.is_on() { "[ ON]" } else { "[OFF]" };
        write!(f, "{} {}", track, self.label())
    }
}

/// A plain labelled button
pub struct Button {
    label: String,
    props: TriggerProps,
}

impl Button {
    pub fn new(label: impl Into<String>, props: TriggerProps) -> Self {
        Self {
            label: label.into(),
            props,
        }
    }

    pub fn click(&self) {
        let target = self.props.get_attr("id").map(str::to_string);
        self.props.click(&ClickEvent { target });
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "< {} >", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_switch_track() {
        let on = Switch::new("Wifi", TriggerProps::new().pressed(true));
        let off = Switch::new("Wifi", TriggerProps::new().pressed(false));
        let unknown = Switch::new("Wifi", TriggerProps::new());

        assert_eq!(on.to_string(), "[ ON] Wifi");
        assert_eq!(off.to_string(), "[OFF] Wifi");
        assert!(!unknown.is_on());
    }

    #[test]
    fn test_click_carries_target() {
        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        let switch = Switch::new(
            "Wifi",
            TriggerProps::new()
                .attr("id", "wifi")
                .on_click(move |event| *sink.lock().unwrap() = event.target.clone()),
        );

        switch.click();
        assert_eq!(seen.lock().unwrap().as_deref(), Some("wifi"));
    }

    #[test]
    fn test_button() {
        let clicks = Arc::new(Mutex::new(0));
        let counter = clicks.clone();
        let button = Button::new(
            "Reset",
            TriggerProps::new().on_click(move |_| *counter.lock().unwrap() += 1),
        );

        assert_eq!(button.to_string(), "< Reset >");
        button.click();
        button.click();
        assert_eq!(*clicks.lock().unwrap(), 2);
    }
}
