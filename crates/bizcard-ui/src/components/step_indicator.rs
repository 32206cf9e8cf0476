//! Wizard Step Indicator
//!
//! Numbered steps with connecting lines plus a linear progress bar. Used by
//! the create-card wizard.

use dioxus::prelude::*;

/// Visual state of one step marker.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepState {
    Done,
    Current,
    Upcoming,
}

impl StepState {
    pub fn of(index: usize, current: usize) -> Self {
        use std::cmp::Ordering;
        match index.cmp(&current) {
            Ordering::Less => StepState::Done,
            Ordering::Equal => StepState::Current,
            Ordering::Greater => StepState::Upcoming,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            StepState::Done => "step done",
            StepState::Current => "step current",
            StepState::Upcoming => "step",
        }
    }
}

/// Properties for the StepIndicator component
#[derive(Clone, PartialEq, Props)]
pub struct StepIndicatorProps {
    /// Translated step titles, in order
    pub titles: Vec<String>,
    /// Zero-based current step
    pub current: usize,
    /// Jump to a completed step
    #[props(default)]
    pub on_select: Option<EventHandler<usize>>,
}

#[component]
pub fn StepIndicator(props: StepIndicatorProps) -> Element {
    rsx! {
        ol { class: "step-indicator",
            for (i, title) in props.titles.iter().enumerate() {
                {
                    let state = StepState::of(i, props.current);
                    let on_select = props.on_select;
                    rsx! {
                        li {
                            key: "{i}",
                            class: "{state.class()}",
                            onclick: move |_| {
                                if state == StepState::Done {
                                    if let Some(handler) = &on_select {
                                        handler.call(i);
                                    }
                                }
                            },
                            span { class: "step-marker",
                                if state == StepState::Done { "\u{2713}" } else { "{i + 1}" }
                            }
                            span { class: "step-title", "{title}" }
                        }
                    }
                }
            }
        }
    }
}

/// Linear progress bar, `percent` in 0..=100
#[component]
pub fn ProgressBar(percent: u8, #[props(default)] label: Option<String>) -> Element {
    let percent = percent.min(100);

    rsx! {
        div { class: "progress",
            if let Some(label) = label {
                div { class: "progress-label",
                    span { "{label}" }
                    span { "{percent}%" }
                }
            }
            div {
                class: "progress-track",
                role: "progressbar",
                "aria-valuenow": "{percent}",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                div { class: "progress-fill", style: "width: {percent}%" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_state_relative_to_current() {
        assert_eq!(StepState::of(0, 2), StepState::Done);
        assert_eq!(StepState::of(2, 2), StepState::Current);
        assert_eq!(StepState::of(4, 2), StepState::Upcoming);
    }

    #[test]
    fn step_state_classes() {
        assert_eq!(StepState::Done.class(), "step done");
        assert_eq!(StepState::Upcoming.class(), "step");
    }
}
