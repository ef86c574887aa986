//! Slider component with separate change and release notifications.

use std::rc::Rc;

use egui::{Rect, RichText, SliderClamping, Ui};

use crate::component::{Callback, Component, LocalState};
use crate::theme;

/// Properties of a [`CustomSlider`].
#[derive(Clone)]
pub struct SliderProps {
    /// Lower bound of the track
    pub min: f64,
    /// Upper bound of the track
    pub max: f64,
    /// Step granularity (0 = continuous)
    pub step: f64,
    /// Initial value; not clamped to the bounds
    pub value: f64,
    /// Called on every intermediate change
    pub on_change: Option<Callback<f64>>,
    /// Called when the user finishes interacting
    pub on_release: Option<Callback<f64>>,
}

impl SliderProps {
    /// Create props without callbacks.
    pub fn new(min: f64, max: f64, step: f64, value: f64) -> Self {
        Self {
            min,
            max,
            step,
            value,
            on_change: None,
            on_release: None,
        }
    }

    /// Set the change callback.
    pub fn on_change(mut self, cb: impl Fn(f64) + 'static) -> Self {
        self.on_change = Some(Rc::new(cb));
        self
    }

    /// Set the release callback.
    pub fn on_release(mut self, cb: impl Fn(f64) + 'static) -> Self {
        self.on_release = Some(Rc::new(cb));
        self
    }
}

/// A range slider holding its displayed value as local state.
///
/// Bounds and step are handed to egui unvalidated; out-of-range values are
/// displayed as they are.
pub struct CustomSlider {
    props: SliderProps,
    state: LocalState<f64>,
    track: Option<Rect>,
}

impl CustomSlider {
    /// Create a slider whose local state starts at `props.value`.
    pub fn new(props: SliderProps) -> Self {
        let state = LocalState::new(props.value);
        Self {
            props,
            state,
            track: None,
        }
    }

    /// Screen rect of the track as laid out by the last `show`.
    pub fn track_rect(&self) -> Option<Rect> {
        self.track
    }

    /// Currently displayed value.
    pub fn value(&self) -> f64 {
        self.state.get()
    }

    /// Handle to the local state.
    pub fn state(&self) -> LocalState<f64> {
        self.state.clone()
    }

    /// Replace the displayed value without notifying anyone.
    pub fn set_state(&self, value: f64) {
        self.state.set(value);
    }

    /// The props the slider was created with.
    pub fn props(&self) -> &SliderProps {
        &self.props
    }

    /// Intermediate change (drag in progress).
    pub fn handle_change(&self, value: f64) {
        self.state.set(value);
        if let Some(cb) = &self.props.on_change {
            cb(value);
        }
    }

    /// Interaction finished.
    pub fn handle_release(&self, value: f64) {
        self.state.set(value);
        if let Some(cb) = &self.props.on_release {
            cb(value);
        }
    }
}

impl Component for CustomSlider {
    fn show(&mut self, ui: &mut Ui) {
        let (min, max, step) = (self.props.min, self.props.max, self.props.step);
        let mut value = self.state.get();
        // egui can only map an unbounded range logarithmically.
        let slider = egui::Slider::new(&mut value, min..=max)
            .step_by(step)
            .clamping(SliderClamping::Never)
            .logarithmic(min.is_infinite() || max.is_infinite())
            .show_value(false);
        let response = ui.add(slider);
        self.track = Some(response.rect);

        // NaN never compares equal, so egui reports it as changed on every
        // frame. Only values produced by the user are dispatched.
        let interacting = response.is_pointer_button_down_on()
            || response.has_focus()
            || response.drag_stopped();
        let changed = interacting && response.changed();
        if changed {
            self.handle_change(value);
        }
        // Keyboard edits never start a drag, so they finish immediately.
        if response.drag_stopped() || (changed && !response.dragged()) {
            self.handle_release(self.state.get());
        }

        ui.label(
            RichText::new(value_text(self.state.get(), step))
                .size(11.0)
                .color(theme::TEXT_MUTED),
        );
    }
}

/// Format a value with as many decimals as the step needs.
fn value_text(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10()).ceil().min(6.0) as usize
    } else {
        0
    };
    format!("{value:.decimals$}")
}
