//! Slider controller: mounts a [`CustomSlider`] inside a panel row and keeps
//! the host property in sync with it.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use propanel_widgets::{
    section_label, sizing, Callback, CustomSlider, LocalState, Root, SliderProps,
};

use crate::binding::{Inspectable, PropertyBinding};
use crate::controller::{Controller, ControllerBase, ControllerId, Lifecycle};
use crate::document::ElementId;
use crate::error::{PanelError, PanelResult};
use crate::gui::Gui;

/// Receives values from the mounted slider.
///
/// Writing the host property here is the only place the controller mutates
/// external state.
struct ValueSink {
    binding: PropertyBinding,
    on_change: RefCell<Option<Callback<f64>>>,
    on_finish_change: RefCell<Option<Callback<f64>>>,
}

impl ValueSink {
    fn handle_change(&self, value: f64) {
        self.binding.set(value);
        // Clone out of the slot: the callback may register a new one.
        let cb = self.on_change.borrow().clone();
        if let Some(cb) = cb {
            cb(value);
        }
    }

    fn handle_finish_change(&self, value: f64) {
        self.binding.set(value);
        let cb = self.on_finish_change.borrow().clone();
        if let Some(cb) = cb {
            cb(value);
        }
    }
}

/// Panel controller editing a numeric property with a slider.
pub struct SliderController {
    base: ControllerBase,
    min: f64,
    max: f64,
    step: f64,
    sink: Rc<ValueSink>,
    root: Root<CustomSlider>,
    state: Option<LocalState<f64>>,
    title: Cell<Option<ElementId>>,
    container: Option<ElementId>,
    label: RefCell<Option<String>>,
    lifecycle: Cell<Lifecycle>,
}

impl SliderController {
    /// Create a controller for `binding`. Nothing is mounted until [`init`].
    ///
    /// [`init`]: Controller::init
    pub fn new(gui: &Gui, binding: PropertyBinding, min: f64, max: f64, step: f64) -> Self {
        let base = ControllerBase::new(&mut gui.document().borrow_mut(), binding.property());
        Self {
            base,
            min,
            max,
            step,
            sink: Rc::new(ValueSink {
                binding,
                on_change: RefCell::new(None),
                on_finish_change: RefCell::new(None),
            }),
            root: Root::new(),
            state: None,
            title: Cell::new(None),
            container: None,
            label: RefCell::new(None),
            lifecycle: Cell::new(Lifecycle::Uninitialized),
        }
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Step granularity.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Title element, once initialized.
    pub fn title(&self) -> Option<ElementId> {
        self.title.get()
    }

    /// Container the slider is mounted into, once initialized.
    pub fn container(&self) -> Option<ElementId> {
        self.container
    }

    /// Mount root of the slider.
    pub fn root(&self) -> &Root<CustomSlider> {
        &self.root
    }

    /// Text shown in the title. Defaults to the property name.
    pub fn label(&self) -> String {
        self.label
            .borrow()
            .clone()
            .unwrap_or_else(|| self.base.property().to_string())
    }

    /// Displayed value, while mounted.
    pub fn value(&self) -> Option<f64> {
        if !self.root.is_mounted() {
            return None;
        }
        self.state.as_ref().map(LocalState::get)
    }

    /// Push a new displayed value. No callback fires and the host is untouched.
    pub fn set_value(&self, value: f64) -> &Self {
        if self.root.is_mounted() {
            if let Some(state) = &self.state {
                state.set(value);
            }
        }
        self
    }

    /// Replace the visible title text.
    ///
    /// Before `init` the name is kept and used when the title is created.
    pub fn name(&self, name: &str) -> &Self {
        *self.label.borrow_mut() = Some(name.to_string());
        if let (Some(title), Some(gui)) = (self.title.get(), self.base.gui()) {
            if let Err(e) = gui.document().borrow_mut().set_text(title, name) {
                log::warn!("Failed to rename slider '{}': {}", self.base.property(), e);
            }
        }
        self
    }

    /// Register the callback fired after each intermediate change.
    pub fn on_change(&self, cb: impl Fn(f64) + 'static) -> &Self {
        *self.sink.on_change.borrow_mut() = Some(Rc::new(cb));
        self
    }

    /// Register the callback fired when the user finishes a change.
    pub fn on_finish_change(&self, cb: impl Fn(f64) + 'static) -> &Self {
        *self.sink.on_finish_change.borrow_mut() = Some(Rc::new(cb));
        self
    }

    fn build_scaffold(&mut self, gui: &Gui, li: ElementId) -> PanelResult<()> {
        let padding = gui.config().label_padding;
        let mut doc = gui.document().borrow_mut();

        let title = doc.create("span");
        doc.set_text(title, &self.label())?;
        doc.set_style(title, "width", "100%")?;
        doc.append_child(li, title)?;

        let container = doc.create("div");
        doc.set_style(container, "width", &format!("calc(100% - {}px)", padding * 2.0))?;
        doc.set_style(container, "padding-left", &format!("{}px", padding))?;
        doc.append_child(li, container)?;

        self.title.set(Some(title));
        self.container = Some(container);
        Ok(())
    }

    fn mount(&mut self) {
        let change_sink: Weak<ValueSink> = Rc::downgrade(&self.sink);
        let finish_sink = Weak::clone(&change_sink);
        let props = SliderProps::new(self.min, self.max, self.step, self.sink.binding.get())
            .on_change(move |value| {
                if let Some(sink) = change_sink.upgrade() {
                    sink.handle_change(value);
                }
            })
            .on_release(move |value| {
                if let Some(sink) = finish_sink.upgrade() {
                    sink.handle_finish_change(value);
                }
            });

        let slider = CustomSlider::new(props);
        self.state = Some(slider.state());
        self.root.render(slider);
        log::debug!(
            "Mounted slider for '{}' into {:?}",
            self.base.property(),
            self.container
        );
    }
}

impl Controller for SliderController {
    fn base(&self) -> &ControllerBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ControllerBase {
        &mut self.base
    }

    fn init(&mut self) -> PanelResult<()> {
        let id = self.base.id();
        if self.lifecycle.get() != Lifecycle::Uninitialized {
            return Err(PanelError::AlreadyInitialized(id));
        }
        let li = self.base.li().ok_or(PanelError::NotAttached(id))?;
        let gui = self.base.gui().ok_or(PanelError::NotAttached(id))?;

        self.build_scaffold(&gui, li)?;
        self.mount();
        self.lifecycle.set(Lifecycle::Initialized);
        Ok(())
    }

    fn dispose(&self) {
        if self.lifecycle.get() == Lifecycle::Disposed {
            return;
        }
        self.root.unmount();
        self.lifecycle.set(Lifecycle::Disposed);
        log::debug!("Unmounted slider for '{}'", self.base.property());
    }

    fn lifecycle(&self) -> Lifecycle {
        self.lifecycle.get()
    }

    fn show(&self, ui: &mut egui::Ui) {
        let Some(gui) = self.base.gui() else {
            return;
        };
        let padding = gui.config().label_padding;
        let title = self
            .title
            .get()
            .and_then(|title| gui.document().borrow().text(title).map(str::to_string))
            .unwrap_or_else(|| self.label());

        ui.vertical(|ui| {
            section_label(ui, &title);
            ui.horizontal(|ui| {
                ui.add_space(padding);
                let track = ui.available_width() - padding - sizing::VALUE_BOX_WIDTH;
                ui.spacing_mut().slider_width = track.max(sizing::MIN_SLIDER_WIDTH);
                self.root.show(ui);
            });
        });
    }
}

impl fmt::Debug for SliderController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderController")
            .field("base", &self.base)
            .field("range", &(self.min..=self.max))
            .field("step", &self.step)
            .field("value", &self.value())
            .field("lifecycle", &self.lifecycle.get())
            .finish_non_exhaustive()
    }
}

/// Chainable handle to a slider registered in a panel.
#[derive(Clone, Debug)]
pub struct SliderHandle {
    controller: Rc<RefCell<SliderController>>,
}

impl SliderHandle {
    /// Controller id.
    pub fn id(&self) -> ControllerId {
        self.controller.borrow().id()
    }

    /// Name of the edited property.
    pub fn property(&self) -> String {
        self.controller.borrow().property().to_string()
    }

    /// Visible title text.
    pub fn label(&self) -> String {
        self.controller.borrow().label()
    }

    /// Displayed value, while mounted.
    pub fn value(&self) -> Option<f64> {
        self.controller.borrow().value()
    }

    /// Whether the slider is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.controller.borrow().root().is_mounted()
    }

    /// Current lifecycle phase.
    pub fn lifecycle(&self) -> Lifecycle {
        self.controller.borrow().lifecycle()
    }

    /// Replace the visible title text.
    pub fn name(&self, name: &str) -> &Self {
        self.controller.borrow().name(name);
        self
    }

    /// Register the change callback, replacing any previous one.
    pub fn on_change(&self, cb: impl Fn(f64) + 'static) -> &Self {
        self.controller.borrow().on_change(cb);
        self
    }

    /// Register the finish-change callback, replacing any previous one.
    pub fn on_finish_change(&self, cb: impl Fn(f64) + 'static) -> &Self {
        self.controller.borrow().on_finish_change(cb);
        self
    }

    /// Push a new displayed value without notifying anyone.
    pub fn set_value(&self, value: f64) -> &Self {
        self.controller.borrow().set_value(value);
        self
    }

    /// Unmount the slider. Must be called when the controller leaves its panel.
    pub fn dispose(&self) {
        self.controller.borrow().dispose();
    }

    /// Run `f` against the mounted slider. `None` once disposed.
    pub fn with_slider<R>(&self, f: impl FnOnce(&mut CustomSlider) -> R) -> Option<R> {
        let root = self.controller.borrow().root().clone();
        root.with_mut(f)
    }

    /// The underlying controller.
    pub fn controller(&self) -> &Rc<RefCell<SliderController>> {
        &self.controller
    }
}

/// Adds the `add_slider` factory to a panel.
pub trait AddSlider {
    /// Add a slider bound to `property` of `object`.
    fn add_slider<H: Inspectable + 'static>(
        &self,
        object: &Rc<RefCell<H>>,
        property: &str,
        min: f64,
        max: f64,
        step: f64,
    ) -> PanelResult<SliderHandle>;

    /// Add a slider over an explicit binding.
    fn add_slider_binding(
        &self,
        binding: PropertyBinding,
        min: f64,
        max: f64,
        step: f64,
    ) -> PanelResult<SliderHandle>;
}

impl AddSlider for Gui {
    fn add_slider<H: Inspectable + 'static>(
        &self,
        object: &Rc<RefCell<H>>,
        property: &str,
        min: f64,
        max: f64,
        step: f64,
    ) -> PanelResult<SliderHandle> {
        let binding = PropertyBinding::named(object, property)?;
        self.add_slider_binding(binding, min, max, step)
    }

    fn add_slider_binding(
        &self,
        binding: PropertyBinding,
        min: f64,
        max: f64,
        step: f64,
    ) -> PanelResult<SliderHandle> {
        let mut controller = SliderController::new(self, binding, min, max, step);

        let li = {
            let mut doc = self.document().borrow_mut();
            let li = doc.create("li");
            doc.add_class(li, "cr")?;
            doc.add_class(li, "number")?;
            doc.set_style(li, "height", &format!("{}px", self.config().slider_row_height))?;
            doc.append_child(li, controller.base().dom_element())?;
            doc.append_child(self.list(), li)?;
            li
        };

        self.on_resize();

        controller.base_mut().attach(li, self);
        controller.init()?;

        let handle = SliderHandle {
            controller: Rc::new(RefCell::new(controller)),
        };
        self.register(handle.controller.clone());
        log::debug!("Added slider for '{}'", handle.property());
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn host(value: Value) -> Rc<RefCell<Map<String, Value>>> {
        match value {
            Value::Object(map) => Rc::new(RefCell::new(map)),
            _ => panic!("expected an object"),
        }
    }

    fn speed(object: &Rc<RefCell<Map<String, Value>>>) -> Option<f64> {
        object.borrow().get("speed").and_then(Value::as_f64)
    }

    fn recorder() -> (Rc<RefCell<Vec<f64>>>, impl Fn(f64) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |v| sink.borrow_mut().push(v))
    }

    #[test]
    fn test_speed_scenario() {
        init_logger();
        let gui = Gui::default();
        let object = host(json!({ "speed": 5 }));
        let (finished, on_finish) = recorder();

        let slider = gui.add_slider(&object, "speed", 0.0, 10.0, 1.0).unwrap();
        slider.on_finish_change(on_finish);
        assert_eq!(slider.value(), Some(5.0));

        slider.with_slider(|s| s.handle_change(7.0)).unwrap();
        assert_eq!(speed(&object), Some(7.0));

        slider.with_slider(|s| s.handle_release(7.0)).unwrap();
        assert_eq!(*finished.borrow(), vec![7.0]);
    }

    #[test]
    fn test_initial_display_matches_value() {
        let gui = Gui::default();
        for value in [0.0, 2.5, 10.0] {
            let object = host(json!({ "speed": value }));
            let slider = gui.add_slider(&object, "speed", 0.0, 10.0, 0.5).unwrap();
            assert_eq!(slider.value(), Some(value));
        }
    }

    #[test]
    fn test_change_events_write_host_in_order() {
        let gui = Gui::default();
        let object = host(json!({ "speed": 0 }));
        let (changes, on_change) = recorder();
        let slider = gui.add_slider(&object, "speed", 0.0, 10.0, 1.0).unwrap();
        slider.on_change(on_change);

        for value in [1.0, 4.0, 3.0, 9.0] {
            slider.with_slider(|s| s.handle_change(value)).unwrap();
            assert_eq!(speed(&object), Some(value));
        }
        assert_eq!(*changes.borrow(), vec![1.0, 4.0, 3.0, 9.0]);
    }

    #[test]
    fn test_release_fires_finish_once() {
        let gui = Gui::default();
        let object = host(json!({ "speed": 0 }));
        let (changes, on_change) = recorder();
        let (finished, on_finish) = recorder();
        let slider = gui.add_slider(&object, "speed", 0.0, 10.0, 1.0).unwrap();
        slider.on_change(on_change).on_finish_change(on_finish);

        for value in [2.0, 3.0, 4.0] {
            slider.with_slider(|s| s.handle_change(value));
        }
        slider.with_slider(|s| s.handle_release(4.0));

        assert_eq!(changes.borrow().len(), 3);
        assert_eq!(*finished.borrow(), vec![4.0]);
        assert_eq!(speed(&object), Some(4.0));
    }

    #[test]
    fn test_events_without_callbacks_still_write_host() {
        let gui = Gui::default();
        let object = host(json!({ "speed": 1 }));
        let slider = gui.add_slider(&object, "speed", 0.0, 10.0, 1.0).unwrap();
        slider.with_slider(|s| s.handle_release(6.0));
        assert_eq!(speed(&object), Some(6.0));
    }

    #[test]
    fn test_set_value_is_silent() {
        let gui = Gui::default();
        let object = host(json!({ "speed": 5 }));
        let (changes, on_change) = recorder();
        let (finished, on_finish) = recorder();
        let slider = gui.add_slider(&object, "speed", 0.0, 10.0, 1.0).unwrap();
        slider
            .on_change(on_change)
            .on_finish_change(on_finish)
            .set_value(8.0);

        assert_eq!(slider.value(), Some(8.0));
        assert_eq!(slider.with_slider(|s| s.value()), Some(8.0));
        assert_eq!(speed(&object), Some(5.0));
        assert!(changes.borrow().is_empty());
        assert!(finished.borrow().is_empty());
    }

    #[test]
    fn test_name_only_changes_label() {
        let gui = Gui::default();
        let object = host(json!({ "speed": 5 }));
        let (changes, on_change) = recorder();
        let slider = gui.add_slider(&object, "speed", 0.0, 10.0, 1.0).unwrap();
        slider.on_change(on_change).name("Speed");

        assert_eq!(slider.label(), "Speed");
        let title = slider.controller().borrow().title().unwrap();
        assert_eq!(gui.document().borrow().text(title), Some("Speed"));
        assert_eq!(slider.value(), Some(5.0));
        assert_eq!(slider.property(), "speed");

        let controller = slider.controller().borrow();
        assert_eq!(
            (controller.min(), controller.max(), controller.step()),
            (0.0, 10.0, 1.0)
        );
        drop(controller);

        slider.with_slider(|s| s.handle_change(6.0));
        assert_eq!(*changes.borrow(), vec![6.0]);
    }

    #[test]
    fn test_callback_registration_is_single_slot() {
        let gui = Gui::default();
        let object = host(json!({ "speed": 5 }));
        let (first, first_cb) = recorder();
        let (second, second_cb) = recorder();
        let slider = gui.add_slider(&object, "speed", 0.0, 10.0, 1.0).unwrap();
        slider.on_change(first_cb).on_change(second_cb);

        slider.with_slider(|s| s.handle_change(3.0));
        assert!(first.borrow().is_empty());
        assert_eq!(*second.borrow(), vec![3.0]);
    }

    #[test]
    fn test_dispose_unmounts() {
        let gui = Gui::default();
        let object = host(json!({ "speed": 5 }));
        let (changes, on_change) = recorder();
        let slider = gui.add_slider(&object, "speed", 0.0, 10.0, 1.0).unwrap();
        slider.on_change(on_change);

        slider.dispose();
        assert!(!slider.is_mounted());
        assert_eq!(slider.lifecycle(), Lifecycle::Disposed);
        assert!(slider.with_slider(|s| s.handle_change(9.0)).is_none());
        assert!(changes.borrow().is_empty());
        assert_eq!(speed(&object), Some(5.0));

        // Terminal: later calls are no-ops.
        slider.set_value(2.0);
        assert_eq!(slider.value(), None);
        slider.dispose();
    }

    #[test]
    fn test_dispose_from_own_callback() {
        let gui = Gui::default();
        let object = host(json!({ "speed": 5 }));
        let slider = gui.add_slider(&object, "speed", 0.0, 10.0, 1.0).unwrap();
        let inner = slider.clone();
        slider.on_finish_change(move |_| inner.dispose());

        slider.with_slider(|s| s.handle_release(4.0));
        assert!(!slider.is_mounted());
        assert_eq!(speed(&object), Some(4.0));
    }

    #[test]
    fn test_reentrant_set_value_from_callback() {
        let gui = Gui::default();
        let object = host(json!({ "speed": 5 }));
        let slider = gui.add_slider(&object, "speed", 0.0, 10.0, 1.0).unwrap();
        let inner = slider.clone();
        slider.on_change(move |v| {
            inner.set_value((v / 2.0).round()).name("Halved");
        });

        slider.with_slider(|s| s.handle_change(8.0));
        assert_eq!(slider.value(), Some(4.0));
        assert_eq!(slider.label(), "Halved");
        assert_eq!(speed(&object), Some(8.0));
    }

    #[test]
    fn test_factory_builds_list_item() {
        let gui = Gui::default();
        let object = host(json!({ "speed": 5 }));
        let slider = gui.add_slider(&object, "speed", 0.0, 10.0, 1.0).unwrap();

        let controller = slider.controller().borrow();
        let li = controller.base().li().unwrap();
        let doc = gui.document().borrow();
        assert_eq!(doc.children(gui.list()), &[li]);
        assert!(doc.has_class(li, "cr"));
        assert!(doc.has_class(li, "number"));
        assert_eq!(doc.style(li, "height"), Some("65px"));

        let title = controller.title().unwrap();
        let container = controller.container().unwrap();
        assert_eq!(
            doc.children(li),
            &[controller.base().dom_element(), title, container]
        );
        assert_eq!(doc.text(title), Some("speed"));
        assert_eq!(doc.style(title, "width"), Some("100%"));
        assert_eq!(doc.style(container, "width"), Some("calc(100% - 20px)"));
        assert_eq!(doc.style(container, "padding-left"), Some("10px"));

        assert!(gui.contains(slider.id()));
        assert!((gui.height() - 65.0).abs() < f32::EPSILON);
        assert!(controller.base().gui().is_some());
        assert_eq!(controller.lifecycle(), Lifecycle::Initialized);
    }

    #[test]
    fn test_factory_rejects_bad_property() {
        let gui = Gui::default();
        let object = host(json!({ "speed": "fast" }));
        let err = gui.add_slider(&object, "speed", 0.0, 10.0, 1.0).unwrap_err();
        assert_eq!(err, PanelError::NotNumeric("speed".to_string()));
        let err = gui.add_slider(&object, "mass", 0.0, 10.0, 1.0).unwrap_err();
        assert_eq!(err, PanelError::UnknownProperty("mass".to_string()));
        assert!(gui.is_empty());
    }

    #[test]
    fn test_binding_factory_with_struct_field() {
        struct Light {
            intensity: f64,
        }

        let gui = Gui::default();
        let light = Rc::new(RefCell::new(Light { intensity: 0.5 }));
        let binding = PropertyBinding::field(
            &light,
            "intensity",
            |l| l.intensity,
            |l, v| l.intensity = v,
        );
        let slider = gui.add_slider_binding(binding, 0.0, 1.0, 0.05).unwrap();
        assert_eq!(slider.value(), Some(0.5));

        slider.with_slider(|s| s.handle_change(0.75));
        assert!((light.borrow().intensity - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_init_lifecycle_errors() {
        let gui = Gui::default();
        let object = host(json!({ "speed": 5 }));
        let binding = PropertyBinding::named(&object, "speed").unwrap();
        let mut controller = SliderController::new(&gui, binding, 0.0, 10.0, 1.0);
        let id = controller.id();

        controller.set_value(3.0);
        assert_eq!(controller.value(), None);
        controller.name("Early");
        assert_eq!(controller.init(), Err(PanelError::NotAttached(id)));

        let li = gui.document().borrow_mut().create("li");
        controller.base_mut().attach(li, &gui);
        controller.init().unwrap();
        let title = controller.title().unwrap();
        assert_eq!(gui.document().borrow().text(title), Some("Early"));
        assert_eq!(controller.init(), Err(PanelError::AlreadyInitialized(id)));
    }

    #[test]
    fn test_remove_from_panel_disposes() {
        let gui = Gui::default();
        let object = host(json!({ "speed": 5 }));
        let slider = gui.add_slider(&object, "speed", 0.0, 10.0, 1.0).unwrap();
        gui.remove(slider.id()).unwrap();
        assert!(!slider.is_mounted());
        assert!(gui.is_empty());
    }

    #[test]
    fn test_show_without_input_keeps_values() {
        let gui = Gui::default();
        let object = host(json!({ "speed": 5 }));
        let (changes, on_change) = recorder();
        let slider = gui.add_slider(&object, "speed", 0.0, 10.0, 1.0).unwrap();
        slider.on_change(on_change).name("Speed");

        let ctx = egui::Context::default();
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| gui.show(ui));
            });
        }

        assert_eq!(slider.value(), Some(5.0));
        assert_eq!(speed(&object), Some(5.0));
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn test_nan_display_does_not_touch_host() {
        let gui = Gui::default();
        let object = host(json!({ "speed": 5 }));
        let (changes, on_change) = recorder();
        let (finished, on_finish) = recorder();
        let slider = gui.add_slider(&object, "speed", 0.0, 10.0, 1.0).unwrap();
        slider.on_change(on_change).on_finish_change(on_finish);
        slider.set_value(f64::NAN);

        let ctx = egui::Context::default();
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| gui.show(ui));
            });
        }

        assert!(slider.value().is_some_and(f64::is_nan));
        assert_eq!(speed(&object), Some(5.0));
        assert!(changes.borrow().is_empty());
        assert!(finished.borrow().is_empty());
    }

    #[test]
    fn test_handle_debug_names_property() {
        let gui = Gui::default();
        let object = host(json!({ "speed": 5 }));
        let slider = gui.add_slider(&object, "speed", 0.0, 10.0, 1.0).unwrap();
        let text = format!("{slider:?}");
        assert!(text.contains("SliderController"));
        assert!(text.contains("speed"));
    }
}
