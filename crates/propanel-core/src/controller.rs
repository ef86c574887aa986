//! Controller contract shared by every panel entry.

use uuid::Uuid;

use crate::document::{Document, ElementId};
use crate::error::PanelResult;
use crate::gui::{Gui, WeakGui};

/// Unique identifier for a controller.
pub type ControllerId = Uuid;

/// Lifecycle of a controller. There is no way back from `Disposed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    Initialized,
    Disposed,
}

/// State every controller carries: its property, its root element and the
/// backreferences set by the panel that owns it.
#[derive(Debug, Clone)]
pub struct ControllerBase {
    id: ControllerId,
    property: String,
    dom_element: ElementId,
    li: Option<ElementId>,
    gui: Option<WeakGui>,
}

impl ControllerBase {
    /// Create the base, including the controller's root `div.c` element.
    pub fn new(document: &mut Document, property: impl Into<String>) -> Self {
        let dom_element = document.create("div");
        // Fresh element, the class insert cannot fail.
        let _ = document.add_class(dom_element, "c");
        Self {
            id: Uuid::new_v4(),
            property: property.into(),
            dom_element,
            li: None,
            gui: None,
        }
    }

    /// Controller id.
    pub fn id(&self) -> ControllerId {
        self.id
    }

    /// Name of the edited property.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Root element of the controller.
    pub fn dom_element(&self) -> ElementId {
        self.dom_element
    }

    /// Wrapping list item, once attached.
    pub fn li(&self) -> Option<ElementId> {
        self.li
    }

    /// Owning panel, if attached and still alive.
    pub fn gui(&self) -> Option<Gui> {
        self.gui.as_ref().and_then(WeakGui::upgrade)
    }

    /// Record the list item and owning panel.
    pub fn attach(&mut self, li: ElementId, gui: &Gui) {
        self.li = Some(li);
        self.gui = Some(gui.downgrade());
    }
}

/// An entry of a property panel.
///
/// `dispose` takes `&self` so a controller can be disposed from inside its
/// own callbacks while the panel is drawing it.
pub trait Controller {
    /// Shared controller state.
    fn base(&self) -> &ControllerBase;

    /// Mutable shared controller state.
    fn base_mut(&mut self) -> &mut ControllerBase;

    /// Build the controller's scaffold. Called once, after attachment.
    fn init(&mut self) -> PanelResult<()>;

    /// Release everything mounted by `init`.
    fn dispose(&self);

    /// Current lifecycle phase.
    fn lifecycle(&self) -> Lifecycle;

    /// Draw the controller.
    fn show(&self, ui: &mut egui::Ui);

    fn id(&self) -> ControllerId {
        self.base().id()
    }

    fn property(&self) -> &str {
        self.base().property()
    }

    fn is_disposed(&self) -> bool {
        self.lifecycle() == Lifecycle::Disposed
    }
}
