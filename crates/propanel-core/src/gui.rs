//! The property panel: an element list plus a registry of controllers.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use propanel_widgets::{panel_frame, row_divider};

use crate::config::GuiConfig;
use crate::controller::{Controller, ControllerId};
use crate::document::{parse_px, Document, ElementId};
use crate::error::{PanelError, PanelResult};

/// Shared handle to a registered controller.
pub type ControllerRef = Rc<RefCell<dyn Controller>>;

struct GuiShared {
    config: GuiConfig,
    document: RefCell<Document>,
    dom_element: ElementId,
    list: ElementId,
    controllers: RefCell<Vec<ControllerRef>>,
    height: Cell<f32>,
}

/// A property panel.
///
/// Cloning yields another handle to the same panel. Controllers keep a
/// [`WeakGui`] back to it.
#[derive(Clone)]
pub struct Gui {
    shared: Rc<GuiShared>,
}

/// Non-owning handle to a [`Gui`].
#[derive(Clone)]
pub struct WeakGui {
    shared: Weak<GuiShared>,
}

impl WeakGui {
    /// Upgrade to a strong handle if the panel is still alive.
    pub fn upgrade(&self) -> Option<Gui> {
        self.shared.upgrade().map(|shared| Gui { shared })
    }
}

impl fmt::Debug for WeakGui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakGui")
            .field("alive", &(self.shared.strong_count() > 0))
            .finish()
    }
}

impl fmt::Debug for Gui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gui")
            .field("controllers", &self.len())
            .field("height", &self.height())
            .finish()
    }
}

impl Default for Gui {
    fn default() -> Self {
        Self::new(GuiConfig::default())
    }
}

impl Gui {
    /// Create an empty panel: a `div.dg` root holding the controller `ul`.
    pub fn new(config: GuiConfig) -> Self {
        let mut document = Document::new();
        let dom_element = document.create("div");
        let list = document.create("ul");
        // Fresh elements; these cannot fail.
        let _ = document.add_class(dom_element, "dg");
        let _ = document.set_style(dom_element, "width", &format!("{}px", config.width));
        let _ = document.append_child(dom_element, list);

        Self {
            shared: Rc::new(GuiShared {
                config,
                document: RefCell::new(document),
                dom_element,
                list,
                controllers: RefCell::new(Vec::new()),
                height: Cell::new(0.0),
            }),
        }
    }

    /// Panel configuration.
    pub fn config(&self) -> &GuiConfig {
        &self.shared.config
    }

    /// Element document shared with the controllers.
    pub fn document(&self) -> &RefCell<Document> {
        &self.shared.document
    }

    /// Root element of the panel.
    pub fn dom_element(&self) -> ElementId {
        self.shared.dom_element
    }

    /// The `ul` holding one `li` per controller.
    pub fn list(&self) -> ElementId {
        self.shared.list
    }

    /// Create a non-owning handle.
    pub fn downgrade(&self) -> WeakGui {
        WeakGui {
            shared: Rc::downgrade(&self.shared),
        }
    }

    /// Relayout hook: recompute the content height from the list items.
    pub fn on_resize(&self) {
        let document = self.shared.document.borrow();
        let default_height = self.shared.config.default_row_height;
        let height: f32 = document
            .children(self.shared.list)
            .iter()
            .map(|li| {
                document
                    .style(*li, "height")
                    .and_then(parse_px)
                    .unwrap_or(default_height)
            })
            .sum();
        self.shared.height.set(height);
        log::debug!("Panel relayout: {} rows, {}px", document.children(self.shared.list).len(), height);
    }

    /// Content height computed by the last relayout.
    pub fn height(&self) -> f32 {
        self.shared.height.get()
    }

    /// Add a controller to the registry.
    pub fn register(&self, controller: ControllerRef) {
        self.shared.controllers.borrow_mut().push(controller);
    }

    /// Number of registered controllers.
    pub fn len(&self) -> usize {
        self.shared.controllers.borrow().len()
    }

    /// Check if no controller is registered.
    pub fn is_empty(&self) -> bool {
        self.shared.controllers.borrow().is_empty()
    }

    /// Check if a controller is registered.
    pub fn contains(&self, id: ControllerId) -> bool {
        self.shared
            .controllers
            .borrow()
            .iter()
            .any(|c| c.borrow().id() == id)
    }

    /// Snapshot of the registry, in insertion order.
    pub fn controllers(&self) -> Vec<ControllerRef> {
        self.shared.controllers.borrow().clone()
    }

    /// Dispose a controller, drop its list item and unregister it.
    pub fn remove(&self, id: ControllerId) -> PanelResult<()> {
        let controller = {
            let mut controllers = self.shared.controllers.borrow_mut();
            let Some(index) = controllers.iter().position(|c| c.borrow().id() == id) else {
                log::warn!("Cannot remove unknown controller {}", id);
                return Err(PanelError::ControllerNotFound(id));
            };
            controllers.remove(index)
        };

        let li = {
            let controller = controller.borrow();
            controller.dispose();
            controller.base().li()
        };
        if let Some(li) = li {
            self.shared.document.borrow_mut().remove(li)?;
        }
        self.on_resize();
        log::debug!("Removed controller {}", id);
        Ok(())
    }

    /// Dispose and unregister every controller.
    pub fn destroy(&self) {
        let controllers = std::mem::take(&mut *self.shared.controllers.borrow_mut());
        for controller in &controllers {
            let controller = controller.borrow();
            controller.dispose();
            if let Some(li) = controller.base().li() {
                // The list item may already be gone if the host removed it.
                let _ = self.shared.document.borrow_mut().remove(li);
            }
        }
        self.on_resize();
        log::debug!("Destroyed panel with {} controllers", controllers.len());
    }

    /// Draw the panel and all registered controllers.
    pub fn show(&self, ui: &mut egui::Ui) {
        let controllers = self.controllers();
        let GuiConfig {
            width,
            label_padding,
            ..
        } = self.shared.config;
        panel_frame(label_padding).show(ui, |ui| {
            ui.set_width((width - 2.0 * label_padding).max(0.0));
            for (i, controller) in controllers.iter().enumerate() {
                if i > 0 {
                    row_divider(ui, label_padding / 2.0);
                }
                controller.borrow().show(ui);
            }
        });
    }
}
