//! propanel core library
//!
//! A property panel that lists controllers, the controller contract they
//! implement, and a slider controller that edits a numeric property of a
//! host object:
//!
//! ```ignore
//! let gui = Gui::default();
//! let object = Rc::new(RefCell::new(settings));
//! gui.add_slider(&object, "speed", 0.0, 10.0, 1.0)?
//!     .name("Speed")
//!     .on_finish_change(|v| log::info!("speed = {v}"));
//! ```

pub mod binding;
pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod gui;
pub mod slider;

pub use binding::{Inspectable, PropertyBinding};
pub use config::GuiConfig;
pub use controller::{Controller, ControllerBase, ControllerId, Lifecycle};
pub use document::{Document, Element, ElementId};
pub use error::{PanelError, PanelResult};
pub use gui::{ControllerRef, Gui, WeakGui};
pub use slider::{AddSlider, SliderController, SliderHandle};
