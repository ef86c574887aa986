//! Typed access to a numeric property of a host object.
//!
//! A [`PropertyBinding`] pairs a property name with a getter and a setter.
//! Hosts that expose their properties by name implement [`Inspectable`];
//! binding to them checks the property once, up front.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde_json::{Map, Value};

use crate::error::{PanelError, PanelResult};

/// A host object whose numeric properties can be looked up by name.
pub trait Inspectable {
    /// Read a numeric property.
    fn get_number(&self, property: &str) -> PanelResult<f64>;

    /// Write a numeric property.
    fn set_number(&mut self, property: &str, value: f64);
}

impl Inspectable for Map<String, Value> {
    fn get_number(&self, property: &str) -> PanelResult<f64> {
        match self.get(property) {
            None => Err(PanelError::UnknownProperty(property.to_string())),
            Some(value) => value
                .as_f64()
                .ok_or_else(|| PanelError::NotNumeric(property.to_string())),
        }
    }

    fn set_number(&mut self, property: &str, value: f64) {
        // Non-finite numbers have no JSON form and become null.
        self.insert(property.to_string(), Value::from(value));
    }
}

impl Inspectable for HashMap<String, f64> {
    fn get_number(&self, property: &str) -> PanelResult<f64> {
        self.get(property)
            .copied()
            .ok_or_else(|| PanelError::UnknownProperty(property.to_string()))
    }

    fn set_number(&mut self, property: &str, value: f64) {
        self.insert(property.to_string(), value);
    }
}

/// Getter/setter pair bound to one property of a host.
pub struct PropertyBinding {
    property: String,
    get: Box<dyn Fn() -> f64>,
    set: Box<dyn Fn(f64)>,
}

impl fmt::Debug for PropertyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyBinding")
            .field("property", &self.property)
            .finish_non_exhaustive()
    }
}

impl PropertyBinding {
    /// Bind through arbitrary closures.
    pub fn new(
        property: impl Into<String>,
        get: impl Fn() -> f64 + 'static,
        set: impl Fn(f64) + 'static,
    ) -> Self {
        Self {
            property: property.into(),
            get: Box::new(get),
            set: Box::new(set),
        }
    }

    /// Bind to a field of a shared host through accessor functions.
    pub fn field<H: 'static>(
        host: &Rc<RefCell<H>>,
        property: impl Into<String>,
        get: impl Fn(&H) -> f64 + 'static,
        set: impl Fn(&mut H, f64) + 'static,
    ) -> Self {
        let reader = Rc::clone(host);
        let writer = Rc::clone(host);
        Self::new(
            property,
            move || get(&*reader.borrow()),
            move |value| set(&mut *writer.borrow_mut(), value),
        )
    }

    /// Bind to a named property of an [`Inspectable`] host.
    ///
    /// Fails if the property is missing or not numeric at bind time.
    pub fn named<H: Inspectable + 'static>(
        host: &Rc<RefCell<H>>,
        property: &str,
    ) -> PanelResult<Self> {
        host.borrow().get_number(property)?;

        let reader = Rc::clone(host);
        let writer = Rc::clone(host);
        let read_name = property.to_string();
        let write_name = property.to_string();
        Ok(Self::new(
            property,
            move || {
                reader
                    .borrow()
                    .get_number(&read_name)
                    .unwrap_or(f64::NAN)
            },
            move |value| writer.borrow_mut().set_number(&write_name, value),
        ))
    }

    /// Name of the bound property.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Read the current value from the host.
    pub fn get(&self) -> f64 {
        (self.get)()
    }

    /// Write a value to the host.
    pub fn set(&self, value: f64) {
        (self.set)(value)
    }
}
