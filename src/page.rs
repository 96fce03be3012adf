//! A minimal in-memory document: the four elements the order lookup page is
//! made of, addressed by id. Handles are cheap to clone and share the same
//! underlying node, the way DOM references do.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

pub const ORDER_ID_INPUT: &str = "orderId";
pub const LOAD_BUTTON: &str = "loadBtn";
pub const STATUS: &str = "status";
pub const ORDER_JSON: &str = "orderJson";

#[derive(Clone, Default)]
pub struct TextInput {
    value: Arc<Mutex<String>>,
}

impl TextInput {
    pub fn value(&self) -> String {
        self.value.lock().clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.lock() = value.into();
    }
}

/// Click handler. Returns the task it started, if any.
pub type Listener = Arc<dyn Fn() -> Option<JoinHandle<()>> + Send + Sync>;

#[derive(Clone, Default)]
pub struct Button {
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl Button {
    pub fn add_listener(
        &self,
        listener: impl Fn() -> Option<JoinHandle<()>> + Send + Sync + 'static,
    ) {
        self.listeners.lock().push(Arc::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }

    /// Run every listener and hand back whatever work is still in flight.
    ///
    /// Listeners run on a copy of the list, so they may click or listen on
    /// this button themselves.
    pub fn click(&self) -> Vec<JoinHandle<()>> {
        let listeners = self.listeners.lock().clone();
        listeners.iter().filter_map(|listener| listener()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionState {
    pub text: String,
    pub visible: bool,
}

#[derive(Clone)]
pub struct Region {
    state: Arc<Mutex<RegionState>>,
}

impl Region {
    pub fn visible() -> Self {
        Self::with_visibility(true)
    }

    pub fn hidden() -> Self {
        Self::with_visibility(false)
    }

    fn with_visibility(visible: bool) -> Self {
        Self {
            state: Arc::new(Mutex::new(RegionState {
                text: String::new(),
                visible,
            })),
        }
    }

    /// Replaces the whole text.
    pub fn set_text(&self, text: impl ToString) {
        self.state.lock().text = text.to_string();
    }

    pub fn show(&self) {
        self.state.lock().visible = true;
    }

    pub fn hide(&self) {
        self.state.lock().visible = false;
    }

    pub fn snapshot(&self) -> RegionState {
        self.state.lock().clone()
    }
}

#[derive(Clone)]
pub enum Element {
    Input(TextInput),
    Button(Button),
    Region(Region),
}

#[derive(Default)]
pub struct Document {
    elements: HashMap<String, Element>,
}

impl Document {
    /// The order lookup markup: an input, a button, a status line and a
    /// hidden JSON block.
    pub fn order_lookup_page() -> Self {
        let mut document = Self::default();
        document.insert(ORDER_ID_INPUT, Element::Input(TextInput::default()));
        document.insert(LOAD_BUTTON, Element::Button(Button::default()));
        document.insert(STATUS, Element::Region(Region::visible()));
        document.insert(ORDER_JSON, Element::Region(Region::hidden()));
        document
    }

    pub fn insert(&mut self, id: impl Into<String>, element: Element) -> Option<Element> {
        self.elements.insert(id.into(), element)
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn text_input(&self, id: &str) -> Option<TextInput> {
        match self.elements.get(id)? {
            Element::Input(input) => Some(input.clone()),
            _ => None,
        }
    }

    pub fn button(&self, id: &str) -> Option<Button> {
        match self.elements.get(id)? {
            Element::Button(button) => Some(button.clone()),
            _ => None,
        }
    }

    pub fn region(&self, id: &str) -> Option<Region> {
        match self.elements.get(id)? {
            Element::Region(region) => Some(region.clone()),
            _ => None,
        }
    }
}
