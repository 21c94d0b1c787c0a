//! Rendering targets: the elements a renderer can be attached to.
//!
//! Targets are looked up by a simple CSS selector: `#id`, `.class` or a tag name.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ConfigError;
use crate::geometry::BoundingBox;

lazy_static! {
    static ref RE_SELECTOR: Regex = Regex::new(r"^([#.]?)([A-Za-z_][\w-]*)$").unwrap();
}

/// A parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
    Tag(String),
}

impl Selector {
    pub fn parse(selector: &str) -> Result<Self, ConfigError> {
        let caps = RE_SELECTOR
            .captures(selector.trim())
            .ok_or_else(|| ConfigError::InvalidSelector(selector.to_string()))?;
        let name = caps[2].to_string();
        Ok(match &caps[1] {
            "#" => Selector::Id(name),
            "." => Selector::Class(name),
            _ => Selector::Tag(name.to_lowercase()),
        })
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Id(id) => element.id.as_deref() == Some(id.as_str()),
            Selector::Class(class) => element.classes.iter().any(|c| c == class),
            Selector::Tag(tag) => element.tag.eq_ignore_ascii_case(tag),
        }
    }
}

/// A rendering target as seen by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Position and size in page coordinates
    pub rect: BoundingBox,
    pub child_count: usize,
}

impl Element {
    pub fn new(tag: &str, rect: BoundingBox) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            rect,
            child_count: 0,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_children(mut self, count: usize) -> Self {
        self.child_count = count;
        self
    }
}

/// Anything that can resolve a selector to an element.
pub trait CanvasHost {
    /// First element matching `selector`, in document order.
    fn query_selector(&self, selector: &Selector) -> Option<&Element>;
}

/// A fixed list of elements.
#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    elements: Vec<Element>,
}

impl StaticHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// A host holding one empty `div#render` of the given size at the page origin.
    pub fn single(width: f64, height: f64) -> Self {
        Self::new().with(
            Element::new("div", BoundingBox::new(0.0, 0.0, width, height)).with_id("render"),
        )
    }
}

impl CanvasHost for StaticHost {
    fn query_selector(&self, selector: &Selector) -> Option<&Element> {
        self.elements.iter().find(|e| selector.matches(e))
    }
}
