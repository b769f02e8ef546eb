//! Document abstraction consumed by the translation pass.
//!
//! `Document` is the narrow slice of a DOM that translation needs: attribute
//! queries and in-place mutation. `Page` is the in-memory implementation used
//! by the binary and the tests; a browser binding would implement the same
//! trait over real nodes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query and mutation surface of a document.
///
/// Handles are cheap, copyable references to elements. The document is the
/// single owner of its elements; callers never hold element borrows.
pub trait Document {
    type Handle: Copy;

    /// Elements carrying `attribute`, in document order.
    fn annotated(&self, attribute: &str) -> Vec<Self::Handle>;

    /// Tag name as written in the markup.
    fn tag_name(&self, element: Self::Handle) -> String;

    fn attribute(&self, element: Self::Handle, name: &str) -> Option<String>;

    fn set_attribute(&mut self, element: Self::Handle, name: &str, value: &str);

    /// Replace children with a single text node.
    fn set_text_content(&mut self, element: Self::Handle, text: &str);

    /// Replace children with parsed markup.
    fn set_inner_html(&mut self, element: Self::Handle, html: &str);

    /// Update the document-level `lang` metadata.
    fn set_document_language(&mut self, lang: &str);
}

/// Children of an element: either plain text or raw markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Content {
    Text(String),
    Html(String),
}

impl Default for Content {
    fn default() -> Self {
        Content::Text(String::new())
    }
}

impl Content {
    /// The raw string regardless of kind.
    pub fn as_str(&self) -> &str {
        match self {
            Content::Text(s) | Content::Html(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub content: Content,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            content: Content::default(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// In-memory document: a flat list of elements plus the document language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element and return its handle.
    pub fn push(&mut self, element: Element) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    pub fn element(&self, handle: usize) -> Option<&Element> {
        self.elements.get(handle)
    }

    fn element_mut(&mut self, handle: usize) -> Option<&mut Element> {
        self.elements.get_mut(handle)
    }
}

impl Document for Page {
    type Handle = usize;

    fn annotated(&self, attribute: &str) -> Vec<usize> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.attributes.contains_key(attribute))
            .map(|(idx, _)| idx)
            .collect()
    }

    fn tag_name(&self, element: usize) -> String {
        self.element(element)
            .map(|el| el.tag.clone())
            .unwrap_or_default()
    }

    fn attribute(&self, element: usize, name: &str) -> Option<String> {
        self.element(element)
            .and_then(|el| el.attr(name))
            .map(str::to_string)
    }

    fn set_attribute(&mut self, element: usize, name: &str, value: &str) {
        if let Some(el) = self.element_mut(element) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn set_text_content(&mut self, element: usize, text: &str) {
        if let Some(el) = self.element_mut(element) {
            el.content = Content::Text(text.to_string());
        }
    }

    fn set_inner_html(&mut self, element: usize, html: &str) {
        if let Some(el) = self.element_mut(element) {
            el.content = Content::Html(html.to_string());
        }
    }

    fn set_document_language(&mut self, lang: &str) {
        self.lang = Some(lang.to_string());
    }
}
