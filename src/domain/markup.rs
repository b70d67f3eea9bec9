//! Minimal HTML node tree.

use std::fmt;

/// Attribute attached to an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attr {
    /// `key="value"`.
    Value(&'static str, String),
    /// Boolean attribute such as `required`, emitted by name only.
    Flag(&'static str),
}

impl Attr {
    pub fn name(&self) -> &'static str {
        match self {
            Attr::Value(name, _) | Attr::Flag(name) => *name,
        }
    }
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<Attr>,
    pub children: Vec<MarkupNode>,
}

/// Node of a rendered markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Element(Element),
    Text(String),
}

const VOID_TAGS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self { tag, attrs: Vec::new(), children: Vec::new() }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push(Attr::Value(name, value.into()));
        self
    }

    /// Attribute emitted only when `value` is present.
    pub fn opt_attr(self, name: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Boolean attribute emitted only when `on` is true.
    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.attrs.push(Attr::Flag(name));
        }
        self
    }

    pub fn child(mut self, node: impl Into<MarkupNode>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<MarkupNode>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(MarkupNode::Text(text.into()))
    }

    /// Value of a `key="value"` attribute.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find_map(|attr| match attr {
            Attr::Value(key, value) if *key == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|attr| attr.name() == name)
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for attr in &self.attrs {
            match attr {
                Attr::Value(name, value) => {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&html_escape::encode_double_quoted_attribute(value));
                    out.push('"');
                }
                Attr::Flag(name) => {
                    out.push(' ');
                    out.push_str(name);
                }
            }
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl From<Element> for MarkupNode {
    fn from(element: Element) -> Self {
        MarkupNode::Element(element)
    }
}

impl MarkupNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            MarkupNode::Element(element) => Some(element),
            MarkupNode::Text(_) => None,
        }
    }

    /// Depth-first list of every element with the given tag, self included.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(tag, &mut found);
        found
    }

    fn collect<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        if let MarkupNode::Element(element) = self {
            if element.tag == tag {
                found.push(element);
            }
            for child in &element.children {
                child.collect(tag, found);
            }
        }
    }

    /// Concatenated text content of the subtree.
    pub fn text_content(&self) -> String {
        match self {
            MarkupNode::Text(text) => text.clone(),
            MarkupNode::Element(element) => {
                element.children.iter().map(MarkupNode::text_content).collect()
            }
        }
    }

    /// Serialize the tree to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            MarkupNode::Element(element) => element.write_html(out),
            MarkupNode::Text(text) => out.push_str(&html_escape::encode_text(text)),
        }
    }
}

impl fmt::Display for MarkupNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
