//! Lightweight node tree over `quick-xml` events.
//!
//! Both markup sources need DOM-style queries: the Hebrew side wants
//! "all `w` under this `v`", the Spanish side wants "the siblings after this
//! `v`". The tree keeps text nodes in place so sibling order is preserved.
//!
//! Malformed input never fails the parse: the reader logs the error and keeps
//! everything read up to that point, closing any open elements.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    fn from_start(start: &BytesStart<'_>) -> Self {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

        let attributes = start
            .attributes()
            .flatten()
            .map(|a| {
                let key = String::from_utf8_lossy(a.key.local_name().as_ref()).into_owned();
                let value = match a.unescape_value() {
                    Ok(v) => v.into_owned(),
                    Err(_) => String::from_utf8_lossy(&a.value).into_owned(),
                };
                (key, value)
            })
            .collect();

        Self {
            name,
            attributes,
            children: Vec::new(),
        }
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn is_ignore_case(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All descendant elements named `name`, in document order.
    pub fn descendants<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        collect_descendants(self, name, &mut found);
        found
    }

    /// Concatenated text of every descendant text node.
    pub fn text_content(&self) -> String {
        self.text_content_excluding(|_| false)
    }

    /// Concatenated descendant text, skipping whole subtrees rooted at
    /// elements for which `skip` returns true.
    pub fn text_content_excluding<F>(&self, skip: F) -> String
    where
        F: Fn(&Element) -> bool,
    {
        let mut text = String::new();
        append_text(self, &skip, &mut text);
        text
    }

    /// Every descendant element matching `pred`, paired with its sibling list.
    pub fn find_with_siblings<'a, P>(&'a self, pred: P) -> Vec<SiblingRef<'a>>
    where
        P: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        collect_with_siblings(self, &pred, &mut found);
        found
    }
}

fn collect_descendants<'a>(element: &'a Element, name: &str, found: &mut Vec<&'a Element>) {
    for child in &element.children {
        if let Node::Element(e) = child {
            if e.is(name) {
                found.push(e);
            }
            collect_descendants(e, name, found);
        }
    }
}

fn append_text<F>(element: &Element, skip: &F, text: &mut String)
where
    F: Fn(&Element) -> bool,
{
    for child in &element.children {
        match child {
            Node::Text(t) => text.push_str(t),
            Node::Element(e) if !skip(e) => append_text(e, skip, text),
            Node::Element(_) => {}
        }
    }
}

fn collect_with_siblings<'a, P>(element: &'a Element, pred: &P, found: &mut Vec<SiblingRef<'a>>)
where
    P: Fn(&Element) -> bool,
{
    for (index, child) in element.children.iter().enumerate() {
        if let Node::Element(e) = child {
            if pred(e) {
                found.push(SiblingRef {
                    element: e,
                    siblings: &element.children,
                    index,
                });
            }
            collect_with_siblings(e, pred, found);
        }
    }
}

/// An element located by its position among its parent's children.
#[derive(Debug, Clone, Copy)]
pub struct SiblingRef<'a> {
    element: &'a Element,
    siblings: &'a [Node],
    index: usize,
}

impl<'a> SiblingRef<'a> {
    pub fn element(&self) -> &'a Element {
        self.element
    }

    /// Nodes after this element under the same parent.
    pub fn following(&self) -> std::slice::Iter<'a, Node> {
        self.siblings[self.index + 1..].iter()
    }
}

/// A parsed markup document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Decode raw bytes (UTF-8, optional BOM) and parse them.
    ///
    /// Invalid sequences become U+FFFD so a stray byte in one book doesn't
    /// take down every book sharing the same file.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let text = String::from_utf8_lossy(bytes);
        if let Cow::Owned(_) = text {
            tracing::warn!("Markup is not valid UTF-8; invalid bytes replaced");
        }
        Self::parse(text.trim_start_matches('\u{feff}'))
    }

    pub fn parse(input: &str) -> Self {
        let mut reader = Reader::from_str(input);
        let mut stack = vec![Element::default()];

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => stack.push(Element::from_start(&e)),
                Ok(Event::Empty(e)) => push_node(&mut stack, Node::Element(Element::from_start(&e))),
                Ok(Event::End(_)) => close_element(&mut stack),
                Ok(Event::Text(e)) => {
                    let text = match e.unescape() {
                        Ok(t) => t,
                        Err(_) => Cow::Owned(String::from_utf8_lossy(&e).into_owned()),
                    };
                    push_text(&mut stack, &text);
                }
                Ok(Event::CData(e)) => push_text(&mut stack, &String::from_utf8_lossy(&e)),
                Ok(Event::Eof) => break,
                Err(e) => {
                    tracing::warn!(
                        "Malformed markup at byte {}: {}; keeping partial document",
                        reader.buffer_position(),
                        e
                    );
                    break;
                }
                Ok(_) => {}
            }
        }

        while stack.len() > 1 {
            close_element(&mut stack);
        }

        Self {
            root: stack.pop().unwrap_or_default(),
        }
    }

    /// Synthetic root holding the top-level nodes.
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn descendants<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        self.root.descendants(name)
    }

    pub fn find_with_siblings<'a, P>(&'a self, pred: P) -> Vec<SiblingRef<'a>>
    where
        P: Fn(&Element) -> bool,
    {
        self.root.find_with_siblings(pred)
    }
}

fn push_node(stack: &mut [Element], node: Node) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

fn push_text(stack: &mut [Element], text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(parent) = stack.last_mut() {
        // Adjacent text and CDATA runs merge into one node
        if let Some(Node::Text(previous)) = parent.children.last_mut() {
            previous.push_str(text);
        } else {
            parent.children.push(Node::Text(text.to_string()));
        }
    }
}

fn close_element(stack: &mut Vec<Element>) {
    // The synthetic root is never closed
    if stack.len() < 2 {
        return;
    }
    if let Some(element) = stack.pop() {
        push_node(stack, Node::Element(element));
    }
}
