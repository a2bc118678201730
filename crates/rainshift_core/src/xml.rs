//! Format-preserving XML tree for profile round trips.
//!
//! The tree keeps every element, attribute, text run, CDATA section, comment
//! and processing instruction in document order so fields the editor does not
//! model survive an edit cycle. Attribute and text values are always kept as
//! strings. The XML declaration is always rewritten as UTF-8 and a doctype is
//! not kept.

use quick_xml::events::{BytesCData, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::core_api::{CoreError, CoreErrorCode};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

const INDENT_WIDTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
    /// Target and content of `<?target content?>`.
    ProcessingInstruction(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub prolog: Vec<Node>,
    pub root: Element,
    pub trailing: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut element = Self::new(name);
        element.set_text(text);
        element
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attribute(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((key.to_string(), value)),
        }
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.elements().filter(move |element| element.name == name)
    }

    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|element| element.name == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.elements_mut().find(|element| element.name == name)
    }

    /// Returns the named child, appending an empty one if it is missing.
    pub fn child_or_insert(&mut self, name: &str) -> &mut Element {
        let index = match self
            .children
            .iter()
            .position(|node| matches!(node, Node::Element(e) if e.name == name))
        {
            Some(index) => index,
            None => {
                self.children.push(Node::Element(Element::new(name)));
                self.children.len() - 1
            }
        };
        match &mut self.children[index] {
            Node::Element(element) => element,
            _ => unreachable!("index points at an element node"),
        }
    }

    pub fn push_element(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    pub fn retain_elements(&mut self, mut keep: impl FnMut(&Element) -> bool) {
        self.children.retain(|node| match node {
            Node::Element(element) => keep(element),
            _ => true,
        });
    }

    /// Concatenated text and CDATA content of this element.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(text) | Node::CData(text) => out.push_str(text),
                _ => {}
            }
        }
        out
    }

    /// Replaces all text and CDATA content, leaving child elements in place.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.children
            .retain(|node| !matches!(node, Node::Text(_) | Node::CData(_)));
        if !text.is_empty() {
            self.children.insert(0, Node::Text(text));
        }
    }
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            prolog: Vec::new(),
            root,
            trailing: Vec::new(),
        }
    }
}

pub fn parse(text: &str) -> Result<Document, CoreError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut prolog = Vec::new();
    let mut trailing = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            malformed(format!(
                "invalid XML near byte {}: {e}",
                reader.buffer_position()
            ))
        })?;

        match event {
            Event::Start(start) => stack.push(element_from_start(&start)?),
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                close_element(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| malformed("closing tag without a matching opening tag"))?;
                close_element(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let value = text
                    .unescape()
                    .map_err(|e| malformed(format!("invalid text content: {e}")))?
                    .into_owned();
                push_content(&mut stack, Node::Text(value))?;
            }
            Event::CData(data) => {
                let value = String::from_utf8(data.into_inner().into_owned())
                    .map_err(|e| malformed(format!("CDATA is not valid UTF-8: {e}")))?;
                push_content(&mut stack, Node::CData(value))?;
            }
            Event::Comment(comment) => {
                let node = Node::Comment(String::from_utf8_lossy(&comment).into_owned());
                push_misc(&mut stack, &root, &mut prolog, &mut trailing, node);
            }
            Event::PI(pi) => {
                let content = std::str::from_utf8(&pi)
                    .map_err(|e| {
                        malformed(format!("processing instruction is not valid UTF-8: {e}"))
                    })?
                    .to_string();
                let node = Node::ProcessingInstruction(content);
                push_misc(&mut stack, &root, &mut prolog, &mut trailing, node);
            }
            // The declaration is re-emitted by `serialize`.
            Event::Decl(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(open) = stack.last() {
        return Err(malformed(format!("unclosed element <{}>", open.name)));
    }

    let root = root.ok_or_else(|| malformed("document has no root element"))?;
    Ok(Document {
        prolog,
        root,
        trailing,
    })
}

pub fn serialize(document: &Document) -> Result<String, CoreError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH);
    for node in &document.prolog {
        write_node(&mut writer, node)?;
    }
    write_element(&mut writer, &document.root)?;
    for node in &document.trailing {
        write_node(&mut writer, node)?;
    }

    let body = String::from_utf8(writer.into_inner()).map_err(|e| {
        CoreError::new(
            CoreErrorCode::Serialization,
            format!("serialized XML is not valid UTF-8: {e}"),
        )
    })?;
    Ok(format!("{XML_DECLARATION}\n{body}\n"))
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, CoreError> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| malformed(format!("element name is not valid UTF-8: {e}")))?
        .to_string();

    let mut element = Element::new(name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| {
            malformed(format!("invalid attribute on <{}>: {e}", element.name))
        })?;
        let key = std::str::from_utf8(attribute.key.as_ref())
            .map_err(|e| malformed(format!("attribute name is not valid UTF-8: {e}")))?
            .to_string();
        let value = attribute
            .unescape_value()
            .map_err(|e| malformed(format!("invalid value for attribute {key}: {e}")))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn close_element(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), CoreError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(Node::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(malformed(format!(
            "multiple root elements (second root <{}>)",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}

/// Comments and processing instructions may sit before or after the root.
fn push_misc(
    stack: &mut [Element],
    root: &Option<Element>,
    prolog: &mut Vec<Node>,
    trailing: &mut Vec<Node>,
    node: Node,
) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None if root.is_none() => prolog.push(node),
        None => trailing.push(node),
    }
}

fn push_content(stack: &mut [Element], node: Node) -> Result<(), CoreError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(node);
            Ok(())
        }
        None => Err(malformed("text content outside the root element")),
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), CoreError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    emit(writer, Event::Start(start))?;

    if element.children.is_empty() {
        // Keeps `<tag></tag>` on one line instead of splitting it.
        emit(writer, Event::Text(BytesText::new("")))?;
    }
    for child in &element.children {
        write_node(writer, child)?;
    }

    emit(writer, Event::End(BytesEnd::new(element.name.as_str())))
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> Result<(), CoreError> {
    match node {
        Node::Element(element) => write_element(writer, element),
        Node::Text(text) => emit(writer, Event::Text(BytesText::new(text))),
        Node::CData(data) => emit(writer, Event::CData(BytesCData::new(data.as_str()))),
        Node::Comment(comment) => emit(
            writer,
            Event::Comment(BytesText::from_escaped(comment.as_str())),
        ),
        Node::ProcessingInstruction(content) => {
            emit(writer, Event::PI(BytesPI::new(content.as_str())))
        }
    }
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), CoreError> {
    writer.write_event(event).map_err(|e| {
        CoreError::new(
            CoreErrorCode::Serialization,
            format!("failed to write XML: {e}"),
        )
    })
}

fn malformed(message: impl Into<String>) -> CoreError {
    CoreError::new(CoreErrorCode::MalformedInput, message)
}
