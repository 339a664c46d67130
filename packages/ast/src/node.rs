use indexmap::IndexMap;

/// Slot name of a node inside a multi-child array.
pub const KEY_PROP: &str = "@key";
/// Name of the property receiving an element's content children.
pub const CHILDREN_PROP: &str = "@children";
/// Output path of a child element, routing it out of the content children.
pub const PATH_PROP: &str = "@path";

/// Separator between package name and prototype name in a qualified identifier.
pub const NAMESPACE_SEPARATOR: char = ':';

/// Element props keyed by attribute name, in source order.
pub type Props = IndexMap<String, AstNode>;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AstNode {
    /// Embedded code fragment, `{...}` in markup.
    Expression(String),
    /// Explicitly quoted attribute value.
    StringLiteral(String),
    /// Raw text between tags.
    Text(String),
    /// Valueless attribute. Only `true` is ever produced.
    Boolean(bool),
    Element(Element),
}

impl AstNode {
    pub fn expression(code: impl Into<String>) -> Self {
        Self::Expression(code.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::StringLiteral(value.into())
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn boolean() -> Self {
        Self::Boolean(true)
    }

    /// Tag name the markup parser uses for this node kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AstNode::Expression(_) => "expression",
            AstNode::StringLiteral(_) => "string",
            AstNode::Text(_) => "text",
            AstNode::Boolean(_) => "boolean",
            AstNode::Element(_) => "node",
        }
    }

    pub fn as_string_literal(&self) -> Option<&str> {
        if let Self::StringLiteral(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        if let Self::Element(e) = self {
            Some(e)
        } else {
            None
        }
    }
}

impl From<Element> for AstNode {
    fn from(element: Element) -> Self {
        AstNode::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub identifier: String,
    pub props: Props,
    pub children: Vec<AstNode>,
    pub self_closing: bool,
}

impl Element {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            props: Props::new(),
            children: vec![],
            self_closing: false,
        }
    }

    /// Adds a prop. A repeated name replaces the value but keeps its position.
    pub fn with_prop(mut self, name: impl Into<String>, value: AstNode) -> Self {
        self.props.insert(name.into(), value);
        self
    }

    pub fn with_child(mut self, child: impl Into<AstNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AstNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn self_closing(mut self) -> Self {
        self.self_closing = true;
        self
    }

    pub fn prop(&self, name: &str) -> Option<&AstNode> {
        self.props.get(name)
    }

    /// Whether the identifier names a prototype (`Vendor.Site:Name`) rather
    /// than a plain tag.
    pub fn is_qualified(&self) -> bool {
        self.identifier.contains(NAMESPACE_SEPARATOR)
    }
}

/// Control props consumed by the converter and never rendered as attributes.
pub fn is_reserved_prop(name: &str) -> bool {
    matches!(name, KEY_PROP | CHILDREN_PROP | PATH_PROP)
}

pub fn is_meta_prop(name: &str) -> bool {
    name.starts_with('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_identifiers() {
        assert!(Element::new("Vendor.Site:Prototype").is_qualified());
        assert!(!Element::new("h1").is_qualified());
    }

    #[test]
    fn props_keep_insertion_order() {
        let element = Element::new("a")
            .with_prop("href", AstNode::string("#"))
            .with_prop("class", AstNode::string("link"))
            .with_prop("href", AstNode::string("/home"));
        let names: Vec<&str> = element.props.keys().map(String::as_str).collect();
        assert_eq!(names, ["href", "class"]);
        assert_eq!(element.prop("href"), Some(&AstNode::string("/home")));
    }

    #[test]
    fn reserved_and_meta_props() {
        assert!(is_reserved_prop("@key"));
        assert!(is_reserved_prop("@children"));
        assert!(is_reserved_prop("@path"));
        assert!(!is_reserved_prop("@if.hasTitle"));
        assert!(is_meta_prop("@if.hasTitle"));
        assert!(!is_meta_prop("class"));
    }

    #[test]
    fn kind_names() {
        assert_eq!(AstNode::expression("a").kind(), "expression");
        assert_eq!(AstNode::string("a").kind(), "string");
        assert_eq!(AstNode::text("a").kind(), "text");
        assert_eq!(AstNode::boolean().kind(), "boolean");
        assert_eq!(AstNode::from(Element::new("p")).kind(), "node");
    }
}
