use std::borrow::Cow;

use afx_ast::{
    node::{is_meta_prop, is_reserved_prop, CHILDREN_PROP, KEY_PROP, PATH_PROP},
    AstNode, Element,
};
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{
    error::RenderError,
    escape::{normalize_whitespace, quote_string_literal, quote_text},
    options::RenderOptions,
};

/// One level of block indentation.
pub const INDENTATION: &str = "    ";

const TAG_PROTOTYPE: &str = "Neos.Fusion:Tag";
const ARRAY_PROTOTYPE: &str = "Neos.Fusion:Array";
const ATTRIBUTE_PREFIX: &str = "attributes.";
const DEFAULT_CHILDREN_PROP: &str = "content";

type RenderResult = Result<Option<String>, RenderError>;

/// Renders AFX trees into fusion.
///
/// Every render function returns `Ok(None)` for a node that produces no
/// fusion at all; callers drop the whole assignment in that case. `indentation`
/// is the prefix of the line the rendered value starts on: nested lines are
/// indented one level deeper and a closing brace lines up with it.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders a parsed document. The document root is always a node list.
    pub fn render(&self, nodes: &[AstNode]) -> Result<String, RenderError> {
        let fusion = self.node_list(nodes, &self.options.indentation, 0)?;
        Ok(fusion.unwrap_or_default())
    }

    pub fn render_node(&self, node: &AstNode, indentation: &str) -> RenderResult {
        self.node(node, indentation, 0)
    }

    pub fn render_element(&self, element: &Element, indentation: &str) -> RenderResult {
        self.element(element, indentation, 0)
    }

    pub fn render_node_list<'a, I>(&self, nodes: I, indentation: &str) -> RenderResult
    where
        I: IntoIterator<Item = &'a AstNode>,
    {
        self.node_list(nodes, indentation, 0)
    }

    fn node(&self, node: &AstNode, indentation: &str, depth: usize) -> RenderResult {
        match node {
            AstNode::Expression(code) => Ok(Some(format!("${{{code}}}"))),
            AstNode::StringLiteral(value) => Ok(Some(quote_string_literal(value))),
            AstNode::Text(value) => Ok(Some(quote_text(value))),
            // the parser only emits valueless attributes, which are true
            AstNode::Boolean(_) => Ok(Some("true".to_string())),
            AstNode::Element(element) => self.element(element, indentation, depth),
            other => Err(RenderError::UnknownNodeKind {
                kind: other.kind().to_string(),
            }),
        }
    }

    fn element(&self, element: &Element, indentation: &str, depth: usize) -> RenderResult {
        let depth = depth + 1;
        if let Some(limit) = self.options.max_depth {
            if depth > limit {
                return Err(RenderError::DepthLimitExceeded { limit });
            }
        }

        let inner = format!("{indentation}{INDENTATION}");
        let (path_children, content_children) = classify_children(&element.children)?;

        let mut fusion = String::new();
        let attribute_prefix = if element.is_qualified() {
            // named fusion object, attributes are its properties
            fusion.push_str(&element.identifier);
            fusion.push_str(" {\n");
            ""
        } else {
            fusion.push_str(TAG_PROTOTYPE);
            fusion.push_str(" {\n");
            push_assignment(
                &mut fusion,
                &inner,
                "tagName",
                &quote_string_literal(&element.identifier),
            );
            if element.self_closing {
                push_assignment(&mut fusion, &inner, "selfClosingTag", "true");
            }
            ATTRIBUTE_PREFIX
        };

        for (name, value) in &element.props {
            if is_reserved_prop(name) {
                continue;
            }
            let Some(value) = self.node(value, &inner, depth)? else {
                continue;
            };
            if is_meta_prop(name) {
                push_assignment(&mut fusion, &inner, name, &value);
            } else {
                let name = format!("{attribute_prefix}{name}");
                push_assignment(&mut fusion, &inner, &name, &value);
            }
        }

        for (path, child) in &path_children {
            if let Some(value) = self.node(child, &inner, depth)? {
                push_assignment(&mut fusion, &inner, path, &value);
            }
        }

        if !content_children.is_empty() {
            let children_prop = match element.prop(CHILDREN_PROP) {
                Some(prop) => prop.as_string_literal().ok_or_else(|| {
                    RenderError::InvalidChildrenPayload {
                        found: prop.kind().to_string(),
                    }
                })?,
                None => DEFAULT_CHILDREN_PROP,
            };
            if let Some(value) = self.node_list(content_children, &inner, depth)? {
                push_assignment(&mut fusion, &inner, children_prop, &value);
            }
        }

        fusion.push_str(indentation);
        fusion.push('}');

        Ok(Some(fusion))
    }

    fn node_list<'a, I>(&self, nodes: I, indentation: &str, depth: usize) -> RenderResult
    where
        I: IntoIterator<Item = &'a AstNode>,
    {
        let siblings = significant_siblings(nodes);

        match siblings.as_slice() {
            [] => Ok(Some("''".to_string())),
            [single] => self.node(single, indentation, depth),
            _ => {
                let inner = format!("{indentation}{INDENTATION}");
                let mut fusion = format!("{ARRAY_PROTOTYPE} {{\n");
                let mut index = 1;

                for node in &siblings {
                    let name = match node.as_element().and_then(|e| e.prop(KEY_PROP)) {
                        Some(key) => key
                            .as_string_literal()
                            .ok_or_else(|| RenderError::InvalidKeyPayload {
                                found: key.kind().to_string(),
                            })?
                            .to_string(),
                        None => index.to_string(),
                    };

                    match self.node(node, &inner, depth)? {
                        Some(value) => {
                            trace!(slot = %name, kind = node.kind(), "array slot");
                            push_assignment(&mut fusion, &inner, &name, &value);
                            index += 1;
                        }
                        None => trace!(kind = node.kind(), "skipping empty array slot"),
                    }
                }

                fusion.push_str(indentation);
                fusion.push('}');
                Ok(Some(fusion))
            }
        }
    }
}

fn push_assignment(fusion: &mut String, indentation: &str, name: &str, value: &str) {
    fusion.push_str(indentation);
    fusion.push_str(name);
    fusion.push_str(" = ");
    fusion.push_str(value);
    fusion.push('\n');
}

/// Splits children into elements routed by `@path` and ordinary content.
///
/// A repeated path keeps the position of its first occurrence and the value
/// of its last one.
fn classify_children(
    children: &[AstNode],
) -> Result<(IndexMap<&str, &AstNode>, Vec<&AstNode>), RenderError> {
    let mut path_children = IndexMap::new();
    let mut content_children = vec![];

    for child in children {
        let Some(prop) = child.as_element().and_then(|e| e.prop(PATH_PROP)) else {
            content_children.push(child);
            continue;
        };
        let path = prop
            .as_string_literal()
            .ok_or_else(|| RenderError::InvalidPathPayload {
                found: prop.kind().to_string(),
            })?;
        if path_children.insert(path, child).is_some() {
            debug!(path, "duplicate @path, the later element wins");
        }
    }

    trace!(
        path_children = path_children.len(),
        content_children = content_children.len(),
        "classified children"
    );

    Ok((path_children, content_children))
}

/// Applies the whitespace policy to text nodes and drops the ones left empty.
fn significant_siblings<'a, I>(nodes: I) -> Vec<Cow<'a, AstNode>>
where
    I: IntoIterator<Item = &'a AstNode>,
{
    nodes
        .into_iter()
        .filter_map(|node| match node {
            AstNode::Text(value) => {
                let value = normalize_whitespace(value);
                if value.is_empty() {
                    None
                } else {
                    Some(Cow::Owned(AstNode::Text(value)))
                }
            }
            _ => Some(Cow::Borrowed(node)),
        })
        .collect()
}
