//! Headless HTML document backed by scraper/ego-tree

use super::DomTree;
use crate::utils::DomError;
use ego_tree::NodeId;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page that can be queried and mutated in place
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document
    pub fn parse(content: &str) -> Self {
        Self {
            html: Html::parse_document(content),
        }
    }

    /// Serialize the attached document
    pub fn html(&self) -> String {
        self.html.html()
    }

    /// Serialize a node and its subtree, attached or not
    pub fn outer_html(&self, node: NodeId) -> Option<String> {
        self.element(node).map(|element| element.html())
    }

    /// Attribute value of an element
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.value().attr(name)
    }

    /// Id of the parent node, including the document node itself
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.html.tree.get(node)?.parent().map(|parent| parent.id())
    }

    fn element(&self, node: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(node).and_then(ElementRef::wrap)
    }

    fn parse_selector(selector: &str) -> Result<Selector, DomError> {
        Selector::parse(selector).map_err(|e| DomError::InvalidSelector {
            selector: selector.to_string(),
            reason: e.to_string(),
        })
    }
}

impl DomTree for HtmlDocument {
    type Node = NodeId;

    fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>, DomError> {
        let selector = Self::parse_selector(selector)?;
        // Html::select walks the whole arena, detached nodes included, so
        // start from the root element instead. ElementRef::select skips the
        // element it starts from, so <html> is matched separately.
        let root = self.html.root_element();
        Ok(std::iter::once(root)
            .filter(|element| selector.matches(element))
            .chain(root.select(&selector))
            .map(|element| element.id())
            .collect())
    }

    fn query_selector_within(
        &self,
        scope: NodeId,
        selector: &str,
    ) -> Result<Option<NodeId>, DomError> {
        let selector = Self::parse_selector(selector)?;
        let scope_element = self
            .element(scope)
            .ok_or_else(|| DomError::UnknownNode(format!("{scope:?}")))?;
        Ok(scope_element
            .select(&selector)
            .map(|element| element.id())
            .next())
    }

    fn parent_element(&self, node: NodeId) -> Option<NodeId> {
        self.html
            .tree
            .get(node)?
            .parent()
            .filter(|parent| parent.value().is_element())
            .map(|parent| parent.id())
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.html
            .tree
            .get(node)?
            .value()
            .as_element()
            .map(|element| element.name())
    }

    fn create_element(
        &mut self,
        tag_name: &str,
        attributes: &[(&str, &str)],
    ) -> Result<NodeId, DomError> {
        let valid_tag = tag_name.starts_with(|c: char| c.is_ascii_alphabetic())
            && tag_name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !tag_name.eq_ignore_ascii_case("html");
        if !valid_tag {
            return Err(DomError::InvalidTagName(tag_name.to_string()));
        }

        // Let the HTML parser build the element so names and attributes get
        // the same namespaces as parsed content.
        let mut markup = format!("<{tag_name}");
        for (name, value) in attributes {
            markup.push(' ');
            markup.push_str(name);
            markup.push_str("=\"");
            escape_attribute(value, &mut markup);
            markup.push('"');
        }
        markup.push_str(&format!("></{tag_name}>"));

        let fragment = Html::parse_fragment(&markup);
        let selector = Self::parse_selector(tag_name)
            .map_err(|_| DomError::InvalidTagName(tag_name.to_string()))?;
        let element = fragment
            .root_element()
            .select(&selector)
            .next()
            .map(|element| element.value().clone())
            .ok_or_else(|| DomError::InvalidTagName(tag_name.to_string()))?;

        let id = self.html.tree.orphan(Node::Element(element)).id();
        log::debug!("Created <{}> element {:?}", tag_name, id);
        Ok(id)
    }

    fn replace_node(&mut self, old: NodeId, replacement: NodeId) -> Result<(), DomError> {
        if self.html.tree.get(replacement).is_none() {
            return Err(DomError::UnknownNode(format!("{replacement:?}")));
        }
        let has_parent = self
            .html
            .tree
            .get(old)
            .ok_or_else(|| DomError::UnknownNode(format!("{old:?}")))?
            .parent()
            .is_some();
        if !has_parent {
            return Err(DomError::Detached(format!("{old:?}")));
        }

        let mut old_node = self
            .html
            .tree
            .get_mut(old)
            .ok_or_else(|| DomError::UnknownNode(format!("{old:?}")))?;
        old_node.insert_id_before(replacement);
        old_node.detach();
        log::debug!("Replaced node {:?} with {:?}", old, replacement);
        Ok(())
    }

    fn is_attached(&self, node: NodeId) -> bool {
        let root = self.html.tree.root().id();
        let mut current = self.html.tree.get(node);
        while let Some(n) = current {
            if n.id() == root {
                return true;
            }
            current = n.parent();
        }
        false
    }
}

fn escape_attribute(value: &str, output: &mut String) {
    for ch in value.chars() {
        match ch {
            '"' => output.push_str("&quot;"),
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            c => output.push(c),
        }
    }
}
