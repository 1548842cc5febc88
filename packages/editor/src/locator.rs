//! # Node Locator
//!
//! Depth-first lookups over a tree of conditional blocks. Ids are unique, so
//! the first match in pre-order is the only match.

use msgtpl_model::{Caret, FieldRef, IfThenElse, Template};

/// A field's text split at the caret
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaretSplit {
    pub before: String,
    pub after: String,
}

pub fn find_node<'a>(children: &'a [IfThenElse], id: &str) -> Option<&'a IfThenElse> {
    if id.is_empty() {
        return None;
    }

    for node in children {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }

    None
}

pub fn find_node_mut<'a>(children: &'a mut [IfThenElse], id: &str) -> Option<&'a mut IfThenElse> {
    if id.is_empty() {
        return None;
    }

    for node in children.iter_mut() {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node_mut(&mut node.children, id) {
            return Some(found);
        }
    }

    None
}

/// The sequence that directly holds `id`, and the node's index in it
pub fn find_siblings_mut<'a>(
    children: &'a mut Vec<IfThenElse>,
    id: &str,
) -> Option<(&'a mut Vec<IfThenElse>, usize)> {
    if id.is_empty() {
        return None;
    }

    if let Some(index) = children.iter().position(|n| n.id == id) {
        return Some((children, index));
    }

    for node in children.iter_mut() {
        if let Some(found) = find_siblings_mut(&mut node.children, id) {
            return Some(found);
        }
    }

    None
}

/// The block whose `children` directly hold `id`; `None` at root level or
/// when `id` is absent
pub fn find_parent_mut<'a>(children: &'a mut [IfThenElse], id: &str) -> Option<&'a mut IfThenElse> {
    for node in children.iter_mut() {
        if node.children.iter().any(|c| c.id == id) {
            return Some(node);
        }
        if let Some(found) = find_parent_mut(&mut node.children, id) {
            return Some(found);
        }
    }

    None
}

/// Text of the addressed field
pub fn field_text<'a>(template: &'a Template, field: &FieldRef) -> Option<&'a str> {
    match field {
        FieldRef::Main => Some(&template.main),
        FieldRef::Node { id, branch } => find_node(&template.children, id).map(|n| n.text(*branch)),
    }
}

pub fn field_text_mut<'a>(template: &'a mut Template, field: &FieldRef) -> Option<&'a mut String> {
    match field {
        FieldRef::Main => Some(&mut template.main),
        FieldRef::Node { id, branch } => {
            find_node_mut(&mut template.children, id).map(|n| n.text_mut(*branch))
        }
    }
}

/// Split the field under the caret into before/after text
pub fn split_at_caret(template: &Template, caret: &Caret) -> Option<CaretSplit> {
    let text = field_text(template, &caret.field)?;
    let (before, after) = caret.split(text);

    Some(CaretSplit {
        before: before.to_string(),
        after: after.to_string(),
    })
}
