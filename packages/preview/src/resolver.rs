//! # Conditional Resolution
//!
//! Turns a template tree into the flat list of text segments the preview
//! displays. A block shows `then` when its condition text is non-empty and
//! `else` otherwise, followed by its non-IF children and its `optional`
//! text.
//!
//! Children inserted under a block's IF branch do not render on their own:
//! each one resolves to `then + optional` or `else + optional` and that text
//! is appended to the parent's condition. A nested IF child can therefore
//! turn its parent's condition true even when the parent's own `if` field is
//! empty.

use msgtpl_model::{BlockType, Branch, IfThenElse, Template};

/// Fold IF-tagged children into the condition text of a copy of `node`.
/// The copy keeps only the remaining children.
pub fn resolve_if_blocks(node: &IfThenElse) -> IfThenElse {
    let mut condition = node.condition.clone();

    for child in node.children_in(Branch::If) {
        let resolved = resolve_if_blocks(child);
        condition.push_str(chosen_branch(&resolved));
        condition.push_str(&resolved.optional);
    }

    IfThenElse {
        id: node.id.clone(),
        parent: node.parent,
        condition,
        then: node.then.clone(),
        otherwise: node.otherwise.clone(),
        optional: node.optional.clone(),
        children: node
            .children
            .iter()
            .filter(|c| c.parent != BlockType::If)
            .cloned()
            .collect(),
    }
}

/// Display segments for one block and everything under it
pub fn render_node(node: &IfThenElse) -> Vec<String> {
    let mut segments = Vec::new();
    render_resolved(&resolve_if_blocks(node), &mut segments);
    segments
}

/// Display segments for a whole template: `main`, then each block
pub fn render_template(template: &Template) -> Vec<String> {
    let mut segments = vec![template.main.clone()];
    for child in &template.children {
        render_resolved(&resolve_if_blocks(child), &mut segments);
    }
    segments
}

fn chosen_branch(node: &IfThenElse) -> &str {
    if node.is_condition_met() {
        &node.then
    } else {
        &node.otherwise
    }
}

fn render_resolved(node: &IfThenElse, segments: &mut Vec<String>) {
    segments.push(chosen_branch(node).to_string());
    for child in &node.children {
        render_resolved(&resolve_if_blocks(child), segments);
    }
    segments.push(node.optional.clone());
}
