//! # Template Tree
//!
//! A [`Template`] is a root `main` text followed by an ordered list of
//! [`IfThenElse`] blocks. Each block owns four text fields and may nest
//! further blocks under any of its branches; the nested block's
//! [`BlockType`] records which branch it was inserted under.
//!
//! ```text
//! Template.main
//! ├── IfThenElse (parent: main)
//! │   ├── if / then / else / optional
//! │   └── children
//! │       ├── IfThenElse (parent: if)    folded into the parent's condition
//! │       └── IfThenElse (parent: then)  rendered after the parent's branch
//! └── IfThenElse (parent: main)
//! ```

use crate::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text a fresh editing session starts with when no template was stored
pub const DEFAULT_MAIN_TEXT: &str = "Hello, {{firstname}}!";

/// Which branch of an ancestor (or the root) a block was inserted under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Main,
    If,
    Then,
    Else,
    Optional,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Main => "main",
            BlockType::If => "if",
            BlockType::Then => "then",
            BlockType::Else => "else",
            BlockType::Optional => "optional",
        }
    }

    /// The node branch this tag names, `None` for the root
    pub fn as_branch(&self) -> Option<Branch> {
        match self {
            BlockType::Main => None,
            BlockType::If => Some(Branch::If),
            BlockType::Then => Some(Branch::Then),
            BlockType::Else => Some(Branch::Else),
            BlockType::Optional => Some(Branch::Optional),
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four text fields of a conditional block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    If,
    Then,
    Else,
    Optional,
}

impl Branch {
    pub const ALL: [Branch; 4] = [Branch::If, Branch::Then, Branch::Else, Branch::Optional];

    pub fn as_str(&self) -> &'static str {
        BlockType::from(*self).as_str()
    }
}

impl From<Branch> for BlockType {
    fn from(branch: Branch) -> Self {
        match branch {
            Branch::If => BlockType::If,
            Branch::Then => BlockType::Then,
            Branch::Else => BlockType::Else,
            Branch::Optional => BlockType::Optional,
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Branch {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "if" => Ok(Branch::If),
            "then" => Ok(Branch::Then),
            "else" => Ok(Branch::Else),
            "optional" => Ok(Branch::Optional),
            _ => Err(ModelError::InvalidBranch(s.to_string())),
        }
    }
}

/// A conditional block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfThenElse {
    pub id: String,
    pub parent: BlockType,
    #[serde(rename = "if")]
    pub condition: String,
    pub then: String,
    #[serde(rename = "else")]
    pub otherwise: String,
    pub optional: String,
    #[serde(default)]
    pub children: Vec<IfThenElse>,
}

impl IfThenElse {
    /// Fresh block with empty branches; `optional` carries the text that
    /// followed the caret at insertion time
    pub fn new(id: impl Into<String>, parent: BlockType, optional: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent,
            condition: String::new(),
            then: String::new(),
            otherwise: String::new(),
            optional: optional.into(),
            children: Vec::new(),
        }
    }

    pub fn text(&self, branch: Branch) -> &str {
        match branch {
            Branch::If => &self.condition,
            Branch::Then => &self.then,
            Branch::Else => &self.otherwise,
            Branch::Optional => &self.optional,
        }
    }

    pub fn text_mut(&mut self, branch: Branch) -> &mut String {
        match branch {
            Branch::If => &mut self.condition,
            Branch::Then => &mut self.then,
            Branch::Else => &mut self.otherwise,
            Branch::Optional => &mut self.optional,
        }
    }

    /// Text presence is the boolean: an empty condition counts as false
    pub fn is_condition_met(&self) -> bool {
        !self.condition.is_empty()
    }

    /// Children inserted under `branch`, in order
    pub fn children_in(&self, branch: Branch) -> impl Iterator<Item = &IfThenElse> {
        let tag = BlockType::from(branch);
        self.children.iter().filter(move |c| c.parent == tag)
    }

    /// This block plus every descendant, pre-order
    pub fn walk(&self) -> Vec<&IfThenElse> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }
}

/// Root of a message template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub main: String,
    #[serde(default)]
    pub children: Vec<IfThenElse>,
}

impl Template {
    pub fn new(main: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            children: Vec::new(),
        }
    }

    /// `main: ""` with no children; what malformed input decodes to
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Every block in the tree, pre-order
    pub fn nodes(&self) -> Vec<&IfThenElse> {
        self.children.iter().flat_map(|c| c.walk()).collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.nodes().iter().any(|n| n.id == id)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new(DEFAULT_MAIN_TEXT)
    }
}

/// Address of one editable text field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldRef {
    /// The template's `main` text
    Main,
    /// A branch of the block with this id
    Node { id: String, branch: Branch },
}

impl FieldRef {
    pub fn node(id: impl Into<String>, branch: Branch) -> Self {
        FieldRef::Node {
            id: id.into(),
            branch,
        }
    }

    pub fn node_id(&self) -> Option<&str> {
        match self {
            FieldRef::Main => None,
            FieldRef::Node { id, .. } => Some(id),
        }
    }

    pub fn block_type(&self) -> BlockType {
        match self {
            FieldRef::Main => BlockType::Main,
            FieldRef::Node { branch, .. } => (*branch).into(),
        }
    }

    pub fn at(self, offset: usize) -> Caret {
        Caret {
            field: self,
            offset,
        }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRef::Main => f.write_str("main"),
            FieldRef::Node { id, branch } => write!(f, "{}:{}", id, branch),
        }
    }
}

/// Parses `main` or `<id>:<branch>`
impl FromStr for FieldRef {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("main") {
            return Ok(FieldRef::Main);
        }

        match s.rsplit_once(':') {
            Some((id, branch)) if !id.is_empty() => Ok(FieldRef::node(id, branch.parse()?)),
            _ => Err(ModelError::InvalidField(s.to_string())),
        }
    }
}

/// Text-insertion cursor: a field plus a character offset into it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Caret {
    pub field: FieldRef,
    pub offset: usize,
}

impl Caret {
    pub fn new(field: FieldRef, offset: usize) -> Self {
        Self { field, offset }
    }

    /// Byte index of this caret in `text`, clamped to the end
    pub fn byte_index(&self, text: &str) -> usize {
        text.char_indices()
            .nth(self.offset)
            .map(|(i, _)| i)
            .unwrap_or(text.len())
    }

    /// `text` split at the caret
    pub fn split<'a>(&self, text: &'a str) -> (&'a str, &'a str) {
        text.split_at(self.byte_index(text))
    }
}

impl fmt::Display for Caret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.field, self.offset)
    }
}

/// Parses `<field>@<offset>`; a bare field means offset 0
impl FromStr for Caret {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('@') {
            Some((field, offset)) => {
                let offset = offset
                    .parse()
                    .map_err(|_| ModelError::InvalidCaret(s.to_string()))?;
                Ok(Caret::new(field.parse()?, offset))
            }
            None => Ok(Caret::new(s.parse()?, 0)),
        }
    }
}
