//! Syntax-tree nodes supplied by the external parser.
//!
//! Only the node kinds rules are interested in are modelled. The parser
//! flattens its tree into a sequence of these nodes per file.

use serde::{Deserialize, Serialize};

/// Tag used to dispatch nodes to the rules interested in them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A function call expression.
    FuncCall,
    /// A terminate-execution expression.
    Exit,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FuncCall => write!(f, "func_call"),
            Self::Exit => write!(f, "exit"),
        }
    }
}

/// The callee of a function call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallTarget {
    /// A plain name written in source (e.g. `eval`, `App\helper`).
    Name(String),
    /// A computed callee (`$fn()`, `($a . $b)()`).
    Dynamic,
}

impl CallTarget {
    /// Returns the simple name, if the callee is one.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Dynamic => None,
        }
    }
}

/// Which spelling of the terminate construct was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitKind {
    /// `exit`
    #[default]
    Exit,
    /// `die`
    Die,
}

/// A syntax-tree node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    /// A function call expression.
    FuncCall {
        /// The callee.
        target: CallTarget,
        /// Line the call starts on (1-indexed).
        line: usize,
    },
    /// A terminate-execution expression.
    Exit {
        /// Spelling used.
        #[serde(default)]
        kind: ExitKind,
        /// Line the expression starts on (1-indexed).
        line: usize,
    },
}

impl Node {
    /// Creates a call to a named function.
    #[must_use]
    pub fn call(name: impl Into<String>, line: usize) -> Self {
        Self::FuncCall {
            target: CallTarget::Name(name.into()),
            line,
        }
    }

    /// Creates a call with a computed callee.
    #[must_use]
    pub fn dynamic_call(line: usize) -> Self {
        Self::FuncCall {
            target: CallTarget::Dynamic,
            line,
        }
    }

    /// Creates an `exit` expression.
    #[must_use]
    pub fn exit(line: usize) -> Self {
        Self::Exit {
            kind: ExitKind::Exit,
            line,
        }
    }

    /// Returns the dispatch tag of this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::FuncCall { .. } => NodeKind::FuncCall,
            Self::Exit { .. } => NodeKind::Exit,
        }
    }

    /// Returns the line the node starts on.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::FuncCall { line, .. } | Self::Exit { line, .. } => *line,
        }
    }
}
