//! The slice of the notebook document model that the preprocessors consume.
//!
//! The host pipeline owns parsing and serialization of the full `.ipynb`
//! format; only the fields the plugins touch are modelled here. Everything
//! else rides along in the `metadata` maps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single notebook cell, tagged by its `cell_type`.
///
/// The cell kind never changes inside a preprocessing pass; only the
/// `source` text and the cell's membership in [`Notebook::cells`] may.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    Markdown {
        source: String,
        #[serde(default)]
        metadata: Map<String, Value>,
    },
    Code {
        source: String,
        #[serde(default)]
        metadata: Map<String, Value>,
    },
    Raw {
        source: String,
        #[serde(default)]
        metadata: Map<String, Value>,
    },
}

impl Cell {
    /// Build a markdown cell with empty metadata.
    pub fn markdown(source: impl Into<String>) -> Self {
        Cell::Markdown {
            source: source.into(),
            metadata: Map::new(),
        }
    }

    /// Build a code cell with empty metadata.
    pub fn code(source: impl Into<String>) -> Self {
        Cell::Code {
            source: source.into(),
            metadata: Map::new(),
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Cell::Markdown { source, .. }
            | Cell::Code { source, .. }
            | Cell::Raw { source, .. } => source,
        }
    }
}

/// An ordered sequence of cells plus notebook-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Notebook {
    pub fn new(cells: Vec<Cell>) -> Self {
        Notebook {
            cells,
            metadata: Map::new(),
        }
    }
}

/// Pipeline-supplied context passed alongside the notebook.
///
/// The `metadata` sub-mapping carries the output `path` and notebook `name`
/// that [`AddBinderComponent`](crate::AddBinderComponent) reads. Any other
/// entries the pipeline threads through are kept in `extra` and returned
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
