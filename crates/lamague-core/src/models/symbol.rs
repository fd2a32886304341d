//! Symbol taxonomy tags.
//!
//! Passive, serializable labels with an optional vector representation.
//! Nothing in the engines interprets them.

use serde::{Deserialize, Serialize};

use crate::vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolClass {
    /// Stable anchors.
    Invariant,
    /// Transformations.
    Dynamic,
    /// State variables.
    Field,
    /// Compression operators.
    Meta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub symbol: String,
    pub class: SymbolClass,
    pub meaning: String,
    #[serde(default)]
    pub vector_rep: Vector,
}

impl Symbol {
    /// Symbol with an empty vector representation.
    pub fn new(symbol: impl Into<String>, class: SymbolClass, meaning: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            class,
            meaning: meaning.into(),
            vector_rep: Vector::new(),
        }
    }

    /// Attach a vector representation.
    pub fn with_vector(mut self, vector_rep: Vector) -> Self {
        self.vector_rep = vector_rep;
        self
    }
}
