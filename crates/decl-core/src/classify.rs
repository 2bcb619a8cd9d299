//! Symbol categorisation from the declared prototype text.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::report::SymbolDescriptor;

/// Category assigned to one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolCategory {
    Function,
    Class,
    Constant,
    Variable,
    Other,
}

impl SymbolCategory {
    /// Case-insensitive substring rules, first match wins:
    /// `func`/`function`, then `class`/`struct`, then `const`, then `var`/`let`.
    #[must_use]
    pub fn of_prototype(prototype: &str) -> Self {
        let prototype = prototype.to_lowercase();
        let has = |needle: &str| prototype.contains(needle);

        if has("func") || has("function") {
            Self::Function
        } else if has("class") || has("struct") {
            Self::Class
        } else if has("const") {
            Self::Constant
        } else if has("var") || has("let") {
            Self::Variable
        } else {
            Self::Other
        }
    }
}

/// Per-category symbol counts for one file. Always sums to the symbol count.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SymbolTypes {
    pub functions: usize,
    pub classes: usize,
    pub variables: usize,
    pub constants: usize,
    pub other: usize,
}

impl SymbolTypes {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.functions + self.classes + self.variables + self.constants + self.other
    }

    fn bump(&mut self, category: SymbolCategory) {
        let slot = match category {
            SymbolCategory::Function => &mut self.functions,
            SymbolCategory::Class => &mut self.classes,
            SymbolCategory::Constant => &mut self.constants,
            SymbolCategory::Variable => &mut self.variables,
            SymbolCategory::Other => &mut self.other,
        };
        *slot += 1;
    }
}

#[must_use]
pub fn classify(symbols: &[SymbolDescriptor]) -> SymbolTypes {
    symbols.iter().fold(SymbolTypes::default(), |mut counts, symbol| {
        counts.bump(SymbolCategory::of_prototype(&symbol.prototype));
        counts
    })
}
