use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Role of a component in the processing chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// Emits named branches.
    #[strum(to_string = "EDProducer", serialize = "producer")]
    Producer,
    /// Only consumes branches.
    #[strum(to_string = "EDAnalyzer", serialize = "analyzer")]
    Analyzer,
    /// Data made outside the configured process, declared by label and branches.
    #[strum(to_string = "Source", serialize = "source")]
    Source,
}

impl ModuleKind {
    /// Whether components of this kind can be the target of an input tag.
    #[must_use]
    pub const fn produces(self) -> bool {
        !matches!(self, Self::Analyzer)
    }
}
