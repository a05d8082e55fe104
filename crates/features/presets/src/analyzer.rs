//! Truth-matching inputs of the analyzers.
//!
//! Analyzers are configured with this set together with [`producer`](crate::producer).

use crate::error::PresetError;
use tfp_domain::InputTag;
use tfp_domain::constants::{branches, keys, labels};
use tfp_kernel::pset::{ParameterSet, PsetError, Schema};

pub const NAME: &str = "analyzer";

/// Declares the analyzer parameter set.
///
/// # Errors
/// Fails if the declaration repeats a key or a default tag is malformed.
pub fn schema() -> Result<Schema, PresetError> {
    let selection = InputTag::new(labels::STUB_ASSOCIATOR, branches::USE_FOR_ALG_EFF)
        .map_err(PsetError::from)?;
    let reconstructable = InputTag::new(labels::STUB_ASSOCIATOR, branches::RECONSTRUCTABLE)
        .map_err(PsetError::from)?;

    Ok(Schema::builder(NAME)
        .bool(keys::USE_MC_TRUTH, true)
        .doc("enables analysis of tracking particles")
        .input_tag(keys::INPUT_TAG_SELECTION, selection)
        .input_tag(keys::INPUT_TAG_RECONSTRUCTABLE, reconstructable)
        .build()?)
}

/// Typed view of an analyzer parameter set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerParams {
    pub use_mc_truth: bool,
    pub selection: InputTag,
    pub reconstructable: InputTag,
}

impl AnalyzerParams {
    /// # Errors
    /// Returns [`PresetError::Pset`] if a key is missing or has the wrong kind.
    pub fn from_pset(pset: &ParameterSet) -> Result<Self, PresetError> {
        Ok(Self {
            use_mc_truth: pset.get_bool(keys::USE_MC_TRUTH)?,
            selection: pset.get_input_tag(keys::INPUT_TAG_SELECTION)?.clone(),
            reconstructable: pset.get_input_tag(keys::INPUT_TAG_RECONSTRUCTABLE)?.clone(),
        })
    }

    /// Truth-association inputs actually read, empty when truth is disabled.
    #[must_use]
    pub fn truth_inputs(&self) -> Vec<&InputTag> {
        if self.use_mc_truth { vec![&self.selection, &self.reconstructable] } else { Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfp_kernel::pset::Overrides;

    #[test]
    fn tag_overrides_accept_text() {
        let pset = schema()
            .unwrap()
            .instantiate(&Overrides::new().with(keys::INPUT_TAG_SELECTION, "MyAssociator:Selected"))
            .unwrap();
        let params = AnalyzerParams::from_pset(&pset).unwrap();
        assert_eq!(params.selection.label(), "MyAssociator");
        assert_eq!(params.reconstructable.to_string(), "StubAssociator:Reconstructable");
    }

    #[test]
    fn disabling_truth_drops_inputs() {
        let pset = schema().unwrap().instantiate(&Overrides::new().with(keys::USE_MC_TRUTH, false)).unwrap();
        assert!(AnalyzerParams::from_pset(&pset).unwrap().truth_inputs().is_empty());
    }
}
