//! Parameters of the stub associator, which links stubs to the tracking particles
//! that produced them.

use crate::error::PresetError;
use tfp_domain::InputTag;
use tfp_domain::constants::{branches, keys, labels};
use tfp_kernel::pset::{ParameterSet, PsetError, Schema};

pub const NAME: &str = "associator";

/// Declares the stub associator parameter set.
///
/// # Errors
/// Fails if the declaration repeats a key or a default tag is malformed.
pub fn schema() -> Result<Schema, PresetError> {
    let stubs = InputTag::new(labels::STUBS_FROM_DIGIS, branches::STUB_ACCEPTED).map_err(PsetError::from)?;
    let clusters =
        InputTag::new(labels::CLUSTER_ASSOCIATOR, branches::CLUSTER_ACCEPTED).map_err(PsetError::from)?;

    Ok(Schema::builder(NAME)
        .input_tag(keys::INPUT_TAG_STUBS, stubs)
        .input_tag(keys::INPUT_TAG_CLUSTER_ASSOCIATION, clusters)
        .string(keys::BRANCH_RECONSTRUCTABLE, branches::RECONSTRUCTABLE)
        .doc("stubs of reconstructable tracking particles")
        .string(keys::BRANCH_SELECTION, branches::USE_FOR_ALG_EFF)
        .doc("stubs of tracking particles used for the algorithmic efficiency")
        .build()?)
}

/// Typed view of a stub associator parameter set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociatorParams {
    pub stubs: InputTag,
    pub cluster_association: InputTag,
    pub branch_reconstructable: String,
    pub branch_selection: String,
}

impl AssociatorParams {
    /// # Errors
    /// Returns [`PresetError::Pset`] if a key is missing or has the wrong kind.
    pub fn from_pset(pset: &ParameterSet) -> Result<Self, PresetError> {
        Ok(Self {
            stubs: pset.get_input_tag(keys::INPUT_TAG_STUBS)?.clone(),
            cluster_association: pset.get_input_tag(keys::INPUT_TAG_CLUSTER_ASSOCIATION)?.clone(),
            branch_reconstructable: pset.get_string(keys::BRANCH_RECONSTRUCTABLE)?.to_owned(),
            branch_selection: pset.get_string(keys::BRANCH_SELECTION)?.to_owned(),
        })
    }
}
