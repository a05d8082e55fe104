//! Shared parameters of the geometric processor and linear fitter producers.

use crate::error::PresetError;
use tfp_domain::constants::{branches, keys, labels};
use tfp_kernel::pset::{ParameterSet, Schema};

pub const NAME: &str = "producer";

/// Declares the producer parameter set.
///
/// # Errors
/// Only fails if the declaration itself repeats a key.
pub fn schema() -> Result<Schema, PresetError> {
    Ok(Schema::builder(NAME)
        .string(keys::LABEL_DTC, labels::DTC)
        .string(keys::LABEL_GP, labels::GP)
        .string(keys::LABEL_LF, labels::LF)
        .string(keys::BRANCH_ACCEPTED, branches::STUB_ACCEPTED)
        .doc("branch for product with passed stubs")
        .string(keys::BRANCH_LOST, branches::STUB_LOST)
        .doc("branch for product with lost stubs")
        .string(keys::BRANCH_TRACKS, branches::TRACK_ACCEPTED)
        .doc("branch for product with passed track information")
        .bool(keys::CHECK_HISTORY, true)
        .doc("checks if input sample production is configured as current process")
        .bool(keys::ENABLE_TRUNCATION, true)
        .doc("enable emulation of truncation, lost stubs are filled in BranchLost")
        .build()?)
}

/// Typed view of a producer parameter set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerParams {
    pub label_dtc: String,
    pub label_gp: String,
    pub label_lf: String,
    pub branch_accepted: String,
    pub branch_lost: String,
    pub branch_tracks: String,
    /// Inputs must come from the current process; enforced by process validation.
    pub check_history: bool,
    pub enable_truncation: bool,
}

impl ProducerParams {
    /// # Errors
    /// Returns [`PresetError::Pset`] if `pset` lacks a producer key or holds the wrong kind.
    pub fn from_pset(pset: &ParameterSet) -> Result<Self, PresetError> {
        Ok(Self {
            label_dtc: pset.get_string(keys::LABEL_DTC)?.to_owned(),
            label_gp: pset.get_string(keys::LABEL_GP)?.to_owned(),
            label_lf: pset.get_string(keys::LABEL_LF)?.to_owned(),
            branch_accepted: pset.get_string(keys::BRANCH_ACCEPTED)?.to_owned(),
            branch_lost: pset.get_string(keys::BRANCH_LOST)?.to_owned(),
            branch_tracks: pset.get_string(keys::BRANCH_TRACKS)?.to_owned(),
            check_history: pset.get_bool(keys::CHECK_HISTORY)?,
            enable_truncation: pset.get_bool(keys::ENABLE_TRUNCATION)?,
        })
    }
}
