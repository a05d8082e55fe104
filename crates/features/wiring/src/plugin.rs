//! Stage types known to the registry.

use crate::error::WiringError;
use std::borrow::Cow;
use std::str::FromStr;
use strum_macros::{Display, EnumString, IntoStaticStr};
use tfp_domain::{InputTag, InvalidInputTag, ModuleKind};
use tfp_kernel::pset::{ParameterSet, PsetError, Schema};
use tfp_presets::analyzer::AnalyzerParams;
use tfp_presets::associator::AssociatorParams;
use tfp_presets::demonstrator::DemonstratorParams;
use tfp_presets::producer::ProducerParams;
use tfp_presets::{analyzer, associator, demonstrator, producer};

/// Branches a stage reads and writes, derived from its parameter set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ports {
    pub consumes: Vec<InputTag>,
    pub produces: Vec<String>,
}

/// Plugin types, named as in process descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
pub enum Plugin {
    /// Geometric processor.
    #[strum(serialize = "trackerTFP::ProducerGP")]
    ProducerGP,
    /// Linear fitter.
    #[strum(serialize = "trackerTFP::ProducerLF")]
    ProducerLF,
    #[strum(serialize = "trackerTFP::AnalyzerGP")]
    AnalyzerGP,
    #[strum(serialize = "trackerTFP::AnalyzerLF")]
    AnalyzerLF,
    /// Compares emulator output with the firmware simulation.
    #[strum(serialize = "trackerTFP::Demonstrator")]
    Demonstrator,
    #[strum(serialize = "tt::StubAssociator")]
    StubAssociator,
}

impl Plugin {
    pub const ALL: [Self; 6] = [
        Self::ProducerGP,
        Self::ProducerLF,
        Self::AnalyzerGP,
        Self::AnalyzerLF,
        Self::Demonstrator,
        Self::StubAssociator,
    ];

    /// Looks up a plugin by its type name.
    ///
    /// # Errors
    /// Returns [`WiringError::UnknownPlugin`] for names not in [`Plugin::ALL`].
    pub fn parse(name: &str) -> Result<Self, WiringError> {
        Self::from_str(name.trim())
            .map_err(|_| WiringError::UnknownPlugin { name: Cow::Owned(name.to_owned()), context: None })
    }

    #[must_use]
    pub const fn kind(self) -> ModuleKind {
        match self {
            Self::ProducerGP | Self::ProducerLF | Self::StubAssociator => ModuleKind::Producer,
            Self::AnalyzerGP | Self::AnalyzerLF | Self::Demonstrator => ModuleKind::Analyzer,
        }
    }

    #[must_use]
    pub fn type_name(self) -> &'static str {
        self.into()
    }

    /// Schema of the plugin: the union of the preset parameter sets it is configured with.
    ///
    /// # Errors
    /// Propagates preset declaration errors and key clashes between composed presets.
    pub fn schema(self) -> Result<Schema, WiringError> {
        let name = self.type_name();
        let schema = match self {
            Self::ProducerGP | Self::ProducerLF => producer::schema()?,
            Self::AnalyzerGP | Self::AnalyzerLF => {
                let parts = [analyzer::schema()?, producer::schema()?];
                Schema::compose(name, &parts)?
            },
            Self::Demonstrator => demonstrator::schema()?,
            Self::StubAssociator => associator::schema()?,
        };
        Ok(schema)
    }

    /// Computes consumed and produced branches from a parameter set built with [`Plugin::schema`].
    ///
    /// # Errors
    /// Returns [`WiringError::Preset`] if the set does not fit the plugin, or
    /// [`WiringError::Pset`] if a label and branch do not form a valid input tag.
    pub fn ports(self, pset: &ParameterSet) -> Result<Ports, WiringError> {
        let ports = match self {
            Self::ProducerGP => {
                let p = ProducerParams::from_pset(pset)?;
                Ports {
                    consumes: vec![tag(&p.label_dtc, &p.branch_accepted)?],
                    produces: vec![p.branch_accepted, p.branch_lost],
                }
            },
            Self::ProducerLF => {
                let p = ProducerParams::from_pset(pset)?;
                Ports {
                    consumes: vec![tag(&p.label_gp, &p.branch_accepted)?],
                    produces: vec![p.branch_accepted, p.branch_lost, p.branch_tracks],
                }
            },
            Self::AnalyzerGP | Self::AnalyzerLF => {
                let p = ProducerParams::from_pset(pset)?;
                let truth = AnalyzerParams::from_pset(pset)?;
                let label = if self == Self::AnalyzerGP { &p.label_gp } else { &p.label_lf };
                let mut consumes = vec![tag(label, &p.branch_accepted)?, tag(label, &p.branch_lost)?];
                if truth.use_mc_truth {
                    consumes.push(truth.selection.clone());
                    if self == Self::AnalyzerLF {
                        consumes.push(truth.reconstructable.clone());
                    }
                }
                Ports { consumes, produces: Vec::new() }
            },
            Self::Demonstrator => {
                let p = DemonstratorParams::from_pset(pset)?;
                Ports {
                    consumes: vec![
                        tag(&p.label_input, &p.branch_stubs)?,
                        tag(&p.label_output, &p.branch_stubs)?,
                        tag(&p.label_output, &p.branch_tracks)?,
                    ],
                    produces: Vec::new(),
                }
            },
            Self::StubAssociator => {
                let p = AssociatorParams::from_pset(pset)?;
                Ports {
                    consumes: vec![p.stubs, p.cluster_association],
                    produces: vec![p.branch_reconstructable, p.branch_selection],
                }
            },
        };
        Ok(ports)
    }
}

fn tag(label: &str, branch: &str) -> Result<InputTag, WiringError> {
    InputTag::new(label, branch).map_err(|source: InvalidInputTag| WiringError::Pset {
        source: PsetError::from(source),
        context: Some(Cow::Owned(format!("branch reference {label}:{branch}"))),
    })
}
