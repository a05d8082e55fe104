//! Parameters of the hardware demonstrator.
//!
//! The demonstrator writes emulator input and predicted output next to the firmware
//! simulation in `DirIPBB`, runs the simulation for `RunTime`, and diffs the result.

use crate::error::PresetError;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tfp_domain::constants::{branches, keys, labels};
use tfp_kernel::pset::{ParameterSet, Schema};

pub const NAME: &str = "demonstrator";

/// Default simulation run time in seconds.
pub const DEFAULT_RUN_TIME: f64 = 2.0;

const INPUT_FILE: &str = "in.txt";
const OUTPUT_FILE: &str = "out.txt";
const PREDICTION_FILE: &str = "pre.txt";
const DIFF_FILE: &str = "diff.txt";

/// Declares the demonstrator parameter set.
///
/// `DirIPBB` has no usable default; it must be supplied per installation.
///
/// # Errors
/// Only fails if the declaration itself repeats a key.
pub fn schema() -> Result<Schema, PresetError> {
    Ok(Schema::builder(NAME)
        .string(keys::LABEL_INPUT, labels::GP)
        .string(keys::LABEL_OUTPUT, labels::LF)
        .string(keys::BRANCH_STUBS, branches::STUB_ACCEPTED)
        .string(keys::BRANCH_TRACKS, branches::TRACK_ACCEPTED)
        .string(keys::DIR_IPBB, "")
        .doc("firmware project directory holding the simulation")
        .double(keys::RUN_TIME, DEFAULT_RUN_TIME)
        .doc("simulation run time in seconds")
        .build()?)
}

/// Files exchanged with the firmware simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeFiles {
    /// Emulator input frames fed to the firmware.
    pub input: PathBuf,
    /// Frames written by the firmware.
    pub output: PathBuf,
    /// Frames predicted by the emulator.
    pub prediction: PathBuf,
    /// Difference between prediction and firmware output.
    pub diff: PathBuf,
}

impl ExchangeFiles {
    fn in_dir(dir: &Path) -> Self {
        Self {
            input: dir.join(INPUT_FILE),
            output: dir.join(OUTPUT_FILE),
            prediction: dir.join(PREDICTION_FILE),
            diff: dir.join(DIFF_FILE),
        }
    }
}

/// Typed view of a demonstrator parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct DemonstratorParams {
    pub label_input: String,
    pub label_output: String,
    pub branch_stubs: String,
    pub branch_tracks: String,
    pub dir_ipbb: PathBuf,
    pub run_time: Duration,
}

impl DemonstratorParams {
    /// # Errors
    /// * [`PresetError::Pset`] if a key is missing or has the wrong kind.
    /// * [`PresetError::InvalidValue`] if `RunTime` is negative, not finite, or too large
    ///   for a [`Duration`].
    pub fn from_pset(pset: &ParameterSet) -> Result<Self, PresetError> {
        let seconds = pset.get_float(keys::RUN_TIME)?;
        let run_time = Duration::try_from_secs_f64(seconds).map_err(|e| PresetError::InvalidValue {
            key: Cow::Borrowed(keys::RUN_TIME),
            message: Cow::Owned(format!("{seconds} is not a usable number of seconds: {e}")),
            context: None,
        })?;

        Ok(Self {
            label_input: pset.get_string(keys::LABEL_INPUT)?.to_owned(),
            label_output: pset.get_string(keys::LABEL_OUTPUT)?.to_owned(),
            branch_stubs: pset.get_string(keys::BRANCH_STUBS)?.to_owned(),
            branch_tracks: pset.get_string(keys::BRANCH_TRACKS)?.to_owned(),
            dir_ipbb: PathBuf::from(pset.get_string(keys::DIR_IPBB)?),
            run_time,
        })
    }

    #[must_use]
    pub const fn run_duration(&self) -> Duration {
        self.run_time
    }

    /// Paths of the simulation exchange files inside `DirIPBB`.
    ///
    /// # Errors
    /// Returns [`PresetError::InvalidValue`] if `DirIPBB` was left empty.
    pub fn exchange_files(&self) -> Result<ExchangeFiles, PresetError> {
        if self.dir_ipbb.as_os_str().is_empty() {
            return Err(PresetError::InvalidValue {
                key: Cow::Borrowed(keys::DIR_IPBB),
                message: Cow::Borrowed("directory is not configured"),
                context: None,
            });
        }
        Ok(ExchangeFiles::in_dir(&self.dir_ipbb))
    }
}
