//! Well-known names of the track-trigger processing chain.

/// Parameter keys.
pub mod keys {
    pub const LABEL_INPUT: &str = "LabelInput";
    pub const LABEL_OUTPUT: &str = "LabelOutput";
    pub const LABEL_DTC: &str = "LabelDTC";
    pub const LABEL_GP: &str = "LabelGP";
    pub const LABEL_LF: &str = "LabelLF";
    pub const LABEL_MHT: &str = "LabelMHT";

    pub const BRANCH_STUBS: &str = "BranchStubs";
    pub const BRANCH_ACCEPTED: &str = "BranchAccepted";
    pub const BRANCH_LOST: &str = "BranchLost";
    pub const BRANCH_TRACKS: &str = "BranchTracks";
    pub const BRANCH_RECONSTRUCTABLE: &str = "BranchReconstructable";
    pub const BRANCH_SELECTION: &str = "BranchSelection";

    pub const DIR_IPBB: &str = "DirIPBB";
    pub const RUN_TIME: &str = "RunTime";

    pub const CHECK_HISTORY: &str = "CheckHistory";
    pub const ENABLE_TRUNCATION: &str = "EnableTruncation";
    pub const USE_MC_TRUTH: &str = "UseMCTruth";

    pub const INPUT_TAG_SELECTION: &str = "InputTagSelection";
    pub const INPUT_TAG_RECONSTRUCTABLE: &str = "InputTagReconstructable";
    pub const INPUT_TAG_STUBS: &str = "InputTagTTStubDetSetVec";
    pub const INPUT_TAG_CLUSTER_ASSOCIATION: &str = "InputTagTTClusterAssMap";
}

/// Default component labels.
pub mod labels {
    pub const DTC: &str = "TrackerDTCProducer";
    pub const GP: &str = "TrackerTFPProducerGP";
    pub const LF: &str = "TrackerTFPProducerLF";
    pub const STUB_ASSOCIATOR: &str = "StubAssociator";
    pub const STUBS_FROM_DIGIS: &str = "TTStubsFromPhase2TrackerDigis";
    pub const CLUSTER_ASSOCIATOR: &str = "TTClusterAssociatorFromPixelDigis";
}

/// Default branch (product instance) names.
pub mod branches {
    pub const STUB_ACCEPTED: &str = "StubAccepted";
    pub const STUB_LOST: &str = "StubLost";
    pub const TRACK_ACCEPTED: &str = "TrackAccepted";
    pub const CLUSTER_ACCEPTED: &str = "ClusterAccepted";
    pub const RECONSTRUCTABLE: &str = "Reconstructable";
    pub const USE_FOR_ALG_EFF: &str = "UseForAlgEff";
}

/// Plugin type names as written in process descriptions.
pub mod plugins {
    pub const PRODUCER_GP: &str = "trackerTFP::ProducerGP";
    pub const PRODUCER_LF: &str = "trackerTFP::ProducerLF";
    pub const ANALYZER_GP: &str = "trackerTFP::AnalyzerGP";
    pub const ANALYZER_LF: &str = "trackerTFP::AnalyzerLF";
    pub const DEMONSTRATOR: &str = "trackerTFP::Demonstrator";
    pub const STUB_ASSOCIATOR: &str = "tt::StubAssociator";
}
