use std::io::Write;
use tfp_domain::ModuleKind;
use tfp_domain::constants::{labels, plugins};
use tfp_kernel::pset::PsetError;
use tfp_wiring::{LabelResolver, Module, Plugin, Process, ProcessConfig, WiringError};

const CHAIN: &str = r#"
name = "TFP"

[[sources]]
label = "TrackerDTCProducer"
branches = ["StubAccepted", "StubLost"]

[[modules]]
label = "TrackerTFPProducerGP"
plugin = "trackerTFP::ProducerGP"

[[modules]]
label = "TrackerTFPProducerLF"
plugin = "trackerTFP::ProducerLF"
params = { EnableTruncation = false }

[[modules]]
label = "TrackerTFPDemonstrator"
plugin = "trackerTFP::Demonstrator"
params = { RunTime = 4.5 }
"#;

fn chain() -> ProcessConfig {
    toml::from_str(CHAIN).unwrap()
}

#[test]
fn standard_chain_validates() {
    let process = Process::build(&chain()).unwrap();
    assert_eq!(process.name(), "TFP");
    assert_eq!(process.registry().len(), 4);

    let connections = process.validate().unwrap();
    let edges: Vec<String> = connections.iter().map(ToString::to_string).collect();
    assert_eq!(
        edges,
        [
            "TrackerTFPProducerGP <- TrackerDTCProducer:StubAccepted (Source)",
            "TrackerTFPProducerLF <- TrackerTFPProducerGP:StubAccepted (EDProducer)",
            "TrackerTFPDemonstrator <- TrackerTFPProducerGP:StubAccepted (EDProducer)",
            "TrackerTFPDemonstrator <- TrackerTFPProducerLF:StubAccepted (EDProducer)",
            "TrackerTFPDemonstrator <- TrackerTFPProducerLF:TrackAccepted (EDProducer)",
        ]
    );
}

#[test]
fn module_overrides_reach_the_parameter_set() {
    let process = Process::build(&chain()).unwrap();
    let lf = process.registry().resolve_as::<Module>(labels::LF).unwrap();

    assert_eq!(lf.plugin(), Plugin::ProducerLF);
    assert!(!lf.parameter_set().get_bool("EnableTruncation").unwrap());
    assert!(lf.parameter_set().get_bool("CheckHistory").unwrap());
    assert_eq!(lf.parameter_set().changed().collect::<Vec<_>>(), ["EnableTruncation"]);
}

#[test]
fn missing_producer_is_reported_with_its_consumer() {
    let mut config = chain();
    config.modules.retain(|m| m.label != labels::LF);

    let process = Process::build(&config).unwrap();
    let err = process.validate().unwrap_err();

    assert!(matches!(err, WiringError::LabelNotFound { ref label, .. } if label == labels::LF));
    assert_eq!(err.to_string(), "Label not found (consumed by TrackerTFPDemonstrator): TrackerTFPProducerLF");
}

#[test]
fn renamed_branch_is_not_produced() {
    let mut config = chain();
    let lf = config.modules.iter_mut().find(|m| m.label == labels::LF).unwrap();
    lf.params.set("BranchTracks", "TrackKept");

    let err = Process::build(&config).unwrap().validate().unwrap_err();
    assert!(matches!(err, WiringError::BranchNotProduced { ref tag, .. } if tag == "TrackerTFPProducerLF:TrackAccepted"));
}

#[test]
fn analyzers_are_not_producers() {
    let mut config = chain();
    let demo = config.modules.iter_mut().find(|m| m.plugin == plugins::DEMONSTRATOR).unwrap();
    demo.params.set("LabelInput", "TrackerTFPDemonstrator");

    let err = Process::build(&config).unwrap().validate().unwrap_err();
    assert!(matches!(err, WiringError::BranchNotProduced { .. }));
}

#[test]
fn truth_inputs_need_the_stub_associator() {
    let mut config = chain();
    let analyzer: ProcessConfig = toml::from_str(
        r#"
        [[modules]]
        label = "TrackerTFPAnalyzerLF"
        plugin = "trackerTFP::AnalyzerLF"
        "#,
    )
    .unwrap();
    config.modules.extend(analyzer.modules);

    let err = Process::build(&config).unwrap().validate().unwrap_err();
    assert!(matches!(err, WiringError::LabelNotFound { ref label, .. } if label == labels::STUB_ASSOCIATOR));

    let associator: ProcessConfig = toml::from_str(
        r#"
        [[sources]]
        label = "TTStubsFromPhase2TrackerDigis"
        branches = ["StubAccepted"]

        [[sources]]
        label = "TTClusterAssociatorFromPixelDigis"
        branches = ["ClusterAccepted"]

        [[modules]]
        label = "StubAssociator"
        plugin = "tt::StubAssociator"
        "#,
    )
    .unwrap();
    config.sources.extend(associator.sources);
    config.modules.extend(associator.modules);

    let process = Process::build(&config).unwrap();
    let connections = process.validate().unwrap();
    assert!(connections.iter().any(|c| c.consumer == "TrackerTFPAnalyzerLF"
        && c.tag.to_string() == "StubAssociator:Reconstructable"
        && c.producer_kind == ModuleKind::Producer));
}

#[test]
fn truth_inputs_can_be_disabled() {
    let mut config = chain();
    let analyzer: ProcessConfig = toml::from_str(
        r#"
        [[modules]]
        label = "TrackerTFPAnalyzerGP"
        plugin = "trackerTFP::AnalyzerGP"
        params = { UseMCTruth = false }
        "#,
    )
    .unwrap();
    config.modules.extend(analyzer.modules);

    let connections = Process::build(&config).unwrap().validate().unwrap();
    let consumed: Vec<String> = connections
        .iter()
        .filter(|c| c.consumer == "TrackerTFPAnalyzerGP")
        .map(|c| c.tag.to_string())
        .collect();
    assert_eq!(consumed, ["TrackerTFPProducerGP:StubAccepted", "TrackerTFPProducerGP:StubLost"]);
}

#[test]
fn inputs_from_other_processes_are_skipped() {
    let config: ProcessConfig = toml::from_str(
        r#"
        name = "RERUN"

        [[modules]]
        label = "TrackerTFPProducerGP"
        plugin = "trackerTFP::ProducerGP"
        "#,
    )
    .unwrap();
    let process = Process::build(&config).unwrap();
    assert!(matches!(process.validate(), Err(WiringError::LabelNotFound { .. })));

    let config: ProcessConfig = toml::from_str(
        r#"
        name = "RERUN"

        [[modules]]
        label = "StubAssociator"
        plugin = "tt::StubAssociator"
        params = { InputTagTTStubDetSetVec = "TTStubsFromPhase2TrackerDigis:StubAccepted:HLT", InputTagTTClusterAssMap = "TTClusterAssociatorFromPixelDigis:ClusterAccepted:HLT" }
        "#,
    )
    .unwrap();
    let connections = Process::build(&config).unwrap().validate().unwrap();
    assert!(connections.is_empty());
}

#[test]
fn duplicate_labels_fail_the_build() {
    let mut config = chain();
    let copy = config.modules[0].clone();
    config.modules.push(copy);

    let err = Process::build(&config).unwrap_err();
    assert!(matches!(err, WiringError::DuplicateLabel { ref label, .. } if label == labels::GP));
}

#[test]
fn unknown_plugins_and_bad_overrides_name_the_module() {
    let mut config = chain();
    config.modules[0].plugin = "trackerTFP::ProducerKF".to_owned();
    let err = Process::build(&config).unwrap_err();
    assert_eq!(err.to_string(), "Unknown plugin type (module 'TrackerTFPProducerGP'): trackerTFP::ProducerKF");

    let mut config = chain();
    config.modules[0].params.set("RunTimes", 3.0);
    let err = Process::build(&config).unwrap_err();
    assert!(matches!(err, WiringError::Pset { source: PsetError::UnknownKey { .. }, .. }));
    assert!(err.to_string().starts_with("Parameter set error (module 'TrackerTFPProducerGP')"));
}

#[test]
fn plugin_names_round_trip() {
    let names = [
        plugins::PRODUCER_GP,
        plugins::PRODUCER_LF,
        plugins::ANALYZER_GP,
        plugins::ANALYZER_LF,
        plugins::DEMONSTRATOR,
        plugins::STUB_ASSOCIATOR,
    ];
    for (plugin, name) in Plugin::ALL.iter().zip(names) {
        assert_eq!(plugin.type_name(), name);
        assert_eq!(Plugin::parse(name).unwrap(), *plugin);
    }
}

#[test]
fn process_loads_from_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(CHAIN.as_bytes()).unwrap();

    let process = Process::load(file.path()).unwrap();
    assert_eq!(process.validate().unwrap().len(), 5);

    let err = Process::load(file.path().with_extension("missing.toml")).unwrap_err();
    assert!(matches!(err, WiringError::Config { .. }));
}

#[test]
fn modules_cannot_consume_themselves() {
    let mut config = chain();
    let lf = config.modules.iter_mut().find(|m| m.label == labels::LF).unwrap();
    lf.params.set("LabelGP", labels::LF);

    let err = Process::build(&config).unwrap().validate().unwrap_err();
    assert!(matches!(err, WiringError::SelfReference { ref label, .. } if label == labels::LF));
    assert_eq!(err.to_string(), "Component consumes itself (consumed by TrackerTFPProducerLF): TrackerTFPProducerLF");
}

#[test]
fn check_history_requires_inputs_from_this_process() {
    let analyzer = |check_history: bool| -> ProcessConfig {
        toml::from_str(&format!(
            r#"
            name = "RERUN"

            [[sources]]
            label = "TrackerTFPProducerLF"
            branches = ["StubAccepted", "StubLost"]

            [[modules]]
            label = "TrackerTFPAnalyzerLF"
            plugin = "trackerTFP::AnalyzerLF"
            params = {{ CheckHistory = {check_history}, InputTagSelection = "StubAssociator:UseForAlgEff:HLT", InputTagReconstructable = "StubAssociator:Reconstructable:HLT" }}
            "#
        ))
        .unwrap()
    };

    let err = Process::build(&analyzer(true)).unwrap().validate().unwrap_err();
    assert!(matches!(err, WiringError::ForeignProcess { ref process, .. } if process == "RERUN"));
    assert_eq!(
        err.to_string(),
        "Input not produced by process 'RERUN' (consumed by TrackerTFPAnalyzerLF): StubAssociator:UseForAlgEff:HLT"
    );

    let connections = Process::build(&analyzer(false)).unwrap().validate().unwrap();
    assert_eq!(connections.len(), 2);
}
