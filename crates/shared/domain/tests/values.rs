use tfp_domain::constants::{branches, keys, labels, plugins};
use tfp_domain::{InputTag, ModuleKind, ParamKind, ParamValue};

#[test]
fn well_known_names_match_process_descriptions() {
    assert_eq!(keys::RUN_TIME, "RunTime");
    assert_eq!(keys::DIR_IPBB, "DirIPBB");
    assert_eq!(labels::GP, "TrackerTFPProducerGP");
    assert_eq!(branches::STUB_ACCEPTED, "StubAccepted");
    assert_eq!(plugins::STUB_ASSOCIATOR, "tt::StubAssociator");
}

#[test]
fn values_deserialize_untagged() {
    let raw = serde_json::json!({
        "flag": true,
        "time": 5,
        "label": "TrackerTFPProducerGP",
        "tag": { "label": "StubAssociator", "instance": "UseForAlgEff" }
    });
    let values: std::collections::BTreeMap<String, ParamValue> =
        serde_json::from_value(raw).expect("values deserialize");

    assert_eq!(values["flag"], ParamValue::Bool(true));
    assert_eq!(values["time"], ParamValue::Double(5.0));
    assert_eq!(values["label"].as_str(), Some("TrackerTFPProducerGP"));
    let tag = values["tag"].as_input_tag().expect("table is an input tag");
    assert_eq!(tag, &InputTag::new("StubAssociator", "UseForAlgEff").unwrap());
}

#[test]
fn toml_values_deserialize() {
    #[derive(serde::Deserialize)]
    struct Params {
        #[serde(rename = "RunTime")]
        run_time: ParamValue,
        #[serde(rename = "CheckHistory")]
        check_history: ParamValue,
    }

    let params: Params = toml::from_str("RunTime = 2.5\nCheckHistory = false\n").unwrap();
    assert_eq!(params.run_time.as_float(), Some(2.5));
    assert_eq!(params.check_history.as_bool(), Some(false));
}

#[test]
fn kinds_round_trip_through_text() {
    assert_eq!(ParamKind::Double.to_string(), "double");
    assert_eq!("float".parse::<ParamKind>().unwrap(), ParamKind::Double);
    assert_eq!("BOOL".parse::<ParamKind>().unwrap(), ParamKind::Bool);
    assert_eq!(ParamValue::from("x").kind(), ParamKind::String);
    assert_eq!(ModuleKind::Producer.to_string(), "EDProducer");
    assert!(!ModuleKind::Analyzer.produces());
}
