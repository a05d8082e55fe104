use anyhow::{Context, Result};
use std::fmt::Write;
use tfp::wiring::{Component, LabelResolver, Process};
use tracing::info;

/// Validates `process` and lists the resolved connections.
pub fn check(process: &Process) -> Result<String> {
    let connections = process.validate().with_context(|| format!("Process '{}' is not wired", process.name()))?;
    info!(process = process.name(), connections = connections.len(), "Process validated");

    let mut out = String::new();
    for connection in &connections {
        writeln!(out, "{connection}")?;
    }
    writeln!(
        out,
        "{}: {} components, {} connections OK",
        process.name(),
        process.registry().len(),
        connections.len()
    )?;
    Ok(out)
}

/// Describes the component registered under `label`.
pub fn resolve(process: &Process, label: &str) -> Result<String> {
    let component = process.resolve(label)?;
    describe(component.as_ref())
}

fn describe(component: &dyn Component) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "label    = {}", component.label())?;
    writeln!(out, "kind     = {}", component.kind())?;
    if let Some(module) = component.as_any().downcast_ref::<tfp::wiring::Module>() {
        writeln!(out, "plugin   = {}", module.plugin())?;
    }
    let consumes: Vec<String> = component.consumes().iter().map(ToString::to_string).collect();
    writeln!(out, "consumes = [{}]", consumes.join(", "))?;
    writeln!(out, "produces = [{}]", component.produces().join(", "))?;

    if let Some(params) = component.params() {
        writeln!(out, "\n[params]")?;
        out.push_str(&toml::to_string(params)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfp::wiring::ProcessConfig;

    fn process() -> Process {
        let config: ProcessConfig = toml::from_str(
            r#"
            [[sources]]
            label = "TrackerDTCProducer"
            branches = ["StubAccepted"]

            [[modules]]
            label = "TrackerTFPProducerGP"
            plugin = "trackerTFP::ProducerGP"
            "#,
        )
        .unwrap();
        Process::build(&config).unwrap()
    }

    #[test]
    fn check_lists_connections() {
        let out = check(&process()).unwrap();
        assert_eq!(
            out,
            "TrackerTFPProducerGP <- TrackerDTCProducer:StubAccepted (Source)\nTFP: 2 components, 1 connections OK\n"
        );
    }

    #[test]
    fn resolve_describes_modules_and_sources() {
        let process = process();
        let out = resolve(&process, "TrackerTFPProducerGP").unwrap();
        assert!(out.contains("plugin   = trackerTFP::ProducerGP\n"));
        assert!(out.contains("produces = [StubAccepted, StubLost]\n"));
        assert!(out.contains("CheckHistory = true"));

        let out = resolve(&process, "TrackerDTCProducer").unwrap();
        assert!(out.contains("kind     = Source\n"));
        assert!(!out.contains("[params]"));

        assert!(resolve(&process, "TrackerTFPProducerLF").is_err());
    }
}
