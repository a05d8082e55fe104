use anyhow::{Context, Result};
use std::fmt::Write;
use tfp::kernel::pset::{FieldSpec, Overrides};
use tfp::presets::PresetCatalog;
use tracing::debug;

/// One line per preset: its name followed by its keys in declaration order.
pub fn list_presets(catalog: &PresetCatalog) -> Result<String> {
    let mut out = String::new();
    for (name, schema) in catalog.iter() {
        let keys: Vec<&str> = schema.fields().iter().map(FieldSpec::name).collect();
        writeln!(out, "{name}: {}", keys.join(", "))?;
    }
    Ok(out)
}

/// Instantiates `preset` with `KEY=VALUE` assignments and renders it as TOML or JSON.
pub fn show_preset(catalog: &PresetCatalog, preset: &str, assignments: &[String], json: bool) -> Result<String> {
    let schema = catalog.get(preset)?;
    let overrides = Overrides::from_assignments(schema, assignments)
        .with_context(|| format!("Invalid override for preset '{preset}'"))?;
    let pset = catalog.instantiate(preset, &overrides)?;
    debug!(preset, changed = ?pset.changed().collect::<Vec<_>>(), "Preset instantiated");

    let rendered = if json { serde_json::to_string_pretty(&pset)? + "\n" } else { toml::to_string(&pset)? };
    Ok(rendered)
}
