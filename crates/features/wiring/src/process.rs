//! Process descriptions: which stages run under which labels, and whether their
//! label references line up.

use crate::component::{Component, Module, Source};
use crate::error::WiringError;
use crate::plugin::Plugin;
use crate::registry::ComponentRegistry;
use crate::resolver::LabelResolver;
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tfp_domain::constants::keys;
use tfp_domain::{InputTag, ModuleKind};
use tfp_kernel::config::load_config;
use tfp_kernel::pset::Overrides;
use tracing::{debug, info, warn};

const DEFAULT_PROCESS_NAME: &str = "TFP";

/// Data declared as produced outside the process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    pub label: String,
    #[serde(default)]
    pub branches: Vec<String>,
}

/// One stage: a label, the plugin type it runs, and parameter overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModuleConfig {
    pub label: String,
    pub plugin: String,
    #[serde(default)]
    pub params: Overrides,
}

/// Deserializable process description.
///
/// ```toml
/// name = "TFP"
///
/// [[sources]]
/// label = "TrackerDTCProducer"
/// branches = ["StubAccepted"]
///
/// [[modules]]
/// label = "TrackerTFPProducerLF"
/// plugin = "trackerTFP::ProducerLF"
/// params = { EnableTruncation = false }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcessConfig {
    #[serde(default = "default_process_name")]
    pub name: String,
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
    #[serde(default)]
    pub modules: Vec<ModuleConfig>,
}

fn default_process_name() -> String {
    DEFAULT_PROCESS_NAME.to_owned()
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self { name: default_process_name(), sources: Vec::new(), modules: Vec::new() }
    }
}

/// A resolved consumer → producer edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub consumer: String,
    pub tag: InputTag,
    pub producer_kind: ModuleKind,
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {} ({})", self.consumer, self.tag, self.producer_kind)
    }
}

/// Registered components of one process.
#[derive(Debug, Clone)]
pub struct Process {
    name: String,
    registry: ComponentRegistry,
}

impl Process {
    /// Loads a process file (plus `TFP__` environment overrides) and builds it.
    ///
    /// # Errors
    /// [`WiringError::Config`] if the file cannot be read, otherwise as [`Process::build`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WiringError> {
        let path = path.as_ref();
        let config: ProcessConfig = load_config(Some(path)).map_err(|source| WiringError::Config {
            source,
            context: Some(Cow::Owned(path.display().to_string())),
        })?;
        Self::build(&config)
    }

    /// Instantiates every module's parameter set and registers sources, then modules.
    ///
    /// # Errors
    /// * [`WiringError::UnknownPlugin`] for an unsupported plugin type.
    /// * [`WiringError::Pset`] for overrides the plugin schema rejects.
    /// * [`WiringError::DuplicateLabel`] if two entries share a label.
    pub fn build(config: &ProcessConfig) -> Result<Self, WiringError> {
        let mut builder = ComponentRegistry::builder();

        for source in &config.sources {
            builder.register(Arc::new(Source::new(source.label.clone(), source.branches.clone())))?;
        }

        for module in &config.modules {
            let component = build_module(module).map_err(|err| in_module(err, &module.label))?;
            builder.register(Arc::new(component))?;
        }

        let registry = builder.build();
        info!(
            process = %config.name,
            sources = config.sources.len(),
            modules = config.modules.len(),
            "Process built"
        );
        Ok(Self { name: config.name.clone(), registry })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Checks every consumed input tag against the registry.
    ///
    /// Tags naming another process refer to data read from input and are skipped, unless
    /// the consumer sets `CheckHistory`: it then requires inputs made by this process.
    ///
    /// # Errors
    /// * [`WiringError::LabelNotFound`] if a consumed label is not registered.
    /// * [`WiringError::BranchNotProduced`] if the resolved component does not emit the branch.
    /// * [`WiringError::SelfReference`] if a component consumes its own label.
    /// * [`WiringError::ForeignProcess`] if a component with `CheckHistory` reads from
    ///   another process.
    pub fn validate(&self) -> Result<Vec<Connection>, WiringError> {
        self.validate_with(&self.registry)
    }

    /// Same as [`Process::validate`], resolving labels through `resolver`.
    ///
    /// # Errors
    /// See [`Process::validate`].
    pub fn validate_with(&self, resolver: &impl LabelResolver) -> Result<Vec<Connection>, WiringError> {
        let mut connections = Vec::new();

        for consumer in self.registry.iter() {
            for tag in consumer.consumes() {
                let context = || Cow::Owned(format!("consumed by {}", consumer.label()));

                if !tag.process().is_empty() && tag.process() != self.name {
                    if checks_history(consumer.as_ref()) {
                        return Err(WiringError::ForeignProcess {
                            tag: Cow::Owned(tag.to_string()),
                            process: Cow::Owned(self.name.clone()),
                            context: Some(context()),
                        });
                    }
                    warn!(consumer = consumer.label(), %tag, "Input from another process is not checked");
                    continue;
                }

                if tag.label() == consumer.label() {
                    return Err(WiringError::SelfReference {
                        label: Cow::Owned(tag.label().to_owned()),
                        context: Some(context()),
                    });
                }

                let producer = resolver.resolve(tag.label()).map_err(|err| match err {
                    WiringError::LabelNotFound { label, .. } => {
                        WiringError::LabelNotFound { label, context: Some(context()) }
                    },
                    other => other,
                })?;

                if !producer.kind().produces() || !producer.produces().iter().any(|b| b == tag.instance()) {
                    return Err(WiringError::BranchNotProduced {
                        tag: Cow::Owned(tag.to_string()),
                        context: Some(context()),
                    });
                }

                let connection = Connection {
                    consumer: consumer.label().to_owned(),
                    tag: tag.clone(),
                    producer_kind: producer.kind(),
                };
                debug!(%connection, "Input resolved");
                connections.push(connection);
            }
        }

        Ok(connections)
    }
}

impl LabelResolver for Process {
    fn resolve(&self, label: &str) -> Result<Arc<dyn Component>, WiringError> {
        self.registry.resolve(label)
    }
}

fn checks_history(component: &dyn Component) -> bool {
    component.params().is_some_and(|p| p.get_bool(keys::CHECK_HISTORY).unwrap_or(false))
}

fn build_module(config: &ModuleConfig) -> Result<Module, WiringError> {
    let plugin = Plugin::parse(&config.plugin)?;
    let params = plugin.schema()?.instantiate(&config.params)?;
    let ports = plugin.ports(&params)?;
    Ok(Module::new(config.label.clone(), plugin, params, ports))
}

fn in_module(err: WiringError, label: &str) -> WiringError {
    let context = Cow::Owned(format!("module '{label}'"));
    match err {
        WiringError::Pset { source, .. } => WiringError::Pset { source, context: Some(context) },
        WiringError::Preset { source, .. } => WiringError::Preset { source, context: Some(context) },
        WiringError::UnknownPlugin { name, .. } => WiringError::UnknownPlugin { name, context: Some(context) },
        other => other,
    }
}
