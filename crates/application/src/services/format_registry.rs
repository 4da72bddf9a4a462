use crate::ports::OutputSink;
use ferrous_pdns_domain::{DnsSchema, DomainError};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

pub type LifecycleHook = Arc<dyn Fn() -> Result<(), DomainError> + Send + Sync>;
pub type EmitHook = Arc<dyn Fn(&DnsSchema) -> Result<(), DomainError> + Send + Sync>;

/// Collects output format hooks during startup. Registering a hook for a
/// name that already has one replaces it.
#[derive(Default)]
pub struct FormatRegistryBuilder {
    setups: HashMap<String, LifecycleHook>,
    emitters: HashMap<String, EmitHook>,
    teardowns: HashMap<String, LifecycleHook>,
}

impl FormatRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_setup<F>(mut self, name: impl Into<String>, hook: F) -> Self
    where
        F: Fn() -> Result<(), DomainError> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.setups.insert(name.clone(), Arc::new(hook)).is_some() {
            debug!(format = %name, "Replacing setup hook");
        }
        self
    }

    pub fn on_emit<F>(mut self, name: impl Into<String>, hook: F) -> Self
    where
        F: Fn(&DnsSchema) -> Result<(), DomainError> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.emitters.insert(name.clone(), Arc::new(hook)).is_some() {
            debug!(format = %name, "Replacing emit hook");
        }
        self
    }

    pub fn on_teardown<F>(mut self, name: impl Into<String>, hook: F) -> Self
    where
        F: Fn() -> Result<(), DomainError> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.teardowns.insert(name.clone(), Arc::new(hook)).is_some() {
            debug!(format = %name, "Replacing teardown hook");
        }
        self
    }

    /// Registers all three hooks of a sink under one name.
    pub fn register_sink(self, name: impl Into<String>, sink: Arc<dyn OutputSink>) -> Self {
        let name = name.into();
        let setup = Arc::clone(&sink);
        let emit = Arc::clone(&sink);
        let teardown = sink;

        self.on_setup(name.clone(), move || setup.setup())
            .on_emit(name.clone(), move |row| emit.emit(row))
            .on_teardown(name, move || teardown.teardown())
    }

    pub fn build(self) -> FormatRegistry {
        debug!(
            setups = self.setups.len(),
            emitters = self.emitters.len(),
            teardowns = self.teardowns.len(),
            "Format registry built"
        );

        FormatRegistry {
            setups: self.setups,
            emitters: self.emitters,
            teardowns: self.teardowns,
        }
    }
}

/// Immutable table of named output formats, shared by reference once built.
pub struct FormatRegistry {
    setups: HashMap<String, LifecycleHook>,
    emitters: HashMap<String, EmitHook>,
    teardowns: HashMap<String, LifecycleHook>,
}

impl FormatRegistry {
    pub fn builder() -> FormatRegistryBuilder {
        FormatRegistryBuilder::new()
    }

    /// Runs the format's setup hook, if it has one.
    pub fn initialize(&self, name: &str) -> Result<(), DomainError> {
        match self.setups.get(name) {
            Some(setup) => {
                debug!(format = %name, "Initializing output format");
                setup()
            }
            None => Ok(()),
        }
    }

    /// Runs the format's teardown hook, if it has one.
    pub fn close(&self, name: &str) -> Result<(), DomainError> {
        match self.teardowns.get(name) {
            Some(teardown) => {
                debug!(format = %name, "Closing output format");
                teardown()
            }
            None => Ok(()),
        }
    }

    /// Hands a row to the format's emit hook.
    pub fn emit(&self, name: &str, row: &DnsSchema) -> Result<(), DomainError> {
        let emit = self
            .emitters
            .get(name)
            .ok_or_else(|| DomainError::UnregisteredFormat(name.to_string()))?;
        emit(row)
    }

    /// A format is usable once it has an emit hook.
    pub fn is_usable(&self, name: &str) -> bool {
        self.emitters.contains_key(name)
    }

    /// Names of all usable formats, sorted.
    pub fn formats(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.emitters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("formats", &self.formats())
            .finish()
    }
}
