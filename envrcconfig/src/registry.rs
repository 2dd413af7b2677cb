//! Lookup of generation targets by identifier

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::spec::EnvSpec;
use crate::usage::FieldTable;

/// A registered struct type.
#[derive(Debug, Clone)]
pub struct Target {
    package: &'static str,
    type_name: &'static str,
    prefix: &'static str,
    table: FieldTable,
}

impl Target {
    pub fn of<T: EnvSpec>() -> Self {
        Self {
            package: T::PACKAGE,
            type_name: T::TYPE_NAME,
            prefix: T::PREFIX,
            table: T::usage_source(),
        }
    }

    pub fn package(&self) -> &'static str {
        self.package
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn table(&self) -> &FieldTable {
        &self.table
    }

    /// Identifier in `<package>,<typename>` form.
    pub fn id(&self) -> String {
        format!("{},{}", self.package, self.type_name)
    }
}

/// Known targets keyed by `<package>,<typename>`.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    targets: BTreeMap<String, Target>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a derived type. Re-registering replaces the previous entry.
    pub fn register<T: EnvSpec>(&mut self) -> &mut Self {
        let target = Target::of::<T>();
        self.targets.insert(target.id(), target);
        self
    }

    /// Look up a target. Whitespace around either half of the identifier is ignored.
    pub fn get(&self, id: &str) -> Result<&Target> {
        let normalized = match id.split_once(',') {
            Some((package, type_name)) => format!("{},{}", package.trim(), type_name.trim()),
            None => id.trim().to_string(),
        };

        self.targets
            .get(&normalized)
            .ok_or_else(|| Error::UnknownTarget {
                target: id.to_string(),
            })
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
