//! Usage table generation
//!
//! A usage table has one newline-terminated row per variable with seven
//! tab-separated columns: name, alternate name, key, type, default,
//! required and description. Values are written verbatim, so embedded tabs
//! or newlines break the row shape.

use std::io::Write;

use crate::error::{Error, Result};
use crate::spec::FieldSpec;

/// Anything that can describe its variables as a usage table.
pub trait UsageSource {
    /// Write the usage table for `prefix` to `out`.
    fn write_usage(&self, prefix: &str, out: &mut dyn Write) -> Result<()>;
}

/// Usage source backed by a static descriptor table.
#[derive(Debug, Clone, Copy)]
pub struct FieldTable {
    fields: &'static [FieldSpec],
}

impl FieldTable {
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }
}

impl UsageSource for FieldTable {
    fn write_usage(&self, prefix: &str, out: &mut dyn Write) -> Result<()> {
        for field in self.fields {
            let key = env_key(prefix, field);
            let required = if field.required { "true" } else { "" };
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                field.name, field.alt, key, field.type_desc, field.default, required, field.desc
            )
            .map_err(|e| Error::Introspection {
                message: e.to_string(),
            })?;
        }
        Ok(())
    }
}

/// Resolve the environment variable key for a field.
///
/// The alternate name replaces the field name, the prefix is joined with an
/// underscore and the result is upper-cased.
pub fn env_key(prefix: &str, field: &FieldSpec) -> String {
    let base = if field.alt.is_empty() {
        field.name
    } else {
        field.alt
    };

    let prefix = prefix.trim_end_matches('_');
    let key = if prefix.is_empty() {
        base.to_string()
    } else {
        format!("{}_{}", prefix, base)
    };

    key.to_uppercase()
}
