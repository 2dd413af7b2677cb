//! Compile-time descriptor tables for annotated structs

use crate::usage::FieldTable;

/// Static metadata for one field of an annotated struct.
///
/// Normally generated by `#[derive(EnvSpec)]`, but tables can also be written
/// by hand for types that cannot carry the derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field identifier
    pub name: &'static str,
    /// Alternate variable name, empty when not overridden
    pub alt: &'static str,
    /// Type description, e.g. `Unsigned Integer`
    pub type_desc: &'static str,
    /// Default value text, empty when there is none
    pub default: &'static str,
    /// Whether the variable must be set
    pub required: bool,
    /// Description text, empty when there is none
    pub desc: &'static str,
}

/// A struct whose fields are bound to environment variables.
pub trait EnvSpec {
    /// Module path of the type, the `<package>` half of a target identifier.
    const PACKAGE: &'static str;
    /// Type identifier, the `<typename>` half of a target identifier.
    const TYPE_NAME: &'static str;
    /// Prefix applied when the type is generated as a target.
    const PREFIX: &'static str;

    /// Descriptor table in field declaration order.
    fn fields() -> &'static [FieldSpec];

    /// Usage table source for this type.
    fn usage_source() -> FieldTable {
        FieldTable::new(Self::fields())
    }

    /// Target identifier in `<package>,<typename>` form.
    fn target() -> String {
        format!("{},{}", Self::PACKAGE, Self::TYPE_NAME)
    }
}
