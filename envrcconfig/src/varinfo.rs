//! Variable descriptor extraction
//!
//! Drives a [`UsageSource`] and turns each row of its usage table into a
//! [`VarInfo`]. The seven-column layout is checked here and nowhere else.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::spec::EnvSpec;
use crate::usage::UsageSource;

const COLUMNS: usize = 7;

/// Parsed description of one environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarInfo {
    /// Struct field identifier
    pub name: String,
    /// Alternate name supplied via attribute
    pub alt: String,
    /// Fully resolved environment variable key
    pub key: String,
    /// Type description
    #[serde(rename = "type")]
    pub type_desc: String,
    /// Default value, empty if none
    pub default: String,
    /// Whether the variable is mandatory
    pub required: bool,
    /// Description, empty if none
    pub desc: String,
}

/// Return the descriptors `source` reports for `prefix`, in the order the
/// source emits them.
pub fn process(prefix: &str, source: &dyn UsageSource) -> Result<Vec<VarInfo>> {
    let mut out = Vec::new();
    source.write_usage(prefix, &mut out)?;

    let text = String::from_utf8(out).map_err(|e| Error::Introspection {
        message: e.to_string(),
    })?;

    text.split('\n')
        .filter(|line| !line.is_empty())
        .map(parse)
        .collect()
}

/// Descriptors for a derived type.
pub fn process_spec<T: EnvSpec>(prefix: &str) -> Result<Vec<VarInfo>> {
    process(prefix, &T::usage_source())
}

fn parse(line: &str) -> Result<VarInfo> {
    let tokens: Vec<&str> = line.split('\t').collect();
    if tokens.len() != COLUMNS {
        return Err(Error::IncompatibleFormat {
            found: tokens.len(),
            line: line.to_string(),
        });
    }

    let required = match tokens[5] {
        "" => false,
        value => parse_bool(value)?,
    };

    Ok(VarInfo {
        name: tokens[0].to_string(),
        alt: tokens[1].to_string(),
        key: tokens[2].to_string(),
        type_desc: tokens[3].to_string(),
        default: tokens[4].to_string(),
        required,
        desc: tokens[6].to_string(),
    })
}

/// Boolean literals accepted in the required column.
fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "False" => Ok(false),
        _ => value.parse::<bool>().map_err(|source| Error::ParseBool {
            value: value.to_string(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Source returning a fixed table regardless of prefix.
    struct RawTable(&'static str);

    impl UsageSource for RawTable {
        fn write_usage(&self, _prefix: &str, out: &mut dyn Write) -> Result<()> {
            out.write_all(self.0.as_bytes())
                .map_err(|e| Error::Introspection {
                    message: e.to_string(),
                })
        }
    }

    struct FailingSource;

    impl UsageSource for FailingSource {
        fn write_usage(&self, _prefix: &str, _out: &mut dyn Write) -> Result<()> {
            Err(Error::Introspection {
                message: "not a struct".to_string(),
            })
        }
    }

    #[test]
    fn test_process_parses_rows() {
        let source = RawTable("port\t\tAPP_PORT\tInteger\t80\ttrue\tlisten port\n");
        let vars = process("APP", &source).unwrap();

        assert_eq!(
            vars,
            vec![VarInfo {
                name: "port".to_string(),
                alt: String::new(),
                key: "APP_PORT".to_string(),
                type_desc: "Integer".to_string(),
                default: "80".to_string(),
                required: true,
                desc: "listen port".to_string(),
            }]
        );
    }

    #[test]
    fn test_process_skips_empty_lines() {
        let source = RawTable("a\t\tA\tString\t\t\t\n\nb\t\tB\tString\t\t\t\n");
        let vars = process("", &source).unwrap();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].name, "a");
        assert_eq!(vars[1].name, "b");
    }

    #[test]
    fn test_empty_required_is_false() {
        let source = RawTable("a\t\tA\tString\t\t\t\n");
        let vars = process("", &source).unwrap();
        assert!(!vars[0].required);
    }

    #[test]
    fn test_short_row_is_incompatible() {
        let source = RawTable("a\tA\tString\n");
        let err = process("", &source).unwrap_err();
        assert!(matches!(err, Error::IncompatibleFormat { found: 3, .. }));
    }

    #[test]
    fn test_long_row_is_incompatible() {
        let source = RawTable("a\t\tA\tString\t\t\tdesc\twith tab\n");
        let err = process("", &source).unwrap_err();
        assert!(matches!(err, Error::IncompatibleFormat { found: 8, .. }));
    }

    #[test]
    fn test_malformed_required_fails() {
        let source = RawTable("a\t\tA\tString\t\tnotabool\t\n");
        let err = process("", &source).unwrap_err();
        match err {
            Error::ParseBool { value, .. } => assert_eq!(value, "notabool"),
            other => panic!("Expected ParseBool error, got {other:?}"),
        }
    }

    #[test]
    fn test_short_boolean_literals() {
        assert!(parse_bool("1").unwrap());
        assert!(parse_bool("T").unwrap());
        assert!(!parse_bool("false").unwrap());
        assert!(!parse_bool("0").unwrap());
    }

    #[test]
    fn test_source_failure_is_propagated() {
        let err = process("", &FailingSource).unwrap_err();
        assert!(matches!(err, Error::Introspection { .. }));
    }
}
