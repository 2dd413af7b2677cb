//! Rendering of sample configuration files

use std::sync::OnceLock;

use minijinja::{context, Environment, ErrorKind, UndefinedBehavior};

use crate::error::{Error, Result};
use crate::format::Format;
use crate::varinfo::VarInfo;

/// Built-in templates, or the first one that failed to load.
static ENV: OnceLock<std::result::Result<Environment<'static>, TemplateLoadError>> =
    OnceLock::new();

const TEMPLATES: [(Format, &str); 4] = [
    (Format::DirEnv, include_str!("templates/direnv.j2")),
    (Format::DotEnv, include_str!("templates/dotenv.j2")),
    (Format::Kubernetes, include_str!("templates/kubernetes.j2")),
    (Format::Terraform, include_str!("templates/terraform.j2")),
];

#[derive(Debug)]
struct TemplateLoadError {
    format: Format,
    message: String,
}

impl TemplateLoadError {
    fn to_error(&self) -> Error {
        render_error(
            self.format,
            minijinja::Error::new(ErrorKind::SyntaxError, self.message.clone()),
        )
    }
}

/// The variables of one target, ready to be rendered.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    /// Target identifier, written as a header comment
    pub target: &'a str,
    /// Type name, used to name Kubernetes resources
    pub type_name: &'a str,
    pub vars: &'a [VarInfo],
}

/// Render `doc` in the given format.
pub fn render(format: Format, doc: &Document<'_>) -> Result<String> {
    let env = ENV
        .get_or_init(|| environment(&TEMPLATES))
        .as_ref()
        .map_err(TemplateLoadError::to_error)?;

    let template = env
        .get_template(format.as_str())
        .map_err(|source| render_error(format, source))?;

    template
        .render(context! {
            target => doc.target,
            name => split_case(doc.type_name, '-'),
            vars => doc.vars,
        })
        .map_err(|source| render_error(format, source))
}

fn environment(
    templates: &[(Format, &'static str)],
) -> std::result::Result<Environment<'static>, TemplateLoadError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);

    for &(format, source) in templates {
        env.add_template(format.as_str(), source)
            .map_err(|err| TemplateLoadError {
                format,
                message: format!("{:#}", err),
            })?;
    }

    env.add_filter("shell_quote", shell_quote);
    env.add_filter("dotenv_quote", dotenv_quote);
    env.add_filter("json_quote", json_quote);
    env.add_filter("tf_type", tf_type);
    env.add_filter("tf_default", tf_default);
    Ok(env)
}

fn render_error(format: Format, source: minijinja::Error) -> Error {
    Error::Render {
        format: format.to_string(),
        source,
    }
}

/// Split a CamelCase identifier into lowercase words joined by `sep`.
pub(crate) fn split_case(name: &str, sep: char) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c.is_uppercase() && prev_lower {
            out.push(sep);
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        out.extend(c.to_lowercase());
    }
    out
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_-./:@%+,=".contains(c)
}

/// POSIX shell single quoting, left bare when no quoting is needed.
fn shell_quote(value: String) -> String {
    if value.chars().all(is_shell_safe) {
        return value;
    }
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Double quote values containing whitespace, quotes, `#` or `$`.
fn dotenv_quote(value: String) -> std::result::Result<String, minijinja::Error> {
    let needs_quotes = value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '#' | '$' | '\\' | '`'));
    if needs_quotes {
        json_quote(value)
    } else {
        Ok(value)
    }
}

/// JSON string literal, valid in both YAML and HCL.
fn json_quote(value: String) -> std::result::Result<String, minijinja::Error> {
    serde_json::to_string(&value)
        .map_err(|e| minijinja::Error::new(ErrorKind::InvalidOperation, e.to_string()))
}

fn tf_type(type_desc: String) -> String {
    match type_desc.as_str() {
        "Integer" | "Unsigned Integer" | "Float" => "number".to_string(),
        "True or False" => "bool".to_string(),
        desc if desc.starts_with("Comma-separated list of") && desc.ends_with("pairs") => {
            "map(string)".to_string()
        }
        desc if desc.starts_with("Comma-separated list of") => "list(string)".to_string(),
        _ => "string".to_string(),
    }
}

/// Finite decimal number that HCL accepts as a bare literal.
fn is_hcl_number(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    digits.starts_with(|c: char| c.is_ascii_digit())
        && value.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Terraform literal for a default value of the given type.
fn tf_default(value: String, type_desc: String) -> std::result::Result<String, minijinja::Error> {
    match tf_type(type_desc).as_str() {
        "number" | "bool" if value.is_empty() => Ok("null".to_string()),
        "number" if is_hcl_number(&value) => Ok(value),
        "bool" if value == "true" || value == "false" => Ok(value),
        "list(string)" => {
            let items: Vec<&str> = value
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .collect();
            serde_json::to_string(&items)
                .map_err(|e| minijinja::Error::new(ErrorKind::InvalidOperation, e.to_string()))
        }
        "map(string)" => {
            let pairs: serde_json::Map<String, serde_json::Value> = value
                .split(',')
                .filter_map(|pair| pair.split_once(':'))
                .map(|(k, v)| (k.trim().to_string(), v.trim().into()))
                .collect();
            serde_json::to_string(&pairs)
                .map_err(|e| minijinja::Error::new(ErrorKind::InvalidOperation, e.to_string()))
        }
        _ => json_quote(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(key: &str, type_desc: &str, default: &str, required: bool, desc: &str) -> VarInfo {
        VarInfo {
            name: key.to_lowercase(),
            alt: String::new(),
            key: key.to_string(),
            type_desc: type_desc.to_string(),
            default: default.to_string(),
            required,
            desc: desc.to_string(),
        }
    }

    fn sample() -> Vec<VarInfo> {
        vec![
            var("APP_PORT", "Unsigned Integer", "8080", false, "Listen port"),
            var("APP_DATABASE_URL", "String", "", true, ""),
            var("APP_GREETING", "String", "hello world", false, ""),
        ]
    }

    fn doc(vars: &[VarInfo]) -> Document<'_> {
        Document {
            target: "app,AppConfig",
            type_name: "AppConfig",
            vars,
        }
    }

    #[test]
    fn test_render_direnv() {
        let vars = sample();
        let out = render(Format::DirEnv, &doc(&vars)).unwrap();
        assert_eq!(
            out,
            "# app,AppConfig\n\
             \n\
             # Listen port\n\
             # Unsigned Integer\n\
             export APP_PORT=8080\n\
             \n\
             # String, required\n\
             export APP_DATABASE_URL=\n\
             \n\
             # String\n\
             export APP_GREETING='hello world'\n"
        );
    }

    #[test]
    fn test_render_dotenv() {
        let vars = sample();
        let out = render(Format::DotEnv, &doc(&vars)).unwrap();
        assert!(out.starts_with("# app,AppConfig\n"));
        assert!(out.contains("\nAPP_PORT=8080\n"));
        assert!(out.contains("\nAPP_DATABASE_URL=\n"));
        assert!(out.contains("\nAPP_GREETING=\"hello world\"\n"));
    }

    #[test]
    fn test_render_kubernetes() {
        let vars = sample();
        let out = render(Format::Kubernetes, &doc(&vars)).unwrap();
        assert!(out.contains("kind: ConfigMap\n"));
        assert!(out.contains("  name: app-config\n"));
        assert!(out.contains("  # Listen port\n  APP_PORT: \"8080\"\n"));
        assert!(out.contains("  APP_DATABASE_URL: \"\"\n"));
    }

    #[test]
    fn test_render_kubernetes_without_vars() {
        let out = render(Format::Kubernetes, &doc(&[])).unwrap();
        assert!(out.ends_with("data: {}\n"));
    }

    #[test]
    fn test_render_terraform() {
        let vars = sample();
        let out = render(Format::Terraform, &doc(&vars)).unwrap();
        assert!(out.contains(
            "variable \"app_port\" {\n  description = \"Listen port\"\n  type        = number\n  default     = 8080\n}\n"
        ));
        assert!(out.contains("variable \"app_database_url\" {\n  type        = string\n}\n"));
        assert!(out.contains("  default     = \"hello world\"\n"));
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("plain".to_string()), "plain");
        assert_eq!(shell_quote(String::new()), "");
        assert_eq!(shell_quote("it's".to_string()), r"'it'\''s'");
    }

    #[test]
    fn test_tf_default_list() {
        let out = tf_default("a, b".to_string(), "Comma-separated list of String".to_string());
        assert_eq!(out.unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn test_tf_default_map() {
        let out = tf_default(
            "a:1".to_string(),
            "Comma-separated list of String:Integer pairs".to_string(),
        );
        assert_eq!(out.unwrap(), r#"{"a":"1"}"#);
    }

    #[test]
    fn test_tf_default_keeps_valid_literals() {
        let number = tf_default("-1.5e3".to_string(), "Float".to_string());
        assert_eq!(number.unwrap(), "-1.5e3");
        let boolean = tf_default("true".to_string(), "True or False".to_string());
        assert_eq!(boolean.unwrap(), "true");
    }

    #[test]
    fn test_tf_default_quotes_non_literal_numbers() {
        let out = tf_default("${env.PORT}".to_string(), "Unsigned Integer".to_string());
        assert_eq!(out.unwrap(), r#""${env.PORT}""#);

        let out = tf_default("inf".to_string(), "Float".to_string());
        assert_eq!(out.unwrap(), r#""inf""#);

        let out = tf_default("yes".to_string(), "True or False".to_string());
        assert_eq!(out.unwrap(), r#""yes""#);
    }

    #[test]
    fn test_render_terraform_quotes_placeholder_default() {
        let vars = vec![var("APP_PORT", "Unsigned Integer", "${env.PORT}", false, "")];
        let out = render(Format::Terraform, &doc(&vars)).unwrap();
        assert!(out.contains("  default     = \"${env.PORT}\"\n"));
    }

    #[test]
    fn test_broken_template_reports_format() {
        let err = environment(&[(Format::DotEnv, "{% for var in %}")]).unwrap_err();
        assert_eq!(err.format, Format::DotEnv);

        match err.to_error() {
            Error::Render { format, source } => {
                assert_eq!(format, "dotenv");
                assert_eq!(source.kind(), ErrorKind::SyntaxError);
            }
            other => panic!("Expected Render error, got {other:?}"),
        }
    }

    #[test]
    fn test_builtin_templates_load() {
        assert!(environment(&TEMPLATES).is_ok());
    }

    #[test]
    fn test_split_case() {
        assert_eq!(split_case("AppConfig", '-'), "app-config");
        assert_eq!(split_case("Config2Db", '_'), "config2_db");
        assert_eq!(split_case("config", '-'), "config");
    }
}
