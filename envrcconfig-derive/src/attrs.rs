//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts configuration attributes from structs and their fields
//! during macro expansion.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, Field, Lit, Meta};

/// Parsed struct-level `#[env(...)]` attributes.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Default prefix applied to every key of the struct.
    pub prefix: String,
}

impl StructAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("prefix") {
                    parsed.prefix = parse_lit_text(&meta)?;
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level env attribute"))
            })?;
        }

        Ok(parsed)
    }
}

/// Parsed `#[env(...)]` attributes from a struct field.
///
/// Each option maps onto one column of the generated usage table.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Alternate variable name that replaces the field name in the key.
    pub name: Option<String>,

    /// Default value, rendered as text.
    pub default: Option<String>,

    /// Whether the variable must be set.
    pub required: bool,

    /// Explicit description. Falls back to the field's doc comment.
    pub desc: Option<String>,

    /// Skip the field entirely.
    pub ignored: bool,
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` attributes and doc comments from a struct field.
    ///
    /// Attributes other than `env` and `doc` are left for other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();
        let mut doc = Vec::new();

        for attr in &field.attrs {
            if attr.path().is_ident("doc") {
                if let Some(line) = doc_line(attr) {
                    doc.push(line);
                }
                continue;
            }

            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    attrs.name = Some(parse_lit_text(&meta)?);
                    return Ok(());
                }

                // default = "..." or default = 42
                if meta.path.is_ident("default") {
                    attrs.default = Some(parse_lit_text(&meta)?);
                    return Ok(());
                }

                // required or required = bool
                if meta.path.is_ident("required") {
                    attrs.required = parse_flag(&meta)?;
                    return Ok(());
                }

                // desc = "..."
                if meta.path.is_ident("desc") {
                    attrs.desc = Some(parse_lit_text(&meta)?);
                    return Ok(());
                }

                if meta.path.is_ident("ignored") {
                    attrs.ignored = parse_flag(&meta)?;
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute"))
            })?;
        }

        if attrs.desc.is_none() {
            let joined = doc
                .iter()
                .map(|line| line.trim())
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            if !joined.is_empty() {
                attrs.desc = Some(joined);
            }
        }

        Ok(attrs)
    }
}

/// Read `key = literal` as text. Numbers and booleans keep their source spelling.
fn parse_lit_text(meta: &ParseNestedMeta) -> syn::Result<String> {
    let value = meta.value()?;
    let lit: Lit = value.parse()?;
    match lit {
        Lit::Str(s) => Ok(s.value()),
        Lit::Int(i) => Ok(i.base10_digits().to_string()),
        Lit::Float(f) => Ok(f.base10_digits().to_string()),
        Lit::Bool(b) => Ok(b.value.to_string()),
        Lit::Char(c) => Ok(c.value().to_string()),
        other => Err(syn::Error::new(other.span(), "expected a string, number or boolean literal")),
    }
}

/// Bare `flag` means true, `flag = bool` is explicit.
fn parse_flag(meta: &ParseNestedMeta) -> syn::Result<bool> {
    if !meta.input.peek(syn::Token![=]) {
        return Ok(true);
    }

    let value = meta.value()?;
    let lit: syn::LitBool = value.parse()?;
    Ok(lit.value)
}

fn doc_line(attr: &Attribute) -> Option<String> {
    let Meta::NameValue(nv) = &attr.meta else {
        return None;
    };
    match &nv.value {
        Expr::Lit(expr) => match &expr.lit {
            Lit::Str(s) => Some(s.value()),
            _ => None,
        },
        _ => None,
    }
}
