//! Derive macro implementation for envrcconfig

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse_macro_input, Data, DeriveInput, Field, Fields, GenericArgument, PathArguments, Type,
};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// Generic arguments of the last path segment, e.g. `[T]` for `Vec<T>`
fn type_arguments(ty: &Type) -> Vec<&Type> {
    if let Type::Path(type_path) = ty {
        if let Some(seg) = type_path.path.segments.last() {
            if let PathArguments::AngleBracketed(args) = &seg.arguments {
                return args
                    .args
                    .iter()
                    .filter_map(|arg| match arg {
                        GenericArgument::Type(inner) => Some(inner),
                        _ => None,
                    })
                    .collect();
            }
        }
    }
    Vec::new()
}

/// Human readable description of a field type, as shown in the usage table.
fn describe_type(ty: &Type) -> String {
    let ident = match ty {
        Type::Reference(reference) => return describe_type(&reference.elem),
        Type::Path(type_path) => match type_path.path.segments.last() {
            Some(seg) => seg.ident.to_string(),
            None => return String::new(),
        },
        _ => return quote!(#ty).to_string().replace(' ', ""),
    };

    let args = type_arguments(ty);
    match (ident.as_str(), args.as_slice()) {
        ("String" | "str" | "PathBuf" | "Path" | "OsString", _) => "String".to_string(),
        ("i8" | "i16" | "i32" | "i64" | "i128" | "isize", _) => "Integer".to_string(),
        ("u8" | "u16" | "u32" | "u64" | "u128" | "usize", _) => "Unsigned Integer".to_string(),
        ("f32" | "f64", _) => "Float".to_string(),
        ("bool", _) => "True or False".to_string(),
        ("Duration", _) => "Duration".to_string(),
        ("Option" | "Box", [inner]) => describe_type(inner),
        ("Vec" | "HashSet" | "BTreeSet", [inner]) => {
            format!("Comma-separated list of {}", describe_type(inner))
        }
        ("HashMap" | "BTreeMap", [key, value]) => format!(
            "Comma-separated list of {}:{} pairs",
            describe_type(key),
            describe_type(value)
        ),
        _ => quote!(#ty).to_string().replace(' ', ""),
    }
}

/// `EnvSpec` derive macro
///
/// Builds the compile-time descriptor table consumed by `envrcconfig`.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "APP")]`: Prefix used when the struct is registered as a target
///
/// **Field-level**:
/// - `#[env(name = "ALT")]`: Alternate variable name replacing the field name
/// - `#[env(default = value)]`: Default value shown in generated files
/// - `#[env(required)]`: Mark the variable as mandatory
/// - `#[env(desc = "text")]`: Description (doc comments are used when absent)
/// - `#[env(ignored)]`: Leave the field out of the table
#[proc_macro_derive(EnvSpec, attributes(env))]
pub fn derive_env_spec(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let type_name = struct_name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let prefix = StructAttrs::from_attrs(&input.attrs)?.prefix;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "EnvSpec only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "EnvSpec only supports structs",
            ));
        }
    };

    let mut specs = Vec::new();
    for field in fields {
        if let Some(spec) = field_spec(field)? {
            specs.push(spec);
        }
    }

    Ok(quote! {
        impl #impl_generics ::envrcconfig::EnvSpec for #struct_name #ty_generics #where_clause {
            const PACKAGE: &'static str = ::core::module_path!();
            const TYPE_NAME: &'static str = #type_name;
            const PREFIX: &'static str = #prefix;

            fn fields() -> &'static [::envrcconfig::FieldSpec] {
                const FIELDS: &[::envrcconfig::FieldSpec] = &[#(#specs),*];
                FIELDS
            }
        }
    })
}

/// `FieldSpec` literal for one named field, `None` when the field is ignored.
fn field_spec(field: &Field) -> syn::Result<Option<proc_macro2::TokenStream>> {
    let attrs = FieldAttrs::from_field(field)?;
    if attrs.ignored {
        return Ok(None);
    }

    let Some(ident) = field.ident.as_ref() else {
        return Ok(None);
    };
    let name = ident.to_string();
    let name = name.strip_prefix("r#").unwrap_or(&name).to_string();
    let alt = attrs.name.unwrap_or_default().to_uppercase();
    let type_desc = describe_type(&field.ty);
    let default = attrs.default.unwrap_or_default();
    let required = attrs.required;
    let desc = attrs.desc.unwrap_or_default();

    Ok(Some(quote! {
        ::envrcconfig::FieldSpec {
            name: #name,
            alt: #alt,
            type_desc: #type_desc,
            default: #default,
            required: #required,
            desc: #desc,
        }
    }))
}
