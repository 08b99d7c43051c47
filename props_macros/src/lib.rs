extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Expr, Fields, Lit, LitStr, MetaNameValue, parse_macro_input,
    punctuated::Punctuated, token,
};

/// Derives `PropertyEnum` and `PropertyValue` for a fieldless enum.
///
/// Every variant is accepted under its declared name. Attributes:
/// * `#[property(rename = "...")]` on a variant accepts it under another name;
/// * `#[property(type_name = "...")]` on the enum sets the type name used in
///   error messages (defaults to the enum's name).
#[proc_macro_derive(PropertyEnum, attributes(property))]
pub fn property_enum_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_property_enum(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_property_enum(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "PropertyEnum can only be derived for enums",
        ));
    };

    let type_name = property_attr(&input.attrs, "type_name")?.unwrap_or_else(|| name.to_string());

    let mut names = Vec::with_capacity(data.variants.len());
    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "PropertyEnum variants must not have fields",
            ));
        }
        let accepted =
            property_attr(&variant.attrs, "rename")?.unwrap_or_else(|| variant.ident.to_string());
        if names.contains(&accepted) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("Property name '{}' is used twice", accepted),
            ));
        }
        names.push(accepted);
        variants.push(&variant.ident);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::easy_props::PropertyEnum for #name #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;
            const NAMES: &'static [&'static str] = &[#(#names),*];

            fn from_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    #(#names => ::core::option::Option::Some(Self::#variants),)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #impl_generics ::easy_props::PropertyValue for #name #ty_generics #where_clause {
            fn converter() -> ::easy_props::Converter<Self> {
                ::easy_props::enum_type::<Self>()
            }
        }
    })
}

// --- Helper Functions for Attribute Parsing ---

/// Finds `key = "value"` among the `#[property(...)]` attributes.
/// Unknown keys are an error so that typos do not go unnoticed.
fn property_attr(attrs: &[Attribute], key: &str) -> syn::Result<Option<String>> {
    let mut found = None;
    for attr in attrs {
        if !attr.path().is_ident("property") {
            continue;
        }
        let parsed_attrs =
            attr.parse_args_with(Punctuated::<MetaNameValue, token::Comma>::parse_terminated)?;

        for nv in parsed_attrs {
            let Some(ident) = nv.path.get_ident() else {
                return Err(syn::Error::new_spanned(&nv.path, "Expected an identifier"));
            };
            match ident.to_string().as_str() {
                "rename" | "type_name" if ident == key => {
                    found = Some(get_string_lit_from_expr(&nv.value)?.value());
                }
                "rename" | "type_name" => {
                    return Err(syn::Error::new_spanned(
                        ident,
                        format!("'{}' is not allowed here", ident),
                    ));
                }
                other => {
                    return Err(syn::Error::new_spanned(
                        ident,
                        format!("Unknown attribute: {}", other),
                    ));
                }
            }
        }
    }
    Ok(found)
}

/// Extracts the string literal of an expression (e.g., `"hello"`).
/// Returns a `syn::Error` if the expression is not a string literal.
fn get_string_lit_from_expr(expr: &Expr) -> syn::Result<LitStr> {
    if let Expr::Lit(expr_lit) = expr
        && let Lit::Str(lit_str) = &expr_lit.lit
    {
        return Ok(lit_str.clone());
    }
    Err(syn::Error::new_spanned(expr, "Expected a string literal"))
}
