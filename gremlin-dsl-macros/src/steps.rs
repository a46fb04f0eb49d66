use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    Attribute, Error, Ident, LitStr, Token,
};

/// One entry of a `steps!` invocation: `ident` or `ident => "name"`.
pub(crate) struct StepDecl {
    attrs: Vec<Attribute>,
    ident: Ident,
    rename: Option<LitStr>,
}

impl Parse for StepDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let ident: Ident = input.parse()?;
        let rename = if input.peek(Token![=>]) {
            input.parse::<Token![=>]>()?;
            Some(input.parse::<LitStr>()?)
        } else {
            None
        };

        Ok(Self {
            attrs,
            ident,
            rename,
        })
    }
}

pub(crate) struct StepList(Punctuated<StepDecl, Token![,]>);

impl Parse for StepList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Ok(Self(Punctuated::parse_terminated(input)?))
    }
}

pub fn steps_impl(input: TokenStream) -> TokenStream {
    let list = parse_macro_input!(input as StepList);
    match expand(&list) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(list: &StepList) -> syn::Result<TokenStream2> {
    let mut methods = Vec::with_capacity(list.0.len());

    for decl in &list.0 {
        let name = step_name(decl)?;
        let ident = &decl.ident;
        let attrs = &decl.attrs;

        // Undocumented entries still get a line in rustdoc
        let doc = if attrs.iter().any(|attr| attr.path().is_ident("doc")) {
            quote! {}
        } else {
            let text = format!(" Appends a `{}(...)` step.", name);
            quote! { #[doc = #text] }
        };

        methods.push(quote! {
            #(#attrs)*
            #doc
            pub fn #ident<A>(&mut self, args: A) -> &mut Self
            where
                A: ::gremlin_dsl_core::IntoArgs,
            {
                self.step(#name, args)
            }
        });
    }

    Ok(quote! {
        impl ::gremlin_dsl_core::GraphTraversal {
            #(#methods)*
        }
    })
}

/// Gremlin name for a declaration: the explicit rename, or the ident in camelCase.
fn step_name(decl: &StepDecl) -> syn::Result<String> {
    if let Some(rename) = &decl.rename {
        let value = rename.value();
        if value.is_empty() {
            return Err(Error::new(rename.span(), "step name must not be empty"));
        }
        return Ok(value);
    }

    let raw = decl.ident.to_string();
    let trimmed = raw.trim_start_matches("r#").trim_end_matches('_');
    if trimmed.is_empty() {
        return Err(Error::new(
            decl.ident.span(),
            "cannot derive a step name from this identifier, use `ident => \"name\"`",
        ));
    }

    Ok(trimmed.to_case(Case::Camel))
}
