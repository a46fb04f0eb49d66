use proc_macro::TokenStream;

mod steps;

/// Declares Gremlin chain methods on `GraphTraversal`.
///
/// ```ignore
/// steps! {
///     /// Filters on the element label.
///     has_label,
///     v => "V",
///     in_ => "in",
/// }
/// ```
#[proc_macro]
pub fn steps(input: TokenStream) -> TokenStream {
    steps::steps_impl(input)
}
