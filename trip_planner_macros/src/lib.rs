mod payload_schema;
mod schema_extraction;

use proc_macro::TokenStream;
use syn::{parse_macro_input, ItemStruct};

/// Marks a struct as a payload that can cross the persistence boundary.
///
/// Generates a `PayloadSchema` impl whose `schema()` builds the JSON schema and its
/// validator on first use, decorated with the struct and field doc comments.
///
/// ```ignore
/// #[payload_schema(name = "TripPlan", description = "Generated itinerary")]
/// pub struct TripPlan { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn payload_schema(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = match schema_extraction::parse_payload_schema_args(attr) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error().into(),
    };
    let item = parse_macro_input!(item as ItemStruct);

    payload_schema::expand(args, item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
