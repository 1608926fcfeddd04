mod field;

use darling::{
    FromDeriveInput,
    ast::{Data, Fields},
};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{DeriveInput, Generics, Ident, parse_macro_input};

use crate::field::RecordFieldReceiver;

#[proc_macro_derive(Record, attributes(env))]
pub fn derive_record(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match impl_derive(input) {
        Ok(output) => output.into(),
        Err(err) => err.write_errors().into(),
    }
}

fn impl_derive(input: DeriveInput) -> darling::Result<TokenStream> {
    let record = RecordReceiver::from_derive_input(&input)?;

    record.validate()?;

    Ok(record.to_token_stream())
}

#[derive(FromDeriveInput)]
#[darling(attributes(env), supports(struct_named))]
struct RecordReceiver {
    ident: Ident,
    generics: Generics,
    data: Data<(), RecordFieldReceiver>,
    /// #[env(prefix = "...")]
    #[darling(default)]
    prefix: Option<String>,
}

impl ToTokens for RecordReceiver {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let private_path = quote!(__structenv::__private);

        let impl_node = self.impl_node(&private_path);
        let impl_record = self.impl_record(&private_path);

        let derive = quote! {
            const _: () = {
                extern crate structenv as __structenv;

                #impl_node

                #impl_record
            };
        };

        tokens.extend(derive);
    }
}

impl RecordReceiver {
    fn validate(&self) -> darling::Result<()> {
        let mut accumulator = darling::Error::accumulator();

        if !self.generics.params.is_empty() {
            accumulator.push(
                darling::Error::custom("Record derive does not support generic structs")
                    .with_span(&self.ident),
            );
        }

        for field in self.get_fields().iter() {
            accumulator.handle(field.validate());
        }

        accumulator.finish()
    }

    fn impl_node(&self, private_path: &TokenStream) -> TokenStream {
        let struct_name = &self.ident;

        quote! {
            impl #private_path::Node for #struct_name {
                fn compose<'__a>(
                    &'__a mut self,
                    __prefix: &str,
                    __name: &str,
                    __tree: &mut #private_path::Tree<'__a>,
                ) {
                    let __prefix = #private_path::join(__prefix, __name);
                    #private_path::Record::compose_fields(self, &__prefix, __tree);
                }

                fn compose_embedded<'__a>(
                    &'__a mut self,
                    __prefix: &str,
                    _: &str,
                    __tree: &mut #private_path::Tree<'__a>,
                ) {
                    #private_path::Record::compose_fields(self, __prefix, __tree);
                }

                fn as_record_mut(
                    &mut self,
                ) -> ::core::option::Option<&mut dyn #private_path::Record> {
                    ::core::option::Option::Some(self)
                }
            }
        }
    }

    fn impl_record(&self, private_path: &TokenStream) -> TokenStream {
        let struct_name = &self.ident;
        let root_prefix = self
            .prefix
            .clone()
            .unwrap_or_else(|| struct_name.to_string().to_uppercase());
        let fields = self
            .get_fields()
            .iter()
            .map(|field| field.compose(private_path));

        quote! {
            impl #private_path::Record for #struct_name {
                fn root_prefix(&self) -> ::std::string::String {
                    ::std::string::String::from(#root_prefix)
                }

                #[allow(unused_variables)]
                fn compose_fields<'__a>(
                    &'__a mut self,
                    __prefix: &str,
                    __tree: &mut #private_path::Tree<'__a>,
                ) {
                    #(#fields)*
                }

                fn as_any(&self) -> &dyn ::core::any::Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                    self
                }
            }
        }
    }

    fn get_fields(&self) -> &Fields<RecordFieldReceiver> {
        let Data::Struct(fields) = &self.data else {
            panic!("we've asserted that it's a struct");
        };

        fields
    }
}
