use darling::FromField;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, Visibility, ext::IdentExt};

#[derive(FromField)]
#[darling(attributes(env))]
pub struct RecordFieldReceiver {
    pub ident: Option<Ident>,
    pub vis: Visibility,
    /// #[env(flatten)]
    #[darling(default)]
    pub flatten: bool,
    /// #[env(skip)]
    #[darling(default)]
    pub skip: bool,
}

impl RecordFieldReceiver {
    pub fn validate(&self) -> darling::Result<()> {
        if self.flatten && self.skip {
            let err = darling::Error::custom("`flatten` and `skip` can't be used together");
            return Err(match &self.ident {
                Some(ident) => err.with_span(ident),
                None => err,
            });
        }

        Ok(())
    }

    /// The statement composing this field inside `compose_fields`.
    pub fn compose(&self, private_path: &TokenStream) -> TokenStream {
        let Some(ident) = &self.ident else {
            return TokenStream::new();
        };
        let name = ident.unraw().to_string();

        if self.skip {
            return TokenStream::new();
        }

        if matches!(self.vis, Visibility::Inherited) {
            return quote! {
                __tree.skip_unwritable(#name);
            };
        }

        if self.flatten {
            quote! {
                #private_path::Node::compose_embedded(&mut self.#ident, __prefix, #name, __tree);
            }
        } else {
            quote! {
                #private_path::Node::compose(&mut self.#ident, __prefix, #name, __tree);
            }
        }
    }
}
