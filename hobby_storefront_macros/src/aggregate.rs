use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{braced, parenthesized, parse_macro_input, Ident, LitStr, Token};

struct AggregateInput {
    ty: Ident,
    entity_field: Ident,
    events: Vec<EventArm>,
}

struct EventArm {
    name: LitStr,
    payload: Vec<Ident>,
    method: Ident,
    // Set when the method is written as `method()`.
    ignore_payload: bool,
}

fn ident_list(input: ParseStream) -> syn::Result<Vec<Ident>> {
    let inner;
    parenthesized!(inner in input);
    let idents: Punctuated<Ident, Token![,]> = inner.parse_terminated(Ident::parse, Token![,])?;
    Ok(idents.into_iter().collect())
}

impl Parse for AggregateInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: Ident = input.parse()?;
        input.parse::<Token![,]>()?;
        let entity_field: Ident = input.parse()?;

        let content;
        braced!(content in input);

        let mut events = Vec::new();
        while !content.is_empty() {
            let name: LitStr = content.parse()?;
            let payload = ident_list(&content)?;
            content.parse::<Token![=>]>()?;
            let method: Ident = content.parse()?;
            let ignore_payload = if content.peek(syn::token::Paren) {
                let call = ident_list(&content)?;
                if let Some(extra) = call.first() {
                    return Err(syn::Error::new(
                        extra.span(),
                        "write `method()` to ignore the payload or `method` to receive it",
                    ));
                }
                true
            } else {
                false
            };
            events.push(EventArm {
                name,
                payload,
                method,
                ignore_payload,
            });
            if content.peek(Token![,]) {
                content.parse::<Token![,]>()?;
            }
        }

        Ok(AggregateInput {
            ty,
            entity_field,
            events,
        })
    }
}

pub(crate) fn expand(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as AggregateInput);
    let ty = &input.ty;
    let entity_field = &input.entity_field;

    let arms = input.events.iter().map(|arm| {
        let name = &arm.name;
        let method = &arm.method;
        let payload = &arm.payload;

        if arm.ignore_payload {
            return quote! {
                #name => {
                    self.#method();
                }
            };
        }

        let decode = match payload.as_slice() {
            [] => quote! {},
            [only] => quote! {
                let (#only,) = event.decode().map_err(|e| e.to_string())?;
            },
            many => quote! {
                let (#(#many),*) = event.decode().map_err(|e| e.to_string())?;
            },
        };
        quote! {
            #name => {
                #decode
                self.#method(#(#payload),*);
            }
        }
    });

    let expanded = quote! {
        impl ::hobby_storefront::Aggregate for #ty {
            type ReplayError = String;

            fn entity(&self) -> &::hobby_storefront::Entity {
                &self.#entity_field
            }

            fn entity_mut(&mut self) -> &mut ::hobby_storefront::Entity {
                &mut self.#entity_field
            }

            fn replay_event(
                &mut self,
                event: &::hobby_storefront::EventRecord,
            ) -> Result<(), Self::ReplayError> {
                match event.event_name.as_str() {
                    #(#arms)*
                    other => return Err(format!("unknown event: {}", other)),
                }
                Ok(())
            }
        }
    };

    TokenStream::from(expanded)
}
