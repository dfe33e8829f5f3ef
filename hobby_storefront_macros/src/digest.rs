use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::parse::ParseStream;
use syn::{parse_macro_input, Expr, FnArg, Ident, ItemFn, LitStr, Pat, Token};

struct DigestArgs {
    entity_field: Ident,
    event_name: LitStr,
    guard: Option<Expr>,
}

fn parse_args(input: ParseStream) -> syn::Result<DigestArgs> {
    let (entity_field, event_name) = if input.peek(LitStr) {
        (format_ident!("entity"), input.parse::<LitStr>()?)
    } else {
        let field: Ident = input.parse()?;
        input.parse::<Token![,]>()?;
        (field, input.parse::<LitStr>()?)
    };

    let mut guard = None;
    while input.peek(Token![,]) {
        input.parse::<Token![,]>()?;
        if input.is_empty() {
            break;
        }
        let key: Ident = input.parse()?;
        if key != "when" {
            return Err(syn::Error::new(key.span(), "expected `when = <condition>`"));
        }
        input.parse::<Token![=]>()?;
        guard = Some(input.parse()?);
    }

    Ok(DigestArgs {
        entity_field,
        event_name,
        guard,
    })
}

pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr with parse_args);
    let mut func = parse_macro_input!(item as ItemFn);

    let params: Vec<&Ident> = func
        .sig
        .inputs
        .iter()
        .filter_map(|arg| match arg {
            FnArg::Typed(typed) => match &*typed.pat {
                Pat::Ident(pat) => Some(&pat.ident),
                _ => None,
            },
            FnArg::Receiver(_) => None,
        })
        .collect();

    let entity = &args.entity_field;
    let name = &args.event_name;
    let record = match params.as_slice() {
        [] => quote! { self.#entity.digest_empty(#name); },
        [only] => quote! { self.#entity.digest(#name, &(#only.clone(),)); },
        many => quote! { self.#entity.digest(#name, &(#(#many.clone()),*)); },
    };

    let body = &func.block.stmts;
    func.block = Box::new(match &args.guard {
        Some(guard) => syn::parse_quote! {{
            if #guard {
                #record
                #(#body)*
            }
        }},
        None => syn::parse_quote! {{
            #record
            #(#body)*
        }},
    });

    TokenStream::from(quote! { #func })
}
