use proc_macro::TokenStream;
use quote::quote;
use syn::{Ident, ItemFn, LitStr, parse_macro_input, spanned::Spanned};

const USAGE: &str = "rxsync_macro::test only accepts: #[rxsync_macro::test], \
                     #[rxsync_macro::test(local)], #[rxsync_macro::test(shared)], or string \
                     equivalents";

/// Test attribute shared by unit and integration tests.
///
/// Sync functions become plain `#[test]`s. Async functions run on tokio:
/// `local` selects the current-thread runtime, `shared` the multi-thread one
/// (needed when upstream work is spawned onto other threads).
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
  let input = parse_macro_input!(item as ItemFn);

  let is_async = input.sig.asyncness.is_some();

  let raw_args = proc_macro2::TokenStream::from(attr);
  let tokio_args = if raw_args.is_empty() {
    proc_macro2::TokenStream::new()
  } else {
    if !is_async {
      return TokenStream::from(
        syn::Error::new(
          raw_args.span(),
          "rxsync_macro::test flavor args are only supported for async tests. Use \
           #[rxsync_macro::test] for sync tests, or make the function async.",
        )
        .to_compile_error(),
      );
    }

    let flavor = if let Ok(ident) = syn::parse2::<Ident>(raw_args.clone()) {
      flavor_args(&ident.to_string()).ok_or_else(|| syn::Error::new(ident.span(), USAGE))
    } else if let Ok(lit) = syn::parse2::<LitStr>(raw_args.clone()) {
      flavor_args(&lit.value()).ok_or_else(|| syn::Error::new(lit.span(), USAGE))
    } else {
      Err(syn::Error::new(raw_args.span(), USAGE))
    };

    match flavor {
      Ok(args) => args,
      Err(err) => return TokenStream::from(err.to_compile_error()),
    }
  };

  let attr = match (is_async, tokio_args.is_empty()) {
    (false, _) => quote!(#[test]),
    (true, true) => quote!(#[tokio::test]),
    (true, false) => quote!(#[tokio::test(#tokio_args)]),
  };

  let expanded = quote! {
      #attr
      #input
  };

  TokenStream::from(expanded)
}

fn flavor_args(name: &str) -> Option<proc_macro2::TokenStream> {
  match name {
    "local" => Some(quote!(flavor = "current_thread")),
    "shared" => Some(quote!(flavor = "multi_thread", worker_threads = 4)),
    _ => None,
  }
}
