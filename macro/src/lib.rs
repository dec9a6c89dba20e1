use proc_macro::TokenStream;
use quote::{quote, quote_spanned};
use syn::{parse_macro_input, spanned::Spanned, ItemFn, LitStr};

/// Marks a test which logs through `tracing` and may be an `async fn`.
///
/// Before the body runs, a `tracing_subscriber` formatter writing to the test
/// output is installed. Its filter comes from `RUST_LOG`, falling back to the
/// directive passed to the attribute, or `info` when there is none. The
/// calling crate needs `tracing-subscriber` with the `env-filter` feature as a
/// dev-dependency.
///
/// An `async fn` body is driven to completion with
/// `wait_each::runtime::block_on`; a plain `fn` body runs as-is.
///
/// # Examples
///
/// ```ignore
/// #[wait_each::test("wait_each=trace")]
/// async fn visits_everything() {
///     [1, 2, 3].wait_each(|_, _, _| async {}).await;
/// }
/// ```
#[proc_macro_attribute]
pub fn attr_macro_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    let directive = if attr.is_empty() {
        quote! { "info" }
    } else {
        let lit = parse_macro_input!(attr as LitStr);
        quote! { #lit }
    };

    if !input.sig.inputs.is_empty() {
        return quote_spanned! { input.sig.inputs.span()=>
            compile_error!("arguments to tests are not supported");
        }
        .into();
    }

    if !input.sig.generics.params.is_empty() {
        return quote_spanned! { input.sig.generics.span()=>
            compile_error!("generic tests are not supported");
        }
        .into();
    }

    let attrs = input.attrs;
    let vis = input.vis;
    let name = input.sig.ident;
    let output = input.sig.output;
    let block = input.block;

    let body = if input.sig.asyncness.is_some() {
        quote! {
            async fn __run() #output #block

            ::wait_each::runtime::block_on(__run())
        }
    } else {
        quote! { #block }
    };

    quote! {
        #[test]
        #(#attrs)*
        #vis fn #name() #output {
            {
                let filter = ::tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| ::tracing_subscriber::EnvFilter::new(#directive));
                // Another test on this process may have installed one already.
                let _ = ::tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_test_writer()
                    .try_init();
            }

            #body
        }
    }
    .into()
}
