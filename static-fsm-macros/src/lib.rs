//! Proc macro for declaring statically verified finite state machines.

use darling::FromMeta;
use darling::ast::NestedMeta;
use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemStruct, parse_macro_input};

mod attrs;
mod codegen;
mod helpers;
mod ir;
mod type_set;
mod validation;

/// Main proc macro entry point.
///
/// Placed first on a context struct, followed by its transition table:
///
/// ```ignore
/// #[fsm(initial = Locked)]
/// #[transition(from = Locked, event = Coin, to = Unlocked, action = count)]
/// #[transition(from = Unlocked, event = Push, to = Locked)]
/// #[state(name = Locked, internal(event = Push, action = alarm))]
/// struct Turnstile { coins: u32 }
/// ```
///
/// Generates `TurnstileState`, `TurnstileEvent` and `TurnstileMachine`.
/// Every table violation is reported as a compile error.
#[proc_macro_attribute]
pub fn fsm(args: TokenStream, input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as ItemStruct);
    expand(args.into(), input).into()
}

/// On error the context struct is still emitted, stripped of its table,
/// next to the table errors.
fn expand(args: proc_macro2::TokenStream, input: ItemStruct) -> proc_macro2::TokenStream {
    let mut fallback = input.clone();
    validation::strip_table(&mut fallback);

    match generate_fsm(args, input) {
        Ok(tokens) => tokens,
        Err(e) => {
            let error = e.to_compile_error();
            quote! {
                #fallback
                #error
            }
        }
    }
}

fn generate_fsm(
    args: proc_macro2::TokenStream,
    input: ItemStruct,
) -> syn::Result<proc_macro2::TokenStream> {
    let items = NestedMeta::parse_meta_list(args)?;
    let args = attrs::FsmArgs::from_list(&items).map_err(validation::darling_error)?;

    let fsm_structure = validation::FsmStructure::parse(args, input)?;
    let ir = ir::FsmIr::from(&fsm_structure);

    Ok(codegen::generate(&fsm_structure, &ir))
}
