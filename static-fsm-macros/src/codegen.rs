//! Code generation for the FSM implementation.

mod enums;
mod impls;
mod structs;

use proc_macro2::TokenStream;
use quote::quote;

use crate::ir::FsmIr;
use crate::validation::FsmStructure;

/// Generate the complete FSM implementation: the context struct itself, its
/// state and event unions, the machine type and its impls.
pub fn generate(fsm: &FsmStructure, ir: &FsmIr) -> TokenStream {
    let item = &fsm.item;
    let context_impl = impls::render_context_impl(ir);
    let state_enum = enums::render_state_enum(ir);
    let event_enum = enums::render_event_enum(ir);
    let machine_struct = structs::render_machine_struct(ir);
    let machine_impl = impls::render_machine_impl(ir);
    let inherent_impl = impls::render_inherent_impl(ir);
    let drop_impl = impls::render_drop_impl(ir);

    quote! {
        #item
        #context_impl
        #state_enum
        #event_enum
        #machine_struct
        #machine_impl
        #inherent_impl
        #drop_impl
    }
}
