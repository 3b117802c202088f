use proc_macro2::TokenStream;
use quote::quote;

use crate::ir::FsmIr;

pub fn render_machine_struct(ir: &FsmIr) -> TokenStream {
    let vis = &ir.vis;
    let machine = &ir.machine_name;
    let context = &ir.context_name;
    let state_enum = &ir.state_enum_ident;
    let doc = format!(" State machine driving a [`{context}`].");

    quote! {
        #[doc = #doc]
        #vis struct #machine {
            state: #state_enum,
            context: #context,
        }
    }
}
