use proc_macro2::TokenStream;
use quote::quote;

use crate::helpers::PLACEHOLDER;
use crate::ir::FsmIr;

pub fn render_state_enum(ir: &FsmIr) -> TokenStream {
    let vis = &ir.vis;
    let context = &ir.context_name;
    let state_enum = &ir.state_enum_ident;
    let variants: Vec<_> = ir.states.iter().map(|s| &s.variant).collect();
    let paths: Vec<_> = ir.states.iter().map(|s| &s.path).collect();
    let names: Vec<_> = variants.iter().map(|v| v.to_string()).collect();

    let members = ir.states.iter().map(|state| {
        let variant = &state.variant;
        let path = &state.path;
        quote! {
            impl ::static_fsm::Member<#path> for #state_enum {
                fn wrap(state: #path) -> Self {
                    Self::#variant(state)
                }

                fn get(&self) -> ::core::option::Option<&#path> {
                    match self {
                        Self::#variant(state) => ::core::option::Option::Some(state),
                        _ => ::core::option::Option::None,
                    }
                }

                fn get_mut(&mut self) -> ::core::option::Option<&mut #path> {
                    match self {
                        Self::#variant(state) => ::core::option::Option::Some(state),
                        _ => ::core::option::Option::None,
                    }
                }

                fn take(self) -> ::core::result::Result<#path, Self> {
                    match self {
                        Self::#variant(state) => ::core::result::Result::Ok(state),
                        other => ::core::result::Result::Err(other),
                    }
                }
            }
        }
    });

    let doc = format!(" The states of [`{context}`], plus the in-transition placeholder.");

    quote! {
        #[doc = #doc]
        #vis enum #state_enum {
            #(#variants(#paths),)*
            Placeholder(::static_fsm::Placeholder),
        }

        impl ::static_fsm::StateUnion for #state_enum {
            fn placeholder() -> Self {
                Self::Placeholder(::static_fsm::Placeholder)
            }

            fn name(&self) -> &'static str {
                match self {
                    #(Self::#variants(_) => #names,)*
                    Self::Placeholder(_) => #PLACEHOLDER,
                }
            }

            fn is_placeholder(&self) -> bool {
                ::core::matches!(self, Self::Placeholder(_))
            }
        }

        #(#members)*
    }
}

pub fn render_event_enum(ir: &FsmIr) -> TokenStream {
    let vis = &ir.vis;
    let context = &ir.context_name;
    let event_enum = &ir.event_enum_ident;
    let variants: Vec<_> = ir.events.iter().map(|e| &e.variant).collect();
    let paths: Vec<_> = ir.events.iter().map(|e| &e.path).collect();
    let names: Vec<_> = variants.iter().map(|v| v.to_string()).collect();

    let doc = format!(" Every event [`{context}`] reacts to.");

    quote! {
        #[doc = #doc]
        #vis enum #event_enum {
            #(#variants(#paths),)*
        }

        impl ::static_fsm::EventUnion for #event_enum {
            fn name(&self) -> &'static str {
                match self {
                    #(Self::#variants(_) => #names,)*
                }
            }
        }

        #(
            impl ::core::convert::From<#paths> for #event_enum {
                fn from(event: #paths) -> Self {
                    Self::#variants(event)
                }
            }
        )*
    }
}
