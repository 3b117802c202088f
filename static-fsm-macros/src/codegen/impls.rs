use proc_macro2::TokenStream;
use quote::quote;
use syn::Expr;

use crate::ir::FsmIr;

/// `impl FsmContext for Ctx`, tying the context to its event union.
pub fn render_context_impl(ir: &FsmIr) -> TokenStream {
    let context = &ir.context_name;
    let event_enum = &ir.event_enum_ident;

    quote! {
        impl ::static_fsm::FsmContext for #context {
            type Event = #event_enum;
        }
    }
}

fn callable(expr: Option<&Expr>) -> TokenStream {
    match expr {
        Some(expr) => quote! { (#expr) },
        None => quote! { () },
    }
}

/// The `(state, event)` dispatch: for each event, one arm per state that
/// handles it. Ordinary transitions shadow internal ones.
fn render_route(ir: &FsmIr) -> TokenStream {
    let state_enum = &ir.state_enum_ident;
    let event_enum = &ir.event_enum_ident;

    let event_arms = ir.events.iter().map(|event| {
        debug_assert!(ir.has_event(&event.path));
        let event_variant = &event.variant;
        let event_path = &event.path;

        let state_arms = ir.states.iter().filter_map(|state| {
            let variant = &state.variant;
            let source = &state.path;

            if let Some(t) = ir.transition(source, event_path) {
                let (from, on, to) = (&t.from, &t.event, &t.to);
                let action = callable(t.action.as_ref());
                let guard = callable(t.guard.as_ref());
                return Some(quote! {
                    #state_enum::#variant(_) => {
                        ::static_fsm::Transition::<#from, #on, #to, _, _>::new(#action, #guard)
                            .fire(&mut self.state, &mut self.context, event, payload)
                    }
                });
            }

            ir.internal(source, event_path).map(|i| {
                let on = &i.event;
                let action = callable(i.action.as_ref());
                let guard = callable(i.guard.as_ref());
                quote! {
                    #state_enum::#variant(_) => {
                        ::static_fsm::Internal::<#source, #on, _, _>::new(#action, #guard)
                            .fire(&mut self.state, &mut self.context, payload)
                    }
                }
            })
        });

        quote! {
            #event_enum::#event_variant(payload) => match self.state {
                #(#state_arms)*
                _ => ::core::result::Result::Err(::static_fsm::Refusal::NoTransition),
            },
        }
    });

    quote! {
        fn route(
            &mut self,
            event: &#event_enum,
        ) -> ::core::result::Result<(), ::static_fsm::Refusal> {
            match event {
                #(#event_arms)*
            }
        }
    }
}

/// `impl Machine for CtxMachine`.
pub fn render_machine_impl(ir: &FsmIr) -> TokenStream {
    let machine = &ir.machine_name;
    let context = &ir.context_name;
    let state_enum = &ir.state_enum_ident;
    let name = &ir.display_name;
    let route = render_route(ir);

    quote! {
        impl ::static_fsm::Machine for #machine {
            type Context = #context;
            type States = #state_enum;

            const NAME: &'static str = #name;

            fn current(&self) -> &#state_enum {
                &self.state
            }

            fn context(&self) -> &#context {
                &self.context
            }

            fn context_mut(&mut self) -> &mut #context {
                &mut self.context
            }

            #route
        }
    }
}

/// Inherent methods, so callers need not import `Machine`.
pub fn render_inherent_impl(ir: &FsmIr) -> TokenStream {
    let vis = &ir.vis;
    let machine = &ir.machine_name;
    let context = &ir.context_name;
    let state_enum = &ir.state_enum_ident;
    let event_enum = &ir.event_enum_ident;
    let name = &ir.display_name;
    let initial = &ir.initial.path;
    let initial_variant = &ir.initial.variant;
    let initial_name = initial_variant.to_string();

    quote! {
        impl #machine {
            /// Creates the machine in its initial state, running that
            /// state's entry hook.
            #vis fn new(mut context: #context) -> Self {
                let mut initial = <#initial as ::core::default::Default>::default();
                ::static_fsm::invoke::enter(&mut initial, ::core::option::Option::None, &mut context);
                ::static_fsm::trace::started(#name, #initial_name);
                Self {
                    state: #state_enum::#initial_variant(initial),
                    context,
                }
            }

            /// Submits an event. Events that match no transition, or whose
            /// guard rejects them, are refused and change nothing.
            #vis fn process<E>(&mut self, event: E) -> ::static_fsm::Outcome
            where
                E: ::core::convert::Into<#event_enum>,
            {
                <Self as ::static_fsm::Machine>::process(self, event)
            }

            /// Like [`process`](Self::process), naming the reason for a refusal.
            #vis fn try_process<E>(
                &mut self,
                event: E,
            ) -> ::core::result::Result<(), ::static_fsm::Refused>
            where
                E: ::core::convert::Into<#event_enum>,
            {
                <Self as ::static_fsm::Machine>::try_process(self, event)
            }

            /// Whether the machine is currently in state `S`.
            #vis fn is_in_state<S>(&self) -> bool
            where
                #state_enum: ::static_fsm::Member<S>,
            {
                <Self as ::static_fsm::Machine>::is_in_state::<S>(self)
            }

            #vis fn state_name(&self) -> &'static str {
                ::static_fsm::StateUnion::name(&self.state)
            }

            #vis fn state(&self) -> &#state_enum {
                &self.state
            }

            #vis fn context(&self) -> &#context {
                &self.context
            }

            #vis fn context_mut(&mut self) -> &mut #context {
                &mut self.context
            }
        }

        impl ::core::convert::From<#context> for #machine {
            fn from(context: #context) -> Self {
                Self::new(context)
            }
        }
    }
}

/// Runs the current state's exit hook when the machine goes away.
pub fn render_drop_impl(ir: &FsmIr) -> TokenStream {
    let machine = &ir.machine_name;
    let state_enum = &ir.state_enum_ident;
    let name = &ir.display_name;
    let variants: Vec<_> = ir.states.iter().map(|s| &s.variant).collect();

    quote! {
        impl ::core::ops::Drop for #machine {
            fn drop(&mut self) {
                let last = ::static_fsm::StateUnion::name(&self.state);
                match &mut self.state {
                    #(
                        #state_enum::#variants(state) => {
                            ::static_fsm::invoke::exit(state, ::core::option::Option::None, &mut self.context)
                        }
                    )*
                    #state_enum::Placeholder(_) => {}
                }
                ::static_fsm::trace::stopped(#name, last);
            }
        }
    }
}
