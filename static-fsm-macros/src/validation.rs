//! Validation logic for FSM declarations.

use std::mem;

use darling::FromMeta;
use syn::{Attribute, Error, Ident, ItemStruct, Path};

use crate::attrs::{FsmArgs, StateAttr, TransitionAttr};
use crate::helpers::{self, PLACEHOLDER};
use crate::type_set;

/// The complete FSM declaration after parsing and validation.
pub struct FsmStructure {
    /// The context struct, stripped of `#[transition]` and `#[state]`.
    pub item: ItemStruct,
    pub machine_name: Ident,
    pub display_name: String,
    pub initial: Path,
    pub transitions: Vec<TransitionAttr>,
    pub states: Vec<StateAttr>,
}

/// Accumulates errors so one expansion reports every violation.
#[derive(Default)]
struct Errors(Option<Error>);

impl Errors {
    fn push(&mut self, error: Error) {
        match &mut self.0 {
            Some(first) => first.combine(error),
            None => self.0 = Some(error),
        }
    }

    fn finish(self) -> syn::Result<()> {
        match self.0 {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Whether `attr` is a row of the table rather than an attribute of the struct.
fn is_table_attr(attr: &Attribute) -> bool {
    attr.path().is_ident("transition") || attr.path().is_ident("state")
}

/// Removes `#[transition]` and `#[state]` from `item`.
pub fn strip_table(item: &mut ItemStruct) {
    item.attrs.retain(|attr| !is_table_attr(attr));
}

/// Converts a darling error, keeping its span.
pub fn darling_error(error: darling::Error) -> Error {
    Error::new(error.span(), error)
}

impl FsmStructure {
    /// Parse the annotated struct and check the declared table.
    pub fn parse(args: FsmArgs, mut item: ItemStruct) -> syn::Result<Self> {
        if !item.generics.params.is_empty() {
            return Err(Error::new_spanned(
                &item.generics,
                "#[fsm] context structs cannot have generic parameters",
            ));
        }

        let mut errors = Errors::default();
        let mut transitions = Vec::new();
        let mut states = Vec::new();
        let mut kept = Vec::with_capacity(item.attrs.len());

        for attr in mem::take(&mut item.attrs) {
            if attr.path().is_ident("transition") {
                match TransitionAttr::from_meta(&attr.meta) {
                    Ok(transition) => transitions.push(transition),
                    Err(e) => errors.push(darling_error(e)),
                }
            } else if attr.path().is_ident("state") {
                match StateAttr::from_meta(&attr.meta) {
                    Ok(state) => states.push(state),
                    Err(e) => errors.push(darling_error(e)),
                }
            } else {
                kept.push(attr);
            }
        }
        item.attrs = kept;

        let machine_name = match &args.machine {
            Some(path) => match path.get_ident() {
                Some(ident) => ident.clone(),
                None => {
                    errors.push(Error::new_spanned(
                        path,
                        "`machine` must be a plain identifier",
                    ));
                    helpers::machine_ident(&item.ident)
                }
            },
            None => helpers::machine_ident(&item.ident),
        };
        let display_name = args.name.unwrap_or_else(|| item.ident.to_string());

        let fsm = Self {
            item,
            machine_name,
            display_name,
            initial: args.initial,
            transitions,
            states,
        };
        fsm.validate(&mut errors);
        errors.finish()?;
        Ok(fsm)
    }

    /// Every source and target state, in order of first appearance.
    pub fn state_universe(&self) -> Vec<Path> {
        let all: Vec<Path> = self
            .transitions
            .iter()
            .flat_map(|t| [t.from.clone(), t.to.clone()])
            .collect();
        type_set::unique(&all)
    }

    /// Every ordinary and internal event, in order of first appearance.
    pub fn event_universe(&self) -> Vec<Path> {
        let ordinary = self.transitions.iter().map(|t| t.event.clone());
        let internal = self
            .states
            .iter()
            .flat_map(|s| s.internal.iter().map(|i| i.event.clone()));
        let all: Vec<Path> = ordinary.chain(internal).collect();
        type_set::unique(&all)
    }

    fn validate(&self, errors: &mut Errors) {
        if self.transitions.is_empty() {
            errors.push(Error::new_spanned(
                &self.item.ident,
                "state machine has no transitions; \
                 add at least one #[transition(from = .., event = .., to = ..)]",
            ));
            return;
        }

        for t in &self.transitions {
            if type_set::same(&t.from, &t.to) {
                errors.push(Error::new_spanned(
                    &t.to,
                    format!(
                        "transition from `{0}` to itself on `{1}`; \
                         declare it with #[state(name = {0}, internal(event = {1}))] instead",
                        helpers::display_path(&t.from),
                        helpers::display_path(&t.event),
                    ),
                ));
            }
        }

        let tags: Vec<(Path, Path)> = self
            .transitions
            .iter()
            .map(|t| (t.from.clone(), t.event.clone()))
            .collect();
        for (from, event) in type_set::duplicates(&tags) {
            errors.push(Error::new_spanned(
                event,
                format!(
                    "duplicate transition from `{}` on event `{}`",
                    helpers::display_path(from),
                    helpers::display_path(event),
                ),
            ));
        }

        let universe = self.state_universe();
        if !type_set::contains(&universe, &self.initial) {
            errors.push(Error::new_spanned(
                &self.initial,
                format!(
                    "initial state `{}` is not the source or target of any transition",
                    helpers::display_path(&self.initial),
                ),
            ));
        }

        self.validate_states(&universe, errors);
        check_variants(&universe, "state", errors);
        check_variants(&self.event_universe(), "event", errors);
    }

    fn validate_states(&self, universe: &[Path], errors: &mut Errors) {
        let named: Vec<Path> = self.states.iter().map(|s| s.name.clone()).collect();
        for (i, name) in named.iter().enumerate() {
            let count = type_set::count_of(&named, name);
            if count > 1 && type_set::index_of(&named, name) == i {
                errors.push(Error::new_spanned(
                    name,
                    format!(
                        "state `{}` has {count} #[state] attributes; merge them into one",
                        helpers::display_path(name),
                    ),
                ));
            }
        }

        for state in &self.states {
            if !type_set::contains(universe, &state.name) {
                errors.push(Error::new_spanned(
                    &state.name,
                    format!(
                        "#[state] names `{}`, which is not the source or target of any transition",
                        helpers::display_path(&state.name),
                    ),
                ));
            }

            let events: Vec<Path> = state.internal.iter().map(|i| i.event.clone()).collect();
            for event in type_set::duplicates(&events) {
                errors.push(Error::new_spanned(
                    event,
                    format!(
                        "duplicate internal transition on event `{}` in state `{}`",
                        helpers::display_path(event),
                        helpers::display_path(&state.name),
                    ),
                ));
            }
        }
    }
}

/// Checks that the union variants derived from `types` are distinct and
/// that no state claims the placeholder variant.
fn check_variants(types: &[Path], kind: &str, errors: &mut Errors) {
    let variants: Vec<Ident> = types.iter().map(helpers::variant_ident).collect();
    for (i, (path, variant)) in types.iter().zip(&variants).enumerate() {
        if kind == "state" && variant == PLACEHOLDER {
            errors.push(Error::new_spanned(
                path,
                "`Placeholder` is reserved for the in-transition state; rename this state type",
            ));
        }
        let first = type_set::index_of(&variants, variant);
        if first < i {
            errors.push(Error::new_spanned(
                path,
                format!(
                    "{kind} types `{}` and `{}` would share the variant name `{variant}`",
                    helpers::display_path(&types[first]),
                    helpers::display_path(path),
                ),
            ));
        }
    }
}
