use syn::{Expr, Ident, Path, Visibility};

use crate::helpers;
use crate::type_set;
use crate::validation::FsmStructure;

/// Complete Intermediate Representation of the FSM.
/// Built once from a validated declaration; code generation only reads it.
pub struct FsmIr {
    pub context_name: Ident,
    pub vis: Visibility,
    pub state_enum_ident: Ident,
    pub event_enum_ident: Ident,
    pub machine_name: Ident,
    pub display_name: String,

    pub initial: TypeIr,
    pub states: Vec<TypeIr>,
    pub events: Vec<TypeIr>,
    pub transitions: Vec<TransitionIr>,
    pub internal_sets: Vec<InternalSetIr>,

    tags: Vec<(Path, Path)>,
}

/// A state or event type together with its union variant.
pub struct TypeIr {
    pub path: Path,
    pub variant: Ident,
}

pub struct TransitionIr {
    pub from: Path,
    pub event: Path,
    pub to: Path,
    pub action: Option<Expr>,
    pub guard: Option<Expr>,
}

#[derive(Clone)]
pub struct InternalIr {
    pub event: Path,
    pub action: Option<Expr>,
    pub guard: Option<Expr>,
}

/// The internal transitions owned by one state.
#[derive(Clone)]
pub struct InternalSetIr {
    pub state: Path,
    pub transitions: Vec<InternalIr>,
}

impl FsmIr {
    /// Index of the ordinary transition tagged `(source, event)`.
    pub fn index_of(&self, source: &Path, event: &Path) -> Option<usize> {
        type_set::position(&self.tags, &(source.clone(), event.clone()))
    }

    /// The ordinary transition tagged `(source, event)`.
    pub fn transition(&self, source: &Path, event: &Path) -> Option<&TransitionIr> {
        let index = self.index_of(source, event)?;
        type_set::get(&self.transitions, index)
    }

    /// Index of the internal transition on `event` within `state`'s set.
    pub fn internal_index_of(&self, state: &Path, event: &Path) -> Option<usize> {
        self.internal_set(state)?
            .transitions
            .iter()
            .position(|t| type_set::same(&t.event, event))
    }

    /// The internal transition of `state` on `event`.
    pub fn internal(&self, state: &Path, event: &Path) -> Option<&InternalIr> {
        let index = self.internal_index_of(state, event)?;
        type_set::get(&self.internal_set(state)?.transitions, index)
    }

    /// Whether any ordinary transition or internal set handles `event`.
    pub fn has_event(&self, event: &Path) -> bool {
        self.transitions
            .iter()
            .any(|t| type_set::same(&t.event, event))
            || self
                .internal_sets
                .iter()
                .flat_map(|set| &set.transitions)
                .any(|t| type_set::same(&t.event, event))
    }

    fn internal_set(&self, state: &Path) -> Option<&InternalSetIr> {
        self.internal_sets
            .iter()
            .find(|set| type_set::same(&set.state, state))
    }
}

impl TypeIr {
    fn new(path: &Path) -> Self {
        Self {
            path: path.clone(),
            variant: helpers::variant_ident(path),
        }
    }
}

impl From<&FsmStructure> for FsmIr {
    fn from(fsm: &FsmStructure) -> Self {
        let context_name = fsm.item.ident.clone();
        let state_enum_ident = helpers::state_enum_ident(&context_name);
        let event_enum_ident = helpers::event_enum_ident(&context_name);

        let states = fsm.state_universe().iter().map(TypeIr::new).collect();
        let events = fsm.event_universe().iter().map(TypeIr::new).collect();

        let transitions = fsm
            .transitions
            .iter()
            .map(|t| TransitionIr {
                from: t.from.clone(),
                event: t.event.clone(),
                to: t.to.clone(),
                action: t.action.clone(),
                guard: t.guard.clone(),
            })
            .collect();

        // A `#[state]` without internal transitions contributes no set.
        let per_state: Vec<Option<InternalSetIr>> = fsm
            .states
            .iter()
            .map(|s| {
                (!s.internal.is_empty()).then(|| InternalSetIr {
                    state: s.name.clone(),
                    transitions: s
                        .internal
                        .iter()
                        .map(|i| InternalIr {
                            event: i.event.clone(),
                            action: i.action.clone(),
                            guard: i.guard.clone(),
                        })
                        .collect(),
                })
            })
            .collect();
        let internal_sets = type_set::non_void(&per_state);

        let tags = fsm
            .transitions
            .iter()
            .map(|t| (t.from.clone(), t.event.clone()))
            .collect();

        Self {
            context_name,
            vis: fsm.item.vis.clone(),
            state_enum_ident,
            event_enum_ident,
            machine_name: fsm.machine_name.clone(),
            display_name: fsm.display_name.clone(),
            initial: TypeIr::new(&fsm.initial),
            states,
            events,
            transitions,
            internal_sets,
            tags,
        }
    }
}
