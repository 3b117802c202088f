use quote::format_ident;
use syn::{Ident, Path};

/// Generates the identifier for the FSM's state union: `[Name]State`
pub fn state_enum_ident(context: &Ident) -> Ident {
    format_ident!("{}State", context)
}

/// Generates the identifier for the FSM's event union: `[Name]Event`
pub fn event_enum_ident(context: &Ident) -> Ident {
    format_ident!("{}Event", context)
}

/// Generates the default identifier for the machine: `[Name]Machine`
pub fn machine_ident(context: &Ident) -> Ident {
    format_ident!("{}Machine", context)
}

/// The union variant for a state or event type: the last path segment.
pub fn variant_ident(path: &Path) -> Ident {
    match path.segments.last() {
        Some(segment) => segment.ident.clone(),
        None => format_ident!("Unnamed"),
    }
}

/// Renders a path for diagnostics: `a::b::C`.
pub fn display_path(path: &Path) -> String {
    path.segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}

/// Name of the synthetic state variant.
pub const PLACEHOLDER: &str = "Placeholder";
