//! Call-shape markers.
//!
//! Guards, actions and internal actions accept callables of two arities.
//! Each capability trait carries a marker type parameter so that a
//! callable implements it for exactly one marker; the compiler infers the
//! marker from the callable's `Fn` signature at the call site.

/// The callable takes the state instances as well as event and context.
#[derive(Debug, Clone, Copy)]
pub struct LongForm;

/// The callable takes only event and context.
#[derive(Debug, Clone, Copy)]
pub struct ShortForm;

/// No callable was declared; `()` stands in with the default behavior.
#[derive(Debug, Clone, Copy)]
pub struct Absent;
