//! Elixir Term Conversion Utilities
//!
//! Results cross the NIF boundary as `{:ok, value}` / `{:error, reason}`.
//! Colors become maps keyed by their component names.

use std::collections::HashMap;

use rustler::{Encoder, Env, NifResult, Term};

use crate::error::{ColorFault, DomError};
use crate::extract::{ColorLab, ColorRgb, ColorYxy};

rustler::atoms! {
    ok,
    error,
    not_found,
    invalid_number,
    incomplete_color,
    missing,
    malformed,
}

/// `{:ok, value}`
pub fn ok_tuple<'a>(env: Env<'a>, value: impl Encoder) -> Term<'a> {
    (ok(), value).encode(env)
}

/// `{:error, reason}`
///
/// Reasons: `:not_found`, `{:invalid_number, text}`,
/// `{:incomplete_color, field, :missing | :invalid_number}` and
/// `{:malformed, message}` for anything raised while parsing.
pub fn error_tuple<'a>(env: Env<'a>, err: &DomError) -> Term<'a> {
    let reason = match err {
        DomError::NodeNotFound(_) => not_found().encode(env),
        DomError::InvalidNumber { text } => (invalid_number(), text.as_str()).encode(env),
        DomError::IncompleteColor { field, fault, .. } => {
            let fault = match fault {
                ColorFault::Missing => missing(),
                ColorFault::InvalidNumber => invalid_number(),
            };
            (incomplete_color(), *field, fault).encode(env)
        }
        other => (malformed(), other.to_string()).encode(env),
    };
    (error(), reason).encode(env)
}

fn triplet_to_term<'a>(env: Env<'a>, pairs: [(&str, f64); 3]) -> NifResult<Term<'a>> {
    let pairs: Vec<(Term<'a>, Term<'a>)> = pairs
        .iter()
        .map(|(k, v)| (k.encode(env), v.encode(env)))
        .collect();
    Term::map_from_pairs(env, &pairs)
}

/// `%{"L" => l, "a" => a, "b" => b}`
pub fn lab_to_term<'a>(env: Env<'a>, lab: ColorLab) -> NifResult<Term<'a>> {
    triplet_to_term(env, [("L", lab.L), ("a", lab.a), ("b", lab.b)])
}

/// `%{"R" => r, "G" => g, "B" => b}`
pub fn rgb_to_term<'a>(env: Env<'a>, rgb: ColorRgb) -> NifResult<Term<'a>> {
    triplet_to_term(env, [("R", rgb.R), ("G", rgb.G), ("B", rgb.B)])
}

/// `%{"Y" => y, "x" => x, "y" => y}`
pub fn yxy_to_term<'a>(env: Env<'a>, yxy: ColorYxy) -> NifResult<Term<'a>> {
    triplet_to_term(env, [("Y", yxy.Y), ("x", yxy.x), ("y", yxy.y)])
}

/// Locale map as an Elixir map of binaries
pub fn localized_to_term<'a>(env: Env<'a>, map: &HashMap<String, String>) -> NifResult<Term<'a>> {
    let pairs: Vec<(Term<'a>, Term<'a>)> = map
        .iter()
        .map(|(k, v)| (k.encode(env), v.encode(env)))
        .collect();
    Term::map_from_pairs(env, &pairs)
}
