//! Escape-prefix naming scheme.
//!
//! Every registered feature is reachable under two spellings: the bare
//! functor (`foo`) and the escaped one (`escape__foo`). This module owns the
//! prefix constant and the derivation of one spelling from the other so the
//! registry and the evaluator-facing predicate cannot drift apart.

/// Marker distinguishing escaped functors from ordinary predicates.
pub const ESCAPE_PREFIX: &str = "escape__";

/// Pure prefix check; registry membership is a separate question.
pub fn is_escaped(functor: &str) -> bool {
    functor.starts_with(ESCAPE_PREFIX)
}

/// Derive the other spelling of `functor`.
///
/// Escaped inputs are stripped at the first occurrence of the prefix only; a
/// doubly-escaped functor aliases to its once-stripped form, not the fully
/// bare one.
pub fn alias_of(functor: &str) -> String {
    match functor.strip_prefix(ESCAPE_PREFIX) {
        Some(bare) => bare.to_string(),
        None => format!("{ESCAPE_PREFIX}{functor}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_check_is_pure_string_inspection() {
        assert!(is_escaped("escape__foo"));
        assert!(!is_escaped("foo"));
        assert!(!is_escaped("escapefoo"));
        assert!(is_escaped("escape__"));
    }

    #[test]
    fn bare_functor_gains_prefix() {
        assert_eq!(alias_of("greaterThan"), "escape__greaterThan");
    }

    #[test]
    fn escaped_functor_loses_prefix() {
        assert_eq!(alias_of("escape__greaterThan"), "greaterThan");
    }

    #[test]
    fn double_escape_strips_one_layer_only() {
        assert_eq!(alias_of("escape__escape__f"), "escape__f");
    }
}
