// src/coerce.rs
//
// Reduce a multiset of operand types to one common type.

use crate::atoms::TypeId;
use crate::cast::Tcc;
use crate::context::TypeContext;
use crate::errors::TypesysError;

/// A successful coercion: the chosen common type and whether the reduction
/// stayed within `Exact`/`Promote` casts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coerced {
    pub ty: TypeId,
    pub safe: bool,
}

impl TypeContext {
    /// Pick one common type for `typeset`.
    ///
    /// Prefers a member every other member can promote to. When no such
    /// safe target exists, falls back to the highest-ranked operand with
    /// `safe = false`. Any `False` pair anywhere makes the whole call
    /// impossible (`Ok(None)`): if two operands are not connected by the
    /// compatibility table, the call site is ill-typed regardless of what
    /// the remaining operands would allow.
    pub fn coerce(&self, typeset: &[TypeId]) -> Result<Option<Coerced>, TypesysError> {
        if typeset.is_empty() {
            return Err(TypesysError::EmptyCoercion);
        }

        let mut safe_target = None;
        for &candidate in typeset {
            let mut all_safe = true;
            for &member in typeset {
                match self.cast(candidate, member).tcc {
                    Tcc::False => return Ok(None),
                    Tcc::Exact | Tcc::Promote => {}
                    Tcc::Convert => all_safe = false,
                }
            }
            if all_safe {
                safe_target = Some(candidate);
            }
        }

        if let Some(ty) = safe_target {
            return Ok(Some(Coerced { ty, safe: true }));
        }

        // Unsafe reduction: highest rank wins, earliest operand on ties.
        let mut best = typeset[0];
        for &ty in &typeset[1..] {
            if self.get_rank(ty) > self.get_rank(best) {
                best = ty;
            }
        }
        Ok(Some(Coerced {
            ty: best,
            safe: false,
        }))
    }

    /// Render a coercion outcome, e.g. `"unsafe coerce to int64"` or
    /// `"coercion is impossible"`.
    pub fn explain_coerce(&self, outcome: Option<Coerced>) -> String {
        match outcome {
            None => "coercion is impossible".to_string(),
            Some(coerced) => format!(
                "{} coerce to {}",
                if coerced.safe { "safe" } else { "unsafe" },
                self.type_name(coerced.ty)
            ),
        }
    }
}
