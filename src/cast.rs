// src/cast.rs
//
// Compatibility codes and the cast engine.

use crate::atoms::TypeId;
use crate::context::TypeContext;

/// Type-compatibility code: what kind of implicit cast, if any, connects an
/// ordered pair of types. The discriminant order matters — overload
/// refinement prefers smaller codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tcc {
    /// No cast permitted.
    False = 0,
    /// Same type. Never stored in the table; produced by the cast engine.
    Exact = 1,
    /// Implicit widening with no information loss.
    Promote = 2,
    /// Narrowing or representation change, possibly lossy.
    Convert = 3,
}

impl Tcc {
    pub fn name(self) -> &'static str {
        match self {
            Tcc::False => "false",
            Tcc::Exact => "exact",
            Tcc::Promote => "promote",
            Tcc::Convert => "convert",
        }
    }
}

/// How one type casts to another. `distance` is meaningful only for
/// `Convert`: `rank(to) - rank(from)`, positive for widening along the rank
/// axis, negative for narrowing, zero for lateral moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastDescriptor {
    pub tcc: Tcc,
    pub distance: i32,
}

impl TypeContext {
    /// Classify the cast from `from` to `to`.
    pub fn cast(&self, from: TypeId, to: TypeId) -> CastDescriptor {
        let tcc = if from == to {
            Tcc::Exact
        } else {
            self.get_compatibility(from, to)
        };

        let distance = if tcc == Tcc::Convert {
            self.get_rank(to) - self.get_rank(from)
        } else {
            0
        };

        CastDescriptor { tcc, distance }
    }

    /// Human-readable cast verdict, e.g. `"int32->float32 :: convert:up"`.
    /// Converts carry an `:up`/`:down`/`:invalid` direction suffix; the
    /// other codes print bare.
    pub fn explain_cast(&self, from: TypeId, to: TypeId) -> String {
        let cd = self.cast(from, to);
        let mut out = format!(
            "{}->{} :: {}",
            self.type_name(from),
            self.type_name(to),
            cd.tcc.name()
        );

        if cd.tcc == Tcc::Convert {
            out.push(':');
            if cd.distance > 0 {
                out.push_str("up");
            } else if cd.distance < 0 {
                out.push_str("down");
            } else {
                out.push_str("invalid");
            }
        }
        out
    }

    /// Name-based variant of `explain_cast`; interns unknown names.
    pub fn explain_cast_names(&mut self, from: &str, to: &str) -> String {
        let from = self.get_type(from);
        let to = self.get_type(to);
        self.explain_cast(from, to)
    }

    /// The stored compatibility code for the pair, as its wire name.
    pub fn explain_compatibility(&self, from: TypeId, to: TypeId) -> String {
        self.get_compatibility(from, to).name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_to_self_is_exact() {
        let mut ctx = TypeContext::new();
        let a = ctx.get_type("a");
        let cd = ctx.cast(a, a);
        assert_eq!(cd.tcc, Tcc::Exact);
        assert_eq!(cd.distance, 0);
    }

    #[test]
    fn cast_without_rule_is_false() {
        let mut ctx = TypeContext::new();
        let a = ctx.get_type("a");
        let b = ctx.get_type("b");
        assert_eq!(ctx.cast(a, b).tcc, Tcc::False);
    }

    #[test]
    fn convert_distance_is_rank_delta() {
        let mut ctx = TypeContext::new();
        let a = ctx.get_type("a");
        let b = ctx.get_type("b");
        ctx.append_rank(a);
        ctx.append_rank(b);
        ctx.set_compatibility(a, b, Tcc::Convert);
        ctx.set_compatibility(b, a, Tcc::Convert);

        assert_eq!(ctx.cast(a, b).distance, 1);
        assert_eq!(ctx.cast(b, a).distance, -1);
    }

    #[test]
    fn promote_has_zero_distance() {
        let mut ctx = TypeContext::new();
        let a = ctx.get_type("a");
        let b = ctx.get_type("b");
        ctx.append_rank(a);
        ctx.append_rank(b);
        ctx.set_compatibility(a, b, Tcc::Promote);
        let cd = ctx.cast(a, b);
        assert_eq!(cd.tcc, Tcc::Promote);
        assert_eq!(cd.distance, 0);
    }

    #[test]
    fn explain_cast_false_has_no_suffix() {
        let mut ctx = TypeContext::new();
        let a = ctx.get_type("int32");
        let b = ctx.get_type("foo");
        assert_eq!(ctx.explain_cast(a, b), "int32->foo :: false");
    }

    #[test]
    fn explain_cast_lateral_convert_is_invalid() {
        // Two unranked types connected by a convert rule sit at the same
        // rank, so the direction is unresolvable.
        let mut ctx = TypeContext::new();
        let a = ctx.get_type("a");
        let b = ctx.get_type("b");
        ctx.set_compatibility(a, b, Tcc::Convert);
        assert_eq!(ctx.explain_cast(a, b), "a->b :: convert:invalid");
    }
}
