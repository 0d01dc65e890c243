// src/machine.rs
//
// Seeding for the scalar machine-type lattice.

use crate::cast::Tcc;
use crate::context::TypeContext;

/// The machine types, in rank order. Booleans sit at the bottom, complex128
/// at the top; unsigned precedes signed at each integer width.
pub const MACHINE_TYPES: [&str; 13] = [
    "boolean",
    "uint8",
    "int8",
    "uint16",
    "int16",
    "uint32",
    "int32",
    "uint64",
    "int64",
    "float32",
    "float64",
    "complex64",
    "complex128",
];

/// Seed `ctx` with the machine-type lattice: ranks in `MACHINE_TYPES`
/// order, a universal `Convert` floor over every ordered pair of distinct
/// types, then the targeted `Promote` overrides. The floor must be laid
/// down before the overrides.
pub fn fill_machine_types(ctx: &mut TypeContext) {
    for name in MACHINE_TYPES {
        let ty = ctx.get_type(name);
        ctx.append_rank(ty);
    }

    for from_name in MACHINE_TYPES {
        for to_name in MACHINE_TYPES {
            let from = ctx.get_type(from_name);
            let to = ctx.get_type(to_name);
            if from != to {
                ctx.set_compatibility(from, to, Tcc::Convert);
            }
        }
    }

    // Intra-sign integer widening.
    fill_integer_rules(ctx, "uint");
    fill_integer_rules(ctx, "int");

    can_promote(ctx, "float32", "float64");
    can_promote(ctx, "complex64", "complex128");

    // Small integers fit float32's 24-bit mantissa.
    can_promote(ctx, "int8", "float32");
    can_promote(ctx, "int16", "float32");
    can_promote(ctx, "uint8", "float32");
    can_promote(ctx, "uint16", "float32");

    // 32-bit integers fit float64's 53-bit mantissa.
    can_promote(ctx, "int32", "float64");
    can_promote(ctx, "uint32", "float64");
}

/// Promote each `{prefix}{b1}` to every wider `{prefix}{b2}`.
fn fill_integer_rules(ctx: &mut TypeContext, prefix: &str) {
    const BITS: [u32; 4] = [8, 16, 32, 64];

    for (i, b1) in BITS.iter().enumerate() {
        let from = ctx.get_type(&format!("{prefix}{b1}"));
        for b2 in &BITS[i + 1..] {
            let to = ctx.get_type(&format!("{prefix}{b2}"));
            ctx.set_compatibility(from, to, Tcc::Promote);
        }
    }
}

fn can_promote(ctx: &mut TypeContext, from: &str, to: &str) {
    let from = ctx.get_type(from);
    let to = ctx.get_type(to);
    ctx.set_compatibility(from, to, Tcc::Promote);
}
