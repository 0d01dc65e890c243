// src/overload.rs
//
// Two-tier overload resolution: a symmetric filter that keeps every
// equally-rated candidate, then an asymmetric tie-breaker that walks the
// argument positions left to right.

use std::cmp::Ordering;

use smallvec::{smallvec, SmallVec};

use crate::atoms::TypeId;
use crate::cast::{CastDescriptor, Tcc};
use crate::context::TypeContext;
use crate::errors::TypesysError;

/// How per-version ratings are compared in the symmetric filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingOrder {
    /// Compare the convert and promote counters each on their own: a rating
    /// ranks below another as soon as either counter is strictly smaller.
    /// This relation is not transitive, so which candidates survive can
    /// depend on version order. This is the default.
    #[default]
    Independent,
    /// Ordinary lexicographic order on `(convert, promote)`. Total, so the
    /// surviving set is order-independent. Opt in via
    /// `TypeContext::set_rating_order`.
    Lexicographic,
}

/// Per-version cast accounting: how many argument casts were promotions and
/// how many were conversions. Exact casts count for neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rating {
    promote: u16,
    convert: u16,
}

impl Rating {
    fn new() -> Self {
        Rating {
            promote: 0,
            convert: 0,
        }
    }

    /// The sentinel for versions with an impossible argument cast. Also the
    /// initial "best" that any viable rating displaces.
    fn bad() -> Self {
        Rating {
            promote: u16::MAX,
            convert: u16::MAX,
        }
    }

    fn ranks_below(self, other: Rating, order: RatingOrder) -> bool {
        match order {
            RatingOrder::Independent => {
                self.convert < other.convert || self.promote < other.promote
            }
            RatingOrder::Lexicographic => {
                (self.convert, self.promote) < (other.convert, other.promote)
            }
        }
    }
}

/// Outcome of asymmetric overload resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestOverload {
    /// Exactly one version survived.
    Unique(usize),
    /// This many versions were still tied after every argument position.
    Ambiguous(usize),
    /// No version was viable for the signature.
    NoMatch,
}

impl BestOverload {
    /// The host-facing integer-or-null shape: the winning index, or `None`
    /// for both no-match and lingering ambiguity.
    pub fn index(self) -> Option<usize> {
        match self {
            BestOverload::Unique(i) => Some(i),
            BestOverload::Ambiguous(_) | BestOverload::NoMatch => None,
        }
    }
}

/// Casts ordered by `(tcc, distance)`, both signed: a smaller code always
/// wins, and among converts a narrowing (negative distance) outranks a
/// widening.
fn compare_cast(a: CastDescriptor, b: CastDescriptor) -> Ordering {
    (a.tcc as i32, a.distance).cmp(&(b.tcc as i32, b.distance))
}

impl TypeContext {
    /// Symmetric overload resolution, in the manner of C++ overload
    /// ranking: rate every version against the call signature, then keep
    /// all versions tied with the best rating, in version order.
    ///
    /// `overloads` is row-major: version `v`'s argument `j` sits at
    /// `v * sig.len() + j`. An empty result means no version is viable.
    pub fn select_overload(
        &self,
        sig: &[TypeId],
        overloads: &[TypeId],
    ) -> Result<Vec<usize>, TypesysError> {
        let nargs = sig.len();
        if nargs == 0 {
            return Err(TypesysError::EmptySignature);
        }
        if overloads.len() % nargs != 0 {
            return Err(TypesysError::OverloadShape {
                table: overloads.len(),
                arity: nargs,
            });
        }
        let nvers = overloads.len() / nargs;

        // Rate each version left to right; an impossible argument cast
        // marks the whole version bad and stops rating it.
        let mut ratings: SmallVec<[Rating; 16]> = smallvec![Rating::new(); nvers];
        let mut badct = 0;
        for (v, rating) in ratings.iter_mut().enumerate() {
            let entry = &overloads[v * nargs..(v + 1) * nargs];
            for (j, &arg) in entry.iter().enumerate() {
                match self.cast(arg, sig[j]).tcc {
                    Tcc::False => {
                        *rating = Rating::bad();
                        badct += 1;
                        break;
                    }
                    Tcc::Promote => rating.promote += 1,
                    Tcc::Convert => rating.convert += 1,
                    Tcc::Exact => {}
                }
            }
        }

        if badct == nvers {
            return Ok(Vec::new());
        }

        let order = self.rating_order();
        let mut best = Rating::bad();
        let mut selected = Vec::new();
        for (v, &rating) in ratings.iter().enumerate() {
            if rating.ranks_below(best, order) {
                best = rating;
                selected.clear();
                selected.push(v);
            } else if rating == best {
                selected.push(v);
            }
        }
        Ok(selected)
    }

    /// Asymmetric overload resolution: run the symmetric filter, then break
    /// ties by walking argument positions left to right, at each position
    /// keeping only the versions whose cast is minimal under
    /// `(tcc, distance)`. The leftmost argument is the most significant.
    pub fn select_best_overload(
        &self,
        sig: &[TypeId],
        overloads: &[TypeId],
    ) -> Result<BestOverload, TypesysError> {
        let nargs = sig.len();
        let mut selected: SmallVec<[usize; 16]> =
            SmallVec::from_vec(self.select_overload(sig, overloads)?);

        match selected.len() {
            0 => return Ok(BestOverload::NoMatch),
            1 => return Ok(BestOverload::Unique(selected[0])),
            _ => {}
        }

        for j in 0..nargs {
            let mut best = self.cast(overloads[selected[0] * nargs + j], sig[j]);
            let mut kept: SmallVec<[usize; 16]> = smallvec![selected[0]];
            for &v in &selected[1..] {
                let cd = self.cast(overloads[v * nargs + j], sig[j]);
                match compare_cast(cd, best) {
                    Ordering::Less => {
                        best = cd;
                        kept.clear();
                        kept.push(v);
                    }
                    Ordering::Equal => kept.push(v),
                    Ordering::Greater => {}
                }
            }
            selected = kept;
            if selected.len() == 1 {
                return Ok(BestOverload::Unique(selected[0]));
            }
        }
        Ok(BestOverload::Ambiguous(selected.len()))
    }
}
