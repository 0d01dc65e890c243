// src/lib.rs

pub mod atoms;
pub mod cast;
pub mod cli;
pub mod coerce;
pub mod context;
pub mod errors;
pub mod machine;
pub mod overload;

#[cfg(test)]
mod prop_tests;

pub use atoms::{TraitId, TypeId};
pub use cast::{CastDescriptor, Tcc};
pub use coerce::Coerced;
pub use context::TypeContext;
pub use errors::TypesysError;
pub use machine::{fill_machine_types, MACHINE_TYPES};
pub use overload::{BestOverload, RatingOrder};
