// src/errors.rs
//! Caller-error diagnostics for the resolution APIs.
//!
//! Only malformed inputs surface here. "No viable result" outcomes
//! (impossible coercion, no matching overload) are ordinary return values,
//! never errors.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum TypesysError {
    #[error("cannot coerce an empty set of operand types")]
    #[diagnostic(
        code(TY0001),
        help("pass at least one operand type to coerce")
    )]
    EmptyCoercion,

    #[error("call signature has no arguments")]
    #[diagnostic(
        code(TY0002),
        help("overload resolution needs at least one argument position")
    )]
    EmptySignature,

    #[error("overload table length {table} is not a multiple of signature arity {arity}")]
    #[diagnostic(
        code(TY0003),
        help("overloads are row-major: each version must list exactly one type per argument")
    )]
    OverloadShape { table: usize, arity: usize },
}
