//! Errors raised while building expressions and arrays.
//!
//! Every fallible operation in this crate fails before any array element is
//! read. Rank mismatches never get this far: they are type errors (see
//! [`Broadcast`]). What remains is the run-time part of a shape, i.e. the
//! extent of each axis, and the number of elements handed to an [`Array`].
//!
//! [`Broadcast`]: super::Broadcast
//! [`Array`]: super::Array

use thiserror::Error;

/// Convenience alias used by the fallible constructors in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Why an expression or an [`Array`] could not be built.
///
/// [`Array`]: super::Array
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Two operands of the same rank have different extents.
    ///
    /// `left` and `right` are the rendered [`Domain`]s of the operands.
    ///
    /// [`Domain`]: super::Domain
    #[error("domain mismatch in `{op}`: {left} vs {right}")]
    DomainMismatch {
        op: &'static str,
        left: String,
        right: String,
    },

    /// An [`Array`] was given the wrong number of elements for its domain.
    ///
    /// [`Array`]: super::Array
    #[error("domain needs {expected} elements but {actual} were supplied")]
    LengthMismatch {
        expected: usize,
        actual: usize,
    },
}

impl Error {
    pub(crate) fn domain_mismatch(
        op: &'static str,
        left: impl std::fmt::Display,
        right: impl std::fmt::Display,
    ) -> Self {
        let error = Error::DomainMismatch {op, left: left.to_string(), right: right.to_string()};
        tracing::debug!(%error, "rejected expression");
        error
    }
}
