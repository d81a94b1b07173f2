//! Tagged value-or-error results.
//!
//! [`Res<T>`] holds either a value or an [`anyhow::Error`], never both. It adds
//! the chaining helpers and panic recovery that make it comfortable as a
//! stream element; convert to a plain `Result` with [`Res::into_result`] at the
//! edges.
//!
//! ## Example
//! ```
//! use rillet::Res;
//!
//! let parsed = Res::of("21".parse::<i32>()).map(|v| v * 2);
//! assert_eq!(parsed.val(), 42);
//!
//! let bad = Res::of("x".parse::<i32>()).map(|v| v * 2);
//! assert!(bad.is_err());
//! ```

use crate::error::StreamError;
use crate::opt::Opt;
use crate::pair::Pair;
use anyhow::Error;
use std::any::Any;
use std::fmt::{self, Display};
use std::panic::{self, AssertUnwindSafe};

/// Either a value of type `T` or an error.
#[derive(Debug)]
pub struct Res<T>(Result<T, Error>);

impl<T> Res<T> {
    /// A value result.
    pub const fn of_val(value: T) -> Self {
        Self(Ok(value))
    }

    /// An error result.
    pub fn of_err<E: Into<Error>>(err: E) -> Self {
        Self(Err(err.into()))
    }

    /// Adapt a standard `Result`.
    pub fn of<E: Into<Error>>(result: Result<T, E>) -> Self {
        Self(result.map_err(Into::into))
    }

    /// A value result if `opt` holds a value, otherwise an
    /// [`StreamError::UnexpectedEmpty`] error result.
    pub fn of_opt(opt: Opt<T>) -> Self {
        match opt.into_option() {
            Some(v) => Self(Ok(v)),
            None => Self(Err(StreamError::unexpected_empty("Res::of_opt").into())),
        }
    }

    pub const fn is_val(&self) -> bool {
        self.0.is_ok()
    }

    pub const fn is_err(&self) -> bool {
        self.0.is_err()
    }

    /// The value.
    ///
    /// # Panics
    ///
    /// Panics with [`StreamError::UnexpectedEmpty`] on an error result.
    pub fn val(self) -> T {
        match self.0 {
            Ok(v) => v,
            Err(_) => panic!("{}", StreamError::unexpected_empty("Res::val on error result")),
        }
    }

    /// The error.
    ///
    /// # Panics
    ///
    /// Panics with [`StreamError::UnexpectedEmpty`] on a value result.
    pub fn err(self) -> Error {
        match self.0 {
            Ok(_) => panic!("{}", StreamError::unexpected_empty("Res::err on value result")),
            Err(e) => e,
        }
    }

    /// The value, or the unexpected-empty condition instead of a panic.
    pub fn try_val(self) -> Result<T, StreamError> {
        self.0
            .map_err(|_| StreamError::unexpected_empty("Res::try_val on error result"))
    }

    /// The error, or the unexpected-empty condition instead of a panic.
    pub fn try_err(self) -> Result<Error, StreamError> {
        match self.0 {
            Ok(_) => Err(StreamError::unexpected_empty("Res::try_err on value result")),
            Err(e) => Ok(e),
        }
    }

    /// Call `f` with the value, if there is one.
    pub fn if_val<F: FnOnce(&T)>(&self, f: F) {
        if let Ok(v) = &self.0 {
            f(v);
        }
    }

    /// Call `f` with the error, if there is one.
    pub fn if_err<F: FnOnce(&Error)>(&self, f: F) {
        if let Err(e) = &self.0 {
            f(e);
        }
    }

    /// Transform the value; errors pass through.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Res<U> {
        Res(self.0.map(f))
    }

    /// As [`map`](Self::map), but `f` may itself fail.
    pub fn flat_map<U, F: FnOnce(T) -> Res<U>>(self, f: F) -> Res<U> {
        match self.0 {
            Ok(v) => f(v),
            Err(e) => Res(Err(e)),
        }
    }

    /// As [`map`](Self::map), converting a panic inside `f` into an error
    /// result carrying [`StreamError::Recovered`].
    pub fn try_map<U, F: FnOnce(T) -> U>(self, f: F) -> Res<U> {
        match self.0 {
            Ok(v) => match panic::catch_unwind(AssertUnwindSafe(|| f(v))) {
                Ok(u) => Res(Ok(u)),
                Err(payload) => Res(Err(recovered(payload).into())),
            },
            Err(e) => Res(Err(e)),
        }
    }

    /// As [`flat_map`](Self::flat_map) with the panic recovery of
    /// [`try_map`](Self::try_map).
    pub fn try_flat_map<U, F: FnOnce(T) -> Res<U>>(self, f: F) -> Res<U> {
        self.try_map(f).flatten()
    }

    /// Convert into a standard `Result`.
    pub fn into_result(self) -> Result<T, Error> {
        self.0
    }
}

impl<A, B> Res<Pair<A, B>> {
    /// Adapt a two-value fallible return into a result holding a [`Pair`].
    ///
    /// ```
    /// use rillet::{Pair, Res};
    ///
    /// let split = Res::of_pair("k=v".split_once('=').ok_or(anyhow::anyhow!("no '='")));
    /// assert_eq!(split.val(), Pair::of("k", "v"));
    /// ```
    pub fn of_pair<E: Into<Error>>(result: Result<(A, B), E>) -> Self {
        Self(result.map(Pair::from).map_err(Into::into))
    }
}

impl<T> Res<Res<T>> {
    /// Collapse a nested result; an error at either layer wins.
    pub fn flatten(self) -> Res<T> {
        match self.0 {
            Ok(inner) => inner,
            Err(e) => Res(Err(e)),
        }
    }
}

fn recovered(payload: Box<dyn Any + Send>) -> StreamError {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    };
    tracing::warn!(%message, "recovered panic into error result");
    StreamError::recovered(message)
}

impl<T, E: Into<Error>> From<Result<T, E>> for Res<T> {
    fn from(result: Result<T, E>) -> Self {
        Self::of(result)
    }
}

impl<T: Display> Display for Res<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Ok(v) => write!(f, "<val='{v}'>"),
            Err(e) => write!(f, "<err='{e}'>"),
        }
    }
}
