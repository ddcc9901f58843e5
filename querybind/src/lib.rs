#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![doc = include_str!("../README.md")]

pub use querybind_core::*;

/// Derives [`Shaped`] and [`Reflect`] for a struct or enum.
///
/// Field attributes:
///
/// - `#[tag(url = "key", form = "key,omitempty")]`: the annotations, one per
///   namespace. The binding key is the text before the first separator.
/// - `#[reflect(readonly)]`: never write this field.
/// - `#[reflect(opaque)]`: the field's type does not implement [`Shaped`].
///   It gets an opaque shape and is never written.
///
/// Container attributes:
///
/// - `#[reflect(crate = "path::to::querybind")]`: where generated code finds
///   this crate.
pub use querybind_macros::Reflect;

mod binder;
pub use binder::*;

mod convert;

mod error;
pub use error::*;

mod report;
pub use report::*;

mod tag;
pub use tag::*;

mod values;
pub use values::*;
