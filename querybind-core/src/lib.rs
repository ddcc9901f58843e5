#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod scalar;
pub use scalar::*;

mod shape;
pub use shape::*;

mod field;
pub use field::*;

mod reflect;
pub use reflect::*;

// Definition for `core::` types
mod impls_core;

// Definition for `alloc::` types
mod impls_alloc;

// Definition for `std::` types (that aren't in `alloc` or `core`)
#[cfg(feature = "std")]
mod impls_std;

#[cfg(feature = "bytes")]
mod impls_bytes;

#[cfg(feature = "indexmap")]
mod impls_indexmap;
