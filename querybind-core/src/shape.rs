use core::fmt;

use crate::{ScalarType, StructType};

/// Returns the shape of another type, lazily.
///
/// The layer of indirection allows for cyclic type definitions.
pub type ShapeFn = fn() -> &'static Shape;

/// Schema for reflection of a type.
///
/// Contains everything the binder needs to decide whether and how a value
/// can be written from text: the type's name and its structural [`Type`].
#[derive(Clone, Copy)]
pub struct Shape {
    /// The type's name, without generic parameters (e.g. `"Vec"`, `"Order"`).
    pub type_identifier: &'static str,

    /// Structural description of the type.
    pub ty: Type,
}

impl Shape {
    /// Creates a new shape.
    pub const fn new(type_identifier: &'static str, ty: Type) -> Self {
        Self {
            type_identifier,
            ty,
        }
    }

    /// Returns the scalar type if this shape is a known scalar.
    #[inline]
    pub const fn scalar_type(&self) -> Option<ScalarType> {
        match self.ty {
            Type::Scalar(st) => Some(st),
            _ => None,
        }
    }

    /// Returns the struct definition if this shape is a struct.
    #[inline]
    pub const fn struct_type(&self) -> Option<StructType> {
        match self.ty {
            Type::Struct(st) => Some(st),
            _ => None,
        }
    }

    /// Returns true if values of this shape are raw byte sequences: either
    /// an opaque byte buffer or a list whose element is `u8`.
    pub fn is_bytes(&self) -> bool {
        match self.ty {
            Type::Bytes => true,
            Type::List(elem) => matches!(elem().scalar_type(), Some(ScalarType::U8)),
            _ => false,
        }
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("type_identifier", &self.type_identifier)
            .field("kind", &self.ty.kind_str())
            .finish()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_identifier)
    }
}

/// The structural definition of a shape.
#[derive(Clone, Copy, Debug)]
pub enum Type {
    /// A textual-convertible leaf type.
    Scalar(ScalarType),
    /// An opaque raw byte buffer (e.g. `bytes::Bytes`).
    Bytes,
    /// A growable ordered sequence; carries the element shape.
    List(ShapeFn),
    /// An optional value; carries the inner shape.
    Option(ShapeFn),
    /// A key/value mapping.
    Map,
    /// An owning pointer; carries the pointee shape.
    Pointer(ShapeFn),
    /// A user-defined struct with its field table.
    Struct(StructType),
    /// A user-defined enum.
    Enum,
    /// Anything else.
    Opaque,
}

impl Type {
    /// Returns the kind of this type as a string, for diagnostics.
    #[inline]
    pub const fn kind_str(&self) -> &'static str {
        match self {
            Type::Scalar(_) => "scalar",
            Type::Bytes => "bytes",
            Type::List(_) => "list",
            Type::Option(_) => "option",
            Type::Map => "map",
            Type::Pointer(_) => "pointer",
            Type::Struct(_) => "struct",
            Type::Enum => "enum",
            Type::Opaque => "opaque",
        }
    }
}
