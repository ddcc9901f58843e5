//! Scalar type identification for shapes.

/// All scalar types a query value can be converted into.
///
/// This enum identifies whether a [`Shape`](crate::Shape) is one of the
/// textual-convertible leaf types: integers, floats, booleans and strings.
///
/// # Example
///
/// ```
/// use querybind_core::{ScalarType, Shaped};
///
/// assert_eq!(u32::SHAPE.scalar_type(), Some(ScalarType::U32));
/// assert_eq!(bool::SHAPE.scalar_type(), Some(ScalarType::Bool));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[non_exhaustive]
pub enum ScalarType {
    /// Primitive type `bool`.
    Bool,
    /// `alloc::string::String`.
    String,
    /// Primitive type `f32`.
    F32,
    /// Primitive type `f64`.
    F64,
    /// Primitive type `u8`.
    U8,
    /// Primitive type `u16`.
    U16,
    /// Primitive type `u32`.
    U32,
    /// Primitive type `u64`.
    U64,
    /// Primitive type `u128`.
    U128,
    /// Primitive type `usize`.
    USize,
    /// Primitive type `i8`.
    I8,
    /// Primitive type `i16`.
    I16,
    /// Primitive type `i32`.
    I32,
    /// Primitive type `i64`.
    I64,
    /// Primitive type `i128`.
    I128,
    /// Primitive type `isize`.
    ISize,
}

impl ScalarType {
    /// The Rust spelling of this type, e.g. `"u16"`.
    pub const fn type_identifier(self) -> &'static str {
        match self {
            ScalarType::Bool => "bool",
            ScalarType::String => "String",
            ScalarType::F32 => "f32",
            ScalarType::F64 => "f64",
            ScalarType::U8 => "u8",
            ScalarType::U16 => "u16",
            ScalarType::U32 => "u32",
            ScalarType::U64 => "u64",
            ScalarType::U128 => "u128",
            ScalarType::USize => "usize",
            ScalarType::I8 => "i8",
            ScalarType::I16 => "i16",
            ScalarType::I32 => "i32",
            ScalarType::I64 => "i64",
            ScalarType::I128 => "i128",
            ScalarType::ISize => "isize",
        }
    }
}

impl core::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.type_identifier())
    }
}
