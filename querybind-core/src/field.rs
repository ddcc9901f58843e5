use crate::{Shape, ShapeFn};

/// One annotation attached to a field, under a caller-chosen namespace.
///
/// `#[tag(url = "symbol,omitempty")]` becomes `Tag { ns: "url", value: "symbol,omitempty" }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tag {
    /// Namespace of the annotation (e.g. `"url"`, `"form"`, `"json"`).
    pub ns: &'static str,

    /// Raw annotation value, modifiers included.
    pub value: &'static str,
}

impl Tag {
    /// Creates a new tag.
    pub const fn new(ns: &'static str, value: &'static str) -> Self {
        Self { ns, value }
    }
}

/// Describes a field in a struct or tuple struct
#[derive(Clone, Copy, Debug)]
pub struct Field {
    /// name of the struct field (for tuple structs, this is the 0-based index)
    pub name: &'static str,

    /// shape of the field's type
    pub shape: ShapeFn,

    /// annotations, in the order they were written
    pub tags: &'static [Tag],

    /// whether the field may be written through reflection
    pub settable: bool,
}

impl Field {
    /// Creates a new settable field.
    pub const fn new(name: &'static str, shape: ShapeFn, tags: &'static [Tag]) -> Self {
        Self {
            name,
            shape,
            tags,
            settable: true,
        }
    }

    /// Marks the field as readonly (or not).
    pub const fn readonly(mut self, readonly: bool) -> Self {
        self.settable = !readonly;
        self
    }

    /// Returns the shape of the field's type
    pub fn shape(&self) -> &'static Shape {
        (self.shape)()
    }

    /// Gets the raw annotation value under the given namespace.
    ///
    /// If the namespace appears more than once, the first one wins.
    #[inline]
    pub fn tag(&self, ns: &str) -> Option<&'static str> {
        self.tags.iter().find(|t| t.ns == ns).map(|t| t.value)
    }

    /// Returns true if the field may be written through reflection.
    #[inline]
    pub const fn is_settable(&self) -> bool {
        self.settable
    }
}

/// Describes the kind of struct
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum StructKind {
    /// A struct with named fields: `struct S { a: u32 }`
    Struct,
    /// A tuple struct: `struct S(u32);`
    TupleStruct,
    /// A unit struct: `struct S;`
    Unit,
}

/// Common fields for struct-like types
#[derive(Clone, Copy, Debug)]
pub struct StructType {
    /// the kind of struct
    pub kind: StructKind,

    /// all fields, in declaration order
    pub fields: &'static [Field],
}

impl StructType {
    /// Creates a new struct type.
    pub const fn new(kind: StructKind, fields: &'static [Field]) -> Self {
        Self { kind, fields }
    }

    /// Finds a field by its Rust name.
    pub fn field_by_name(&self, name: &str) -> Option<(usize, &'static Field)> {
        self.fields.iter().enumerate().find(|(_, f)| f.name == name)
    }
}
