use core::any::Any;

use crate::Shape;

/// Allows querying the [`Shape`] of a type statically.
///
/// Usually derived with `#[derive(Reflect)]`, which implements both this
/// trait and [`Reflect`].
pub trait Shaped: 'static {
    /// The shape of this type
    const SHAPE: &'static Shape;
}

/// Returns `T::SHAPE`. Usable as a [`ShapeFn`](crate::ShapeFn).
#[inline]
pub fn shape_of<T: Shaped>() -> &'static Shape {
    T::SHAPE
}

/// Mutable, type-erased access to a value whose layout is described by a [`Shape`].
///
/// This trait is object safe: binders work with `&mut dyn Reflect` and walk
/// into fields, pointees and list items without knowing the concrete type.
pub trait Reflect: Any + 'static {
    /// The shape of the value behind `self`.
    fn shape(&self) -> &'static Shape;

    /// Mutable access to the field at `index` (declaration order), for structs.
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        let _ = index;
        None
    }

    /// Mutable access to the pointee, for owning pointers.
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        None
    }

    /// Mutable access to the value as a list, for growable sequences.
    fn list_mut(&mut self) -> Option<&mut dyn ListMut> {
        None
    }
}

impl dyn Reflect {
    /// Returns true if the value behind `self` is a `T`.
    #[inline]
    pub fn is<T: Reflect>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    /// Downcasts to a concrete type.
    #[inline]
    pub fn downcast_mut<T: Reflect>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut::<T>()
    }

    /// Downcasts to a concrete type, immutably.
    #[inline]
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }
}

/// Type-erased operations on a growable sequence.
pub trait ListMut {
    /// Number of items.
    fn len(&self) -> usize;

    /// Returns true if the list holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replaces the contents with a freshly allocated sequence of `len`
    /// default (zero) values.
    fn reset(&mut self, len: usize);

    /// Mutable access to the item at `index`.
    fn item_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;
}

static_assertions::assert_obj_safe!(Reflect, ListMut);
static_assertions::assert_impl_all!(Shape: Send, Sync, Copy);
