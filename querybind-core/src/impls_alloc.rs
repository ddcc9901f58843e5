use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{ListMut, Reflect, ScalarType, Shape, Shaped, Type, shape_of};

impl Shaped for String {
    const SHAPE: &'static Shape =
        &const { Shape::new("String", Type::Scalar(ScalarType::String)) };
}

impl Reflect for String {
    fn shape(&self) -> &'static Shape {
        Self::SHAPE
    }
}

// Items are created through `Default` when a list is reset, so only
// defaultable element types get a list shape.
impl<T: Shaped + Reflect + Default> Shaped for Vec<T> {
    const SHAPE: &'static Shape = &const { Shape::new("Vec", Type::List(shape_of::<T>)) };
}

impl<T: Shaped + Reflect + Default> Reflect for Vec<T> {
    fn shape(&self) -> &'static Shape {
        Self::SHAPE
    }

    fn list_mut(&mut self) -> Option<&mut dyn ListMut> {
        Some(self)
    }
}

impl<T: Shaped + Reflect + Default> ListMut for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn reset(&mut self, len: usize) {
        *self = core::iter::repeat_with(T::default).take(len).collect();
    }

    fn item_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.get_mut(index).map(|item| item as &mut dyn Reflect)
    }
}

impl<T: Shaped + Reflect> Shaped for Box<T> {
    const SHAPE: &'static Shape = &const { Shape::new("Box", Type::Pointer(shape_of::<T>)) };
}

impl<T: Shaped + Reflect> Reflect for Box<T> {
    fn shape(&self) -> &'static Shape {
        Self::SHAPE
    }

    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(&mut **self)
    }
}

impl<K: 'static, V: 'static> Shaped for BTreeMap<K, V> {
    const SHAPE: &'static Shape = &const { Shape::new("BTreeMap", Type::Map) };
}

impl<K: 'static, V: 'static> Reflect for BTreeMap<K, V> {
    fn shape(&self) -> &'static Shape {
        Self::SHAPE
    }
}
