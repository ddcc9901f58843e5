use indexmap::IndexMap;

use crate::{Reflect, Shape, Shaped, Type};

impl<K: 'static, V: 'static, S: 'static> Shaped for IndexMap<K, V, S> {
    const SHAPE: &'static Shape = &const { Shape::new("IndexMap", Type::Map) };
}

impl<K: 'static, V: 'static, S: 'static> Reflect for IndexMap<K, V, S> {
    fn shape(&self) -> &'static Shape {
        Self::SHAPE
    }
}
