use std::collections::HashMap;

use crate::{Reflect, Shape, Shaped, Type};

impl<K: 'static, V: 'static, S: 'static> Shaped for HashMap<K, V, S> {
    const SHAPE: &'static Shape = &const { Shape::new("HashMap", Type::Map) };
}

impl<K: 'static, V: 'static, S: 'static> Reflect for HashMap<K, V, S> {
    fn shape(&self) -> &'static Shape {
        Self::SHAPE
    }
}
