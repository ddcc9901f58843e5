use bytes::Bytes;

use crate::{Reflect, Shape, Shaped, Type};

impl Shaped for Bytes {
    const SHAPE: &'static Shape = &const { Shape::new("Bytes", Type::Bytes) };
}

impl Reflect for Bytes {
    fn shape(&self) -> &'static Shape {
        Self::SHAPE
    }
}
