use crate::{Reflect, ScalarType, Shape, Shaped, Type, shape_of};

macro_rules! impl_scalar {
    ($($ty:ty => $st:ident),* $(,)?) => {
        $(
            impl Shaped for $ty {
                const SHAPE: &'static Shape =
                    &const { Shape::new(stringify!($ty), Type::Scalar(ScalarType::$st)) };
            }

            impl Reflect for $ty {
                fn shape(&self) -> &'static Shape {
                    Self::SHAPE
                }
            }
        )*
    };
}

impl_scalar! {
    bool => Bool,
    f32 => F32,
    f64 => F64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => USize,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => ISize,
}

impl<T: Shaped> Shaped for Option<T> {
    const SHAPE: &'static Shape = &const { Shape::new("Option", Type::Option(shape_of::<T>)) };
}

impl<T: Shaped> Reflect for Option<T> {
    fn shape(&self) -> &'static Shape {
        Self::SHAPE
    }
}
