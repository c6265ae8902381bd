use serde_json::Value;

/// Values that can stand for "nothing stored".
///
/// [`OrderedMap::get_or_default`](crate::OrderedMap::get_or_default) treats a nullish value the
/// same as a missing key. Only `None` and JSON `null` are nullish; empty strings, zeros and
/// `false` are ordinary values.
pub trait Nullish {
    fn is_nullish(&self) -> bool;
}

impl<T> Nullish for Option<T> {
    fn is_nullish(&self) -> bool {
        self.is_none()
    }
}

impl Nullish for Value {
    fn is_nullish(&self) -> bool {
        self.is_null()
    }
}

impl<T: Nullish + ?Sized> Nullish for &T {
    fn is_nullish(&self) -> bool {
        (**self).is_nullish()
    }
}

impl<T: Nullish + ?Sized> Nullish for Box<T> {
    fn is_nullish(&self) -> bool {
        (**self).is_nullish()
    }
}

macro_rules! never_nullish {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Nullish for $ty {
                fn is_nullish(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_nullish!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
);

impl<T> Nullish for Vec<T> {
    fn is_nullish(&self) -> bool {
        false
    }
}
