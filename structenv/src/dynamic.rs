use std::{any::Any, fmt};

use crate::{Node, Record, Slot, Tree};

/// A polymorphic field.
///
/// A `Dynamic` either holds something that can be written through, a scalar
/// or a record, or something that can't. Only the former ever receives a
/// value.
#[derive(Default)]
pub enum Dynamic {
    /// Holds nothing.
    #[default]
    Empty,
    /// A writable scalar. Composed as a leaf of the scalar's own kind.
    Scalar(Scalar),
    /// A writable record. Traversed like a nested record field.
    Record(Box<dyn Record + Send>),
    /// A value held by copy. It is never written to.
    Value(Box<dyn Any + Send>),
}

impl Dynamic {
    pub fn scalar(value: impl Into<Scalar>) -> Self {
        Self::Scalar(value.into())
    }

    pub fn record<R: Record + Send>(record: R) -> Self {
        Self::Record(Box::new(record))
    }

    pub fn value<T: Any + Send>(value: T) -> Self {
        Self::Value(Box::new(value))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_scalar_mut(&mut self) -> Option<&mut Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Returns the held record or value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Record(record) => record.as_any().downcast_ref(),
            Self::Value(value) => value.downcast_ref(),
            Self::Empty | Self::Scalar(_) => None,
        }
    }

    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        match self {
            Self::Record(record) => record.as_any_mut().downcast_mut(),
            Self::Value(value) => value.downcast_mut(),
            Self::Empty | Self::Scalar(_) => None,
        }
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Scalar(scalar) => f.debug_tuple("Scalar").field(scalar).finish(),
            Self::Record(_) => f.debug_tuple("Record").finish_non_exhaustive(),
            Self::Value(_) => f.debug_tuple("Value").finish_non_exhaustive(),
        }
    }
}

impl Node for Dynamic {
    fn compose<'a>(&'a mut self, prefix: &str, name: &str, tree: &mut Tree<'a>) {
        match self {
            Self::Record(record) => {
                debug_trace!(tree.debug(), field = name, "dynamic field holds a record");
                record.compose(prefix, name, tree);
            }
            Self::Scalar(scalar) => tree.push(prefix, name, scalar.slot()),
            held => tree.push(prefix, name, Slot::Dynamic(held)),
        }
    }

    fn compose_embedded<'a>(&'a mut self, prefix: &str, name: &str, tree: &mut Tree<'a>) {
        match self {
            Self::Record(record) => record.compose_embedded(prefix, name, tree),
            _ => tree.skip_embedded(name),
        }
    }

    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

/// An owned scalar held by a [`Dynamic`].
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
}

impl Scalar {
    pub fn slot(&mut self) -> Slot<'_> {
        match self {
            Self::Text(v) => Slot::Text(v),
            Self::Bool(v) => Slot::Bool(v),
            Self::I8(v) => Slot::I8(v),
            Self::I16(v) => Slot::I16(v),
            Self::I32(v) => Slot::I32(v),
            Self::I64(v) => Slot::I64(v),
            Self::Isize(v) => Slot::Isize(v),
            Self::U8(v) => Slot::U8(v),
            Self::U16(v) => Slot::U16(v),
            Self::U32(v) => Slot::U32(v),
            Self::U64(v) => Slot::U64(v),
            Self::Usize(v) => Slot::Usize(v),
            Self::F32(v) => Slot::F32(v),
            Self::F64(v) => Slot::F64(v),
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

scalar_from! {
    String => Text,
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
