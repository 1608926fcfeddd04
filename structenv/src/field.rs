use std::fmt;

use crate::Dynamic;

/// A leaf discovered while composing the tree.
///
/// The field borrows its storage from the target struct for as long as the
/// tree lives; it never owns the data.
#[derive(Debug)]
pub struct Field<'a> {
    pub(crate) name: String,
    pub(crate) key: String,
    pub(crate) slot: Slot<'a>,
}

impl<'a> Field<'a> {
    pub fn new(name: impl Into<String>, key: impl Into<String>, slot: Slot<'a>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            slot,
        }
    }

    /// The structural name of the field. Only used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The environment variable this field is filled from.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> Kind {
        self.slot.kind()
    }

    pub fn slot(&self) -> &Slot<'a> {
        &self.slot
    }

    pub fn slot_mut(&mut self) -> &mut Slot<'a> {
        &mut self.slot
    }
}

/// Exclusive access to the storage behind a leaf.
#[derive(Debug)]
pub enum Slot<'a> {
    Text(&'a mut String),
    Bool(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
    /// A polymorphic field that couldn't be resolved while composing.
    ///
    /// Composed trees only hold empty or by-copy `Dynamic`s here. A
    /// hand-built field may also point at a scalar, which is filled through.
    Dynamic(&'a mut Dynamic),
    /// A leaf that can't be filled, such as a sequence.
    Unsupported,
}

impl Slot<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Text(_) => Kind::Text,
            Self::Bool(_) => Kind::Bool,
            Self::I8(_) => Kind::I8,
            Self::I16(_) => Kind::I16,
            Self::I32(_) => Kind::I32,
            Self::I64(_) => Kind::I64,
            Self::Isize(_) => Kind::Isize,
            Self::U8(_) => Kind::U8,
            Self::U16(_) => Kind::U16,
            Self::U32(_) => Kind::U32,
            Self::U64(_) => Kind::U64,
            Self::Usize(_) => Kind::Usize,
            Self::F32(_) => Kind::F32,
            Self::F64(_) => Kind::F64,
            Self::Dynamic(_) => Kind::Dynamic,
            Self::Unsupported => Kind::Unsupported,
        }
    }

    /// Renders the value currently stored behind the slot. Slots without a
    /// textual form render as an empty string.
    pub fn current(&self) -> String {
        match self {
            Self::Text(v) => (**v).clone(),
            Self::Bool(v) => v.to_string(),
            Self::I8(v) => v.to_string(),
            Self::I16(v) => v.to_string(),
            Self::I32(v) => v.to_string(),
            Self::I64(v) => v.to_string(),
            Self::Isize(v) => v.to_string(),
            Self::U8(v) => v.to_string(),
            Self::U16(v) => v.to_string(),
            Self::U32(v) => v.to_string(),
            Self::U64(v) => v.to_string(),
            Self::Usize(v) => v.to_string(),
            Self::F32(v) => v.to_string(),
            Self::F64(v) => v.to_string(),
            Self::Dynamic(_) | Self::Unsupported => String::new(),
        }
    }
}

/// The semantic type of a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Text,
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    Dynamic,
    Unsupported,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "string",
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Dynamic => "dynamic",
            Self::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}
