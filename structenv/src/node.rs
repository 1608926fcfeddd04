use std::{
    any::Any,
    collections::{BTreeMap, HashMap},
    fmt::Display,
    hash::BuildHasher,
};

use crate::{Slot, Tree, join};

/// A value that can sit somewhere inside a target struct.
///
/// Implemented for the scalar types, for the containers the composer knows how
/// to walk, and by `#[derive(Record)]` for user structs.
pub trait Node {
    /// Adds the leaves reachable from this value to `tree`. `name` is the
    /// value's own name segment and `prefix` the key of its parent.
    fn compose<'a>(&'a mut self, prefix: &str, name: &str, tree: &mut Tree<'a>);

    /// Like [`compose`](Node::compose) for an embedded field, which contributes
    /// no name segment. Only records can be embedded; everything else is
    /// skipped.
    fn compose_embedded<'a>(&'a mut self, prefix: &str, name: &str, tree: &mut Tree<'a>) {
        let _ = prefix;
        tree.skip_embedded(name);
    }

    /// Whether a keyed container entry holding this value should be skipped.
    fn is_absent(&self) -> bool {
        false
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }
}

/// A struct whose fields are walked by the composer.
///
/// Implement this with `#[derive(Record)]`.
pub trait Record: Node + Any {
    /// The prefix of every key below this record when it is the root of a
    /// parse: the uppercased type name unless overridden with
    /// `#[env(prefix = "...")]`.
    fn root_prefix(&self) -> String;

    /// Composes every writable field, in declaration order, under `prefix`.
    fn compose_fields<'a>(&'a mut self, prefix: &str, tree: &mut Tree<'a>);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

macro_rules! leaf {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Node for $ty {
                fn compose<'a>(&'a mut self, prefix: &str, name: &str, tree: &mut Tree<'a>) {
                    tree.push(prefix, name, Slot::$variant(self));
                }
            }
        )*
    };
}

leaf! {
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

impl<T: Node + Default> Node for Option<T> {
    fn compose<'a>(&'a mut self, prefix: &str, name: &str, tree: &mut Tree<'a>) {
        if self.is_none() {
            debug_trace!(tree.debug(), field = name, "field is empty, initializing new one");
        }
        self.get_or_insert_with(T::default).compose(prefix, name, tree);
    }

    fn compose_embedded<'a>(&'a mut self, prefix: &str, name: &str, tree: &mut Tree<'a>) {
        if self.is_none() {
            debug_trace!(tree.debug(), field = name, "field is empty, initializing new one");
        }
        self.get_or_insert_with(T::default)
            .compose_embedded(prefix, name, tree);
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: Node + ?Sized> Node for Box<T> {
    fn compose<'a>(&'a mut self, prefix: &str, name: &str, tree: &mut Tree<'a>) {
        (**self).compose(prefix, name, tree);
    }

    fn compose_embedded<'a>(&'a mut self, prefix: &str, name: &str, tree: &mut Tree<'a>) {
        (**self).compose_embedded(prefix, name, tree);
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        (**self).as_record_mut()
    }
}

/// Sequences are opaque: they produce a leaf that is never filled.
impl<T> Node for Vec<T> {
    fn compose<'a>(&'a mut self, prefix: &str, name: &str, tree: &mut Tree<'a>) {
        tree.push(prefix, name, Slot::Unsupported);
    }
}

impl<K: Display, V: Node, S: BuildHasher> Node for HashMap<K, V, S> {
    fn compose<'a>(&'a mut self, prefix: &str, name: &str, tree: &mut Tree<'a>) {
        compose_entries(self.iter_mut(), &join(prefix, name), tree);
    }
}

impl<K: Display, V: Node> Node for BTreeMap<K, V> {
    fn compose<'a>(&'a mut self, prefix: &str, name: &str, tree: &mut Tree<'a>) {
        compose_entries(self.iter_mut(), &join(prefix, name), tree);
    }
}

/// Walks keyed container entries in ascending key order, so the order of
/// leaves doesn't depend on the container's iteration order.
///
/// Each entry is composed under its rendered key as the name segment. A
/// scalar entry therefore gets the key `PREFIX_ENTRY` (`ROOT_CFG_X` for key
/// `x` of field `cfg`), with no type name appended, and a record entry puts
/// its fields below it (`ROOT_CFG_X_BAR`).
fn compose_entries<'a, K, V, I>(entries: I, prefix: &str, tree: &mut Tree<'a>)
where
    K: Display + 'a,
    V: Node + 'a,
    I: Iterator<Item = (&'a K, &'a mut V)>,
{
    let mut entries: Vec<(String, &'a mut V)> = entries
        .map(|(key, value)| (key.to_string(), value))
        .collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (key, value) in entries {
        if value.is_absent() {
            debug_trace!(tree.debug(), prefix, key = %key, "entry holds nothing, skipping");
            continue;
        }
        value.compose(prefix, &key, tree);
    }
}
