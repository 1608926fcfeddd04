use crate::{Field, Slot};

/// The ordered list of leaves found in one target struct.
///
/// Fields appear depth-first, in field declaration order. Keys are not
/// deduplicated: if two paths produce the same key, both fields are filled
/// from the same variable.
#[derive(Debug)]
pub struct Tree<'a> {
    fields: Vec<Field<'a>>,
    debug: bool,
}

impl<'a> Tree<'a> {
    pub(crate) fn new(debug: bool) -> Self {
        Self {
            fields: Vec::new(),
            debug,
        }
    }

    /// Whether trace diagnostics are on for the parse this tree belongs to.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Adds a leaf named `name` below `prefix`.
    pub fn push(&mut self, prefix: &str, name: &str, slot: Slot<'a>) {
        let field = Field::new(name, join(prefix, name), slot);
        debug_trace!(
            self.debug,
            name = field.name(),
            key = field.key(),
            kind = %field.kind(),
            "field data constructed"
        );
        self.fields.push(field);
    }

    /// Records that a non-public field was left out.
    pub fn skip_unwritable(&self, name: &str) {
        debug_trace!(self.debug, field = name, "field is not public and will be ignored");
    }

    pub(crate) fn skip_embedded(&self, name: &str) {
        debug_trace!(
            self.debug,
            field = name,
            "field is embedded but isn't a record, which cannot be used"
        );
    }

    pub fn fields(&self) -> &[Field<'a>] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field<'a>> {
        self.fields.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(Field::key)
    }
}

impl<'a> IntoIterator for Tree<'a> {
    type Item = Field<'a>;
    type IntoIter = std::vec::IntoIter<Field<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Appends an uppercased segment to a key, separated by a single `_`.
///
/// An empty prefix yields just the segment, an empty segment just the
/// prefix.
pub fn join(prefix: &str, segment: &str) -> String {
    let prefix = prefix.trim_end_matches('_');
    let segment = segment.trim_start_matches('_').to_uppercase();

    match (prefix.is_empty(), segment.is_empty()) {
        (true, _) => segment,
        (false, true) => prefix.to_owned(),
        (false, false) => format!("{prefix}_{segment}"),
    }
}
