use std::fmt::Write as _;

use crate::{
    Dynamic, Env, Error, Node, Options, Record, Result, Source, Tree, context::Context, fill::fill,
};

/// Setting this variable to a true value turns on trace diagnostics for the
/// duration of a parse.
pub const DEBUG_ENV_VAR: &str = "STRUCTENV_DEBUG";

/// Fills `target` from the process environment.
///
/// Every leaf of `target` is looked up under its derived key; leaves without a
/// matching variable keep their current value. `None` options means
/// [`Options::default`].
///
/// Returns [`Error::NotAStructure`] if `target` isn't a record, whatever the
/// options. Any other error means [`Options::errors_are_critical`] was set and
/// a value was rejected; fields filled before it keep their new values.
pub fn parse<T>(target: &mut T, options: Option<&Options>) -> Result<()>
where
    T: Node + ?Sized,
{
    parse_with(target, options, &Env)
}

/// Like [`parse`], reading values and the debug flag from `source`.
pub fn parse_with<T, S>(target: &mut T, options: Option<&Options>, source: &S) -> Result<()>
where
    T: Node + ?Sized,
    S: Source + ?Sized,
{
    let options = options.copied().unwrap_or_default();

    let Some(record) = target.as_record_mut() else {
        return Err(Error::NotAStructure);
    };

    let context = Context::new(options, source)?;
    debug_trace!(context.debug, ?options, "parsing started");

    let prefix = record.root_prefix();
    let mut tree = Tree::new(context.debug);
    record.compose_fields(&prefix, &mut tree);

    fill_tree(tree, source, &context)
}

/// Fills whatever `target` holds, which must be a record.
///
/// Holding nothing, or a value that can't be written through, yields
/// [`Error::NotAPointer`]; holding a scalar yields [`Error::NotAStructure`].
pub fn parse_dynamic(target: &mut Dynamic, options: Option<&Options>) -> Result<()> {
    parse_dynamic_with(target, options, &Env)
}

pub fn parse_dynamic_with<S>(
    target: &mut Dynamic,
    options: Option<&Options>,
    source: &S,
) -> Result<()>
where
    S: Source + ?Sized,
{
    match target {
        Dynamic::Record(record) => parse_with(record.as_mut(), options, source),
        Dynamic::Scalar(_) => Err(Error::NotAStructure),
        Dynamic::Empty | Dynamic::Value(_) => Err(Error::NotAPointer),
    }
}

/// Builds the tree of `target` without reading any values.
pub fn compose<T>(target: &mut T) -> Tree<'_>
where
    T: Record + ?Sized,
{
    let prefix = target.root_prefix();
    let mut tree = Tree::new(false);
    target.compose_fields(&prefix, &mut tree);
    tree
}

/// Lists every variable `target` reads, one `KEY=current value` line each, in
/// the order they are filled.
pub fn requirements<T>(target: &mut T) -> String
where
    T: Record + ?Sized,
{
    compose(target)
        .iter()
        .fold(String::new(), |mut requirements, field| {
            let _ = writeln!(requirements, "{}={}", field.key(), field.slot().current());
            requirements
        })
}

fn fill_tree<S>(tree: Tree<'_>, source: &S, context: &Context) -> Result<()>
where
    S: Source + ?Sized,
{
    debug_trace!(context.debug, fields = tree.len(), "filling tree from source");

    for mut field in tree {
        let Some(raw) = source.get_var(field.key()) else {
            debug_trace!(context.debug, var = field.key(), "value wasn't found");
            continue;
        };
        debug_trace!(context.debug, var = field.key(), value = %raw, "value found");

        fill(&mut field, &raw, context)?;
    }

    Ok(())
}
