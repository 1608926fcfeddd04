use std::num::IntErrorKind;

use crate::{Error, Field, Result, Slot, context::Context};

/// Writes `raw` into the storage behind `field`.
///
/// Malformed and out-of-range values zero the target. In critical mode the
/// first such value is returned as an error instead; a malformed value then
/// leaves the target untouched, an out-of-range one still zeroes it.
pub(crate) fn fill(field: &mut Field<'_>, raw: &str, context: &Context) -> Result<()> {
    let Field { key, slot, .. } = field;
    fill_slot(slot, key, raw, context)
}

fn fill_slot(slot: &mut Slot<'_>, key: &str, raw: &str, context: &Context) -> Result<()> {
    match slot {
        Slot::Text(target) => **target = raw.to_owned(),
        Slot::Bool(target) => match parse_bool(raw) {
            Some(value) => **target = value,
            None => {
                debug_trace!(context.debug, var = key, value = raw, "value isn't a boolean");
                if context.critical() {
                    return Err(Error::NotBool { var: key.to_owned() });
                }
                **target = false;
            }
        },
        Slot::I8(target) => {
            fill_signed(&mut **target, key, raw, context, |var| Error::NotInt8 { var })?
        }
        Slot::I16(target) => {
            fill_signed(&mut **target, key, raw, context, |var| Error::NotInt16 { var })?
        }
        Slot::I32(target) => {
            fill_signed(&mut **target, key, raw, context, |var| Error::NotInt32 { var })?
        }
        Slot::I64(target) => {
            fill_signed(&mut **target, key, raw, context, |var| Error::NotInt { var })?
        }
        Slot::Isize(target) => {
            fill_signed(&mut **target, key, raw, context, |var| Error::NotIsize { var })?
        }
        Slot::U8(target) => {
            fill_unsigned(&mut **target, key, raw, context, |var| Error::NotUint8 { var })?
        }
        Slot::U16(target) => {
            fill_unsigned(&mut **target, key, raw, context, |var| Error::NotUint16 { var })?
        }
        Slot::U32(target) => {
            fill_unsigned(&mut **target, key, raw, context, |var| Error::NotUint32 { var })?
        }
        Slot::U64(target) => {
            fill_unsigned(&mut **target, key, raw, context, |var| Error::NotUint { var })?
        }
        Slot::Usize(target) => {
            fill_unsigned(&mut **target, key, raw, context, |var| Error::NotUsize { var })?
        }
        Slot::F32(target) => **target = parse_float(key, raw, context)? as f32,
        Slot::F64(target) => **target = parse_float(key, raw, context)?,
        Slot::Dynamic(held) => match held.as_scalar_mut() {
            // Composing resolves scalars to their own kind, so only a
            // hand-built `Field` reaches this. A scalar slot is never
            // dynamic, so this recurses once at most.
            Some(scalar) => return fill_slot(&mut scalar.slot(), key, raw, context),
            None => {
                debug_trace!(
                    context.debug,
                    var = key,
                    "dynamic element doesn't hold a writable scalar, nothing will be done with it"
                );
                if context.critical() {
                    return Err(Error::NotFillable { var: key.to_owned() });
                }
            }
        },
        Slot::Unsupported => {
            debug_trace!(context.debug, var = key, "element kind is unsupported, skipping");
        }
    }

    Ok(())
}

/// Parses as a 64-bit integer, then narrows to `T`.
///
/// `out_of_range` builds the width-specific error. For 64-bit targets the
/// narrowing can't fail.
fn fill_signed<T>(
    target: &mut T,
    key: &str,
    raw: &str,
    context: &Context,
    out_of_range: fn(String) -> Error,
) -> Result<()>
where
    T: TryFrom<i64> + Default,
{
    let value = match raw.parse::<i64>() {
        Ok(value) => value,
        Err(err) => {
            debug_trace!(
                context.debug,
                var = key,
                error = %err,
                "error occurred while parsing integer"
            );
            if context.critical() {
                return Err(Error::NotInt { var: key.to_owned() });
            }
            match err.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => 0,
            }
        }
    };

    narrow(target, value, key, context, out_of_range)
}

fn fill_unsigned<T>(
    target: &mut T,
    key: &str,
    raw: &str,
    context: &Context,
    out_of_range: fn(String) -> Error,
) -> Result<()>
where
    T: TryFrom<u64> + Default,
{
    // Unsigned values carry no sign, not even `+`.
    let parsed = if raw.starts_with('+') {
        Err(("unexpected sign".to_owned(), IntErrorKind::InvalidDigit))
    } else {
        raw.parse::<u64>()
            .map_err(|err| (err.to_string(), err.kind().clone()))
    };

    let value = match parsed {
        Ok(value) => value,
        Err((error, kind)) => {
            debug_trace!(
                context.debug,
                var = key,
                error = %error,
                "error occurred while parsing unsigned integer"
            );
            if context.critical() {
                return Err(Error::NotUint { var: key.to_owned() });
            }
            match kind {
                IntErrorKind::PosOverflow => u64::MAX,
                _ => 0,
            }
        }
    };

    narrow(target, value, key, context, out_of_range)
}

fn narrow<T, V>(
    target: &mut T,
    value: V,
    key: &str,
    context: &Context,
    out_of_range: fn(String) -> Error,
) -> Result<()>
where
    T: TryFrom<V> + Default,
{
    match T::try_from(value) {
        Ok(value) => *target = value,
        Err(_) => {
            debug_trace!(context.debug, var = key, "value doesn't fit the field's width");
            *target = T::default();
            if context.critical() {
                return Err(out_of_range(key.to_owned()));
            }
        }
    }

    Ok(())
}

/// Parses a 64-bit float.
///
/// A finite literal too large for `f64` is out of range: it's an error in
/// critical mode and stays the signed infinity it rounds to otherwise.
fn parse_float(key: &str, raw: &str, context: &Context) -> Result<f64> {
    let (value, error) = match raw.parse::<f64>() {
        Ok(value) if value.is_infinite() && !spells_infinity(raw) => {
            (value, Some("value out of range".to_owned()))
        }
        Ok(value) => (value, None),
        Err(err) => (0.0, Some(err.to_string())),
    };

    if let Some(error) = error {
        debug_trace!(
            context.debug,
            var = key,
            error = %error,
            "error occurred while parsing float"
        );
        if context.critical() {
            return Err(Error::NotFloat { var: key.to_owned() });
        }
    }

    Ok(value)
}

fn spells_infinity(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// The accepted boolean spellings.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
