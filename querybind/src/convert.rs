//! Text to value conversion for the leaf types a binder can write.

use querybind_core::{Reflect, ScalarType, Type};

/// What happened when values were written into one slot.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Assignment {
    /// The slot's type cannot be written from text. Nothing was touched.
    Unsupported,
    /// The slot is a sequence and there were no values: it is now empty.
    Emptied,
    /// Conversion ran; `rejected` lists the value indices that failed.
    Attempted { rejected: Vec<usize> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Converted,
    Malformed,
    Mismatch,
}

/// Writes `values` into `slot` according to its shape.
pub(crate) fn assign(slot: &mut dyn Reflect, values: &[String]) -> Assignment {
    let shape = slot.shape();
    let first = values.first().map(String::as_str).unwrap_or("");

    if shape.is_bytes() {
        return if set_bytes(slot, first) {
            Assignment::Attempted {
                rejected: Vec::new(),
            }
        } else {
            Assignment::Unsupported
        };
    }

    match shape.ty {
        Type::Scalar(scalar) => match set_scalar(slot, scalar, first) {
            Scan::Converted => Assignment::Attempted {
                rejected: Vec::new(),
            },
            Scan::Malformed => Assignment::Attempted { rejected: vec![0] },
            Scan::Mismatch => Assignment::Unsupported,
        },
        Type::List(elem) => {
            let Some(scalar) = elem().scalar_type() else {
                return Assignment::Unsupported;
            };
            let Some(list) = slot.list_mut() else {
                return Assignment::Unsupported;
            };
            list.reset(values.len());
            if values.is_empty() {
                return Assignment::Emptied;
            }

            let mut rejected = Vec::new();
            for (index, raw) in values.iter().enumerate() {
                let Some(item) = list.item_mut(index) else {
                    return Assignment::Unsupported;
                };
                match set_scalar(item, scalar, raw) {
                    Scan::Converted => {}
                    Scan::Malformed => rejected.push(index),
                    Scan::Mismatch => return Assignment::Unsupported,
                }
            }
            Assignment::Attempted { rejected }
        }
        _ => Assignment::Unsupported,
    }
}

fn set_bytes(slot: &mut dyn Reflect, raw: &str) -> bool {
    if let Some(buf) = slot.downcast_mut::<Vec<u8>>() {
        *buf = raw.as_bytes().to_vec();
        return true;
    }
    #[cfg(feature = "bytes")]
    if let Some(buf) = slot.downcast_mut::<bytes::Bytes>() {
        *buf = bytes::Bytes::copy_from_slice(raw.as_bytes());
        return true;
    }
    false
}

fn set_scalar(slot: &mut dyn Reflect, scalar: ScalarType, raw: &str) -> Scan {
    match scalar {
        ScalarType::Bool => {
            let parsed = parse_bool(raw);
            match put(slot, Some(parsed.unwrap_or(false))) {
                Scan::Converted if parsed.is_none() => Scan::Malformed,
                scan => scan,
            }
        }
        ScalarType::String => put(slot, Some(raw.to_owned())),
        ScalarType::F32 => put(slot, parse_float(raw).map(|v| v as f32)),
        ScalarType::F64 => put(slot, parse_float(raw)),
        ScalarType::I8 => put(slot, parse_int(raw).map(|v| v as i8)),
        ScalarType::I16 => put(slot, parse_int(raw).map(|v| v as i16)),
        ScalarType::I32 => put(slot, parse_int(raw).map(|v| v as i32)),
        ScalarType::I64 => put(slot, parse_int(raw)),
        ScalarType::ISize => put(slot, parse_int(raw).map(|v| v as isize)),
        ScalarType::I128 => put(slot, raw.parse::<i128>().ok()),
        ScalarType::U8 => put(slot, parse_uint(raw).map(|v| v as u8)),
        ScalarType::U16 => put(slot, parse_uint(raw).map(|v| v as u16)),
        ScalarType::U32 => put(slot, parse_uint(raw).map(|v| v as u32)),
        ScalarType::U64 => put(slot, parse_uint(raw)),
        ScalarType::USize => put(slot, parse_uint(raw).map(|v| v as usize)),
        ScalarType::U128 => {
            put(slot, unsigned_digits(raw).and_then(|d| d.parse::<u128>().ok()))
        }
        _ => Scan::Mismatch,
    }
}

/// Stores `value` if the slot really is a `T`. `None` leaves the slot as is.
fn put<T: Reflect>(slot: &mut dyn Reflect, value: Option<T>) -> Scan {
    let Some(slot) = slot.downcast_mut::<T>() else {
        return Scan::Mismatch;
    };
    match value {
        Some(value) => {
            *slot = value;
            Scan::Converted
        }
        None => Scan::Malformed,
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn parse_int(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

fn parse_uint(raw: &str) -> Option<u64> {
    unsigned_digits(raw).and_then(|d| d.parse().ok())
}

/// Unsigned text carries no sign at all, not even `+`.
fn unsigned_digits(raw: &str) -> Option<&str> {
    (!raw.starts_with('+')).then_some(raw)
}

/// Parses at 64 bits. A finite literal too large for `f64` is out of range
/// and fails; only a spelled-out infinity parses to one.
fn parse_float(raw: &str) -> Option<f64> {
    let v: f64 = raw.parse().ok()?;
    if v.is_infinite() {
        let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
        if !unsigned.eq_ignore_ascii_case("inf") && !unsigned.eq_ignore_ascii_case("infinity") {
            return None;
        }
    }
    Some(v)
}
