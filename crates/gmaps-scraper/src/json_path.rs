//! Tolerant positional lookups over untyped page payloads.
//!
//! The review listing has no declared schema: fields live at fixed array
//! positions, any branch may be absent, and `null` can stand in for a whole
//! subtree. Lookups therefore resolve to `None` at the first broken link
//! instead of erroring, and field extraction composes these primitives
//! rather than indexing into the payload directly.

use serde_json::Value;

/// Walks `path` index by index and returns the value at the end.
///
/// `None` when any step is out of range, applied to a non-array, or lands
/// on JSON `null`.
pub(crate) fn pluck<'a>(value: &'a Value, path: &[usize]) -> Option<&'a Value> {
    let mut current = value;
    for &index in path {
        current = current.get(index)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

pub(crate) fn pluck_str<'a>(value: &'a Value, path: &[usize]) -> Option<&'a str> {
    pluck(value, path)?.as_str()
}

pub(crate) fn pluck_string(value: &Value, path: &[usize]) -> Option<String> {
    pluck_str(value, path).map(str::to_owned)
}

/// String lookup that also treats an empty string as absent.
pub(crate) fn pluck_non_empty(value: &Value, path: &[usize]) -> Option<String> {
    pluck_str(value, path)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

pub(crate) fn pluck_f64(value: &Value, path: &[usize]) -> Option<f64> {
    pluck(value, path)?.as_f64()
}

pub(crate) fn pluck_i64(value: &Value, path: &[usize]) -> Option<i64> {
    pluck(value, path)?.as_i64()
}

pub(crate) fn pluck_u32(value: &Value, path: &[usize]) -> Option<u32> {
    pluck(value, path)?.as_u64().and_then(|v| u32::try_from(v).ok())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn walks_nested_arrays() {
        let value = json!([[null, ["deep"]], 2]);
        assert_eq!(pluck(&value, &[0, 1, 0]), Some(&json!("deep")));
    }

    #[test]
    fn empty_path_returns_the_value_itself() {
        let value = json!(42);
        assert_eq!(pluck(&value, &[]), Some(&json!(42)));
    }

    #[test]
    fn out_of_range_index_is_absent() {
        assert!(pluck(&json!([1, 2]), &[5]).is_none());
    }

    #[test]
    fn indexing_into_a_scalar_is_absent() {
        assert!(pluck(&json!("text"), &[0]).is_none());
        assert!(pluck(&json!([1]), &[0, 0]).is_none());
    }

    #[test]
    fn null_leaf_is_absent() {
        assert!(pluck(&json!([null]), &[0]).is_none());
    }

    #[test]
    fn typed_lookups_reject_mismatched_shapes() {
        let value = json!(["five", [3.5], [7]]);
        assert!(pluck_f64(&value, &[0]).is_none());
        assert_eq!(pluck_f64(&value, &[1, 0]), Some(3.5));
        assert_eq!(pluck_i64(&value, &[2, 0]), Some(7));
        assert_eq!(pluck_u32(&value, &[2, 0]), Some(7));
        assert!(pluck_str(&value, &[1]).is_none());
    }

    #[test]
    fn non_empty_lookup_blanks_empty_strings() {
        let value = json!(["", "text"]);
        assert!(pluck_non_empty(&value, &[0]).is_none());
        assert_eq!(pluck_non_empty(&value, &[1]).as_deref(), Some("text"));
        assert_eq!(pluck_string(&value, &[0]).as_deref(), Some(""));
    }

    #[test]
    fn negative_number_is_not_a_u32() {
        assert!(pluck_u32(&json!([-4]), &[0]).is_none());
    }
}
