// SPDX-FileCopyrightText: 2026 EaseEntry Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lenient integer coercion for model-supplied arguments.
//!
//! Models often send numbers as strings (`"5"`) or floats (`5.0`). Accepted:
//! JSON integers, finite floats (truncated toward zero) and strings holding
//! an integer after trimming. Everything else is rejected.

use serde_json::Value;

/// Coerce a JSON value to `i64`, or `None` if it is not integer-like.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
            (f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64).then(|| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
