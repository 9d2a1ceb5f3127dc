//! Serialization entry points and the omission rules shared by every
//! `Serialize` impl in the crate.
//!
//! Unset fields are `None` and skipped; empty lists and empty maps are
//! skipped as well, so the emitted object only carries what the caller set.

use serde::Serialize;
use serde_json::Value;

use crate::core::OneOrMany;
use crate::error::{ChartError, ChartResult};

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> ChartResult<String> {
    serde_json::to_string(value)
        .map_err(|e| ChartError::Serialization(format!("failed to serialize chart json: {e}")))
}

pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> ChartResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        ChartError::Serialization(format!("failed to serialize pretty chart json: {e}"))
    })
}

pub fn to_value<T: Serialize + ?Sized>(value: &T) -> ChartResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| ChartError::Serialization(format!("failed to build chart json value: {e}")))
}

pub(crate) fn is_unset<T>(value: &Option<OneOrMany<T>>) -> bool {
    value.as_ref().is_none_or(OneOrMany::is_empty)
}

pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Nested option blocks that were never set, or were set with nothing in
/// them, are left out.
pub(crate) fn is_blank<T: Default + PartialEq>(value: &Option<T>) -> bool {
    value.as_ref().is_none_or(is_default)
}
