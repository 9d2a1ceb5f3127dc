use serde::Serialize;

/// A field that takes either one value for the whole series or one value
/// per data point (index-aligned).
///
/// `One` serializes as a bare scalar, `Many` as an array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Appends a per-point value, promoting `One` to `Many`.
    pub fn push(&mut self, value: T) {
        let values = match std::mem::replace(self, Self::Many(Vec::new())) {
            Self::One(first) => vec![first, value],
            Self::Many(mut values) => {
                values.push(value);
                values
            }
        };
        *self = Self::Many(values);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Many(values) if values.is_empty())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

/// Appends to an optional per-point field, starting a list when unset.
pub(crate) fn push_value<T>(slot: &mut Option<OneOrMany<T>>, value: T) {
    match slot {
        Some(existing) => existing.push(value),
        None => *slot = Some(OneOrMany::Many(vec![value])),
    }
}

#[cfg(test)]
mod tests {
    use super::{OneOrMany, push_value};

    #[test]
    fn push_promotes_single_value_to_list() {
        let mut value = OneOrMany::One(1);
        value.push(2);
        assert_eq!(value, OneOrMany::Many(vec![1, 2]));
        assert_eq!(value.as_slice(), &[1, 2]);
    }

    #[test]
    fn push_appends_to_existing_list() {
        let mut value = OneOrMany::Many(vec!["a"]);
        value.push("b");
        value.push("c");
        assert_eq!(value, OneOrMany::Many(vec!["a", "b", "c"]));
    }

    #[test]
    fn push_into_unset_slot_starts_list() {
        let mut slot = None;
        push_value(&mut slot, "a");
        push_value(&mut slot, "b");
        assert_eq!(slot, Some(OneOrMany::Many(vec!["a", "b"])));
    }

    #[test]
    fn empty_list_reports_empty() {
        assert!(OneOrMany::<u8>::Many(Vec::new()).is_empty());
        assert!(!OneOrMany::One(0u8).is_empty());
    }
}
