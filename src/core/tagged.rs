//! Fields whose value is either a number/boolean or a fixed keyword.

use serde::{Serialize, Serializer};

/// How the area under a line is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// `true` fills to the origin, `false` disables filling.
    Enabled(bool),
    Origin,
    Start,
    End,
    /// Absolute index of the dataset to fill to.
    Dataset(usize),
    /// Dataset offset relative to this one, written as `"+1"` or `"-1"`.
    Relative(i32),
}

impl Serialize for Fill {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Enabled(enabled) => serializer.serialize_bool(*enabled),
            Self::Origin => serializer.serialize_str("origin"),
            Self::Start => serializer.serialize_str("start"),
            Self::End => serializer.serialize_str("end"),
            Self::Dataset(index) => serializer.serialize_u64(*index as u64),
            Self::Relative(offset) => serializer.serialize_str(&format!("{offset:+}")),
        }
    }
}

impl From<bool> for Fill {
    fn from(enabled: bool) -> Self {
        Self::Enabled(enabled)
    }
}

/// Stepped interpolation for line datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteppedLine {
    Enabled(bool),
    Before,
    After,
}

impl Serialize for SteppedLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Enabled(enabled) => serializer.serialize_bool(*enabled),
            Self::Before => serializer.serialize_str("before"),
            Self::After => serializer.serialize_str("after"),
        }
    }
}

impl From<bool> for SteppedLine {
    fn from(enabled: bool) -> Self {
        Self::Enabled(enabled)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Fill, SteppedLine};

    #[test]
    fn fill_serializes_as_bare_value() {
        let values = serde_json::to_value([Fill::Enabled(false), Fill::Origin, Fill::Dataset(2)])
            .expect("fill");
        assert_eq!(values, json!([false, "origin", 2]));
    }

    #[test]
    fn relative_fill_serializes_as_signed_string() {
        let values =
            serde_json::to_value([Fill::Relative(1), Fill::Relative(-2)]).expect("relative fill");
        assert_eq!(values, json!(["+1", "-2"]));
    }

    #[test]
    fn stepped_line_serializes_as_bare_value() {
        let values =
            serde_json::to_value([SteppedLine::from(true), SteppedLine::After]).expect("stepped");
        assert_eq!(values, json!([true, "after"]));
    }
}
