//! Value types shared by datasets and options.

pub mod color;
pub mod decimal;
pub mod enums;
pub mod tagged;
pub mod value;

pub use color::Color;
pub use decimal::{ToDecimal, decimal_from_f32, decimal_from_f64, decimal_from_str, decimals_from};
pub use enums::{
    AxisType, BorderAlign, BorderCapStyle, BorderJoinStyle, BorderSkipped, CubicInterpolationMode,
    Easing, Event, FontStyle, InteractionMode, PointStyle, Position,
};
pub use tagged::{Fill, SteppedLine};
pub use value::OneOrMany;
