pub mod input_state;
pub mod intercept;
pub mod logging;
pub mod math;

pub use intercept::{find_intercept, find_intercept_compat, InterceptError, SENTINEL};
pub use math::{Point2D, Rect};
