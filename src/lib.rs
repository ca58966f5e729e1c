pub mod continuity;
pub mod error;
pub mod evaluate;
pub mod family;
pub mod grouping;
pub mod math;
pub mod session;

pub use error::{Result, SplinerError};
pub use family::SplineFamily;
pub use session::{CurveSession, SessionConfig};
