mod curve;
mod errors;
mod misc;
mod plan;
mod staking;

pub mod prelude {
    pub use crate::curve::*;
    pub use crate::errors::*;
    pub use crate::misc::*;
    pub use crate::plan::*;
    pub use crate::staking::*;
}
