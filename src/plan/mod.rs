pub mod plan_arc;

pub use plan_arc::*;
