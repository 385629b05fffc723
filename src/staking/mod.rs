pub mod staking_point;
pub mod staking_table;
pub mod station_sequence;

pub use staking_point::*;
pub use staking_table::*;
pub use station_sequence::*;

#[cfg(test)]
mod tests;
