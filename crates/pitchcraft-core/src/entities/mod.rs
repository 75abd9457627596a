//! Entity structs for the generator's input and output records.

mod pitch;
mod startup;

pub use pitch::{GeneratedPitch, RevenueModel};
pub use startup::{StartupData, is_blank};
