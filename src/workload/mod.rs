//! Workload definitions and operation sequence generation

pub mod generator;
pub mod operation;
pub mod profile;

pub use generator::OperationSequence;
pub use operation::{OperationTag, MAX_RANDOM_VALUE};
pub use profile::WorkloadProfile;
