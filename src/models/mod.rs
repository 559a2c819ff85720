//! Entity models for the claims audit pipeline.
//!
//! Each input table maps to one typed struct. Derived columns
//! (`length_of_stay`, `age`) live on the entity they describe and are
//! filled by the preprocessor; identifying columns are never altered.

pub mod claim;
pub mod diagnosis;
pub mod doctor;
pub mod hospital;
pub mod master;
pub mod policy;

pub use claim::Claim;
pub use diagnosis::ClaimDiagnosis;
pub use doctor::{Doctor, DoctorAssignment};
pub use hospital::Hospital;
pub use master::MasterRow;
pub use policy::Policy;
