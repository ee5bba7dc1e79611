pub mod admin_repository;

pub use admin_repository::{DeductionAdminRepository, MySqlDeductionAdminRepository};
