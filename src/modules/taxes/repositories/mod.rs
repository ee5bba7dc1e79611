pub mod deduction_repository;

pub use deduction_repository::{
    DeductionConfigRepository, InMemoryDeductionStore, MySqlDeductionConfigRepository,
};
