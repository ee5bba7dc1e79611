mod deduction_update;

pub use deduction_update::{
    KReceiptDeductionResponse, PersonalDeductionResponse, UpdateDeductionRequest,
};
