pub mod page;
pub mod patient;
pub mod risk;
pub mod submission;
pub mod vital;
