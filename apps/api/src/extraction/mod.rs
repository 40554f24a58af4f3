pub mod assembler;
pub mod builder;
pub mod classifier;
pub mod key_value;
pub mod models;
pub mod section;

pub use builder::build_record;
pub use models::ResumeRecord;
