pub mod crosscheck;
pub mod data;
pub mod estimate;
pub mod search;
pub mod validate;
