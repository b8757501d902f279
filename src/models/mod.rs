pub mod consultation;
pub mod conversation;
pub mod enums;
pub mod health_record;
pub mod prescription;
pub mod symptom;

pub use consultation::*;
pub use conversation::*;
pub use health_record::*;
pub use prescription::*;
pub use symptom::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
