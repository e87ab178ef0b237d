//! Custom request extractors.
//!
//! Both report failures as `AppError`, so rejections share the JSON error envelope.

mod employee_id;
mod validated_json;

pub use employee_id::EmployeeId;
pub use validated_json::ValidatedJson;
