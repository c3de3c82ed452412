//! Retention policies, transform directions, and the transform contract

mod instruction;
mod policy;
mod rules;
mod transform;

pub use instruction::instruction;
pub use policy::{Direction, ParsePolicyError, RetentionPolicy};
pub use rules::RuleTransform;
pub use transform::{TextTransform, TransformError};
