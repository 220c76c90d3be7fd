//! Preprocessing steps and the pool that orders them

mod module_notation;
mod pool;
mod retype;
mod variables;

pub use module_notation::{relative_path, ModuleNotation};
pub use pool::ConfiguredPool;
pub use retype::Retype;
pub use variables::VariableNotation;
