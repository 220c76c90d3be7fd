//! Domain Layer
//!
//! The asset materialization core, free of concrete I/O.
//!
//! ## Structure
//!
//! - `entities/` - Asset references, transformation chains, themes
//! - `value_objects/` - Paths, cache keys, cached locations, modes
//! - `ports/` - Interfaces implemented by the infrastructure layer
//! - `services/` - The source service that ties the ports together
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports
//! 3. **Explicit outcomes** - "not found" is `Ok(None)`, faults are errors

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
