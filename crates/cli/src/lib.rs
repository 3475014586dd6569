//! Curve registry and helpers behind the `curve-opdata` CLI
//!
//! Resolves curve names (built-in or declared in a TOML config file) to
//! validated parameters and turns hex command-line operands into operation
//! inputs.
//!
//! # Example
//!
//! ```
//! use curve_opdata_cli::{parse_operands, CurveRegistry};
//! use curve_opdata_core::{inputs, OperationKind};
//!
//! let registry = CurveRegistry::builtin();
//! let params = registry.resolve("BLS12-384-M").unwrap();
//!
//! let scalar = "00".repeat(32) + "05";
//! let point = "11".repeat(96);
//! let operands = parse_operands(OperationKind::G1Mul, &[point, scalar], None).unwrap();
//!
//! let input = inputs::build(OperationKind::G1Mul, &params, &operands).unwrap();
//! assert_eq!(input.len(), 374 + 96 + 33);
//! ```

mod error;
mod operands;
mod registry;
mod types;

pub use error::{OperandError, RegistryError};
pub use operands::parse_operands;
pub use registry::{params_from_entry, CurveRegistry};
pub use types::*;
