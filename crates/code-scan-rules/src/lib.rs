//! # code-scan-rules
//!
//! Built-in rules for code-scan.
//!
//! Each rule inspects one node kind and reports disallowed constructs.
//!
//! ## Available Rules
//!
//! | Identifier | Name | Description |
//! |------------|------|-------------|
//! | `pderas.disallow.function.<name>` | `disallow-function` | Forbids calls to configured banned functions |
//! | `pderas.disallow.exit` | `disallow-exit` | Forbids `exit` / `die` |
//! | `pderas.disallow.debug` | `disallow-debug` | Forbids `dd()` / `dump()` |
//!
//! ## Usage
//!
//! ```ignore
//! use code_scan_core::Registry;
//! use code_scan_rules::{DisallowExit, DisallowFunctionCalls};
//!
//! let registry = Registry::builder()
//!     .rule(DisallowFunctionCalls::new(["eval", "exec"]))
//!     .rule(DisallowExit::new())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod disallow_debug;
mod disallow_exit;
mod disallow_function;
mod presets;

pub use disallow_debug::{DisallowDebugHelpers, DEBUG_HELPERS};
pub use disallow_exit::DisallowExit;
pub use disallow_function::{identifier_for, DisallowFunctionCalls, FALLBACK_SEGMENT};
pub use presets::recommended_rules;

/// Re-export core types for convenience.
pub use code_scan_core::{Diagnostic, Rule, Severity};
