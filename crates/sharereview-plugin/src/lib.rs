//! # sharereview-plugin
//!
//! Discovery of pluggable share sources. Provides:
//!
//! - [`SourceRegistry`]: lazily instantiates the injected factories once,
//!   skipping failed constructions and duplicate names
//! - [`SourceMap`]: the resulting name → source map, in registration order
//! - Convenience factories for already-built sources and closures

pub mod factory;
pub mod registry;

pub use factory::{ClosureFactory, InstanceFactory};
pub use registry::{SourceMap, SourceRegistry};
