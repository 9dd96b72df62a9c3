//! # sharereview-cache
//!
//! Memoized identifier → display-name resolution for the review feed,
//! backed by an in-process [moka](https://crates.io/crates/moka) cache.
//!
//! The cache is owned by a pipeline instance and bounded in size and
//! lifetime by [`CacheConfig`](sharereview_core::config::cache::CacheConfig).

pub mod names;
pub mod resolvers;

pub use names::DisplayNameCache;
pub use resolvers::NameResolvers;
