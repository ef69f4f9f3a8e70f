mod cache;
mod deps;
mod memory;
mod mode;
mod request;

pub use cache::DependencyCache;
pub use deps::{DependencyGroup, DependencySpec, VersionRelation};
pub use memory::MemoryCache;
pub use mode::Mode;
pub use request::{format_request_tokens, parse_seed_tokens, Ledger, PackageRequest};

#[cfg(test)]
mod tests;
