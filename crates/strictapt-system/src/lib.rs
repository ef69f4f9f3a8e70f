mod cache;
mod driver;
mod parse;

pub use cache::AptSystemCache;
pub use driver::AptGetDriver;

#[cfg(test)]
mod tests;
