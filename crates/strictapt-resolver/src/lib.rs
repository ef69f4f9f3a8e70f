mod drive;
mod errors;
mod project;
mod walk;

pub use drive::{resolve_all, ResolveOptions, DEFAULT_LOOP_LIMIT};
pub use errors::ResolveError;
pub use project::project_install_set;
pub use walk::resolve_one;
