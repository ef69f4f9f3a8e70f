use anyhow::Result;

use crate::DependencyGroup;

/// Read-only view of the package manager's dependency cache. The resolver
/// only ever reads through this interface; it never touches install state.
pub trait DependencyCache {
    /// Whether `name` has a real package entry. Names that are only ever
    /// provided by other packages (pure virtuals) are not known.
    fn is_known(&self, name: &str) -> bool;

    fn installed_version(&self, name: &str) -> Result<Option<String>>;

    /// The version the package manager would install absent an explicit pin.
    fn candidate_version(&self, name: &str) -> Result<String>;

    fn versions(&self, name: &str) -> Result<Vec<String>>;

    /// Dependency groups of one package version, each group an ordered list
    /// of OR-alternatives.
    fn dependency_groups(&self, name: &str, version: &str) -> Result<Vec<DependencyGroup>>;

    /// Concrete packages that provide the given virtual name.
    fn providers(&self, virtual_name: &str) -> Result<Vec<String>>;

    fn is_installed(&self, name: &str) -> Result<bool> {
        Ok(self.is_known(name) && self.installed_version(name)?.is_some())
    }
}
