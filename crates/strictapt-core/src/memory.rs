use std::collections::BTreeMap;

use anyhow::{anyhow, Result};

use crate::{DependencyCache, DependencyGroup};

/// Deterministic in-memory cache adapter. Used as the fixture backend in
/// tests and by embedders that already hold package metadata.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    packages: BTreeMap<String, MemoryPackage>,
    provides: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default)]
struct MemoryPackage {
    installed: Option<String>,
    candidate: String,
    versions: BTreeMap<String, Vec<DependencyGroup>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a package version with its dependency groups. The first
    /// registered version becomes the candidate until `set_candidate`
    /// overrides it.
    pub fn add_version(
        &mut self,
        name: &str,
        version: &str,
        groups: Vec<DependencyGroup>,
    ) -> &mut Self {
        let package = self.packages.entry(name.to_string()).or_default();
        if package.candidate.is_empty() {
            package.candidate = version.to_string();
        }
        package.versions.insert(version.to_string(), groups);
        self
    }

    pub fn set_candidate(&mut self, name: &str, version: &str) -> &mut Self {
        let package = self.packages.entry(name.to_string()).or_default();
        package.candidate = version.to_string();
        self
    }

    /// Mark a package as currently installed at `version`. The version does
    /// not have to be registered: deployments routinely hold versions that
    /// have since left the repository index.
    pub fn set_installed(&mut self, name: &str, version: &str) -> &mut Self {
        let package = self.packages.entry(name.to_string()).or_default();
        package.installed = Some(version.to_string());
        self
    }

    pub fn add_provider(&mut self, virtual_name: &str, provider: &str) -> &mut Self {
        self.provides
            .entry(virtual_name.to_string())
            .or_default()
            .push(provider.to_string());
        self
    }

    fn package(&self, name: &str) -> Result<&MemoryPackage> {
        self.packages
            .get(name)
            .ok_or_else(|| anyhow!("package '{name}' not in cache"))
    }
}

impl DependencyCache for MemoryCache {
    fn is_known(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    fn installed_version(&self, name: &str) -> Result<Option<String>> {
        Ok(self.packages.get(name).and_then(|package| package.installed.clone()))
    }

    fn candidate_version(&self, name: &str) -> Result<String> {
        let package = self.package(name)?;
        if package.candidate.is_empty() {
            return Err(anyhow!("package '{name}' has no candidate version"));
        }
        Ok(package.candidate.clone())
    }

    fn versions(&self, name: &str) -> Result<Vec<String>> {
        Ok(self.package(name)?.versions.keys().cloned().collect())
    }

    fn dependency_groups(&self, name: &str, version: &str) -> Result<Vec<DependencyGroup>> {
        self.package(name)?
            .versions
            .get(version)
            .cloned()
            .ok_or_else(|| anyhow!("package '{name}' has no version '{version}'"))
    }

    fn providers(&self, virtual_name: &str) -> Result<Vec<String>> {
        Ok(self.provides.get(virtual_name).cloned().unwrap_or_default())
    }
}
