use std::cell::RefCell;
use std::collections::BTreeMap;
use std::process::Command;

use anyhow::{anyhow, Context, Result};
use strictapt_core::{DependencyCache, DependencyGroup};

use crate::parse::{
    parse_policy_output, parse_reverse_provides, parse_show_output, PackageStanza, PolicyRecord,
};

/// Cache Adapter backed by the live apt state. Queries go through
/// `apt-cache` with structured argument lists; parsed records are memoized
/// per package for the duration of the run (the resolver re-queries names
/// freely).
#[derive(Debug, Default)]
pub struct AptSystemCache {
    policies: RefCell<BTreeMap<String, PolicyRecord>>,
    stanzas: RefCell<BTreeMap<String, Vec<PackageStanza>>>,
}

impl AptSystemCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn policy(&self, name: &str) -> Result<PolicyRecord> {
        if let Some(record) = self.policies.borrow().get(name) {
            return Ok(record.clone());
        }
        let raw = run_apt_cache(&["policy", "--", name])?;
        let record = parse_policy_output(&raw);
        self.policies
            .borrow_mut()
            .insert(name.to_string(), record.clone());
        Ok(record)
    }

    fn show(&self, name: &str) -> Result<Vec<PackageStanza>> {
        if let Some(stanzas) = self.stanzas.borrow().get(name) {
            return Ok(stanzas.clone());
        }
        let raw = run_apt_cache(&["show", "--", name])?;
        let stanzas = parse_show_output(&raw);
        self.stanzas
            .borrow_mut()
            .insert(name.to_string(), stanzas.clone());
        Ok(stanzas)
    }
}

impl DependencyCache for AptSystemCache {
    fn is_known(&self, name: &str) -> bool {
        // Pure virtuals come back with an empty version table. Subprocess
        // failures surface through the fallible queries; here they read as
        // unknown.
        self.policy(name)
            .map(|record| !record.versions.is_empty())
            .unwrap_or(false)
    }

    fn installed_version(&self, name: &str) -> Result<Option<String>> {
        Ok(self.policy(name)?.installed)
    }

    fn candidate_version(&self, name: &str) -> Result<String> {
        self.policy(name)?
            .candidate
            .ok_or_else(|| anyhow!("package '{name}' has no candidate version"))
    }

    fn versions(&self, name: &str) -> Result<Vec<String>> {
        Ok(self.policy(name)?.versions)
    }

    fn dependency_groups(&self, name: &str, version: &str) -> Result<Vec<DependencyGroup>> {
        self.show(name)?
            .iter()
            .find(|stanza| stanza.version == version)
            .map(|stanza| stanza.depends.clone())
            .ok_or_else(|| anyhow!("no package stanza for '{name}' version '{version}'"))
    }

    fn providers(&self, virtual_name: &str) -> Result<Vec<String>> {
        let raw = run_apt_cache(&["showpkg", "--", virtual_name])?;
        Ok(parse_reverse_provides(&raw))
    }
}

fn run_apt_cache(args: &[&str]) -> Result<String> {
    let output = Command::new("apt-cache")
        .args(args)
        .output()
        .with_context(|| format!("failed to run apt-cache {}", args.join(" ")))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!(
            "apt-cache {} failed: status={} stderr='{}'",
            args.join(" "),
            output.status,
            stderr.trim()
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
