use std::collections::BTreeMap;

use anyhow::{anyhow, Result};

/// One ledger entry: the version the caller asked to pin (if any) and whether
/// this entry's own dependencies have been expanded yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageRequest {
    pub version: Option<String>,
    pub resolved: bool,
}

impl PackageRequest {
    pub fn pinned(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            resolved: false,
        }
    }

    pub fn floating() -> Self {
        Self::default()
    }

    pub fn has_pin(&self) -> bool {
        self.version.as_deref().is_some_and(|version| !version.is_empty())
    }
}

/// The mutable state of one resolution run: package name to request. Grows
/// monotonically while the closure is walked, never persisted across runs.
pub type Ledger = BTreeMap<String, PackageRequest>;

/// Parse seed tokens of the form `name` or `name=version` into a fresh
/// ledger. Duplicate names collapse to the last-specified version.
pub fn parse_seed_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Ledger> {
    let mut ledger = Ledger::new();
    for token in tokens {
        let (name, request) = match token.split_once('=') {
            Some((name, version)) => {
                if version.trim().is_empty() {
                    return Err(anyhow!("seed token '{token}' is missing a version"));
                }
                (name, PackageRequest::pinned(version.trim()))
            }
            None => (token, PackageRequest::floating()),
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(anyhow!("seed token '{token}' is missing a package name"));
        }
        ledger.insert(name.to_string(), request);
    }
    Ok(ledger)
}

/// Render ledger entries as the `name` / `name=version` tokens apt-get takes.
pub fn format_request_tokens(ledger: &Ledger) -> Vec<String> {
    ledger
        .iter()
        .map(|(name, request)| match &request.version {
            Some(version) if request.has_pin() => format!("{name}={version}"),
            _ => name.clone(),
        })
        .collect()
}
