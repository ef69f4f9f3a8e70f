use strictapt_core::{DependencyCache, Ledger};

use crate::errors::ResolveError;

/// Shrink a fully resolved closure down to the entries that still require an
/// install action. Everything dropped here is either already satisfied or
/// has no concrete package to act on.
pub fn project_install_set(
    ledger: Ledger,
    cache: &impl DependencyCache,
) -> Result<Ledger, ResolveError> {
    let mut projected = Ledger::new();
    for (name, request) in ledger {
        // Purely virtual names have nothing to install; apt sees them again
        // through whichever real package depends on them.
        if !cache.is_known(&name) {
            continue;
        }
        let installed = cache.installed_version(&name)?;
        // Installed and floating: already satisfied, no pin to enforce.
        if installed.is_some() && !request.has_pin() {
            continue;
        }
        // Installed at exactly the pinned version: no change needed.
        if request.has_pin() && installed.as_deref() == request.version.as_deref() {
            continue;
        }
        projected.insert(name, request);
    }
    Ok(projected)
}
