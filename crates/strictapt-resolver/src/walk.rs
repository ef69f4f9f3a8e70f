use strictapt_core::{DependencyCache, Ledger, PackageRequest};

use crate::errors::ResolveError;

/// Expand the dependencies of the ledger entry `name` in place and mark it
/// resolved. Newly discovered dependency names enter the ledger unresolved;
/// entries that already exist keep their resolved state.
pub fn resolve_one(
    name: &str,
    ledger: &mut Ledger,
    cache: &impl DependencyCache,
) -> Result<(), ResolveError> {
    let Some(entry) = ledger.get(name) else {
        return Ok(());
    };
    // Re-entrancy guard: a repeat visit to an expanded entry is benign and
    // must stay a no-op, or cyclic dependency graphs would never converge.
    if entry.resolved {
        return Ok(());
    }
    let requested = entry.version.clone();

    // Virtual package: record nothing beyond the name itself. Picking a
    // provider here would take that decision away from apt's own solver,
    // which sees the full conflict picture at install time.
    if !cache.is_known(name) {
        if cache.providers(name)?.is_empty() {
            return Err(ResolveError::UnresolvableVirtualPackage {
                name: name.to_string(),
            });
        }
        mark_resolved(ledger, name);
        return Ok(());
    }

    let target = target_version(name, requested.as_deref(), cache)?;

    for group in cache.dependency_groups(name, &target)? {
        let mut chosen = None;
        for alternative in &group {
            if cache.is_installed(&alternative.name)? {
                chosen = Some(alternative);
                break;
            }
        }
        // Nothing installed yet: fall back to the last-listed alternative.
        // Last-listed is a documented policy, not an accident; existing
        // deployments were produced with it and flipping to first-listed
        // would repin their alternatives.
        let Some(alternative) = chosen.or_else(|| group.last()) else {
            continue;
        };
        let pin = alternative
            .relation
            .is_exact()
            .then(|| alternative.version.clone());
        record_request(ledger, &alternative.name, pin);
    }

    mark_resolved(ledger, name);
    Ok(())
}

fn target_version(
    name: &str,
    requested: Option<&str>,
    cache: &impl DependencyCache,
) -> Result<String, ResolveError> {
    match requested {
        None | Some("") => Ok(cache.candidate_version(name)?),
        Some(version) => {
            if cache.versions(name)?.iter().any(|known| known == version) {
                Ok(version.to_string())
            } else {
                Err(ResolveError::VersionNotFound {
                    name: name.to_string(),
                    version: version.to_string(),
                })
            }
        }
    }
}

/// Insert or update a discovered dependency. A pin upgrades a floating
/// request; a floating request never downgrades a pin; the first pin
/// recorded for a name wins over later, different pins. The resolved flag is
/// never reset here.
fn record_request(ledger: &mut Ledger, name: &str, pin: Option<String>) {
    match ledger.get_mut(name) {
        Some(existing) => {
            if existing.version.is_none() {
                existing.version = pin;
            }
        }
        None => {
            ledger.insert(
                name.to_string(),
                PackageRequest {
                    version: pin,
                    resolved: false,
                },
            );
        }
    }
}

fn mark_resolved(ledger: &mut Ledger, name: &str) {
    if let Some(entry) = ledger.get_mut(name) {
        entry.resolved = true;
    }
}
