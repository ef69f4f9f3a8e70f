use strictapt_core::{DependencyCache, Ledger, Mode, PackageRequest};

use crate::errors::ResolveError;
use crate::project::project_install_set;
use crate::walk::resolve_one;

pub const DEFAULT_LOOP_LIMIT: usize = 10_000;

/// Knobs for one resolution run.
#[derive(Debug, Clone, Copy)]
pub struct ResolveOptions {
    pub mode: Mode,
    pub loop_limit: usize,
}

impl ResolveOptions {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            loop_limit: DEFAULT_LOOP_LIMIT,
        }
    }
}

/// Drive the seed ledger to a fully resolved closure, then project it down
/// to the entries that still need an install action.
pub fn resolve_all(
    mut ledger: Ledger,
    cache: &impl DependencyCache,
    options: &ResolveOptions,
) -> Result<Ledger, ResolveError> {
    // Only-new modes drop already-installed seeds before the first pass, so
    // dependencies are never pulled in just to satisfy an already-satisfied
    // request. Names without a real cache entry stay: they may be virtual.
    if options.mode.only_new() {
        let mut remaining = Ledger::new();
        for (name, request) in ledger {
            if !cache.is_installed(&name)? {
                remaining.insert(name, request);
            }
        }
        ledger = remaining;
    }

    // Pass 1: entries carrying an explicit pin. Expanding these first means
    // a pin discovered along a pinned path is already recorded when the same
    // name resurfaces behind a floating request in pass 2.
    drive_pass(&mut ledger, cache, options.loop_limit, PackageRequest::has_pin)?;
    // Pass 2: everything still unresolved.
    drive_pass(&mut ledger, cache, options.loop_limit, |_| true)?;

    project_install_set(ledger, cache)
}

fn drive_pass<C, P>(
    ledger: &mut Ledger,
    cache: &C,
    limit: usize,
    eligible: P,
) -> Result<(), ResolveError>
where
    C: DependencyCache,
    P: Fn(&PackageRequest) -> bool,
{
    let mut iterations = 0usize;
    loop {
        let next = ledger
            .iter()
            .find(|(_, request)| !request.resolved && eligible(request))
            .map(|(name, _)| name.clone());
        let Some(name) = next else {
            return Ok(());
        };

        iterations += 1;
        if iterations > limit {
            return Err(ResolveError::ResolutionDivergence {
                limit,
                pending: ledger
                    .iter()
                    .filter(|(_, request)| !request.resolved)
                    .map(|(name, _)| name.clone())
                    .collect(),
            });
        }

        resolve_one(&name, ledger, cache)?;
    }
}
