use thiserror::Error;

/// Fatal resolution failures. All of these abort the run: the caller either
/// gets a complete, internally consistent ledger or one of these. There is
/// no partial-success mode and no retry inside the resolver.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("version {version} for package {name} not found")]
    VersionNotFound { name: String, version: String },

    #[error("{name} is a virtual package and no package provides it")]
    UnresolvableVirtualPackage { name: String },

    /// The fixed-point loop exceeded its iteration ceiling. On a finite,
    /// well-formed dependency graph this cannot happen; the still-unresolved
    /// names are carried for diagnosis.
    #[error(
        "failed to resolve dependencies within {limit} iterations; still unresolved: {}",
        .pending.join(" ")
    )]
    ResolutionDivergence { limit: usize, pending: Vec<String> },

    #[error(transparent)]
    Cache(#[from] anyhow::Error),
}
