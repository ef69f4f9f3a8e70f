/// One alternative inside an OR-dependency group: `name (relation version)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    pub name: String,
    pub relation: VersionRelation,
    pub version: String,
}

impl DependencySpec {
    pub fn unversioned(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relation: VersionRelation::Unversioned,
            version: String::new(),
        }
    }

    pub fn exact(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relation: VersionRelation::Exact,
            version: version.into(),
        }
    }

    pub fn at_least(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relation: VersionRelation::LaterEq,
            version: version.into(),
        }
    }
}

/// Version relation attached to a dependency, as written in package stanzas.
/// Only `Exact` changes pinning behaviour; the rest are kept so callers can
/// render the original constraint in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionRelation {
    Exact,
    LaterEq,
    EarlierEq,
    StrictlyLater,
    StrictlyEarlier,
    Unversioned,
}

impl VersionRelation {
    pub fn is_exact(self) -> bool {
        matches!(self, Self::Exact)
    }

    /// Parse the relation symbol used by dpkg/apt. `>` and `<` are accepted
    /// as the historical spellings of `>=` and `<=`.
    pub fn parse(symbol: &str) -> Option<Self> {
        match symbol {
            "=" => Some(Self::Exact),
            ">=" | ">" => Some(Self::LaterEq),
            "<=" | "<" => Some(Self::EarlierEq),
            ">>" => Some(Self::StrictlyLater),
            "<<" => Some(Self::StrictlyEarlier),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Exact => "=",
            Self::LaterEq => ">=",
            Self::EarlierEq => "<=",
            Self::StrictlyLater => ">>",
            Self::StrictlyEarlier => "<<",
            Self::Unversioned => "",
        }
    }
}

/// An ordered list of alternatives, any one of which satisfies the slot.
pub type DependencyGroup = Vec<DependencySpec>;
