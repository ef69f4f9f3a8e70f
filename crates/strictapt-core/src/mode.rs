use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

/// What to do with the resolved closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Install,
    InstallOnlyNew,
    Resolve,
    ResolveOnlyNew,
}

impl Mode {
    /// Whether already-installed seed packages are dropped before the first
    /// resolution pass.
    pub fn only_new(self) -> bool {
        matches!(self, Self::InstallOnlyNew | Self::ResolveOnlyNew)
    }

    /// Whether the projected set is handed to the installer afterwards.
    /// Resolve modes only print the computed list.
    pub fn performs_install(self) -> bool {
        matches!(self, Self::Install | Self::InstallOnlyNew)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::InstallOnlyNew => "install-only-new",
            Self::Resolve => "resolve",
            Self::ResolveOnlyNew => "resolve-only-new",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "install" => Ok(Self::Install),
            "install-only-new" => Ok(Self::InstallOnlyNew),
            "resolve" => Ok(Self::Resolve),
            "resolve-only-new" => Ok(Self::ResolveOnlyNew),
            _ => Err(anyhow!("unknown mode '{raw}'")),
        }
    }
}
