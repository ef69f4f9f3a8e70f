//! Parsers for the `apt-cache` output formats the system adapter consumes.
//! Kept free of process handling so they can be exercised against captured
//! output.

use strictapt_core::{DependencyGroup, DependencySpec, VersionRelation};

/// Parsed `apt-cache policy <name>` output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PolicyRecord {
    pub installed: Option<String>,
    pub candidate: Option<String>,
    pub versions: Vec<String>,
}

pub(crate) fn parse_policy_output(raw: &str) -> PolicyRecord {
    let mut record = PolicyRecord::default();
    let mut in_version_table = false;

    for line in raw.lines() {
        let trimmed = line.trim_start();
        if !in_version_table {
            if let Some(value) = trimmed.strip_prefix("Installed:") {
                record.installed = policy_version_value(value);
            } else if let Some(value) = trimmed.strip_prefix("Candidate:") {
                record.candidate = policy_version_value(value);
            } else if trimmed.starts_with("Version table:") {
                in_version_table = true;
            }
            continue;
        }

        // Version rows sit at five columns of indent, or carry the ` *** `
        // marker for the installed one. Source rows are indented deeper.
        let indent = line.len() - trimmed.len();
        let (is_version_row, row) = match trimmed.strip_prefix("*** ") {
            Some(rest) => (true, rest),
            None => (indent == 5, trimmed),
        };
        if !is_version_row {
            continue;
        }
        if let Some(version) = row.split_whitespace().next() {
            record.versions.push(version.to_string());
        }
    }

    record
}

fn policy_version_value(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == "(none)" {
        return None;
    }
    Some(value.to_string())
}

/// One stanza of `apt-cache show <name>` output: a package version and its
/// dependency groups (Pre-Depends first, then Depends, both in listed order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PackageStanza {
    pub version: String,
    pub depends: Vec<DependencyGroup>,
}

pub(crate) fn parse_show_output(raw: &str) -> Vec<PackageStanza> {
    let mut stanzas = Vec::new();
    for block in raw.split("\n\n") {
        let fields = stanza_fields(block);
        let Some(version) = fields
            .iter()
            .find(|(name, _)| name == "Version")
            .map(|(_, value)| value.clone())
        else {
            continue;
        };

        let mut depends = Vec::new();
        for field_name in ["Pre-Depends", "Depends"] {
            if let Some((_, value)) = fields.iter().find(|(name, _)| name == field_name) {
                depends.extend(parse_depends_field(value));
            }
        }
        stanzas.push(PackageStanza { version, depends });
    }
    stanzas
}

/// Fold a stanza into `(field, value)` pairs, joining continuation lines
/// (leading whitespace) onto the preceding field.
fn stanza_fields(block: &str) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = Vec::new();
    for line in block.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with(' ') || line.starts_with('\t') {
            if let Some((_, value)) = fields.last_mut() {
                value.push(' ');
                value.push_str(line.trim());
            }
            continue;
        }
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        fields.push((name.trim().to_string(), value.trim().to_string()));
    }
    fields
}

/// Parse a `Depends:`-style field value: comma-separated groups of
/// `|`-separated alternatives, each `name` or `name (relation version)`.
pub(crate) fn parse_depends_field(raw: &str) -> Vec<DependencyGroup> {
    raw.split(',')
        .filter_map(|group| {
            let alternatives: Vec<DependencySpec> = group
                .split('|')
                .filter_map(parse_dependency_spec)
                .collect();
            (!alternatives.is_empty()).then_some(alternatives)
        })
        .collect()
}

fn parse_dependency_spec(raw: &str) -> Option<DependencySpec> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let Some((name, constraint)) = raw.split_once('(') else {
        return Some(DependencySpec::unversioned(normalize_name(raw)));
    };

    let name = normalize_name(name);
    let constraint = constraint.trim_end().trim_end_matches(')').trim();
    let parsed = constraint
        .split_once(' ')
        .and_then(|(symbol, version)| {
            let relation = VersionRelation::parse(symbol.trim())?;
            Some((relation, version.trim().to_string()))
        });
    match parsed {
        Some((relation, version)) => Some(DependencySpec {
            name,
            relation,
            version,
        }),
        // Constraints we cannot read are kept as unversioned rather than
        // silently dropping the alternative from its group.
        None => Some(DependencySpec::unversioned(name)),
    }
}

/// Strip whitespace and any multiarch qualifier (`python3:any`).
fn normalize_name(raw: &str) -> String {
    let raw = raw.trim();
    match raw.split_once(':') {
        Some((name, _arch)) => name.to_string(),
        None => raw.to_string(),
    }
}

/// Extract provider names from the `Reverse Provides:` section of
/// `apt-cache showpkg <name>` output. It is the final section; every
/// following line names one providing package.
pub(crate) fn parse_reverse_provides(raw: &str) -> Vec<String> {
    let mut providers = Vec::new();
    let mut in_section = false;
    for line in raw.lines() {
        if line.starts_with("Reverse Provides:") {
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }
        if let Some(name) = line.split_whitespace().next() {
            if !providers.iter().any(|existing| existing == name) {
                providers.push(name.to_string());
            }
        }
    }
    providers
}
