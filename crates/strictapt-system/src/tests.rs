use strictapt_core::{parse_seed_tokens, DependencySpec, VersionRelation};

use crate::driver::AptGetDriver;
use crate::parse::{
    parse_depends_field, parse_policy_output, parse_reverse_provides, parse_show_output,
};

const POLICY_SAMPLE: &str = "\
curl:
  Installed: 7.88.1-10
  Candidate: 7.88.1-10+deb12u5
  Version table:
     7.88.1-10+deb12u5 500
        500 http://deb.debian.org/debian bookworm/main amd64 Packages
 *** 7.88.1-10 100
        100 /var/lib/dpkg/status
";

#[test]
fn parses_policy_output_with_installed_and_candidate() {
    let record = parse_policy_output(POLICY_SAMPLE);

    assert_eq!(record.installed.as_deref(), Some("7.88.1-10"));
    assert_eq!(record.candidate.as_deref(), Some("7.88.1-10+deb12u5"));
    assert_eq!(record.versions, vec!["7.88.1-10+deb12u5", "7.88.1-10"]);
}

#[test]
fn parses_policy_output_for_a_package_that_is_not_installed() {
    let raw = "\
wget:
  Installed: (none)
  Candidate: 1.21.3-1
  Version table:
     1.21.3-1 500
        500 http://deb.debian.org/debian bookworm/main amd64 Packages
";
    let record = parse_policy_output(raw);

    assert_eq!(record.installed, None);
    assert_eq!(record.candidate.as_deref(), Some("1.21.3-1"));
    assert_eq!(record.versions, vec!["1.21.3-1"]);
}

#[test]
fn parses_policy_output_for_a_pure_virtual_name() {
    let raw = "\
httpd:
  Installed: (none)
  Candidate: (none)
  Version table:
";
    let record = parse_policy_output(raw);

    assert_eq!(record.installed, None);
    assert_eq!(record.candidate, None);
    assert!(record.versions.is_empty());
}

#[test]
fn parses_depends_field_groups_and_alternatives() {
    let groups = parse_depends_field(
        "libc6 (>= 2.34), default-mta | mail-transport-agent, libssl3 (= 3.0.11-1)",
    );

    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0], vec![DependencySpec::at_least("libc6", "2.34")]);
    assert_eq!(
        groups[1],
        vec![
            DependencySpec::unversioned("default-mta"),
            DependencySpec::unversioned("mail-transport-agent"),
        ]
    );
    assert_eq!(
        groups[2],
        vec![DependencySpec::exact("libssl3", "3.0.11-1")]
    );
}

#[test]
fn depends_parser_strips_multiarch_qualifiers() {
    let groups = parse_depends_field("python3:any (>= 3.11), perl:any");

    assert_eq!(groups[0][0].name, "python3");
    assert_eq!(groups[0][0].relation, VersionRelation::LaterEq);
    assert_eq!(groups[1][0].name, "perl");
}

#[test]
fn depends_parser_keeps_unreadable_constraints_as_unversioned() {
    let groups = parse_depends_field("oddball (~ 1.0)");

    assert_eq!(groups, vec![vec![DependencySpec::unversioned("oddball")]]);
}

#[test]
fn depends_parser_handles_strict_relations() {
    let groups = parse_depends_field("libfoo (<< 2.0), libbar (>> 1.5)");

    assert_eq!(groups[0][0].relation, VersionRelation::StrictlyEarlier);
    assert_eq!(groups[0][0].version, "2.0");
    assert_eq!(groups[1][0].relation, VersionRelation::StrictlyLater);
}

#[test]
fn empty_depends_field_yields_no_groups() {
    assert!(parse_depends_field("").is_empty());
    assert!(parse_depends_field("  ,  ").is_empty());
}

#[test]
fn parses_show_output_stanzas_with_continuations() {
    let raw = "\
Package: curl
Version: 7.88.1-10+deb12u5
Pre-Depends: init-system-helpers (>= 1.54)
Depends: libc6 (>= 2.34),
 libcurl4 (= 7.88.1-10+deb12u5)
Description: command line tool
 for transferring data with URLs

Package: curl
Version: 7.88.1-10
Depends: libc6 (>= 2.34)
";
    let stanzas = parse_show_output(raw);

    assert_eq!(stanzas.len(), 2);
    assert_eq!(stanzas[0].version, "7.88.1-10+deb12u5");
    // Pre-Depends groups come first, then Depends in listed order.
    assert_eq!(
        stanzas[0].depends,
        vec![
            vec![DependencySpec::at_least("init-system-helpers", "1.54")],
            vec![DependencySpec::at_least("libc6", "2.34")],
            vec![DependencySpec::exact("libcurl4", "7.88.1-10+deb12u5")],
        ]
    );
    assert_eq!(stanzas[1].version, "7.88.1-10");
    assert_eq!(
        stanzas[1].depends,
        vec![vec![DependencySpec::at_least("libc6", "2.34")]]
    );
}

#[test]
fn parses_reverse_provides_section() {
    let raw = "\
Package: mail-transport-agent
Versions:

Reverse Depends:
  mutt,mail-transport-agent
Dependencies:
Provides:
Reverse Provides:
postfix 3.7.6-0+deb12u2 (= )
exim4-daemon-light 4.96-15+deb12u4
postfix 3.7.5-1
";
    let providers = parse_reverse_provides(raw);

    assert_eq!(providers, vec!["postfix", "exim4-daemon-light"]);
}

#[test]
fn reverse_provides_is_empty_without_the_section() {
    assert!(parse_reverse_provides("Package: foo\nVersions: 1.0\n").is_empty());
}

#[test]
fn install_argv_places_options_between_yes_and_install() {
    let requests =
        parse_seed_tokens(["zlib1g", "curl=7.88.1-10"]).expect("seed must parse");

    let mut driver = AptGetDriver::new();
    driver.push_option("--no-install-recommends");
    driver.push_option("-o");
    driver.push_option("Dpkg::Options::=--force-confdef");

    assert_eq!(
        driver.install_argv(&requests),
        vec![
            "apt-get",
            "--yes",
            "--no-install-recommends",
            "-o",
            "Dpkg::Options::=--force-confdef",
            "install",
            "curl=7.88.1-10",
            "zlib1g",
        ]
    );
}

#[test]
fn install_argv_without_options_is_minimal() {
    let requests = parse_seed_tokens(["curl"]).expect("seed must parse");

    assert_eq!(
        AptGetDriver::new().install_argv(&requests),
        vec!["apt-get", "--yes", "install", "curl"]
    );
}
