use super::*;

#[test]
fn parses_plain_and_pinned_seed_tokens() {
    let ledger = parse_seed_tokens(["curl", "libssl3=3.0.11-1"]).expect("seed must parse");

    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger["curl"], PackageRequest::floating());
    assert_eq!(ledger["libssl3"], PackageRequest::pinned("3.0.11-1"));
    assert!(!ledger["curl"].has_pin());
    assert!(ledger["libssl3"].has_pin());
}

#[test]
fn duplicate_seed_names_collapse_to_last_version() {
    let ledger =
        parse_seed_tokens(["curl=7.88.1-10", "curl=7.88.1-11"]).expect("seed must parse");

    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger["curl"].version.as_deref(), Some("7.88.1-11"));
}

#[test]
fn pinned_seed_replaced_by_plain_token_loses_its_pin() {
    let ledger = parse_seed_tokens(["curl=7.88.1-10", "curl"]).expect("seed must parse");

    assert_eq!(ledger["curl"], PackageRequest::floating());
}

#[test]
fn rejects_seed_token_without_name() {
    let err = parse_seed_tokens(["=1.0"]).expect_err("must fail");
    assert!(err.to_string().contains("missing a package name"));
}

#[test]
fn rejects_seed_token_without_version() {
    let err = parse_seed_tokens(["curl="]).expect_err("must fail");
    assert!(err.to_string().contains("missing a version"));
}

#[test]
fn formats_request_tokens_in_name_order() {
    let ledger = parse_seed_tokens(["zlib1g", "bash=5.2-1"]).expect("seed must parse");

    assert_eq!(format_request_tokens(&ledger), vec!["bash=5.2-1", "zlib1g"]);
}

#[test]
fn parses_relation_symbols_including_historical_spellings() {
    assert_eq!(VersionRelation::parse("="), Some(VersionRelation::Exact));
    assert_eq!(VersionRelation::parse(">="), Some(VersionRelation::LaterEq));
    assert_eq!(VersionRelation::parse(">"), Some(VersionRelation::LaterEq));
    assert_eq!(VersionRelation::parse("<="), Some(VersionRelation::EarlierEq));
    assert_eq!(VersionRelation::parse("<"), Some(VersionRelation::EarlierEq));
    assert_eq!(VersionRelation::parse(">>"), Some(VersionRelation::StrictlyLater));
    assert_eq!(VersionRelation::parse("<<"), Some(VersionRelation::StrictlyEarlier));
    assert_eq!(VersionRelation::parse("~"), None);
    assert!(VersionRelation::Exact.is_exact());
    assert!(!VersionRelation::LaterEq.is_exact());
}

#[test]
fn mode_round_trips_through_strings() {
    for mode in [
        Mode::Install,
        Mode::InstallOnlyNew,
        Mode::Resolve,
        Mode::ResolveOnlyNew,
    ] {
        let parsed: Mode = mode.as_str().parse().expect("mode must parse");
        assert_eq!(parsed, mode);
    }
    assert!("upgrade".parse::<Mode>().is_err());
}

#[test]
fn mode_predicates_match_the_action_table() {
    assert!(Mode::Install.performs_install());
    assert!(Mode::InstallOnlyNew.performs_install());
    assert!(!Mode::Resolve.performs_install());
    assert!(!Mode::ResolveOnlyNew.performs_install());

    assert!(!Mode::Install.only_new());
    assert!(Mode::InstallOnlyNew.only_new());
    assert!(!Mode::Resolve.only_new());
    assert!(Mode::ResolveOnlyNew.only_new());
}

#[test]
fn memory_cache_first_registered_version_is_the_candidate() {
    let mut cache = MemoryCache::new();
    cache.add_version("curl", "7.88.1-10", Vec::new());
    cache.add_version("curl", "7.88.1-11", Vec::new());

    assert_eq!(
        cache.candidate_version("curl").expect("candidate"),
        "7.88.1-10"
    );

    cache.set_candidate("curl", "7.88.1-11");
    assert_eq!(
        cache.candidate_version("curl").expect("candidate"),
        "7.88.1-11"
    );
}

#[test]
fn memory_cache_reports_installed_state() {
    let mut cache = MemoryCache::new();
    cache.add_version("curl", "7.88.1-10", Vec::new());
    cache.set_installed("curl", "7.88.1-9");

    assert!(cache.is_known("curl"));
    assert!(cache.is_installed("curl").expect("query"));
    assert_eq!(
        cache.installed_version("curl").expect("query").as_deref(),
        Some("7.88.1-9")
    );
    assert!(!cache.is_installed("wget").expect("query"));
}

#[test]
fn memory_cache_rejects_unknown_names_and_versions() {
    let mut cache = MemoryCache::new();
    cache.add_version("curl", "7.88.1-10", Vec::new());

    assert!(cache.candidate_version("wget").is_err());
    assert!(cache.versions("wget").is_err());
    assert!(cache.dependency_groups("curl", "9.9").is_err());
}

#[test]
fn memory_cache_lists_providers_for_virtual_names() {
    let mut cache = MemoryCache::new();
    cache.add_provider("httpd", "apache2");
    cache.add_provider("httpd", "nginx");

    assert_eq!(
        cache.providers("httpd").expect("query"),
        vec!["apache2", "nginx"]
    );
    assert!(cache.providers("smtpd").expect("query").is_empty());
    assert!(!cache.is_known("httpd"));
}

#[test]
fn dependency_groups_round_trip_through_the_cache() {
    let group = vec![
        DependencySpec::at_least("libc6", "2.34"),
        DependencySpec::exact("libssl3", "3.0.11-1"),
        DependencySpec::unversioned("zlib1g"),
    ];
    let mut cache = MemoryCache::new();
    cache.add_version("curl", "7.88.1-10", vec![group.clone()]);

    let groups = cache
        .dependency_groups("curl", "7.88.1-10")
        .expect("groups");
    assert_eq!(groups, vec![group]);
    assert_eq!(groups[0][0].relation.symbol(), ">=");
    assert_eq!(groups[0][2].relation.symbol(), "");
}
