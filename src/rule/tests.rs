// Rule module tests.

use super::*;

fn key(domain: &str) -> char {
    group_key(domain).expect("domain should yield a group key")
}

#[test]
fn test_normalize_full_decoration() {
    assert_eq!(normalize_rule("||tracker.example.com^"), "tracker.example.com");
}

#[test]
fn test_normalize_prefix_only() {
    assert_eq!(normalize_rule("||example.com"), "example.com");
}

#[test]
fn test_normalize_suffix_only() {
    assert_eq!(normalize_rule("example.com^"), "example.com");
}

#[test]
fn test_normalize_undecorated_passthrough() {
    assert_eq!(normalize_rule("example.com"), "example.com");
}

#[test]
fn test_normalize_keeps_case() {
    // No case folding: the domain is emitted exactly as written
    assert_eq!(normalize_rule("||Ads.Example.COM^"), "Ads.Example.COM");
}

#[test]
fn test_normalize_strips_only_one_of_each() {
    assert_eq!(normalize_rule("||||a.com^^"), "||a.com^");
}

#[test]
fn test_normalize_single_pipe_is_not_decoration() {
    assert_eq!(normalize_rule("|a.com^"), "|a.com");
}

#[test]
fn test_normalize_to_empty() {
    assert_eq!(normalize_rule("||^"), "");
    assert_eq!(normalize_rule("^"), "");
    assert_eq!(normalize_rule("||"), "");
}

#[test]
fn test_group_key_second_level_domain() {
    assert_eq!(key("example.com"), 'E');
    assert_eq!(key("google.com"), 'G');
}

#[test]
fn test_group_key_subdomain_uses_registrable_label() {
    assert_eq!(key("mail.example.com"), 'E');
    assert_eq!(key("ads.example.com"), 'E');
}

#[test]
fn test_group_key_deep_subdomain() {
    assert_eq!(key("a.b.c.tracker.net"), 'T');
}

#[test]
fn test_group_key_multi_part_suffix_uses_second_to_last_label() {
    // No public suffix awareness: `co` is the second-to-last label here
    assert_eq!(key("shop.example.co.uk"), 'C');
}

#[test]
fn test_group_key_single_label() {
    assert_eq!(key("localhost"), 'L');
}

#[test]
fn test_group_key_uppercases() {
    assert_eq!(key("Example.com"), 'E');
    assert_eq!(key("x.YouTube.com"), 'Y');
}

#[test]
fn test_group_key_digit() {
    assert_eq!(key("360.cn"), '3');
    assert_eq!(key("ads.163.com"), '1');
}

#[test]
fn test_group_key_non_ascii() {
    assert_eq!(key("ads.über.de"), 'Ü');
}

#[test]
fn test_group_key_without_single_char_uppercase() {
    assert_eq!(key("ßtracker.de"), 'ß');
}

#[test]
fn test_group_key_is_deterministic() {
    assert_eq!(key("cdn.bad.co"), key("cdn.bad.co"));
}

#[test]
fn test_group_key_empty_domain() {
    match group_key("") {
        Err(BlocklistError::MalformedDomain { reason, .. }) => {
            assert_eq!(reason, MalformedReason::Empty)
        }
        other => panic!("expected malformed domain, got {:?}", other),
    }
}

#[test]
fn test_group_key_empty_registrable_label() {
    match group_key("a..com") {
        Err(BlocklistError::MalformedDomain { domain, reason }) => {
            assert_eq!(domain, "a..com");
            assert_eq!(reason, MalformedReason::EmptyLabel);
        }
        other => panic!("expected malformed domain, got {:?}", other),
    }
    assert!(group_key("ads..com.").is_err());
}

#[test]
fn test_group_key_empty_label_elsewhere_is_kept() {
    // Only the label the key is read from matters
    assert_eq!(key("a..b.com"), 'B');
    assert_eq!(key("ads..example.com"), 'E');
}

#[test]
fn test_group_key_trailing_dot_fqdn() {
    assert_eq!(key("example.com."), 'E');
    assert_eq!(key("mail.example.com."), 'E');
    assert_eq!(key("localhost."), 'L');
}

#[test]
fn test_group_key_leading_dot() {
    assert_eq!(key(".tracker.net"), 'T');
    assert_eq!(key(".mail.example.com"), 'E');
}

#[test]
fn test_group_key_only_dots() {
    for domain in [".", "..", "..."] {
        match group_key(domain) {
            Err(BlocklistError::MalformedDomain { reason, .. }) => {
                assert_eq!(reason, MalformedReason::OnlyDots, "domain {domain:?}")
            }
            other => panic!("expected malformed domain for {domain:?}, got {:?}", other),
        }
    }
}

#[test]
fn test_decorate() {
    assert_eq!(decorate("tracker.example.com"), "||tracker.example.com^");
}

#[test]
fn test_decoration_round_trip() {
    let domain = normalize_rule("||tracker.example.com^");
    assert_eq!(decorate(domain), "||tracker.example.com^");
}
