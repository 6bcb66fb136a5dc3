//! End-to-end merge tests on fixture configurations.
//!
//! Each fixture directory holds an original document, an injected document
//! and the expected merge result.

use std::fs;
use std::path::Path;

use conf_merger::platform::{LOON, QUANX};
use conf_merger::{merge_conf, ConfMerger, SectionSplitter};
use pretty_assertions::assert_eq;

/// Load fixture file content.
fn load_fixture(platform: &str, name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(platform)
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn run_fixture(platform: &str) -> (String, String) {
    let original = load_fixture(platform, "original.conf");
    let injected = load_fixture(platform, "inject.conf");
    let expected = load_fixture(platform, "expected.conf");

    let merged = merge_conf(&original, &injected, platform);
    (merged, expected.trim_end_matches('\n').to_string())
}

#[test]
fn test_quanx_fixture() {
    let (merged, expected) = run_fixture(QUANX);
    assert_eq!(merged, expected);
}

#[test]
fn test_loon_fixture() {
    let (merged, expected) = run_fixture(LOON);
    assert_eq!(merged, expected);
}

#[test]
fn test_loon_fixture_as_quanx_concatenates_plugins() {
    let original = load_fixture(LOON, "original.conf");
    let injected = load_fixture(LOON, "inject.conf");

    let merged = merge_conf(&original, &injected, QUANX);
    let youtube_lines = merged
        .lines()
        .filter(|l| l.starts_with("https://example.com/plugins/youtube.plugin"))
        .count();
    assert_eq!(youtube_lines, 2);
}

#[test]
fn test_head_preserved_regardless_of_injection() {
    let original = load_fixture(QUANX, "original.conf");
    let head = "# QuantumultX configuration\n# Maintainer: bob\n\n[General]";

    for injected in ["", "# other head\n[general]\na=1", "[dns]\nserver=1.1.1.1"] {
        let merged = merge_conf(&original, injected, QUANX);
        assert!(merged.starts_with(head), "head lost for injected={injected:?}");
    }
}

#[test]
fn test_no_triple_newlines_in_output() {
    let original = "# a\n\n\n\n[general]\n\n\na=1\n\n\n\n[dns]\n\n\n";
    let injected = "[dns]\nserver=1.1.1.1\n\n\n\n\nserver=8.8.8.8\n\n\n[policy]\n\n\n\n";

    let merged = merge_conf(original, injected, QUANX);
    assert!(!merged.contains("\n\n\n"), "{merged:?}");
}

#[test]
fn test_merged_output_is_stable_on_second_pass() {
    let original = load_fixture(QUANX, "original.conf");
    let injected = load_fixture(QUANX, "inject.conf");

    let once = merge_conf(&original, &injected, QUANX);
    let twice = merge_conf(&once, &injected, QUANX);

    // Key-unique sections keep one value per key after re-merging.
    let splitter = SectionSplitter::new();
    let once_doc = splitter.split(&once);
    let twice_doc = splitter.split(&twice);
    assert_eq!(once_doc.block("general"), twice_doc.block("general"));
    assert_eq!(once_doc.block("mitm"), twice_doc.block("mitm"));
    assert_eq!(once_doc.section_names(), twice_doc.section_names());
}

#[test]
fn test_split_roundtrip_on_fixtures() {
    let splitter = SectionSplitter::new();
    for platform in [QUANX, LOON] {
        for name in ["original.conf", "inject.conf"] {
            let text = load_fixture(platform, name);
            let doc = splitter.split(&text);
            assert_eq!(doc.to_text(), text.trim_end_matches('\n'));
        }
    }
}

#[test]
fn test_default_merger_matches_free_function() {
    let original = load_fixture(LOON, "original.conf");
    let injected = load_fixture(LOON, "inject.conf");

    assert_eq!(
        ConfMerger::default().merge(&original, &injected, LOON),
        merge_conf(&original, &injected, LOON)
    );
}
