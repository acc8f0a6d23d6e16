//! Cross-checks `t!` call sites against the embedded Fluent bundles.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "kopi_ui.ftl";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn is_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Message ids defined at the start of a line (`id = ...`).
fn message_ids(ftl: &str) -> BTreeSet<String> {
    ftl.lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && !id.starts_with('-') && id.chars().all(is_key_char))
        .map(str::to_string)
        .collect()
}

/// Literal keys passed to `t!` anywhere under `dir`.
fn referenced_keys(dir: &Path, out: &mut BTreeSet<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            referenced_keys(&path, out);
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }
        let Ok(source) = fs::read_to_string(&path) else {
            continue;
        };
        for chunk in source.split("t!(\"").skip(1) {
            if let Some((key, _)) = chunk.split_once('"') {
                if !key.is_empty() && key.chars().all(is_key_char) {
                    out.insert(key.to_string());
                }
            }
        }
    }
}

fn locale_dirs(root: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<_> = fs::read_dir(root)
        .map(|entries| {
            entries
                .flatten()
                .map(|e| e.path())
                .filter(|p| p.is_dir())
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn every_referenced_key_exists_in_fallback() {
    let root = crate_root();
    let fallback = fs::read_to_string(root.join("i18n/en-US").join(FTL_FILENAME))
        .expect("fallback bundle readable");
    let defined = message_ids(&fallback);
    assert!(!defined.is_empty(), "fallback bundle has no messages");

    let mut used = BTreeSet::new();
    referenced_keys(&root.join("src"), &mut used);
    assert!(used.contains("nav-home"), "source scan found nothing");

    let missing: Vec<_> = used.difference(&defined).cloned().collect();
    assert!(missing.is_empty(), "keys missing from en-US: {missing:?}");
}

#[test]
fn every_locale_matches_fallback_ids() {
    let root = crate_root().join("i18n");
    let fallback =
        message_ids(&fs::read_to_string(root.join("en-US").join(FTL_FILENAME)).unwrap_or_default());

    let mut report = Vec::new();
    for dir in locale_dirs(&root) {
        let file = dir.join(FTL_FILENAME);
        let ids = message_ids(
            &fs::read_to_string(&file)
                .unwrap_or_else(|_| panic!("locale {} lacks {FTL_FILENAME}", dir.display())),
        );
        let missing: Vec<_> = fallback.difference(&ids).cloned().collect();
        let extra: Vec<_> = ids.difference(&fallback).cloned().collect();
        if !missing.is_empty() || !extra.is_empty() {
            report.push(format!(
                "{}: missing {missing:?}, extra {extra:?}",
                dir.display()
            ));
        }
    }
    assert!(report.is_empty(), "{}", report.join("\n"));
}
