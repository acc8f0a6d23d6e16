//! Locale bundles must define the same messages with the same variables as
//! the fallback, or `fl!` lookups silently fall back at runtime.

use std::collections::{BTreeMap, BTreeSet};

const EN_US: &str = include_str!("../i18n/en-US/kopi_ui.ftl");
const FIL_PH: &str = include_str!("../i18n/fil-PH/kopi_ui.ftl");

const LOCALES: &[(&str, &str)] = &[("fil-PH", FIL_PH)];

/// Message id -> variables (`{ $name }`) referenced in its pattern,
/// including continuation lines.
fn messages(src: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut current: Option<String> = None;

    for line in src.lines() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let body = if line.starts_with(char::is_whitespace) {
            line
        } else {
            let Some((id, rest)) = line.split_once('=') else {
                current = None;
                continue;
            };
            let id = id.trim().to_string();
            assert!(
                !out.contains_key(&id),
                "duplicate message id {id:?} in bundle"
            );
            out.insert(id.clone(), BTreeSet::new());
            current = Some(id);
            rest
        };

        if let Some(id) = &current {
            let vars = out.entry(id.clone()).or_default();
            for piece in body.split("{ $").skip(1) {
                if let Some(name) = piece.split(|c: char| c == ' ' || c == '}').next() {
                    vars.insert(name.to_string());
                }
            }
        }
    }
    out
}

#[test]
fn fallback_is_not_empty() {
    let fallback = messages(EN_US);
    assert!(fallback.len() > 20, "only {} messages", fallback.len());
    assert_eq!(
        fallback.get("a11y-navigating"),
        Some(&BTreeSet::from(["page".to_string()]))
    );
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback = messages(EN_US);
    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        let bundle = messages(src);
        for (id, vars) in &fallback {
            match bundle.get(id) {
                None => failures.push(format!("{locale}: missing {id}")),
                Some(found) if found != vars => failures.push(format!(
                    "{locale}: {id} uses {found:?}, fallback uses {vars:?}"
                )),
                Some(_) => {}
            }
        }
    }

    assert!(
        failures.is_empty(),
        "translation check failed:\n  {}",
        failures.join("\n  ")
    );
}
