//! Property-based tests for destination file resolution.
//!
//! The write-or-check protocol must behave identically run over run: fresh
//! writes are byte-stable, matching read-only copies stay untouched, and
//! stale read-only copies always surface as mismatches.

use std::fs;
use std::path::Path;

use metricgen_core::{expand, resolve, FileOutcome, Mode, Template};
use proptest::prelude::*;

fn dimensionality_strategy() -> impl Strategy<Value = u32> {
    1..=metricgen_core::MAX_DIMENSIONALITY
}

fn mode_strategy() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Generate), Just(Mode::CheckOnly)]
}

fn template() -> Template {
    Template::from_content(
        "metric.rs.tmpl",
        "// @generated by {{generator}}.\npub struct Metric{{dimensionality}}<V, {{type_params}}> {}\n",
    )
}

fn set_readonly(path: &Path, readonly: bool) {
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_readonly(readonly);
    fs::set_permissions(path, perms).unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: generating twice into the same destination is idempotent;
    /// the second pass rewrites the same bytes.
    #[test]
    fn prop_repeated_generation_is_byte_identical(
        d in dimensionality_strategy(),
        mode in mode_strategy(),
    ) {
        let dir = tempfile::TempDir::new().unwrap();
        let dest = dir.path().join(format!("metric{d}.rs"));
        let vars = expand(d).unwrap();

        let first = resolve(&template(), &dest, &vars, mode).unwrap();
        let after_first = fs::read(&dest).unwrap();
        let second = resolve(&template(), &dest, &vars, mode).unwrap();
        let after_second = fs::read(&dest).unwrap();

        prop_assert_eq!(first, FileOutcome::Written);
        prop_assert_eq!(second, FileOutcome::Written);
        prop_assert_eq!(after_first, after_second);
    }

    /// Property: a read-only destination holding the generated bytes is
    /// reported unchanged and never rewritten, in either mode.
    #[test]
    fn prop_matching_readonly_copy_is_untouched(
        d in dimensionality_strategy(),
        mode in mode_strategy(),
    ) {
        let dir = tempfile::TempDir::new().unwrap();
        let dest = dir.path().join(format!("metric{d}.rs"));
        let vars = expand(d).unwrap();

        resolve(&template(), &dest, &vars, Mode::Generate).unwrap();
        let expected = fs::read(&dest).unwrap();
        set_readonly(&dest, true);

        let outcome = resolve(&template(), &dest, &vars, mode).unwrap();

        prop_assert_eq!(outcome, FileOutcome::Unchanged);
        prop_assert_eq!(fs::read(&dest).unwrap(), expected);
        set_readonly(&dest, false);
    }

    /// Property: a stale read-only destination always surfaces as a
    /// mismatch with a `.new` sibling, and the destination keeps its bytes.
    #[test]
    fn prop_stale_readonly_copy_always_mismatches(
        d in dimensionality_strategy(),
        mode in mode_strategy(),
    ) {
        let dir = tempfile::TempDir::new().unwrap();
        let dest = dir.path().join(format!("metric{d}.rs"));
        let vars = expand(d).unwrap();

        resolve(&template(), &dest, &vars, Mode::Generate).unwrap();
        let fresh = fs::read_to_string(&dest).unwrap();
        let stale = format!("{fresh}// local edit\n");
        fs::write(&dest, &stale).unwrap();
        set_readonly(&dest, true);

        let outcome = resolve(&template(), &dest, &vars, mode).unwrap();

        let new_path = dir.path().join(format!("metric{d}.rs.new"));
        prop_assert_eq!(
            outcome,
            FileOutcome::Mismatch { dest: dest.clone(), new_path: new_path.clone() }
        );
        prop_assert_eq!(fs::read_to_string(&dest).unwrap(), stale);
        prop_assert_eq!(fs::read_to_string(&new_path).unwrap(), fresh);
        set_readonly(&dest, false);
    }

    /// Property: the mode never changes what happens to a destination; the
    /// permission bit alone selects comparison semantics.
    #[test]
    fn prop_outcomes_are_mode_invariant(d in dimensionality_strategy()) {
        let vars = expand(d).unwrap();

        let mut outcomes = Vec::new();
        for mode in [Mode::Generate, Mode::CheckOnly] {
            let dir = tempfile::TempDir::new().unwrap();
            let dest = dir.path().join("metric.rs");
            fs::write(&dest, "stale").unwrap();
            set_readonly(&dest, true);

            let outcome = resolve(&template(), &dest, &vars, mode).unwrap();
            outcomes.push(match outcome {
                FileOutcome::Written => "written",
                FileOutcome::Unchanged => "unchanged",
                FileOutcome::Mismatch { .. } => "mismatch",
            });
            set_readonly(&dest, false);
        }

        prop_assert_eq!(outcomes[0], outcomes[1]);
    }
}
