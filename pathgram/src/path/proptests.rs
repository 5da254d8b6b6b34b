//! Property-based tests across path operations.
//!
//! The normalize module already has property tests for normalization on its
//! own. This module checks how the operations relate to each other.

use super::decompose::{basename, dirname, extname, is_absolute};
use super::join::join;
use super::normalize::normalize;
use super::relative::relative;
use super::resolver::{resolve, FixedCurrentDirectory};
use super::style::PlatformStyle;
use proptest::prelude::*;

const STYLES: [PlatformStyle; 2] = [PlatformStyle::Posix, PlatformStyle::Windows];

// Strategy for plain directory names
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

// Strategy for file names with an optional extension
fn file_name_strategy() -> impl Strategy<Value = String> {
    ("[a-z0-9_]{1,12}", prop::option::of("[a-z]{1,4}")).prop_map(|(stem, ext)| match ext {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    })
}

// Short names from a tiny alphabet so paths often share prefixes
fn clashing_segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ab]{1,2}", 0..6)
}

// Windows names and drive letters that differ only in case
fn mixed_case_windows_path() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("c:\\"), Just("C:\\")],
        prop::collection::vec("[aAbB]{1,2}", 0..6),
    )
        .prop_map(|(root, segments)| format!("{root}{}", segments.join("\\")))
}

fn root_for(style: PlatformStyle) -> &'static str {
    match style {
        PlatformStyle::Posix => "/",
        PlatformStyle::Windows => "c:\\",
    }
}

fn absolute(style: PlatformStyle, segments: &[String]) -> String {
    format!("{}{}", root_for(style), segments.join(&style.separator().to_string()))
}

// Mixed separators, dots and roots
fn messy_path_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("/"), Just("\\"), Just("d:"), Just("//srv/share/")],
        prop::collection::vec(
            prop_oneof![
                Just(".".to_string()),
                Just("..".to_string()),
                Just(String::new()),
                name_strategy(),
            ],
            0..6,
        ),
        prop_oneof![Just("/"), Just("\\")],
    )
        .prop_map(|(root, parts, sep)| format!("{root}{}", parts.join(sep)))
}

fn cwd_for(style: PlatformStyle) -> FixedCurrentDirectory {
    match style {
        PlatformStyle::Posix => FixedCurrentDirectory::new("/base/dir"),
        PlatformStyle::Windows => FixedCurrentDirectory::new("c:\\base\\dir"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // dirname and basename undo a join of a directory and a file name
    #[test]
    fn join_then_split(
        dirs in prop::collection::vec(name_strategy(), 0..6),
        file in file_name_strategy(),
        rooted in any::<bool>(),
    ) {
        for style in STYLES {
            let dir = if rooted {
                absolute(style, &dirs)
            } else {
                dirs.join("/")
            };
            let joined = join(&[dir.as_str(), file.as_str()], style).unwrap();

            prop_assert_eq!(dirname(&joined, style), normalize(&dir, style));
            prop_assert_eq!(basename(&joined, None, style), file.clone());
        }
    }

    // Stripping the extension and appending it again gives back the name
    #[test]
    fn basename_and_extname_recombine(
        dirs in prop::collection::vec(name_strategy(), 0..4),
        file in file_name_strategy(),
    ) {
        for style in STYLES {
            let path = absolute(style, &[dirs.clone(), vec![file.clone()]].concat());
            let ext = extname(&path, style);
            let stem = basename(&path, Some(&ext), style);
            prop_assert_eq!(format!("{stem}{ext}"), basename(&path, None, style));
        }
    }

    // Resolving the computed route from `from` lands on `to`
    #[test]
    fn relative_round_trip(from in clashing_segments(), to in clashing_segments()) {
        for style in STYLES {
            let from = absolute(style, &from);
            let to = absolute(style, &to);
            let cwd = cwd_for(style);

            let route = relative(&from, &to, style, &cwd).unwrap();
            prop_assert!(!is_absolute(&route, style));
            prop_assert_eq!(
                resolve(&[from.as_str(), route.as_str()], style, &cwd).unwrap(),
                normalize(&to, style)
            );
        }
    }

    // Under Windows, names differing only in case are distinct, so the route
    // still lands on `to` exactly as spelled
    #[test]
    fn relative_round_trip_mixed_case(
        from in mixed_case_windows_path(),
        to in mixed_case_windows_path(),
    ) {
        let style = PlatformStyle::Windows;
        let cwd = cwd_for(style);

        let route = relative(&from, &to, style, &cwd).unwrap();
        prop_assert_eq!(
            resolve(&[from.as_str(), route.as_str()], style, &cwd).unwrap(),
            normalize(&to, style)
        );
        if from[..3] == to[..3] {
            prop_assert!(!is_absolute(&route, style));
            prop_assert_eq!(
                normalize(&join(&[from.as_str(), route.as_str()], style).unwrap(), style),
                normalize(&to, style)
            );
        }
    }

    // The route from a path to itself is always "."
    #[test]
    fn relative_to_self_is_current(segments in clashing_segments()) {
        for style in STYLES {
            let path = absolute(style, &segments);
            prop_assert_eq!(relative(&path, &path, style, &cwd_for(style)).unwrap(), ".");
        }
    }

    // Resolve always yields an absolute path already in normal form
    #[test]
    fn resolve_is_absolute_and_normal(parts in prop::collection::vec(messy_path_strategy(), 1..4)) {
        for style in STYLES {
            let resolved = resolve(&parts, style, &cwd_for(style)).unwrap();
            prop_assert!(is_absolute(&resolved, style));
            prop_assert_eq!(normalize(&resolved, style), resolved.clone());
        }
    }

    // An absolute path resolves to its own normal form
    #[test]
    fn resolve_absolute_is_normalize(segments in clashing_segments()) {
        for style in STYLES {
            let path = absolute(style, &segments);
            prop_assert_eq!(
                resolve(&[path.as_str()], style, &cwd_for(style)).unwrap(),
                normalize(&path, style)
            );
        }
    }

    // Normalization is idempotent over messy input in both grammars
    #[test]
    fn normalize_idempotent_messy(path in messy_path_strategy()) {
        for style in STYLES {
            let once = normalize(&path, style);
            prop_assert_eq!(normalize(&once, style), once.clone());
        }
    }

    // Joining never changes whether the first part is absolute
    #[test]
    fn join_keeps_absoluteness_of_first(first in messy_path_strategy(), rest in messy_path_strategy()) {
        for style in STYLES {
            let joined = join(&[first.as_str(), rest.as_str()], style).unwrap();
            if !first.is_empty() {
                prop_assert_eq!(is_absolute(&joined, style), is_absolute(&first, style));
            }
        }
    }
}
