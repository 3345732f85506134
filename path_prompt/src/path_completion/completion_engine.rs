// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use super::{DirEntryInfo, DirectoryLister};

pub const PATH_SEPARATOR: char = '/';
pub const CURRENT_DIRECTORY: &str = ".";
pub const ROOT_DIRECTORY: &str = "/";

/// Outcome of running [`complete_path()`] on a typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    /// Nothing in the listed folder starts with the partial name.
    NoMatch,
    /// Exactly one entry matched. This holds the full path (folder + separator + name)
    /// that should replace the typed value.
    SingleMatch(String),
    /// More than one entry matched. This holds the matching names (not full paths), in
    /// [`CompletionOrder`].
    MultipleMatches(Vec<String>),
}

/// The order in which ambiguous matches are presented.
///
/// Directory listing order depends on the platform and filesystem. [`Self::AsListed`]
/// keeps it untouched. [`Self::Sorted`] is an opt in for a deterministic, byte wise
/// ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionOrder {
    #[default]
    AsListed,
    Sorted,
}

/// A typed value split at its last [`PATH_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParts<'a> {
    /// The folder to list.
    pub directory: &'a str,
    /// Entries must start with this to match.
    pub partial_name: &'a str,
}

impl<'a> PathParts<'a> {
    /// - `"rep"` lists `"."` and matches `"rep"`.
    /// - `"src/ma"` lists `"src"` and matches `"ma"`.
    /// - `"/us"` lists `"/"` and matches `"us"`.
    /// - `"src/"` lists `"src"` and matches everything in it.
    #[must_use]
    pub fn split(typed_value: &'a str) -> Self {
        match typed_value.rsplit_once(PATH_SEPARATOR) {
            None => PathParts {
                directory: CURRENT_DIRECTORY,
                partial_name: typed_value,
            },
            Some(("", partial_name)) => PathParts {
                directory: if typed_value.starts_with(PATH_SEPARATOR) {
                    ROOT_DIRECTORY
                } else {
                    CURRENT_DIRECTORY
                },
                partial_name,
            },
            Some((directory, partial_name)) => PathParts {
                directory,
                partial_name,
            },
        }
    }

    /// Join the folder with an entry name found in it.
    #[must_use]
    pub fn join(&self, name: &str) -> String {
        if self.directory == ROOT_DIRECTORY {
            format!("{ROOT_DIRECTORY}{name}")
        } else {
            format!("{}{PATH_SEPARATOR}{name}", self.directory)
        }
    }
}

/// Expand `typed_value` into a path, using `lister` to look inside the folder that the
/// typed value points at.
///
/// A listing failure is absorbed and treated as an empty folder, so this never fails.
pub fn complete_path(
    typed_value: &str,
    directory_only: bool,
    order: CompletionOrder,
    lister: &dyn DirectoryLister,
) -> CompletionResult {
    let parts = PathParts::split(typed_value);

    let entries = match lister.list_entries(Path::new(parts.directory)) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(
                message = "complete_path -> listing failed, treating as empty",
                directory = parts.directory,
                ?err
            );
            vec![]
        }
    };

    let mut matches: Vec<String> = entries
        .into_iter()
        .filter(|entry: &DirEntryInfo| !directory_only || entry.is_directory)
        .filter(|entry| entry.name.starts_with(parts.partial_name))
        .map(|entry| entry.name)
        .collect();

    if let CompletionOrder::Sorted = order {
        matches.sort();
    }

    let result = match matches.len() {
        0 => CompletionResult::NoMatch,
        1 => CompletionResult::SingleMatch(parts.join(&matches[0])),
        _ => CompletionResult::MultipleMatches(matches),
    };

    tracing::debug!(message = "complete_path", typed_value, ?result);

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::FakeDirectory;

    fn fake_cwd() -> FakeDirectory {
        FakeDirectory::default()
            .with_entries(
                ".",
                vec![
                    DirEntryInfo::file("report.csv"),
                    DirEntryInfo::file("report2.txt"),
                    DirEntryInfo::directory("reports"),
                    DirEntryInfo::directory("src"),
                    DirEntryInfo::file("README.md"),
                ],
            )
            .with_entries(
                "src",
                vec![
                    DirEntryInfo::file("main.rs"),
                    DirEntryInfo::file("lib.rs"),
                ],
            )
            .with_entries("/", vec![DirEntryInfo::directory("usr")])
    }

    #[test_case("rep", ".", "rep" ; "plain name lists cwd")]
    #[test_case("src/ma", "src", "ma" ; "nested name lists parent")]
    #[test_case("src/", "src", "" ; "trailing separator matches everything")]
    #[test_case("/us", "/", "us" ; "leading separator lists root")]
    #[test_case("a/b/c", "a/b", "c" ; "split at last separator")]
    fn test_split(typed: &str, directory: &str, partial_name: &str) {
        assert_eq!(
            PathParts::split(typed),
            PathParts {
                directory,
                partial_name
            }
        );
    }

    #[test]
    fn test_single_match_in_cwd() {
        let lister = fake_cwd();
        assert_eq!(
            complete_path("READ", false, CompletionOrder::AsListed, &lister),
            CompletionResult::SingleMatch("./README.md".into())
        );
    }

    #[test]
    fn test_single_match_nested() {
        let lister = fake_cwd();
        assert_eq!(
            complete_path("src/ma", false, CompletionOrder::AsListed, &lister),
            CompletionResult::SingleMatch("src/main.rs".into())
        );
    }

    #[test]
    fn test_single_match_under_root() {
        let lister = fake_cwd();
        assert_eq!(
            complete_path("/u", false, CompletionOrder::AsListed, &lister),
            CompletionResult::SingleMatch("/usr".into())
        );
    }

    #[test]
    fn test_multiple_matches_keep_listing_order() {
        let lister = fake_cwd();
        assert_eq!(
            complete_path("rep", false, CompletionOrder::AsListed, &lister),
            CompletionResult::MultipleMatches(vec![
                "report.csv".into(),
                "report2.txt".into(),
                "reports".into(),
            ])
        );
    }

    #[test]
    fn test_multiple_matches_sorted_on_request() {
        let lister = fake_cwd();
        assert_eq!(
            complete_path("src/", false, CompletionOrder::Sorted, &lister),
            CompletionResult::MultipleMatches(vec!["lib.rs".into(), "main.rs".into()])
        );
    }

    #[test]
    fn test_directory_only_excludes_files() {
        let lister = fake_cwd();
        assert_eq!(
            complete_path("rep", true, CompletionOrder::AsListed, &lister),
            CompletionResult::SingleMatch("./reports".into())
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let lister = fake_cwd();
        assert_eq!(
            complete_path("readme", false, CompletionOrder::AsListed, &lister),
            CompletionResult::NoMatch
        );
    }

    #[test]
    fn test_no_match() {
        let lister = fake_cwd();
        assert_eq!(
            complete_path("zzz", false, CompletionOrder::AsListed, &lister),
            CompletionResult::NoMatch
        );
    }

    #[test]
    #[serial_test::serial]
    fn test_relative_value_completes_against_cwd() {
        let root = crate::try_create_temp_dir().unwrap();
        std::fs::write(root.join("report.csv"), "a,b").unwrap();
        std::fs::write(root.join("notes.md"), "").unwrap();

        let original_cwd = std::env::current_dir().unwrap();
        std::env::set_current_dir(&*root).unwrap();
        let result =
            complete_path("rep", false, CompletionOrder::AsListed, &crate::FsDirectoryLister);
        std::env::set_current_dir(original_cwd).unwrap();

        assert_eq!(result, CompletionResult::SingleMatch("./report.csv".into()));
    }

    #[test]
    fn test_listing_failure_is_no_match() {
        let lister = fake_cwd();
        assert_eq!(
            complete_path("missing/rep", false, CompletionOrder::AsListed, &lister),
            CompletionResult::NoMatch
        );
    }
}
