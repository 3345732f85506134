// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io, path::Path};

/// One entry in a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_directory: bool,
}

impl DirEntryInfo {
    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
        }
    }

    #[must_use]
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
        }
    }
}

/// The directory listing capability used by path completion.
///
/// Entries are returned in whatever order the implementation produces them. Failures
/// (the folder doesn't exist, can't be read, etc) are reported as [`io::Error`]s, and the
/// completion engine treats every failure the same way: as an empty listing.
pub trait DirectoryLister {
    /// # Errors
    ///
    /// Returns an error if `path` can't be listed.
    fn list_entries(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>>;
}

/// Lists directories on the real filesystem using [`std::fs::read_dir`]. Entries come
/// back in the order the OS returns them.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut acc = vec![];
        for maybe_entry in std::fs::read_dir(path)? {
            let entry = maybe_entry?;
            let file_type = entry.file_type()?;
            // A symlink to a folder counts as a folder.
            let is_directory = if file_type.is_symlink() {
                std::fs::metadata(entry.path()).is_ok_and(|it| it.is_dir())
            } else {
                file_type.is_dir()
            };
            acc.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_directory,
            });
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::try_create_temp_dir;

    #[test]
    fn test_fs_lister_reports_files_and_folders() {
        let root = try_create_temp_dir().unwrap();
        std::fs::write(root.join("report.csv"), "a,b").unwrap();
        std::fs::create_dir(root.join("reports")).unwrap();

        let mut entries = FsDirectoryLister.list_entries(&root).unwrap();
        entries.sort_by(|lhs, rhs| lhs.name.cmp(&rhs.name));

        pretty_assertions::assert_eq!(
            entries,
            vec![
                DirEntryInfo::file("report.csv"),
                DirEntryInfo::directory("reports"),
            ]
        );
    }

    #[test]
    fn test_fs_lister_fails_for_missing_folder() {
        let root = try_create_temp_dir().unwrap();
        let result = FsDirectoryLister.list_entries(&root.join("does_not_exist"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
