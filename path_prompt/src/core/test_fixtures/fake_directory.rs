// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::HashMap,
          io,
          path::{Path, PathBuf}};

use crate::{DirEntryInfo, DirectoryLister};

/// In memory [`DirectoryLister`]. Each registered folder returns its entries in exactly
/// the order they were given, which makes completion order deterministic in tests.
/// Listing a folder that was never registered fails with [`io::ErrorKind::NotFound`].
#[derive(Debug, Clone, Default)]
pub struct FakeDirectory {
    folders: HashMap<PathBuf, Vec<DirEntryInfo>>,
}

impl FakeDirectory {
    #[must_use]
    pub fn with_entries(
        mut self,
        path: impl Into<PathBuf>,
        entries: impl IntoIterator<Item = DirEntryInfo>,
    ) -> Self {
        self.folders
            .insert(path.into(), entries.into_iter().collect());
        self
    }
}

impl DirectoryLister for FakeDirectory {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        self.folders.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not a folder in this fake", path.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_folder_keeps_order() {
        let fake = FakeDirectory::default().with_entries(
            "src",
            [DirEntryInfo::file("z.rs"), DirEntryInfo::file("a.rs")],
        );
        pretty_assertions::assert_eq!(
            fake.list_entries(Path::new("src")).unwrap(),
            vec![DirEntryInfo::file("z.rs"), DirEntryInfo::file("a.rs")]
        );
    }

    #[test]
    fn test_unknown_folder_is_not_found() {
        let fake = FakeDirectory::default();
        let err = fake.list_entries(Path::new("nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
