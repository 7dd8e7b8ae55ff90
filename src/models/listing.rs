/// One alias as shown by `gam ls`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub name: String,
    /// Stored bytes equal the active config file.
    pub selected: bool,
}

/// Snapshot of the store, sorted by name.
///
/// At most one entry is selected. When several aliases hold identical bytes,
/// the first one in name order wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub entries: Vec<AliasEntry>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected(&self) -> Option<&AliasEntry> {
        self.entries.iter().find(|e| e.selected)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}
