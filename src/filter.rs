use crate::models::{Note, NoteQuery};

/// Compiled form of [`NoteQuery`] with the needles already lowercased
///
/// A note passes when it satisfies every criterion that is present. Empty
/// query strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    search: Option<String>,
    tag: Option<String>,
}

impl NoteFilter {
    pub fn new(query: &NoteQuery) -> Self {
        fn needle(value: Option<&str>) -> Option<String> {
            value.filter(|v| !v.is_empty()).map(str::to_lowercase)
        }

        Self {
            search: needle(query.search.as_deref()),
            tag: needle(query.tag.as_deref()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.tag.is_none()
    }

    pub fn matches(&self, note: &Note) -> bool {
        self.matches_search(note) && self.matches_tag(note)
    }

    fn matches_search(&self, note: &Note) -> bool {
        let Some(search) = &self.search else {
            return true;
        };
        note.title.to_lowercase().contains(search.as_str())
            || note.content.to_lowercase().contains(search.as_str())
    }

    fn matches_tag(&self, note: &Note) -> bool {
        let Some(tag) = &self.tag else {
            return true;
        };
        note.tags.iter().any(|t| t.to_lowercase() == *tag)
    }
}
