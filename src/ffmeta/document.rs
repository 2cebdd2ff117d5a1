use serde::ser::{Serialize, SerializeMap, Serializer};

/// Section name FFmpeg uses for chapter blocks
pub const CHAPTER_SECTION: &str = "CHAPTER";

/// Ordered key/value pairs with case-insensitive key lookup.
///
/// Keys keep the casing they were first inserted with. Inserting a key that
/// already exists (ignoring case) replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    entries: Vec<(String, String)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(key))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|i| self.entries[i].1.as_str())
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}

impl Serialize for Fields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// A named `[SECTION]` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub fields: Fields,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Fields::new(),
        }
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn is_chapter(&self) -> bool {
        self.is_named(CHAPTER_SECTION)
    }
}

/// Parsed ffmetadata: the global key/value section followed by named
/// sections in document order. Same-named sections are kept separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub global: Fields,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Global value for a key, ignoring case
    pub fn get(&self, key: &str) -> Option<&str> {
        self.global.get(key)
    }

    /// Chapter sections in document order
    pub fn chapters(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.is_chapter())
    }

    /// Append a new empty section and return it for filling in
    pub fn push_section(&mut self, name: impl Into<String>) -> &mut Section {
        self.sections.push(Section::new(name));
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }
}
