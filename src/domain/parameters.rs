/// Separator between `key=value` pairs in a serialized parameter set.
pub const PAIR_SEPARATOR: char = '|';

/// An insertion-ordered set of gateway parameters.
///
/// Keys are unique: inserting an existing key replaces its value in place,
/// so the key keeps the position of its first insertion. The order is part
/// of the signed payload and must never be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: Vec<(String, String)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Looks up a key ignoring ASCII case. The first match wins.
    pub fn get_ignore_case(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
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

    /// Serializes as `k1=v1|k2=v2|...` in insertion order.
    pub fn to_parameter_string(&self) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(PAIR_SEPARATOR);
            }
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out
    }

    /// Decodes a `DATA` string. Each segment is split on its first `=`;
    /// a segment without `=` becomes a key with an empty value.
    pub fn parse(data: &str) -> Self {
        let mut set = Self::new();
        for segment in data.split(PAIR_SEPARATOR) {
            match segment.split_once('=') {
                Some((key, value)) => set.insert(key, value),
                None => set.insert(segment, ""),
            }
        }
        set
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}
