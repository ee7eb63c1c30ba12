use std::fmt;

/// Semantic type tag of a parameter. Values are always carried as text; the
/// tag only tells the user what kind of value is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterType {
    String,
    Integer,
}

impl ParameterType {
    pub fn label(&self) -> &'static str {
        match self {
            ParameterType::String => "string",
            ParameterType::Integer => "integer",
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One named input a test method needs
#[derive(Debug, Clone)]
pub struct ParameterDefinition {
    pub name: String,
    pub description: String,
    pub param_type: ParameterType,
}

impl ParameterDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        param_type: ParameterType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            param_type,
        }
    }
}

/// Parameter values keyed by name, in the order they were supplied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterValues {
    entries: Vec<(String, String)>,
}

impl ParameterValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value; an existing key keeps its position and gets the new value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
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
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = ParameterValues::new();
        for (key, value) in iter {
            values.insert(key, value);
        }
        values
    }
}

/// A named, pre-filled bundle of parameter values
#[derive(Debug, Clone)]
pub struct TestDataSet {
    pub name: String,
    pub parameters: ParameterValues,
}

impl TestDataSet {
    pub fn new(name: impl Into<String>, parameters: ParameterValues) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }
}
