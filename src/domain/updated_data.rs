use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

/// Field key to committed value, assembled once per save. Entries keep the
/// order in which their fields appear in the profile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdatedDataSet(Vec<(String, String)>);

impl UpdatedDataSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value. A later entry for the same key replaces the earlier
    /// value and keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// JSON object form used for the trace output
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UpdatedDataSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = Self::new();
        for (key, value) in iter {
            data.insert(key, value);
        }
        data
    }
}

impl Serialize for UpdatedDataSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct UpdatedDataSetVisitor;

impl<'de> Visitor<'de> for UpdatedDataSetVisitor {
    type Value = UpdatedDataSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of field keys to values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut data = UpdatedDataSet::new();
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            data.insert(key, value);
        }
        Ok(data)
    }
}

impl<'de> Deserialize<'de> for UpdatedDataSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(UpdatedDataSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_insert_overwrites_same_key_in_place() {
        let mut data = UpdatedDataSet::new();
        data.insert("name", "Ada");
        data.insert("email", "ada@example.com");
        data.insert("name", "Augusta");

        assert_eq!(data.len(), 2);
        assert_eq!(data.get("name"), Some("Augusta"));
        assert_eq!(
            data.iter().collect::<Vec<_>>(),
            vec![("name", "Augusta"), ("email", "ada@example.com")]
        );
    }

    #[test]
    fn test_to_json_keeps_field_order() -> serde_json::Result<()> {
        let data: UpdatedDataSet = [
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("city", "London"),
        ]
        .into_iter()
        .collect();

        let json = data.to_json()?;
        assert_eq!(
            json,
            r#"{"name":"Ada","email":"ada@example.com","city":"London"}"#
        );
        assert_eq!(serde_json::from_str::<UpdatedDataSet>(&json)?, data);
        Ok(())
    }
}
