//! Launch-time name remappings.

use std::fmt;

/// Mapping from logical endpoint name to effective name.
///
/// Built once from the `name:=value` arguments of the process and never
/// mutated afterwards. Keys are unique. Entries keep the order of their last
/// occurrence on the command line, so when two different keys resolve to the
/// same endpoint the later argument wins. Equality ignores that order.
#[derive(Debug, Clone, Default)]
pub struct RemapTable {
    entries: Vec<(String, String)>,
}

impl RemapTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the effective name for a logical name, exactly as written.
    pub fn get(&self, from: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == from)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(from, to)` pairs in command-line order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl PartialEq for RemapTable {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for RemapTable {}

impl<K, V> FromIterator<(K, V)> for RemapTable
where
    K: Into<String>,
    V: Into<String>,
{
    /// Later duplicates win and move to the position of the later argument.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (k, v) in iter {
            let k = k.into();
            entries.retain(|(existing, _)| *existing != k);
            entries.push((k, v.into()));
        }
        Self { entries }
    }
}

impl fmt::Display for RemapTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort();
        write!(f, "{{")?;
        for (i, (from, to)) in pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}:={}", from, to)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_duplicate_wins() {
        let table: RemapTable = vec![("scan", "/a"), ("odom", "/o"), ("scan", "/b")]
            .into_iter()
            .collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("scan"), Some("/b"));
        let order: Vec<_> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(order, vec!["odom", "scan"]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: RemapTable = vec![("scan", "/a"), ("odom", "/o")].into_iter().collect();
        let b: RemapTable = vec![("odom", "/o"), ("scan", "/a")].into_iter().collect();
        let c: RemapTable = vec![("odom", "/o"), ("scan", "/b")].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display_is_sorted() {
        let table: RemapTable = vec![("scan", "/sonar/raw"), ("odom", "/nav/odom")]
            .into_iter()
            .collect();
        assert_eq!(table.to_string(), "{odom:=/nav/odom, scan:=/sonar/raw}");
        assert_eq!(RemapTable::new().to_string(), "{}");
    }
}
