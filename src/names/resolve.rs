//! Name validation and resolution.
//!
//! # Rules
//! - Base name: letter first, then letters, digits or `_`
//! - Graph name: letter, `/` or `~` first, then letters, digits, `_` or `/`
//! - `/x` is global, `~x` is private to the node, `x` is relative to the namespace
//!
//! # Design Decisions
//! - Validation returns a static reason so callers can wrap it in their own error
//! - Remap keys are resolved once, when the resolver is built

use std::collections::HashMap;

use crate::names::{NodeIdentity, RemapTable};

/// Check that `name` is a valid base name (no namespace separators).
pub fn validate_base_name(name: &str) -> Result<(), &'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Err("name is empty"),
        Some(c) if !c.is_ascii_alphabetic() => return Err("must start with a letter"),
        Some(_) => {}
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err("may only contain letters, digits and '_'")
    }
}

/// Check that `name` is a valid graph resource name.
///
/// Separators must not be doubled, trail the name, or follow `~` directly.
pub fn validate_graph_name(name: &str) -> Result<(), &'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Err("name is empty"),
        Some(c) if !(c.is_ascii_alphabetic() || c == '/' || c == '~') => {
            return Err("must start with a letter, '/' or '~'")
        }
        Some(_) => {}
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '/') {
        return Err("may only contain letters, digits, '_' and '/'");
    }
    if name.contains("//") {
        return Err("must not contain '//'");
    }
    if name.len() > 1 && name.ends_with('/') {
        return Err("must not end with '/'");
    }
    if name.starts_with("~/") {
        return Err("'~' must be followed by a name");
    }
    Ok(())
}

/// Check that `ns` can be used as a namespace. Private names cannot.
pub fn validate_namespace(ns: &str) -> Result<(), &'static str> {
    if ns.starts_with('~') {
        return Err("namespace must not be a private name");
    }
    validate_graph_name(ns)
}

/// Collapse repeated separators and drop a trailing one (root stays `/`).
pub fn clean(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    out
}

/// Normalise a namespace to an absolute form: `sonar/` becomes `/sonar`.
pub fn normalize_namespace(ns: &str) -> String {
    if ns.starts_with('/') {
        clean(ns)
    } else {
        clean(&format!("/{}", ns))
    }
}

/// Join a namespace and a relative name.
pub fn join(ns: &str, name: &str) -> String {
    clean(&format!("{}/{}", ns, name))
}

/// Resolves names for one node and applies its remappings.
#[derive(Debug, Clone)]
pub struct NameResolver {
    namespace: String,
    node_name: String,
    remaps: HashMap<String, String>,
}

impl NameResolver {
    /// Build a resolver for `identity`, resolving every remap entry up front.
    ///
    /// Entries are folded in command-line order: if two keys resolve to the
    /// same name, the later one wins.
    pub fn new(identity: &NodeIdentity, table: &RemapTable) -> Self {
        let mut resolver = Self {
            namespace: identity.namespace().to_string(),
            node_name: identity.fully_qualified(),
            remaps: HashMap::with_capacity(table.len()),
        };
        for (from, to) in table.iter() {
            let from = resolver.resolve(from);
            let to = resolver.resolve(to);
            resolver.remaps.insert(from, to);
        }
        resolver
    }

    /// Resolve `name` to a fully-qualified name without applying remappings.
    pub fn resolve(&self, name: &str) -> String {
        if name.is_empty() {
            self.namespace.clone()
        } else if name.starts_with('/') {
            clean(name)
        } else if let Some(private) = name.strip_prefix('~') {
            join(&self.node_name, private)
        } else {
            join(&self.namespace, name)
        }
    }

    /// Resolve `name` and apply the node's remappings.
    pub fn remap(&self, name: &str) -> String {
        let resolved = self.resolve(name);
        match self.remaps.get(&resolved) {
            Some(target) => target.clone(),
            None => resolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_validation() {
        assert!(validate_base_name("bathy_mapper_server").is_ok());
        assert!(validate_base_name("node2").is_ok());
        assert!(validate_base_name("").is_err());
        assert!(validate_base_name("2node").is_err());
        assert!(validate_base_name("a/b").is_err());
        assert!(validate_base_name("a-b").is_err());
    }

    #[test]
    fn test_graph_name_validation() {
        assert!(validate_graph_name("scan").is_ok());
        assert!(validate_graph_name("/sonar/raw").is_ok());
        assert!(validate_graph_name("~map").is_ok());
        assert!(validate_graph_name("").is_err());
        assert!(validate_graph_name("_scan").is_err());
        assert!(validate_graph_name("sonar raw").is_err());
    }

    #[test]
    fn test_graph_name_separator_rules() {
        assert!(validate_graph_name("/").is_ok());
        assert!(validate_graph_name("scan/").is_err());
        assert!(validate_graph_name("a//b").is_err());
        assert!(validate_graph_name("~/x").is_err());
        assert!(validate_graph_name("/sonar/").is_err());
    }

    #[test]
    fn test_namespace_validation() {
        assert!(validate_namespace("/").is_ok());
        assert!(validate_namespace("/auv").is_ok());
        assert!(validate_namespace("auv").is_ok());
        assert!(validate_namespace("~auv").is_err());
        assert!(validate_namespace("~").is_err());
        assert!(validate_namespace("auv/").is_err());
    }

    #[test]
    fn test_clean_and_namespace() {
        assert_eq!(clean("//a//b/"), "/a/b");
        assert_eq!(clean("/"), "/");
        assert_eq!(normalize_namespace(""), "/");
        assert_eq!(normalize_namespace("auv/"), "/auv");
        assert_eq!(normalize_namespace("/auv"), "/auv");
    }

    #[test]
    fn test_resolution_in_root_namespace() {
        let id = NodeIdentity::new("bathy_mapper_server", "/");
        let resolver = NameResolver::new(&id, &RemapTable::new());

        assert_eq!(resolver.resolve("scan"), "/scan");
        assert_eq!(resolver.resolve("/sonar/raw"), "/sonar/raw");
        assert_eq!(resolver.resolve("~map"), "/bathy_mapper_server/map");
        assert_eq!(resolver.resolve(""), "/");
    }

    #[test]
    fn test_resolution_in_nested_namespace() {
        let id = NodeIdentity::new("mapper", "/auv");
        let resolver = NameResolver::new(&id, &RemapTable::new());

        assert_eq!(resolver.resolve("scan"), "/auv/scan");
        assert_eq!(resolver.resolve("~"), "/auv/mapper");
        assert_eq!(resolver.resolve("~/map"), "/auv/mapper/map");
    }

    #[test]
    fn test_remap_matches_on_resolved_names() {
        let id = NodeIdentity::new("mapper", "/auv");
        let table: RemapTable = vec![("scan", "/sonar/raw"), ("/auv/odom", "nav/odom")]
            .into_iter()
            .collect();
        let resolver = NameResolver::new(&id, &table);

        assert_eq!(resolver.remap("scan"), "/sonar/raw");
        assert_eq!(resolver.remap("/auv/scan"), "/sonar/raw");
        assert_eq!(resolver.remap("odom"), "/auv/nav/odom");
        assert_eq!(resolver.remap("depth"), "/auv/depth");
    }

    #[test]
    fn test_aliased_keys_later_argument_wins() {
        let id = NodeIdentity::new("bathy_mapper_server", "/");

        for _ in 0..50 {
            let table: RemapTable = vec![("scan", "/sonar/a"), ("/scan", "/sonar/b")]
                .into_iter()
                .collect();
            assert_eq!(NameResolver::new(&id, &table).remap("scan"), "/sonar/b");

            let table: RemapTable = vec![("/scan", "/sonar/b"), ("scan", "/sonar/a")]
                .into_iter()
                .collect();
            assert_eq!(NameResolver::new(&id, &table).remap("scan"), "/sonar/a");
        }
    }
}
