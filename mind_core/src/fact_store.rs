//! Append-only store of asserted facts.

use crate::clause::{InternalClause, Pattern};

/// Ordered, append-only collection of facts.
///
/// Facts are never mutated or removed once appended. The store does not
/// enforce match cardinality; callers apply the exactly-one-match rule
/// themselves.
#[derive(Debug, Clone, Default)]
pub struct FactStore {
    facts: Vec<InternalClause>,
}

impl FactStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fact to the end of the store.
    ///
    /// Validation happens before this point; the store accepts whatever
    /// it is given.
    pub fn append(&mut self, fact: InternalClause) {
        self.facts.push(fact);
    }

    /// All facts satisfying the pattern, in insertion order.
    pub fn matching(&self, pattern: &Pattern) -> Vec<&InternalClause> {
        self.facts
            .iter()
            .filter(|fact| fact.satisfies(pattern))
            .collect()
    }

    /// Number of stored facts.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Iterate facts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &InternalClause> {
        self.facts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::Slot;
    use frame_lexicon::EntityIndex;

    fn fact(verb: &str, roles: &[(&str, usize)]) -> InternalClause {
        InternalClause::new(
            verb,
            roles
                .iter()
                .map(|(role, x)| (*role, Slot::Entity(EntityIndex(*x)))),
        )
    }

    fn pattern(verb: &str, bound: &[&str]) -> Pattern {
        Pattern {
            verb: verb.to_string(),
            bound_roles: bound.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_append_and_len() {
        let mut store = FactStore::new();
        assert!(store.is_empty());

        store.append(fact("see", &[("agent", 0), ("target", 1)]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_matching_filters_by_verb() {
        let mut store = FactStore::new();
        store.append(fact("see", &[("agent", 0), ("target", 1)]));
        store.append(fact("hear", &[("agent", 0), ("target", 1)]));

        let matched = store.matching(&pattern("see", &["target"]));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].verb, "see");
    }

    #[test]
    fn test_matching_requires_role_superset() {
        let mut store = FactStore::new();
        store.append(fact("see", &[("agent", 0)]));
        store.append(fact("see", &[("agent", 0), ("target", 1)]));

        let matched = store.matching(&pattern("see", &["agent", "target"]));
        assert_eq!(matched.len(), 1);
        assert!(matched[0].roles.contains_key("target"));
    }

    #[test]
    fn test_matching_preserves_insertion_order() {
        let mut store = FactStore::new();
        store.append(fact("see", &[("agent", 0), ("target", 1)]));
        store.append(fact("see", &[("agent", 1), ("target", 0)]));

        let matched = store.matching(&pattern("see", &["agent"]));
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].slot("agent"), Some(Slot::Entity(EntityIndex(0))));
        assert_eq!(matched[1].slot("agent"), Some(Slot::Entity(EntityIndex(1))));
    }
}
