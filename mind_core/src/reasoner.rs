//! Statement/question classification and the reasoning paths.

use frame_lexicon::{VerbLexicon, UNIVERSAL_ROLES};

use crate::clause::{InternalClause, Slot};
use crate::error::MindError;
use crate::fact_store::FactStore;

/// How a clause is treated by the reasoner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    /// Every role bound: record as a fact.
    Statement,
    /// At least one wildcard role: answer from stored facts.
    Question,
}

/// Executes the statement and question paths over the fact store.
///
/// The reasoner keeps no state of its own between calls beyond the
/// universal-relation set it was built with.
#[derive(Debug, Clone)]
pub struct Reasoner {
    universal_roles: Vec<String>,
}

impl Reasoner {
    /// Create a reasoner with the given universal-relation set.
    ///
    /// Derived open questions are yielded in the iteration order given here.
    pub fn new(universal_roles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            universal_roles: universal_roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a reasoner with the built-in universal relations.
    pub fn with_defaults() -> Self {
        Self::new(UNIVERSAL_ROLES.iter().copied())
    }

    /// Classify a clause: a question iff at least one role is a wildcard.
    pub fn classify(&self, clause: &InternalClause) -> ClauseKind {
        if clause.is_question() {
            ClauseKind::Question
        } else {
            ClauseKind::Statement
        }
    }

    /// Run the path selected by [`Reasoner::classify`], returning the
    /// derived clauses.
    pub fn think_about(
        &self,
        clause: &InternalClause,
        facts: &mut FactStore,
        lexicon: &VerbLexicon,
    ) -> Result<Vec<InternalClause>, MindError> {
        match self.classify(clause) {
            ClauseKind::Statement => self.think_about_statement(clause, facts, lexicon),
            ClauseKind::Question => self.think_about_question(clause, facts),
        }
    }

    /// Record the statement and raise an open question for every universal
    /// role it leaves unstated.
    fn think_about_statement(
        &self,
        clause: &InternalClause,
        facts: &mut FactStore,
        lexicon: &VerbLexicon,
    ) -> Result<Vec<InternalClause>, MindError> {
        // Validate before storing so a rejected clause leaves no trace.
        lexicon.validate_roles(&clause.verb, clause.roles.keys().map(String::as_str))?;

        facts.append(clause.clone());
        tracing::debug!(verb = %clause.verb, facts = facts.len(), "fact asserted");

        let mut derived = Vec::new();
        for role in &self.universal_roles {
            if !clause.roles.contains_key(role) {
                let mut open = clause.clone();
                open.roles.insert(role.clone(), Slot::Wildcard);
                derived.push(open);
            }
        }

        if !derived.is_empty() {
            tracing::debug!(count = derived.len(), "open questions raised");
        }
        Ok(derived)
    }

    /// Answer a question from the single stored fact matching its pattern.
    fn think_about_question(
        &self,
        clause: &InternalClause,
        facts: &FactStore,
    ) -> Result<Vec<InternalClause>, MindError> {
        let wildcards = clause.wildcard_roles();
        if wildcards.len() != 1 {
            return Err(MindError::MalformedQuestion {
                wildcards: wildcards.len(),
            });
        }
        let wildcard_role = wildcards[0];

        let pattern = clause.pattern();
        let matched = facts.matching(&pattern);
        let fact = match matched.as_slice() {
            [] => return Err(MindError::NoMatchingFact { pattern }),
            [single] => *single,
            _ => {
                return Err(MindError::AmbiguousFact {
                    count: matched.len(),
                    pattern,
                })
            }
        };

        // A fact that never specified the asked role answers "unknown".
        let resolved = fact.slot(wildcard_role).unwrap_or(Slot::Wildcard);

        let mut answer = clause.clone();
        answer.roles.insert(wildcard_role.to_string(), resolved);
        tracing::debug!(pattern = %pattern, "question answered");

        Ok(vec![answer])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frame_lexicon::{EntityIndex, VerbSpec};

    fn demo_lexicon() -> VerbLexicon {
        let mut lexicon = VerbLexicon::new();
        lexicon.define(VerbSpec::new("see", ["agent", "target"])).unwrap();
        lexicon
    }

    fn statement() -> InternalClause {
        InternalClause::new(
            "see",
            [
                ("agent", Slot::Entity(EntityIndex(0))),
                ("target", Slot::Entity(EntityIndex(1))),
            ],
        )
    }

    #[test]
    fn test_classify() {
        let reasoner = Reasoner::with_defaults();

        assert_eq!(reasoner.classify(&statement()), ClauseKind::Statement);

        let mut question = statement();
        question.roles.insert("agent".to_string(), Slot::Wildcard);
        assert_eq!(reasoner.classify(&question), ClauseKind::Question);
    }

    #[test]
    fn test_statement_stored_and_augmented() {
        let reasoner = Reasoner::with_defaults();
        let lexicon = demo_lexicon();
        let mut facts = FactStore::new();

        let derived = reasoner
            .think_about(&statement(), &mut facts, &lexicon)
            .unwrap();

        assert_eq!(facts.len(), 1);
        assert_eq!(derived.len(), 1);

        let mut expected = statement();
        expected.roles.insert("because".to_string(), Slot::Wildcard);
        assert_eq!(derived[0], expected);
    }

    #[test]
    fn test_statement_with_universal_role_not_augmented() {
        let reasoner = Reasoner::with_defaults();
        let lexicon = demo_lexicon();
        let mut facts = FactStore::new();

        let mut clause = statement();
        clause
            .roles
            .insert("because".to_string(), Slot::Entity(EntityIndex(1)));

        let derived = reasoner.think_about(&clause, &mut facts, &lexicon).unwrap();

        assert_eq!(facts.len(), 1);
        assert!(derived.is_empty());
    }

    #[test]
    fn test_statement_unknown_verb_leaves_store_empty() {
        let reasoner = Reasoner::with_defaults();
        let lexicon = demo_lexicon();
        let mut facts = FactStore::new();

        let clause = InternalClause::new("fly", [("agent", Slot::Entity(EntityIndex(0)))]);
        let err = reasoner.think_about(&clause, &mut facts, &lexicon).unwrap_err();

        assert!(matches!(err, MindError::Lexicon(_)));
        assert!(facts.is_empty());
    }

    #[test]
    fn test_statement_unknown_role_leaves_store_empty() {
        let reasoner = Reasoner::with_defaults();
        let lexicon = demo_lexicon();
        let mut facts = FactStore::new();

        let mut clause = statement();
        clause
            .roles
            .insert("instrument".to_string(), Slot::Entity(EntityIndex(0)));
        let err = reasoner.think_about(&clause, &mut facts, &lexicon).unwrap_err();

        assert!(matches!(err, MindError::Lexicon(_)));
        assert!(facts.is_empty());
    }

    #[test]
    fn test_question_answered_from_single_fact() {
        let reasoner = Reasoner::with_defaults();
        let lexicon = demo_lexicon();
        let mut facts = FactStore::new();

        reasoner.think_about(&statement(), &mut facts, &lexicon).unwrap();

        let mut question = statement();
        question.roles.insert("agent".to_string(), Slot::Wildcard);

        let answers = reasoner.think_about(&question, &mut facts, &lexicon).unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0], statement());
    }

    #[test]
    fn test_question_with_two_wildcards_malformed() {
        let reasoner = Reasoner::with_defaults();
        let lexicon = demo_lexicon();
        let mut facts = FactStore::new();

        let question = InternalClause::new(
            "see",
            [("agent", Slot::Wildcard), ("target", Slot::Wildcard)],
        );
        let err = reasoner.think_about(&question, &mut facts, &lexicon).unwrap_err();

        assert!(matches!(err, MindError::MalformedQuestion { wildcards: 2 }));
    }

    #[test]
    fn test_question_without_matching_fact() {
        let reasoner = Reasoner::with_defaults();
        let lexicon = demo_lexicon();
        let mut facts = FactStore::new();

        let mut question = statement();
        question.roles.insert("agent".to_string(), Slot::Wildcard);

        let err = reasoner.think_about(&question, &mut facts, &lexicon).unwrap_err();
        assert!(matches!(err, MindError::NoMatchingFact { .. }));
    }

    #[test]
    fn test_question_with_two_matching_facts_ambiguous() {
        let reasoner = Reasoner::with_defaults();
        let lexicon = demo_lexicon();
        let mut facts = FactStore::new();

        reasoner.think_about(&statement(), &mut facts, &lexicon).unwrap();
        reasoner.think_about(&statement(), &mut facts, &lexicon).unwrap();

        let mut question = statement();
        question.roles.insert("agent".to_string(), Slot::Wildcard);

        let err = reasoner.think_about(&question, &mut facts, &lexicon).unwrap_err();
        assert!(matches!(err, MindError::AmbiguousFact { count: 2, .. }));
    }

    #[test]
    fn test_unknown_propagates_from_unspecified_role() {
        let reasoner = Reasoner::with_defaults();
        let lexicon = demo_lexicon();
        let mut facts = FactStore::new();

        // The stored fact never mentions "because".
        reasoner.think_about(&statement(), &mut facts, &lexicon).unwrap();

        let mut question = statement();
        question.roles.insert("because".to_string(), Slot::Wildcard);

        let answers = reasoner.think_about(&question, &mut facts, &lexicon).unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].slot("because"), Some(Slot::Wildcard));
    }
}
