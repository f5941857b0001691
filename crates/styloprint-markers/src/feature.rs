use std::fmt;

use styloprint_types::{ArchetypeKind, TopicKind};

/// A named linguistic feature category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    FormalDiction,
    InformalDiction,
    Contractions,
    Hedging,
    Modality,
    Subordination,
    NestedHypothetical,
    AnaphoricReasoning,
    Analogy,
    Dialectical,
    Didactic,
    AbstractTerms,
    TechnicalTerms,
    DiscourseConnectives,
    Archetype(ArchetypeKind),
    Topic(TopicKind),
}

const ARCHETYPE_PREFIX: &str = "archetype.";
const TOPIC_PREFIX: &str = "topic.";

impl Feature {
    /// Features that are not keyed by an archetype or topic.
    pub const SCALAR: [Feature; 14] = [
        Feature::FormalDiction,
        Feature::InformalDiction,
        Feature::Contractions,
        Feature::Hedging,
        Feature::Modality,
        Feature::Subordination,
        Feature::NestedHypothetical,
        Feature::AnaphoricReasoning,
        Feature::Analogy,
        Feature::Dialectical,
        Feature::Didactic,
        Feature::AbstractTerms,
        Feature::TechnicalTerms,
        Feature::DiscourseConnectives,
    ];

    /// Every feature, scalar first, then archetypes and topics in declared order.
    pub fn all() -> impl Iterator<Item = Feature> {
        Feature::SCALAR
            .into_iter()
            .chain(ArchetypeKind::ALL.into_iter().map(Feature::Archetype))
            .chain(TopicKind::ALL.into_iter().map(Feature::Topic))
    }

    fn scalar_key(self) -> Option<&'static str> {
        let key = match self {
            Feature::FormalDiction => "formal_diction",
            Feature::InformalDiction => "informal_diction",
            Feature::Contractions => "contractions",
            Feature::Hedging => "hedging",
            Feature::Modality => "modality",
            Feature::Subordination => "subordination",
            Feature::NestedHypothetical => "nested_hypothetical",
            Feature::AnaphoricReasoning => "anaphoric_reasoning",
            Feature::Analogy => "analogy",
            Feature::Dialectical => "dialectical",
            Feature::Didactic => "didactic",
            Feature::AbstractTerms => "abstract_terms",
            Feature::TechnicalTerms => "technical_terms",
            Feature::DiscourseConnectives => "discourse_connectives",
            Feature::Archetype(_) | Feature::Topic(_) => return None,
        };
        Some(key)
    }

    pub fn from_key(key: &str) -> Option<Feature> {
        let key = key.trim();
        if let Some(rest) = key.strip_prefix(ARCHETYPE_PREFIX) {
            return ArchetypeKind::from_key(rest).map(Feature::Archetype);
        }
        if let Some(rest) = key.strip_prefix(TOPIC_PREFIX) {
            return TopicKind::from_key(rest).map(Feature::Topic);
        }
        Feature::SCALAR
            .into_iter()
            .find(|f| f.scalar_key() == Some(key))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Archetype(kind) => write!(f, "{}{}", ARCHETYPE_PREFIX, kind.key()),
            Feature::Topic(kind) => write!(f, "{}{}", TOPIC_PREFIX, kind.key()),
            other => f.write_str(other.scalar_key().unwrap_or_default()),
        }
    }
}
