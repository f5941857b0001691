//! Built-in English marker tables.

use styloprint_types::{ArchetypeKind, TopicKind};

use crate::config::{MarkerConfig, MarkerRule};
use crate::feature::Feature;

/// Word-bounded patterns; spaces inside an entry match any whitespace run.
fn lexicon(entries: &[&str]) -> Vec<String> {
    entries
        .iter()
        .map(|e| format!(r"\b{}\b", e.replace(' ', r"\s+")))
        .collect()
}

fn rule(feature: Feature, patterns: Vec<String>) -> MarkerRule {
    MarkerRule::new(feature.to_string(), patterns)
}

fn raw(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| (*p).to_string()).collect()
}

pub(crate) fn english() -> MarkerConfig {
    let mut rules = vec![
        rule(
            Feature::FormalDiction,
            lexicon(&[
                "furthermore",
                "moreover",
                "consequently",
                "nevertheless",
                "nonetheless",
                "notwithstanding",
                "whereby",
                "wherein",
                "thereby",
                "hereby",
                "henceforth",
                "subsequently",
                "accordingly",
                "albeit",
                "in addition",
                "with regard to",
                "in accordance with",
                "utili[sz]e[sd]?",
                "demonstrates?",
                "facilitates?",
                "endeavou?r",
                "commence[sd]?",
                "sufficient",
                "regarding",
                "pertaining to",
            ]),
        ),
        rule(
            Feature::InformalDiction,
            lexicon(&[
                "gonna", "wanna", "gotta", "kinda", "sorta", "yeah", "yep", "nope", "okay", "ok",
                "cool", "awesome", "stuff", "guys", "lol", "btw", "omg", "dunno", "totally",
                "basically", "hey", "pretty much", "a lot",
            ]),
        ),
        rule(
            Feature::Contractions,
            raw(&[
                r"\b\w+n['’]t\b",
                r"\b\w+['’](?:re|ve|ll|d|m)\b",
                r"\b(?:it|that|there|here|what|who|he|she|let|where|how)['’]s\b",
            ]),
        ),
        rule(
            Feature::Hedging,
            lexicon(&[
                "perhaps",
                "maybe",
                "possibly",
                "probably",
                "arguably",
                "presumably",
                "apparently",
                "somewhat",
                "likely",
                "seems?",
                "appears?",
                "sort of",
                "kind of",
                "tends? to",
                "i think",
                "i believe",
                "to some extent",
                "could be",
            ]),
        ),
        rule(
            Feature::Modality,
            lexicon(&[
                "may", "might", "must", "should", "could", "would", "shall", "ought",
            ]),
        ),
        rule(
            Feature::Subordination,
            lexicon(&[
                "because",
                "although",
                "though",
                "whereas",
                "while",
                "since",
                "unless",
                "which",
                "whom",
                "whose",
                "whenever",
                "wherever",
                "so that",
                "even if",
                "provided that",
                "in order to",
            ]),
        ),
        rule(
            Feature::NestedHypothetical,
            raw(&[
                r"\bif\b[^.!?]*?\bthen\b[^.!?]*?\bif\b",
                r"\bsuppose\b[^.!?]*?\bthen\b[^.!?]*?\bsuppose\b",
                r"\bwhat\s+if\b[^.!?]*?\bwhat\s+if\b",
                r"\bif\b[^.!?]*?\bwould\b[^.!?]*?\bif\b",
                r"\bassuming\b[^.!?]*?\bif\b",
                r"\bimagine\b[^.!?]*?\bif\b",
            ]),
        ),
        rule(
            Feature::AnaphoricReasoning,
            lexicon(&[
                "this suggests",
                "this implies",
                "this means",
                "this shows",
                "this indicates",
                "therefore",
                "thus",
                "hence",
                "it follows",
                "which means",
                "as a result",
                "consequently",
            ]),
        ),
        rule(
            Feature::Analogy,
            lexicon(&[
                "like",
                "similar to",
                "similarly",
                "analogous",
                "analogy",
                "just as",
                "akin to",
                "resembles?",
                "in the same way",
                "comparable to",
                "mirrors",
                "parallels",
                "as if",
            ]),
        ),
        rule(
            Feature::Dialectical,
            lexicon(&[
                "however",
                "on the other hand",
                "conversely",
                "in contrast",
                "alternatively",
                "whereas",
                "yet",
                "one might argue",
                "counterargument",
                "critics",
                "tension",
                "paradox",
                "nevertheless",
                "then again",
            ]),
        ),
        rule(
            Feature::Didactic,
            lexicon(&[
                "you should",
                "you must",
                "you need to",
                "make sure",
                "keep in mind",
                "remember",
                "note that",
                "it is important",
                "the key is",
                "the lesson",
                "always",
                "never",
                "steps?",
            ]),
        ),
        rule(
            Feature::AbstractTerms,
            lexicon(&[
                "concepts?",
                "theory",
                "theories",
                "frameworks?",
                "principles?",
                "paradigms?",
                "abstractions?",
                "notions?",
                "essence",
                "meaning",
                "identity",
                "consciousness",
                "ontology",
                "epistemology",
                "dynamics",
                "mechanisms?",
                "perspectives?",
            ]),
        ),
        rule(
            Feature::TechnicalTerms,
            lexicon(&[
                "algorithms?",
                "data",
                "databases?",
                "protocols?",
                "functions?",
                "variables?",
                "architecture",
                "interfaces?",
                "parameters?",
                "api",
                "latency",
                "throughput",
                "compilers?",
                "kernel",
                "neural",
                "quantum",
                "statistical",
                "regression",
                "optimi[sz]ation",
                "infrastructure",
                "encryption",
                "hypothes[ie]s",
                "methodology",
            ]),
        ),
        rule(
            Feature::DiscourseConnectives,
            lexicon(&[
                "furthermore",
                "moreover",
                "however",
                "therefore",
                "consequently",
                "nevertheless",
                "additionally",
                "specifically",
                "notably",
                "in addition",
                "in contrast",
                "for instance",
                "for example",
                "in conclusion",
                "on the other hand",
                "as a result",
                "that is",
            ]),
        ),
    ];

    for kind in ArchetypeKind::ALL {
        rules.push(rule(Feature::Archetype(kind), archetype_markers(kind)));
    }
    for kind in TopicKind::ALL {
        rules.push(rule(Feature::Topic(kind), topic_keywords(kind)));
    }

    MarkerConfig { rules }
}

fn archetype_markers(kind: ArchetypeKind) -> Vec<String> {
    match kind {
        ArchetypeKind::Deconstructor => lexicon(&[
            "assumptions?",
            "underlying",
            "unpack",
            "deconstruct",
            "break down",
            "premises?",
            "fallacy",
            "flawe?d?",
            "contradictions?",
            "critique",
            "scrutini[sz]e",
            "beneath",
            "challenge the",
        ]),
        ArchetypeKind::Synthesist => lexicon(&[
            "integrate",
            "integration",
            "combine",
            "connects?",
            "connections?",
            "synthesis",
            "synthesi[sz]e",
            "holistic",
            "bridges?",
            "intersection",
            "unify",
            "interdisciplinary",
            "converge",
            "big picture",
        ]),
        ArchetypeKind::AlgorithmicThinker => lexicon(&[
            "step by step",
            "procedures?",
            "sequence",
            "optimi[sz]e",
            "systematic",
            "systematically",
            "iterate",
            "iteration",
            "inputs?",
            "outputs?",
            "efficient",
            "algorithms?",
            "workflow",
            "decision tree",
        ]),
        ArchetypeKind::RhetoricalStrategist => lexicon(&[
            "persuade",
            "persuasive",
            "audience",
            "convince",
            "narrative",
            "framing",
            "appeal",
            "rhetoric",
            "rhetorical",
            "compelling",
            "influence",
            "stakeholders?",
            "messaging",
        ]),
        ArchetypeKind::Architect => lexicon(&[
            "design",
            "structure",
            "structural",
            "blueprint",
            "foundations?",
            "layers?",
            "components?",
            "scaffold",
            "architecture",
            "modular",
            "build",
            "framework",
        ]),
        ArchetypeKind::Cataloguer => lexicon(&[
            "list",
            "categories",
            "category",
            "classify",
            "classification",
            "catalog(?:ue)?",
            "inventory",
            "collection",
            "organi[sz]e",
            "taxonomy",
            "types of",
            "such as",
            "firstly",
            "secondly",
            "examples include",
        ]),
    }
}

fn topic_keywords(kind: TopicKind) -> Vec<String> {
    match kind {
        TopicKind::Technology => lexicon(&[
            "software",
            "code",
            "computers?",
            "ai",
            "artificial intelligence",
            "machine learning",
            "digital",
            "internet",
            "apps?",
            "programming",
            "technology",
            "technologies",
            "cloud",
            "networks?",
            "robots?",
            "automation",
        ]),
        TopicKind::Philosophy => lexicon(&[
            "philosophy",
            "philosophical",
            "ethics",
            "ethical",
            "moral",
            "morality",
            "existence",
            "truth",
            "virtue",
            "metaphysics",
            "freedom",
            "mind",
            "soul",
            "justice",
            "wisdom",
        ]),
        TopicKind::Science => lexicon(&[
            "science",
            "scientific",
            "research",
            "experiments?",
            "evidence",
            "biology",
            "physics",
            "chemistry",
            "study",
            "studies",
            "observations?",
            "climate",
            "evolution",
            "molecules?",
            "laboratory",
        ]),
        TopicKind::Arts => lexicon(&[
            "art",
            "artist",
            "music",
            "poetry",
            "poems?",
            "novels?",
            "painting",
            "film",
            "creative",
            "aesthetic",
            "literature",
            "stories",
            "story",
            "theat(?:er|re)",
            "beauty",
        ]),
        TopicKind::Business => lexicon(&[
            "business",
            "markets?",
            "strategy",
            "revenue",
            "customers?",
            "growth",
            "startups?",
            "leadership",
            "management",
            "investments?",
            "profit",
            "company",
            "companies",
            "products?",
            "sales",
            "economy",
        ]),
    }
}
