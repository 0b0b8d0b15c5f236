//! Glossary of key terms underlined in framework descriptions.

#[cfg(test)]
#[path = "definitions_test.rs"]
mod definitions_test;

/// Term definitions shown in hover tooltips, keyed by the exact phrase the
/// prose underlines.
pub const DEFINITIONS: &[(&str, &str)] = &[
    // Computation terms
    ("exclusions", "Content deliberately left out of training data due to policy, legal, or ethical considerations"),
    (
        "cut-offs",
        "Temporal boundaries that limit what knowledge the model has access to (e.g., training data only up to a certain date)",
    ),
    (
        "moderation filters",
        "Systems that remove or flag problematic content during training, shaping what the model learns",
    ),
    ("corpus", "The complete collection of texts used to train the model"),
    (
        "distributions",
        "Statistical patterns of word and phrase frequencies in the training data that shape what seems \"natural\" or \"likely\"",
    ),
    ("training data", "The vast collection of text that the model learns from during its development"),
    ("weights", "Numerical parameters learned during training that encode patterns and relationships in the data"),
    ("probabilistic reasoning", "Making predictions based on statistical likelihood rather than logical rules"),
    // Composition terms
    ("prompts", "The input instructions or questions that guide the model's response generation"),
    ("context windows", "The amount of preceding text the model can \"see\" and use when generating responses"),
    ("retrieval", "The process of pulling relevant information from memory or databases to inform responses"),
    ("sampling", "The method of selecting which words come next from probability distributions"),
    ("scaffold", "The structural framework that organises and guides the reasoning process"),
    ("rhetorical design", "The strategic shaping of communication to achieve specific effects on an audience"),
    // Constraints terms
    (
        "guardrails",
        "Safety mechanisms that prevent the model from generating harmful, biased, or inappropriate content",
    ),
    ("alignment", "The process of training models to behave in ways that match human values and intentions"),
    ("refusals", "When the model declines to respond to certain requests based on policy or safety constraints"),
    ("tone-smoothing", "The tendency to soften disagreement and present information diplomatically"),
    ("epistemic", "Relating to knowledge and how we know what we know"),
    ("policy boundaries", "Rules and guidelines that define what the model can and cannot generate"),
    // Calibration terms
    ("calibration", "The alignment between a model's expressed confidence and its actual accuracy"),
    ("confidence", "How certain the model is about its outputs, often expressed through hedging language"),
    ("variance", "The range of possible outputs the model might generate for the same input"),
    ("hedging", "Linguistic markers of uncertainty like \"might,\" \"could,\" or \"it seems\""),
    ("epistemic judgment", "Assessment of what can be known and how reliably we can know it"),
];

/// Look up the definition for an underlined term.
#[must_use]
pub fn define(term: &str) -> Option<&'static str> {
    DEFINITIONS.iter().find(|(t, _)| *t == term).map(|(_, d)| *d)
}
