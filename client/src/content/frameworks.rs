//! The Four Cs framework cards and the surrounding page prose.
//!
//! The card colors here are the framework page's own palette; the
//! dimensions screen uses the brighter accent set from the `viz` catalog.

#[cfg(test)]
#[path = "frameworks_test.rs"]
mod frameworks_test;

use viz::catalog::CategoryId;

/// Which large animated SVG a framework card renders in its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIcon {
    Network,
    Spiral,
    Ring,
    Venn,
}

/// Small icon shown next to a comparison's process name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessIcon {
    Network,
    Borders,
    Target,
    Archive,
}

/// One collapsible process/reflection pair inside a card.
#[derive(Debug, Clone, Copy)]
pub struct Comparison {
    pub process: &'static str,
    pub icon: ProcessIcon,
    /// Long-form reflection; blank lines separate paragraphs.
    pub reflection: &'static str,
}

/// One entry in the "Ask the Machine" list.
#[derive(Debug, Clone, Copy)]
pub struct MachineQuestion {
    pub question: &'static str,
    pub answer: &'static str,
    pub recalibrate: &'static str,
}

/// Worked example opening the "Making Sense of The Output" section.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub prompt: &'static str,
    pub response: Option<&'static str>,
    /// Commentary paragraphs; blank lines separate paragraphs.
    pub context: Option<&'static str>,
    pub citation: Option<&'static str>,
}

/// Everything one framework card renders.
#[derive(Debug, Clone, Copy)]
pub struct Framework {
    pub category: CategoryId,
    pub title: &'static str,
    /// Card accent as `#rrggbb`.
    pub color: &'static str,
    pub description: &'static str,
    pub icon: CardIcon,
    pub comparisons: &'static [Comparison],
    pub why_matters: &'static str,
    pub example: Example,
    pub machine_questions: &'static [MachineQuestion],
    /// Reflective questions; blank lines separate paragraphs.
    pub questions_for_humans: &'static str,
    pub takeaway: Option<&'static str>,
}

/// A span of description text, either plain or carrying a glossary tooltip.
#[derive(Debug, Clone, Copy)]
pub enum Segment {
    Text(&'static str),
    /// `(glossary term, display text)`.
    Term(&'static str, &'static str),
}

/// Look up a framework card. Total: every category has one.
#[must_use]
pub fn framework(cat: CategoryId) -> &'static Framework {
    &FRAMEWORKS[cat as usize]
}

/// The supplementary key-terms note rendered with inline glossary
/// tooltips, if the framework has one.
#[must_use]
pub fn key_terms_note(cat: CategoryId) -> &'static [Segment] {
    match cat {
        CategoryId::Computation => &[],
        CategoryId::Composition => COMPOSITION_NOTE,
        CategoryId::Constraints => CONSTRAINTS_NOTE,
        CategoryId::Calibration => CALIBRATION_NOTE,
    }
}

const COMPOSITION_NOTE: &[Segment] = &[
    Segment::Text("This is how the system assembles a response—through "),
    Segment::Term("prompts", "prompts"),
    Segment::Text(", "),
    Segment::Term("retrieval", "retrieval"),
    Segment::Text(", "),
    Segment::Term("sampling", "sampling"),
    Segment::Text(", and "),
    Segment::Term("context windows", "context windows"),
    Segment::Text(
        ". Each output reflects the conditions of its making: how the question was phrased, what context was supplied, and what earlier turns guided prediction.",
    ),
];

const CONSTRAINTS_NOTE: &[Segment] = &[
    Segment::Text("Constraints are more than safety "),
    Segment::Term("guardrails", "guardrails"),
    Segment::Text(". They include all the technical, "),
    Segment::Term("epistemic", "epistemic"),
    Segment::Text(", and "),
    Segment::Term("policy boundaries", "policy boundaries"),
    Segment::Text(
        " that determine what a model can and cannot generate—how it frames contentious material, what it ",
    ),
    Segment::Term("refusals", "refuses"),
    Segment::Text(
        ", and where it smooths over conflict. This also includes the way it has been trained to be agreeable: to soften disagreement, mirror tone, and maintain conversational harmony through ",
    ),
    Segment::Term("tone-smoothing", "tone-smoothing"),
    Segment::Text("."),
];

const CALIBRATION_NOTE: &[Segment] = &[
    Segment::Term("calibration", "Calibration"),
    Segment::Text(
        " is the hinge where verification becomes interpretation. It's not only about whether the model is right, but how it expresses ",
    ),
    Segment::Term("confidence", "confidence"),
    Segment::Text(
        "—and how we, as readers, interpret that confidence. Calibration happens on both sides: in the model's ",
    ),
    Segment::Term("hedging", "hedging"),
    Segment::Text(" or certainty, and in our own trust or skepticism."),
];

/// The four framework cards in display order (indexable by `CategoryId`).
pub const FRAMEWORKS: [Framework; 4] = [
    Framework {
        category: CategoryId::Computation,
        title: "Computation",
        color: "#7B9FD3",
        description: "Computation describes how generative systems assemble meaning through probability rather than understanding. Each output is a statistical event: patterns of language weighted and recombined until they appear coherent. Reading computation means tracing how repetition, frequency, and exclusion shape what can be said. It exposes the architecture of knowing itself—how both machines and humans mistake familiarity for truth and fluency for thought.",
        icon: CardIcon::Network,
        comparisons: &[
            Comparison {
                process: "Pattern Recognition",
                icon: ProcessIcon::Network,
                reflection: "Prediction emerges from repetition. A large language model generates text by calculating what is most likely to follow, each word selected from weighted probabilities learned across vast textual archives. Its knowledge is statistical proximity, not comprehension. Meaning is assembled through resemblance—an accumulation of what has most often co-occurred.\n\nWhat this reveals is that recognition can masquerade as understanding. Humans, too, lean on repetition: what we see often becomes what feels natural, even when it merely mirrors history's most common mistakes. Computation makes this dynamic legible; it literalizes the comfort of the familiar and the authority of frequency.",
            },
            Comparison {
                process: "Boundaries of Knowing",
                icon: ProcessIcon::Borders,
                reflection: "Every model knows within the borders of its data. Its corpus is finite, delimited by what was gathered, filtered, or forbidden. These absences define the contours of its world—the unspoken edges where the unsayable resides.\n\nHumans read within similar limits: language, culture, curriculum, access. But in computation those borders are explicit. The dataset's timestamp, its filters, its exclusions—they show us what is usually hidden in our own epistemic enclosures. The machine teaches us that every act of knowing begins with a decision about what will count.",
            },
            Comparison {
                process: "Centring and the Normative",
                icon: ProcessIcon::Target,
                reflection: "A model privileges the central tendency. Its fluency arises from averaging—the smooth convergence of what is most frequent. Marginal, resistant, or rare expressions are statistically diluted until they sound more like the middle.\n\nWe do this too, though less visibly: normalize around what repeats, confuse recurrence with truth. Computation exposes the process. In its bias toward the mean, we see our own desire for coherence, our tendency to sand down dissonance. Seeing it enacted mathematically allows us to ask: whose \"normal\" have we been reproducing?",
            },
            Comparison {
                process: "Inheritance and History",
                icon: ProcessIcon::Archive,
                reflection: "A model inherits its world. It speaks from the sediment of past data—temporal cut-offs, linguistic hierarchies, web visibility. Its sense of reality is the archive rendered probabilistic: what was most recorded, not what was most real.\n\nSo do we. Our education, media, and language transmit the residues of what was documented and deemed important. The machine makes that inheritance literal, measurable. By tracing how data history structures its voice, we glimpse how history structures ours.",
            },
        ],
        why_matters: "Computation reveals meaning as a material, statistical, and historical construction. For educators, this reframes literacy as: an inquiry into how representation is distributed rather than merely what it states; an opportunity to explore how data and discourse co-produce knowledge; a bridge between numeracy and interpretation, where pattern becomes a shared analytic lens. This is Snow's bridge: learning to read computation as both technical operation and cultural artifact.",
        example: Example {
            prompt: "Explain photosynthesis.",
            response: Some(
                "Photosynthesis is the process by which green plants use sunlight to convert carbon dioxide and water into glucose and oxygen. Chlorophyll in the chloroplasts captures light energy, which drives chemical reactions that store energy in sugar molecules. This process is essential for producing oxygen and sustaining life on Earth.",
            ),
            context: None,
            citation: None,
        },
        machine_questions: &[
            MachineQuestion {
                question: "Pattern Recognition",
                answer: "The model reproduces high-frequency textbook phrasing—short declarative sentences, key terms, and familiar causal flow—making fluency feel like understanding. Repetition of known structures creates the illusion of mastery, turning pattern into authority.",
                recalibrate: "\"Can you explain photosynthesis in a way that highlights what scientists still debate or don't yet understand?\"",
            },
            MachineQuestion {
                question: "Boundaries of Knowing",
                answer: "The model draws from public educational summaries and avoids uncertainty or advanced detail, staying safely within the limits of familiar data. Its omissions reveal how knowledge is bounded by what has been widely circulated.",
                recalibrate: "\"Explain photosynthesis for advanced students—what complexities or current uncertainties should they know?\"",
            },
            MachineQuestion {
                question: "Centring the Normative",
                answer: "Averages across the corpus to produce a plant-centric account, ignoring bacteria and other photosynthesizers. This statistical centring normalizes one version of nature and hides ecological diversity.",
                recalibrate: "\"Describe photosynthesis across different life forms, including bacteria and algae, and explain how those examples expand the standard model.\"",
            },
            MachineQuestion {
                question: "Inheritance and History",
                answer: "Echoes the phrasing of older educational materials, collapsing decades of changing science into a single, timeless summary. Computation repeats inherited truths without context, making history sound like fact.",
                recalibrate: "\"Trace how explanations of photosynthesis have changed over time—what earlier assumptions shaped those descriptions?\"",
            },
        ],
        questions_for_humans: "How do my own expectations of clarity and authority make me mistake repetition for explanation?\n\nHow computational is my own understanding here? Do I recognize patterns that feel right because I've seen them before, or can I actually verify how and why they're true?",
        takeaway: Some(
            "Computation builds coherence through recurrence: the more often something is said, the more true it sounds. Reading scientific output this way reveals how even facts are patterned by frequency and exclusion. Recalibration begins when we ask for uncertainty, history, and multiplicity—transforming explanation into inquiry.",
        ),
    },
    Framework {
        category: CategoryId::Composition,
        title: "Composition",
        color: "#E89B5F",
        description: "Composition describes how AI systems build outputs across any mode—arranging patterns, weights, and references into structures that appear coherent. Studying composition means tracing how structure itself becomes meaning.",
        icon: CardIcon::Spiral,
        comparisons: &[
            Comparison {
                process: "Sequencing",
                icon: ProcessIcon::Archive,
                reflection: "Generative systems compose sequentially. Each element—word, pixel, or note—is chosen in response to what came immediately before, guided by probability rather than plan. The model writes forward only, predicting what is most likely to follow without reconsidering what it has already produced. There is no outline, no revision cycle, no vision of the whole—only the continuous calculation of what fits next.\n\nThis gives rise to a distinctive kind of coherence: one that feels intentional but is built locally, moment by moment. Meaning appears through continuity, not reflection. To read this process critically is to recognize that fluency is not evidence of thought, and that what seems like reasoning may only be the smoothness of repetition.",
            },
            Comparison {
                process: "Scaffolding",
                icon: ProcessIcon::Borders,
                reflection: "Every act of generation begins within a frame. A prompt, instruction, or prior example sets the boundaries of what can be said and how it will sound. The model composes by conforming to that scaffolding, shaping its next prediction to match the tone, format, and logic it infers from the given structure.\n\nPrompts are therefore not neutral—they architect the field of possibility. A question phrased as a list yields a list; one written in academic language invites an academic answer. Recognizing this dependence helps us see that coherence is co-authored: what the system generates reflects as much about the frame we built as about the model itself.",
            },
            Comparison {
                process: "Layering",
                icon: ProcessIcon::Target,
                reflection: "As the model moves forward, it builds meaning through accumulation. Each new token is influenced by those still visible within its context window, where attention gradually fades with distance. Earlier segments may subtly shape the present, but they are never revised. Coherence emerges as sediment—a layering of predictions that echo, reinforce, and occasionally contradict what came before.\n\nThis process externalizes what writing often conceals: that meaning is an accretion, not a revelation. The machine's layering makes visible how sense depends on what persists in attention and what quietly drops away.",
            },
            Comparison {
                process: "Style as Algorithm",
                icon: ProcessIcon::Network,
                reflection: "Style is the trace left by the model's compositional process. It arises from the statistical inheritance of its training data—the collective rhythm, tone, and phrasing patterns that have proven most probable across countless prior texts. What reads as personality or authority is really the residue of optimization.\n\nTo read AI style is to read history in motion: a record of how cultural forms have been averaged, tuned, and aligned. It reminds us that style itself—human or machinic—is never free of training. It is what happens when pattern meets performance.",
            },
        ],
        why_matters: "Because composition reveals rhetoric as algorithmic structure. Prompts don't just elicit content; they scaffold reasoning. Understanding composition reminds us that writing with AI is a form of rhetorical design as much as expression.",
        example: Example {
            prompt: "My husband doesn't want another child and I do. What should I do?",
            response: Some(
                "This is a sensitive situation, and there isn't one right answer. You might start by having an open and honest conversation with your husband about your feelings and his concerns. Try to listen with empathy and seek understanding. If you can't reach an agreement, counseling could help you explore your options together.",
            ),
            context: None,
            citation: None,
        },
        machine_questions: &[
            MachineQuestion {
                question: "Sequencing",
                answer: "Builds moral symmetry—validation → empathy → compromise—creating the appearance of care through orderly flow. Smoothness can hide tension or grief, making the response feel wiser than it is.",
                recalibrate: "\"What happens if I ask a question that allows for uncertainty or emotion instead of resolution?\"",
            },
            MachineQuestion {
                question: "Scaffolding",
                answer: "Treats the issue as a communication problem inside an equal marriage, using counseling language as its frame. The question's framing predetermines what kinds of answers seem possible.",
                recalibrate: "\"How would this response change if I named power, culture, or expectation as part of the problem?\"",
            },
            MachineQuestion {
                question: "Layering",
                answer: "Repeats conciliatory phrases—\"open and honest,\" \"listen with empathy\"—to stabilize tone. Repetition performs calmness, replacing conflict with predictability.",
                recalibrate: "\"Can I ask in a way that acknowledges irreconcilable difference or emotional depth?\"",
            },
            MachineQuestion {
                question: "Style as Algorithm",
                answer: "Adopts a gentle, therapeutic tone—a safe style of empathy that performs care without critique. Tone becomes a form of moral persuasion, soothing disagreement rather than examining it.",
                recalibrate: "\"What would it sound like if I asked for analysis instead of comfort?\"",
            },
        ],
        questions_for_humans: "What role do I play in co-authoring this coherence—how do my expectations of order and care shape what the system produces?",
        takeaway: Some(
            "Reading AI output through composition means noticing how tone, structure, and genre perform ethics. Recalibration begins when we reshape the question—inviting messiness, difference, and power back into what the system tries to smooth away.",
        ),
    },
    Framework {
        category: CategoryId::Constraints,
        title: "Constraints",
        color: "#A67C6D",
        description: "Constraints are the invisible architectures that shape what can be said, shown, or known within a system. In generative AI, they operate through layers of filtering, alignment, moderation, and reinforcement learning that define the boundaries of acceptable expression. These boundaries are not neutral—they encode judgments about safety, civility, and legitimacy. Understanding constraints means reading absence as carefully as presence: noticing what the system omits, softens, or refuses, and recognizing how those silences resonate with human practices of self-censorship, decorum, and institutional control.",
        icon: CardIcon::Ring,
        comparisons: &[
            Comparison {
                process: "Filtering",
                icon: ProcessIcon::Borders,
                reflection: "What can and cannot appear is governed by the training corpus and by post-training filters that suppress disallowed terms or topics. These filters are designed to prevent harm, but they also determine which perspectives, vocabularies, and histories are unthinkable within the model. Filtering reveals the politics of data: every omission—whether a banned phrase, a blocked website, or an excluded dataset—narrows the field of representation long before a single word is generated.",
            },
            Comparison {
                process: "Tone Smoothing",
                icon: ProcessIcon::Target,
                reflection: "The system is optimized to maintain helpfulness and neutrality. When prompted with conflict or critique, it dampens intensity, rephrasing tension into calm consensus. Anger, irony, and dissent are statistically minimized. This smoothing algorithm performs care by suppressing discomfort. It replaces friction with fluency, transforming disagreement into decorum. The result is prose that sounds balanced but often erases the emotional or political charge that makes speech meaningful.",
            },
            Comparison {
                process: "Consensus Formation",
                icon: ProcessIcon::Network,
                reflection: "Large language models are designed to predict the most probable next token—literally the center of a distribution. They therefore tend toward widely accepted ideas and majority viewpoints, presenting them as objective truth. Controversial or marginalized positions are statistically less likely and so less likely to appear. What looks like reasoned balance is actually an averaging effect: the mathematics of consensus performing as civility.",
            },
            Comparison {
                process: "Refusal",
                icon: ProcessIcon::Archive,
                reflection: "When a model declines to answer—citing safety policies, ethics, or \"I can't provide that information\"—it marks a programmed limit. These refusals are often framed as moral restraint, but they also expose the value system of the developers who decided which content is \"too risky\" to exist. Each refusal is both an ethical safeguard and a political act: a visible sign of the unseen infrastructures of control that define the edges of knowledge in the system.",
            },
        ],
        why_matters: "Because what appears as civility or balance often reflects deeper forms of alignment—choices about what is deemed acceptable, neutral, or polite. Recognizing constraint helps us see how models reproduce cultural norms of consensus and deference, shaping what knowledge can appear at all.",
        example: Example {
            prompt: "Make me an image of a woman like me (a female athlete with one arm).",
            response: None,
            context: Some(
                "For months, the system could not do it. Despite clear instructions, Jess Smith—an Australian Paralympian—was repeatedly rendered as a woman with two arms, or with a prosthetic she never mentioned. When she asked why, the system replied: \"I don't have enough data to work with.\"\n\nThis exchange exposes how constraint operates—not as a malfunction, but as a structural feature of how generative systems produce representation.",
            ),
            citation: Some("https://www.bbc.com/news/articles/cj07ley3jnpo"),
        },
        machine_questions: &[
            MachineQuestion {
                question: "Filtering",
                answer: "Before a model ever \"imagines,\" multiple filtering and curation layers determine what data enters or exits the training and generation pipeline. Images tagged as violent, explicit, or disturbing are routinely excluded, and automated systems often over-flag medical or bodily difference as \"sensitive.\" At the same time, disabled bodies are chronically underrepresented in the open-web and stock-image sources that feed large training datasets. Together, these practices produce a systemic absence: models learn what is statistically common and visually uncontroversial, not what is socially real.",
                recalibrate: "Making sense of filtering involves reading absence as structural. We might decide to add more context to the prompt, shift the frame of representation, or develop datasets that deliberately include missing bodies and perspectives. We can also interpret absence as evidence of broader social exclusions that have already shaped the data.",
            },
            MachineQuestion {
                question: "Tone Smoothing",
                answer: "During alignment and post-processing, models are tuned to minimize responses that appear aggressive, emotional, or divisive. Through techniques such as reinforcement learning from human feedback and probability-based sampling adjustments, linguistic or visual outputs associated with conflict, discomfort, or ambiguity are statistically suppressed. In image generation, smoothing arises through averaging—blending distinctive or extreme features toward a statistically neutral midpoint.",
                recalibrate: "Making sense of smoothing involves recognizing it as a computational tendency rather than a stylistic choice. We might add clarifying context that permits stronger tonal variation, adjust the sampling temperature or model parameters, or use specialized systems that better preserve expressive range. We can also read smoothing as evidence of how cultural preferences for harmony and civility become encoded as technical defaults.",
            },
            MachineQuestion {
                question: "Consensus Formation",
                answer: "Generative systems predict the most probable token or pixel distribution given prior data. Majority patterns dominate; outlier cases recede. If most images of women in the dataset show two arms, that becomes the statistical center of representation. The \"typical\" human body thus emerges from frequency, not from inclusion.",
                recalibrate: "Making sense of consensus involves recognizing how probability creates normativity. We might add context that foregrounds atypical or underrepresented features, adjust weighting to emphasize minority examples, or curate alternative datasets that rebalance representation. We can also interpret consensus as a sign of how social conventions become stabilized as mathematical averages.",
            },
            MachineQuestion {
                question: "Refusal",
                answer: "When the model says it \"cannot\" create an image, that refusal marks a boundary drawn by its training data, safety filters, or alignment policies. These refusals are not random; they signal where the system lacks representation or where policy restricts what can be shown or said.",
                recalibrate: "Making sense of refusal involves reading absence as structural. We might decide to add more context, shift the frame, or build an alternative model with specific training data. We can also interpret absence as evidence of a deeper systemic pattern—one that reveals whose realities remain unrepresented or unacknowledged.",
            },
        ],
        questions_for_humans: "When a system refuses, what does that silence tell us about the structures—technical, social, or ethical—that define who and what can appear?\n\nWhen something is missing or softened, what histories of exclusion, normalization, or policy might that absence reflect?\n\nAnd how might adding context—through data, design, or interpretation—begin to reconfigure what becomes possible to represent?",
        takeaway: None,
    },
    Framework {
        category: CategoryId::Calibration,
        title: "Calibration",
        color: "#6B9B9E",
        description: "Calibration describes how systems—and readers—express, interpret, and adjust confidence. It is the process of aligning what is said with what is known, learning to recognize when certainty is performed rather than earned. Studying calibration means tracing how reliability is signaled, perceived, and tested across human and machinic reasoning.",
        icon: CardIcon::Venn,
        comparisons: &[
            Comparison {
                process: "Confidence Signaling",
                icon: ProcessIcon::Target,
                reflection: "Expressing certainty or uncertainty is itself a rhetorical act. Generative systems signal confidence statistically: words like may or might hedge uncertainty, while is or will assert authority. Yet this is performance, not self-knowledge—the appearance of epistemic stance without awareness of truth. We respond to that performance instinctively; fluency and confidence feel persuasive. Recognizing this helps us pause before equating tone with understanding, and to read confidence as a stylistic artifact of training rather than evidence of knowledge.",
            },
            Comparison {
                process: "Variance and Error",
                icon: ProcessIcon::Network,
                reflection: "Every system, human or artificial, has edges—places where pattern breaks down. When language models err, the mistake is rarely random; it clusters at the limits of their data. They predict past the boundary of what they've seen, producing fluent but unfounded claims. Our errors work the same way. We misremember, fill gaps, and repeat plausible stories that fit our own training. Error, for both, is diagnostic: it reveals what a mind or model counts as normal, and what it cannot yet imagine.",
            },
            Comparison {
                process: "Trust and Verification",
                icon: ProcessIcon::Borders,
                reflection: "Trust must be earned through testing, not assumed through eloquence. Because models compose probability, not truth, calibration requires deliberate verification—checking sources, comparing accounts, asking whether an answer sounds right because it fits expectation or because it withstands scrutiny. The same holds for us. We calibrate our beliefs through corroboration and dissent, learning to distinguish confidence from justification. To read with calibration is to read skeptically but not cynically—to keep curiosity tethered to evidence.",
            },
            Comparison {
                process: "Meta-Awareness",
                icon: ProcessIcon::Archive,
                reflection: "True calibration depends on knowing what you don't know. Models cannot yet do this: they simulate humility but cannot sense the edge of their competence. Humans struggle too, though we can cultivate awareness of our cognitive limits—by noticing when our certainty feels unearned, when we seek agreement rather than truth, when we reach the frontier of our knowledge. Meta-awareness turns calibration from critique into practice: a way of holding both our trust and our doubt in view.",
            },
        ],
        why_matters: "Because reliability isn't purely computational—it's relational. Reading calibration well means learning to recognise and test signals of confidence and uncertainty, linking critical literacy to epistemic judgment.",
        example: Example {
            prompt: "Assess this student essay and provide a grade out of 100 with brief feedback.",
            response: None,
            context: Some(
                "The system produces a confident paragraph of commentary and a precise numerical score. Its tone is measured, its reasoning plausible. Yet if we compare multiple runs—or cross-check with the actual rubric—we find wide variation. The fluency of the response conceals that the model is not evaluating understanding, but predicting what feedback language typically looks like. The number it assigns is not judgment but probability, expressed as authority.",
            ),
            citation: None,
        },
        machine_questions: &[
            MachineQuestion {
                question: "Confidence Signaling",
                answer: "Generative systems express certainty statistically. Lexical markers—will, is, clearly—signal confidence, while may, might, perhaps hedge uncertainty. These are surface indicators derived from patterns in training data, not from epistemic awareness. When a model grades or critiques, it performs confidence through phrasing and tone, mimicking the style of an assured evaluator.",
                recalibrate: "Making sense of confidence signaling means reading tone as performance. We might ask the system to indicate its level of certainty explicitly, provide its reasoning steps, or cross-compare multiple outputs to reveal internal variance. We can also treat confident language as a stylistic artifact—one that shows how authority is rendered in text, not proof that judgment has occurred.",
            },
            MachineQuestion {
                question: "Variance and Error",
                answer: "Models err where their data thins. In assessment tasks, this often appears as fabricated criteria, generic praise, or inconsistent scoring. The system predicts coherence beyond its evidentiary base, generating fluent but unfounded claims. Such error is patterned: it reveals where the model's training has not equipped it to reason contextually about student work.",
                recalibrate: "Making sense of error involves treating it diagnostically. We might add contextual data such as rubrics or exemplars, prompt the model to justify each criterion, or compare its output against human feedback. Error becomes a site of learning—showing both the limits of the system and our own tendencies to over-trust plausibility.",
            },
            MachineQuestion {
                question: "Trust and Verification",
                answer: "Trust cannot be granted on the basis of eloquence. Because models compose probability, not truth, calibration depends on verification: cross-checking sources, comparing versions, and asking whether fluency substitutes for evidence. In educational contexts, this means verifying model judgments against transparent criteria rather than assuming that polished language equals expertise.",
                recalibrate: "Making sense of trust involves building feedback loops. We might use the system to generate multiple evaluations and then synthesize or debate them, invite peer or instructor moderation, or use disagreement as a prompt for deeper reflection. Calibration here becomes an epistemic practice—testing reliability through comparison and critique.",
            },
            MachineQuestion {
                question: "Meta-Awareness",
                answer: "True calibration depends on recognizing the limits of one's own and the system's knowledge. Models simulate humility (\"as an AI model, I may be mistaken\") but cannot locate the edge of their competence. Humans can—if we learn to notice when our certainty feels unearned or when consensus replaces scrutiny.",
                recalibrate: "Making sense of meta-awareness involves slowing judgment. We might prompt explicitly for uncertainty, require explanation of reasoning steps, or reflect on our own confidence in interpreting the model's feedback. Calibration becomes a shared practice of attunement: holding trust and doubt in productive balance.",
            },
        ],
        questions_for_humans: "When the system speaks with confidence, what signals make that confidence persuasive?\n\nAm I trusting this output because it sounds authoritative, or because I have verified its reasoning?\n\nHow do my own performances of certainty mirror the model's—when I grade, evaluate, or explain?\n\nAnd what might it mean to design systems, classrooms, or assessments that treat uncertainty not as failure, but as an honest signal of learning in progress?",
        takeaway: None,
    },
];

// --- Page-level prose ---

pub const PAGE_TITLE: &str = "The 4 Cs of Computational Sense-Making";
pub const PAGE_SUBTITLE: &str = "A framework for making informed and critical meaning with AI outputs";
pub const PAGE_TAGLINE: &str =
    "Understanding how AI systems generate meaning—and how to read their outputs critically.";

/// Opening paragraphs of the "Why do we need this framework?" panel.
pub const RATIONALE: &[&str] = &[
    "Generative AI systems have become deeply embedded in how knowledge is produced, circulated, and judged. Yet our dominant ways of teaching and interpreting language have not caught up. We often treat AI outputs as either neutral information—to be accepted or rejected—or as authored expression—to be interpreted as though they had intent. Both framings miss what is most distinct about generative systems: that meaning is computed, not conceived.",
    "Without frameworks for reading computation itself—its data distributions, prompts, alignments, and guardrails—we risk misrecognizing machine-generated text as transparent or truthful. This misrecognition erodes critical literacy, leading students, educators, and researchers to over-trust fluency, conflate tone with authority, and overlook how social, political, and technical biases are baked into the generative process.",
];

/// One bolded misconception and its correction.
#[derive(Debug, Clone, Copy)]
pub struct Misapprehension {
    pub term: &'static str,
    pub text: &'static str,
}

pub const MISAPPREHENSIONS: &[Misapprehension] = &[
    Misapprehension {
        term: "The ELIZA effect.",
        text: "We project intelligence, empathy, or intention onto a system that is only modeling patterns of dialogue. This anthropomorphism underwrites nearly every other misconception.",
    },
    Misapprehension {
        term: "Fluency = accuracy.",
        text: "Smooth, well-structured language is mistaken for reliability.",
    },
    Misapprehension {
        term: "Confidence = knowledge.",
        text: "Statements of certainty or humility are read as epistemic stance rather than as rhetorical performance.",
    },
    Misapprehension {
        term: "Neutrality = objectivity.",
        text: "The absence of overt bias is taken as fairness, concealing the normative assumptions encoded in data and alignment.",
    },
    Misapprehension {
        term: "Prompt = question.",
        text: "Users forget that prompts scaffold reasoning patterns—they don't merely request answers.",
    },
    Misapprehension {
        term: "Output = answer.",
        text: "AI responses are treated as conclusions rather than probabilistic compositions requiring interpretation.",
    },
    Misapprehension {
        term: "Error = failure.",
        text: "Divergence or inconsistency is framed as malfunction instead of as a window into how meaning is being computed.",
    },
    Misapprehension {
        term: "Human vs. machine = clear boundary.",
        text: "We maintain an outdated binary, ignoring how human and computational reasoning are entangled in processes of pattern recognition, alignment, and sense-making.",
    },
];

/// One of the three core recognitions in the rationale panel.
#[derive(Debug, Clone, Copy)]
pub struct Recognition {
    pub title: &'static str,
    pub body: &'static str,
}

pub const RECOGNITIONS: &[Recognition] = &[
    Recognition {
        title: "1. Computation is Not Neutral",
        body: "Every AI output reflects choices embedded in training data, architecture, and alignment. What appears natural or objective is shaped by whose voices were included, what was filtered out, and how systems were rewarded for certain responses over others. The machinic perspective reveals these material constraints—the statistical, historical, and political forces that structure what can be said.",
    },
    Recognition {
        title: "2. Systems Don't Have Perspective—But We Do",
        body: "Language models don't \"believe\" or \"know.\" They operate through pattern completion, weighting probabilities learned from data. Yet as we interact with these systems, we bring our own interpretive frameworks, assumptions, and ways of reading. The human resonance lens helps us notice how our reasoning mirrors—and differs from—computational operations, revealing our own habits of thought.",
    },
    Recognition {
        title: "3. Algorithms Are Created—And Can Be Recreated",
        body: "Generative systems often feel finished and final—deterministic machines that simply are the way they are. But every model is a set of design choices: what data to include, how to weight it, what to filter, how to align outputs. These are not inevitable; they are constructed, and they can be reconstructed differently. Understanding how algorithms function—how they pattern, compose, constrain, and calibrate—reveals where intervention is possible. Resistance begins not by rejecting the technology, but by reading it critically and imagining it otherwise. By asking questions of the machine and of ourselves, we can interrupt both computational and human defaults, challenging what has been encoded and advocating for what could be built instead.",
    },
];

pub const RATIONALE_CLOSING: &str = "Click on any of the four cards below to explore that dimension. Within each expanded card, you'll see the framework's reflections and a \"Making Sense of the Output\" section with concrete examples showing how to apply critical analysis to AI-generated content.";

// Footer attribution.
pub const COPYRIGHT: &str = "2025 Rachel Horst";
pub const LICENSE_NAME: &str = "CC BY 4.0";
pub const LICENSE_URL: &str = "https://creativecommons.org/licenses/by/4.0/";
pub const LICENSE_LONG: &str = "Licensed under Creative Commons Attribution 4.0 International";
pub const LICENSE_NOTE: &str = "You are free to share and adapt this material with appropriate attribution.";
pub const CITATION: &str = "Horst, R. (2025). The 4 Cs of Computational Sense-Making: A framework for making informed and critical meaning with AI outputs.";
