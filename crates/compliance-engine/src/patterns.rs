//! Pattern tables for the standard SOAP rule set
//!
//! Every entry is a regex fragment matched case-insensitively. Lists are
//! alternatives: a rule is satisfied when any one entry matches.

/// Qualifying content for the Subjective section
pub const SUBJECTIVE_CONTENT: &[&str] = &[
    "patient",
    "complaint",
    "presenting",
    "history",
    "reports",
    "states",
    "describes",
    "year[- ]old",
    "male|female",
    "chest pain",
    "shortness",
    "day",
    "week",
    "month",
    "present",
];

/// Qualifying content for the Objective section
pub const OBJECTIVE_CONTENT: &[&str] = &[
    "vital",
    "exam",
    "test",
    "finding",
    "blood pressure",
    "heart rate",
    "temperature",
    "bp",
    "hr",
    "physical",
    "lung",
    "heart",
    "pending",
    "clear",
    "normal",
    "order",
    "available",
    "chest x-ray",
    "ekg",
    "ecg",
    "placed",
    "not available",
];

/// Qualifying content for the Assessment section
pub const ASSESSMENT_CONTENT: &[&str] = &[
    "diagnosis",
    "impression",
    "condition",
    "presentation",
    "suggest",
    "acute",
    "chronic",
    "chest pain",
    "cardiac",
    "pulmonary",
    "rule out",
    "differential",
    "possible",
    "likely",
    "suspect",
    "syndrome",
    "embolism",
    "coronary",
    "underlying",
    "clinical",
    "evaluation",
    "necessary",
    "origin",
];

/// Qualifying content for the Plan section
pub const PLAN_CONTENT: &[&str] = &[
    "order",
    "test",
    "x-ray",
    "ekg",
    "ecg",
    "lab",
    "diagnostic",
    "follow",
    "return",
    "monitor",
    "instruct",
    "advise",
    "seek",
    "medication",
    "prescribe",
    "treatment",
    "management",
    "patient will",
];

/// A bare numeric dose anywhere in the note, e.g. "500 mg" or "2 tablets"
pub const DOSAGE: &[&str] = &[r"\d+\s*(?:mg|ml|mcg|units|tablets|capsules)"];

/// Statements that a medication is being prescribed or started.
///
/// "prescribe"/"prescribing" followed by a drug name counts on its own;
/// the past tense and the start/give/administer verbs only count with a
/// numeric dose so "no medications prescribed at this time" stays out.
pub const PRESCRIBING: &[&str] = &[
    r"\bprescrib(?:e|es|ing)\s+[a-z][\w-]*",
    r"prescribed\s+[\w\s]+?\d+\s*(?:mg|ml|mcg|units|tablets|capsules)",
    r"start(?:ing)?\s+(?:patient\s+on)?\s*\w+\s*\d+\s*(?:mg|ml|mcg|units|tablets|capsules)",
    r"give\s+\w+\s*\d+\s*(?:mg|ml|mcg|units|tablets|capsules)",
    r"administer(?:ing)?\s+\w+\s*\d+\s*(?:mg|ml|mcg|units|tablets|capsules)",
];

/// A stated decision not to prescribe. Checked before [`PRESCRIBING`] so
/// "will not prescribe antibiotics" is not read as an undosed order.
pub const PRESCRIBING_DECLINED: &[&str] = &[
    r"\b(?:not|never|don'?t|won'?t|no\s+need\s+to|no\s+indication\s+to|declined?s?\s+to|decided\s+against)\s+(?:to\s+)?prescrib",
];

/// Medication explicitly withheld, pending, or limited to OTC/PRN advice
pub const MEDICATION_DEFERRED: &[&str] = &[
    r"no\s+medications?\s+(?:have\s+been\s+)?prescribed",
    r"no\s+medications?\s+at\s+this\s+time",
    r"medications?\s*:?\s*(?:no|none|pending)",
    r"medications?.*pending.*result",
    r"pending.*medication",
    r"hold.*medication",
    r"withhold.*medication",
    r"defer.*medication",
    // over-the-counter and as-needed recommendations
    r"may\s+use",
    r"can\s+take",
    r"over[\s-]the[\s-]counter",
    r"otc",
    r"advised\s+to\s+use",
];

/// Follow-up, return, or contact instructions
pub const FOLLOW_UP: &[&str] = &[
    r"follow[\s-]?up",
    "return",
    "revisit",
    r"re[\s-]?visit",
    "appointment",
    r"if\s+symptoms",
    r"should\s+symptoms",
    r"call\s+if",
    r"seek.*medical",
    r"contact.*if",
];

/// Urgent symptoms that demand an urgent response in the note.
/// Matched as lowercase substrings of the note or the transcript.
pub const RED_FLAG_SYMPTOMS: &[&str] = &[
    "chest pain",
    "shortness of breath",
    "severe pain",
    "bleeding",
    "unconscious",
];

/// Diagnostic orders, imaging, cardiac workup, or escalation language
pub const URGENT_RESPONSE: &[&str] = &[
    "diagnostic",
    r"x[\s-]?ray",
    "ekg",
    "ecg",
    r"ct\s+scan",
    "cardiac",
    "enzyme",
    "test",
    "order",
    "immediate",
    "urgent",
    "emergency",
    "monitor",
    "admit",
];
