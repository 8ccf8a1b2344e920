//! Built-in rule-based analyzer, used when the AI service is unavailable.
//!
//! Pure and synchronous: no I/O, no shared mutable state, deterministic for
//! a given `(description, has_image)` pair. The keyword tables below are
//! process-wide read-only constants, safe to scan from any number of
//! concurrent calls.

use crate::types::{AnalysisResult, Category, Priority, Provenance};

/// Category rules, scanned in this order. Earlier rules win ties.
const CATEGORY_RULES: [(Category, &[&str]); 6] = [
    (
        Category::Plumbing,
        &[
            "water", "leak", "pipe", "tap", "drain", "toilet", "flush", "overflow", "sewage",
            "bathroom",
        ],
    ),
    (
        Category::Electrical,
        &[
            "light",
            "electric",
            "power",
            "switch",
            "socket",
            "fan",
            "wire",
            "short circuit",
            "bulb",
            "voltage",
            "current",
        ],
    ),
    (
        Category::Civil,
        &[
            "wall",
            "crack",
            "ceiling",
            "floor",
            "roof",
            "door",
            "window",
            "broken",
            "damage",
            "structural",
            "paint",
            "concrete",
        ],
    ),
    (
        Category::Housekeeping,
        &[
            "dirty",
            "clean",
            "garbage",
            "waste",
            "smell",
            "pest",
            "insect",
            "rat",
            "cockroach",
            "dust",
            "hygiene",
        ],
    ),
    (
        Category::ItInfrastructure,
        &[
            "internet",
            "wifi",
            "network",
            "computer",
            "projector",
            "screen",
            "printer",
            "server",
            "laptop",
            "connection",
        ],
    ),
    (
        Category::Furniture,
        &[
            "chair",
            "table",
            "bench",
            "desk",
            "cupboard",
            "shelf",
            "almirah",
            "broken furniture",
        ],
    ),
];

/// Priority tiers, checked in strict precedence order: critical beats high
/// beats low; no match at any tier defaults to Medium.
const CRITICAL_KEYWORDS: &[&str] = &[
    "fire",
    "emergency",
    "gas leak",
    "explosion",
    "flood",
    "electrocution",
    "dangerous",
    "urgent",
    "immediately",
];

const HIGH_KEYWORDS: &[&str] = &[
    "severe",
    "major",
    "no water",
    "no power",
    "broken",
    "not working",
    "complete failure",
    "serious",
];

const LOW_KEYWORDS: &[&str] = &["minor", "small", "slight", "little", "barely", "cosmetic"];

const IMAGE_BONUS: u8 = 5;

/// Analyze a complaint with the rule-based classifier.
///
/// Total over its inputs: an empty or keyword-free description yields
/// `Others` / `Medium` rather than an error. Provenance is always
/// [`Provenance::Local`].
pub fn analyze(description: &str, has_image: bool) -> AnalysisResult {
    let text = description.to_lowercase();

    let category = detect_category(&text);
    let priority = detect_priority(&text);
    let risk_score = risk_score(category, priority, has_image);

    AnalysisResult {
        category,
        priority,
        department: category.department().to_string(),
        estimated_resolution: priority.estimated_resolution().to_string(),
        reasoning: reasoning(category, priority, risk_score),
        risk_score,
        raw_remote: None,
        provenance: Provenance::Local,
    }
}

/// Pick the rule with the most keyword hits in `text`.
///
/// Substring containment, not tokenization: "leaking" hits "leak". The
/// leader is replaced only on a strictly greater count, so on a tie the
/// rule that appears earlier in [`CATEGORY_RULES`] wins. Zero hits across
/// every rule means `Others`.
fn detect_category(text: &str) -> Category {
    let mut detected = Category::Others;
    let mut max_matches = 0;

    for (category, keywords) in CATEGORY_RULES {
        let matches = keywords.iter().filter(|kw| text.contains(*kw)).count();
        if matches > max_matches {
            max_matches = matches;
            detected = category;
        }
    }

    detected
}

fn detect_priority(text: &str) -> Priority {
    if CRITICAL_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        Priority::Critical
    } else if HIGH_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        Priority::High
    } else if LOW_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        Priority::Low
    } else {
        Priority::Medium
    }
}

/// Base priority score plus category bonus plus image bonus, capped at 100.
/// Natural floor is 25 (the Low base with no bonuses).
fn risk_score(category: Category, priority: Priority, has_image: bool) -> u8 {
    let bonus = if has_image { IMAGE_BONUS } else { 0 };
    let score = u16::from(priority.base_score())
        + u16::from(category.risk_bonus())
        + u16::from(bonus);
    score.min(100) as u8
}

/// One narrative template per priority tier, with the category and risk
/// score interpolated.
fn reasoning(category: Category, priority: Priority, risk_score: u8) -> String {
    match priority {
        Priority::Critical => format!(
            "This complaint has been classified as CRITICAL with a risk score of \
             {risk_score}/100. Immediate intervention is required as the issue poses a \
             significant safety or operational risk. The {category} department should be \
             notified immediately and on-site inspection must occur within 4 hours."
        ),
        Priority::High => format!(
            "Based on the complaint analysis, this issue is classified as HIGH priority \
             (risk score: {risk_score}/100). The {category} department should address this \
             within 1-2 business days. The described problem indicates potential for \
             escalation if not resolved promptly."
        ),
        Priority::Medium => format!(
            "This complaint has been analyzed and categorized as {category} with MEDIUM \
             priority (risk score: {risk_score}/100). Standard resolution protocols apply. \
             The assigned department should schedule inspection and repair within 3-5 \
             business days."
        ),
        Priority::Low => format!(
            "This is a LOW priority {category} complaint with a risk score of \
             {risk_score}/100. The issue is minor and does not pose immediate risk. The \
             department may schedule this during their regular maintenance cycle within \
             5-7 days."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn electrical_keywords_classify_as_electrical() {
        let result = analyze("The wire near the socket is sparking", false);
        assert_eq!(result.category, Category::Electrical);
        assert_eq!(result.department, "Electrical Maintenance Dept.");
    }

    #[test]
    fn strict_majority_wins_across_categories() {
        // Two plumbing hits ("water", "leak") against one electrical ("light").
        let result = analyze("water leak under the light", false);
        assert_eq!(result.category, Category::Plumbing);
    }

    #[test]
    fn tie_goes_to_earlier_rule_in_table_order() {
        // One plumbing hit ("tap") and one electrical hit ("fan"):
        // Plumbing precedes Electrical in the rule table.
        let result = analyze("tap near the fan", false);
        assert_eq!(result.category, Category::Plumbing);
    }

    #[test]
    fn substring_containment_matches_embedded_keywords() {
        // "leaking" contains "leak" even though it is not a whole word.
        let result = analyze("pipe is leaking badly", false);
        assert_eq!(result.category, Category::Plumbing);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = analyze("TOILET OVERFLOW IN HOSTEL BATHROOM", false);
        assert_eq!(result.category, Category::Plumbing);
    }

    #[test]
    fn no_keywords_yields_others_medium() {
        let result = analyze("something vague happened", false);
        assert_eq!(result.category, Category::Others);
        assert_eq!(result.priority, Priority::Medium);
        assert_eq!(result.department, "General Maintenance Dept.");
        assert_eq!(result.estimated_resolution, "3-5 days");
        assert_eq!(result.risk_score, 50);
    }

    #[test]
    fn empty_description_degrades_gracefully() {
        let result = analyze("", false);
        assert_eq!(result.category, Category::Others);
        assert_eq!(result.priority, Priority::Medium);
        assert!(!result.reasoning.is_empty());
    }

    #[test]
    fn critical_outranks_low_keywords() {
        let result = analyze("minor fire near the staircase", false);
        assert_eq!(result.priority, Priority::Critical);
        assert_eq!(result.estimated_resolution, "Same day (< 4 hours)");
    }

    #[test]
    fn high_outranks_low_keywords() {
        let result = analyze("severe but slight problem", false);
        assert_eq!(result.priority, Priority::High);
    }

    #[test]
    fn low_keywords_without_higher_tiers() {
        let result = analyze("cosmetic scratch on the desk", false);
        assert_eq!(result.priority, Priority::Low);
        assert_eq!(result.estimated_resolution, "5-7 days");
    }

    #[test]
    fn critical_electrical_with_image_caps_at_100() {
        // 90 + 15 + 5 = 110, clamped.
        let result = analyze("electrocution hazard from a loose wire and socket", true);
        assert_eq!(result.category, Category::Electrical);
        assert_eq!(result.priority, Priority::Critical);
        assert_eq!(result.risk_score, 100);
    }

    #[test]
    fn low_furniture_without_image_scores_28() {
        // 25 + 3 + 0.
        let result = analyze("minor wobble in the chair", false);
        assert_eq!(result.category, Category::Furniture);
        assert_eq!(result.priority, Priority::Low);
        assert_eq!(result.risk_score, 28);
    }

    #[test]
    fn image_bonus_adds_five() {
        let without = analyze("dusty shelf", false);
        let with = analyze("dusty shelf", true);
        assert_eq!(with.risk_score, without.risk_score + 5);
    }

    #[test]
    fn risk_score_stays_in_bounds_for_every_combination() {
        let categories = [
            Category::Plumbing,
            Category::Electrical,
            Category::Civil,
            Category::Housekeeping,
            Category::ItInfrastructure,
            Category::Furniture,
            Category::Others,
        ];
        let priorities = [
            Priority::Critical,
            Priority::High,
            Priority::Medium,
            Priority::Low,
        ];
        for category in categories {
            for priority in priorities {
                for has_image in [false, true] {
                    let score = risk_score(category, priority, has_image);
                    assert!(score <= 100);
                    assert!(score >= 25);
                }
            }
        }
    }

    #[test]
    fn identical_input_yields_identical_output() {
        let a = analyze("no power in the computer lab, urgent", true);
        let b = analyze("no power in the computer lab, urgent", true);
        assert_eq!(a.category, b.category);
        assert_eq!(a.priority, b.priority);
        assert_eq!(a.department, b.department);
        assert_eq!(a.estimated_resolution, b.estimated_resolution);
        assert_eq!(a.reasoning, b.reasoning);
        assert_eq!(a.risk_score, b.risk_score);
    }

    #[test]
    fn local_results_carry_no_raw_payload() {
        let result = analyze("garbage smell in the corridor", false);
        assert_eq!(result.provenance, Provenance::Local);
        assert!(result.raw_remote.is_none());
    }

    #[test]
    fn reasoning_interpolates_category_and_score() {
        let result = analyze("wifi not working in the library", false);
        assert_eq!(result.category, Category::ItInfrastructure);
        assert_eq!(result.priority, Priority::High);
        assert!(result.reasoning.contains("IT Infrastructure"));
        assert!(result.reasoning.contains("75/100"));
    }
}
