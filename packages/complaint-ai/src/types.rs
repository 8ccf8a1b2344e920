//! Analysis value objects shared by the remote and local paths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Functional type of facilities issue a complaint describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Plumbing,
    Electrical,
    Civil,
    Housekeeping,
    #[serde(rename = "IT Infrastructure")]
    ItInfrastructure,
    Furniture,
    Others,
}

impl Category {
    /// Display/wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Plumbing => "Plumbing",
            Category::Electrical => "Electrical",
            Category::Civil => "Civil",
            Category::Housekeeping => "Housekeeping",
            Category::ItInfrastructure => "IT Infrastructure",
            Category::Furniture => "Furniture",
            Category::Others => "Others",
        }
    }

    /// The maintenance department responsible for this category.
    ///
    /// Department routing is a fixed 1:1 mapping — it is derived from the
    /// category and never settable independently.
    pub fn department(&self) -> &'static str {
        match self {
            Category::Plumbing => "Plumbing & Sanitation Dept.",
            Category::Electrical => "Electrical Maintenance Dept.",
            Category::Civil => "Civil Engineering Dept.",
            Category::Housekeeping => "Housekeeping & Sanitation",
            Category::ItInfrastructure => "IT Support Dept.",
            Category::Furniture => "Furniture & Assets Dept.",
            Category::Others => "General Maintenance Dept.",
        }
    }

    /// Category contribution to the risk score.
    pub(crate) fn risk_bonus(&self) -> u8 {
        match self {
            Category::Electrical => 15,
            Category::Plumbing => 10,
            Category::Civil => 8,
            Category::Housekeeping => 5,
            Category::ItInfrastructure => 5,
            Category::Furniture => 3,
            Category::Others => 0,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency tier assigned to a complaint.
///
/// Totally ordered: `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Display/wire name of the priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    /// Expected resolution window for this priority.
    ///
    /// Fixed 1:1 mapping, derived from the priority and never settable
    /// independently.
    pub fn estimated_resolution(&self) -> &'static str {
        match self {
            Priority::Critical => "Same day (< 4 hours)",
            Priority::High => "1-2 days",
            Priority::Medium => "3-5 days",
            Priority::Low => "5-7 days",
        }
    }

    /// Base risk score contribution for this priority.
    pub(crate) fn base_score(&self) -> u8 {
        match self {
            Priority::Critical => 90,
            Priority::High => 70,
            Priority::Medium => 50,
            Priority::Low => 25,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an [`AnalysisResult`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Produced by the remote AI service.
    Remote,
    /// Produced by the built-in rule-based analyzer.
    Local,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provenance::Remote => "remote",
            Provenance::Local => "local",
        })
    }
}

/// Complete analysis of one complaint.
///
/// Immutable once produced; created fresh per classification call. The
/// caller decides whether and how to store it.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Detected complaint category.
    pub category: Category,

    /// Detected urgency tier.
    pub priority: Priority,

    /// Responsible department, always consistent with `category`.
    pub department: String,

    /// Expected resolution window, always consistent with `priority`.
    pub estimated_resolution: String,

    /// Human-readable explanation of the classification. Never empty.
    pub reasoning: String,

    /// Combined urgency/severity score in `[0, 100]`.
    pub risk_score: u8,

    /// Full raw response body from the AI service, kept for audit and
    /// debugging. Present iff `provenance` is [`Provenance::Remote`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_remote: Option<serde_json::Value>,

    /// Which path produced this result.
    pub provenance: Provenance,
}

/// Typed view of the AI service response body.
///
/// Any missing or wrong-typed field fails deserialization, which the client
/// treats as a malformed response and recovers from locally.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteAnalysis {
    pub category: Category,
    pub priority: Priority,
    pub department: String,
    pub estimated_resolution: String,
    pub reasoning: String,
    pub risk_score: u32,
}
