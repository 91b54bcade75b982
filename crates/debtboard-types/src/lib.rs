//! # debtboard-types
//!
//! **Tier 0 (Debt Contract)**
//!
//! Pure data structures for metric inputs and debt reports. No I/O or
//! business logic.
//!
//! ## What belongs here
//! * Metric records consumed by the engine
//! * Statistics, risk and recommendation report types
//! * Deterministic orderings used by renderers
//!
//! ## What does NOT belong here
//! * Aggregation, scoring or rule logic (use the engine crates)
//! * Formatting logic (use debtboard-format)
//! * File I/O operations

#![forbid(unsafe_code)]

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Schema version for debt reports.
pub const DEBT_SCHEMA_VERSION: u32 = 1;

/// Subject used by the summary that covers the whole file set.
pub const GLOBAL_SUBJECT: &str = "*";

// ---------------
// Metric inputs
// ---------------

/// Per-file metrics for one commit snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub file_id: u64,
    pub file_name: String,
    /// Mean cyclomatic complexity of the file's functions, 0 without functions.
    pub average_complexity: f64,
    /// Marker-comment occurrences (todo, fixme, ...).
    pub entity_count: u64,
    /// Distinct duplicated-code associations touching the file.
    pub duplication_count: u64,
    pub duplicated_lines: u64,
}

impl MetricRecord {
    /// The four metric dimensions as floats, indexed by name.
    pub fn dimensions(&self) -> MetricStatistics {
        MetricStatistics {
            average_complexity: self.average_complexity,
            entities: self.entity_count as f64,
            duplications: self.duplication_count as f64,
            duplicated_lines: self.duplicated_lines as f64,
        }
    }

    pub fn value(&self, dimension: Dimension) -> f64 {
        self.dimensions().get(dimension)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionMetric {
    pub file_name: String,
    pub function_name: String,
    pub complexity: f64,
}

// -----------------
// Statistics
// -----------------

/// One of the four metric dimensions of a [`MetricRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Complexity,
    Entities,
    Duplications,
    DuplicatedLines,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Complexity,
        Dimension::Entities,
        Dimension::Duplications,
        Dimension::DuplicatedLines,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Complexity => "average_complexity",
            Dimension::Entities => "entities",
            Dimension::Duplications => "duplications",
            Dimension::DuplicatedLines => "duplicated_lines",
        }
    }
}

/// One float per dimension. Used for maximums, averages, medians and ratios.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricStatistics {
    pub average_complexity: f64,
    pub entities: f64,
    pub duplications: f64,
    pub duplicated_lines: f64,
}

impl MetricStatistics {
    pub const ZERO: MetricStatistics = MetricStatistics {
        average_complexity: 0.0,
        entities: 0.0,
        duplications: 0.0,
        duplicated_lines: 0.0,
    };

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Complexity => self.average_complexity,
            Dimension::Entities => self.entities,
            Dimension::Duplications => self.duplications,
            Dimension::DuplicatedLines => self.duplicated_lines,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        let slot = match dimension {
            Dimension::Complexity => &mut self.average_complexity,
            Dimension::Entities => &mut self.entities,
            Dimension::Duplications => &mut self.duplications,
            Dimension::DuplicatedLines => &mut self.duplicated_lines,
        };
        *slot = value;
    }

    /// Build a value by evaluating `f` once per dimension.
    pub fn from_fn(mut f: impl FnMut(Dimension) -> f64) -> Self {
        let mut out = Self::ZERO;
        for dimension in Dimension::ALL {
            out.set(dimension, f(dimension));
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub maximums: MetricStatistics,
    pub averages: MetricStatistics,
    pub medians: MetricStatistics,
}

// -----------------
// Risk
// -----------------

/// Ordinal maintenance risk derived from cyclomatic complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::VeryHigh => "VERY_HIGH",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------
// Debt table
// -----------------

/// A row of priority and risk for a single file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDebtEntry {
    pub filename: String,
    pub priority: f64,
    pub risk: RiskLevel,
    pub metrics: MetricRecord,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TechDebtReport {
    pub statistics: StatisticsSummary,
    /// Entries in input file order.
    pub files: Vec<FileDebtEntry>,
}

impl TechDebtReport {
    /// Entries ordered by descending priority. Ties break on filename.
    pub fn ranked_by_priority(&self) -> Vec<&FileDebtEntry> {
        let mut ranked: Vec<&FileDebtEntry> = self.files.iter().collect();
        ranked.sort_by(|a, b| by_priority_desc(a, b).then_with(|| a.filename.cmp(&b.filename)));
        ranked
    }

    /// Entries ordered by descending risk, then descending priority, then filename.
    pub fn ranked_by_risk(&self) -> Vec<&FileDebtEntry> {
        let mut ranked: Vec<&FileDebtEntry> = self.files.iter().collect();
        ranked.sort_by(|a, b| {
            b.risk
                .cmp(&a.risk)
                .then_with(|| by_priority_desc(a, b))
                .then_with(|| a.filename.cmp(&b.filename))
        });
        ranked
    }

    pub fn get(&self, filename: &str) -> Option<&FileDebtEntry> {
        self.files.iter().find(|f| f.filename == filename)
    }
}

fn by_priority_desc(a: &FileDebtEntry, b: &FileDebtEntry) -> Ordering {
    b.priority.total_cmp(&a.priority)
}

// -----------------
// Recommendations
// -----------------

/// A problem statement and the advice that addresses it.
///
/// An empty `problem` marks the "no problem" sentinel, which a [`Summary`]
/// never stores.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProblemRecommendationPair {
    pub problem: String,
    pub recommendation: String,
}

impl ProblemRecommendationPair {
    pub fn new(problem: impl Into<String>, recommendation: impl Into<String>) -> Self {
        Self {
            problem: problem.into(),
            recommendation: recommendation.into(),
        }
    }

    /// The "no problem" sentinel.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_problem(&self) -> bool {
        !self.problem.is_empty()
    }
}

impl From<Option<ProblemRecommendationPair>> for ProblemRecommendationPair {
    fn from(value: Option<ProblemRecommendationPair>) -> Self {
        value.unwrap_or_default()
    }
}

/// Deduplicated problems and recommendations for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub subject: String,
    pub problems: BTreeSet<String>,
    pub recommendations: BTreeSet<String>,
}

impl Summary {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            problems: BTreeSet::new(),
            recommendations: BTreeSet::new(),
        }
    }

    pub fn global() -> Self {
        Self::new(GLOBAL_SUBJECT)
    }

    /// Record a pair. The "no problem" sentinel is dropped.
    pub fn add(&mut self, pair: impl Into<ProblemRecommendationPair>) -> &mut Self {
        let pair = pair.into();
        if !pair.is_problem() {
            return self;
        }
        self.problems.insert(pair.problem);
        if !pair.recommendation.is_empty() {
            self.recommendations.insert(pair.recommendation);
        }
        self
    }

    pub fn add_all<I, P>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ProblemRecommendationPair>,
    {
        for pair in pairs {
            self.add(pair);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub global: Summary,
    /// One summary per file, in input file order.
    pub files: Vec<Summary>,
}

// -----------------
// Engine output
// -----------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtReport {
    pub schema_version: u32,
    pub debt: TechDebtReport,
    pub recommendations: RecommendationReport,
}
