//! Problem and recommendation text for every rule.
//!
//! Problem templates carry positional placeholders `@1`, `@2`, `@3`.
//! Recommendation text is fixed so identical advice collapses in a summary.

use debtboard_types::ProblemRecommendationPair;

/// Identifies one recommendation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleKind {
    GlobalRisk,
    GlobalDuplication,
    GlobalDuplicationTotal,
    GlobalMarkerRatio,
    FileAverageRisk,
    FileFunctionCount,
    FileMarkerToFunctionRatio,
    FunctionRisk,
}

struct Template {
    kind: RuleKind,
    id: &'static str,
    problem: &'static str,
    recommendation: &'static str,
}

const GLOBAL_RISK_RECOMMENDATION: &str = "Simplify logic and reduce complexity by limiting the number of \
independent paths in your functions. Break apart large complex functions into smaller, simpler and \
testable functions.";

const FILE_RISK_RECOMMENDATION: &str = "Simplify logic and reduce complexity by limiting the number of \
independent paths. Break apart large and complex logic blocks into smaller, loosely coupled and \
testable functions.";

const DUPLICATION_RECOMMENDATION: &str = "Move duplicated code into new coherent and cohesive \
functions and modules for reusability, readability, maintainability and testability.";

const TEMPLATES: &[Template] = &[
    Template {
        kind: RuleKind::GlobalRisk,
        id: "global.risk",
        problem: "50% of files in this commit have an average complexity ranked at or above @1.",
        recommendation: GLOBAL_RISK_RECOMMENDATION,
    },
    Template {
        kind: RuleKind::GlobalDuplication,
        id: "global.duplication",
        problem: "@1 files have at least @2 instances of code duplication. Details in the \
'Duplication' section.",
        recommendation: DUPLICATION_RECOMMENDATION,
    },
    Template {
        kind: RuleKind::GlobalDuplicationTotal,
        id: "global.duplication_total",
        problem: "@1 instances of code duplication at or above the threshold of @2 were detected in \
this commit. Details in the 'Duplication' section.",
        recommendation: DUPLICATION_RECOMMENDATION,
    },
    Template {
        kind: RuleKind::GlobalMarkerRatio,
        id: "global.marker_ratio",
        problem: "For a total of @1 files, @2 files contained at least one 'todo' or 'fixme'.",
        recommendation: "Dedicate more resources to fix bugs and implement missing features. \
Consider writing tests.",
    },
    Template {
        kind: RuleKind::FileAverageRisk,
        id: "file.average_risk",
        problem: "File @1 has an average complexity ranked at or above @2.",
        recommendation: FILE_RISK_RECOMMENDATION,
    },
    Template {
        kind: RuleKind::FileFunctionCount,
        id: "file.function_count",
        problem: "File @1 has a total of @2 functions.",
        recommendation: "Decrease the number of functions either by redesigning your architecture \
or creating a new module. A large number of functions can be a sign of high coupling and low \
cohesion, and usually decreases readability and maintainability.",
    },
    Template {
        kind: RuleKind::FileMarkerToFunctionRatio,
        id: "file.marker_to_function_ratio",
        problem: "File @1 has @3 'todo' or 'fixme' markers for a total of @2 functions.",
        recommendation: "Resolve outstanding 'todo' and 'fixme' markers before adding features to \
this file. Cover the affected functions with tests.",
    },
    Template {
        kind: RuleKind::FunctionRisk,
        id: "function.risk",
        problem: "File @1 has complexity of function @2 ranked at or above @3.",
        recommendation: FILE_RISK_RECOMMENDATION,
    },
];

impl RuleKind {
    pub const ALL: [RuleKind; 8] = [
        RuleKind::GlobalRisk,
        RuleKind::GlobalDuplication,
        RuleKind::GlobalDuplicationTotal,
        RuleKind::GlobalMarkerRatio,
        RuleKind::FileAverageRisk,
        RuleKind::FileFunctionCount,
        RuleKind::FileMarkerToFunctionRatio,
        RuleKind::FunctionRisk,
    ];

    fn template(self) -> &'static Template {
        // Rows are declared in variant order.
        &TEMPLATES[self as usize]
    }

    /// Stable identifier, e.g. `file.average_risk`.
    pub fn id(self) -> &'static str {
        self.template().id
    }

    pub fn problem_template(self) -> &'static str {
        self.template().problem
    }

    pub fn recommendation(self) -> &'static str {
        self.template().recommendation
    }

    /// Fill the problem template with `args` and pair it with the advice.
    pub fn emit(self, args: &[&str]) -> ProblemRecommendationPair {
        ProblemRecommendationPair::new(
            interpolate(self.problem_template(), args),
            self.recommendation(),
        )
    }
}

/// Replace `@1`, `@2`, ... with `args`, in a single left-to-right pass.
///
/// Inserted arguments are never rescanned, so a file name containing `@2`
/// survives intact. Placeholders without an argument are kept verbatim.
pub fn interpolate(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(at) = rest.find('@') {
        out.push_str(&rest[..at]);
        let after = &rest[at + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        let arg = after[..digits]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| args.get(i));
        match arg {
            Some(arg) => out.push_str(arg),
            None => out.push_str(&rest[at..at + 1 + digits]),
        }
        rest = &after[digits..];
    }
    out.push_str(rest);
    out
}
