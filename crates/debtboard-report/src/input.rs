//! Engine input and its integrity checks.

use std::collections::{BTreeMap, BTreeSet};

use debtboard_stats::average_complexity;
use debtboard_types::{FunctionMetric, MetricRecord};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// A complete snapshot of metrics for a fixed file set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DebtInput {
    /// Per-file records. Their order is the order of the report.
    pub files: Vec<MetricRecord>,
    /// Function metrics keyed by file name. Every file needs an entry,
    /// empty for a file without functions.
    #[serde(default)]
    pub functions: BTreeMap<String, Vec<FunctionMetric>>,
}

impl DebtInput {
    /// Group a flat function list under the files it belongs to.
    ///
    /// Files without functions get an empty entry and keep their supplied
    /// `average_complexity`. A file with functions takes the mean of their
    /// complexities instead. A function naming a file absent from `files` is
    /// rejected.
    pub fn group(
        mut files: Vec<MetricRecord>,
        functions: Vec<FunctionMetric>,
    ) -> Result<Self, ReportError> {
        let mut grouped: BTreeMap<String, Vec<FunctionMetric>> = files
            .iter()
            .map(|f| (f.file_name.clone(), Vec::new()))
            .collect();
        for function in functions {
            match grouped.get_mut(&function.file_name) {
                Some(list) => list.push(function),
                None => {
                    return Err(ReportError::UnknownFile {
                        file: function.file_name,
                        function: function.function_name,
                    });
                }
            }
        }
        for record in &mut files {
            if let Some(list) = grouped.get(&record.file_name).filter(|l| !l.is_empty()) {
                record.average_complexity = average_complexity(list);
            }
        }
        Ok(Self {
            files,
            functions: grouped,
        })
    }

    pub(crate) fn functions_of(&self, file: &str) -> &[FunctionMetric] {
        self.functions.get(file).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check the caller contract. The first violation found is returned.
    pub fn validate(&self) -> Result<(), ReportError> {
        let mut seen = BTreeSet::new();
        for record in &self.files {
            if !seen.insert(record.file_name.as_str()) {
                return Err(ReportError::DuplicateFile {
                    file: record.file_name.clone(),
                });
            }
            check_metric(&record.file_name, "average_complexity", record.average_complexity)?;
            if !self.functions.contains_key(&record.file_name) {
                return Err(ReportError::MissingFunctions {
                    file: record.file_name.clone(),
                });
            }
        }

        for (key, functions) in &self.functions {
            if !seen.contains(key.as_str()) {
                return Err(ReportError::UnknownFunctionKey { file: key.clone() });
            }
            for function in functions {
                if !seen.contains(function.file_name.as_str()) {
                    return Err(ReportError::UnknownFile {
                        file: function.file_name.clone(),
                        function: function.function_name.clone(),
                    });
                }
                if function.file_name != *key {
                    return Err(ReportError::MisplacedFunction {
                        key: key.clone(),
                        file: function.file_name.clone(),
                        function: function.function_name.clone(),
                    });
                }
                check_metric(
                    &function.file_name,
                    &format!("{}.complexity", function.function_name),
                    function.complexity,
                )?;
            }
        }
        Ok(())
    }
}

fn check_metric(file: &str, field: &str, value: f64) -> Result<(), ReportError> {
    if value.is_finite() && value >= 0.0 {
        return Ok(());
    }
    Err(ReportError::InvalidMetric {
        file: file.to_string(),
        field: field.to_string(),
        value,
    })
}
