//! Time-series endpoint validation.
//!
//! An operation is time-series shaped when it accepts a time range. Ranges
//! are always expressed as a `start_time`/`end_time` pair, results are
//! paginated with `limit` and ordering is `asc` or `desc`.

use serde_yaml::Value;

use crate::document::walk::Parameter;
use crate::document::Document;
use crate::lint::{Category, Finding, LintRule};

pub const START_PARAM: &str = "start_time";
pub const END_PARAM: &str = "end_time";
pub const LIMIT_PARAM: &str = "limit";
pub const ORDER_PARAM: &str = "order";
pub const ORDER_VALUES: [&str; 2] = ["asc", "desc"];

const START_ALIASES: [&str; 5] = ["from", "since", "start", "begin", "start_date"];
const END_ALIASES: [&str; 4] = ["to", "until", "end", "end_date"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Start,
    End,
}

fn bound_of(name: &str) -> Option<Bound> {
    if name == START_PARAM || START_ALIASES.contains(&name) {
        Some(Bound::Start)
    } else if name == END_PARAM || END_ALIASES.contains(&name) {
        Some(Bound::End)
    } else {
        None
    }
}

fn canonical(bound: Bound) -> &'static str {
    match bound {
        Bound::Start => START_PARAM,
        Bound::End => END_PARAM,
    }
}

/// Validates range, pagination and ordering parameters.
pub struct TimeSeriesRule;

impl TimeSeriesRule {
    fn check_order(&self, parameter: &Parameter<'_>, findings: &mut Vec<Finding>) {
        let Some(values) = parameter
            .schema()
            .and_then(|s| s.get("enum"))
            .and_then(Value::as_sequence)
        else {
            return;
        };
        let invalid: Vec<String> = values
            .iter()
            .filter(|v| !v.as_str().is_some_and(|s| ORDER_VALUES.contains(&s)))
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => format!("{:?}", other),
            })
            .collect();
        if !invalid.is_empty() {
            findings.push(Finding::error(
                self.category(),
                parameter.location.key("schema").key("enum"),
                format!(
                    "'{}' may only take the values asc or desc (found {})",
                    ORDER_PARAM,
                    invalid.join(", ")
                ),
            ));
        }
    }
}

impl LintRule for TimeSeriesRule {
    fn category(&self) -> Category {
        Category::TimeSeries
    }

    fn name(&self) -> &str {
        "Time Series"
    }

    fn description(&self) -> &str {
        "Validates time range, pagination and ordering parameters of time-series endpoints"
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();

        for operation in doc.operations() {
            let parameters = operation.parameters(doc.root());
            let mut has_start = false;
            let mut has_end = false;

            for parameter in &parameters {
                let Some(name) = parameter.name() else {
                    continue;
                };
                let Some(bound) = bound_of(name) else {
                    continue;
                };
                match bound {
                    Bound::Start => has_start = true,
                    Bound::End => has_end = true,
                }
                if name != canonical(bound) {
                    findings.push(
                        Finding::warning(
                            self.category(),
                            parameter.location.key("name"),
                            format!(
                                "Range parameter '{}' should be named '{}'",
                                name,
                                canonical(bound)
                            ),
                        )
                        .with_suggestion(format!("Use \"{}\" instead", canonical(bound))),
                    );
                }
            }

            if !has_start && !has_end {
                continue;
            }

            if has_start != has_end {
                let (present, missing) = if has_start {
                    (START_PARAM, END_PARAM)
                } else {
                    (END_PARAM, START_PARAM)
                };
                findings.push(Finding::error(
                    self.category(),
                    operation.location.clone(),
                    format!(
                        "Time range declares {} without {}; ranges must be a pair",
                        present, missing
                    ),
                ));
            }

            if !parameters.iter().any(|p| p.name() == Some(LIMIT_PARAM)) {
                findings.push(
                    Finding::warning(
                        self.category(),
                        operation.location.clone(),
                        "Time-series endpoint should be paginated with a 'limit' parameter",
                    )
                    .with_suggestion("Add a 'limit' query parameter"),
                );
            }

            for parameter in parameters
                .iter()
                .filter(|p| p.name() == Some(ORDER_PARAM))
            {
                self.check_order(parameter, &mut findings);
            }
        }

        findings
    }
}
