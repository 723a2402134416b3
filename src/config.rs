//! Loads the declarative worksheet configuration.
//!
//! The config is a JSON object with one `pdf_filename` key; every other
//! top-level key is a student name mapping sheet ids to lists of problem-set
//! declarations. A sheet keyed literally `"defaults"` is reserved and
//! skipped before its value is even looked at.

use std::fs;
use std::path::Path;

use mathsheets_problem::{OperandDomain, ProblemSet, Worksheet};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config is missing \"pdf_filename\"")]
    MissingOutputFilename,

    #[error("expected {context} to be {expected}")]
    UnexpectedShape {
        context: String,
        expected: &'static str,
    },

    #[error("missing config {name:?} in {context}")]
    MissingParameter {
        name: &'static str,
        context: String,
    },

    #[error("unrecognized config for {name:?} => {value}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("problem set declares none of add, subtract, multiply, divide: {0}")]
    UnknownProblemSet(String),
}

/// Parsed configuration: the output filename plus every worksheet of every
/// student.
#[derive(Debug)]
pub struct Config {
    pub output_filename: String,
    pub worksheets: Vec<Worksheet>,
}

pub fn load_config(path: &Path) -> Result<Config, ParseError> {
    let raw = fs::read_to_string(path)?;
    parse_config(&raw)
}

pub fn parse_config(raw: &str) -> Result<Config, ParseError> {
    let mut root: Map<String, Value> = serde_json::from_str(raw)?;

    let output_filename = match root.remove("pdf_filename") {
        Some(Value::String(name)) => name,
        Some(other) => {
            return Err(ParseError::InvalidParameter {
                name: "pdf_filename",
                value: other.to_string(),
            });
        }
        None => return Err(ParseError::MissingOutputFilename),
    };

    let mut worksheets = Vec::new();
    for (student_name, sheets) in root {
        let Value::Object(sheets) = sheets else {
            return Err(ParseError::UnexpectedShape {
                context: format!("student {student_name:?}"),
                expected: "an object mapping sheet ids to problem-set lists",
            });
        };
        for (sheet_id, declarations) in sheets {
            if sheet_id == "defaults" {
                continue;
            }
            let Value::Array(declarations) = declarations else {
                return Err(ParseError::UnexpectedShape {
                    context: format!("sheet {sheet_id:?} of student {student_name:?}"),
                    expected: "a list of problem-set declarations",
                });
            };
            let problem_sets = declarations
                .iter()
                .map(parse_problem_set)
                .collect::<Result<Vec<_>, _>>()?;
            worksheets.push(Worksheet::new(student_name.clone(), sheet_id, problem_sets));
        }
    }

    Ok(Config {
        output_filename,
        worksheets,
    })
}

/// Raw declaration as written in the config. Exactly one of the operator
/// keys holds the problem count; which operand parameters are required
/// depends on the operator.
#[derive(Debug, Deserialize)]
struct ProblemSetDecl {
    add: Option<usize>,
    subtract: Option<usize>,
    multiply: Option<usize>,
    divide: Option<usize>,
    left: Option<DomainSpec>,
    right: Option<DomainSpec>,
    quotient: Option<DomainSpec>,
    divisor: Option<DomainSpec>,
    allow_negative_result: Option<bool>,
}

/// Operand domain as configured: a bare non-negative integer or a string,
/// either all digits or an inclusive `"A..B"` range.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DomainSpec {
    Literal(u64),
    Text(String),
}

fn parse_problem_set(value: &Value) -> Result<ProblemSet, ParseError> {
    let decl: ProblemSetDecl = serde_json::from_value(value.clone())?;

    let set = if let Some(count) = decl.divide {
        ProblemSet::Division {
            quotient: required_domain(decl.quotient, "quotient", value)?,
            divisor: required_domain(decl.divisor, "divisor", value)?,
            count,
        }
    } else if let Some(count) = decl.add {
        ProblemSet::Addition {
            left: required_domain(decl.left, "left", value)?,
            right: required_domain(decl.right, "right", value)?,
            count,
        }
    } else if let Some(count) = decl.subtract {
        ProblemSet::Subtraction {
            left: required_domain(decl.left, "left", value)?,
            right: required_domain(decl.right, "right", value)?,
            count,
            allow_negative_result: decl.allow_negative_result.unwrap_or(false),
        }
    } else if let Some(count) = decl.multiply {
        ProblemSet::Multiplication {
            left: required_domain(decl.left, "left", value)?,
            right: required_domain(decl.right, "right", value)?,
            count,
        }
    } else {
        return Err(ParseError::UnknownProblemSet(value.to_string()));
    };
    Ok(set)
}

fn required_domain(
    spec: Option<DomainSpec>,
    name: &'static str,
    declaration: &Value,
) -> Result<OperandDomain, ParseError> {
    let spec = spec.ok_or_else(|| ParseError::MissingParameter {
        name,
        context: declaration.to_string(),
    })?;
    match spec {
        DomainSpec::Literal(value) => Ok(OperandDomain::Fixed(value as i64)),
        DomainSpec::Text(text) => parse_domain_text(&text, name),
    }
}

fn parse_domain_text(text: &str, name: &'static str) -> Result<OperandDomain, ParseError> {
    let invalid = || ParseError::InvalidParameter {
        name,
        value: text.to_string(),
    };

    if let Some((min, max)) = text.split_once("..") {
        let (Ok(min), Ok(max)) = (min.parse::<u64>(), max.parse::<u64>()) else {
            return Err(invalid());
        };
        if min > max {
            return Err(invalid());
        }
        Ok(OperandDomain::Range(min as i64, max as i64))
    } else if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse::<i64>()
            .map(OperandDomain::Fixed)
            .map_err(|_| invalid())
    } else {
        Err(invalid())
    }
}
