//! Simulated execution of submitted solutions.
//!
//! Nothing is compiled or run. [`RuleBasedVerifier`] inspects the question
//! title and the submitted source for the constructs a correct solution is
//! expected to use, and produces the output such a solution would print.
//! A sandboxed backend can replace it by implementing [`Verifier`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::domain::Question;

static INTEGER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("INTEGER_PATTERN is a valid regex pattern"));

pub const OUTPUT_MISMATCH: &str = "Your output doesn't match the expected result";
pub const MISSING_ADDITION: &str = "Please implement the addition logic";
pub const MISSING_MAXIMUM: &str = "Please implement the maximum finding logic";
pub const MISSING_COLLECTION: &str = "Please work with arrays/lists in your solution";
pub const MISSING_LOOP: &str = "Please use loops in your solution";
pub const MISSING_STRING: &str = "Please work with strings in your solution";
pub const INCOMPLETE_SOLUTION: &str = "Please implement a complete solution";
pub const EMPTY_SOURCE: &str = "Please write some code first";
pub const PYTHON_PRINT_HINT: &str = "Add print() statements to see output";
pub const JAVA_PRINT_HINT: &str = "Add System.out.println() to see output";

const DEFAULT_KEYWORDS: [&str; 6] = ["if", "for", "while", "def", "function", "return"];
const MIN_COMPLETE_SOLUTION_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Verification {
    pub output: String,
    pub is_execution_error: bool,
}

impl Verification {
    pub fn output(output: impl Into<String>) -> Self {
        Verification {
            output: output.into(),
            is_execution_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Verification {
            output: message.into(),
            is_execution_error: true,
        }
    }

    /// A run is correct only against a question, without an execution
    /// error, and when the trimmed output equals the trimmed expectation.
    pub fn is_correct_for(&self, question: Option<&Question>) -> bool {
        match question {
            Some(question) if !self.is_execution_error => {
                self.output.trim() == question.expected_output.trim()
            }
            _ => false,
        }
    }
}

pub trait Verifier: Send + Sync {
    fn verify(&self, question: Option<&Question>, source: &str, language: &str) -> Verification;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedVerifier;

/// Title-driven categories, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    HelloWorld,
    Addition,
    Maximum,
    Collection,
    Loop,
    Text,
    General,
}

impl Category {
    fn classify(title: &str) -> Self {
        let title = title.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| title.contains(n));

        if has(&["hello world", "hello, world"]) {
            Category::HelloWorld
        } else if has(&["add", "sum"]) {
            Category::Addition
        } else if has(&["maximum", "max"]) {
            Category::Maximum
        } else if has(&["array", "list"]) {
            Category::Collection
        } else if has(&["loop", "iterate"]) {
            Category::Loop
        } else if has(&["string", "text"]) {
            Category::Text
        } else {
            Category::General
        }
    }
}

impl RuleBasedVerifier {
    pub fn new() -> Self {
        RuleBasedVerifier
    }

    fn verify_question(question: &Question, source: &str) -> Verification {
        let code = source.to_lowercase();
        let uses_any = |needles: &[&str]| needles.iter().any(|n| code.contains(n));
        let expected_if = |ok: bool, message: &str| {
            if ok {
                Verification::output(question.expected_output.clone())
            } else {
                Verification::error(message)
            }
        };

        match Category::classify(&question.title) {
            Category::HelloWorld => {
                expected_if(uses_any(&["hello, world!", "hello world"]), OUTPUT_MISMATCH)
            }
            Category::Addition => match sum_of_integers(question.sample_input()) {
                Some(sum) if uses_any(&["+", "sum", "add"]) => Verification::output(sum.to_string()),
                Some(_) => Verification::error(MISSING_ADDITION),
                // Fewer than two numbers: no output and no error.
                None => Verification::default(),
            },
            Category::Maximum => expected_if(uses_any(&["max", "sort", ">"]), MISSING_MAXIMUM),
            Category::Collection => {
                expected_if(uses_any(&["[", "array", "list"]), MISSING_COLLECTION)
            }
            Category::Loop => expected_if(uses_any(&["for", "while", "range"]), MISSING_LOOP),
            Category::Text => expected_if(uses_any(&["string", "str", "text"]), MISSING_STRING),
            Category::General => {
                let complete = uses_any(&DEFAULT_KEYWORDS)
                    && source.trim().chars().count() > MIN_COMPLETE_SOLUTION_LEN;
                expected_if(complete, INCOMPLETE_SOLUTION)
            }
        }
    }

    fn verify_free_form(source: &str, language: &str) -> Verification {
        let code = source.to_lowercase();

        if source.trim().is_empty() {
            Verification::error(EMPTY_SOURCE)
        } else if language == "python" && !code.contains("print") {
            Verification::output(PYTHON_PRINT_HINT)
        } else if language == "java" && !code.contains("system.out") {
            Verification::output(JAVA_PRINT_HINT)
        } else {
            Verification::output(format!(
                "Code executed successfully!\nOutput: Hello from {}",
                language
            ))
        }
    }
}

impl Verifier for RuleBasedVerifier {
    fn verify(&self, question: Option<&Question>, source: &str, language: &str) -> Verification {
        match question {
            Some(question) => Self::verify_question(question, source),
            None => Self::verify_free_form(source, language),
        }
    }
}

/// Sum of every decimal integer in `input`, or `None` when it holds fewer
/// than two. Values too large for `i64` saturate.
fn sum_of_integers(input: &str) -> Option<i64> {
    let numbers: Vec<i64> = INTEGER_PATTERN
        .find_iter(input)
        .map(|m| m.as_str().parse::<i64>().unwrap_or(i64::MAX))
        .collect();

    if numbers.len() < 2 {
        return None;
    }
    Some(numbers.into_iter().fold(0_i64, i64::saturating_add))
}
