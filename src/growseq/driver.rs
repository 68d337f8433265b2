//! Fruit demonstration
//!
//! Builds a sequence from the configured fruits, reports it, appends one more fruit
//! and reports again. The returned [`DemoReport`] carries both states so callers can
//! serialize the run instead of (or as well as) reading the sink.

use super::sequence::GrowableSequence;
use super::sink::OutputSink;
use serde::Serialize;
use std::io;
use tracing::debug;

/// What the fruit demo starts from and what it appends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FruitSettings {
    pub initial: Vec<String>,
    pub appended: String,
}

impl Default for FruitSettings {
    fn default() -> Self {
        Self {
            initial: vec!["apple".into(), "banana".into(), "mango".into()],
            appended: "orange".into(),
        }
    }
}

/// Before/after state of one fruit demo run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub initial: GrowableSequence<String>,
    pub initial_length: usize,
    pub grown: GrowableSequence<String>,
    pub grown_length: usize,
}

/// Run the fruit demo, writing four lines to `sink`.
pub fn run_fruit_demo(
    sink: &mut dyn OutputSink,
    settings: &FruitSettings,
) -> io::Result<DemoReport> {
    let mut fruits = GrowableSequence::from_elements(settings.initial.iter().cloned());
    debug!(length = fruits.len(), "created fruit sequence");

    sink.field("Printing available fruits", &fruits)?;
    sink.field("Array length", &fruits.len())?;

    let initial = GrowableSequence::from(fruits.snapshot());
    let initial_length = fruits.len();

    fruits.append(settings.appended.clone());
    debug!(
        appended = %settings.appended,
        length = fruits.len(),
        "appended fruit"
    );

    sink.field("Fruits array after append", &fruits)?;
    sink.field("New array size", &fruits.len())?;

    Ok(DemoReport {
        initial,
        initial_length,
        grown_length: fruits.len(),
        grown: fruits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growseq::sink::MemorySink;

    #[test]
    fn test_default_demo_lines() {
        let mut sink = MemorySink::new();
        run_fruit_demo(&mut sink, &FruitSettings::default()).unwrap();

        assert_eq!(
            sink.lines(),
            &[
                "Printing available fruits: apple, banana, mango",
                "Array length: 3",
                "Fruits array after append: apple, banana, mango, orange",
                "New array size: 4",
            ]
        );
    }

    #[test]
    fn test_report_keeps_both_states() {
        let mut sink = MemorySink::new();
        let report = run_fruit_demo(&mut sink, &FruitSettings::default()).unwrap();

        assert_eq!(report.initial_length, 3);
        assert_eq!(report.grown_length, 4);
        assert_eq!(report.initial.render(), "apple, banana, mango");
        assert_eq!(report.grown.render(), "apple, banana, mango, orange");
    }

    #[test]
    fn test_demo_from_empty_start() {
        let settings = FruitSettings {
            initial: Vec::new(),
            appended: "x".into(),
        };
        let mut sink = MemorySink::new();
        let report = run_fruit_demo(&mut sink, &settings).unwrap();

        assert_eq!(report.initial_length, 0);
        assert_eq!(report.grown_length, 1);
        assert_eq!(sink.lines()[0], "Printing available fruits: ");
    }
}
