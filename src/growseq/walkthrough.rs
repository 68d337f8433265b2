//! Walkthrough of basic control flow
//!
//! Small side-effecting demonstrations run in a fixed order by [`run_walkthrough`]:
//! greeting, names, rebinding a mutable value, a conditional, a counted loop, a
//! condition-driven loop, the fruit demo and an identifier passed between functions.

use super::driver::{run_fruit_demo, DemoReport, FruitSettings};
use super::sink::OutputSink;
use std::fmt;
use std::io;
use tracing::{debug, info};

/// Opaque numeric identifier.
///
/// Only ever printed or compared. It does not refer to anything in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OpaqueId(pub u64);

impl fmt::Display for OpaqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of the voting-age check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible { age: u32 },
    TooYoung { minimum: u32 },
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible { .. })
    }
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eligibility::Eligible { age } => write!(f, "You are old enough to vote: {}", age),
            Eligibility::TooYoung { minimum } => {
                write!(f, "You need to be at least {} or above to vote.", minimum)
            }
        }
    }
}

/// Everything the walkthrough needs apart from the fruits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourSettings {
    pub name: String,
    pub age: u32,
    pub voting_age: u32,
    pub initial_page_count: u32,
    pub revised_page_count: u32,
    pub counted_loop_bound: u32,
    pub while_loop_bound: u32,
    pub identifier: OpaqueId,
    pub forwarded_identifier: OpaqueId,
}

impl Default for TourSettings {
    fn default() -> Self {
        Self {
            name: "Sachin".into(),
            age: 18,
            voting_age: 18,
            initial_page_count: 499,
            revised_page_count: 500,
            counted_loop_bound: 5,
            while_loop_bound: 3,
            identifier: OpaqueId(457854),
            forwarded_identifier: OpaqueId(12345),
        }
    }
}

pub fn greet(sink: &mut dyn OutputSink) -> io::Result<()> {
    sink.line("Hello from growseq")
}

pub fn announce_name(sink: &mut dyn OutputSink, name: &str) -> io::Result<()> {
    sink.field("Name", &name)
}

pub fn set_name(sink: &mut dyn OutputSink, name: &str) -> io::Result<()> {
    sink.field("First name", &name)
}

/// Report `initial`, rebind the same binding to `revised`, report again.
pub fn report_page_count(
    sink: &mut dyn OutputSink,
    initial: u32,
    revised: u32,
) -> io::Result<()> {
    let mut page_count = initial;
    sink.field("Page count", &page_count)?;

    page_count = revised;
    sink.field("Page count", &page_count)
}

/// `age` equal to `minimum` is eligible.
pub fn check_voting_eligibility(
    sink: &mut dyn OutputSink,
    age: u32,
    minimum: u32,
) -> io::Result<Eligibility> {
    let outcome = if age >= minimum {
        Eligibility::Eligible { age }
    } else {
        Eligibility::TooYoung { minimum }
    };
    sink.line(&outcome.to_string())?;
    Ok(outcome)
}

pub fn connect(sink: &mut dyn OutputSink) -> io::Result<()> {
    sink.line("Read from cmd")
}

pub fn load_user_data(sink: &mut dyn OutputSink) -> io::Result<()> {
    sink.line("User data loading...")
}

/// `for i in 0..bound`, reporting each `i`. Returns the values visited.
pub fn counted_loop(sink: &mut dyn OutputSink, bound: u32) -> io::Result<Vec<u32>> {
    sink.line("Loop started")?;
    let mut visited = Vec::with_capacity(bound as usize);
    for i in 0..bound {
        sink.field("i", &i)?;
        visited.push(i);
    }
    debug!(iterations = visited.len(), "counted loop finished");
    Ok(visited)
}

/// Loop while the counter is below `bound`. Returns the final counter.
pub fn while_loop(sink: &mut dyn OutputSink, bound: u32) -> io::Result<u32> {
    let mut counter = 0;
    while counter < bound {
        sink.field("Counter", &counter)?;
        counter += 1;
    }
    debug!(counter, "while loop finished");
    Ok(counter)
}

pub fn report_identifier(sink: &mut dyn OutputSink, id: OpaqueId) -> io::Result<()> {
    sink.field("Identifier", &id)
}

/// Receive `id` by value and hand it on to the route check
pub fn forward_identifier(sink: &mut dyn OutputSink, id: OpaqueId) -> io::Result<()> {
    sink.field("Forwarded identifier", &id)?;
    check_route(sink, id)
}

/// Report that `id` reached the route check. No route is looked up or validated.
fn check_route(sink: &mut dyn OutputSink, id: OpaqueId) -> io::Result<()> {
    sink.line(&format!("Route checked for identifier {}", id))
}

/// Run every demonstration in order and return the fruit demo's report.
pub fn run_walkthrough(
    sink: &mut dyn OutputSink,
    tour: &TourSettings,
    fruits: &FruitSettings,
) -> io::Result<DemoReport> {
    info!(name = %tour.name, "starting walkthrough");

    greet(sink)?;
    announce_name(sink, &tour.name)?;
    report_page_count(sink, tour.initial_page_count, tour.revised_page_count)?;
    check_voting_eligibility(sink, tour.age, tour.voting_age)?;

    connect(sink)?;
    load_user_data(sink)?;
    counted_loop(sink, tour.counted_loop_bound)?;
    while_loop(sink, tour.while_loop_bound)?;
    set_name(sink, &tour.name)?;

    let report = run_fruit_demo(sink, fruits)?;

    report_identifier(sink, tour.identifier)?;
    forward_identifier(sink, tour.forwarded_identifier)?;

    info!(grown_length = report.grown_length, "walkthrough finished");
    Ok(report)
}
