//! # growseq
//!
//! A growable, order-preserving sequence and a short walkthrough that exercises it.
//!
//! The interesting piece is [`growseq::sequence::GrowableSequence`]. Everything else
//! (the fruit demo, the loop and conditional demos) writes human-readable lines to an
//! [`growseq::sink::OutputSink`] and exists to drive the sequence end to end.

pub mod growseq;

pub use growseq::driver::{run_fruit_demo, DemoReport, FruitSettings};
pub use growseq::sequence::GrowableSequence;
pub use growseq::sink::{MemorySink, OutputSink, WriterSink};
pub use growseq::walkthrough::{run_walkthrough, Eligibility, OpaqueId, TourSettings};
