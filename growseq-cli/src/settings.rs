//! Mapping from loaded configuration to walkthrough settings

use growseq::{FruitSettings, OpaqueId, TourSettings};
use growseq_config::GrowseqConfig;

pub fn tour_settings(config: &GrowseqConfig) -> TourSettings {
    let tour = &config.tour;
    TourSettings {
        name: tour.name.clone(),
        age: tour.age,
        voting_age: tour.voting_age,
        initial_page_count: tour.initial_page_count,
        revised_page_count: tour.revised_page_count,
        counted_loop_bound: tour.counted_loop_bound,
        while_loop_bound: tour.while_loop_bound,
        identifier: OpaqueId(tour.identifier),
        forwarded_identifier: OpaqueId(tour.forwarded_identifier),
    }
}

pub fn fruit_settings(config: &GrowseqConfig) -> FruitSettings {
    FruitSettings {
        initial: config.fruits.initial.clone(),
        appended: config.fruits.appended.clone(),
    }
}
