// Pattern 8: Aggregation
use oop_concepts::concepts::aggregation;
use oop_concepts::report::{init_logging, print_transcript, verbose_requested};

fn main() {
    init_logging(verbose_requested(std::env::args()));
    log::info!("running the aggregation example");
    print_transcript("Aggregation", &aggregation::demo());
}
