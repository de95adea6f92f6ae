// Pattern 2: Encapsulation
use oop_concepts::concepts::encapsulation;
use oop_concepts::report::{init_logging, print_transcript, verbose_requested};

fn main() {
    init_logging(verbose_requested(std::env::args()));
    log::info!("running the encapsulation example");
    print_transcript("Encapsulation", &encapsulation::demo());
}
