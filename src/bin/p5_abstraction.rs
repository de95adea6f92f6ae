// Pattern 5: Abstraction
use oop_concepts::concepts::abstraction;
use oop_concepts::report::{init_logging, print_transcript, verbose_requested};

fn main() {
    init_logging(verbose_requested(std::env::args()));
    log::info!("running the abstraction example");
    print_transcript("Abstraction", &abstraction::demo());
}
