// Pattern 9: Composition
use oop_concepts::concepts::composition;
use oop_concepts::report::{init_logging, print_transcript, verbose_requested};

fn main() {
    init_logging(verbose_requested(std::env::args()));
    log::info!("running the composition example");
    print_transcript("Composition", &composition::demo());
}
