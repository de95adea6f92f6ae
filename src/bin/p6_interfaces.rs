// Pattern 6: Interfaces
use oop_concepts::concepts::interfaces;
use oop_concepts::report::{init_logging, print_transcript, verbose_requested};

fn main() {
    init_logging(verbose_requested(std::env::args()));
    log::info!("running the interfaces example");
    print_transcript("Interfaces", &interfaces::demo());
}
