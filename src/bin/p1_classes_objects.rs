// Pattern 1: Classes and Objects
use oop_concepts::concepts::classes;
use oop_concepts::report::{init_logging, print_transcript, verbose_requested};

fn main() {
    init_logging(verbose_requested(std::env::args()));
    log::info!("running the classes and objects example");
    print_transcript("Classes and Objects", &classes::demo());
}
