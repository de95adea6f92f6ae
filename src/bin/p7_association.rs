// Pattern 7: Association
use oop_concepts::concepts::association;
use oop_concepts::report::{init_logging, print_transcript, verbose_requested};

fn main() {
    init_logging(verbose_requested(std::env::args()));
    log::info!("running the association example");
    print_transcript("Association", &association::demo());
}
