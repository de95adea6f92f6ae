// Pattern 4: Polymorphism
use oop_concepts::concepts::polymorphism;
use oop_concepts::report::{init_logging, print_transcript, verbose_requested};

fn main() {
    init_logging(verbose_requested(std::env::args()));
    log::info!("running the polymorphism example");
    print_transcript("Polymorphism", &polymorphism::demo());
}
