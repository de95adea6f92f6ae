// Pattern 3: Inheritance - single, multilevel and hierarchical
use oop_concepts::concepts::inheritance;
use oop_concepts::report::{init_logging, print_transcript, verbose_requested};

fn main() {
    init_logging(verbose_requested(std::env::args()));

    print_transcript("Single Inheritance", &inheritance::single_example());
    print_transcript("Multilevel Inheritance", &inheritance::multilevel_example());
    print_transcript("Hierarchical Inheritance", &inheritance::hierarchical_example());
}
