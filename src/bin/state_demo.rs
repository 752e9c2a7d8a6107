// Standalone entry point for the state pattern demonstration

use behavioral_patterns::state::demo;

fn main() {
    demo::run();
}
