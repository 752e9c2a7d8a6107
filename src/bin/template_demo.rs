// Standalone entry point for the template method demonstration

use behavioral_patterns::report::demo;

fn main() {
    demo::run();
}
