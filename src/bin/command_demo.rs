// Standalone entry point for the command pattern demonstration

use behavioral_patterns::command::demo;

fn main() {
    demo::run();
}
