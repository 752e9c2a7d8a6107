use behavioral_patterns::{command, report, state};

fn main() {
    println!("=== Behavioral Patterns ===\n");

    println!("--- Command: music player with undo ---");
    command::demo::run();

    println!("\n--- State: character stances ---");
    state::demo::run();

    println!("\n--- Template Method: report pipeline ---");
    report::demo::run();
}
