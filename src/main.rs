use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = bank_ledger::app::run(std::env::args()) {
        eprintln!("{e}");
        process::exit(1);
    }
}
