use std::process::ExitCode;

use rand::rngs::OsRng;
use rfc5114_dh::{exchange, RFC5114_2048_256};

fn main() -> ExitCode {
    match exchange::run(RFC5114_2048_256.clone(), &mut OsRng) {
        Ok(outcome) if outcome.passed() => {
            println!("Tests passed.");
            ExitCode::SUCCESS
        }
        Ok(_) => {
            eprintln!("Tests failed.");
            ExitCode::from(255)
        }
        Err(err) => {
            eprintln!("Tests failed: {}", err);
            ExitCode::from(255)
        }
    }
}
