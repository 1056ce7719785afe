mod cli;

use roster::error::RosterError;

fn main() {
    match cli::run() {
        Ok(()) => {}
        Err(RosterError::Validation(errors)) => {
            for error in errors.kinds() {
                eprintln!("Error: {}", error);
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
