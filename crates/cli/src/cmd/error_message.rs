use std::io::{self, Read};

use mdpubs_core::util::extract_error_message;

pub fn run() {
    let mut payload = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut payload) {
        eprintln!("Error reading stdin: {e}");
        std::process::exit(1);
    }
    println!("{}", extract_error_message(&payload));
}
