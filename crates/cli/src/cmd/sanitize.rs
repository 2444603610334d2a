use mdpubs_core::util::sanitize_filename;

use crate::SanitizeArgs;

pub fn run(args: &SanitizeArgs) {
    println!("{}", sanitize_filename(&args.name));
}
