use mdpubs_core::config::{ConfigLoader, default_config_path};
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            println!("OK   mdpubs doctor");
            println!("version: {}", mdpubs_core::version());
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("debug: {}", rc.debug);
            println!("notifications: {}", rc.notifications);
            println!("logging.level: {}", rc.logging.level);
            if let Some(file) = &rc.logging.file {
                println!("logging.file: {}", file.display());
            }
            if rc.watched_folders.is_empty() {
                println!("watched_folders: (none)");
            } else {
                println!("watched_folders:");
                for folder in &rc.watched_folders {
                    let marker = if folder.is_dir() { "" } else { " (missing)" };
                    println!("  - {}{}", folder.display(), marker);
                }
            }
        }
        Err(e) => {
            println!("FAIL mdpubs doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
