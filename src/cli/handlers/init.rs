use std::fs;

use crate::cli::commands::InitArgs;
use crate::io::vault_io;

const CONFIG_TOML_TEMPLATE: &str = r##"[vault]
name = "{name}"

[sweep]
# Flip overdue pending tasks to missed on every load.
auto = true

# --- Defaults ---
# Applied when `bz add` is called without the matching flag.

[tasks]
default_priority = 5
default_timeframe = "daily"

[milestones]
# Increment used by `bz milestone bump` without --by.
progress_step = 10
"##;

/// Infer a vault name from a directory name: replace hyphens with spaces, title-case.
fn infer_name(dir_name: &str) -> String {
    dir_name
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    upper + &chars.collect::<String>()
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn cmd_init(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let blaze_dir = cwd.join("blaze");

    // Check if already initialized
    if blaze_dir.is_dir() {
        return Err("blaze vault already exists in ./blaze/".into());
    }

    // Check for parent vault and warn
    if let Some(parent) = cwd.parent()
        && let Ok(parent_root) = vault_io::discover_vault(parent)
    {
        eprintln!(
            "Note: parent vault found at {}/",
            parent_root.join("blaze").display()
        );
        eprintln!("Creating new vault in ./blaze/");
    }

    // Infer vault name
    let name = args.name.unwrap_or_else(|| {
        cwd.file_name()
            .and_then(|n| n.to_str())
            .map(infer_name)
            .unwrap_or_else(|| "Personal".to_string())
    });

    fs::create_dir_all(&blaze_dir)?;
    let toml_content = CONFIG_TOML_TEMPLATE.replace("{name}", &name);
    fs::write(blaze_dir.join("config.toml"), toml_content)?;

    println!("Initialized blaze vault: {}", name);
    Ok(())
}
