use crate::config::Config;
use crate::errors::{AppError, AppResult};

use crate::cli::parser::{Cli, Commands};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Configuration file: {}\n", path.display());
            let yaml = serde_yaml::to_string(&cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            // Editor di ripiego: variabili d'ambiente, poi default di piattaforma
            let fallback = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            // L'editor passato con --editor ha la precedenza
            let mut candidates: Vec<String> = Vec::new();
            if let Some(requested) = editor.clone() {
                candidates.push(requested);
            }
            if !candidates.contains(&fallback) {
                candidates.push(fallback);
            }

            let mut edited = false;
            for (i, candidate) in candidates.iter().enumerate() {
                match Command::new(candidate).arg(&path).status() {
                    Ok(s) if s.success() => {
                        println!("✅ Configuration file edited successfully using '{candidate}'");
                        edited = true;
                        break;
                    }
                    Ok(_) | Err(_) => {
                        if let Some(next) = candidates.get(i + 1) {
                            eprintln!(
                                "⚠️  Editor '{candidate}' not available, falling back to '{next}'"
                            );
                        }
                    }
                }
            }

            if !edited {
                eprintln!("❌ Failed to edit configuration file");
            }
        }
    }

    Ok(())
}
