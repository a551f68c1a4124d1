use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("Current configuration ({}):\n", path.display());
            ConfigLogic::print(&path.to_string_lossy())?;
        }

        if *check {
            let missing = Config::missing_fields();
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for field in missing {
                    warning(format!("Missing field '{}' (default will be used)", field));
                }
            }
        }

        if *edit_config {
            ConfigLogic::edit(&path.to_string_lossy(), editor)?;
            success("Configuration file edited.");
        }
    }

    Ok(())
}
