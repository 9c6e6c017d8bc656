use clap::{Parser, Subcommand};
use folder_colors::commands::*;
use folder_colors::core::{command_init::CommandOptions, error::Result, print_error};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folder-colors")]
#[command(about = "Hierarchical folder colors for a vault")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Vault directory (defaults to the current directory)
    #[arg(long, global = true)]
    vault: Option<PathBuf>,

    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved colors of one folder
    Show {
        /// Folder path relative to the vault (e.g., "Projects/Alpha")
        path: String,
    },
    /// Print the vault's folder tree with resolved colors
    Tree,
    /// Create or update a folder override
    Set {
        /// Folder path relative to the vault
        path: String,
        /// Base color passed on to subfolders (e.g., "#3B82F6")
        #[arg(long)]
        base_color: Option<String>,
        /// Explicit icon color
        #[arg(long)]
        icon_color: Option<String>,
        /// Explicit background color
        #[arg(long)]
        folder_color: Option<String>,
        /// Explicit text color
        #[arg(long)]
        text_color: Option<String>,
        /// Icon name
        #[arg(long)]
        icon: Option<String>,
        /// Whether this folder and its subfolders inherit a base color
        #[arg(long, value_name = "BOOL")]
        inherit: Option<bool>,
        /// Whether the icon applies to subfolders
        #[arg(long, value_name = "BOOL")]
        apply_to_subfolders: Option<bool>,
        /// Remove a field from the override (repeatable)
        #[arg(long, value_enum)]
        clear: Vec<OverrideField>,
    },
    /// Remove a folder override
    Remove {
        /// Folder path relative to the vault
        path: String,
    },
    /// Show the active palette as assigned to root folders
    Palette {
        /// Expand the palette to this many colors instead
        #[arg(long)]
        count: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let options = CommandOptions {
        vault: cli.vault,
        settings: cli.settings,
    };

    let result = match cli.command {
        Commands::Show { path } => execute_show(&options, &path),
        Commands::Tree => execute_tree(&options),
        Commands::Set {
            path,
            base_color,
            icon_color,
            folder_color,
            text_color,
            icon,
            inherit,
            apply_to_subfolders,
            clear,
        } => {
            let args = SetArgs {
                base_color,
                icon_color,
                folder_color,
                text_color,
                icon,
                inherit,
                apply_to_subfolders,
                clear,
            };
            execute_set(&options, &path, args)
        }
        Commands::Remove { path } => execute_remove(&options, &path),
        Commands::Palette { count } => execute_palette(&options, count),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
