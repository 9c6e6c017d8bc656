use crate::core::{
    command_init::{CommandContext, CommandOptions},
    error::Result,
    folder_path::FolderPath,
    print_info, print_success,
};

pub fn execute_remove(options: &CommandOptions, folder: &str) -> Result<()> {
    let mut context = CommandContext::initialize(options)?;
    // Overrides of folders that no longer exist can still be removed
    let path = FolderPath::parse(folder)?;

    if context.engine.remove_folder_override(&path).is_none() {
        print_info(&format!("No override set for '{path}'."));
        return Ok(());
    }

    context.save()?;
    print_success(&format!("Removed override for '{path}'."));
    Ok(())
}
