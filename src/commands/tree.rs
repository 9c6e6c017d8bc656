use crate::core::{
    command_init::{CommandContext, CommandOptions},
    error::Result,
    output::{print_info, print_section_header},
    swatch::{color_swatch, paint_text},
};
use colored::*;

pub fn execute_tree(options: &CommandOptions) -> Result<()> {
    let context = CommandContext::initialize(options)?;
    let engine = &context.engine;
    let folders = engine.tree().walk();

    if folders.is_empty() {
        print_info("No folders found in vault.");
        return Ok(());
    }

    print_section_header(&engine.tree().root().display().to_string());

    for path in &folders {
        let colors = engine.get_computed_colors(path);
        let indent = "  ".repeat(path.depth());
        let background = colors
            .folder_color
            .as_deref()
            .map(|hex| hex.bright_black().to_string())
            .unwrap_or_default();

        println!(
            "{indent}{} {} {}",
            color_swatch(colors.icon_color.as_deref()),
            paint_text(path.name(), colors.text_color.as_deref()),
            background
        );
    }
    println!();

    log::debug!("Rendered {} folders", folders.len());
    Ok(())
}
