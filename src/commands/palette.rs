use crate::core::{
    command_init::{CommandContext, CommandOptions},
    error::Result,
    folder_tree::FolderTree,
    output::{print_info, print_section_header},
    swatch::color_swatch,
};
use colored::*;

pub fn execute_palette(options: &CommandOptions, count: Option<usize>) -> Result<()> {
    let context = CommandContext::initialize(options)?;
    let engine = &context.engine;
    let settings = engine.settings();
    let palette = settings.active_palette_colors();

    if palette.is_empty() {
        print_info(&format!(
            "Palette '{}' is missing or empty.",
            settings.active_palette
        ));
        return Ok(());
    }

    // Without an explicit count, show what the vault's root folders get
    let (colors, labels) = match count {
        Some(count) => (settings.auto_color_mode.generate(palette, count), Vec::new()),
        None => (engine.root_color_sequence(), engine.tree().list_root_folders()),
    };

    print_section_header(&format!(
        "Palette '{}' ({:?})",
        settings.active_palette, settings.auto_color_mode
    ));
    for (index, color) in colors.iter().enumerate() {
        let label = labels.get(index).map(String::as_str).unwrap_or_default();
        println!(
            "  {} {} {} {}",
            format!("[{}]", index + 1).cyan().bold(),
            color_swatch(Some(color)),
            color.white(),
            label
        );
    }
    println!();

    Ok(())
}
