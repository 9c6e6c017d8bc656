use crate::core::{
    color_element::ColorElement,
    command_init::{CommandContext, CommandOptions},
    error::Result,
    output::{print_field, print_section_header},
    swatch::{format_color_value, format_opacity},
};

pub fn execute_show(options: &CommandOptions, folder: &str) -> Result<()> {
    let context = CommandContext::initialize(options)?;
    let path = context.resolve_folder(folder)?;
    let engine = &context.engine;

    let base = engine.get_base_color(&path);
    let colors = engine.get_computed_colors(&path);
    log::debug!("Resolved colors for '{path}': {colors:?}");

    print_section_header(&path.to_string());
    print_field("base", &format_color_value(base.as_deref()));
    for element in ColorElement::ALL {
        print_field(
            element.description(),
            &format_color_value(colors.get(element)),
        );
    }

    // Opacity only applies when there is a background to paint
    if colors.folder_color.is_some() {
        print_field("opacity", &format_opacity(engine.get_computed_opacity(&path)));
    }

    if let Some(icon) = engine.get_icon(&path) {
        print_field("icon name", &icon);
    }
    println!();

    Ok(())
}
