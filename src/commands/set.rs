use crate::core::{
    command_init::{CommandContext, CommandOptions},
    error::{FolderColorsError, Result},
    folder_override::{OverrideUpdate, Patch},
    print_info, print_success,
};
use clap::ValueEnum;

/// Override fields that can be cleared with `--clear`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OverrideField {
    BaseColor,
    IconColor,
    FolderColor,
    TextColor,
    Icon,
    Inherit,
    ApplyToSubfolders,
}

/// Arguments of the `set` command, already split out of the CLI parser
#[derive(Debug, Clone, Default)]
pub struct SetArgs {
    pub base_color: Option<String>,
    pub icon_color: Option<String>,
    pub folder_color: Option<String>,
    pub text_color: Option<String>,
    pub icon: Option<String>,
    pub inherit: Option<bool>,
    pub apply_to_subfolders: Option<bool>,
    pub clear: Vec<OverrideField>,
}

fn patch_from<T>(value: Option<T>) -> Patch<T> {
    value.map(Patch::Set).unwrap_or_default()
}

impl SetArgs {
    /// Build the override update. `--clear` wins over a value given for the same field
    pub fn into_update(self) -> Result<OverrideUpdate> {
        let mut update = OverrideUpdate {
            base_color: patch_from(self.base_color),
            icon_color: patch_from(self.icon_color),
            folder_color: patch_from(self.folder_color),
            text_color: patch_from(self.text_color),
            icon: patch_from(self.icon),
            inherit_base_color: patch_from(self.inherit),
            apply_to_subfolders: patch_from(self.apply_to_subfolders),
        };

        for field in self.clear {
            match field {
                OverrideField::BaseColor => update.base_color = Patch::Remove,
                OverrideField::IconColor => update.icon_color = Patch::Remove,
                OverrideField::FolderColor => update.folder_color = Patch::Remove,
                OverrideField::TextColor => update.text_color = Patch::Remove,
                OverrideField::Icon => update.icon = Patch::Remove,
                OverrideField::Inherit => update.inherit_base_color = Patch::Remove,
                OverrideField::ApplyToSubfolders => update.apply_to_subfolders = Patch::Remove,
            }
        }

        update.validate()
    }
}

pub fn execute_set(options: &CommandOptions, folder: &str, args: SetArgs) -> Result<()> {
    let mut context = CommandContext::initialize(options)?;
    let path = context.resolve_folder(folder)?;

    let update = args.into_update()?;
    if update.is_empty() {
        return Err(FolderColorsError::empty_override_update(path.to_string()));
    }

    let stored = context.engine.set_folder_override(&path, &update).is_some();
    context.save()?;

    if stored {
        print_success(&format!("Updated override for '{path}'."));
    } else {
        print_info(&format!("Override for '{path}' is now empty and was removed."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_update_sets_and_normalizes() -> Result<()> {
        let update = SetArgs {
            base_color: Some("#3b82f6".to_string()),
            inherit: Some(false),
            ..Default::default()
        }
        .into_update()?;

        assert_eq!(update.base_color, Patch::Set("#3B82F6".to_string()));
        assert_eq!(update.inherit_base_color, Patch::Set(false));
        assert_eq!(update.icon, Patch::Unchanged);
        Ok(())
    }

    #[test]
    fn test_clear_wins_over_value() -> Result<()> {
        let update = SetArgs {
            icon_color: Some("#FFFFFF".to_string()),
            clear: vec![OverrideField::IconColor, OverrideField::Icon],
            ..Default::default()
        }
        .into_update()?;

        assert_eq!(update.icon_color, Patch::Remove);
        assert_eq!(update.icon, Patch::Remove);
        Ok(())
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let result = SetArgs {
            text_color: Some("purple".to_string()),
            ..Default::default()
        }
        .into_update();
        assert!(matches!(
            result,
            Err(FolderColorsError::InvalidHexColor { .. })
        ));
    }

    #[test]
    fn test_no_arguments_is_empty_update() -> Result<()> {
        assert!(SetArgs::default().into_update()?.is_empty());
        Ok(())
    }
}
