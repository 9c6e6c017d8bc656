use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*, vault::*};

#[cfg(test)]
mod set_command_tests {
    use super::*;

    #[test]
    fn test_set_base_color_is_normalized_and_saved() -> anyhow::Result<()> {
        let vault = setup_test_vault()?;
        create_folders(vault.path(), &["Notes"])?;

        vault
            .command()?
            .args(["set", "Notes", "--base-color", "3b82f6"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Updated override for 'Notes'"));

        let settings = vault.read_settings()?;
        let record = settings
            .folder_overrides
            .get("Notes")
            .expect("override saved");
        assert_eq!(record.base_color.as_deref(), Some("#3B82F6"));
        Ok(())
    }

    #[test]
    fn test_set_then_show_reflects_override() -> anyhow::Result<()> {
        let vault = setup_test_vault()?;
        create_folders(vault.path(), &["Notes/Daily"])?;

        vault
            .command()?
            .args(["set", "Notes", "--text-color", "#FF0000", "--icon", "book"])
            .assert()
            .success();

        vault
            .command()?
            .args(["show", "Notes"])
            .assert()
            .success()
            .stdout(assertions::has_field("text", "#FF0000"))
            .stdout(assertions::has_field("icon name", "book"));

        Ok(())
    }

    #[test]
    fn test_set_on_folder_name_with_spaces() -> anyhow::Result<()> {
        let vault = setup_test_vault()?;
        create_folders(vault.path(), &[" Notes "])?;

        vault
            .command()?
            .args(["set", " Notes ", "--base-color", "#10B981"])
            .assert()
            .success();

        let settings = vault.read_settings()?;
        assert!(settings.folder_overrides.contains_key(" Notes "));

        vault
            .command()?
            .args(["show", " Notes "])
            .assert()
            .success()
            .stdout(assertions::has_field("base", "#10B981"));

        Ok(())
    }

    #[test]
    fn test_set_inherit_flag() -> anyhow::Result<()> {
        let vault = create_projects_vault()?;

        vault
            .command()?
            .args(["set", "Projects", "--inherit", "false"])
            .assert()
            .success();

        let settings = vault.read_settings()?;
        assert!(!settings.folder_overrides["Projects"].inherit_base_color);

        vault
            .command()?
            .args(["show", "Projects/Sub"])
            .assert()
            .success()
            .stdout(predicate::str::contains("#").not());

        Ok(())
    }

    #[test]
    fn test_set_invalid_color_fails() -> anyhow::Result<()> {
        let vault = setup_test_vault()?;
        create_folders(vault.path(), &["Notes"])?;

        vault
            .command()?
            .args(["set", "Notes", "--folder-color", "blue"])
            .assert()
            .failure()
            .stdout(assertions::invalid_hex_color("blue"));

        assert!(!vault.settings_path.exists());
        Ok(())
    }

    #[test]
    fn test_set_without_fields_fails() -> anyhow::Result<()> {
        let vault = setup_test_vault()?;
        create_folders(vault.path(), &["Notes"])?;

        vault
            .command()?
            .args(["set", "Notes"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("Nothing to update for 'Notes'"));

        Ok(())
    }

    #[test]
    fn test_set_missing_folder_fails() -> anyhow::Result<()> {
        let vault = setup_test_vault()?;

        vault
            .command()?
            .args(["set", "Ghost", "--base-color", "#000000"])
            .assert()
            .failure()
            .stdout(assertions::folder_not_found("Ghost"));

        Ok(())
    }

    #[test]
    fn test_clearing_last_field_prunes_override() -> anyhow::Result<()> {
        let vault = create_override_vault("#10B981")?;

        vault
            .command()?
            .args(["set", "Notes", "--clear", "base-color"])
            .assert()
            .success()
            .stdout(predicate::str::contains("is now empty and was removed"));

        let settings = vault.read_settings()?;
        assert!(settings.folder_overrides.is_empty());
        Ok(())
    }
}
