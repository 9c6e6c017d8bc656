use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*, vault::*};

#[cfg(test)]
mod palette_command_tests {
    use super::*;

    #[test]
    fn test_palette_with_count() -> anyhow::Result<()> {
        let vault = setup_test_vault()?;

        vault
            .command()?
            .args(["palette", "--count", "3"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Palette 'default'"))
            .stdout(assertions::has_palette_index(1))
            .stdout(assertions::has_palette_index(3))
            .stdout(assertions::has_palette_index(4).not())
            .stdout(predicate::str::contains("#EF4444"));

        Ok(())
    }

    #[test]
    fn test_palette_labels_root_folders() -> anyhow::Result<()> {
        let vault = create_multi_root_vault()?;

        vault
            .command()?
            .arg("palette")
            .assert()
            .success()
            .stdout(predicate::str::contains("#EF4444 Archive"))
            .stdout(predicate::str::contains("#F97316 journal"))
            .stdout(predicate::str::contains("#EAB308 Projects"));

        Ok(())
    }

    #[test]
    fn test_palette_repeat_mode_cycles() -> anyhow::Result<()> {
        let vault = setup_test_vault()?;
        vault.write_settings(&two_color_settings(
            folder_colors::core::settings::AutoColorMode::Repeat,
        ))?;

        vault
            .command()?
            .args(["palette", "--count", "3"])
            .assert()
            .success()
            .stdout(predicate::str::contains("(Repeat)"))
            .stdout(predicate::str::contains("[3]    #FF0000"));

        Ok(())
    }
}
