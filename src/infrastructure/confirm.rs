//! Human confirmation gate for destructive actions.

use dialoguer::Confirm;

/// Blocking yes/no confirmation.
#[cfg_attr(test, mockall::automock)]
pub trait Confirmer: Send + Sync {
    /// Asks `prompt` and returns `true` only on an explicit yes.
    fn confirm(&self, prompt: &str) -> anyhow::Result<bool>;
}

/// Interactive terminal prompt that defaults to "no".
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerConfirmer;

impl Confirmer for DialoguerConfirmer {
    fn confirm(&self, prompt: &str) -> anyhow::Result<bool> {
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(confirmed)
    }
}

/// Confirms everything without asking, for `--yes`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self, _prompt: &str) -> anyhow::Result<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assume_yes() {
        assert!(AssumeYes.confirm("Clear?").unwrap());
    }
}
