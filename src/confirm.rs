//! Yes/no confirmation asked before destructive operations.

/// Prompt shown before the whole list is cleared.
pub const CLEAR_PROMPT: &str = "Are you sure you want to delete all items?";

/// Something that can answer a yes/no question, typically a modal dialog.
pub trait Confirm {
    /// Ask the question and block until answered.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// A fixed answer.
impl Confirm for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}
