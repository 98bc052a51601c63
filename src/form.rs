//! State behind the "add item" form.
//!
//! The form owns its field values; a front end only mirrors them and reports
//! edits back. Submitting turns the fields into a new item on the list.

use crate::error::{ListError, Result};
use crate::list::ListSnapshot;
use crate::manager::PackingList;
use crate::types::ItemInput;
use std::ops::RangeInclusive;
use tracing::debug;

/// Controlled description/quantity fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddForm {
    description: String,
    quantity: u32,
    max_quantity: u32,
}

impl AddForm {
    pub fn new(max_quantity: u32) -> Self {
        Self {
            description: String::new(),
            quantity: 1,
            max_quantity: max_quantity.max(1),
        }
    }

    /// A form sized by the list's configuration.
    pub fn for_list(list: &PackingList) -> Self {
        Self::new(list.config().max_quantity)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Values offered by the quantity selector.
    pub fn quantity_options(&self) -> RangeInclusive<u32> {
        1..=self.max_quantity
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Set the quantity, clamped into the selector's range.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.clamp(1, self.max_quantity);
    }

    /// Set the quantity from raw selector text.
    pub fn set_quantity_str(&mut self, raw: &str) -> Result<()> {
        let quantity: u32 = raw
            .trim()
            .parse()
            .map_err(|_| ListError::QuantityNotANumber(raw.to_string()))?;
        if quantity == 0 {
            return Err(ListError::InvalidQuantity(quantity));
        }
        self.set_quantity(quantity);
        Ok(())
    }

    /// Back to an empty description and a quantity of 1.
    pub fn reset(&mut self) {
        self.description.clear();
        self.quantity = 1;
    }

    /// Add the current fields as a new item.
    ///
    /// An empty description is refused and the fields are kept. On success the
    /// fields reset.
    pub fn submit(&mut self, list: &PackingList) -> Result<ListSnapshot> {
        if self.description.is_empty() {
            debug!("submit ignored, description is empty");
            return Err(ListError::EmptyDescription);
        }

        let snapshot = list.add_new(ItemInput::new(self.description.clone(), self.quantity))?;
        self.reset();
        Ok(snapshot)
    }
}

impl Default for AddForm {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_QUANTITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::sample_items;

    #[test]
    fn test_initial_state() {
        let form = AddForm::default();
        assert_eq!(form.description(), "");
        assert_eq!(form.quantity(), 1);
        assert_eq!(form.quantity_options().count(), 20);
    }

    #[test]
    fn test_submit_resets_fields() {
        let list = PackingList::with_items(sample_items()).unwrap();
        let mut form = AddForm::for_list(&list);

        form.set_description("Sunscreen");
        form.set_quantity(3);
        let snapshot = form.submit(&list).unwrap();

        let added = snapshot.last().unwrap();
        assert_eq!(added.description, "Sunscreen");
        assert_eq!(added.quantity, 3);
        assert_eq!(form, AddForm::for_list(&list));
    }

    #[test]
    fn test_submit_empty_keeps_fields() {
        let list = PackingList::with_items(sample_items()).unwrap();
        let mut form = AddForm::default();
        form.set_quantity(4);

        let result = form.submit(&list);
        assert!(matches!(result, Err(ListError::EmptyDescription)));
        assert_eq!(form.quantity(), 4);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_quantity_from_selector_text() {
        let mut form = AddForm::new(20);
        form.set_quantity_str("7").unwrap();
        assert_eq!(form.quantity(), 7);

        form.set_quantity_str("99").unwrap();
        assert_eq!(form.quantity(), 20);

        match form.set_quantity_str("seven") {
            Err(ListError::QuantityNotANumber(raw)) => assert_eq!(raw, "seven"),
            other => panic!("Expected QuantityNotANumber, got {:?}", other),
        }
        assert!(matches!(
            form.set_quantity_str("0"),
            Err(ListError::InvalidQuantity(0))
        ));
        assert_eq!(form.quantity(), 20);
    }
}
