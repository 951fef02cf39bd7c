//! Options and confirmable capabilities shared by several element kinds.
//!
//! Elements that offer choices hold an [`OptionSet`] rather than inheriting
//! option handling. The set owns either a flat option list or an option
//! group list, never both, and enforces the single-selection invariant for
//! single-select kinds across both collections.

use crate::block_kit::composition::{
    self, Confirmation, IntoConfirmation, IntoOptionGroup, IntoSelectOption, OptionGroup,
    SelectOption, Text,
};
use crate::block_kit::error::{BlockKitError, BlockKitResult};
use serde::Deserialize;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// How many options an element may start out with selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// At most one option; serialised as `initial_option`.
    Single,
    /// Any number of options; serialised as `initial_options`.
    Multiple,
    /// Selection flags are ignored and never serialised.
    Unselectable,
}

/// Options held by an options-capable element.
///
/// # Invariants
///
/// - At most one of `options` and `option_groups` is non-empty.
/// - In [`SelectionMode::Single`], at most one option across both
///   collections is initially selected.
/// - A rejected mutation leaves the set unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    mode: SelectionMode,
    options: Vec<SelectOption>,
    option_groups: Vec<OptionGroup>,
    has_initial_selection: bool,
}

impl OptionSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            options: Vec::new(),
            option_groups: Vec::new(),
            has_initial_selection: false,
        }
    }

    /// Returns the selection mode.
    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Appends a flat option, clearing any option groups.
    ///
    /// # Errors
    ///
    /// Returns [`BlockKitError::MultipleInitialOptions`] when a
    /// single-select set already holds a selection and the option is
    /// selected too, or any construction error of the input.
    pub fn add_option(&mut self, input: impl IntoSelectOption) -> BlockKitResult<()> {
        let option = input.into_select_option()?;
        self.admit(usize::from(option.is_initially_selected()))?;
        self.option_groups.clear();
        self.options.push(option);
        self.refresh_selection();
        Ok(())
    }

    /// Appends an option group, clearing any flat options.
    ///
    /// # Errors
    ///
    /// Returns [`BlockKitError::MultipleInitialOptions`] when the group's
    /// selections would give a single-select set more than one, or any
    /// construction error of the input.
    pub fn add_option_group(&mut self, input: impl IntoOptionGroup) -> BlockKitResult<()> {
        let group = input.into_option_group()?;
        self.admit(group.selected_count())?;
        self.options.clear();
        self.option_groups.push(group);
        self.refresh_selection();
        Ok(())
    }

    /// Replaces the flat options wholesale, clearing any option groups.
    ///
    /// The set is unchanged if any input is rejected.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Self::add_option`].
    pub fn set_options<I>(&mut self, options: I) -> BlockKitResult<()>
    where
        I: IntoIterator,
        I::Item: IntoSelectOption,
    {
        let mut staged = Self::new(self.mode);
        for option in options {
            staged.add_option(option)?;
        }
        *self = staged;
        Ok(())
    }

    /// Replaces the option groups wholesale, clearing any flat options.
    ///
    /// The set is unchanged if any input is rejected.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Self::add_option_group`].
    pub fn set_option_groups<I>(&mut self, groups: I) -> BlockKitResult<()>
    where
        I: IntoIterator,
        I::Item: IntoOptionGroup,
    {
        let mut staged = Self::new(self.mode);
        for group in groups {
            staged.add_option_group(group)?;
        }
        *self = staged;
        Ok(())
    }

    /// Removes every flat option.
    pub fn clear_options(&mut self) {
        self.options.clear();
        self.refresh_selection();
    }

    /// Removes every option group.
    pub fn clear_option_groups(&mut self) {
        self.option_groups.clear();
        self.refresh_selection();
    }

    /// Removes both collections.
    pub fn clear_all(&mut self) {
        self.options.clear();
        self.option_groups.clear();
        self.refresh_selection();
    }

    /// Returns the flat options in insertion order.
    #[must_use]
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Returns the option groups in insertion order.
    #[must_use]
    pub fn option_groups(&self) -> &[OptionGroup] {
        &self.option_groups
    }

    /// Returns `true` if any option is initially selected.
    #[must_use]
    pub const fn has_initial_selection(&self) -> bool {
        self.has_initial_selection
    }

    /// Returns the first initially selected option.
    ///
    /// Flat options are scanned first, then each group in order.
    #[must_use]
    pub fn initial_option(&self) -> Option<&SelectOption> {
        self.selected().next()
    }

    /// Returns every initially selected option in insertion order.
    #[must_use]
    pub fn initial_options(&self) -> Vec<&SelectOption> {
        self.selected().collect()
    }

    fn selected(&self) -> impl Iterator<Item = &SelectOption> {
        self.options
            .iter()
            .chain(self.option_groups.iter().flat_map(OptionGroup::options))
            .filter(|option| option.is_initially_selected())
    }

    fn admit(&self, incoming_selections: usize) -> BlockKitResult<()> {
        let over_limit = incoming_selections > 1
            || (incoming_selections == 1 && self.has_initial_selection);
        if self.mode == SelectionMode::Single && over_limit {
            tracing::debug!(
                incoming_selections,
                "rejected option input: single-select element already has a selection"
            );
            return Err(BlockKitError::MultipleInitialOptions);
        }
        Ok(())
    }

    fn refresh_selection(&mut self) {
        let selected = self.selected().next().is_some();
        self.has_initial_selection = selected;
    }
}

impl Serialize for OptionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if self.option_groups.is_empty() {
            map.serialize_entry("options", &self.options)?;
        } else {
            map.serialize_entry("option_groups", &self.option_groups)?;
        }

        match self.mode {
            SelectionMode::Single => {
                if let Some(initial) = self.initial_option() {
                    map.serialize_entry("initial_option", initial)?;
                }
            }
            SelectionMode::Multiple => {
                let initial = self.initial_options();
                if !initial.is_empty() {
                    map.serialize_entry("initial_options", &initial)?;
                }
            }
            SelectionMode::Unselectable => {}
        }
        map.end()
    }
}

/// Shared option handling for elements holding an [`OptionSet`].
pub trait HasOptions {
    /// Returns the held option set.
    fn option_set(&self) -> &OptionSet;

    /// Returns the held option set mutably.
    fn option_set_mut(&mut self) -> &mut OptionSet;

    /// Appends a flat option. See [`OptionSet::add_option`].
    ///
    /// # Errors
    ///
    /// Returns the error raised by [`OptionSet::add_option`].
    fn add_option(&mut self, option: impl IntoSelectOption) -> BlockKitResult<()> {
        self.option_set_mut().add_option(option)
    }

    /// Appends an option group. See [`OptionSet::add_option_group`].
    ///
    /// # Errors
    ///
    /// Returns the error raised by [`OptionSet::add_option_group`].
    fn add_option_group(&mut self, group: impl IntoOptionGroup) -> BlockKitResult<()> {
        self.option_set_mut().add_option_group(group)
    }

    /// Replaces the flat options. See [`OptionSet::set_options`].
    ///
    /// # Errors
    ///
    /// Returns the error raised by [`OptionSet::set_options`].
    fn set_options<I>(&mut self, options: I) -> BlockKitResult<()>
    where
        I: IntoIterator,
        I::Item: IntoSelectOption,
    {
        self.option_set_mut().set_options(options)
    }

    /// Replaces the option groups. See [`OptionSet::set_option_groups`].
    ///
    /// # Errors
    ///
    /// Returns the error raised by [`OptionSet::set_option_groups`].
    fn set_option_groups<I>(&mut self, groups: I) -> BlockKitResult<()>
    where
        I: IntoIterator,
        I::Item: IntoOptionGroup,
    {
        self.option_set_mut().set_option_groups(groups)
    }

    /// Removes every flat option.
    fn clear_options(&mut self) {
        self.option_set_mut().clear_options();
    }

    /// Removes every option group.
    fn clear_option_groups(&mut self) {
        self.option_set_mut().clear_option_groups();
    }

    /// Removes both option collections.
    fn clear_all_options(&mut self) {
        self.option_set_mut().clear_all();
    }

    /// Returns the flat options.
    fn options(&self) -> &[SelectOption] {
        self.option_set().options()
    }

    /// Returns the option groups.
    fn option_groups(&self) -> &[OptionGroup] {
        self.option_set().option_groups()
    }

    /// Appends a flat option, builder style.
    ///
    /// # Errors
    ///
    /// Returns the error raised by [`OptionSet::add_option`].
    fn with_option(mut self, option: impl IntoSelectOption) -> BlockKitResult<Self>
    where
        Self: Sized,
    {
        self.add_option(option)?;
        Ok(self)
    }

    /// Appends an option group, builder style.
    ///
    /// # Errors
    ///
    /// Returns the error raised by [`OptionSet::add_option_group`].
    fn with_option_group(mut self, group: impl IntoOptionGroup) -> BlockKitResult<Self>
    where
        Self: Sized,
    {
        self.add_option_group(group)?;
        Ok(self)
    }
}

/// Elements that may show a confirmation dialog before firing.
pub trait Confirmable {
    /// Returns the confirmation dialog, if set.
    fn confirmation(&self) -> Option<&Confirmation>;

    /// Returns the confirmation slot mutably.
    fn confirmation_mut(&mut self) -> &mut Option<Confirmation>;

    /// Sets the confirmation dialog.
    ///
    /// # Errors
    ///
    /// Returns a [`BlockKitError`] when the input cannot describe a
    /// confirmation dialog.
    fn set_confirm(&mut self, confirm: impl IntoConfirmation) -> BlockKitResult<()> {
        *self.confirmation_mut() = Some(confirm.into_confirmation()?);
        Ok(())
    }

    /// Sets the confirmation dialog, builder style.
    ///
    /// # Errors
    ///
    /// Returns a [`BlockKitError`] when the input cannot describe a
    /// confirmation dialog.
    fn with_confirm(mut self, confirm: impl IntoConfirmation) -> BlockKitResult<Self>
    where
        Self: Sized,
    {
        self.set_confirm(confirm)?;
        Ok(self)
    }
}

/// Attributes shared by every options element.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct OptionsAttributes {
    pub(crate) action_id: Option<String>,
    pub(crate) placeholder: Option<Value>,
    pub(crate) options: Option<Vec<Value>>,
    pub(crate) option_groups: Option<Vec<Value>>,
    pub(crate) confirm: Option<Value>,
}

impl OptionsAttributes {
    /// Normalises the placeholder, which must be plain text.
    pub(crate) fn placeholder(&mut self) -> BlockKitResult<Option<Text>> {
        self.placeholder.take().map(composition::plain_text).transpose()
    }

    /// Populates the options and confirmation of `element`.
    ///
    /// Flat options are applied before option groups, so a map carrying
    /// both ends up holding only the groups.
    pub(crate) fn apply<E: HasOptions + Confirmable>(self, element: &mut E) -> BlockKitResult<()> {
        if let Some(options) = self.options {
            element.set_options(options)?;
        }
        if let Some(groups) = self.option_groups {
            element.set_option_groups(groups)?;
        }
        if let Some(confirm) = self.confirm {
            element.set_confirm(confirm)?;
        }
        Ok(())
    }
}

/// Implements [`HasOptions`] and [`Confirmable`] for an element holding
/// `options: OptionSet` and `confirm: Option<Confirmation>` fields.
macro_rules! options_element {
    ($element:ty) => {
        impl $crate::block_kit::elements::HasOptions for $element {
            fn option_set(&self) -> &$crate::block_kit::elements::OptionSet {
                &self.options
            }

            fn option_set_mut(&mut self) -> &mut $crate::block_kit::elements::OptionSet {
                &mut self.options
            }
        }

        $crate::block_kit::elements::options::confirmable!($element);
    };
}

/// Implements [`Confirmable`] for an element holding a
/// `confirm: Option<Confirmation>` field.
macro_rules! confirmable {
    ($element:ty) => {
        impl $crate::block_kit::elements::Confirmable for $element {
            fn confirmation(&self) -> Option<&$crate::block_kit::composition::Confirmation> {
                self.confirm.as_ref()
            }

            fn confirmation_mut(
                &mut self,
            ) -> &mut Option<$crate::block_kit::composition::Confirmation> {
                &mut self.confirm
            }
        }
    };
}

pub(crate) use {confirmable, options_element};
