//! Action rows, buttons and select menus.

use discordx_core::BuildError;
use serenity::all::{ButtonStyle, EmojiId, ReactionType};
use serenity::builder::{
    CreateActionRow, CreateButton, CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption,
};

/// Discord limit on buttons in a single action row.
pub const MAX_BUTTONS_PER_ROW: usize = 5;

// ---------------------------------------------------------------------------
// Select menu options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionEmoji {
    /// A default unicode emoji, e.g. "🍕".
    Unicode(String),
    /// A guild emoji; `id` is its snowflake as text.
    Custom { name: String, id: String },
}

impl OptionEmoji {
    fn into_reaction(self) -> Result<ReactionType, BuildError> {
        match self {
            Self::Unicode(name) => Ok(ReactionType::Unicode(name)),
            Self::Custom { name, id } => {
                let raw = id.parse::<u64>().ok().filter(|v| *v != 0);
                let Some(raw) = raw else {
                    return Err(BuildError::InvalidEmojiId(id));
                };
                Ok(ReactionType::Custom { animated: false, id: EmojiId::new(raw), name: Some(name) })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOptionSpec {
    pub label: String,
    pub value: String,
    pub description: Option<String>,
    pub emoji: Option<OptionEmoji>,
    pub default_selected: bool,
}

impl SelectOptionSpec {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            description: None,
            emoji: None,
            default_selected: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(OptionEmoji::Unicode(emoji.into()));
        self
    }

    pub fn custom_emoji(mut self, name: impl Into<String>, id: impl Into<String>) -> Self {
        self.emoji = Some(OptionEmoji::Custom { name: name.into(), id: id.into() });
        self
    }

    pub fn default_selected(mut self, selected: bool) -> Self {
        self.default_selected = selected;
        self
    }

    pub fn build(self) -> Result<CreateSelectMenuOption, BuildError> {
        let mut option = CreateSelectMenuOption::new(self.label, self.value)
            .default_selection(self.default_selected);
        if let Some(description) = self.description {
            option = option.description(description);
        }
        if let Some(emoji) = self.emoji {
            option = option.emoji(emoji.into_reaction()?);
        }
        Ok(option)
    }
}

// ---------------------------------------------------------------------------
// Action row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowComponent {
    LinkButton {
        label: String,
        url: String,
    },
    Button {
        style: ButtonStyle,
        label: String,
        custom_id: String,
    },
    SingleSelect {
        custom_id: String,
        options: Vec<SelectOptionSpec>,
    },
    MultiSelect {
        custom_id: String,
        options: Vec<SelectOptionSpec>,
        min_values: Option<u8>,
        max_values: u8,
    },
}

impl RowComponent {
    fn is_button(&self) -> bool {
        matches!(self, Self::LinkButton { .. } | Self::Button { .. })
    }

    /// Custom id this component reports back with, if any. Link buttons
    /// never produce an interaction.
    pub fn custom_id(&self) -> Option<&str> {
        match self {
            Self::LinkButton { .. } => None,
            Self::Button { custom_id, .. }
            | Self::SingleSelect { custom_id, .. }
            | Self::MultiSelect { custom_id, .. } => Some(custom_id),
        }
    }
}

/// A row of components, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionRowSpec {
    pub components: Vec<RowComponent>,
}

impl ActionRowSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link_button(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.components.push(RowComponent::LinkButton { label: label.into(), url: url.into() });
        self
    }

    pub fn custom_button(
        mut self,
        style: ButtonStyle,
        label: impl Into<String>,
        custom_id: impl Into<String>,
    ) -> Self {
        self.components.push(RowComponent::Button {
            style,
            label: label.into(),
            custom_id: custom_id.into(),
        });
        self
    }

    pub fn single_select_menu(
        mut self,
        custom_id: impl Into<String>,
        options: Vec<SelectOptionSpec>,
    ) -> Self {
        self.components.push(RowComponent::SingleSelect { custom_id: custom_id.into(), options });
        self
    }

    /// Select menu accepting between `min_values` (Discord default 1) and
    /// `max_values` choices.
    pub fn multi_select_menu(
        mut self,
        custom_id: impl Into<String>,
        options: Vec<SelectOptionSpec>,
        min_values: Option<u8>,
        max_values: u8,
    ) -> Self {
        self.components.push(RowComponent::MultiSelect {
            custom_id: custom_id.into(),
            options,
            min_values,
            max_values,
        });
        self
    }

    pub fn custom_ids(&self) -> Vec<&str> {
        self.components.iter().filter_map(RowComponent::custom_id).collect()
    }

    pub fn build(self) -> Result<CreateActionRow, BuildError> {
        let buttons = self.components.iter().filter(|c| c.is_button()).count();
        let menus = self.components.len() - buttons;

        if self.components.is_empty() {
            return Err(BuildError::EmptyRow);
        }
        if buttons > 0 && menus > 0 {
            return Err(BuildError::MixedRow);
        }
        if menus > 1 {
            return Err(BuildError::TooManySelectMenus);
        }
        if buttons > MAX_BUTTONS_PER_ROW {
            return Err(BuildError::TooManyButtons { max: MAX_BUTTONS_PER_ROW, got: buttons });
        }

        if menus == 1 {
            // Checked above: exactly one component and it is a menu.
            let menu = self.components.into_iter().next().ok_or(BuildError::EmptyRow)?;
            return Ok(CreateActionRow::SelectMenu(build_select_menu(menu)?));
        }

        let buttons = self
            .components
            .into_iter()
            .filter_map(|component| match component {
                RowComponent::LinkButton { label, url } => Some(CreateButton::new_link(url).label(label)),
                RowComponent::Button { style, label, custom_id } => {
                    Some(CreateButton::new(custom_id).label(label).style(style))
                }
                _ => None,
            })
            .collect();
        Ok(CreateActionRow::Buttons(buttons))
    }
}

fn build_select_menu(component: RowComponent) -> Result<CreateSelectMenu, BuildError> {
    let (custom_id, options, range) = match component {
        RowComponent::SingleSelect { custom_id, options } => (custom_id, options, None),
        RowComponent::MultiSelect { custom_id, options, min_values, max_values } => {
            (custom_id, options, Some((min_values, max_values)))
        }
        RowComponent::LinkButton { .. } | RowComponent::Button { .. } => {
            return Err(BuildError::MixedRow);
        }
    };

    let options = options
        .into_iter()
        .map(SelectOptionSpec::build)
        .collect::<Result<Vec<_>, _>>()?;
    let mut menu = CreateSelectMenu::new(custom_id.clone(), CreateSelectMenuKind::String { options });

    if let Some((min_values, max_values)) = range {
        if let Some(min) = min_values {
            if min > max_values {
                return Err(BuildError::InvalidValueRange { custom_id, min, max: max_values });
            }
            menu = menu.min_values(min);
        }
        menu = menu.max_values(max_values);
    }
    Ok(menu)
}
