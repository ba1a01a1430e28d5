//! Embed builder.
//!
//! Maps plain embed specs onto serenity's `CreateEmbed`.

use serenity::builder::{CreateEmbed, CreateEmbedFooter};

/// One name/value row inside an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedFieldSpec {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedFieldSpec {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into(), inline: false }
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedSpec {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    /// RGB colour as a hex integer, e.g. `0x5865f2`.
    pub color: Option<u32>,
    pub footer: Option<String>,
    pub fields: Vec<EmbedFieldSpec>,
}

impl EmbedSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Append fields; repeated calls accumulate.
    pub fn fields(mut self, fields: impl IntoIterator<Item = EmbedFieldSpec>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn field(mut self, field: EmbedFieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn build(self) -> CreateEmbed {
        let mut embed = CreateEmbed::new();
        if let Some(title) = self.title {
            embed = embed.title(title);
        }
        if let Some(description) = self.description {
            embed = embed.description(description);
        }
        if let Some(url) = self.url {
            embed = embed.url(url);
        }
        if let Some(color) = self.color {
            embed = embed.colour(color);
        }
        if let Some(footer) = self.footer {
            embed = embed.footer(CreateEmbedFooter::new(footer));
        }
        embed.fields(self.fields.into_iter().map(|f| (f.name, f.value, f.inline)))
    }
}
