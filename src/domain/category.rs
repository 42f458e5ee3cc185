//! Category records

use serde::{Deserialize, Serialize};

/// A grouping of tools shown as a tile on the home screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,

    /// Symbolic icon name, e.g. "message-square"
    #[serde(default)]
    pub icon: String,

    /// Advertised tool count, as curated in the catalog document
    #[serde(default)]
    pub tool_count: u32,

    /// Style token used by the presentation layer to pick an accent color
    #[serde(default)]
    pub style: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon: String::new(),
            tool_count: 0,
            style: String::new(),
        }
    }

    /// Terminal glyph for the icon name
    pub fn glyph(&self) -> &'static str {
        match self.icon.as_str() {
            "message-square" => "💬",
            "image" => "🖼",
            "code" => "⌨",
            "file-text" => "📝",
            "music" => "🎵",
            "video" => "🎬",
            "bar-chart" => "📊",
            "zap" => "⚡",
            "bot" => "🤖",
            "palette" => "🎨",
            "search" => "🔍",
            _ => "✦",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_known_and_fallback() {
        let mut category = Category::new("chatbots", "AI Chatbots", "Conversational AI");
        assert_eq!(category.glyph(), "✦");
        category.icon = "message-square".to_string();
        assert_eq!(category.glyph(), "💬");
    }

    #[test]
    fn test_deserialize_defaults() {
        let yaml = "id: automation\nname: Automation\ndescription: Workflow automation\n";
        let category: Category = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(category.tool_count, 0);
        assert!(category.icon.is_empty());
    }
}
