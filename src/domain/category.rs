//! Learning categories shown in the Learn section

use crate::fl;

/// A fixed sign language learning category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Alphabet,
    Numbers,
    Emotions,
    Conversation,
}

impl Category {
    /// Display order in the Learn grid
    pub const ALL: [Category; 4] = [
        Category::Alphabet,
        Category::Numbers,
        Category::Emotions,
        Category::Conversation,
    ];

    pub fn name(self) -> String {
        match self {
            Category::Alphabet => fl!("category-alphabet"),
            Category::Numbers => fl!("category-numbers"),
            Category::Emotions => fl!("category-emotions"),
            Category::Conversation => fl!("category-conversation"),
        }
    }

    /// Number of signs in the category
    pub fn sign_count(self) -> u32 {
        match self {
            Category::Alphabet => 26,
            Category::Numbers => 10,
            Category::Emotions => 15,
            Category::Conversation => 20,
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            Category::Alphabet => "accessories-dictionary-symbolic",
            Category::Numbers => "preferences-desktop-locale-symbolic",
            Category::Emotions => "internet-chat-symbolic",
            Category::Conversation => "system-users-symbolic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_fixed_categories() {
        let cards: Vec<(String, u32)> = Category::ALL
            .iter()
            .map(|c| (c.name(), c.sign_count()))
            .collect();
        assert_eq!(
            cards,
            vec![
                ("Alphabet".to_string(), 26),
                ("Numbers".to_string(), 10),
                ("Emotions".to_string(), 15),
                ("Conversation".to_string(), 20),
            ]
        );
    }
}
