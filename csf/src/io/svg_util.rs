use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    /// Canvas background fill
    #[serde(default = "default_background")]
    pub background: String,
    /// Draws the bounding box of every placed label
    #[serde(default)]
    pub placement_boxes: bool,
}

fn default_background() -> String {
    "#FFFFFF".to_string()
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            background: default_background(),
            placement_boxes: false,
        }
    }
}

/// Cyan palette, picked per word by a stable hash so re-renders keep their colors.
pub static COLORS: [&str; 6] = [
    "#00bcd4", "#26c6da", "#4dd0e1", "#80deea", "#b2ebf2", "#18ffff",
];

fn hash_word(word: &str) -> u32 {
    word.chars()
        .fold(0u32, |h, c| h.wrapping_mul(31).wrapping_add(c as u32))
}

pub fn word_color(word: &str) -> &'static str {
    COLORS[hash_word(word) as usize % COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_color_is_stable() {
        assert_eq!(word_color("cloud"), word_color("cloud"));
        assert!(COLORS.contains(&word_color("reliability")));
    }
}
