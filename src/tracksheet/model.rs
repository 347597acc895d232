/// Accent colours for the initials fallback, assigned by position.
pub const PALETTE: [&str; 20] = [
    "#6c5ce7", "#00b894", "#e17055", "#0984e3", "#fdcb6e", "#e84393", "#00cec9", "#a29bfe",
    "#55a3e8", "#fd79a8", "#74b9ff", "#fab1a0", "#81ecec", "#636e72", "#d63031", "#2d3436",
    "#b2bec3", "#e67e22", "#1abc9c", "#9b59b6",
];

const MAX_INITIALS: usize = 2;

/// One `name|photo` line of the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trainee {
    pub name: String,
    pub photo: String,
}

impl Trainee {
    pub fn new(name: impl Into<String>, photo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            photo: photo.into(),
        }
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Colour for the trainee at zero-based `position`. Repeats every 20 entries.
pub fn color_for(position: usize) -> &'static str {
    PALETTE[position % PALETTE.len()]
}

/// Builds the fallback label shown when a photo fails to load.
///
/// Takes the first character of each whitespace-separated word, uppercases
/// the result and keeps at most two characters. Runs of whitespace never
/// yield empty words, so irregular spacing contributes nothing.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(MAX_INITIALS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_two_words() {
        assert_eq!(initials("Jane Doe"), "JD");
    }

    #[test]
    fn test_initials_single_word() {
        assert_eq!(initials("Madonna"), "M");
    }

    #[test]
    fn test_initials_truncates_to_two() {
        assert_eq!(initials("Jane Middle Doe"), "JM");
    }

    #[test]
    fn test_initials_lowercase_input() {
        assert_eq!(initials("ada lovelace"), "AL");
    }

    #[test]
    fn test_initials_irregular_whitespace() {
        assert_eq!(initials("  Jane   Doe  "), "JD");
        assert_eq!(initials("Jane\tDoe"), "JD");
    }

    #[test]
    fn test_initials_empty_name() {
        assert_eq!(initials(""), "");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn test_initials_non_ascii() {
        assert_eq!(initials("Émile Zola"), "ÉZ");
    }

    #[test]
    fn test_color_for_wraps_around_palette() {
        assert_eq!(color_for(0), "#6c5ce7");
        assert_eq!(color_for(19), "#9b59b6");
        assert_eq!(color_for(20), color_for(0));
        assert_eq!(color_for(43), color_for(3));
    }

    #[test]
    fn test_trainee_initials_delegates() {
        let t = Trainee::new("John Smith", "https://example.com/b.jpg");
        assert_eq!(t.initials(), "JS");
    }
}
