//! Copy for the page. Nothing here changes at runtime.

use crate::state::ChapterId;

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [Feature; 3] = [
    Feature {
        icon: "🧠",
        title: "AI-Driven NPCs",
        description: "Interrogate intelligent characters powered by advanced AI. Every conversation is unique.",
    },
    Feature {
        icon: "👻",
        title: "Psychological Horror",
        description: "Face supernatural mysteries that challenge your perception of reality.",
    },
    Feature {
        icon: "🧩",
        title: "Critical Thinking",
        description: "Solve complex cases using logic, deduction, and careful observation.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSide {
    Left,
    Right,
}

#[derive(Debug, PartialEq)]
pub struct Chapter {
    pub id: ChapterId,
    pub numeral: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub paragraphs: &'static [&'static str],
    pub themes: &'static str,
    /// Suffix of the `chapter-*` CSS theme classes.
    pub accent: &'static str,
    pub background: &'static str,
    pub image_alt: &'static str,
    pub explore_label: &'static str,
    pub image_side: ImageSide,
}

pub static CHAPTERS: [Chapter; 2] = [
    Chapter {
        id: ChapterId::One,
        numeral: "CHAPTER I",
        title: "London",
        subtitle: "1980s",
        paragraphs: &[
            "The fog-shrouded streets of London hide more than just shadows.",
            "Detective Blackson must navigate a world where the supernatural bleeds into reality, \
             where ghosts whisper secrets of unsolved murders, and where the line between this \
             world and the next grows dangerously thin.",
        ],
        themes: "Victorian Gothic Horror, Paranormal Investigation, British Folklore",
        accent: "amber",
        background: "bg rain.jpg",
        image_alt: "London 1980s",
        explore_label: "Explore London",
        image_side: ImageSide::Right,
    },
    Chapter {
        id: ChapterId::Two,
        numeral: "CHAPTER II",
        title: "Kazakhstan",
        subtitle: "Shaitan Tales",
        paragraphs: &[
            "The vast steppes hold ancient secrets and darker folklore.",
            "Blackson ventures into Central Asian mysticism, confronting the Shaitan, malevolent \
             spirits from Kazakh legends. Here, traditional beliefs clash with modern \
             investigation as the detective unravels mysteries that locals have feared for \
             generations.",
        ],
        themes: "Central Asian Folklore, Demonic Entities, Cultural Mysticism",
        accent: "teal",
        background: "bg sc sh shal.png",
        image_alt: "Kazakhstan",
        explore_label: "Explore Kazakhstan",
        image_side: ImageSide::Left,
    },
];

pub const HERO_BACKGROUND: &str = "bg rain.jpg";

/// CSS delay for the `index`-th element of a staggered entrance.
pub fn stagger_delay(index: usize, step_secs: f64) -> String {
    let secs = index as f64 * step_secs;
    // Round away float noise such as 0.6000000000000001.
    format!("{}s", (secs * 1000.0).round() / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_counts_up_from_zero() {
        let delays: Vec<_> = (0..4).map(|i| stagger_delay(i, 0.2)).collect();
        assert_eq!(delays, vec!["0s", "0.2s", "0.4s", "0.6s"]);
    }

    #[test]
    fn chapters_are_in_page_order() {
        assert_eq!(CHAPTERS[0].id, ChapterId::One);
        assert_eq!(CHAPTERS[1].id, ChapterId::Two);
        assert_ne!(CHAPTERS[0].image_side, CHAPTERS[1].image_side);
    }
}
