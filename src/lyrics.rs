#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricLine {
    pub text: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricSheet {
    pub title: String,
    pub lines: Vec<LyricLine>,
}

const BLINDING_LIGHTS: &[&str] = &[
    "I've been tryna call",
    "I've been on my own for long enough",
    "Maybe you can show me how to love, maybe",
    "I'm going through withdrawals",
    "You don't even have to do too much",
    "You can turn me on with just a touch, baby",
    "I look around and Sin City's cold and empty (oh)",
    "No one's around to judge me (oh)",
    "I can't see clearly when you're gone",
];

const HIGHLIGHTED_LINE: usize = 3;

impl LyricSheet {
    pub fn from_lines(lines: &[&str], highlighted: Option<usize>) -> Self {
        Self {
            title: String::from("Lyrics"),
            lines: lines
                .iter()
                .enumerate()
                .map(|(idx, text)| LyricLine {
                    text: (*text).to_string(),
                    highlighted: highlighted == Some(idx),
                })
                .collect(),
        }
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.lines.iter().position(|line| line.highlighted)
    }
}

impl Default for LyricSheet {
    fn default() -> Self {
        Self::from_lines(BLINDING_LIGHTS, Some(HIGHLIGHTED_LINE))
    }
}
