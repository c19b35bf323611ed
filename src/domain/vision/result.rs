use serde::{Deserialize, Serialize};

/// Features that can be requested from the vision service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualFeature {
    Caption,
    Read,
}

impl VisualFeature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Caption => "caption",
            Self::Read => "read",
        }
    }
}

impl std::fmt::Display for VisualFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Image caption with the service's confidence in [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub text: String,
    pub confidence: f64,
}

impl Caption {
    pub fn new(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            text: text.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextBlock {
    pub lines: Vec<TextLine>,
}

impl TextBlock {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines
                .into_iter()
                .map(|text| TextLine { text: text.into() })
                .collect(),
        }
    }
}

/// Recognized text grouped into blocks
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReadResult {
    pub blocks: Vec<TextBlock>,
}

/// Output of a vision analysis call
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<Caption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<ReadResult>,
}

impl VisionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_caption(mut self, caption: Caption) -> Self {
        self.caption = Some(caption);
        self
    }

    pub fn with_read(mut self, read: ReadResult) -> Self {
        self.read = Some(read);
        self
    }

    /// All recognized lines, block order then line order
    pub fn text_lines(&self) -> impl Iterator<Item = &str> {
        self.read
            .iter()
            .flat_map(|read| read.blocks.iter())
            .flat_map(|block| block.lines.iter())
            .map(|line| line.text.as_str())
    }
}
