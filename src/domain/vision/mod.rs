//! Vision service domain models and traits

mod analyzer;
mod result;

pub use analyzer::{cache_busted_url, VisionAnalyzer};
pub use result::{Caption, ReadResult, TextBlock, TextLine, VisionResult, VisualFeature};

#[cfg(test)]
pub use analyzer::mock::MockVisionAnalyzer;
