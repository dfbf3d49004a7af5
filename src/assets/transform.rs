//! Upload Transformations
//!
//! The fixed pipeline applied to every uploaded image, and its wire
//! serialization (`c_fill,h_128,w_128/q_auto/f_auto`).

use std::fmt;

/// One component of a transformation chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformStep {
    /// Resize and crop to exactly `width` x `height`
    Resize {
        width: u32,
        height: u32,
        crop: CropMode,
    },
    /// Automatic quality selection
    AutoQuality,
    /// Automatic output format selection
    AutoFormat,
}

/// Cropping strategies understood by the asset host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropMode {
    /// Scale and crop to fill the target, discarding excess
    Fill,
    /// Scale to fit inside the target, keeping aspect ratio
    Fit,
}

impl CropMode {
    fn as_str(&self) -> &'static str {
        match self {
            CropMode::Fill => "fill",
            CropMode::Fit => "fit",
        }
    }
}

impl fmt::Display for TransformStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Parameters are emitted in alphabetical order, as the host does.
            TransformStep::Resize {
                width,
                height,
                crop,
            } => write!(f, "c_{},h_{},w_{}", crop.as_str(), height, width),
            TransformStep::AutoQuality => f.write_str("q_auto"),
            TransformStep::AutoFormat => f.write_str("f_auto"),
        }
    }
}

/// Chain of transformation steps applied in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation {
    steps: Vec<TransformStep>,
}

/// Edge length of stored entity images
pub const THUMBNAIL_SIZE: u32 = 128;

impl Transformation {
    pub fn new(steps: Vec<TransformStep>) -> Self {
        Self { steps }
    }

    /// 128x128 fill crop, automatic quality, automatic format
    pub fn thumbnail() -> Self {
        Self::new(vec![
            TransformStep::Resize {
                width: THUMBNAIL_SIZE,
                height: THUMBNAIL_SIZE,
                crop: CropMode::Fill,
            },
            TransformStep::AutoQuality,
            TransformStep::AutoFormat,
        ])
    }

    pub fn steps(&self) -> &[TransformStep] {
        &self.steps
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::thumbnail()
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_serialization() {
        assert_eq!(
            Transformation::thumbnail().to_string(),
            "c_fill,h_128,w_128/q_auto/f_auto"
        );
    }

    #[test]
    fn test_thumbnail_steps() {
        let t = Transformation::default();
        assert_eq!(t.steps().len(), 3);
        assert_eq!(
            t.steps()[0],
            TransformStep::Resize {
                width: 128,
                height: 128,
                crop: CropMode::Fill
            }
        );
    }

    #[test]
    fn test_custom_chain() {
        let t = Transformation::new(vec![TransformStep::Resize {
            width: 64,
            height: 32,
            crop: CropMode::Fit,
        }]);
        assert_eq!(t.to_string(), "c_fit,h_32,w_64");
    }
}
