/// Parameters for one derivative variant (thumbnail or compressed full-size).
#[derive(Debug, Clone, Copy)]
pub struct DerivativeSpec {
    /// Target width in pixels; height follows from the source aspect ratio
    pub target_width: u32,
    /// WebP encode quality 0-100
    pub quality: f32,
}

/// Directory the thumbnail variant is written to, relative to the input directory.
pub const THUMBNAIL_DIR: &str = "thumbnails";

/// Directory the compressed full-size variant is written to.
pub const COMPRESSED_DIR: &str = "compressed";

/// Process-wide configuration, fixed at startup and passed explicitly into
/// the processor so it stays pure and testable.
#[derive(Debug, Clone, Copy)]
pub struct BatchConfig {
    pub thumbnail: DerivativeSpec,
    pub fullsize: DerivativeSpec,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            thumbnail: DerivativeSpec {
                target_width: 400,
                quality: 75.0,
            },
            fullsize: DerivativeSpec {
                target_width: 1600,
                quality: 85.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BatchConfig::default();
        assert_eq!(config.thumbnail.target_width, 400);
        assert_eq!(config.thumbnail.quality, 75.0);
        assert_eq!(config.fullsize.target_width, 1600);
        assert_eq!(config.fullsize.quality, 85.0);
    }
}
