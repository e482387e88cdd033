use std::path::Path;

/// Input formats the batch accepts. Everything else is skipped with a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Jpeg,
    Png,
    Tiff,
    Bmp,
}

impl SourceFormat {
    /// Case-insensitive match on the file extension. `None` means the file
    /// is not an input for this tool.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(SourceFormat::Jpeg),
            "png" => Some(SourceFormat::Png),
            "tiff" => Some(SourceFormat::Tiff),
            "bmp" => Some(SourceFormat::Bmp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Jpeg => "JPEG",
            SourceFormat::Png => "PNG",
            SourceFormat::Tiff => "TIFF",
            SourceFormat::Bmp => "BMP",
        }
    }
}
