use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaginateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("No pages to paginate")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, PaginateError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_in: f32, height_in: f32 },
}

impl PaperSize {
    /// Get base dimensions in inches (always portrait for standard sizes)
    pub fn dimensions_in(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (11.69, 16.54),
            PaperSize::A4 => (8.27, 11.69),
            PaperSize::A5 => (5.83, 8.27),
            PaperSize::Letter => (8.5, 11.0),
            PaperSize::Legal => (8.5, 14.0),
            PaperSize::Tabloid => (11.0, 17.0),
            PaperSize::Custom {
                width_in,
                height_in,
            } => (width_in, height_in),
        }
    }
}

/// How logical pages are composed onto physical sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutKind {
    /// One logical page per sheet
    #[default]
    Standard,
    /// Multiple pages per sheet in a grid
    NUp,
    /// Printer-spread reordering plus 1x2 N-Up for saddle-stitch folding
    Booklet,
    /// One page enlarged across multiple sheets
    Poster,
}

impl LayoutKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutKind::Standard => "Standard",
            LayoutKind::NUp => "NUp",
            LayoutKind::Booklet => "Booklet",
            LayoutKind::Poster => "Poster",
        }
    }
}

/// Reading order for N-Up tile placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NupOrder {
    /// Rows first, columns left to right
    #[default]
    LeftToRightTopToBottom,
    /// Columns first, top to bottom
    TopToBottomLeftToRight,
    /// Rows first, columns right to left
    RightToLeftTopToBottom,
    /// Columns first starting at the rightmost column
    TopToBottomRightToLeft,
}

impl NupOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            NupOrder::LeftToRightTopToBottom => "LeftToRightTopToBottom",
            NupOrder::TopToBottomLeftToRight => "TopToBottomLeftToRight",
            NupOrder::RightToLeftTopToBottom => "RightToLeftTopToBottom",
            NupOrder::TopToBottomRightToLeft => "TopToBottomRightToLeft",
        }
    }
}
