use filing_shared::Size;

/// Where the vector map of the states is served from.
pub const MAP_ASSET_URL: &str = "/assets/us.svg";

/// Tooltip size assumed until the first one has been measured.
pub const TOOLTIP_ESTIMATED_SIZE: Size = Size::new(450.0, 260.0);

/// Used when the window size cannot be read.
pub const FALLBACK_VIEWPORT: Size = Size::new(1200.0, 800.0);

pub const LABEL_FONT_SIZE_PX: u32 = 12;
