pub mod geometry;
pub mod honeycomb;
pub mod palette;

pub use geometry::{hexagon_outline, HexagonOutline, Viewport};
pub use honeycomb::{LayoutTable, Slot, SlotLayout, SLOT_COUNT};
pub use palette::{parse_hex_color, Palette};
