use indexmap::IndexMap;

use crate::render::Color;

/// The classic 20-color categorical palette, in its canonical order.
pub const CATEGORY20: [Color; 20] = [
    Color::from_rgb8(0x1f, 0x77, 0xb4),
    Color::from_rgb8(0xae, 0xc7, 0xe8),
    Color::from_rgb8(0xff, 0x7f, 0x0e),
    Color::from_rgb8(0xff, 0xbb, 0x78),
    Color::from_rgb8(0x2c, 0xa0, 0x2c),
    Color::from_rgb8(0x98, 0xdf, 0x8a),
    Color::from_rgb8(0xd6, 0x27, 0x28),
    Color::from_rgb8(0xff, 0x98, 0x96),
    Color::from_rgb8(0x94, 0x67, 0xbd),
    Color::from_rgb8(0xc5, 0xb0, 0xd5),
    Color::from_rgb8(0x8c, 0x56, 0x4b),
    Color::from_rgb8(0xc4, 0x9c, 0x94),
    Color::from_rgb8(0xe3, 0x77, 0xc2),
    Color::from_rgb8(0xf7, 0xb6, 0xd2),
    Color::from_rgb8(0x7f, 0x7f, 0x7f),
    Color::from_rgb8(0xc7, 0xc7, 0xc7),
    Color::from_rgb8(0xbc, 0xbd, 0x22),
    Color::from_rgb8(0xdb, 0xdb, 0x8d),
    Color::from_rgb8(0x17, 0xbe, 0xcf),
    Color::from_rgb8(0x9e, 0xda, 0xe5),
];

/// Ordinal category-to-color assignment.
///
/// Labels claim palette slots in first-seen order and keep them for the
/// lifetime of the palette; past 20 distinct labels the slots wrap around.
#[derive(Debug, Clone, Default)]
pub struct CategoryPalette {
    slots: IndexMap<String, usize>,
}

impl CategoryPalette {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the label's color, assigning the next free slot on first use.
    pub fn color_for(&mut self, label: &str) -> Color {
        let next_slot = self.slots.len() % CATEGORY20.len();
        let slot = *self
            .slots
            .entry(label.to_owned())
            .or_insert(next_slot);
        CATEGORY20[slot % CATEGORY20.len()]
    }

    /// Returns the label's color without assigning a slot.
    #[must_use]
    pub fn lookup(&self, label: &str) -> Option<Color> {
        self.slots
            .get(label)
            .map(|slot| CATEGORY20[slot % CATEGORY20.len()])
    }

    /// Labels in assignment order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
