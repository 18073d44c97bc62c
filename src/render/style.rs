//! Style: Terminal styling carried as container metadata.
//!
//! The reveal engine treats container metadata as opaque. `Style` is the
//! metadata this crate's terminal renderer understands: a container's
//! style is patched onto the style inherited from its parent.

use bitflags::bitflags;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Classic terminal green, used for the reveal cursor.
    pub const TERMINAL_GREEN: Self = Self::new(0x4a, 0xf6, 0x26);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use reveal::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::ITALIC;
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Blinking text
        const BLINK = 0b0001_0000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0010_0000;
        /// Hidden/invisible text
        const HIDDEN = 0b0100_0000;
        /// Strikethrough text
        const STRIKETHROUGH = 0b1000_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

impl Modifiers {
    /// SGR parameter for each modifier, in bit order.
    pub(crate) const SGR: [(Self, u8); 8] = [
        (Self::BOLD, 1),
        (Self::DIM, 2),
        (Self::ITALIC, 3),
        (Self::UNDERLINE, 4),
        (Self::BLINK, 5),
        (Self::REVERSED, 7),
        (Self::HIDDEN, 8),
        (Self::STRIKETHROUGH, 9),
    ];
}

/// A partial style. Unset colors inherit from the enclosing container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    /// Foreground color, if set.
    pub fg: Option<Rgb>,
    /// Background color, if set.
    pub bg: Option<Rgb>,
    /// Modifiers added at this level.
    pub modifiers: Modifiers,
}

impl Style {
    /// A style that changes nothing.
    pub const PLAIN: Self = Self {
        fg: None,
        bg: None,
        modifiers: Modifiers::empty(),
    };

    /// Create an empty style.
    #[inline]
    pub const fn new() -> Self {
        Self::PLAIN
    }

    /// Set the foreground color.
    #[inline]
    #[must_use]
    pub const fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[inline]
    #[must_use]
    pub const fn bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add modifiers.
    #[inline]
    #[must_use]
    pub const fn add(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = self.modifiers.union(modifiers);
        self
    }

    /// Layer `child` on top of this style.
    ///
    /// Colors set on `child` win; modifiers accumulate.
    #[inline]
    #[must_use]
    pub const fn patch(self, child: Self) -> Self {
        Self {
            fg: match child.fg {
                Some(fg) => Some(fg),
                None => self.fg,
            },
            bg: match child.bg {
                Some(bg) => Some(bg),
                None => self.bg,
            },
            modifiers: self.modifiers.union(child.modifiers),
        }
    }

    /// Check if this style changes nothing.
    #[inline]
    pub const fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.modifiers.is_empty()
    }
}
