use crate::framebuffer::Color;

/// Named colors for the demo screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub frame: Color,
    pub line: Color,
    pub shape: Color,
    pub fill: Color,
    pub text: Color,
    pub text_background: Color,
    pub highlight: Color,
    pub cjk_background: Color,
    pub cjk_text: Color,
    pub cjk_16: Color,
    pub cjk_24: Color,
    pub cjk_32: Color,
}

impl Theme {
    /// The stock bring-up colors.
    pub const fn classic() -> Self {
        Self {
            background: Color::NAVY,
            frame: Color::YELLOW,
            line: Color::GREEN,
            shape: Color::CYAN,
            fill: Color::MAGENTA,
            text: Color::WHITE,
            text_background: Color::BLACK,
            highlight: Color::CYAN,
            cjk_background: Color::DARKBLUE,
            cjk_text: Color::WHITE,
            cjk_16: Color::YELLOW,
            cjk_24: Color::CYAN,
            cjk_32: Color::WHITE,
        }
    }

    /// Black background, white and yellow foreground only.
    pub const fn high_contrast() -> Self {
        Self {
            background: Color::BLACK,
            frame: Color::WHITE,
            line: Color::YELLOW,
            shape: Color::WHITE,
            fill: Color::YELLOW,
            text: Color::WHITE,
            text_background: Color::BLACK,
            highlight: Color::YELLOW,
            cjk_background: Color::BLACK,
            cjk_text: Color::WHITE,
            cjk_16: Color::YELLOW,
            cjk_24: Color::WHITE,
            cjk_32: Color::YELLOW,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
