//! ANSI styling for titles, menu items, and warnings.
use clap::ValueEnum;
use once_cell::sync::Lazy;

/// When to color the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color if stdout supports it
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

/// Whether stdout can show color. Only asked once, since turning on ANSI
/// support on Windows has a side effect.
static STDOUT_TAKES_COLOR: Lazy<bool> = Lazy::new(|| {
    enable_ansi_support::enable_ansi_support().is_ok()
        && supports_color::on(supports_color::Stream::Stdout).is_some()
});

impl ColorChoice {
    /// The style sheet for this choice, settling `Auto` against stdout.
    #[must_use]
    pub fn sheet(self) -> StyleSheet {
        self.sheet_for(*STDOUT_TAKES_COLOR)
    }

    /// The style sheet for this choice when the terminal does or doesn't
    /// take color.
    #[must_use]
    pub fn sheet_for(self, takes_color: bool) -> StyleSheet {
        match self {
            ColorChoice::Always => StyleSheet::COLORED,
            ColorChoice::Auto if takes_color => StyleSheet::COLORED,
            ColorChoice::Auto | ColorChoice::Never => StyleSheet::PLAIN,
        }
    }
}

/// The escape sequences wrapped around each kind of styled text. All empty
/// for uncolored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSheet {
    title_start: &'static str,
    item_start: &'static str,
    warning_start: &'static str,
    end: &'static str,
}

impl StyleSheet {
    /// Bold yellow titles, green menu numbers, red warnings
    pub const COLORED: StyleSheet = StyleSheet {
        title_start: "\x1B[33;1m",
        item_start: "\x1B[32m",
        warning_start: "\x1B[31m",
        end: "\x1B[m",
    };

    /// The style sheet that adds nothing
    pub const PLAIN: StyleSheet =
        StyleSheet { title_start: "", item_start: "", warning_start: "", end: "" };

    fn wrap(&self, start: &str, s: &str) -> String {
        if start.is_empty() {
            s.to_string()
        } else {
            format!("{start}{s}{}", self.end)
        }
    }

    /// Menu banners and section headings
    #[must_use]
    pub fn title(&self, s: &str) -> String {
        self.wrap(self.title_start, s)
    }
    /// Menu entry numbers
    #[must_use]
    pub fn item(&self, s: &str) -> String {
        self.wrap(self.item_start, s)
    }
    /// Warnings and error reports
    #[must_use]
    pub fn warning(&self, s: &str) -> String {
        self.wrap(self.warning_start, s)
    }
}
