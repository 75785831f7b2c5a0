//! Color themes and the capability seam between entries and the layout
//! engines.
//!
//! Layout code never hard-codes a color: it asks a [`Stylist`] for the
//! [`ColorSpec`] of each field and for decorated names. [`Theme`] is the
//! built-in implementation with a dark and a light palette.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::category::{self, Category};
use crate::entry::Entry;
use crate::icons;
use crate::layout::RenderConfig;

/// Classification and color selection for rendered fields.
///
/// Any concrete color-and-icon scheme implements this; the layout engines
/// call through the trait and stay agnostic to actual color values.
pub trait Stylist {
    fn entry_spec(&self, category: Category) -> ColorSpec;
    fn mode_spec(&self, ch: char) -> ColorSpec;
    fn size_spec(&self, bytes: u64) -> ColorSpec;
    fn owner_spec(&self, owner: &str) -> ColorSpec;
    fn group_spec(&self) -> ColorSpec;
    fn nlink_spec(&self) -> ColorSpec;
    fn time_spec(&self) -> ColorSpec;
    fn link_target_spec(&self) -> ColorSpec;

    fn categorize(&self, entry: &Entry) -> Category {
        category::classify(entry)
    }

    /// Display name before coloring: optional icon, the entry name and, for
    /// symlinks, the arrow plus target. Grid alignment measures this string,
    /// so it must contain no escape sequences.
    fn pretty_name(&self, entry: &Entry, config: &RenderConfig) -> String {
        let mut pretty = String::new();
        if config.icons {
            pretty.push_str(icons::icon_for(self.categorize(entry)));
            pretty.push(' ');
        }
        pretty.push_str(entry.name());
        if let Some(target) = entry.link_target() {
            pretty.push_str(icons::LINK_ARROW);
            pretty.push_str(&target.display().to_string());
        }
        pretty
    }

    /// Write the decorated name. Symlink targets get the link-target color,
    /// broken links a dead-link marker; with colors off the plain pretty
    /// name is written unchanged.
    fn write_entry(
        &self,
        w: &mut dyn WriteColor,
        entry: &Entry,
        config: &RenderConfig,
    ) -> io::Result<()> {
        let mut pretty = self.pretty_name(entry, config);
        if !config.color {
            return write!(w, "{pretty}");
        }

        if entry.is_broken() {
            pretty.push_str(" [Dead link]");
        }
        if entry.is_link() {
            if let Some(arrow) = pretty.find(icons::LINK_ARROW) {
                let (name_part, target_part) = pretty.split_at(arrow);
                w.set_color(&self.entry_spec(self.categorize(entry)))?;
                write!(w, "{name_part}")?;
                w.set_color(&self.link_target_spec())?;
                write!(w, "{target_part}")?;
                return w.reset();
            }
        }

        w.set_color(&self.entry_spec(self.categorize(entry)))?;
        write!(w, "{pretty}")?;
        w.reset()
    }
}

/// Built-in palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

fn fg(hex: u32) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(rgb(hex)));
    spec
}

fn underlined(hex: u32) -> ColorSpec {
    let mut spec = fg(hex);
    spec.set_underline(true);
    spec
}

fn bold(hex: u32) -> ColorSpec {
    let mut spec = fg(hex);
    spec.set_bold(true);
    spec
}

impl Stylist for Theme {
    fn entry_spec(&self, category: Category) -> ColorSpec {
        use Category::*;
        match self {
            Theme::Dark => match category {
                File => fg(0x6ff44a),
                Dir => fg(0x4aaef8),
                Symlink => fg(0xebb434),
                Broken => fg(0xeb3434),
                Archive => underlined(0xcd0000),
                Executable => fg(0x78fa53),
                Code => fg(0x388425),
                Image | Audio | Video => fg(0xb8860b),
            },
            Theme::Light => match category {
                File => fg(0x228b22),
                Dir => fg(0x0426a8),
                Symlink => fg(0x4169e1),
                Broken => bold(0xcd2626),
                Archive => underlined(0xcd0000),
                Executable => fg(0x006400),
                Code => fg(0x388425),
                Image | Audio | Video => fg(0xb8860b),
            },
        }
    }

    fn mode_spec(&self, ch: char) -> ColorSpec {
        let hex = match (self, ch) {
            (Theme::Dark, 'r') => 0x7ed36e,
            (Theme::Dark, 'w') => 0xd7d691,
            (Theme::Dark, 'x') => 0xb73831,
            (Theme::Dark, '-') => 0xcd8b89,
            (Theme::Dark, 'd') => 0x4aaef8,
            (Theme::Light, 'r') => 0xa56361,
            (Theme::Light, 'w') => 0xb73931,
            (Theme::Light, 'x') => 0x0326a8,
            (Theme::Light, '-') => 0x2b2c2c,
            (Theme::Light, 'd') => 0x0426a8,
            (_, 'L') => 0x4169e1,
            _ => return ColorSpec::new(),
        };
        fg(hex)
    }

    fn size_spec(&self, bytes: u64) -> ColorSpec {
        const MIB: u64 = 1024 * 1024;
        let bucket = if bytes >= 1024 * MIB {
            1024
        } else if bytes >= 500 * MIB {
            500
        } else if bytes >= 150 * MIB {
            150
        } else {
            0
        };
        match (self, bucket) {
            (Theme::Dark, 1024) => fg(0xcd950c),
            (Theme::Dark, 500) => fg(0xf4b13e),
            (Theme::Dark, 150) => fg(0xfffa53),
            (Theme::Dark, _) => fg(0xfffedb),
            (Theme::Light, 1024) => fg(0x8b008b),
            (Theme::Light, 500) => fg(0xa22815),
            (Theme::Light, 150) => fg(0xa66321),
            (Theme::Light, _) => fg(0xefaa45),
        }
    }

    fn owner_spec(&self, owner: &str) -> ColorSpec {
        if owner == "root" {
            let mut spec = ColorSpec::new();
            spec.set_fg(Some(Color::Red));
            spec.set_intense(*self == Theme::Dark);
            return spec;
        }
        match self {
            Theme::Dark => fg(0xfffedb),
            Theme::Light => fg(0x191970),
        }
    }

    fn group_spec(&self) -> ColorSpec {
        match self {
            Theme::Dark => fg(0xd7d691),
            Theme::Light => fg(0x808000),
        }
    }

    fn nlink_spec(&self) -> ColorSpec {
        ColorSpec::new()
    }

    fn time_spec(&self) -> ColorSpec {
        match self {
            Theme::Dark => fg(0x71ad8a),
            Theme::Light => fg(0x4682b4),
        }
    }

    fn link_target_spec(&self) -> ColorSpec {
        match self {
            Theme::Dark => fg(0xeb6b34),
            Theme::Light => fg(0x225db5),
        }
    }
}
