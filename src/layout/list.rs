//! Long-format listing.
//!
//! Field widths are computed in one pass over all entries before any line
//! is emitted; alignment needs every width up front. A totals line precedes
//! the entries, in the same size-rendering mode as the individual sizes.

use std::io::{self, Write};

use chrono::{DateTime, Local};
use termcolor::{ColorSpec, WriteColor};

use super::RenderConfig;
use crate::category::Category;
use crate::entry::Entry;
use crate::theme::Stylist;

const TIME_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Humanize a byte count with binary prefixes.
///
/// Below 1024 the value stays in integer bytes (padded so unit columns
/// line up). Above that the value is scaled by 1024 per unit, printed with
/// one decimal while below 9 and none while below 1000, else scaled again.
pub fn humanize_size(size: u64) -> String {
    if size < 1024 {
        return format!("{size} B  ");
    }

    let mut scaled = size as f64 / 1024.0;
    for unit in ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB"] {
        if scaled < 9.0 {
            return format!("{scaled:.1} {unit}");
        }
        if scaled < 1000.0 {
            return format!("{scaled:.0} {unit}");
        }
        scaled /= 1024.0;
    }
    format!("{scaled:.1} YiB")
}

fn size_cell(size: u64, config: &RenderConfig) -> String {
    if config.bytes {
        format!("{size} B")
    } else {
        humanize_size(size)
    }
}

#[derive(Default)]
struct FieldWidths {
    size: usize,
    mode: usize,
    nlink: usize,
    owner: usize,
    group: usize,
}

/// Render one aligned line per entry, preceded by a totals line.
///
/// Plain long format shows size, time and name. Extended format prepends
/// the permission string and link count, and on unix the owner and group.
/// An empty owner (seen on WSL mounts) displays the group value instead.
pub fn render_list(
    w: &mut dyn WriteColor,
    stylist: &dyn Stylist,
    entries: &[Entry],
    config: &RenderConfig,
) -> io::Result<()> {
    let show_owner = config.extended && cfg!(unix);

    let mut widths = FieldWidths::default();
    let mut total: u64 = 0;
    let mut owners: Vec<(String, String)> = Vec::new();

    for entry in entries {
        total += entry.size();
        widths.size = widths.size.max(size_cell(entry.size(), config).len());

        if config.extended {
            widths.mode = widths.mode.max(entry.mode_string().len());
            widths.nlink = widths.nlink.max(entry.nlink().to_string().len());
        }
        if show_owner {
            let group = entry.group();
            let mut owner = entry.owner();
            if owner.is_empty() {
                owner = group.clone();
            }
            widths.owner = widths.owner.max(owner.len());
            widths.group = widths.group.max(group.len());
            owners.push((owner, group));
        }
    }

    let total_cell = if config.bytes {
        total.to_string()
    } else {
        humanize_size(total)
    };
    write_colored(
        w,
        &stylist.entry_spec(Category::File),
        &format!("total {total_cell}\n"),
        config,
    )?;

    for (i, entry) in entries.iter().enumerate() {
        if config.extended {
            write_mode(w, stylist, &entry.mode_string(), widths.mode, config)?;
            write_colored(
                w,
                &stylist.nlink_spec(),
                &format!("{:>width$}  ", entry.nlink(), width = widths.nlink),
                config,
            )?;
        }
        if show_owner {
            let (owner, group) = &owners[i];
            write_colored(
                w,
                &stylist.owner_spec(owner),
                &format!("{owner:<width$}  ", width = widths.owner),
                config,
            )?;
            write_colored(
                w,
                &stylist.group_spec(),
                &format!("{group:<width$}", width = widths.group),
                config,
            )?;
        }

        write_colored(
            w,
            &stylist.size_spec(entry.size()),
            &format!(
                "{:>width$}",
                size_cell(entry.size(), config),
                width = widths.size + 3
            ),
            config,
        )?;

        let time = DateTime::<Local>::from(entry.modified())
            .format(TIME_FORMAT)
            .to_string();
        write_colored(
            w,
            &stylist.time_spec(),
            &format!("{:>width$}  ", time, width = time.len() + 3),
            config,
        )?;

        stylist.write_entry(w, entry, config)?;
        writeln!(w)?;
    }
    Ok(())
}

fn write_colored(
    w: &mut dyn WriteColor,
    spec: &ColorSpec,
    text: &str,
    config: &RenderConfig,
) -> io::Result<()> {
    if !config.color {
        return write!(w, "{text}");
    }
    w.set_color(spec)?;
    write!(w, "{text}")?;
    w.reset()
}

/// The permission string is colored per character; its padding is not.
fn write_mode(
    w: &mut dyn WriteColor,
    stylist: &dyn Stylist,
    mode: &str,
    width: usize,
    config: &RenderConfig,
) -> io::Result<()> {
    if !config.color {
        return write!(w, "{mode:<width$}   ");
    }
    for ch in mode.chars() {
        w.set_color(&stylist.mode_spec(ch))?;
        write!(w, "{ch}")?;
    }
    w.reset()?;
    write!(w, "{:pad$}", "", pad = width - mode.chars().count() + 3)
}
