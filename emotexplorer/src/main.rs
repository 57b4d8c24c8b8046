//! Print the contents of emote tables.
//!
//! By default this prints a summary of the table. Individual glyphs can be
//! drawn as ASCII art, and a string can be resolved against the table to see
//! which parts of it would be drawn as emotes.

use std::{io::Write, path::PathBuf};

use clap::Parser;
use read_emotes::{types::CodepointRange, EmoteFont, ReadError};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The input table.
    input: PathBuf,

    /// List every glyph with its codepoint
    #[arg(short, long)]
    list: bool,

    /// Resolve a string against the table
    #[arg(short, long)]
    text: Option<String>,

    /// Draw the glyph for a codepoint, as `U+263A`, `0x263A` or the character itself
    #[arg(short, long, value_parser = parse_codepoint)]
    glyph: Vec<u32>,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("failed to read '{path}': {inner}")]
    Io {
        path: PathBuf,
        inner: std::io::Error,
    },
    #[error("malformed emote table: {0}")]
    Read(#[from] ReadError),
    #[error("invalid codepoint '{0}'")]
    InvalidCodepoint(String),
    #[error("no glyph for U+{0:04X}")]
    MissingGlyph(u32),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let bytes = std::fs::read(&args.input).map_err(|inner| Error::Io {
        path: args.input.clone(),
        inner,
    })?;
    let font = EmoteFont::from_bytes(&bytes)?;
    log::debug!("read {} glyphs from {}", font.count(), args.input.display());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut printed = false;
    if args.list {
        list_glyphs(&font, &mut out)?;
        printed = true;
    }
    if let Some(text) = &args.text {
        print_matches(&font, text, &mut out)?;
        printed = true;
    }
    for codepoint in &args.glyph {
        draw_glyph(&font, *codepoint, &mut out)?;
        printed = true;
    }
    if !printed {
        print_summary(&font, &mut out)?;
    }
    Ok(())
}

fn print_summary(font: &EmoteFont, out: &mut impl Write) -> Result<(), Error> {
    writeln!(out, "glyphs: {}", font.count())?;
    writeln!(out, "size:   {}x{}", font.width(), font.height())?;
    writeln!(out, "stride: {} bytes", font.glyph_stride())?;
    for range in CodepointRange::ALL {
        let count = font
            .codepoints()
            .filter(|(_, cp)| range.codepoints().contains(cp))
            .count();
        writeln!(out, "{:>12}: {count}", range.to_string())?;
    }
    Ok(())
}

fn list_glyphs(font: &EmoteFont, out: &mut impl Write) -> Result<(), Error> {
    writeln!(out, "GID   Codepoint  Range")?;
    writeln!(out, "---------------------------")?;
    for (gid, cp) in font.codepoints() {
        let range = CodepointRange::for_codepoint(cp)
            .map(|range| range.to_string())
            .unwrap_or_default();
        writeln!(out, "{:<5} U+{cp:<8X} {range}", gid.to_u16())?;
    }
    Ok(())
}

fn print_matches(font: &EmoteFont, text: &str, out: &mut impl Write) -> Result<(), Error> {
    let bytes = text.as_bytes();
    for (offset, found) in font.matches(bytes) {
        let glyph = found
            .glyph_id
            .map(|gid| gid.to_u16().to_string())
            .unwrap_or_else(|| "-".into());
        let segment = String::from_utf8_lossy(&bytes[offset..offset + found.len]);
        writeln!(
            out,
            "{offset:>5} {:>2} {glyph:>5} {}",
            found.len,
            segment.escape_default()
        )?;
    }
    Ok(())
}

fn draw_glyph(font: &EmoteFont, codepoint: u32, out: &mut impl Write) -> Result<(), Error> {
    let gid = font
        .map_codepoint(codepoint)
        .ok_or(Error::MissingGlyph(codepoint))?;
    let bitmap = font.bitmap(gid).ok_or(Error::MissingGlyph(codepoint))?;
    writeln!(out, "U+{codepoint:04X} ({gid})")?;
    for y in 0..bitmap.height() {
        let row: String = (0..bitmap.width())
            .map(|x| if bitmap.pixel(x, y) { '#' } else { '.' })
            .collect();
        writeln!(out, "{row}")?;
    }
    Ok(())
}

/// Parse `U+263A`, `0x263A`, bare hex digits, or a single character.
fn parse_codepoint(raw: &str) -> Result<u32, Error> {
    let mut chars = raw.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        if !ch.is_ascii_hexdigit() {
            return Ok(ch as u32);
        }
    }
    let digits = raw
        .strip_prefix("U+")
        .or_else(|| raw.strip_prefix("u+"))
        .or_else(|| raw.strip_prefix("0x"))
        .unwrap_or(raw);
    u32::from_str_radix(digits, 16)
        .ok()
        .filter(|cp| char::from_u32(*cp).is_some())
        .ok_or_else(|| Error::InvalidCodepoint(raw.to_string()))
}
