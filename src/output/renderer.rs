//! Tree line renderers
//!
//! `TreeRenderer` writes one line per node and hands back the prefixes the walker
//! threads into the next recursion level. Rendering and prefix bookkeeping happen in
//! the same call so the tree is never materialized.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::tree::TreeChars;

/// Tree line renderer, selected once per run.
#[derive(Debug, Clone, Copy)]
pub enum TreeRenderer {
    /// Colored names; `background` paints white text on a colored block instead
    Colored {
        chars: TreeChars,
        background: bool,
    },
    Plain {
        chars: TreeChars,
    },
}

impl TreeRenderer {
    pub fn new(chars: TreeChars, color: bool, background: bool) -> Self {
        if color {
            Self::Colored { chars, background }
        } else {
            Self::Plain { chars }
        }
    }

    pub fn chars(&self) -> &TreeChars {
        match self {
            Self::Colored { chars, .. } | Self::Plain { chars } => chars,
        }
    }

    /// Render the scan root on its own line.
    pub fn render_root<W: WriteColor>(&self, out: &mut W, name: &str) -> io::Result<()> {
        self.write_name(out, name, self.dir_style())
    }

    /// Render a directory line and return `(child_prefix, last_child_prefix)`.
    pub fn render_dir<W: WriteColor>(
        &self,
        out: &mut W,
        name: &str,
        is_last: bool,
        prefix: &str,
    ) -> io::Result<(String, String)> {
        let chars = self.chars();
        write!(out, "{}{}", prefix, chars.connector(is_last))?;
        self.write_name(out, name, self.dir_style())?;

        Ok((
            chars.child_prefix(prefix, is_last),
            chars.child_prefix(prefix, true),
        ))
    }

    /// Render a file line. Symlinks get their own color.
    pub fn render_file<W: WriteColor>(
        &self,
        out: &mut W,
        name: &str,
        is_last: bool,
        prefix: &str,
        is_symlink: bool,
    ) -> io::Result<()> {
        write!(out, "{}{}", prefix, self.chars().connector(is_last))?;
        self.write_name(out, name, self.file_style(is_symlink))
    }

    fn write_name<W: WriteColor>(
        &self,
        out: &mut W,
        name: &str,
        style: Option<ColorSpec>,
    ) -> io::Result<()> {
        match style {
            Some(spec) => {
                out.set_color(&spec)?;
                write!(out, "{}", name)?;
                out.reset()?;
                writeln!(out)
            }
            None => writeln!(out, "{}", name),
        }
    }

    fn dir_style(&self) -> Option<ColorSpec> {
        match self {
            Self::Colored { background: true, .. } => Some(on_background(Color::Blue)),
            Self::Colored { background: false, .. } => {
                let mut spec = ColorSpec::new();
                spec.set_fg(Some(Color::Blue)).set_bold(true);
                Some(spec)
            }
            Self::Plain { .. } => None,
        }
    }

    fn file_style(&self, is_symlink: bool) -> Option<ColorSpec> {
        let color = if is_symlink { Color::Magenta } else { Color::Green };
        match self {
            Self::Colored { background: true, .. } => Some(on_background(color)),
            Self::Colored { background: false, .. } => {
                let mut spec = ColorSpec::new();
                spec.set_fg(Some(color));
                Some(spec)
            }
            Self::Plain { .. } => None,
        }
    }
}

/// Bright white text on a colored background.
fn on_background(color: Color) -> ColorSpec {
    // Bright white through the 256-color table; `set_intense` would brighten the
    // background as well.
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Ansi256(15))).set_bg(Some(color));
    spec
}
