// Highlight rendering — wrap covered token runs in markers.
//
// Tokens are emitted verbatim and in order. Consecutive tokens that share a
// marker are wrapped once, so a matched passage becomes a single highlighted
// span rather than one span per word.

use colored::{Color, Colorize};

use crate::config::Scheme;
use crate::text::tokenizer::Token;

/// How a highlighted run is wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// Bold text on an ANSI background colour.
    Ansi(Color),
    /// Literal opening and closing strings, e.g. `<mark>` / `</mark>`.
    Text { open: String, close: String },
}

impl Marker {
    pub fn text(open: &str, close: &str) -> Self {
        Marker::Text {
            open: open.to_string(),
            close: close.to_string(),
        }
    }

    /// Wrap a run of surface text.
    pub fn wrap(&self, run: &str) -> String {
        match self {
            Marker::Ansi(color) => run.on_color(*color).bold().to_string(),
            Marker::Text { open, close } => format!("{open}{run}{close}"),
        }
    }
}

/// Background colours for reference matches, sample matches and quoted
/// sample matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub reference: Color,
    pub sample: Color,
    pub quote: Color,
}

impl ColorScheme {
    pub fn for_scheme(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Cmyk => Self {
                reference: Color::Yellow,
                sample: Color::Magenta,
                quote: Color::Cyan,
            },
            Scheme::Rgb => Self {
                reference: Color::Green,
                sample: Color::Red,
                quote: Color::Blue,
            },
        }
    }
}

/// Human-readable colour name for the legend lines.
pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::Red => "red",
        Color::Green => "green",
        Color::Yellow => "yellow",
        Color::Blue => "blue",
        Color::Magenta => "magenta",
        Color::Cyan => "cyan",
        _ => "white",
    }
}

/// Assign a marker to each position. Later layers win where masks overlap.
pub fn paint_layers<'a>(len: usize, layers: &[(&[bool], &'a Marker)]) -> Vec<Option<&'a Marker>> {
    let mut paints = vec![None; len];
    for (mask, marker) in layers {
        for (paint, &on) in paints.iter_mut().zip(mask.iter()) {
            if on {
                *paint = Some(*marker);
            }
        }
    }
    paints
}

/// Render tokens, wrapping each run of equally-painted tokens once.
///
/// Positions past the end of `paints` are left unhighlighted.
pub fn render(tokens: &[Token], paints: &[Option<&Marker>]) -> String {
    let mut out = String::new();
    let mut run = String::new();
    let mut current: Option<&Marker> = None;

    for (i, token) in tokens.iter().enumerate() {
        let paint = paints.get(i).copied().flatten();
        if paint != current {
            flush(&mut out, &mut run, current);
            current = paint;
        }
        run.push_str(&token.text);
    }
    flush(&mut out, &mut run, current);

    out
}

fn flush(out: &mut String, run: &mut String, marker: Option<&Marker>) {
    if run.is_empty() {
        return;
    }
    match marker {
        Some(m) => out.push_str(&m.wrap(run)),
        None => out.push_str(run),
    }
    run.clear();
}

/// Contiguous covered runs as trimmed strings, in document order.
pub fn matched_passages(tokens: &[Token], mask: &[bool]) -> Vec<String> {
    let mut passages = Vec::new();
    let mut run = String::new();

    for (token, &covered) in tokens.iter().zip(mask.iter()) {
        if covered {
            run.push_str(&token.text);
        } else if !run.is_empty() {
            passages.push(run.trim().to_string());
            run.clear();
        }
    }
    if !run.is_empty() {
        passages.push(run.trim().to_string());
    }

    passages
}
