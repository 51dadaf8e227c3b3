//! Terminal output for one-shot searches

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print one result per line, highlighting each occurrence of any of the
/// `needles` (the searched case variants)
pub fn print_results(results: &[String], needles: &[String], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for result in results {
        write_highlighted(&mut stdout, result, needles)?;
        writeln!(stdout)?;
    }

    Ok(())
}

/// Print the result count footer to stderr
pub fn print_summary(count: usize, duration_ms: f64, color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);

    stderr.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(stderr, "{}", count)?;
    stderr.reset()?;
    writeln!(stderr, " results in {:.1} ms", duration_ms)?;

    Ok(())
}

/// Write `line`, with every match of a needle in bold red
fn write_highlighted<W: WriteColor>(out: &mut W, line: &str, needles: &[String]) -> io::Result<()> {
    let spans = match_spans(line, needles);
    let mut pos = 0;

    for (start, end) in spans {
        out.write_all(line[pos..start].as_bytes())?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        out.write_all(line[start..end].as_bytes())?;
        out.reset()?;
        pos = end;
    }

    out.write_all(line[pos..].as_bytes())
}

/// Non-overlapping byte spans of needle occurrences, left to right
fn match_spans(line: &str, needles: &[String]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while pos < line.len() {
        let next = needles
            .iter()
            .filter(|n| !n.is_empty())
            .filter_map(|n| line[pos..].find(n.as_str()).map(|i| (pos + i, pos + i + n.len())))
            .min_by_key(|&(start, end)| (start, std::cmp::Reverse(end)));

        match next {
            Some((start, end)) => {
                spans.push((start, end));
                pos = end;
            }
            None => break,
        }
    }

    spans
}
