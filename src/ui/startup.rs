//! Abfrage des Kurvengrads beim Programmstart.
//!
//! Der Grad kommt entweder als erstes Kommandozeilen-Argument oder aus einem
//! Textmenü auf stdin. Menüpunkt 4 fragt einen beliebigen Grad ab; jede andere
//! Zahl wird direkt als Grad übernommen.

use crate::core::CurveDegree;
use anyhow::Context;
use std::io::{BufRead, Write};

const MENU: &str = "\
Select the degree of the Bezier curve:
  1) linear
  2) quadratic
  3) cubic
  4) other
> ";

/// Liest eine Zeile; EOF ist ein Fehler.
fn read_line(input: &mut impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Eingabe konnte nicht gelesen werden")?;
    if read == 0 {
        anyhow::bail!("Eingabe beendet, bevor ein Grad gewählt wurde");
    }
    Ok(line)
}

/// Zeigt das Grad-Menü und liest die Auswahl.
pub fn prompt_degree(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<CurveDegree> {
    write!(output, "{MENU}")?;
    output.flush()?;

    let choice: CurveDegree = read_line(input)?.parse()?;
    if choice.get() != 4 {
        return Ok(choice);
    }

    write!(output, "Enter the degree: ")?;
    output.flush()?;
    read_line(input)?.parse()
}

/// Bestimmt den Grad: erstes Argument, sonst interaktives Menü.
pub fn resolve_degree(
    mut args: impl Iterator<Item = String>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<CurveDegree> {
    match args.next() {
        Some(arg) => arg
            .parse::<CurveDegree>()
            .with_context(|| format!("Ungültiger Grad als Argument: '{arg}'")),
        None => prompt_degree(input, output),
    }
}
