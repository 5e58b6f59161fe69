//! Output formatting for CLI results.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, VirtuosoArgs};
use crate::error::Result;
use crate::mutation::CandidateWord;

/// A single mutation flattened for CSV output.
#[derive(Debug, Serialize, Deserialize)]
pub struct MutationRow {
    pub word: String,
    pub result: String,
    pub letter: Option<char>,
    pub position: usize,
}

const CSV_COLUMNS: [&str; 4] = ["word", "result", "letter", "position"];

impl MutationRow {
    /// Flatten the mutations of `candidate`, one row each.
    pub fn from_candidate(candidate: &CandidateWord) -> Vec<MutationRow> {
        candidate
            .mutations
            .iter()
            .map(|mutation| MutationRow {
                word: candidate.word.clone(),
                result: mutation.word.clone(),
                letter: mutation.edit.letter(),
                position: mutation.edit.position(),
            })
            .collect()
    }
}

/// Write the solved candidates in the format selected by `args`.
pub fn output_results<W: Write>(
    candidates: &[CandidateWord],
    args: &VirtuosoArgs,
    out: &mut W,
) -> Result<()> {
    let selected: Vec<&CandidateWord> = candidates
        .iter()
        .filter(|candidate| !args.matched_only || candidate.has_mutations())
        .collect();

    match args.output_format {
        OutputFormat::Human => output_human(&selected, out),
        OutputFormat::Json => output_json(&selected, args, out),
        OutputFormat::Csv => output_csv(&selected, out),
    }
}

/// Output in human-readable format.
fn output_human<W: Write>(candidates: &[&CandidateWord], out: &mut W) -> Result<()> {
    for candidate in candidates {
        writeln!(out, "{}", candidate.word)?;
        for mutation in &candidate.mutations {
            writeln!(out, "\t{mutation}")?;
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<W: Write>(
    candidates: &[&CandidateWord],
    args: &VirtuosoArgs,
    out: &mut W,
) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, candidates)?;
    } else {
        serde_json::to_writer(&mut *out, candidates)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Output in CSV format.
fn output_csv<W: Write>(candidates: &[&CandidateWord], out: &mut W) -> Result<()> {
    writeln!(out, "{}", CSV_COLUMNS.join(","))?;

    for candidate in candidates {
        for row in MutationRow::from_candidate(candidate) {
            let value = serde_json::to_value(&row)?;
            let values: Vec<String> = CSV_COLUMNS
                .iter()
                .map(|column| format_csv_value(&value[*column]))
                .collect();
            writeln!(out, "{}", values.join(","))?;
        }
    }
    Ok(())
}

/// Format a JSON value for CSV output.
fn format_csv_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => {
            if s.contains(',') || s.contains('"') || s.contains('\n') {
                let escaped = s.replace('"', "\"\"");
                format!("\"{escaped}\"")
            } else {
                s.clone()
            }
        }
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "".to_string(),
        other => format!("\"{}\"", other.to_string().replace('"', "\"\"")),
    }
}
