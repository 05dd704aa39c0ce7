use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// One-letter sequence of the first chain in a PDB coordinate file.
///
/// Emits one residue code per unique (chain, residue-number) pair in
/// first-appearance order and stops at the first chain boundary. Residue
/// names outside the canonical 20 are skipped.
pub fn read_sequence(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut sequence = String::new();
    let mut seen: HashSet<(char, i32)> = HashSet::new();
    let mut current_chain: Option<char> = None;

    for line in text.lines() {
        if !line.starts_with("ATOM") || !line.is_ascii() {
            continue;
        }
        let bytes = line.as_bytes();
        if bytes.len() < 26 {
            continue;
        }
        let chain = bytes[21] as char;
        match current_chain {
            None => current_chain = Some(chain),
            Some(c) if c != chain => break,
            Some(_) => {}
        }
        let res_name = line[17..20].trim();
        let res_num: i32 = match line[22..26].trim().parse() {
            Ok(n) => n,
            Err(_) => continue,
        };
        if !seen.insert((chain, res_num)) {
            continue;
        }
        if let Some(code) = three_to_one(res_name) {
            sequence.push(code);
        }
    }

    Ok(sequence)
}

fn three_to_one(name: &str) -> Option<char> {
    let code = match name {
        "ALA" => 'A',
        "CYS" => 'C',
        "ASP" => 'D',
        "GLU" => 'E',
        "PHE" => 'F',
        "GLY" => 'G',
        "HIS" => 'H',
        "ILE" => 'I',
        "LYS" => 'K',
        "LEU" => 'L',
        "MET" => 'M',
        "ASN" => 'N',
        "PRO" => 'P',
        "GLN" => 'Q',
        "ARG" => 'R',
        "SER" => 'S',
        "THR" => 'T',
        "VAL" => 'V',
        "TRP" => 'W',
        "TYR" => 'Y',
        _ => return None,
    };
    Some(code)
}
