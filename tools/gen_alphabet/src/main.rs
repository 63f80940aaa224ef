//! gen_alphabet — one-time offline tool to generate data/aminoacids.txt
//!
//! Emits the standard 20 amino-acid residue masses (monoisotopic, in
//! Daltons) as a `name mass` text file in the format `alphabet::parser`
//! reads, at a fixed precision. The output is committed to the repo and
//! not regenerated at build time; this tool exists so the table's
//! provenance is reproducible rather than hand-typed.
//!
//! OUTPUT FORMAT (data/aminoacids.txt)
//! ────────────────────────────────────────────────────────────────────
//!  one element per line: "<one-letter code> <monoisotopic mass>"
//!  lines are sorted by ascending mass; trailing newline.
//! ────────────────────────────────────────────────────────────────────

use std::io::Write;

/// One-letter code and monoisotopic residue mass (Da), standard 20.
const RESIDUES: &[(&str, f64)] = &[
    ("G", 57.02146),
    ("A", 71.03711),
    ("S", 87.03203),
    ("P", 97.05276),
    ("V", 99.06841),
    ("T", 101.04768),
    ("C", 103.00919),
    ("L", 113.08406),
    ("I", 113.08406),
    ("N", 114.04293),
    ("D", 115.02694),
    ("Q", 128.05858),
    ("K", 128.09496),
    ("E", 129.04259),
    ("M", 131.04049),
    ("H", 137.05891),
    ("F", 147.06841),
    ("R", 156.10111),
    ("Y", 163.06333),
    ("W", 186.07931),
];

fn main() {
    let output_path = "../../data/aminoacids.txt";

    let mut residues = RESIDUES.to_vec();
    residues.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());

    let mut text = String::new();
    text.push_str("# standard amino-acid residue masses (monoisotopic, Da)\n");
    for (name, mass) in &residues {
        text.push_str(&format!("{name} {mass:.5}\n"));
    }

    std::fs::create_dir_all("../../data").unwrap_or(());

    match std::fs::File::create(output_path).and_then(|mut f| f.write_all(text.as_bytes())) {
        Ok(()) => eprintln!("Written {} residues to {}", residues.len(), output_path),
        Err(e) => {
            eprintln!("ERROR writing {}: {}", output_path, e);
            std::process::exit(1);
        }
    }
}
