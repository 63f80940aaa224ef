/// alphabet/parser.rs — text-file alphabet loader
///
/// File format: one element per line, `NAME` and `MASS` separated by
/// whitespace. `MASS` may be fractional (e.g. a monoisotopic mass in
/// Daltons); `precision` controls how many decimal digits survive the
/// conversion to an integer weight (`round(mass * 10^precision)`),
/// which is the real-to-integer scaling spec.md §4.1/§6 assigns to the
/// Weights provider, never to the decomposer core. Blank lines and
/// lines starting with `#` are skipped. Errors are reported with the
/// 1-based line number, the same shape as `refer/coordinate.rs`'s BED
/// parser uses for malformed lines.
use std::fs;
use std::path::Path;

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::weights::Mass;

/// Loads an alphabet from `path`, scaling fractional masses by
/// `10^precision` and rounding to the nearest integer weight.
pub fn load_file(path: &Path, precision: u32) -> Result<Alphabet> {
    let text = fs::read_to_string(path)?;
    load_str(&text, precision)
}

pub fn load_str(text: &str, precision: u32) -> Result<Alphabet> {
    let scale = 10f64.powi(precision as i32);
    let mut alphabet = Alphabet::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let name = fields.next().ok_or_else(|| Error::AlphabetParse {
            line: line_no,
            reason: "missing element name".to_string(),
        })?;
        let mass_field = fields.next().ok_or_else(|| Error::AlphabetParse {
            line: line_no,
            reason: "missing mass value".to_string(),
        })?;
        if fields.next().is_some() {
            return Err(Error::AlphabetParse {
                line: line_no,
                reason: "too many fields, expected 'name mass'".to_string(),
            });
        }

        let real_mass: f64 = mass_field.parse().map_err(|_| Error::AlphabetParse {
            line: line_no,
            reason: format!("'{mass_field}' is not a valid number"),
        })?;
        if !real_mass.is_finite() || real_mass <= 0.0 {
            return Err(Error::AlphabetParse {
                line: line_no,
                reason: format!("mass must be positive and finite, got {real_mass}"),
            });
        }

        let scaled = (real_mass * scale).round();
        if scaled < 1.0 || scaled > Mass::MAX as f64 {
            return Err(Error::AlphabetParse {
                line: line_no,
                reason: format!("scaled mass {scaled} does not fit the mass type"),
            });
        }

        alphabet.push(name.to_string(), scaled as Mass);
    }

    if alphabet.size() == 0 {
        return Err(Error::AlphabetParse {
            line: 0,
            reason: "alphabet file contained no elements".to_string(),
        });
    }

    alphabet.sort_by_mass();
    Ok(alphabet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_integer_alphabet() {
        let text = "G 57\nA 71\nS 87\n";
        let a = load_str(text, 0).unwrap();
        assert_eq!(a.size(), 3);
        assert_eq!(a.mass_of("G").unwrap(), 57);
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let text = "# amino acids\n\nG 57\n\n# proline\nP 97\n";
        let a = load_str(text, 0).unwrap();
        assert_eq!(a.size(), 2);
    }

    #[test]
    fn scales_fractional_masses_by_precision() {
        let text = "G 57.02146\nA 71.03711\n";
        let a = load_str(text, 3).unwrap();
        assert_eq!(a.mass_of("G").unwrap(), 57021);
        assert_eq!(a.mass_of("A").unwrap(), 71037);
    }

    #[test]
    fn rejects_malformed_line_with_line_number() {
        let text = "G 57\nBAD\nA 71\n";
        let err = load_str(text, 0).unwrap_err();
        match err {
            Error::AlphabetParse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_positive_mass() {
        let text = "G 0\n";
        assert!(load_str(text, 0).is_err());
    }

    #[test]
    fn rejects_empty_file() {
        assert!(load_str("", 0).is_err());
        assert!(load_str("# only comments\n", 0).is_err());
    }

    #[test]
    fn sorts_output_by_mass() {
        let text = "A 71\nG 57\n";
        let a = load_str(text, 0).unwrap();
        assert_eq!(a.name(0), "G");
        assert_eq!(a.name(1), "A");
    }
}
