//! Interactive input collection for bsdgen.
//!
//! This module owns the two prompt loops (year, then author). Both loops
//! re-prompt indefinitely on invalid input and only return once a valid value
//! has been read. The functions are generic over `BufRead`/`Write` so tests
//! drive them with in-memory buffers while the CLI passes locked stdin/stdout.

use std::io::{BufRead, Write};

/// A year is valid when it is exactly 4 characters long and parses as an
/// integer. The exact-length rule is deliberate: `999` is rejected while
/// `0999` is accepted.
pub fn is_valid_year(s: &str) -> bool {
    s.len() == 4 && s.parse::<i32>().is_ok()
}

/// An author name is valid when it is non-empty after trimming.
pub fn is_valid_author(s: &str) -> bool {
    !s.is_empty()
}

/// Read one line from `input` and trim surrounding whitespace.
///
/// Reaching end-of-input mid-prompt is the one way the prompt loops end
/// without a valid value, so it is reported as an error rather than treated
/// as an empty line.
fn read_trimmed<R: BufRead>(input: &mut R) -> Result<String, String> {
    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .map_err(|e| format!("failed to read input: {}", e))?;
    if n == 0 {
        return Err("unexpected end of input".into());
    }
    Ok(line.trim().to_string())
}

/// Prompt for a 4-digit year, re-prompting until the input validates.
pub fn prompt_year<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String, String> {
    write!(out, "Please input the year (4 digits): ")
        .map_err(|e| format!("failed to write prompt: {}", e))?;
    out.flush().map_err(|e| format!("failed to flush: {}", e))?;
    loop {
        let year = read_trimmed(input)?;
        if is_valid_year(&year) {
            return Ok(year);
        }
        write!(out, "Invalid year. Please retry the input (4 digits): ")
            .map_err(|e| format!("failed to write prompt: {}", e))?;
        out.flush().map_err(|e| format!("failed to flush: {}", e))?;
    }
}

/// Prompt for an author name, re-prompting until the input is non-empty.
pub fn prompt_author<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String, String> {
    write!(out, "Please input the author name: ")
        .map_err(|e| format!("failed to write prompt: {}", e))?;
    out.flush().map_err(|e| format!("failed to flush: {}", e))?;
    loop {
        let author = read_trimmed(input)?;
        if is_valid_author(&author) {
            return Ok(author);
        }
        write!(out, "Invalid author name. Please retry the input: ")
            .map_err(|e| format!("failed to write prompt: {}", e))?;
        out.flush().map_err(|e| format!("failed to flush: {}", e))?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_year_validation() {
        assert!(is_valid_year("2024"));
        assert!(is_valid_year("0999"));
        assert!(!is_valid_year("999"));
        assert!(!is_valid_year("20245"));
        assert!(!is_valid_year("20a4"));
        assert!(!is_valid_year(""));
    }

    #[test]
    fn test_author_validation() {
        assert!(is_valid_author("Jane Doe"));
        assert!(!is_valid_author(""));
    }

    #[test]
    fn test_prompt_year_accepts_first_valid() {
        let mut input = Cursor::new("2024\n");
        let mut out = Vec::new();
        let year = prompt_year(&mut input, &mut out).unwrap();
        assert_eq!(year, "2024");
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown, "Please input the year (4 digits): ");
    }

    #[test]
    fn test_prompt_year_retries_until_valid() {
        let mut input = Cursor::new("abcd\n999\n 2024 \n");
        let mut out = Vec::new();
        let year = prompt_year(&mut input, &mut out).unwrap();
        assert_eq!(year, "2024");
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches("Invalid year").count(), 2);
    }

    #[test]
    fn test_prompt_author_skips_blank_lines() {
        let mut input = Cursor::new("\n   \nJane Doe\n");
        let mut out = Vec::new();
        let author = prompt_author(&mut input, &mut out).unwrap();
        assert_eq!(author, "Jane Doe");
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches("Invalid author name").count(), 2);
    }

    #[test]
    fn test_prompt_year_eof_is_error() {
        let mut input = Cursor::new("abcd\n");
        let mut out = Vec::new();
        let err = prompt_year(&mut input, &mut out).unwrap_err();
        assert!(err.contains("end of input"));
    }
}
