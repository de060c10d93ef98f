//! Interactive category selection.
use std::io::{BufRead, ErrorKind, Write};

use report_common::category::ALL_CATEGORIES;
use report_common::{ReportError, Result};

/// Print the available categories to `output` (stderr in the CLI) and read one answer
/// from `input`.
///
/// The answer is returned trimmed but otherwise unchecked: validating it is the
/// resolver's job, so an unknown name surfaces as `UnknownCategory`.
pub fn prompt_category<R: BufRead, W: Write>(
    names: &[&str],
    mut input: R,
    mut output: W,
) -> Result<String> {
    let mut choices = Vec::with_capacity(names.len() + 1);
    choices.push(ALL_CATEGORIES);
    choices.extend_from_slice(names);

    write!(output, "Select category [{}]: ", choices.join(", "))?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ReportError::Io(std::io::Error::new(
            ErrorKind::UnexpectedEof,
            "no category entered",
        )));
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_choices_and_reads_answer() {
        let mut out = Vec::new();
        let answer = prompt_category(&["oil", "tech"], "  Tech \n".as_bytes(), &mut out).unwrap();

        assert_eq!(answer, "Tech");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Select category [all, oil, tech]: "
        );
    }

    #[test]
    fn empty_input_is_error() {
        let res = prompt_category(&["oil"], "".as_bytes(), Vec::new());
        assert!(matches!(res, Err(ReportError::Io(_))));
    }
}
