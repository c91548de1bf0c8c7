use std::io::{BufRead, Write};

use anyhow::Context;

/// Use `given`, or read one line from stdin after printing `label` to stderr.
pub fn value_or_prompt(given: Option<&str>, label: &str) -> anyhow::Result<String> {
    if let Some(value) = given {
        return Ok(value.to_string());
    }
    let stdin = std::io::stdin();
    read_prompted(&mut stdin.lock(), label)
}

fn read_prompted(input: &mut impl BufRead, label: &str) -> anyhow::Result<String> {
    eprint!("{label}: ");
    std::io::stderr().flush().ok();

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_context(|| format!("failed to read {label}"))?;
    if read == 0 {
        anyhow::bail!("{label} is required");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn given_value_skips_prompt() {
        assert_eq!(value_or_prompt(Some("hunter2"), "Password").unwrap(), "hunter2");
    }

    #[test]
    fn reads_one_line_without_newline() {
        let mut input = Cursor::new("s3cret pass\r\nnext\n");
        assert_eq!(read_prompted(&mut input, "Password").unwrap(), "s3cret pass");
        assert_eq!(read_prompted(&mut input, "Confirm").unwrap(), "next");
    }

    #[test]
    fn eof_is_an_error() {
        let mut input = Cursor::new("");
        let error = read_prompted(&mut input, "Password").unwrap_err();
        assert_eq!(error.to_string(), "Password is required");
    }
}
