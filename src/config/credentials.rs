//! Interactive prompting for the application identity.

use std::io::{self, BufRead, IsTerminal, Write};

use console::Term;

use crate::config::loader::Credential;
use crate::config::validation::validate_value;
use crate::error::{Error, Result};
use crate::output::{print_info, print_warning};

/// Ask on the terminal for whichever of application ID and secret is missing.
///
/// Fails with [`Error::MissingConfig`] when stdin is not an interactive
/// terminal, since nobody could answer.
pub fn prompt_client_identity(term: &Term, credential: &mut Credential) -> Result<()> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        let field = if credential.application_id.is_empty() {
            "application_id"
        } else {
            "secret"
        };
        return Err(Error::MissingConfig(format!(
            "{} (no interactive terminal to prompt on; pass it via flag, environment or settings file)",
            field
        )));
    }

    let mut output = term.clone();
    prompt_missing(&mut stdin.lock(), &mut output, credential)?;

    print_info(&format!(
        "Using application ID {}",
        credential.application_id
    ));
    Ok(())
}

/// Fill the missing identity fields from `input`.
pub fn prompt_missing<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    credential: &mut Credential,
) -> Result<()> {
    if credential.application_id.is_empty() {
        credential.application_id =
            prompt_non_empty(input, output, "Application ID", "application_id")?;
    }
    if credential.secret.is_empty() {
        credential.secret = prompt_non_empty(input, output, "Secret", "secret")?;
    }
    Ok(())
}

/// Keep asking until a usable value is entered. End of input is an error.
fn prompt_non_empty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    field: &str,
) -> Result<String> {
    loop {
        write!(output, "Please enter {}: ", label)?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Err(Error::MissingConfig(format!(
                "{} (input closed before a value was entered)",
                field
            )));
        }
        let answer = answer.trim();

        if answer.is_empty() {
            print_warning(&format!("{} is empty.", label));
            continue;
        }

        match validate_value(field, answer) {
            Ok(()) => return Ok(answer.to_string()),
            Err(e) => print_warning(&e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reasks_while_answer_is_empty() {
        let mut input = Cursor::new("\n   \napp-123\ns3cret\n");
        let mut output = Vec::new();
        let mut credential = Credential::default();

        prompt_missing(&mut input, &mut output, &mut credential).unwrap();

        assert_eq!(credential.application_id, "app-123");
        assert_eq!(credential.secret, "s3cret");
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("Please enter Application ID: ").count(), 3);
        assert_eq!(shown.matches("Please enter Secret: ").count(), 1);
    }

    #[test]
    fn test_placeholder_answer_is_asked_again() {
        let mut input = Cursor::new("your_app_id\nreal-id\n");
        let mut output = Vec::new();
        let mut credential = Credential {
            secret: "kept".into(),
            ..Default::default()
        };

        prompt_missing(&mut input, &mut output, &mut credential).unwrap();

        assert_eq!(credential.application_id, "real-id");
        assert_eq!(credential.secret, "kept");
    }

    #[test]
    fn test_closed_input_is_missing_config() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let mut credential = Credential::default();

        let err = prompt_missing(&mut input, &mut output, &mut credential).unwrap_err();
        assert!(matches!(err, Error::MissingConfig(ref f) if f.starts_with("application_id")));
    }

    #[test]
    fn test_input_closing_after_empty_lines_stops() {
        let mut input = Cursor::new("app\n\n\n");
        let mut output = Vec::new();
        let mut credential = Credential::default();

        let err = prompt_missing(&mut input, &mut output, &mut credential).unwrap_err();
        assert!(matches!(err, Error::MissingConfig(ref f) if f.starts_with("secret")));
        assert_eq!(credential.application_id, "app");
    }

    #[test]
    fn test_nothing_asked_when_identity_present() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let mut credential = Credential {
            application_id: "id".into(),
            secret: "sec".into(),
            token: String::new(),
        };

        prompt_missing(&mut input, &mut output, &mut credential).unwrap();
        assert!(output.is_empty());
    }
}
