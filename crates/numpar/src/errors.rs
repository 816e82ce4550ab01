//! Error handling and exit codes.

use numpar_core::calculator::NumError;
use numpar_core::constants::exit_codes;

/// Map a calculation error to a process exit code.
pub fn handle_error(err: &NumError) -> i32 {
    match err {
        NumError::InvalidInput(_)
        | NumError::Overflow(_)
        | NumError::Worker(_)
        | NumError::Calculation(_) => exit_codes::ERROR_GENERIC,
        NumError::Config(_) => exit_codes::ERROR_CONFIG,
        NumError::Resource { .. } => exit_codes::ERROR_RESOURCE,
        NumError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<NumError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&NumError::InvalidInput("n".into())), 1);
        assert_eq!(
            handle_error(&NumError::Resource {
                rank: 0,
                source: std::io::Error::new(std::io::ErrorKind::OutOfMemory, "no threads"),
            }),
            2
        );
        assert_eq!(handle_error(&NumError::Mismatch), 3);
        assert_eq!(handle_error(&NumError::Config("bad".into())), 4);
    }

    #[test]
    fn anyhow_errors() {
        assert_eq!(exit_code(&anyhow::Error::new(NumError::Mismatch)), 3);
        assert_eq!(exit_code(&anyhow::anyhow!("disk full")), 1);
    }
}
