use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): every file was generated, up to date, or skipped
/// - `Failure` (255): bad usage, invalid root, or at least one file failed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 255,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
