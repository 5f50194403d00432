use std::fmt;

/// The two reference rails a converter may measure against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rail {
    Vdd,
    Vss,
}

impl fmt::Display for Rail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rail::Vdd => write!(f, "vdd"),
            Rail::Vss => write!(f, "vss"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SupplyError {
    #[error("regulator refused request: {0}")]
    Refused(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A controllable supply rail, typically backed by a regulator.
///
/// `microvolts` may be a register read; it must not change the power state.
pub trait Supply {
    fn set_enabled(&mut self, enable: bool) -> Result<(), SupplyError>;

    fn microvolts(&mut self) -> Result<i32, SupplyError>;
}
