//! # Result Actions
//!
//! Placeholders for exporting results and saving the form configuration.
//! Neither performs any I/O yet; both report `NotImplemented` so a front end
//! can show a notice without affecting the calculation.

use crate::calculations::trajectory::BallisticsResult;
use crate::errors::{CalcError, CalcResult};
use crate::form::ShotForm;

/// Export a calculation result.
pub fn export_results(_result: &BallisticsResult) -> CalcResult<()> {
    Err(CalcError::not_implemented("export results"))
}

/// Save the current form values as a reusable configuration.
pub fn save_configuration(_form: &ShotForm) -> CalcResult<()> {
    Err(CalcError::not_implemented("save configuration"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::trajectory::calculate;

    #[test]
    fn test_export_not_implemented() {
        let result = calculate(&ShotForm::default().parse().unwrap()).unwrap();
        let err = export_results(&result).unwrap_err();
        assert_eq!(err.error_code(), "NOT_IMPLEMENTED");
        assert_eq!(err.to_string(), "Not implemented: export results");
    }

    #[test]
    fn test_save_not_implemented() {
        let err = save_configuration(&ShotForm::default()).unwrap_err();
        assert_eq!(err, CalcError::not_implemented("save configuration"));
    }
}
