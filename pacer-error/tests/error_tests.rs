// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_error::{PacerError, Result};

#[test]
fn test_error_display() {
    let err = PacerError::invalid_argument("delay", "must not be negative");
    assert_eq!(
        err.to_string(),
        "Invalid argument `delay`: must not be negative"
    );

    let err = PacerError::runtime_unavailable("tokio");
    assert_eq!(
        err.to_string(),
        "No tokio runtime available to schedule deferred calls"
    );
}

#[test]
fn test_error_constructors() {
    let err = PacerError::invalid_argument("delay", "NaN");
    assert!(matches!(
        err,
        PacerError::InvalidArgument { ref parameter, ref reason }
            if parameter == "delay" && reason == "NaN"
    ));

    let err = PacerError::runtime_unavailable("smol");
    assert!(matches!(err, PacerError::RuntimeUnavailable { .. }));
}

#[test]
fn test_is_invalid_argument() {
    assert!(PacerError::invalid_argument("delay", "x").is_invalid_argument());
    assert!(!PacerError::runtime_unavailable("tokio").is_invalid_argument());
}

#[test]
fn test_result_alias_propagates() {
    fn inner() -> Result<()> {
        Err(PacerError::runtime_unavailable("tokio"))
    }

    fn outer() -> Result<u8> {
        inner()?;
        Ok(1)
    }

    assert_eq!(
        outer().unwrap_err(),
        PacerError::runtime_unavailable("tokio")
    );
}
