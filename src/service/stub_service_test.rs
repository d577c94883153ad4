use super::*;

#[test]
fn echo_repeats_trimmed_message() {
    let svc = StubService::new(StubMode::Echo);
    assert_eq!(svc.reply("  olá  ").unwrap(), "Você perguntou: olá");
}

#[test]
fn fallback_ignores_message() {
    let svc = StubService::new(StubMode::Fallback);
    assert_eq!(svc.reply("sintomas?").unwrap(), FALLBACK_REPLY);
}

#[test]
fn fail_mode_errors() {
    let svc = StubService::new(StubMode::Fail);
    assert_eq!(svc.reply("oi"), Err(AppError::SimulatedFailure));
}

#[test]
fn blank_message_is_rejected_in_every_mode() {
    for mode in [StubMode::Echo, StubMode::Fallback, StubMode::Fail] {
        let err = StubService::new(mode).reply(" \n ").unwrap_err();
        assert_eq!(err, AppError::EmptyMessage);
        assert!(err.is_validation());
    }
}
