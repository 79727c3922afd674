//! Type-level checks for the platform domain types.
//! These types are passed by value across every framework callback, so they
//! must stay small and `Copy`.

#![allow(clippy::unwrap_used)]

// ── StreamRequest ────────────────────────────────────────────────────────────

#[test]
fn stream_request_keeps_raw_values() {
    use platform::StreamRequest;
    let req = StreamRequest::new(96_000, 24);
    assert_eq!(req.sample_rate_hz, 96_000);
    assert_eq!(req.sample_bits, 24);
}

#[test]
fn stream_request_zero_is_constructible_but_invalid() {
    use platform::{FormatError, StreamRequest};
    let req = StreamRequest::new(0, 0);
    assert!(matches!(
        req.validate(),
        Err(FormatError::UnsupportedFormat { .. })
    ));
}

#[test]
fn format_error_message_names_both_fields() {
    use platform::StreamRequest;
    let err = StreamRequest::new(0, 16).validate().unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("0 Hz"), "message was: {msg}");
    assert!(msg.contains("16 bits"), "message was: {msg}");
}

#[test]
fn format_error_is_a_core_error() {
    fn takes_error(_: &dyn core::error::Error) {}
    let err = platform::StreamRequest::new(0, 16).validate().unwrap_err();
    takes_error(&err);
}

// ── Sizes ────────────────────────────────────────────────────────────────────

#[test]
fn stream_request_is_two_words() {
    assert_eq!(core::mem::size_of::<platform::StreamRequest>(), 8);
}

#[test]
fn bias_transition_is_two_bytes() {
    assert_eq!(core::mem::size_of::<platform::BiasTransition>(), 2);
}

#[test]
fn device_id_is_a_word() {
    assert_eq!(core::mem::size_of::<platform::DeviceId>(), 4);
}

// ── Polarity ─────────────────────────────────────────────────────────────────

#[test]
fn default_polarity_mutes_low() {
    use platform::{MuteState, PinState, Polarity};
    assert_eq!(Polarity::default(), Polarity::ActiveLow);
    assert_eq!(Polarity::default().pin_state(MuteState::Muted), PinState::Low);
}

#[test]
fn polarities_disagree_on_every_state() {
    use platform::{MuteState, Polarity};
    for state in [MuteState::Muted, MuteState::Unmuted] {
        assert_ne!(
            Polarity::ActiveLow.pin_state(state),
            Polarity::ActiveHigh.pin_state(state)
        );
    }
}

// ── Board identity ───────────────────────────────────────────────────────────

#[test]
fn board_identity_constants() {
    use platform::config::{COMPATIBLE, DRIVER_NAME, NAME_CAPACITY};
    assert_eq!(COMPATIBLE, "iqaudio,iqaudio-dac");
    assert_eq!(DRIVER_NAME, "snd-rpi-iqaudio-dac");
    assert!(DRIVER_NAME.len() <= NAME_CAPACITY);
}
