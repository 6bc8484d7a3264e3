use crate::{
    lines, parse_from_bytes, render_all, DecodeError, MalformedValue, ParseParameterError,
    RenderError, TransportParameter,
};

#[test]
fn decode_xargs_org_client_transport_parameters() -> Result<(), anyhow::Error> {
    let bytes =
        include_bytes!("./test_data/xargs_org/client_initial_0/quic_transport_parameters.bin");
    assert_eq!(
        render_all(bytes)?,
        vec![
            "max_udp_payload_size, 65527",
            "initial_max_data, 10485760",
            "initial_max_stream_data_bidi_local, 1048576",
            "initial_max_stream_data_bidi_remote, 1048576",
            "initial_max_stream_data_uni, 1048576",
            "initial_max_streams_bidi, 10",
            "initial_max_streams_uni, 10",
            "ack_delay_exponent, 3",
            "max_ack_delay, 25",
            "initial_source_connection_id, [99, 95, 99, 105, 100]",
        ]
    );
    assert_eq!(
        parse_from_bytes(bytes)?.last(),
        Some(&TransportParameter::new(0x0f, b"c_cid".to_vec()))
    );
    Ok(())
}

#[test]
fn empty_input_renders_nothing() -> Result<(), anyhow::Error> {
    assert!(render_all(&[])?.is_empty());
    assert!(lines(&[]).next().is_none());
    Ok(())
}

#[test]
fn concatenated_records_match_independent_decoding() -> Result<(), anyhow::Error> {
    let first = [0x01, 0x02, 0x40, 0x64];
    let second = [0x21, 0x01, 0x2a];
    let both = [&first[..], &second[..]].concat();

    let expected = [render_all(&first)?, render_all(&second)?].concat();
    assert_eq!(expected, vec!["max_idle_timeout, 100", "0x21, [42]"]);
    assert_eq!(render_all(&both)?, expected);
    Ok(())
}

#[test]
fn length_mismatch_fails_the_whole_buffer() {
    let bytes = [0x01, 0x02, 0x40, 0x64, 0x02, 0x10, 0x00];
    assert!(matches!(
        render_all(&bytes),
        Err(DecodeError::Parse(ParseParameterError::PayloadLengthMismatch { .. }))
    ));

    let mut streamed = lines(&bytes);
    assert_eq!(
        streamed.next().map(|line| line.ok()),
        Some(Some("max_idle_timeout, 100".to_string()))
    );
    match streamed.next() {
        Some(Err(e)) => assert_eq!(
            e.to_string(),
            "invalid length of stateless_reset_token: expected 16 bytes, only 1 available"
        ),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(streamed.next().is_none());
}

#[test]
fn stray_byte_after_known_var_int_fails() {
    let bytes = [0x01, 0x02, 0x00, 0x64];
    assert!(matches!(
        render_all(&bytes),
        Err(DecodeError::Render(RenderError::MalformedKnownValue {
            source: MalformedValue::TrailingBytes { trailing: 1 },
            ..
        }))
    ));
}

#[test]
fn malformed_known_value_stops_streaming() {
    let bytes = [0x04, 0x04, 0x05, 0x01, 0x02, 0x03, 0x21, 0x01, 0x2a];
    let mut streamed = lines(&bytes);
    match streamed.next() {
        Some(Err(DecodeError::Render(RenderError::MalformedKnownValue { name, .. }))) => {
            assert_eq!(name, "initial_max_data")
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(streamed.next().is_none());
}
