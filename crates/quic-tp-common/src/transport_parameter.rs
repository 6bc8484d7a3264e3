use std::{borrow::Cow, collections::HashMap};

use once_cell::sync::Lazy;

/// Transport parameters this crate knows by name.
///
/// https://www.rfc-editor.org/rfc/rfc9000.html#section-18.2
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u64)]
pub enum KnownParameter {
    OriginalDestinationConnectionId = 0x00,
    MaxIdleTimeout = 0x01,
    // This parameter is a sequence of 16 bytes
    StatelessResetToken = 0x02,
    MaxUdpPayloadSize = 0x03,
    InitialMaxData = 0x04,
    InitialMaxStreamDataBidiLocal = 0x05,
    InitialMaxStreamDataBidiRemote = 0x06,
    InitialMaxStreamDataUni = 0x07,
    InitialMaxStreamsBidi = 0x08,
    InitialMaxStreamsUni = 0x09,
    AckDelayExponent = 0x0a,
    MaxAckDelay = 0x0b,
    // This parameter is a zero-length value.
    DisableActiveMigration = 0x0c,
    PreferredAddress = 0x0d,
    ActiveConnectionIdLimit = 0x0e,
    InitialSourceConnectionId = 0x0f,
    RetrySourceConnectionId = 0x10,
    // RFC 9221
    MaxDatagramFrameSize = 0x20,
    // Not IANA registered, 0x40 is used temporarily (RFC 9000 section 22.3)
    ExtraStreamEncryption = 0x40,
}

impl KnownParameter {
    pub const ALL: [KnownParameter; 19] = [
        Self::OriginalDestinationConnectionId,
        Self::MaxIdleTimeout,
        Self::StatelessResetToken,
        Self::MaxUdpPayloadSize,
        Self::InitialMaxData,
        Self::InitialMaxStreamDataBidiLocal,
        Self::InitialMaxStreamDataBidiRemote,
        Self::InitialMaxStreamDataUni,
        Self::InitialMaxStreamsBidi,
        Self::InitialMaxStreamsUni,
        Self::AckDelayExponent,
        Self::MaxAckDelay,
        Self::DisableActiveMigration,
        Self::PreferredAddress,
        Self::ActiveConnectionIdLimit,
        Self::InitialSourceConnectionId,
        Self::RetrySourceConnectionId,
        Self::MaxDatagramFrameSize,
        Self::ExtraStreamEncryption,
    ];

    pub fn id(&self) -> u64 {
        *self as u64
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::OriginalDestinationConnectionId => "original_destination_connection_id",
            Self::MaxIdleTimeout => "max_idle_timeout",
            Self::StatelessResetToken => "stateless_reset_token",
            Self::MaxUdpPayloadSize => "max_udp_payload_size",
            Self::InitialMaxData => "initial_max_data",
            Self::InitialMaxStreamDataBidiLocal => "initial_max_stream_data_bidi_local",
            Self::InitialMaxStreamDataBidiRemote => "initial_max_stream_data_bidi_remote",
            Self::InitialMaxStreamDataUni => "initial_max_stream_data_uni",
            Self::InitialMaxStreamsBidi => "initial_max_streams_bidi",
            Self::InitialMaxStreamsUni => "initial_max_streams_uni",
            Self::AckDelayExponent => "ack_delay_exponent",
            Self::MaxAckDelay => "max_ack_delay",
            Self::DisableActiveMigration => "disable_active_migration",
            Self::PreferredAddress => "preferred_address",
            Self::ActiveConnectionIdLimit => "active_connection_id_limit",
            Self::InitialSourceConnectionId => "initial_source_connection_id",
            Self::RetrySourceConnectionId => "retry_source_connection_id",
            Self::MaxDatagramFrameSize => "max_datagram_frame_size",
            Self::ExtraStreamEncryption => "extra_stream_encryption",
        }
    }

    /// Whether the payload of this parameter is a single var int.
    pub fn is_var_int_valued(&self) -> bool {
        matches!(
            self,
            Self::MaxIdleTimeout
                | Self::MaxUdpPayloadSize
                | Self::InitialMaxData
                | Self::InitialMaxStreamDataBidiLocal
                | Self::InitialMaxStreamDataBidiRemote
                | Self::InitialMaxStreamDataUni
                | Self::InitialMaxStreamsBidi
                | Self::InitialMaxStreamsUni
                | Self::AckDelayExponent
                | Self::MaxAckDelay
                | Self::ActiveConnectionIdLimit
                | Self::MaxDatagramFrameSize
        )
    }

    pub fn from_id(id: u64) -> Option<Self> {
        BY_ID.get(&id).copied()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        BY_NAME.get(name).copied()
    }
}

static BY_ID: Lazy<HashMap<u64, KnownParameter>> = Lazy::new(|| {
    KnownParameter::ALL
        .iter()
        .map(|parameter| (parameter.id(), *parameter))
        .collect()
});

static BY_NAME: Lazy<HashMap<&'static str, KnownParameter>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(KnownParameter::ALL.len());
    for parameter in KnownParameter::ALL {
        let previous = map.insert(parameter.name(), parameter);
        assert!(
            previous.is_none(),
            "duplicated transport parameter name: {}",
            parameter.name()
        );
    }
    map
});

/// Name of the parameter, or its id as `0x`-prefixed hex when unknown.
pub fn display_name(id: u64) -> Cow<'static, str> {
    match KnownParameter::from_id(id) {
        Some(parameter) => Cow::Borrowed(parameter.name()),
        None => Cow::Owned(format!("{:#04x}", id)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{display_name, KnownParameter};

    #[test]
    fn names_and_ids_are_unique() {
        let names: HashSet<_> = KnownParameter::ALL.iter().map(|p| p.name()).collect();
        let ids: HashSet<_> = KnownParameter::ALL.iter().map(|p| p.id()).collect();
        assert_eq!(names.len(), KnownParameter::ALL.len());
        assert_eq!(ids.len(), KnownParameter::ALL.len());
    }

    #[test]
    fn lookup_in_both_directions() {
        for parameter in KnownParameter::ALL {
            assert_eq!(KnownParameter::from_id(parameter.id()), Some(parameter));
            assert_eq!(KnownParameter::from_name(parameter.name()), Some(parameter));
        }
        assert_eq!(
            KnownParameter::from_name("max_datagram_frame_size").map(|p| p.id()),
            Some(0x20)
        );
        assert_eq!(KnownParameter::from_id(0x11), None);
        assert_eq!(KnownParameter::from_name("grease"), None);
    }

    #[test]
    fn var_int_valued_set() {
        let var_int_valued: Vec<u64> = KnownParameter::ALL
            .iter()
            .filter(|p| p.is_var_int_valued())
            .map(|p| p.id())
            .collect();
        assert_eq!(
            var_int_valued,
            vec![0x01, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0e, 0x20]
        );
    }

    #[test]
    fn ack_delay_exponent_uses_rfc_spelling() {
        assert_eq!(KnownParameter::AckDelayExponent.name(), "ack_delay_exponent");
        assert_eq!(display_name(0x0a), "ack_delay_exponent");
        assert_eq!(KnownParameter::from_name("ack-delay_exponent"), None);
    }

    #[test]
    fn display_name_falls_back_to_hex() {
        assert_eq!(display_name(0x01), "max_idle_timeout");
        assert_eq!(display_name(0x21), "0x21");
        assert_eq!(display_name(0x5), "initial_max_stream_data_bidi_local");
        assert_eq!(display_name(0x7), "initial_max_stream_data_uni");
        assert_eq!(display_name(0x11), "0x11");
        assert_eq!(display_name(0x1a2b), "0x1a2b");
    }
}
