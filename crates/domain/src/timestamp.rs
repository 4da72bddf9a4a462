use chrono::{DateTime, FixedOffset, Utc};
use std::fmt;
use thiserror::Error;

/// Seconds between 0001-01-01T00:00:00Z and the Unix epoch.
const UNIX_TO_ABSOLUTE: i64 = 62_135_596_800;

const BINARY_VERSION_V1: u8 = 1;
const BINARY_VERSION_V2: u8 = 2;

/// Zone offset marker meaning "UTC" in the binary encoding.
const UTC_OFFSET_MINUTES: i16 = -1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("unexpected zone offset {0}s: cannot be encoded")]
    UnexpectedZoneOffset(i32),
}

/// Capture time of a packet, carrying the zone offset it was recorded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaptureTimestamp(DateTime<FixedOffset>);

impl CaptureTimestamp {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self(at)
    }

    pub fn now() -> Self {
        Self(Utc::now().fixed_offset())
    }

    /// UTC timestamp from seconds and nanoseconds since the Unix epoch.
    pub fn from_unix(secs: i64, nanos: u32) -> Option<Self> {
        DateTime::from_timestamp(secs, nanos).map(|at| Self(at.fixed_offset()))
    }

    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    /// Encodes the timestamp into its compact binary form.
    ///
    /// Layout: version byte, big-endian `i64` seconds since
    /// 0001-01-01T00:00:00Z, big-endian `i32` nanoseconds, big-endian `i16`
    /// zone offset in minutes (`-1` for UTC). Offsets with a seconds
    /// component use version 2, which appends the offset seconds as one byte.
    ///
    /// An offset that truncates to exactly -1 minute collides with the UTC
    /// marker and is rejected.
    pub fn to_binary(&self) -> Result<Vec<u8>, TimestampError> {
        let offset = self.0.offset().local_minus_utc();

        let mut version = BINARY_VERSION_V1;
        let mut offset_sec: i8 = 0;
        let offset_min = if offset == 0 {
            UTC_OFFSET_MINUTES
        } else {
            if offset % 60 != 0 {
                version = BINARY_VERSION_V2;
                offset_sec = (offset % 60) as i8;
            }
            let minutes = offset / 60;
            if minutes == -1 || minutes < i16::MIN as i32 || minutes > i16::MAX as i32 {
                return Err(TimestampError::UnexpectedZoneOffset(offset));
            }
            minutes as i16
        };

        let secs = self.0.timestamp() + UNIX_TO_ABSOLUTE;
        let nanos = self.0.timestamp_subsec_nanos() as i32;

        let mut buf = Vec::with_capacity(16);
        buf.push(version);
        buf.extend_from_slice(&secs.to_be_bytes());
        buf.extend_from_slice(&nanos.to_be_bytes());
        buf.extend_from_slice(&offset_min.to_be_bytes());
        if version == BINARY_VERSION_V2 {
            buf.push(offset_sec as u8);
        }
        Ok(buf)
    }
}

impl From<DateTime<Utc>> for CaptureTimestamp {
    fn from(at: DateTime<Utc>) -> Self {
        Self(at.fixed_offset())
    }
}

impl From<DateTime<FixedOffset>> for CaptureTimestamp {
    fn from(at: DateTime<FixedOffset>) -> Self {
        Self(at)
    }
}

impl fmt::Display for CaptureTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
