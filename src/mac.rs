//! MAC address and prefix value types.

use std::fmt;
use std::str::FromStr;

use crate::error::MacgenError;

/// A 6-octet hardware address, displayed as lowercase `xx:xx:xx:xx:xx:xx`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Join a prefix with a 3-octet suffix.
    pub fn from_parts(prefix: Prefix, suffix: [u8; 3]) -> Self {
        let [a, b, c] = prefix.octets();
        let [d, e, f] = suffix;
        Self([a, b, c, d, e, f])
    }

    pub fn prefix(&self) -> [u8; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// The fixed first three octets shared by every address in a run.
///
/// Never `00:00:00`; that value is rejected on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Prefix([u8; 3]);

impl Prefix {
    pub fn new(octets: [u8; 3]) -> Result<Self, MacgenError> {
        if octets == [0, 0, 0] {
            return Err(MacgenError::InvalidPrefix {
                value: "00:00:00".into(),
                reason: "prefix should not be 00:00:00".into(),
            });
        }
        Ok(Self(octets))
    }

    pub fn octets(&self) -> [u8; 3] {
        self.0
    }
}

impl Default for Prefix {
    fn default() -> Self {
        Self([0xaa, 0xaa, 0xaa])
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}")
    }
}

impl FromStr for Prefix {
    type Err = MacgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| MacgenError::InvalidPrefix {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        if s.len() != 8 {
            return Err(invalid("expected 8 characters in xx:xx:xx form"));
        }

        let mut octets = [0u8; 3];
        let mut parts = s.split(':');
        for octet in octets.iter_mut() {
            let part = parts
                .next()
                .ok_or_else(|| invalid("expected three colon-separated octets"))?;
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid(&format!("'{part}' is not a two-digit hex octet")));
            }
            *octet = u8::from_str_radix(part, 16)
                .map_err(|_| invalid(&format!("'{part}' is not a two-digit hex octet")))?;
        }
        if parts.next().is_some() {
            return Err(invalid("expected three colon-separated octets"));
        }

        Self::new(octets)
    }
}
