//! # Checksum Engine
//!
//! Five-letter checksum over `shard.realm.num`, salted with the ledger id.
//!
//! ```text
//! digits:  '0'..'9' -> 0..9, '.' -> 10
//! s   = fold(w*s + d) mod 26^3              over all digits
//! s0  = sum of even-position digits mod 11
//! s1  = sum of odd-position digits mod 11
//! sh  = fold(w*sh + b) mod 26^5             over ledger id ++ [0; 6]
//! c   = (((len mod 5)*11 + s0)*11 + s1)*26^3 + s + sh   mod 26^5
//! c   = c * 1_000_003 mod 26^5
//! ```
//!
//! `c` is written in base 26 with `a` as zero, most significant letter first.

use std::fmt;
use std::str::FromStr;

use crate::{Error, LedgerId};

const W: u64 = 31;
const P3: u64 = 26 * 26 * 26;
const P5: u64 = 26 * 26 * 26 * 26 * 26;
const M: u64 = 1_000_003;
const LEN: usize = 5;

/// Exactly five lowercase ASCII letters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checksum([u8; LEN]);

impl Checksum {
    fn from_bytes(bytes: [u8; LEN]) -> Option<Self> {
        bytes.iter().all(u8::is_ascii_lowercase).then_some(Self(bytes))
    }

    pub fn as_str(&self) -> &str {
        // only ever holds ASCII lowercase letters
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Checksum {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <[u8; LEN]>::try_from(s.as_bytes())
            .ok()
            .and_then(Self::from_bytes)
            .ok_or_else(|| {
                Error::basic_parse(format!("checksum `{s}` must be exactly 5 lowercase letters"))
            })
    }
}

impl fmt::Debug for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the checksum of `shard.realm.num` for `ledger_id`.
pub fn compute(ledger_id: &LedgerId, shard: u64, realm: u64, num: u64) -> Checksum {
    let address = format!("{shard}.{realm}.{num}");

    let mut s = 0;
    let mut s0 = 0;
    let mut s1 = 0;

    for (i, byte) in address.bytes().enumerate() {
        let digit = if byte == b'.' { 10 } else { u64::from(byte - b'0') };

        s = (W * s + digit) % P3;
        if i % 2 == 0 {
            s0 = (s0 + digit) % 11;
        } else {
            s1 = (s1 + digit) % 11;
        }
    }

    let sh = ledger_id
        .as_bytes()
        .iter()
        .copied()
        .chain([0; 6])
        .fold(0, |sh, byte| (W * sh + u64::from(byte)) % P5);

    let len = address.len() as u64;
    let mut c = ((((len % 5) * 11 + s0) * 11 + s1) * P3 + s + sh) % P5;
    c = (c * M) % P5;

    let mut letters = [b'a'; LEN];
    for letter in letters.iter_mut().rev() {
        *letter = b'a' + (c % 26) as u8;
        c /= 26;
    }

    Checksum(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_checksums() {
        assert_eq!(compute(&LedgerId::mainnet(), 0, 0, 123).as_str(), "vfmkw");
        assert_eq!(compute(&LedgerId::testnet(), 0, 0, 123).as_str(), "esxsf");
        assert_eq!(compute(&LedgerId::previewnet(), 0, 0, 123).as_str(), "ogizo");
    }

    #[test]
    fn test_checksum_parse() {
        assert_eq!("vfmkw".parse::<Checksum>().unwrap().to_string(), "vfmkw");
        assert!("ntjl".parse::<Checksum>().is_err());
        assert!("ntjl1".parse::<Checksum>().is_err());
        assert!("VFMKW".parse::<Checksum>().is_err());
        assert!("vfmkwx".parse::<Checksum>().is_err());
    }

    #[test]
    fn test_ledger_changes_checksum() {
        let custom = LedgerId::from_bytes(vec![0xde, 0xad]);
        assert_ne!(compute(&custom, 0, 0, 123), compute(&LedgerId::mainnet(), 0, 0, 123));
    }
}
