use std::fmt::Display;
use std::fmt::Formatter;

use num_bigint::BigUint;

#[derive(Clone, Copy, Debug, Default, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct U256([u128; 2]);

impl U256 {
    pub const MAX: U256 = U256([u128::MAX, u128::MAX]);

    pub fn new(high: u128, low: u128) -> U256 {
        U256([high, low])
    }

    /// The full 32-byte big-endian image, most significant byte first.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[..16].copy_from_slice(&self.0[0].to_be_bytes());
        bytes[16..].copy_from_slice(&self.0[1].to_be_bytes());
        bytes
    }

    /// The shortest big-endian representation: leading zero bytes
    /// stripped, empty for zero.
    pub fn to_bytes(&self) -> Vec<u8> {
        let bytes = self.to_be_bytes();
        let first_nonzero = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
        bytes[first_nonzero..].to_vec()
    }

    pub fn to_decimal(&self) -> String {
        BigUint::from_bytes_be(&self.to_be_bytes()).to_str_radix(10)
    }

    pub fn from_decimal(item: &str) -> U256 {
        let bytes = BigUint::parse_bytes(item.as_bytes(), 10)
            .unwrap_or_else(|| panic!("Invalid decimal number: {item}"))
            .to_bytes_be();
        assert!(bytes.len() <= 32, "{}", bytes.len());
        let mut data = [0u8; 32];
        data[32 - bytes.len()..].copy_from_slice(&bytes);
        let high = u128::from_be_bytes(*<&[u8; 16]>::try_from(&data[0..16]).unwrap());
        let low = u128::from_be_bytes(*<&[u8; 16]>::try_from(&data[16..32]).unwrap());
        U256([high, low])
    }
}

impl From<u128> for U256 {
    fn from(item: u128) -> Self {
        U256([0, item])
    }
}

impl From<&str> for U256 {
    fn from(item: &str) -> Self {
        if let Some(hex) = item.strip_prefix("0x") {
            assert!(hex.len() <= 64, "{}", hex.len());
            let (high_hex, low_hex) = if hex.len() > 32 {
                hex.split_at(hex.len() - 32)
            } else {
                ("", hex)
            };
            // disallow + and - prefixes
            assert!(
                high_hex.as_bytes().first() != Some(&b'+')
                    && high_hex.as_bytes().first() != Some(&b'-')
            );
            assert!(
                low_hex.as_bytes().first() != Some(&b'+')
                    && low_hex.as_bytes().first() != Some(&b'-')
            );
            let high = if high_hex.is_empty() {
                0
            } else {
                u128::from_str_radix(high_hex, 16).unwrap()
            };
            let low = if low_hex.is_empty() {
                0
            } else {
                u128::from_str_radix(low_hex, 16).unwrap()
            };
            U256([high, low])
        } else {
            U256::from_decimal(item)
        }
    }
}

impl Display for U256 {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.0[0] == 0 {
            write!(f, "{:#x}", self.0[1])
        } else {
            write!(f, "{:#x}{:032x}", self.0[0], self.0[1])
        }
    }
}

#[cfg(test)]
mod test {
    use super::U256;

    #[test]
    fn to_string() {
        assert_eq!(format!("{}", U256::from(0)), "0x0");
        assert_eq!(
            format!("{}", U256::from(u128::MAX)),
            "0xffffffffffffffffffffffffffffffff"
        );
    }

    #[test]
    fn compare() {
        assert!(U256::from(0) < U256::from(1));
        assert!(U256::from("0x100000000000000000000000000000000") > U256::from(1));
        assert!(U256::MAX > U256::new(1, u128::MAX));
    }

    #[test]
    fn from_hex() {
        assert_eq!(U256::from("0x"), U256::from(0));
        assert_eq!(U256::from("0x1"), U256::from(1));
        assert_eq!(U256::from("0x01"), U256::from(1));
        assert_eq!(
            U256::from("0x1fffffffffffffffffffffffffffffffe"),
            U256::new(1, u128::MAX - 1)
        );
        assert_eq!(
            U256::from("0x001fffffffffffffffffffffffffffffffe"),
            U256::new(1, u128::MAX - 1)
        );
        assert_eq!(
            U256::from("0x100000000000000000000000000000000"),
            U256::new(1, 0)
        );
    }

    #[test]
    fn from_decimal() {
        assert_eq!(U256::from("0"), U256::from(0));
        assert_eq!(U256::from("1234"), U256::from(1234));
        assert_eq!(
            U256::from("340282366920938463463374607431768211456"),
            U256::new(1, 0)
        );
        assert_eq!(U256::from("12").to_decimal(), "12");
        assert_eq!(
            U256::MAX.to_decimal(),
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
    }

    #[test]
    fn minimal_bytes() {
        assert_eq!(U256::from(0).to_bytes(), Vec::<u8>::new());
        assert_eq!(U256::from(1).to_bytes(), vec![1]);
        assert_eq!(U256::from(0x100).to_bytes(), vec![1, 0]);
        assert_eq!(U256::new(1, 0).to_bytes(), {
            let mut expected = vec![1];
            expected.extend([0; 16]);
            expected
        });
        assert_eq!(U256::MAX.to_bytes(), vec![0xff; 32]);
    }

    #[test]
    fn be_bytes() {
        let mut expected = [0u8; 32];
        expected[15] = 1;
        expected[31] = 2;
        assert_eq!(U256::new(1, 2).to_be_bytes(), expected);
    }
}
