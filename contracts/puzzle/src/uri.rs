use soroban_sdk::{Env, String};

use crate::errors::Error;

/// Longest base or override URI the contract accepts.
pub const MAX_URI_LEN: u32 = 200;

// u64::MAX has 20 decimal digits
const MAX_DIGITS: usize = 20;

pub fn validate(uri: &String) -> Result<(), Error> {
    if uri.len() > MAX_URI_LEN {
        return Err(Error::UriTooLong);
    }
    Ok(())
}

/// Appends the decimal form of `token_id` to `base`.
pub fn with_token_id(env: &Env, base: &String, token_id: u64) -> String {
    let mut buf = [0u8; MAX_URI_LEN as usize + MAX_DIGITS];
    let len = base.len() as usize;
    base.copy_into_slice(&mut buf[..len]);
    let digits = write_decimal(token_id, &mut buf[len..]);
    String::from_bytes(env, &buf[..len + digits])
}

fn write_decimal(mut value: u64, out: &mut [u8]) -> usize {
    let mut reversed = [0u8; MAX_DIGITS];
    let mut count = 0;
    loop {
        reversed[count] = b'0' + (value % 10) as u8;
        value /= 10;
        count += 1;
        if value == 0 {
            break;
        }
    }
    for i in 0..count {
        out[i] = reversed[count - 1 - i];
    }
    count
}

#[cfg(test)]
mod test {
    use super::*;

    fn decimal(value: u64) -> ([u8; MAX_DIGITS], usize) {
        let mut out = [0u8; MAX_DIGITS];
        let n = write_decimal(value, &mut out);
        (out, n)
    }

    #[test]
    fn test_write_decimal() {
        let (out, n) = decimal(0);
        assert_eq!(&out[..n], b"0");

        let (out, n) = decimal(1207);
        assert_eq!(&out[..n], b"1207");

        let (out, n) = decimal(u64::MAX);
        assert_eq!(&out[..n], b"18446744073709551615");
    }

    #[test]
    fn test_with_token_id() {
        let env = Env::default();
        let base = String::from_str(&env, "ipfs://Qmc2cjnm3xdyPoY4X82uLUrfeb6KdabxKTvoKHRcrGRRR9/");
        assert_eq!(
            with_token_id(&env, &base, 42),
            String::from_str(&env, "ipfs://Qmc2cjnm3xdyPoY4X82uLUrfeb6KdabxKTvoKHRcrGRRR9/42")
        );

        let empty = String::from_str(&env, "");
        assert_eq!(with_token_id(&env, &empty, 7), String::from_str(&env, "7"));
    }

    #[test]
    fn test_validate() {
        let env = Env::default();
        let ok = String::from_bytes(&env, &[b'a'; MAX_URI_LEN as usize]);
        assert_eq!(validate(&ok), Ok(()));

        let long = String::from_bytes(&env, &[b'a'; MAX_URI_LEN as usize + 1]);
        assert_eq!(validate(&long), Err(Error::UriTooLong));
    }
}
