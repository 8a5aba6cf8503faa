//! Byte-wise substitution cipher used to scramble workload files.
//!
//! ASCII letters are shifted three places forward (wrapping within their
//! case), ASCII digits are reflected about '9' and every other byte passes
//! through untouched. This is an obfuscation step for the benchmark workload
//! and provides no confidentiality.

const SHIFT: u8 = 3;

/// Encrypt a single byte
pub fn encrypt_byte(b: u8) -> u8 {
    match b {
        b'A'..=b'Z' => b'A' + (b - b'A' + SHIFT) % 26,
        b'a'..=b'z' => b'a' + (b - b'a' + SHIFT) % 26,
        b'0'..=b'9' => reflect_digit(b),
        _ => b,
    }
}

/// Decrypt a single byte (inverse of [`encrypt_byte`])
pub fn decrypt_byte(b: u8) -> u8 {
    match b {
        b'A'..=b'Z' => b'A' + (b - b'A' + 26 - SHIFT) % 26,
        b'a'..=b'z' => b'a' + (b - b'a' + 26 - SHIFT) % 26,
        b'0'..=b'9' => reflect_digit(b),
        _ => b,
    }
}

// '0' <-> '9', '1' <-> '8', ...; its own inverse
fn reflect_digit(b: u8) -> u8 {
    b'9' - (b - b'0')
}

pub fn encrypt(data: &[u8]) -> Vec<u8> {
    data.iter().map(|&b| encrypt_byte(b)).collect()
}

pub fn decrypt(data: &[u8]) -> Vec<u8> {
    data.iter().map(|&b| decrypt_byte(b)).collect()
}

/// In-place variant used by the streaming file helpers
pub fn encrypt_in_place(data: &mut [u8]) {
    for b in data {
        *b = encrypt_byte(*b);
    }
}

pub fn decrypt_in_place(data: &mut [u8]) {
    for b in data {
        *b = decrypt_byte(*b);
    }
}

/// Encrypt a line of text. Only ASCII bytes are substituted, so multi-byte
/// UTF-8 sequences survive unchanged.
pub fn encrypt_line(line: &str) -> String {
    line.chars()
        .map(|c| if c.is_ascii() { encrypt_byte(c as u8) as char } else { c })
        .collect()
}

pub fn decrypt_line(line: &str) -> String {
    line.chars()
        .map(|c| if c.is_ascii() { decrypt_byte(c as u8) as char } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_letters_shift_by_three() {
        assert_eq!(encrypt_line("abc xyz"), "def abc");
        assert_eq!(encrypt_line("ABC XYZ"), "DEF ABC");
        assert_eq!(decrypt_line("def abc"), "abc xyz");
    }

    #[test]
    fn test_digits_reflect() {
        assert_eq!(encrypt_line("0123456789"), "9876543210");
        assert_eq!(decrypt_line("9876543210"), "0123456789");
    }

    #[test]
    fn test_other_bytes_untouched() {
        let data = b"\x00\xff \n-_!@{}";
        assert_eq!(encrypt(data), data.to_vec());
        assert_eq!(encrypt_line("ñandú"), "ñdqgú");
    }

    #[test]
    fn test_sample_message() {
        let message = "PRUEBA DE ARCHIVO CON CANCION DE BISFP 8038";
        let encrypted = encrypt_line(message);
        assert_eq!(encrypted, "SUXHED GH DUFKLYR FRQ FDQFLRQ GH ELVIS 1961");
        assert_eq!(decrypt_line(&encrypted), message);
    }

    #[test]
    fn test_in_place_matches_owned() {
        let mut data = b"Hola Mundo 2025".to_vec();
        encrypt_in_place(&mut data);
        assert_eq!(data, encrypt(b"Hola Mundo 2025"));
        decrypt_in_place(&mut data);
        assert_eq!(data, b"Hola Mundo 2025");
    }

    proptest! {
        #[test]
        fn roundtrip_restores_input(data in proptest::collection::vec(any::<u8>(), 0..512)) {
            prop_assert_eq!(decrypt(&encrypt(&data)), data);
        }
    }
}
