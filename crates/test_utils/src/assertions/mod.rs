//! Assertion utilities for testing

/// Assert that two byte sequences are equal
#[macro_export]
macro_rules! assert_bytes_eq {
    ($left:expr, $right:expr) => {
        assert_eq!(AsRef::<[u8]>::as_ref(&$left), AsRef::<[u8]>::as_ref(&$right));
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        assert_eq!(AsRef::<[u8]>::as_ref(&$left), AsRef::<[u8]>::as_ref(&$right), $($arg)+);
    };
}

/// Assert that the 32-byte ABI word at `index` of a buffer equals `expected`
#[macro_export]
macro_rules! assert_slot_eq {
    ($buf:expr, $index:expr, $expected:expr) => {{
        let start = $index * 32;
        let buf: &[u8] = AsRef::<[u8]>::as_ref(&$buf);
        assert!(
            buf.len() >= start + 32,
            "buffer of {} bytes has no slot {}",
            buf.len(),
            $index
        );
        assert_eq!(&buf[start..start + 32], AsRef::<[u8]>::as_ref(&$expected), "slot {}", $index);
    }};
}

/// Assert that a result is Err and that the error carries the given stable code
#[macro_export]
macro_rules! assert_err_code {
    ($expr:expr, $code:expr) => {
        match $expr {
            Ok(val) => panic!("Expected Err with code {}, got Ok: {:?}", $code, val),
            Err(err) => {
                assert_eq!(
                    $crate::agentid_types::error::ErrorCode::code(&err),
                    $code,
                    "unexpected error: {}",
                    err
                );
                err
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use agentid_types::error::DecodeError;

    #[test]
    fn slot_and_code_macros() {
        let mut buf = vec![0u8; 64];
        buf[63] = 9;
        let mut expected = [0u8; 32];
        expected[31] = 9;
        assert_slot_eq!(buf, 1, expected);
        assert_bytes_eq!(buf[..32].to_vec(), [0u8; 32]);

        let result: Result<(), DecodeError> = Err(DecodeError::TooShort { len: 1, need: 288 });
        let err = assert_err_code!(result, "DECODE_TOO_SHORT");
        assert!(err.to_string().contains("288"));
    }
}
