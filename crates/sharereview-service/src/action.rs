//! Composite action tokens (`<app>_<url-encoded action>`).

use sharereview_core::error::AppError;
use sharereview_core::result::AppResult;

pub use sharereview_core::types::namespace::{FILES_NAMESPACE, SEPARATOR};

/// Builds and splits the composite ids the feed hands out for deletion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionEncoder;

impl ActionEncoder {
    /// Encode `action` under `app`.
    ///
    /// `app` must not contain the separator; the action may contain anything.
    pub fn encode(app: &str, action: &str) -> String {
        format!("{app}{SEPARATOR}{}", urlencoding::encode(action))
    }

    /// Split a composite id into `(app, action)`.
    pub fn decode(composite_id: &str) -> AppResult<(String, String)> {
        let (app, encoded) = composite_id.split_once(SEPARATOR).ok_or_else(|| {
            AppError::validation(format!("Malformed share id '{composite_id}': missing separator"))
        })?;

        let action = urlencoding::decode(encoded).map_err(|e| {
            AppError::validation(format!("Malformed share id '{composite_id}': {e}"))
        })?;

        Ok((app.to_string(), action.into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_share_token_is_bit_exact() {
        assert_eq!(
            ActionEncoder::encode(FILES_NAMESPACE, "ocMailShare:12"),
            "files_ocMailShare%3A12"
        );
        assert_eq!(ActionEncoder::encode("deck", "deck:7"), "deck_deck%3A7");
    }

    #[test]
    fn test_decode_inverts_encode() {
        let cases = [
            ("files", "ocinternal:42"),
            ("spreed", "room_share with spaces/and?query=1&x"),
            ("deck", "a_b_c"),
            ("circles", "ünïcödé:✓"),
            ("talk", ""),
        ];
        for (app, action) in cases {
            let token = ActionEncoder::encode(app, action);
            let (decoded_app, decoded_action) = ActionEncoder::decode(&token).unwrap();
            assert_eq!(decoded_app, app);
            assert_eq!(decoded_action, action);
        }
    }

    #[test]
    fn test_decode_splits_on_first_separator() {
        let (app, action) = ActionEncoder::decode("files_ocinternal%3A1_extra").unwrap();
        assert_eq!(app, "files");
        assert_eq!(action, "ocinternal:1_extra");
    }

    #[test]
    fn test_missing_separator_is_rejected() {
        let err = ActionEncoder::decode("filesocinternal").unwrap_err();
        assert_eq!(err.kind, sharereview_core::error::ErrorKind::Validation);
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        assert!(ActionEncoder::decode("files_%FF%FE").is_err());
    }
}
