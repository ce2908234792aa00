use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

/// Rejects strings that are empty once surrounding whitespace is removed.
///
/// Used as a `custom` validator on optional text fields: `None` is never
/// passed in, so absence stays valid.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Drops blank entries from an optional list of strings, keeping order.
/// A missing list becomes an empty one.
pub fn discard_blank_entries(values: Option<Vec<String>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .collect()
}

/// Flattens `ValidationErrors` into `field: message` strings, sorted by field
/// so responses are stable.
pub fn field_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .clone()
                    .unwrap_or_else(|| Cow::Owned(format!("invalid value ({})", e.code)));
                format!("{}: {}", field, message)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(validate_not_blank("Launch Event").is_ok());
        assert!(validate_not_blank("  x ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank(" \t\n ").is_err());
    }

    #[test]
    fn test_discard_blank_entries_keeps_order() {
        let values = vec![
            "a.png".to_string(),
            "   ".to_string(),
            "b.png".to_string(),
            "".to_string(),
        ];
        assert_eq!(
            discard_blank_entries(Some(values)),
            vec!["a.png".to_string(), "b.png".to_string()]
        );
        assert!(discard_blank_entries(None).is_empty());
    }

    #[test]
    fn test_field_messages_are_prefixed_and_sorted() {
        let mut errors = ValidationErrors::new();
        let mut title = ValidationError::new("blank");
        title.message = Some(Cow::Borrowed("title cannot be empty"));
        errors.add("ca_title", title);
        errors.add("ca_link", ValidationError::new("length"));

        assert_eq!(
            field_messages(&errors),
            vec![
                "ca_link: invalid value (length)".to_string(),
                "ca_title: title cannot be empty".to_string(),
            ]
        );
    }
}
