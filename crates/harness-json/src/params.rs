//! Request parameter formatting for outbound harness posts.

use crate::{encode, EncodeError, Value};

/// Replaces every parameter value with its encoded JSON text.
///
/// Keys and their order are kept as given.
pub fn serialize_params<K: AsRef<str>>(
    params: &[(K, Value)],
) -> Result<Vec<(String, String)>, EncodeError> {
    params
        .iter()
        .map(|(key, value)| encode(value).map(|text| (key.as_ref().to_owned(), text)))
        .collect()
}

/// Builds an `application/x-www-form-urlencoded` body.
pub fn form_urlencode(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorLike;

    #[test]
    fn params_are_encoded_per_key() {
        let params = vec![
            ("id", Value::Str("7".into())),
            ("response", Value::Sequence(vec![1.into(), ErrorLike::new("x").into()])),
            ("done", Value::Bool(true)),
        ];
        let out = serialize_params(&params).unwrap();
        assert_eq!(
            out,
            vec![
                ("id".to_string(), r#""7""#.to_string()),
                ("response".to_string(), r#"[1,{"message":"x"}]"#.to_string()),
                ("done".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn form_body_escapes_reserved_bytes() {
        let pairs = vec![
            ("data".to_string(), r#"{"a":"b c"}"#.to_string()),
            ("k&=".to_string(), "é".to_string()),
        ];
        assert_eq!(
            form_urlencode(&pairs),
            "data=%7B%22a%22%3A%22b+c%22%7D&k%26%3D=%C3%A9"
        );
    }

    #[test]
    fn form_body_decodes_back_to_encoded_params() {
        let params = vec![("response", Value::Str("a b&c=d".into()))];
        let body = form_urlencode(&serialize_params(&params).unwrap());
        let decoded: Vec<(String, String)> = form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(
            decoded,
            vec![("response".to_string(), r#""a b&c=d""#.to_string())]
        );
    }

    #[test]
    fn form_body_empty() {
        assert_eq!(form_urlencode(&[]), "");
    }
}
