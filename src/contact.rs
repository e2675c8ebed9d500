use url::form_urlencoded::byte_serialize;
use url::Url;

use crate::profile::Profile;
use crate::{DirectoryError, Result};

pub const CONTACT_SUBJECT: &str = "お問い合わせ";
pub const CONTACT_BODY: &str = "こんにちは、";

/// `mailto:` URL addressed to the profile with the fixed subject and
/// greeting. Handing it to a mail client is up to the caller.
pub fn mailto(profile: &Profile) -> Result<Url> {
    let email = profile.email.trim();
    let refuse = |reason| DirectoryError::Contact {
        id: profile.id.to_string(),
        reason,
    };
    if email.is_empty() {
        return Err(refuse("no email address"));
    }
    // the query is replaced below and would swallow anything after these
    if email.contains(['?', '#']) {
        return Err(refuse("email address contains '?' or '#'"));
    }

    let mut url = Url::parse(&format!("mailto:{}", email))?;
    url.set_query(Some(&format!(
        "subject={}&body={}",
        encode(CONTACT_SUBJECT),
        encode(CONTACT_BODY)
    )));
    Ok(url)
}

// mail clients expect %20 rather than the form encoding '+'
fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_mailto_with_subject_and_body() {
        let profile = Profile::from_value(json!({
            "id": 1,
            "email": "aoi@example.com"
        }))
        .unwrap();

        let url = mailto(&profile).unwrap();
        assert_eq!(url.scheme(), "mailto");
        assert_eq!(url.path(), "aoi@example.com");
        assert_eq!(
            url.as_str(),
            "mailto:aoi@example.com?subject=%E3%81%8A%E5%95%8F%E3%81%84%E5%90%88%E3%82%8F%E3%81%9B&body=%E3%81%93%E3%82%93%E3%81%AB%E3%81%A1%E3%81%AF%E3%80%81"
        );

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("subject".to_owned(), CONTACT_SUBJECT.to_owned()),
                ("body".to_owned(), CONTACT_BODY.to_owned()),
            ]
        );
    }

    #[test]
    fn missing_email_is_reported() {
        let profile = Profile::from_value(json!({"id": 1})).unwrap();
        let error = mailto(&profile).unwrap_err();

        assert!(matches!(error, DirectoryError::Contact { .. }));
        assert_eq!(
            error.to_string(),
            "Cannot contact profile 1: no email address"
        );
    }

    #[test]
    fn address_with_own_query_is_refused() {
        let profile = Profile::from_value(json!({
            "id": 2,
            "email": "a@b.com?cc=x"
        }))
        .unwrap();

        assert!(matches!(
            mailto(&profile),
            Err(DirectoryError::Contact { .. })
        ));
    }

    #[test]
    fn spaces_are_percent_encoded() {
        assert_eq!(encode("a b+c"), "a%20b%2Bc");
    }
}
