//! URL helpers.

/// Path segment between the base URL and the collection name.
pub const SOLR_PATH: &str = "solr";

/// Build the JSON update URL for a collection.
///
/// A trailing `/` on `base` is ignored.
///
/// `update_url("http://solr:8983", "users")` gives
/// `http://solr:8983/solr/users/update?commit=true`.
pub fn update_url(base: &str, collection: &str) -> String {
    format!(
        "{}/{SOLR_PATH}/{collection}/update?commit=true",
        base.trim_end_matches('/')
    )
}

/// Hide the userinfo secret of a Solr base URL before it is logged.
///
/// `user:password@` keeps the user and masks the password. A bare `token@`
/// has no separate secret, so the whole userinfo is masked.
pub fn mask_credentials(url: &str) -> String {
    let authority_start = url.find("://").map(|p| p + 3).unwrap_or(0);
    let authority_end = url[authority_start..]
        .find('/')
        .map(|p| authority_start + p)
        .unwrap_or(url.len());

    let Some(at) = url[authority_start..authority_end].rfind('@') else {
        return url.to_string();
    };
    let at = authority_start + at;

    match url[authority_start..at].find(':') {
        Some(colon) => format!("{}:***{}", &url[..authority_start + colon], &url[at..]),
        None => format!("{}***{}", &url[..authority_start], &url[at..]),
    }
}
