use crate::config::SiteConfig;
use crate::Error;

#[test]
fn site_config_from_json() {
    let site = SiteConfig::from_json(
        r#"{
            "canonical_server": "https://wiki.example.org",
            "script_path": "/w/index.php",
            "article_path": "/wiki/$1",
            "local_interwikis": ["en"],
            "use_rc_patrol": true
        }"#,
    )
    .unwrap();
    assert_eq!(site.article_path.as_deref(), Some("/wiki/$1"));
    assert_eq!(site.local_interwikis, ["en"]);
    assert!(site.use_rc_patrol);
    assert!(!site.use_new_page_patrol);
}

#[test]
fn site_config_rejects_bad_server() {
    let res = SiteConfig::from_json(
        r#"{ "canonical_server": "not a url", "script_path": "/w/index.php" }"#,
    );
    assert!(matches!(res, Err(Error::InvalidUrl(_))));

    assert!(matches!(
        SiteConfig::new("not a url", "/w/index.php"),
        Err(Error::InvalidUrl(_))
    ));
}

#[test]
fn trailing_slash_is_normalized() {
    let site = SiteConfig::new("https://wiki.example.org/", "/w/index.php").unwrap();
    assert_eq!(site.canonical_server, "https://wiki.example.org");
}
