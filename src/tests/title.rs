use crate::config::SiteConfig;
use crate::title::Title;
use crate::Error;

fn site() -> SiteConfig {
    SiteConfig::new("https://wiki.example.org", "/w/index.php").unwrap()
}

#[test]
fn canonical_url_query_and_pretty_forms() {
    let title = Title::page("Bar Baz");
    assert_eq!(
        title.canonical_url(&site()),
        "https://wiki.example.org/w/index.php?title=Bar_Baz"
    );

    let pretty = site().article_path("/wiki/$1");
    assert_eq!(
        title.canonical_url(&pretty),
        "https://wiki.example.org/wiki/Bar_Baz"
    );
}

#[test]
fn url_encoding_keeps_colons_and_slashes() {
    let title = Title::page("Talk:Foo/Archive 1");
    assert_eq!(
        title.canonical_url(&site()),
        "https://wiki.example.org/w/index.php?title=Talk:Foo/Archive_1"
    );

    let title = Title::page("C&D?");
    assert_eq!(
        title.canonical_url(&site()),
        "https://wiki.example.org/w/index.php?title=C%26D%3F"
    );
}

#[test]
fn from_text_validates() {
    assert!(matches!(Title::from_text(""), Err(Error::BadTitle(_))));
    assert!(matches!(Title::from_text("   "), Err(Error::BadTitle(_))));
    assert!(matches!(Title::from_text("[[Foo]]"), Err(Error::BadTitle(_))));
    assert!(matches!(Title::from_text("a#b"), Err(Error::BadTitle(_))));
    assert!(matches!(Title::from_text("a\u{0}b"), Err(Error::BadTitle(_))));

    assert_eq!(Title::from_text("Bar_Baz").unwrap(), Title::page("Bar Baz"));
    assert_eq!(Title::from_text(" Foo ").unwrap(), Title::page("Foo"));
}

#[test]
fn log_title_is_the_literal_special_path() {
    let title = Title::log("move");
    assert_eq!(title.prefixed_text(), "Special:Log/move");
    assert_eq!(
        title.canonical_url(&site()),
        "https://wiki.example.org/w/index.php?title=Special:Log/move"
    );
}
