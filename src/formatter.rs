//! Builds the colourful notification line for one change event.

use tracing::trace;

use crate::config::{FeedConfig, InterwikiPrefix, SiteConfig};
use crate::event::{ChangeEvent, ChangeType, OldNew};
use crate::irc::{self, BLUE, BOLD, BROWN, GREEN, GREY, ORANGE, RED, RESET, TEAL};
use crate::title::Title;

/// Transport limit for one line, trailing newline included.
const MAX_LINE_BYTES: usize = 500;

/// Formats one change event, or returns `None` when the event must not
/// reach the channel.
pub fn format_line(event: &ChangeEvent, feed: &FeedConfig, site: &SiteConfig) -> Option<String> {
    if event.ty == ChangeType::Categorize {
        // categorize events are never sent to the IRC feed (T127360)
        trace!(title = %event.title, "dropping categorize event");
        return None;
    }
    if event.ty == ChangeType::Log && event.log_action.as_deref() == Some("patrol") {
        trace!(title = %event.title, "dropping patrol log entry");
        return None;
    }

    let title = if event.ty == ChangeType::Log {
        Title::log(event.log_type.as_deref().unwrap_or(""))
    } else {
        Title::page(event.title.as_str())
    };
    let title = irc::cleanup(&title.prefixed_text());

    let url = permalink(event, site);
    let szdiff = size_diff(event);

    let mut user = irc::cleanup(&event.user);
    let (flag, comment) = if event.ty == ChangeType::Log {
        let action = event.log_action_comment.as_deref().unwrap_or("");
        let found = action.find(event.user.as_str()).filter(|_| !event.user.is_empty());
        let mut text = match found {
            // the acting user is already part of the action text; wrap
            // that occurrence in colour and drop the separate field
            Some(pos) => {
                user = String::new();
                format!(
                    "{}{GREEN}{}{RESET}{}",
                    &action[..pos],
                    event.user,
                    &action[pos + event.user.len()..],
                )
            }
            None => action.to_owned(),
        };
        if !event.comment.is_empty() {
            text.push_str(": ");
            text.push_str(&event.comment);
        }
        let flag = event.log_action.clone().unwrap_or_default();
        (flag, irc::cleanup(&text))
    } else {
        let mut flag = String::new();
        if event.patrolled != Some(true) && patrol_active(event.ty, site) {
            flag.push('!');
        }
        if event.ty == ChangeType::New {
            flag.push('N');
        }
        if event.minor {
            flag.push('M');
        }
        if event.bot {
            flag.push('B');
        }
        (flag, irc::cleanup(&event.comment))
    };

    let title_block = match interwiki_prefix(feed, site) {
        Some(prefix) => format!("{GREY}[[{GREEN}{prefix}:{ORANGE}{title}{GREY}]]"),
        None => format!("{GREY}[[{ORANGE}{title}{GREY}]]"),
    };

    let mut line = format!(
        "{title_block}{RED} {flag}{TEAL} {BLUE}{url}{RESET} {BROWN}*{RESET} \
         {GREEN}{user}{RESET} {BROWN}*{RESET} {szdiff} {TEAL}{comment}{RESET}\n"
    );
    irc::truncate_line(&mut line, MAX_LINE_BYTES);
    Some(line)
}

fn permalink(event: &ChangeEvent, site: &SiteConfig) -> String {
    if event.ty == ChangeType::Log {
        return match event.move_target() {
            // moves link to where the page went; an unparseable target
            // degrades to no link at all
            Some(target) => Title::from_text(target)
                .map(|t| t.canonical_url(site))
                .unwrap_or_default(),
            None => Title::page(event.title.as_str()).canonical_url(site),
        };
    }

    let revision = event.revision.unwrap_or_default();
    let this_id = revision.new.unwrap_or(0);
    let mut url = format!("{}{}", site.canonical_server, site.script_path);
    if event.ty == ChangeType::New {
        url.push_str(&format!("?oldid={this_id}"));
    } else {
        url.push_str(&format!("?diff={this_id}&oldid={}", revision.old.unwrap_or(0)));
    }
    if patrol_active(event.ty, site) {
        url.push_str(&format!("&rcid={}", event.id.unwrap_or(0)));
    }
    url
}

fn size_diff(event: &ChangeEvent) -> String {
    let (old, new) = match event.length {
        Some(OldNew {
            old: Some(old),
            new: Some(new),
        }) => (old, new),
        _ => return String::new(),
    };
    let diff = new as i64 - old as i64;
    if diff < -500 {
        // make large removals stand out
        format!("({BOLD}{diff}{BOLD})")
    } else if diff >= 0 {
        format!("(+{diff})")
    } else {
        format!("({diff})")
    }
}

fn patrol_active(ty: ChangeType, site: &SiteConfig) -> bool {
    site.use_rc_patrol || (ty == ChangeType::New && site.use_new_page_patrol)
}

fn interwiki_prefix<'a>(feed: &'a FeedConfig, site: &'a SiteConfig) -> Option<&'a str> {
    match &feed.add_interwiki_prefix {
        InterwikiPrefix::FirstLocal => site.local_interwikis.first().map(String::as_str),
        InterwikiPrefix::Literal(prefix) if !prefix.is_empty() => Some(prefix),
        _ => None,
    }
}
