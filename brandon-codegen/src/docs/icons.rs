//! Site icons for author links.

use url::Url;

/// Material for MkDocs icon shortcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Mail,
    Github,
    Twitter,
    Linkedin,
    Discord,
    StackOverflow,
    Web,
}

impl Icon {
    /// Sites recognized from a host label, in lookup order.
    const SITES: [(&'static str, Icon); 5] = [
        ("github", Icon::Github),
        ("twitter", Icon::Twitter),
        ("linkedin", Icon::Linkedin),
        ("discord", Icon::Discord),
        ("stackoverflow", Icon::StackOverflow),
    ];

    pub fn shortcode(&self) -> &'static str {
        match self {
            Icon::Mail => ":material-mail:",
            Icon::Github => ":material-github:",
            Icon::Twitter => ":material-twitter:",
            Icon::Linkedin => ":material-linkedin:",
            Icon::Discord => ":simple-discord:",
            Icon::StackOverflow => ":material-stack-overflow:",
            Icon::Web => ":material-web:",
        }
    }

    /// Guess the icon of a site from the labels of its host name, falling back
    /// to a generic web icon.
    pub fn guess(url: &str) -> Icon {
        let Some(host) = Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_lowercase))
        else {
            return Icon::Web;
        };

        host.split('.')
            .find_map(|label| {
                Self::SITES
                    .iter()
                    .find(|(site, _)| *site == label)
                    .map(|(_, icon)| *icon)
            })
            .unwrap_or(Icon::Web)
    }
}
