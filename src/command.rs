// command.rs

use crate::navigate::Link;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    About,
    Help,
    Clear,
    Skills,
    Projects,
    Contact,
    LinkedIn,
    GitHub,
    Unknown,
}

impl Command {
    /// Recognized keywords, in the order help lists them.
    pub const KEYWORDS: [(&'static str, Command); 8] = [
        ("about", Command::About),
        ("skills", Command::Skills),
        ("projects", Command::Projects),
        ("contact", Command::Contact),
        ("linkedin", Command::LinkedIn),
        ("github", Command::GitHub),
        ("help", Command::Help),
        ("clear", Command::Clear),
    ];

    /// Lower-cases `raw` and matches it exactly. Surrounding whitespace is
    /// significant: `" about"` is not `about`.
    pub fn parse(raw: &str) -> Command {
        let lowered = raw.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|(_, cmd)| *cmd)
            .unwrap_or(Command::Unknown)
    }

    pub fn link(self) -> Option<Link> {
        match self {
            Command::LinkedIn => Some(Link::LinkedIn),
            Command::GitHub => Some(Link::GitHub),
            _ => None,
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Command::About => "who I am",
            Command::Help => "list available commands",
            Command::Clear => "clear the terminal",
            Command::Skills => "languages and tools I work with",
            Command::Projects => "things I have built",
            Command::Contact => "how to reach me",
            Command::LinkedIn => "open my LinkedIn profile",
            Command::GitHub => "open my GitHub profile",
            Command::Unknown => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_keyword() {
        for (name, cmd) in Command::KEYWORDS {
            assert_eq!(Command::parse(name), cmd);
        }
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(Command::parse("ABOUT"), Command::About);
        assert_eq!(Command::parse("GitHub"), Command::GitHub);
        assert_eq!(Command::parse("LinkedIn"), Command::LinkedIn);
    }

    #[test]
    fn parse_does_not_trim() {
        assert_eq!(Command::parse(" about"), Command::Unknown);
        assert_eq!(Command::parse("help "), Command::Unknown);
        assert_eq!(Command::parse(""), Command::Unknown);
    }

    #[test]
    fn only_profiles_have_links() {
        assert_eq!(Command::LinkedIn.link(), Some(Link::LinkedIn));
        assert_eq!(Command::GitHub.link(), Some(Link::GitHub));
        assert_eq!(Command::About.link(), None);
        assert_eq!(Command::Unknown.link(), None);
    }
}
