// render.rs

use crate::command::Command;
use crate::navigate::Link;
use itertools::Itertools;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Style {
    Plain,
    Prompt,
    Heading,
    Accent,
    Error,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Line {
    pub style: Style,
    pub text: String,
}

impl Line {
    fn new(style: Style, text: impl Into<String>) -> Self {
        Self { style, text: text.into() }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BlockKind {
    Welcome,
    About,
    Skills,
    Projects,
    Contact,
    Help { explicit: bool },
    Invalid,
}

/// Pre-authored output shown for one command.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DisplayBlock {
    pub kind: BlockKind,
    pub lines: Vec<Line>,
}

impl DisplayBlock {
    fn new(kind: BlockKind) -> Self {
        Self { kind, lines: Vec::new() }
    }

    fn echo(kind: BlockKind, command: &str) -> Self {
        Self::new(kind).line(Style::Prompt, format!("$ {}", command))
    }

    fn line(mut self, style: Style, text: impl Into<String>) -> Self {
        self.lines.push(Line::new(style, text));
        self
    }

    fn blank(self) -> Self {
        self.line(Style::Plain, "")
    }
}

/// Produces the content block for each command. Implementations must be
/// pure: the same arguments always give the same block.
pub trait Renderer {
    fn welcome(&self) -> DisplayBlock;
    fn about(&self, command: &str) -> DisplayBlock;
    fn skills(&self, command: &str) -> DisplayBlock;
    fn projects(&self, command: &str) -> DisplayBlock;
    fn contact(&self, command: &str) -> DisplayBlock;
    fn help(&self, command: &str, explicit: bool) -> DisplayBlock;
    fn invalid(&self, command: &str) -> DisplayBlock;
}

/// The bundled portfolio content.
#[derive(Debug, Default, Clone, Copy)]
pub struct PortfolioRenderer;

const SKILLS: [(&str, &[&str]); 4] = [
    ("Languages", &["Rust", "TypeScript", "JavaScript", "Python", "C++"]),
    ("Frontend", &["React", "Next.js", "Tailwind CSS"]),
    ("Backend", &["Node.js", "Express", "MongoDB", "PostgreSQL"]),
    ("Tools", &["Git", "Docker", "Linux"]),
];

const PROJECTS: [(&str, &str); 3] = [
    ("portfolio-terminal", "this terminal; type commands instead of clicking links"),
    ("open source", "contributions to Rust crates and developer tooling"),
    ("web apps", "full-stack React and Node.js applications"),
];

impl Renderer for PortfolioRenderer {
    fn welcome(&self) -> DisplayBlock {
        DisplayBlock::new(BlockKind::Welcome)
            .line(Style::Heading, "Soubhik Singha Mahapatra")
            .line(Style::Plain, "Welcome to my terminal portfolio.")
            .line(Style::Plain, "Type `help` to see the available commands.")
            .blank()
    }

    fn about(&self, command: &str) -> DisplayBlock {
        DisplayBlock::echo(BlockKind::About, command)
            .line(Style::Heading, "About me")
            .line(
                Style::Plain,
                "I'm Soubhik, a developer who enjoys systems programming, the web,",
            )
            .line(Style::Plain, "and building tools that feel good to use.")
            .line(Style::Plain, "I spend most of my time writing Rust and TypeScript.")
            .blank()
    }

    fn skills(&self, command: &str) -> DisplayBlock {
        let mut block = DisplayBlock::echo(BlockKind::Skills, command).line(Style::Heading, "Skills");
        for (group, items) in SKILLS {
            block = block.line(Style::Accent, format!("{:<10} {}", group, items.iter().join(", ")));
        }
        block.blank()
    }

    fn projects(&self, command: &str) -> DisplayBlock {
        let mut block =
            DisplayBlock::echo(BlockKind::Projects, command).line(Style::Heading, "Projects");
        for (name, description) in PROJECTS {
            block = block
                .line(Style::Accent, name)
                .line(Style::Plain, format!("  {}", description));
        }
        block
            .line(Style::Plain, "More on GitHub: type `github`.")
            .blank()
    }

    fn contact(&self, command: &str) -> DisplayBlock {
        DisplayBlock::echo(BlockKind::Contact, command)
            .line(Style::Heading, "Contact")
            .line(Style::Accent, format!("GitHub    {}", Link::GitHub.url()))
            .line(Style::Accent, format!("LinkedIn  {}", Link::LinkedIn.url()))
            .blank()
    }

    fn help(&self, command: &str, explicit: bool) -> DisplayBlock {
        let mut block = DisplayBlock::echo(BlockKind::Help { explicit }, command);
        block = if explicit {
            block.line(Style::Heading, "Available commands")
        } else {
            block.line(Style::Heading, "Try one of these instead")
        };
        for (name, cmd) in Command::KEYWORDS {
            block = block.line(Style::Accent, format!("  {:<10} {}", name, cmd.summary()));
        }
        block.blank()
    }

    fn invalid(&self, command: &str) -> DisplayBlock {
        DisplayBlock::echo(BlockKind::Invalid, command)
            .line(Style::Error, format!("command not found: {}", command))
    }
}
