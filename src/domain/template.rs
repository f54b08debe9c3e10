//! Placeholder substitution for notification messages.
//!
//! Templates are plain text with `${name}` placeholders drawn from a closed
//! set. Nothing in a template is ever evaluated; an unrecognised placeholder
//! is copied to the output as written.

use crate::domain::change::ChangeCategory;
use crate::domain::notification::{NotificationContext, bullet_list};

pub const DEFAULT_TEMPLATE: &str = "**Blog updates** on `${branch}` by ${actor}\n\
> ${commitMessage}\n\
\n\
**Added**\n\
${addedList}\n\
**Modified**\n\
${modifiedList}\n\
**Deleted**\n\
${deletedList}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Branch,
    CommitMessage,
    Actor,
    AddedList,
    ModifiedList,
    DeletedList,
}

impl Placeholder {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "branch" => Some(Placeholder::Branch),
            "commitMessage" => Some(Placeholder::CommitMessage),
            "actor" => Some(Placeholder::Actor),
            "addedList" => Some(Placeholder::AddedList),
            "modifiedList" => Some(Placeholder::ModifiedList),
            "deletedList" => Some(Placeholder::DeletedList),
            _ => None,
        }
    }

    fn value(&self, context: &NotificationContext, empty_text: &str) -> String {
        match self {
            Placeholder::Branch => context.branch.clone(),
            Placeholder::CommitMessage => context.commit_message.trim().to_string(),
            Placeholder::Actor => context.actor.clone(),
            Placeholder::AddedList => {
                bullet_list(context.records(ChangeCategory::Added), empty_text)
            }
            Placeholder::ModifiedList => {
                bullet_list(context.records(ChangeCategory::Modified), empty_text)
            }
            Placeholder::DeletedList => {
                bullet_list(context.records(ChangeCategory::Deleted), empty_text)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    segments: Vec<Segment>,
    unknown: Vec<String>,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self::parse(DEFAULT_TEMPLATE)
    }
}

impl MessageTemplate {
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut unknown = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(start) = rest.find("${") {
            literal.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let Some(end) = after_open.find('}') else {
                literal.push_str(&rest[start..]);
                rest = "";
                break;
            };

            let name = after_open[..end].trim();
            if !is_identifier(name) {
                literal.push_str("${");
                rest = after_open;
                continue;
            }

            match Placeholder::from_name(name) {
                Some(placeholder) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(placeholder));
                }
                None => {
                    literal.push_str(&rest[start..start + 2 + end + 1]);
                    if !unknown.iter().any(|seen| seen == name) {
                        unknown.push(name.to_string());
                    }
                }
            }
            rest = &after_open[end + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments, unknown }
    }

    /// Names written as `${name}` that are not recognised placeholders.
    pub fn unknown_placeholders(&self) -> &[String] {
        &self.unknown
    }

    pub fn render(&self, context: &NotificationContext, empty_text: &str) -> String {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(placeholder) => {
                    output.push_str(&placeholder.value(context, empty_text))
                }
            }
        }
        output
    }
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
