//! Canned reply selection for the chat widget.
//!
//! Replies come from an ordered rule table. Each rule is a keyword list and a
//! fixed reply; the first rule with a keyword contained in the lower-cased
//! message wins. Matching is plain substring containment, so `"this"` matches
//! the `"hi"` keyword. When no rule matches, the fallback reply is used.

use std::fmt;

/// The kind of canned reply a message produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplyCategory {
    Greeting,
    Projects,
    Hiring,
    Help,
    Fallback,
}

impl fmt::Display for ReplyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyCategory::Greeting => write!(f, "greeting"),
            ReplyCategory::Projects => write!(f, "projects"),
            ReplyCategory::Hiring => write!(f, "hiring"),
            ReplyCategory::Help => write!(f, "help"),
            ReplyCategory::Fallback => write!(f, "fallback"),
        }
    }
}

/// A fixed reply and the category it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedReply {
    pub category: ReplyCategory,
    pub text: &'static str,
}

/// One entry of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct ReplyRule {
    keywords: &'static [&'static str],
    reply: CannedReply,
}

impl ReplyRule {
    pub const fn new(
        keywords: &'static [&'static str],
        category: ReplyCategory,
        text: &'static str,
    ) -> Self {
        Self {
            keywords,
            reply: CannedReply { category, text },
        }
    }

    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }

    pub fn reply(&self) -> CannedReply {
        self.reply
    }
}

pub const GREETING_REPLY: &str =
    "Hello! How can I help you today? You can ask about projects, services, or hiring.";
pub const PROJECTS_REPLY: &str =
    "I build full-stack and AI applications — check the Projects section for examples.";
pub const HIRING_REPLY: &str = "Thanks for your interest! Please share a brief message about \
     your requirements — I'll get back to you.";
pub const HELP_REPLY: &str =
    "Tell me more about the problem and I'll suggest a solution or next steps.";
pub const FALLBACK_REPLY: &str =
    "Thanks for the message — I'll review it and respond soon. Can you share more details?";

/// The site's rule table, in evaluation order.
pub const DEFAULT_RULES: [ReplyRule; 4] = [
    ReplyRule::new(&["hi", "hello", "hey"], ReplyCategory::Greeting, GREETING_REPLY),
    ReplyRule::new(&["project", "work"], ReplyCategory::Projects, PROJECTS_REPLY),
    ReplyRule::new(&["hire", "pricing"], ReplyCategory::Hiring, HIRING_REPLY),
    ReplyRule::new(&["help", "support"], ReplyCategory::Help, HELP_REPLY),
];

/// Ordered rule table plus fallback.
#[derive(Debug, Clone)]
pub struct ReplyRules {
    rules: Vec<ReplyRule>,
    fallback: CannedReply,
}

impl ReplyRules {
    pub fn new(rules: Vec<ReplyRule>, fallback: &'static str) -> Self {
        Self {
            rules,
            fallback: CannedReply {
                category: ReplyCategory::Fallback,
                text: fallback,
            },
        }
    }

    /// Pick the reply for a visitor message. First matching rule wins.
    pub fn select(&self, message: &str) -> CannedReply {
        let lowered = message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(ReplyRule::reply)
            .unwrap_or(self.fallback)
    }
}

impl Default for ReplyRules {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec(), FALLBACK_REPLY)
    }
}
