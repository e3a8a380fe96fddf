//! Ordered command rules: a case-insensitive pattern, a chat scope, the action to run,
//! and the text to send when that action fails. The first rule that admits a message wins.

use cmdbot_core::Chat;
use regex::Regex;

use crate::error::CommandError;
use crate::replies;

/// What a matched rule does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Greet,
    Help,
    Time,
    Joke,
    Ask,
    Image,
    Audio,
    Document,
    GroupInfo,
    Ping,
    Fact,
}

impl Action {
    /// Rule name used in logs and [`cmdbot_core::HandlerResponse::Replied`].
    pub fn name(self) -> &'static str {
        match self {
            Action::Greet => "hello",
            Action::Help => "help",
            Action::Time => "time",
            Action::Joke => "joke",
            Action::Ask => "ai",
            Action::Image => "img",
            Action::Audio => "audio",
            Action::Document => "doc",
            Action::GroupInfo => "groupinfo",
            Action::Ping => "ping",
            Action::Fact => "fact",
        }
    }

    /// How the command is typed, as shown by `help`.
    pub fn usage(self) -> &'static str {
        match self {
            Action::Ask => "ai <your question>",
            other => other.name(),
        }
    }
}

/// Which chats a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    AnyChat,
    GroupOnly,
}

impl RuleScope {
    fn admits(self, chat: &Chat) -> bool {
        match self {
            RuleScope::AnyChat => true,
            RuleScope::GroupOnly => chat.is_group(),
        }
    }
}

/// Reply sent in place of a failed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// Fixed text, the error is only logged.
    Fixed(&'static str),
    /// Prefix followed by the error's message.
    WithReason(&'static str),
}

impl Fallback {
    pub fn render(&self, error: &CommandError) -> String {
        match self {
            Fallback::Fixed(text) => (*text).to_string(),
            Fallback::WithReason(prefix) => format!("{}{}", prefix, error),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommandRule {
    pub action: Action,
    pattern: Regex,
    pub scope: RuleScope,
    /// `None` for commands that cannot fail on their own; their errors reach the router's top level.
    pub fallback: Option<Fallback>,
}

impl CommandRule {
    pub fn new(
        action: Action,
        pattern: &str,
        scope: RuleScope,
        fallback: Option<Fallback>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            action,
            pattern: Regex::new(pattern)?,
            scope,
            fallback,
        })
    }

    /// Matches a trimmed body in the given chat. The argument is the first capture group, trimmed.
    pub fn matches(&self, body: &str, chat: &Chat) -> Option<Option<String>> {
        if !self.scope.admits(chat) {
            return None;
        }
        let captures = self.pattern.captures(body)?;
        let argument = captures
            .get(1)
            .map(|m| m.as_str().trim().to_string())
            .filter(|arg| !arg.is_empty());
        Some(argument)
    }
}

/// A rule that fired for a message, with its argument (the question for `ai`).
#[derive(Debug)]
pub struct CommandMatch<'a> {
    pub rule: &'a CommandRule,
    pub argument: Option<String>,
}

/// Immutable, priority-ordered rules built once at startup.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CommandRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<CommandRule>) -> Self {
        Self { rules }
    }

    /// The bot's command table. The `ai` rule is only present when `ai_enabled`.
    pub fn standard(ai_enabled: bool) -> Result<Self, regex::Error> {
        use Action::*;
        use RuleScope::*;

        let mut rules = vec![
            CommandRule::new(Greet, r"(?i)^hello$", AnyChat, None)?,
            CommandRule::new(Help, r"(?i)^help$", AnyChat, None)?,
            CommandRule::new(Time, r"(?i)^time$", AnyChat, None)?,
            CommandRule::new(
                Joke,
                r"(?i)^joke$",
                AnyChat,
                Some(Fallback::Fixed(replies::JOKE_FALLBACK)),
            )?,
        ];
        if ai_enabled {
            rules.push(CommandRule::new(
                Ask,
                r"(?is)^ai\s+(.+)$",
                AnyChat,
                Some(Fallback::WithReason(replies::AI_ERROR_PREFIX)),
            )?);
        }
        rules.extend([
            CommandRule::new(
                Image,
                r"(?i)^img$",
                AnyChat,
                Some(Fallback::Fixed(replies::IMAGE_FALLBACK)),
            )?,
            CommandRule::new(
                Audio,
                r"(?i)^audio$",
                AnyChat,
                Some(Fallback::Fixed(replies::AUDIO_FALLBACK)),
            )?,
            CommandRule::new(
                Document,
                r"(?i)^doc$",
                AnyChat,
                Some(Fallback::Fixed(replies::DOCUMENT_FALLBACK)),
            )?,
            CommandRule::new(
                GroupInfo,
                r"(?i)^groupinfo$",
                GroupOnly,
                Some(Fallback::Fixed(replies::GROUP_INFO_FALLBACK)),
            )?,
            CommandRule::new(Ping, r"(?i)^ping$", AnyChat, None)?,
            CommandRule::new(
                Fact,
                r"(?i)^fact$",
                AnyChat,
                Some(Fallback::Fixed(replies::FACT_FALLBACK)),
            )?,
        ]);
        Ok(Self::new(rules))
    }

    /// First rule admitting `body` (already trimmed) in `chat`.
    pub fn find(&self, body: &str, chat: &Chat) -> Option<CommandMatch<'_>> {
        self.rules.iter().find_map(|rule| {
            rule.matches(body, chat)
                .map(|argument| CommandMatch { rule, argument })
        })
    }

    pub fn has(&self, action: Action) -> bool {
        self.rules.iter().any(|rule| rule.action == action)
    }

    pub fn rules(&self) -> &[CommandRule] {
        &self.rules
    }

    /// `help` reply listing every command in this set, in priority order.
    pub fn help_text(&self) -> String {
        let mut text = String::from(replies::HELP_HEADER);
        for rule in &self.rules {
            text.push_str("\n- ");
            text.push_str(rule.action.usage());
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dm() -> Chat {
        Chat::private("1")
    }

    fn group() -> Chat {
        Chat::group("-100", "Team")
    }

    fn action_for(rules: &RuleSet, body: &str, chat: &Chat) -> Option<Action> {
        rules.find(body, chat).map(|m| m.rule.action)
    }

    #[test]
    fn test_whole_string_case_insensitive() {
        let rules = RuleSet::standard(false).unwrap();
        assert_eq!(action_for(&rules, "hello", &dm()), Some(Action::Greet));
        assert_eq!(action_for(&rules, "HeLLo", &dm()), Some(Action::Greet));
        assert_eq!(action_for(&rules, "hello there", &dm()), None);
        assert_eq!(action_for(&rules, "say hello", &dm()), None);
        assert_eq!(action_for(&rules, "PING", &group()), Some(Action::Ping));
    }

    #[test]
    fn test_ai_rule_extracts_question() {
        let rules = RuleSet::standard(true).unwrap();
        let matched = rules.find("AI   what is   rust?", &dm()).unwrap();
        assert_eq!(matched.rule.action, Action::Ask);
        assert_eq!(matched.argument.as_deref(), Some("what is   rust?"));

        let multiline = rules.find("ai first line\nsecond line", &dm()).unwrap();
        assert_eq!(multiline.argument.as_deref(), Some("first line\nsecond line"));
    }

    #[test]
    fn test_ai_rule_needs_a_question() {
        let rules = RuleSet::standard(true).unwrap();
        assert_eq!(action_for(&rules, "ai", &dm()), None);
        assert_eq!(action_for(&rules, "aircraft", &dm()), None);
    }

    #[test]
    fn test_ai_rule_absent_without_capability() {
        let rules = RuleSet::standard(false).unwrap();
        assert!(!rules.has(Action::Ask));
        assert_eq!(action_for(&rules, "ai hello", &dm()), None);
        assert!(!rules.help_text().contains("ai <your question>"));
    }

    #[test]
    fn test_groupinfo_only_in_groups() {
        let rules = RuleSet::standard(false).unwrap();
        assert_eq!(action_for(&rules, "groupinfo", &group()), Some(Action::GroupInfo));
        assert_eq!(action_for(&rules, "GroupInfo", &dm()), None);
    }

    #[test]
    fn test_priority_order() {
        let rules = RuleSet::standard(true).unwrap();
        let order: Vec<&str> = rules.rules().iter().map(|r| r.action.name()).collect();
        assert_eq!(
            order,
            vec!["hello", "help", "time", "joke", "ai", "img", "audio", "doc", "groupinfo", "ping", "fact"]
        );
    }

    #[test]
    fn test_first_match_wins() {
        let rules = RuleSet::new(vec![
            CommandRule::new(Action::Ping, r"(?i)^p", RuleScope::AnyChat, None).unwrap(),
            CommandRule::new(Action::Greet, r"(?i)^ping$", RuleScope::AnyChat, None).unwrap(),
        ]);
        assert_eq!(action_for(&rules, "ping", &dm()), Some(Action::Ping));
    }

    #[test]
    fn test_help_text_lists_commands() {
        let help = RuleSet::standard(true).unwrap().help_text();
        assert!(help.starts_with(replies::HELP_HEADER));
        for usage in ["- hello", "- time", "- joke", "- ai <your question>", "- img", "- audio", "- doc", "- help"] {
            assert!(help.contains(usage), "missing {usage}");
        }
    }

    #[test]
    fn test_fallback_render() {
        let error = CommandError::Ai("rate limited".to_string());
        assert_eq!(Fallback::Fixed("Could not fetch.").render(&error), "Could not fetch.");
        assert_eq!(
            Fallback::WithReason(replies::AI_ERROR_PREFIX).render(&error),
            "❌ AI error: rate limited"
        );
    }
}
