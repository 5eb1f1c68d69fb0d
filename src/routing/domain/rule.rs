//! Keyword rules and the table that evaluates them.

use super::RoutingError;
use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};

/// Reply produced when a rule matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum ResponseTemplate {
    /// Returned verbatim.
    Fixed(String),
    /// `minijinja` template rendered with the user's text bound to `input`.
    Rendered(String),
}

impl ResponseTemplate {
    /// Produces the reply for `input`.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::TemplateRender`] when a rendered template is
    /// malformed.
    pub fn render(&self, input: &str) -> Result<String, RoutingError> {
        match self {
            Self::Fixed(text) => Ok(text.clone()),
            Self::Rendered(template) => Environment::new()
                .render_str(template, context! { input => input })
                .map_err(|error| RoutingError::TemplateRender {
                    reason: error.to_string(),
                }),
        }
    }
}

/// A keyword group paired with its reply.
///
/// A rule matches when any of its keywords occurs anywhere in the input,
/// ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingRule {
    keywords: Vec<String>,
    response: ResponseTemplate,
}

impl RoutingRule {
    /// Creates a rule; keywords are stored lowercased.
    #[must_use]
    pub fn new(
        keywords: impl IntoIterator<Item = impl Into<String>>,
        response: ResponseTemplate,
    ) -> Self {
        Self {
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.into().to_lowercase())
                .collect(),
            response,
        }
    }

    /// Returns the lowercased keywords.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns the reply template.
    #[must_use]
    pub const fn response(&self) -> &ResponseTemplate {
        &self.response
    }

    /// Returns `true` if any keyword occurs in `input`, ignoring case.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        let haystack = input.to_lowercase();
        self.matches_lowercase(&haystack)
    }

    fn matches_lowercase(&self, haystack: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| haystack.contains(keyword.as_str()))
    }
}

/// Ordered rule list with a fallback; first match wins.
///
/// # Examples
///
/// ```
/// use hipat::routing::domain::RuleTable;
///
/// let table = RuleTable::default();
/// let reply = table.respond("Any workout tips?").expect("default templates render");
/// assert!(reply.starts_with("For fitness questions"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    rules: Vec<RoutingRule>,
    fallback: ResponseTemplate,
}

/// Reply for greetings.
pub const GREETING_RESPONSE: &str =
    "Hello! I'm Pat, your personal assistant. How can I help you today?";
/// Reply for help requests.
pub const HELP_RESPONSE: &str =
    "I'm here to help! You can ask me about fitness, nutrition, or general questions.";
/// Reply for fitness questions.
pub const FITNESS_RESPONSE: &str = "For fitness questions, I can suggest workout routines, track your progress, or provide exercise tips.";
/// Reply for nutrition questions.
pub const NUTRITION_RESPONSE: &str = "Regarding nutrition, I can help with meal plans, calorie tracking, or dietary recommendations.";
/// Template echoing unmatched input.
pub const ECHO_TEMPLATE: &str = "I understand you're asking about: {{ input }}. I'm still learning but I'll do my best to help!";

impl RuleTable {
    /// Creates a table from ordered rules and a fallback.
    #[must_use]
    pub const fn new(rules: Vec<RoutingRule>, fallback: ResponseTemplate) -> Self {
        Self { rules, fallback }
    }

    /// Returns the rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[RoutingRule] {
        &self.rules
    }

    /// Returns the template used when no rule matches.
    #[must_use]
    pub const fn fallback(&self) -> &ResponseTemplate {
        &self.fallback
    }

    /// Returns the first matching rule, if any.
    #[must_use]
    pub fn find_match(&self, input: &str) -> Option<&RoutingRule> {
        let haystack = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches_lowercase(&haystack))
    }

    /// Produces the reply for `input`.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError`] when the selected template fails to render.
    pub fn respond(&self, input: &str) -> Result<String, RoutingError> {
        self.find_match(input)
            .map_or(&self.fallback, RoutingRule::response)
            .render(input)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new(
            vec![
                RoutingRule::new(
                    ["hello", "hi"],
                    ResponseTemplate::Fixed(GREETING_RESPONSE.to_owned()),
                ),
                RoutingRule::new(["help"], ResponseTemplate::Fixed(HELP_RESPONSE.to_owned())),
                RoutingRule::new(
                    ["fitness", "workout"],
                    ResponseTemplate::Fixed(FITNESS_RESPONSE.to_owned()),
                ),
                RoutingRule::new(
                    ["food", "nutrition"],
                    ResponseTemplate::Fixed(NUTRITION_RESPONSE.to_owned()),
                ),
            ],
            ResponseTemplate::Rendered(ECHO_TEMPLATE.to_owned()),
        )
    }
}
