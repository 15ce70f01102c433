//! Intent routing for chat messages.
//!
//! Maps a free-text utterance (English or Vietnamese, any case, with or
//! without diacritics) to one of a fixed set of UI intents using ordered
//! keyword rules. No model, no I/O: the router is immutable after
//! construction and safe to share across threads.
//!
//! # Matching
//!
//! 1. The message is normalized by [`normalize`]: NFD decomposition,
//!    combining marks dropped, lowercased, `đ` folded to `d`, punctuation
//!    turned into spaces, whitespace collapsed.
//! 2. Rules are evaluated in ascending [`IntentRule::priority`]. A phrase
//!    matches when it appears in the normalized text on token boundaries.
//! 3. The first rule with any matching phrase wins. If none match, the
//!    result is [`Intent::Unknown`].
//!
//! Specific mode rules carry lower priority values than the generic theme
//! menu, so "dark theme" resolves to [`Intent::DarkMode`] while "theme" alone
//! resolves to [`Intent::ThemeMenu`].

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Detected intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Switch the UI to the dark theme.
    DarkMode,
    /// Switch the UI to the light theme.
    LightMode,
    /// Let the UI follow the operating system theme.
    AutoMode,
    /// Open the theme picker without choosing a mode.
    ThemeMenu,
    /// No rule matched.
    Unknown,
}

impl Intent {
    /// Intents that have a routing rule, in default priority order.
    pub const ROUTABLE: [Intent; 4] = [
        Intent::DarkMode,
        Intent::LightMode,
        Intent::AutoMode,
        Intent::ThemeMenu,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Intent::DarkMode => "dark_mode",
            Intent::LightMode => "light_mode",
            Intent::AutoMode => "auto_mode",
            Intent::ThemeMenu => "theme_menu",
            Intent::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Intent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "dark_mode" => Ok(Intent::DarkMode),
            "light_mode" => Ok(Intent::LightMode),
            "auto_mode" => Ok(Intent::AutoMode),
            "theme_menu" => Ok(Intent::ThemeMenu),
            "unknown" => Ok(Intent::Unknown),
            other => Err(anyhow!(
                "unknown intent label '{}'; expected one of dark_mode, light_mode, auto_mode, theme_menu, unknown",
                other
            )),
        }
    }
}

/// Outcome of [`IntentRouter::classify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentMatch {
    pub intent: Intent,
    /// The normalized phrase that decided the match, `None` for [`Intent::Unknown`].
    pub matched_phrase: Option<String>,
}

impl IntentMatch {
    fn unknown() -> Self {
        Self {
            intent: Intent::Unknown,
            matched_phrase: None,
        }
    }
}

/// One routing rule: every phrase maps to `intent`.
///
/// Lower `priority` values are evaluated first.
#[derive(Debug, Clone)]
pub struct IntentRule {
    pub priority: u8,
    pub intent: Intent,
    /// Normalized phrases.
    pub phrases: Vec<String>,
}

impl IntentRule {
    /// Build a rule, normalizing each phrase and dropping those that
    /// normalize to nothing.
    pub fn new<I, S>(priority: u8, intent: Intent, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rule = Self {
            priority,
            intent,
            phrases: Vec::new(),
        };
        rule.push_phrases(phrases);
        rule
    }

    fn push_phrases<I, S>(&mut self, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for phrase in phrases {
            let normalized = normalize(phrase.as_ref());
            if !normalized.is_empty() && !self.phrases.contains(&normalized) {
                self.phrases.push(normalized);
            }
        }
    }

    /// Longest phrase of this rule found in `text` (already normalized).
    fn best_match(&self, text: &str) -> Option<&str> {
        self.phrases
            .iter()
            .filter(|p| contains_phrase(text, p))
            .max_by_key(|p| p.len())
            .map(String::as_str)
    }
}

const DARK_PHRASES: &[&str] = &[
    "dark",
    "dark mode",
    "dark theme",
    "darkmode",
    "night mode",
    "chế độ tối",
    "giao diện tối",
    "nền tối",
    "màu tối",
    "chế độ đêm",
    "chế độ ban đêm",
];

const LIGHT_PHRASES: &[&str] = &[
    "light",
    "light mode",
    "light theme",
    "lightmode",
    "day mode",
    "chế độ sáng",
    "giao diện sáng",
    "nền sáng",
    "màu sáng",
    "chế độ ban ngày",
];

const AUTO_PHRASES: &[&str] = &[
    "auto",
    "auto mode",
    "auto theme",
    "automatic",
    "automatic mode",
    "system mode",
    "system theme",
    "follow system",
    "match system",
    "chế độ tự động",
    "tự động",
    "giao diện tự động",
    "theo hệ thống",
];

const THEME_MENU_PHRASES: &[&str] = &[
    "theme",
    "themes",
    "change theme",
    "switch theme",
    "appearance",
    "color scheme",
    "giao diện",
    "đổi giao diện",
    "chế độ",
    "chủ đề",
    "màu nền",
    "đổi màu",
];

/// Default rule set: specific modes first, generic theme menu last.
pub fn default_rules() -> Vec<IntentRule> {
    vec![
        IntentRule::new(10, Intent::DarkMode, DARK_PHRASES),
        IntentRule::new(20, Intent::LightMode, LIGHT_PHRASES),
        IntentRule::new(30, Intent::AutoMode, AUTO_PHRASES),
        IntentRule::new(90, Intent::ThemeMenu, THEME_MENU_PHRASES),
    ]
}

/// Ordered keyword router.
#[derive(Debug, Clone)]
pub struct IntentRouter {
    rules: Vec<IntentRule>,
}

impl Default for IntentRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentRouter {
    /// Router with the built-in English and Vietnamese rules.
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Router over arbitrary rules. Rules are sorted by priority; equal
    /// priorities keep their given order.
    pub fn with_rules(mut rules: Vec<IntentRule>) -> Self {
        rules.retain(|r| r.intent != Intent::Unknown);
        rules.sort_by_key(|r| r.priority);
        Self { rules }
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Add phrases to the rule routing to `intent`.
    ///
    /// Fails for [`Intent::Unknown`] or an intent without a rule.
    pub fn extend_phrases<I, S>(&mut self, intent: Intent, phrases: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if intent == Intent::Unknown {
            bail!("phrases cannot be routed to the unknown intent");
        }
        let rule = self
            .rules
            .iter_mut()
            .find(|r| r.intent == intent)
            .ok_or_else(|| anyhow!("no rule routes to intent '{}'", intent))?;
        rule.push_phrases(phrases);
        Ok(())
    }

    pub fn classify(&self, message: &str) -> IntentMatch {
        let text = normalize(message);
        if text.is_empty() {
            return IntentMatch::unknown();
        }

        for rule in &self.rules {
            if let Some(phrase) = rule.best_match(&text) {
                return IntentMatch {
                    intent: rule.intent,
                    matched_phrase: Some(phrase.to_string()),
                };
            }
        }

        IntentMatch::unknown()
    }

    pub fn detect(&self, message: &str) -> Intent {
        self.classify(message).intent
    }
}

static DEFAULT_ROUTER: LazyLock<IntentRouter> = LazyLock::new(IntentRouter::new);

/// Classify `message` with the built-in rules.
pub fn detect_intent(message: &str) -> Intent {
    DEFAULT_ROUTER.detect(message)
}

/// Fold text into the comparison form used by the router.
///
/// ```
/// use chatbot_admin_core::intent::normalize;
/// assert_eq!(normalize("  Bật CHẾ ĐỘ tối!! "), "bat che do toi");
/// ```
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'đ' => 'd',
            c if c.is_alphanumeric() => c,
            _ => ' ',
        })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Token-window containment over normalized text (single spaces only).
fn contains_phrase(text: &str, phrase: &str) -> bool {
    let tokens: Vec<&str> = text.split(' ').collect();
    let needle: Vec<&str> = phrase.split(' ').collect();
    tokens.windows(needle.len()).any(|w| w == needle.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_mode_detection() {
        assert_eq!(detect_intent("dark mode"), Intent::DarkMode);
        assert_eq!(detect_intent("bật dark mode"), Intent::DarkMode);
        assert_eq!(detect_intent("Bật chế độ tối"), Intent::DarkMode);
        assert_eq!(detect_intent("please switch to night mode"), Intent::DarkMode);
    }

    #[test]
    fn test_light_mode_detection() {
        assert_eq!(detect_intent("turn on light mode"), Intent::LightMode);
        assert_eq!(detect_intent("chuyển sang chế độ sáng"), Intent::LightMode);
        assert_eq!(detect_intent("Giao diện sáng"), Intent::LightMode);
    }

    #[test]
    fn test_auto_mode_detection() {
        assert_eq!(detect_intent("chế độ tự động"), Intent::AutoMode);
        assert_eq!(detect_intent("CHẾ ĐỘ TỰ ĐỘNG"), Intent::AutoMode);
        assert_eq!(detect_intent("che do tu dong"), Intent::AutoMode);
        assert_eq!(detect_intent("follow system theme"), Intent::AutoMode);
    }

    #[test]
    fn test_generic_theme_menu() {
        assert_eq!(detect_intent("theme"), Intent::ThemeMenu);
        assert_eq!(detect_intent("Change theme please"), Intent::ThemeMenu);
        assert_eq!(detect_intent("chế độ"), Intent::ThemeMenu);
        assert_eq!(detect_intent("tôi muốn đổi giao diện"), Intent::ThemeMenu);
    }

    #[test]
    fn test_specific_mode_beats_theme_menu() {
        assert_eq!(detect_intent("dark theme"), Intent::DarkMode);
        assert_eq!(detect_intent("theme: light"), Intent::LightMode);
        assert_eq!(detect_intent("giao diện tự động"), Intent::AutoMode);
    }

    #[test]
    fn test_unknown_detection() {
        assert_eq!(detect_intent(""), Intent::Unknown);
        assert_eq!(detect_intent("   "), Intent::Unknown);
        assert_eq!(detect_intent("?!"), Intent::Unknown);
        assert_eq!(detect_intent("what is the weather today"), Intent::Unknown);
        assert_eq!(detect_intent("xin chào"), Intent::Unknown);
    }

    #[test]
    fn test_phrases_match_on_token_boundaries() {
        assert_eq!(detect_intent("darkness falls"), Intent::Unknown);
        assert_eq!(detect_intent("a lightweight crate"), Intent::Unknown);
        assert_eq!(detect_intent("automobile"), Intent::Unknown);
        assert_eq!(detect_intent("dark-mode"), Intent::DarkMode);
    }

    #[test]
    fn test_every_default_phrase_routes_to_its_intent_in_any_case() {
        let router = IntentRouter::new();
        for rule in router.rules() {
            for phrase in &rule.phrases {
                assert_eq!(router.detect(phrase), rule.intent, "phrase {:?}", phrase);
                assert_eq!(
                    router.detect(&phrase.to_uppercase()),
                    rule.intent,
                    "phrase {:?} uppercased",
                    phrase
                );
            }
        }
        for (intent, phrases) in [
            (Intent::DarkMode, DARK_PHRASES),
            (Intent::LightMode, LIGHT_PHRASES),
            (Intent::AutoMode, AUTO_PHRASES),
            (Intent::ThemeMenu, THEME_MENU_PHRASES),
        ] {
            for phrase in phrases {
                assert_eq!(detect_intent(phrase), intent, "phrase {:?}", phrase);
                assert_eq!(detect_intent(&phrase.to_uppercase()), intent);
            }
        }
    }

    #[test]
    fn test_default_rule_order() {
        let router = IntentRouter::new();
        let order: Vec<Intent> = router.rules().iter().map(|r| r.intent).collect();
        assert_eq!(order, Intent::ROUTABLE.to_vec());
        let priorities: Vec<u8> = router.rules().iter().map(|r| r.priority).collect();
        assert!(priorities.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_mixed_modes_resolve_by_priority() {
        // Both dark and light phrases present: the dark rule is evaluated first.
        assert_eq!(
            detect_intent("switch from light mode to dark mode"),
            Intent::DarkMode
        );
        assert_eq!(detect_intent("light or auto?"), Intent::LightMode);
    }

    #[test]
    fn test_rules_sorted_by_priority_not_insertion() {
        let router = IntentRouter::with_rules(vec![
            IntentRule::new(50, Intent::ThemeMenu, ["theme"]),
            IntentRule::new(5, Intent::LightMode, ["light theme"]),
        ]);
        assert_eq!(router.rules()[0].intent, Intent::LightMode);
        assert_eq!(router.detect("light theme"), Intent::LightMode);
        assert_eq!(router.detect("theme"), Intent::ThemeMenu);
    }

    #[test]
    fn test_unknown_rules_are_dropped() {
        let router = IntentRouter::with_rules(vec![IntentRule::new(1, Intent::Unknown, ["hello"])]);
        assert!(router.rules().is_empty());
        assert_eq!(router.detect("hello"), Intent::Unknown);
    }

    #[test]
    fn test_classify_reports_longest_matching_phrase() {
        let router = IntentRouter::new();
        let m = router.classify("Bật DARK MODE đi");
        assert_eq!(m.intent, Intent::DarkMode);
        assert_eq!(m.matched_phrase.as_deref(), Some("dark mode"));

        let m = router.classify("nothing here");
        assert_eq!(m, IntentMatch::unknown());
    }

    #[test]
    fn test_phrase_found_after_overlapping_partial_match() {
        let mut router = IntentRouter::new();
        router.extend_phrases(Intent::DarkMode, ["tu tu"]).unwrap();
        assert_eq!(router.detect("tu tu"), Intent::DarkMode);
        assert_eq!(router.detect("tutu tu tu"), Intent::DarkMode);
        assert_eq!(router.detect("tu tutu"), Intent::Unknown);

        assert!(contains_phrase("nen nen toi", "nen toi"));
        assert!(!contains_phrase("nen toii", "nen toi"));
        assert!(!contains_phrase("dark", "dark mode"));
    }

    #[test]
    fn test_extend_phrases() {
        let mut router = IntentRouter::new();
        assert_eq!(router.detect("giao diện đen"), Intent::ThemeMenu);
        router
            .extend_phrases(Intent::DarkMode, ["Giao diện đen"])
            .unwrap();
        assert_eq!(router.detect("bật giao diện đen"), Intent::DarkMode);
        assert!(router.extend_phrases(Intent::Unknown, ["x"]).is_err());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Chế độ Tự Động!"), "che do tu dong");
        assert_eq!(normalize("ĐỔI   màu\tnền"), "doi mau nen");
        assert_eq!(normalize("Dark-Mode"), "dark mode");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_label_round_trip_through_from_str() {
        for intent in Intent::ROUTABLE.iter().chain([Intent::Unknown].iter()) {
            assert_eq!(intent.label().parse::<Intent>().unwrap(), *intent);
        }
        assert!("sepia_mode".parse::<Intent>().is_err());
    }
}
