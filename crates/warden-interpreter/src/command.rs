//! Intent extraction from chat lines.

/// Phrases that ask for the list of available POIs
const LIST_PHRASES: &[&[&str]] = &[&["check", "claims"], &["list", "claims"], &["available", "pois"]];

/// Leading words of a single-POI status query
const QUERY_WORDS: &[&str] = &["check", "status", "whois"];

/// Words that start a claim
const CLAIM_WORDS: &[&str] = &["claim", "claiming"];

/// Words that start a release
const UNCLAIM_WORDS: &[&str] = &["unclaim", "unclaiming", "release", "releasing"];

/// Intent extracted from one chat line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every unclaimed, non-excluded POI
    ListAvailable,
    /// Report the claim state of one POI
    Query(String),
    /// Claim a POI for the sender
    Claim(String),
    /// Release the sender's claim on a POI
    Unclaim(String),
    /// The line is ordinary chat
    NoCommand,
}

impl Command {
    /// Parse a chat line
    ///
    /// Intents are mutually exclusive and tried in priority order; the
    /// returned phrase is normalized (lower case, single spaces) but not
    /// resolved.
    ///
    /// ```
    /// use warden_interpreter::Command;
    ///
    /// assert_eq!(Command::parse("Check claims!"), Command::ListAvailable);
    /// assert_eq!(Command::parse("!claim  Tisy"), Command::Claim("tisy".into()));
    /// assert_eq!(Command::parse("hello there"), Command::NoCommand);
    /// ```
    pub fn parse(message: &str) -> Self {
        let tokens = tokenize(message);
        if tokens.is_empty() {
            return Command::NoCommand;
        }

        if (tokens.len() == 1 && tokens[0] == "claims")
            || LIST_PHRASES.iter().any(|phrase| contains_phrase(&tokens, phrase))
        {
            return Command::ListAvailable;
        }

        if QUERY_WORDS.contains(&tokens[0].as_str()) && tokens.len() > 1 {
            return Command::Query(tokens[1..].join(" "));
        }

        if let Some(phrase) = phrase_after(&tokens, CLAIM_WORDS) {
            return Command::Claim(phrase);
        }

        if let Some(phrase) = phrase_after(&tokens, UNCLAIM_WORDS) {
            return Command::Unclaim(phrase);
        }

        Command::NoCommand
    }
}

/// Lower-cased tokens with a leading `!`/`/` prefix and trailing punctuation removed
fn tokenize(message: &str) -> Vec<String> {
    let trimmed = message.trim_start();
    let trimmed = trimmed
        .strip_prefix('!')
        .or_else(|| trimmed.strip_prefix('/'))
        .unwrap_or(trimmed);

    trimmed
        .split_whitespace()
        .map(|t| t.trim_end_matches(['.', ',', '!', '?', ':', ';']).to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

fn contains_phrase(tokens: &[String], phrase: &[&str]) -> bool {
    tokens
        .windows(phrase.len())
        .any(|window| window.iter().zip(phrase).all(|(t, p)| t == p))
}

/// Text following the first keyword that has something after it
fn phrase_after(tokens: &[String], keywords: &[&str]) -> Option<String> {
    tokens
        .iter()
        .enumerate()
        .find(|(i, t)| keywords.contains(&t.as_str()) && i + 1 < tokens.len())
        .map(|(i, _)| tokens[i + 1..].join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_available_variants() {
        assert_eq!(Command::parse("check claims"), Command::ListAvailable);
        assert_eq!(Command::parse("  CHECK   Claims? "), Command::ListAvailable);
        assert_eq!(Command::parse("can someone list claims"), Command::ListAvailable);
        assert_eq!(Command::parse("available pois"), Command::ListAvailable);
        assert_eq!(Command::parse("!claims"), Command::ListAvailable);
    }

    #[test]
    fn test_query() {
        assert_eq!(Command::parse("check tisy"), Command::Query("tisy".into()));
        assert_eq!(
            Command::parse("status Tisy Power Plant"),
            Command::Query("tisy power plant".into())
        );
        assert_eq!(Command::parse("check"), Command::NoCommand);
    }

    #[test]
    fn test_claim() {
        assert_eq!(Command::parse("claim tisy"), Command::Claim("tisy".into()));
        assert_eq!(
            Command::parse("ok guys I'm claiming NWAF."),
            Command::Claim("nwaf".into())
        );
        assert_eq!(Command::parse("/claim: tisy"), Command::Claim("tisy".into()));
        assert_eq!(Command::parse("claim"), Command::NoCommand);
    }

    #[test]
    fn test_unclaim() {
        assert_eq!(Command::parse("unclaim tisy"), Command::Unclaim("tisy".into()));
        assert_eq!(Command::parse("release nwaf please"), Command::Unclaim("nwaf please".into()));
        assert_eq!(Command::parse("unclaim"), Command::NoCommand);
    }

    #[test]
    fn test_priority_claim_over_unclaim() {
        // A line mentioning both intents is handled once, as a claim
        assert_eq!(
            Command::parse("release tisy and claim nwaf"),
            Command::Claim("nwaf".into())
        );
    }

    #[test]
    fn test_priority_list_over_query() {
        assert_eq!(Command::parse("check claims tisy"), Command::ListAvailable);
    }

    #[test]
    fn test_no_command() {
        assert_eq!(Command::parse(""), Command::NoCommand);
        assert_eq!(Command::parse("   "), Command::NoCommand);
        assert_eq!(Command::parse("anyone near tisy?"), Command::NoCommand);
        assert_eq!(Command::parse("reclaimed the base"), Command::NoCommand);
    }
}
