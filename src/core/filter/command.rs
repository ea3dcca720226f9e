//! Parsen einzelner Filterbefehle.

use crate::core::property::Comparator;
use regex::Regex;
use std::sync::OnceLock;

/// Präfix für Property-Vergleiche.
pub const PROPERTY_PREFIX: &str = "prop:";

/// Geparster Filterbefehl ohne Negation.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterCommand {
    /// Teilstring-Match gegen den Anzeigenamen (case-insensitive, bereits lowercase)
    Name(String),
    /// `prop:<name>[<index>] <op> <value>`
    Property {
        name: String,
        index: Option<usize>,
        comparator: Comparator,
        value: String,
    },
    /// Fehlerhafter `prop:`-Ausdruck, matcht nie
    Invalid(String),
}

/// Filterbefehl inklusive optionaler `!`-Negation.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterTerm {
    /// Ergebnis invertieren
    pub negated: bool,
    /// Eigentlicher Befehl
    pub command: FilterCommand,
}

fn property_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^prop:\s*([^\s\[\]=<>]+)\s*(?:\[\s*(\d+)\s*\])?\s*([=<>])\s*(.*?)\s*$")
            .expect("statisches Pattern ist gültig")
    })
}

impl FilterTerm {
    /// Parst einen Filterbefehl.
    ///
    /// Ein führendes `!` negiert den Befehl. Enthält der Rest `prop:`, wird er
    /// als Property-Vergleich gelesen, sonst als Namensfilter.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let (negated, body) = match trimmed.strip_prefix('!') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };

        let command = if body.contains(PROPERTY_PREFIX) {
            parse_property(body)
        } else {
            FilterCommand::Name(body.to_lowercase())
        };

        Self { negated, command }
    }
}

fn parse_property(body: &str) -> FilterCommand {
    let Some(start) = body.find(PROPERTY_PREFIX) else {
        return FilterCommand::Invalid(body.to_string());
    };
    let Some(captures) = property_pattern().captures(&body[start..]) else {
        return FilterCommand::Invalid(body.to_string());
    };

    let index = match captures.get(2) {
        Some(m) => match m.as_str().parse::<usize>() {
            Ok(index) => Some(index),
            Err(_) => return FilterCommand::Invalid(body.to_string()),
        },
        None => None,
    };
    let Some(comparator) = Comparator::from_symbol(&captures[3]) else {
        return FilterCommand::Invalid(body.to_string());
    };
    let value = captures[4].to_string();
    if value.is_empty() {
        return FilterCommand::Invalid(body.to_string());
    }

    FilterCommand::Property {
        name: captures[1].to_string(),
        index,
        comparator,
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_lowercased_name_filter() {
        let term = FilterTerm::parse("  C1000 ");
        assert!(!term.negated);
        assert_eq!(term.command, FilterCommand::Name("c1000".into()));
    }

    #[test]
    fn negated_property_with_index() {
        let term = FilterTerm::parse("!prop:EntityGroupIDs[1] < 999");
        assert!(term.negated);
        assert_eq!(
            term.command,
            FilterCommand::Property {
                name: "EntityGroupIDs".into(),
                index: Some(1),
                comparator: Comparator::Less,
                value: "999".into(),
            }
        );
    }

    #[test]
    fn property_without_spaces() {
        let term = FilterTerm::parse("prop:EntityID=1");
        assert!(matches!(
            term.command,
            FilterCommand::Property { ref name, index: None, comparator: Comparator::Equal, ref value }
                if name == "EntityID" && value == "1"
        ));
    }

    #[test]
    fn malformed_property_is_invalid() {
        for input in ["prop:EntityID", "prop:EntityID ~ 3", "prop:[2] = 1", "prop:EntityID ="] {
            assert!(
                matches!(FilterTerm::parse(input).command, FilterCommand::Invalid(_)),
                "{input} sollte ungültig sein"
            );
        }
    }
}
