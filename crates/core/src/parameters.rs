//! Generation parameter resolution.
//!
//! Node generation needs a content-type selection, a record count, a title
//! length and a time-range bucket. Each of these may come from the command
//! line, from an interactive answer or from a built-in default, in that order
//! of precedence. The resolver itself does no I/O: answers are collected
//! through a [`Prompter`].

use std::fmt::{Display, Formatter};

use log::debug;

use crate::catalog::ContentTypeCatalog;
use crate::error::{Error, Result};
use crate::messages::{keys, Messages};

pub const DEFAULT_LIMIT: u32 = 10;
pub const DEFAULT_TITLE_WORDS: u32 = 5;
pub const MAX_LIMIT: u32 = 10_000;
pub const MAX_TITLE_WORDS: u32 = 100;

/// How far back generated creation timestamps may be spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    #[default]
    Now,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 6] = [
        TimeRange::Now,
        TimeRange::Hour,
        TimeRange::Day,
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::Year,
    ];

    /// Bucket key accepted by `--time-range`.
    #[must_use]
    pub fn key(self) -> u32 {
        match self {
            TimeRange::Now => 1,
            TimeRange::Hour => 3_600,
            TimeRange::Day => 86_400,
            TimeRange::Week => 604_800,
            TimeRange::Month => 2_592_000,
            TimeRange::Year => 31_536_000,
        }
    }

    /// Maximum backward offset in seconds. The `Now` bucket has none.
    #[must_use]
    pub fn seconds(self) -> u32 {
        match self {
            TimeRange::Now => 0,
            other => other.key(),
        }
    }

    #[must_use]
    pub fn code(self) -> char {
        match self {
            TimeRange::Now => 'N',
            TimeRange::Hour => 'H',
            TimeRange::Day => 'D',
            TimeRange::Week => 'W',
            TimeRange::Month => 'M',
            TimeRange::Year => 'Y',
        }
    }

    fn label_key(self) -> &'static str {
        let index = TimeRange::ALL
            .iter()
            .position(|range| *range == self)
            .unwrap_or_default();
        keys::NODES_TIME_RANGES[index]
    }

    /// Prompt label, e.g. `H | Past hour`.
    #[must_use]
    pub fn label(self, messages: &Messages) -> String {
        format!("{} | {}", self.code(), messages.trans(self.label_key()))
    }

    /// Parses a bucket key (`3600`) or letter code (`h`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();

        if let Ok(key) = raw.parse::<u32>() {
            return TimeRange::ALL.into_iter().find(|range| range.key() == key);
        }

        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => TimeRange::ALL
                .into_iter()
                .find(|range| range.code() == code.to_ascii_uppercase()),
            _ => None,
        }
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Fully resolved generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParameters {
    pub limit: u32,
    pub title_words: u32,
    pub time_range: TimeRange,
}

impl GenerationParameters {
    #[must_use]
    pub fn time_range_seconds(&self) -> u32 {
        self.time_range.seconds()
    }
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            title_words: DEFAULT_TITLE_WORDS,
            time_range: TimeRange::default(),
        }
    }
}

/// Non-empty list of catalog ids to draw content types from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeSelection(Vec<String>);

impl ContentTypeSelection {
    /// Builds a selection, checking every id against the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelection`] if `ids` is empty or contains an id
    /// the catalog doesn't know. The message suggests the closest known id.
    pub fn new(ids: Vec<String>, catalog: &ContentTypeCatalog) -> Result<Self> {
        if ids.is_empty() {
            return Err(Error::InvalidSelection(
                "at least one content type must be selected".to_string(),
            ));
        }

        if let Some(unknown) = ids.iter().find(|id| !catalog.contains(id)) {
            let message = match catalog.suggest(unknown) {
                Some(suggestion) => {
                    format!("unknown content type `{unknown}`, did you mean `{suggestion}`?")
                }
                None => format!("unknown content type `{unknown}`"),
            };
            return Err(Error::InvalidSelection(message));
        }

        Ok(Self(ids))
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.0
    }
}

/// Generation request as it arrives from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGenerationInput {
    pub content_types: Vec<String>,
    pub limit: Option<String>,
    pub title_words: Option<String>,
    pub time_range: Option<String>,
}

/// Source of interactive answers.
pub trait Prompter {
    /// Asks the user to pick any number of `choices`; returns their indexes.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the answer fails.
    fn multi_select(&mut self, question: &str, choices: &[String]) -> Result<Vec<usize>>;

    /// Asks for a positive number, falling back to `default`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the answer fails.
    fn ask_number(&mut self, question: &str, default: u32) -> Result<u32>;

    /// Asks the user to pick exactly one of `choices`; returns its index.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the answer fails.
    fn select(&mut self, question: &str, choices: &[String], default: usize) -> Result<usize>;
}

/// Prompter for runs without a user: takes every default, selects nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonInteractivePrompter;

impl Prompter for NonInteractivePrompter {
    fn multi_select(&mut self, _question: &str, _choices: &[String]) -> Result<Vec<usize>> {
        Ok(Vec::new())
    }

    fn ask_number(&mut self, _question: &str, default: u32) -> Result<u32> {
        Ok(default)
    }

    fn select(&mut self, _question: &str, _choices: &[String], default: usize) -> Result<usize> {
        Ok(default)
    }
}

/// Parses a value in `1..=max`.
fn parse_positive(option: &str, raw: &str, max: u32) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(value) if (1..=max).contains(&value) => Ok(value),
        _ => Err(Error::invalid_option(option, raw)),
    }
}

fn resolve_content_types<P: Prompter + ?Sized>(
    tokens: &[String],
    catalog: &ContentTypeCatalog,
    messages: &Messages,
    prompter: &mut P,
) -> Result<ContentTypeSelection> {
    if catalog.is_empty() {
        return Err(Error::InvalidSelection(
            "no content types are available".to_string(),
        ));
    }

    if !tokens.is_empty() {
        return ContentTypeSelection::new(tokens.to_vec(), catalog);
    }

    let question = messages.trans(keys::NODES_QUESTION_CONTENT_TYPE);
    let chosen = prompter.multi_select(&question, &catalog.labels())?;

    let ids = chosen
        .into_iter()
        .map(|index| {
            catalog.id_at(index).map(ToString::to_string).ok_or_else(|| {
                Error::InvalidSelection(format!("no content type at position {index}"))
            })
        })
        .collect::<Result<Vec<String>>>()?;

    ContentTypeSelection::new(ids, catalog)
}

fn resolve_number<P: Prompter + ?Sized>(
    option: &str,
    raw: Option<&str>,
    question_key: &str,
    (default, max): (u32, u32),
    messages: &Messages,
    prompter: &mut P,
) -> Result<u32> {
    if let Some(raw) = raw {
        return parse_positive(option, raw, max);
    }

    let answer = prompter.ask_number(&messages.trans(question_key), default)?;
    if !(1..=max).contains(&answer) {
        return Err(Error::invalid_option(option, &answer.to_string()));
    }

    Ok(answer)
}

fn resolve_time_range<P: Prompter + ?Sized>(
    raw: Option<&str>,
    messages: &Messages,
    prompter: &mut P,
) -> Result<TimeRange> {
    if let Some(raw) = raw {
        return TimeRange::parse(raw).ok_or_else(|| Error::invalid_option("time-range", raw));
    }

    let choices: Vec<String> = TimeRange::ALL
        .iter()
        .map(|range| range.label(messages))
        .collect();
    let index = prompter.select(
        &messages.trans(keys::NODES_QUESTION_TIME_RANGE),
        &choices,
        0,
    )?;

    TimeRange::ALL
        .get(index)
        .copied()
        .ok_or_else(|| Error::invalid_option("time-range", &index.to_string()))
}

/// Resolves a generation request into a selection and complete parameters.
///
/// Explicit values win; anything missing is asked through `prompter`, whose
/// answers in turn fall back to the defaults (`limit` 10, `title-words` 5,
/// time range `1`).
///
/// # Errors
///
/// - [`Error::InvalidSelection`] if the catalog is empty, an explicit content
///   type is unknown, or no content type was selected
/// - [`Error::InvalidOption`] if an option value cannot be parsed or lies
///   outside `1..=MAX_LIMIT` / `1..=MAX_TITLE_WORDS`
/// - any error raised by the prompter
pub fn resolve_generation_request<P: Prompter + ?Sized>(
    raw: &RawGenerationInput,
    catalog: &ContentTypeCatalog,
    messages: &Messages,
    prompter: &mut P,
) -> Result<(ContentTypeSelection, GenerationParameters)> {
    let selection = resolve_content_types(&raw.content_types, catalog, messages, prompter)?;

    let limit = resolve_number(
        "limit",
        raw.limit.as_deref(),
        keys::NODES_QUESTION_LIMIT,
        (DEFAULT_LIMIT, MAX_LIMIT),
        messages,
        prompter,
    )?;

    let title_words = resolve_number(
        "title-words",
        raw.title_words.as_deref(),
        keys::NODES_QUESTION_TITLE_WORDS,
        (DEFAULT_TITLE_WORDS, MAX_TITLE_WORDS),
        messages,
        prompter,
    )?;

    let time_range = resolve_time_range(raw.time_range.as_deref(), messages, prompter)?;

    let parameters = GenerationParameters {
        limit,
        title_words,
        time_range,
    };
    debug!(
        "Resolved generation request: {:?} {:?}",
        selection.ids(),
        parameters
    );

    Ok((selection, parameters))
}
