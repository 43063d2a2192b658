//! Batch node generation.
//!
//! The generator turns a content-type selection and resolved parameters into
//! node drafts and hands them to a [`ContentApi`], which decides what gets
//! created and what is rejected.

use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parameters::{ContentTypeSelection, GenerationParameters};

pub const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];

/// A node the generator asks the content API to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDraft {
    pub content_type: String,
    pub title: String,
    pub created: DateTime<Utc>,
}

/// A node the content API created.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    pub id: u64,
    pub content_type: String,
    pub title: String,
    pub created: DateTime<Utc>,
}

impl NodeRecord {
    #[must_use]
    pub fn as_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.content_type.clone(),
            self.title.clone(),
            self.created.format(CREATED_FORMAT).to_string(),
        ]
    }
}

/// A draft the content API refused, with its reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedNode {
    pub draft: NodeDraft,
    pub reason: String,
}

/// Outcome of a batch, in the order the content API reported it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    pub success: Vec<NodeRecord>,
    pub failure: Vec<FailedNode>,
}

impl GenerationResult {
    #[must_use]
    pub fn processed(&self) -> usize {
        self.success.len() + self.failure.len()
    }
}

/// Creates nodes on behalf of the generator.
pub trait ContentApi {
    /// Creates a batch of nodes, reporting per-draft success or failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch as a whole could not be processed.
    fn create_nodes(&mut self, drafts: Vec<NodeDraft>) -> Result<GenerationResult>;
}

pub struct BatchGenerator<R: Rng> {
    rng: R,
    now: DateTime<Utc>,
}

impl<R: Rng> BatchGenerator<R> {
    /// `now` is the invocation time all creation offsets are measured from.
    pub fn new(rng: R, now: DateTime<Utc>) -> Self {
        Self { rng, now }
    }

    fn title(&mut self, word_count: u32) -> String {
        let words: Vec<&str> = (0..word_count)
            .filter_map(|_| WORDS.choose(&mut self.rng).copied())
            .collect();

        let mut title = words.join(" ");
        if let Some(first) = title.get(0..1).map(str::to_uppercase) {
            title.replace_range(0..1, &first);
        }
        title
    }

    fn created(&mut self, range_seconds: u32) -> DateTime<Utc> {
        if range_seconds == 0 {
            return self.now;
        }

        let offset = self.rng.gen_range(0..=range_seconds);
        self.now - Duration::seconds(i64::from(offset))
    }

    /// Builds `limit` drafts from the selection and parameters.
    pub fn draft_nodes(
        &mut self,
        selection: &ContentTypeSelection,
        parameters: &GenerationParameters,
    ) -> Vec<NodeDraft> {
        let range_seconds = parameters.time_range_seconds();

        (0..parameters.limit)
            .filter_map(|_| {
                let content_type = selection.ids().choose(&mut self.rng)?.clone();
                Some(NodeDraft {
                    content_type,
                    title: self.title(parameters.title_words),
                    created: self.created(range_seconds),
                })
            })
            .collect()
    }

    /// Drafts a batch and delegates it to `api`.
    ///
    /// # Errors
    ///
    /// Returns a delegation failure carrying the content API's message if the
    /// batch could not be processed.
    pub fn generate<A: ContentApi + ?Sized>(
        &mut self,
        api: &mut A,
        selection: &ContentTypeSelection,
        parameters: &GenerationParameters,
    ) -> Result<GenerationResult> {
        let drafts = self.draft_nodes(selection, parameters);
        debug!("Requesting {} nodes from the content API", drafts.len());

        let result = api
            .create_nodes(drafts)
            .map_err(crate::error::Error::into_delegation)?;

        info!(
            "Content API created {} nodes, rejected {}",
            result.success.len(),
            result.failure.len()
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ContentTypeCatalog;
    use crate::error::Error;
    use crate::parameters::TimeRange;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn generator() -> BatchGenerator<StdRng> {
        BatchGenerator::new(StdRng::seed_from_u64(7), now())
    }

    fn selection(ids: &[&str]) -> ContentTypeSelection {
        let entries = [("article", "Article"), ("page", "Basic page")]
            .iter()
            .map(|(id, label)| (id.to_string(), label.to_string()))
            .collect();
        let catalog = ContentTypeCatalog::new(entries);
        ContentTypeSelection::new(ids.iter().map(ToString::to_string).collect(), &catalog).unwrap()
    }

    #[test]
    fn test_title_word_count_and_capitalization() {
        let mut generator = generator();
        let title = generator.title(4);

        assert_eq!(title.split(' ').count(), 4);
        assert!(title.chars().next().unwrap().is_uppercase());
    }

    #[test]
    fn test_created_without_range_is_now() {
        let mut generator = generator();
        for _ in 0..20 {
            assert_eq!(generator.created(0), now());
        }
    }

    #[test]
    fn test_created_within_range() {
        let mut generator = generator();
        let range = TimeRange::Day.seconds();
        for _ in 0..100 {
            let created = generator.created(range);
            assert!(created <= now());
            assert!(created >= now() - Duration::seconds(i64::from(range)));
        }
    }

    #[test]
    fn test_same_seed_same_drafts() {
        let selection = selection(&["article"]);
        let parameters = GenerationParameters {
            limit: 5,
            title_words: 3,
            time_range: TimeRange::Week,
        };

        let first = generator().draft_nodes(&selection, &parameters);
        let second = generator().draft_nodes(&selection, &parameters);
        assert_eq!(first, second);
    }

    struct FailingApi;

    impl ContentApi for FailingApi {
        fn create_nodes(&mut self, _drafts: Vec<NodeDraft>) -> Result<GenerationResult> {
            Err(Error::Misc("database is locked".to_string()))
        }
    }

    #[test]
    fn test_generate_wraps_api_error() {
        let selection = selection(&["page"]);
        let result = generator().generate(
            &mut FailingApi,
            &selection,
            &GenerationParameters::default(),
        );

        match result {
            Err(Error::Delegation(message)) => assert!(message.contains("database is locked")),
            other => panic!("Expected delegation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_node_record_row() {
        let record = NodeRecord {
            id: 12,
            content_type: "article".to_string(),
            title: "Lorem ipsum".to_string(),
            created: now(),
        };
        assert_eq!(
            record.as_row(),
            vec!["12", "article", "Lorem ipsum", "2024-05-01 12:00:00"]
        );
    }
}
