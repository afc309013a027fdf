//! Knowledge-base assembly and query surface.
//!
//! Built for small FAQ sets that load wholesale from one CSV file and
//! fit comfortably in memory. Ingest produces a plain value; there is
//! no incremental update path. Refreshing the data means ingesting
//! again and swapping the value.
//!
//! Threading:
//! - [`KnowledgeBase`] is immutable after ingest, so shared references
//!   are safe to read from any thread.

mod facet;
mod stats;
mod types;

pub use facet::{categories, filter};
pub use stats::BaseStats;
pub use types::{KnowledgeBase, DEFAULT_PAGE_SIZE, RECENT_WINDOW_DAYS, TOP_PICKS_LIMIT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank;
    use faqdex_types::{CategoryFilter, DateKey};

    const SAMPLE: &str = "\
question,keywords,category,answer_short,answer_steps,last_updated,source_note
no hot water,heater boiler,Repairs,check the pilot light,press reset and wait ten minutes,2026-02-13,maintenance desk
low water pressure,pressure tap,Water,clean the aerator,unscrew the tap head and rinse,2026-02-03,maintenance desk
guest parking,parking visitor,Parking,register the plate,fill the form at the lobby desk,2026-02-01,front desk
wifi password,wifi network,,ask the front desk,show your lease at the desk,,front desk
";

    #[test]
    fn ingest_end_to_end() {
        let kb = KnowledgeBase::ingest(SAMPLE);

        assert_eq!(kb.len(), 4);
        assert!(!kb.is_empty());

        // Newest first, undated last.
        assert_eq!(kb.records()[0].question, "no hot water");
        assert_eq!(kb.records()[3].question, "wifi password");

        assert_eq!(kb.get(0).map(|r| r.question.as_str()), Some("no hot water"));
        assert!(kb.get(99).is_none());
    }

    #[test]
    fn categories_faceted_on_ingest() {
        let kb = KnowledgeBase::ingest(SAMPLE);
        assert_eq!(kb.categories(), ["Other", "Parking", "Repairs", "Water"]);
    }

    #[test]
    fn select_all_and_by_name() {
        let kb = KnowledgeBase::ingest(SAMPLE);

        let all = kb.select(&CategoryFilter::All);
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].question, "no hot water");

        let water = kb.select(&CategoryFilter::Name("Water".to_string()));
        assert_eq!(water.len(), 1);
        assert_eq!(water[0].question, "low water pressure");
    }

    #[test]
    fn stats_snapshot() {
        let kb = KnowledgeBase::ingest(SAMPLE);
        let stats = kb.stats();

        assert_eq!(stats.num_records, 4);
        assert_eq!(stats.num_categories, 4);
        assert_eq!(stats.num_dated, 3);
        assert_eq!(stats.latest_update, Some(DateKey(20260213)));
        assert_eq!(stats.latest_month().as_deref(), Some("2026-02"));
        assert_eq!(
            stats.to_string(),
            "4 records, 4 categories, 3 dated, latest 2026-02"
        );
    }

    #[test]
    fn empty_base() {
        let empty = KnowledgeBase::new();
        assert!(empty.is_empty());
        assert!(empty.categories().is_empty());

        let ingested = KnowledgeBase::ingest("");
        assert!(ingested.is_empty());

        let stats = ingested.stats();
        assert_eq!(stats.num_records, 0);
        assert_eq!(stats.latest_update, None);
        assert_eq!(stats.latest_month(), None);
        assert_eq!(stats.to_string(), "0 records, 0 categories, 0 dated");
    }

    #[test]
    fn standalone_facets_compose() {
        let kb = KnowledgeBase::ingest(SAMPLE);

        assert_eq!(categories(kb.records()), kb.categories());

        let filtered = filter(kb.records(), &CategoryFilter::Name("Parking".to_string()));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].question, "guest parking");
    }

    #[test]
    fn top_picks_follow_the_active_selection() {
        let kb = KnowledgeBase::ingest(SAMPLE);

        // The landing view ranks one selection and draws its picks
        // from that same ranked list.
        let ranked = rank::by_relevance(&kb.select(&CategoryFilter::All), "water");
        let picks = rank::by_completeness(&ranked);

        let questions: Vec<&str> = picks.iter().map(|r| r.question.as_str()).collect();
        assert_eq!(questions, ["no hot water", "low water pressure"]);
    }
}
