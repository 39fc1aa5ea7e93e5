//! Scenario 5: Medical Resources
//!
//! Lists each category of the resource library, then runs a query across
//! all of them.

use carelink_contracts::{error::CareLinkResult, text::TextKey};
use carelink_core::traits::TranslationProvider;

use crate::{
    i18n::StaticTranslations,
    resources::{format_duration, Resource, ResourceCategory, ResourceLibrary},
};

fn describe(resource: &Resource) -> String {
    match resource {
        Resource::Article { title, topic, read_minutes, .. } => {
            format!("{} [{}, {} min read]", title, topic, read_minutes)
        }
        Resource::Video { title, duration_secs, topic } => {
            format!("{} [{}, {}]", title, topic, format_duration(*duration_secs))
        }
        Resource::PreventiveTip { title, topic, .. } => format!("{} [{}]", title, topic),
        Resource::Faq { question, .. } => question.clone(),
    }
}

pub fn run_scenario(language: &str, query: &str) -> CareLinkResult<()> {
    println!("=== Scenario 5: Medical Resources ===");
    println!();

    let library = ResourceLibrary::with_mock_data();
    println!("  {}", StaticTranslations.text(language, TextKey::ResourcesTitle));

    for category in ResourceCategory::ALL {
        println!("  {}:", category.label());
        for resource in library.browse(category, "") {
            println!("    - {}", describe(resource));
        }
    }
    println!();

    let hits = library.search(query);
    println!("  Search '{}' → {} result(s)", query, hits.len());
    for resource in hits {
        println!("    - ({}) {}", resource.category().label(), resource.heading());
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_each_kind() {
        let library = ResourceLibrary::with_mock_data();
        let video = library.browse(ResourceCategory::Videos, "hand")[0];
        assert_eq!(describe(video), "Proper Hand Washing Technique [Hygiene, 3:24]");

        let article = library.browse(ResourceCategory::Articles, "depression")[0];
        assert!(describe(article).ends_with("[Psychology, 6 min read]"));
    }

    #[test]
    fn runs_with_any_query() {
        assert!(run_scenario("hi", "heart").is_ok());
        assert!(run_scenario("hi", "").is_ok());
    }
}
