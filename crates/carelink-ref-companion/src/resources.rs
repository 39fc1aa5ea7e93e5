//! Static medical resources: articles, videos, preventive-care tips and FAQs.

use serde::Serialize;

use crate::mock_data;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Articles,
    Videos,
    Preventive,
    Faqs,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 4] = [
        ResourceCategory::Articles,
        ResourceCategory::Videos,
        ResourceCategory::Preventive,
        ResourceCategory::Faqs,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResourceCategory::Articles => "Health Articles",
            ResourceCategory::Videos => "Educational Videos",
            ResourceCategory::Preventive => "Preventive Care",
            ResourceCategory::Faqs => "FAQs",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Resource {
    Article { title: String, summary: String, topic: String, read_minutes: u32 },
    Video { title: String, duration_secs: u32, topic: String },
    PreventiveTip { title: String, description: String, topic: String },
    Faq { question: String, answer: String },
}

impl Resource {
    pub fn category(&self) -> ResourceCategory {
        match self {
            Resource::Article { .. } => ResourceCategory::Articles,
            Resource::Video { .. } => ResourceCategory::Videos,
            Resource::PreventiveTip { .. } => ResourceCategory::Preventive,
            Resource::Faq { .. } => ResourceCategory::Faqs,
        }
    }

    /// Title, or the question for an FAQ.
    pub fn heading(&self) -> &str {
        match self {
            Resource::Article { title, .. }
            | Resource::Video { title, .. }
            | Resource::PreventiveTip { title, .. } => title,
            Resource::Faq { question, .. } => question,
        }
    }

    fn searchable_text(&self) -> Vec<&str> {
        match self {
            Resource::Article { title, summary, topic, .. } => {
                vec![title.as_str(), summary.as_str(), topic.as_str()]
            }
            Resource::Video { title, topic, .. } => vec![title.as_str(), topic.as_str()],
            Resource::PreventiveTip { title, description, topic } => {
                vec![title.as_str(), description.as_str(), topic.as_str()]
            }
            Resource::Faq { question, answer } => vec![question.as_str(), answer.as_str()],
        }
    }

    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.searchable_text().iter().any(|field| field.to_lowercase().contains(needle))
    }
}

/// Formats a video length as `m:ss`.
pub fn format_duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[derive(Debug, Clone)]
pub struct ResourceLibrary {
    items: Vec<Resource>,
}

impl ResourceLibrary {
    pub fn new(items: Vec<Resource>) -> Self {
        Self { items }
    }

    pub fn with_mock_data() -> Self {
        Self::new(mock_data::resources())
    }

    /// Entries of `category` in catalog order. A non-blank `query` keeps only
    /// entries with a field containing it, ignoring case.
    pub fn browse(&self, category: ResourceCategory, query: &str) -> Vec<&Resource> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|r| r.category() == category)
            .filter(|r| needle.is_empty() || r.matches(&needle))
            .collect()
    }

    /// Matching entries across every category.
    pub fn search(&self, query: &str) -> Vec<&Resource> {
        ResourceCategory::ALL.iter().flat_map(|c| self.browse(*c, query)).collect()
    }
}
