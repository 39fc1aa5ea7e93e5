//! Scenario 4: Chat Assistant
//!
//! Opens a chat in the chosen language, sends a question and waits for the
//! delayed reply. Then sends a second question and leaves the chat before
//! the reply lands: the pending reply is cancelled and never appears.

use std::time::Duration;

use carelink_contracts::{error::CareLinkResult, text::TextKey};
use carelink_core::traits::TranslationProvider;

use crate::{assistant::ChatAssistant, config::CompanionConfig, i18n::StaticTranslations};

pub async fn run_scenario(config: &CompanionConfig, language: &str) -> CareLinkResult<()> {
    println!("=== Scenario 4: Chat Assistant ===");
    println!();

    let t = StaticTranslations;
    let delay = config.assistant.reply_delay();
    let mut chat = ChatAssistant::open(&t, language, delay);
    println!("  {}", t.text(language, TextKey::ChatTitle));

    chat.send("   ");
    println!("  Blank message ignored ({} message in log)", chat.messages().len());

    chat.send("I have had a mild headache since yesterday");
    println!("  Question sent; {} reply pending, waiting {} ms", chat.pending_replies(), delay.as_millis());
    tokio::time::sleep(delay + Duration::from_millis(50)).await;
    println!();

    for message in chat.messages() {
        let who = if message.from_user { "You" } else { "Assistant" };
        println!("  [{}] {}", who, message.text);
    }
    println!();

    chat.send("Should I take paracetamol?");
    let before = chat.messages().len();
    println!("  Second question sent; leaving the chat with {} reply pending", chat.pending_replies());
    chat.close();
    tokio::time::sleep(delay + Duration::from_millis(50)).await;
    println!(
        "  After the delay: {} message(s), reply cancelled: {}",
        chat.messages().len(),
        chat.messages().len() == before
    );
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn runs_with_short_delay() {
        let mut config = CompanionConfig::default();
        config.assistant.reply_delay_ms = 5;
        assert!(run_scenario(&config, "en").await.is_ok());
    }
}
