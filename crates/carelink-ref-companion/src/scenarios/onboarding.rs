//! Scenario 1: Onboarding and Resume
//!
//! Walks the gated entry flow against the file-backed session store:
//!   1. Resume from whatever the session file holds
//!   2. A jump straight to the dashboard is refused while unverified
//!   3. Pick a language (persisted immediately)
//!   4. A malformed token is rejected; the gate resets when the input changes
//!   5. The demo token is verified and the dashboard opens
//!   6. A restarted navigator lands directly on the dashboard
//!   7. Tour every dashboard destination and back, then open settings
//!
//! Running it a second time starts at step 6, because the session file
//! remembers the first run. `demo reset` removes the file.

use std::sync::Arc;

use carelink_contracts::{error::CareLinkResult, screen::Screen, text::TextKey};
use carelink_core::{
    traits::{SessionStore, TranslationProvider},
    CredentialGate, Navigator,
};
use carelink_session::FileSessionStore;

use crate::{
    config::CompanionConfig, i18n::StaticTranslations, mock_data::DEMO_TOKEN,
    verifier::SimulatedVerifier,
};

const MALFORMED_TOKEN: &str = "sk-not-a-companion-key";

pub async fn run_scenario(config: &CompanionConfig, language: &str) -> CareLinkResult<()> {
    println!("=== Scenario 1: Onboarding and Resume ===");
    println!();

    let t = StaticTranslations;
    let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(&config.session.path));
    let mut nav = Navigator::resume(Arc::clone(&store));

    println!("  Session file: {}", config.session.path.display());
    println!("  Resumed at:   {:?}", nav.current());
    println!();

    if nav.current() == Screen::Language {
        println!("  {}", t.text(language, TextKey::LanguageTitle));
        if let Err(e) = nav.go_to(Screen::Dashboard) {
            println!("  go_to(Dashboard) before onboarding → refused: {}", e);
        }
        nav.choose_language(language)?;
        println!("  Language '{}' saved → now at {:?}", language, nav.current());
        println!();
    }

    if nav.current() == Screen::Credential {
        let code = nav.session().language_code.clone().unwrap_or_else(|| language.to_string());
        let policy = config.credential.policy();
        let verifier = SimulatedVerifier::new(policy.clone(), config.credential.simulated_latency());
        let gate = CredentialGate::new(
            policy,
            Arc::new(verifier),
            Arc::clone(&store),
            config.credential.verify_timeout(),
        );

        println!("  {}", t.text(&code, TextKey::CredentialTitle));
        println!("  {}", t.text(&code, TextKey::CredentialSubtitle));

        let outcome = gate.submit(MALFORMED_TOKEN).await;
        println!(
            "  Submit '{}' → {:?}: {}",
            MALFORMED_TOKEN,
            outcome,
            t.text(&code, TextKey::CredentialInvalid)
        );
        if let Err(e) = nav.accept_credential(outcome) {
            println!("  Dashboard stays locked: {}", e);
        }

        gate.input_changed();
        println!("  Input edited → gate {:?}", gate.state());
        println!("  {}", t.text(&code, TextKey::CredentialValidating));

        let outcome = gate.submit(DEMO_TOKEN).await;
        println!("  Submit demo token → {:?}: {}", outcome, t.text(&code, TextKey::CredentialValid));
        nav.accept_credential(outcome)?;
        println!("  Now at {:?}", nav.current());
        println!();
    }

    // A fresh navigator over the same store stands in for an app restart.
    let mut nav = Navigator::resume(Arc::clone(&store));
    let code = nav.session().language_code.clone().unwrap_or_else(|| language.to_string());
    println!("  Restart → resumed at {:?}", nav.current());
    println!("  {}", t.text(&code, TextKey::DashboardGreeting));
    println!();

    for destination in Screen::DASHBOARD_DESTINATIONS {
        nav.go_to(destination)?;
        println!("  → {:<15} {}", format!("{:?}", destination), t.text(&code, destination.title_key()));
        nav.back()?;
    }
    println!();

    nav.open_settings()?;
    let session = nav.session();
    println!(
        "  {} → {:?} (language {:?}, verified {} kept)",
        t.text(&code, TextKey::Settings),
        nav.current(),
        session.language_code,
        session.credential_verified
    );
    println!();

    Ok(())
}
