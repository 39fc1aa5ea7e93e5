//! Scenario 2: Symptom Check
//!
//! Selects the chest on the body diagram, ticks chest pain and cough, and
//! prints the ranked conditions. Then shows that a symptom from another
//! region is refused and that switching regions starts a fresh selection.

use carelink_contracts::{error::CareLinkResult, text::TextKey};
use carelink_core::traits::TranslationProvider;

use crate::{config::CompanionConfig, i18n::StaticTranslations};

pub fn run_scenario(config: &CompanionConfig, language: &str) -> CareLinkResult<()> {
    println!("=== Scenario 2: Symptom Check ===");
    println!();

    let t = StaticTranslations;
    let mut engine = config.symptoms.engine()?;

    println!("  {}", t.text(language, TextKey::SymptomCheckerTitle));
    println!("  {}", t.text(language, TextKey::SelectBodyPart));
    for region in engine.catalog().regions() {
        println!(
            "    {:<9} ({:>2},{:>2})  {}",
            region.id,
            region.position.x,
            region.position.y,
            region.candidate_symptoms.join(", ")
        );
    }
    println!();

    let region = engine.select_region("chest")?;
    println!("  Region: {}", region.display_name);
    println!("  {}", t.text(language, TextKey::SelectSymptoms));
    for symptom in ["Chest pain", "Cough"] {
        engine.toggle_symptom(symptom)?;
        println!("    [x] {}", symptom);
    }
    println!();

    println!("  {}:", t.text(language, TextKey::PossibleConditions));
    for candidate in engine.infer_conditions() {
        println!("    {:<22} {} matching symptom(s)", candidate.label, candidate.supporting_symptom_count);
    }
    println!();

    match engine.toggle_symptom("Headache") {
        Err(e) => println!("  Toggle 'Headache' on the chest → refused: {}", e),
        Ok(_) => println!("  Toggle 'Headache' on the chest → unexpectedly accepted"),
    }

    engine.select_region("head")?;
    println!(
        "  Switch to head → selection cleared ({} selected, {} conditions)",
        engine.selection().len(),
        engine.infer_conditions().len()
    );
    println!();
    println!("  {}", t.text(language, TextKey::Disclaimer));
    println!();

    Ok(())
}
