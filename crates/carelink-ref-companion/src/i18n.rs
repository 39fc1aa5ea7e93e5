//! Built-in string tables for English, Hindi, Telugu and Tamil.
//!
//! The onboarding language screen and the back button only exist in English;
//! the other locales leave those keys out and resolve them through the
//! English fallback in `TranslationProvider::text`.

use carelink_contracts::{language::Locale, text::TextKey};
use carelink_core::traits::TranslationProvider;

/// Compiled-in translation catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticTranslations;

impl TranslationProvider for StaticTranslations {
    fn lookup(&self, locale: Locale, key: TextKey) -> Option<&str> {
        match locale {
            Locale::En => english(key),
            Locale::Hi => hindi(key),
            Locale::Te => telugu(key),
            Locale::Ta => tamil(key),
        }
    }
}

fn english(key: TextKey) -> Option<&'static str> {
    use TextKey::*;
    Some(match key {
        AppTitle => "HealthCare Assistant",
        Back => "Back",
        LanguageTitle => "Choose your preferred language",
        LanguageSubtitle => "Your health companion in your language",
        CredentialTitle => "API Key Setup",
        CredentialSubtitle => "Enter your AI API key to enable smart features",
        CredentialSubmit => "Verify & Continue",
        CredentialValidating => "Validating...",
        CredentialValid => "API key is valid!",
        CredentialInvalid => "Invalid API key. Please try again.",
        CredentialRequired => "API key is required to continue",
        DashboardTitle => "Health Dashboard",
        DashboardGreeting => "Good morning! How are you feeling today?",
        Settings => "Settings",
        SymptomCheckerTitle => "Symptom Checker",
        SelectBodyPart => "Select a body part from the diagram",
        SelectSymptoms => "Select your symptoms:",
        PossibleConditions => "Possible conditions",
        Disclaimer => "This is for informational purposes only. Consult a healthcare professional for diagnosis.",
        ChatTitle => "AI Health Assistant",
        ChatWelcome => "Ask me anything about your health",
        DoctorPortalTitle => "Doctor Portal",
        ResourcesTitle => "Medical Resources",
        FollowUpTitle => "Follow-up System",
        StatusImproved => "Improved",
        StatusSame => "Same",
        StatusWorsened => "Worsened",
        SubmitUpdate => "Submit Update",
    })
}

fn hindi(key: TextKey) -> Option<&'static str> {
    use TextKey::*;
    Some(match key {
        CredentialTitle => "API की सेटअप",
        CredentialSubtitle => "स्मार्ट सुविधाओं को सक्षम करने के लिए अपनी AI API की दर्ज करें",
        CredentialSubmit => "सत्यापित करें और जारी रखें",
        CredentialValidating => "सत्यापन जारी...",
        CredentialValid => "API की वैध है!",
        CredentialInvalid => "अमान्य API की। कृपया पुनः प्रयास करें।",
        CredentialRequired => "जारी रखने के लिए API की आवश्यक है",
        DashboardTitle => "स्वास्थ्य डैशबोर्ड",
        DashboardGreeting => "शुभ प्रभात! आज आप कैसा महसूस कर रहे हैं?",
        Settings => "सेटिंग्स",
        SymptomCheckerTitle => "लक्षण जांचकर्ता",
        SelectBodyPart => "आरेख से शरीर का भाग चुनें",
        SelectSymptoms => "अपने लक्षण चुनें:",
        PossibleConditions => "संभावित स्थितियां",
        Disclaimer => "यह केवल सूचनात्मक उद्देश्यों के लिए है। निदान के लिए स्वास्थ्य पेशेवर से सलाह लें।",
        ChatTitle => "AI स्वास्थ्य सहायक",
        ChatWelcome => "अपने स्वास्थ्य के बारे में कुछ भी पूछें",
        DoctorPortalTitle => "डॉक्टर पोर्टल",
        ResourcesTitle => "चिकित्सा संसाधन",
        FollowUpTitle => "फॉलो-अप सिस्टम",
        StatusImproved => "बेहतर हुआ",
        StatusSame => "वैसा ही",
        StatusWorsened => "बदतर हुआ",
        SubmitUpdate => "अपडेट सबमिट करें",
        AppTitle | Back | LanguageTitle | LanguageSubtitle => return None,
    })
}

fn telugu(key: TextKey) -> Option<&'static str> {
    use TextKey::*;
    Some(match key {
        CredentialTitle => "API కీ సెటప్",
        CredentialSubtitle => "స్మార్ట్ ఫీచర్లను ఎనేబుల్ చేయడానికి మీ AI API కీని ఎంటర్ చేయండి",
        CredentialSubmit => "వెరిఫై & కంటిన్యూ",
        CredentialValidating => "వెరిఫై చేస్తున్నాం...",
        CredentialValid => "API కీ వాలిడ్!",
        CredentialInvalid => "ఇన్వాలిడ్ API కీ. దయచేసి మళ్లీ ప్రయత్నించండి.",
        CredentialRequired => "కంటిన్యూ చేయడానికి API కీ అవసరం",
        DashboardTitle => "హెల్త్ డ్యాష్‌బోర్డ్",
        DashboardGreeting => "శుభోదయం! ఈరోజు మీరు ఎలా ఉన్నారు?",
        Settings => "సెట్టింగులు",
        SymptomCheckerTitle => "లక్షణ తనిఖీ",
        SelectBodyPart => "రేఖాచిత్రం నుండి శరీర భాగాన్ని ఎంచుకోండి",
        SelectSymptoms => "మీ లక్షణాలను ఎంచుకోండి:",
        PossibleConditions => "సాధ్యమైన పరిస్థితులు",
        Disclaimer => "ఇది కేవలం సమాచార ప్రయోజనాల కోసం మాత్రమే. రోగ నిర్ధారణ కోసం వైద్య నిపుణుడిని సంప్రదించండి.",
        ChatTitle => "AI ఆరోగ్య సహాయకుడు",
        ChatWelcome => "మీ ఆరోగ్యం గురించి ఏదైనా అడగండి",
        DoctorPortalTitle => "డాక్టర్ పోర్టల్",
        ResourcesTitle => "వైద్య వనరులు",
        FollowUpTitle => "ఫాలో-అప్ సిస్టమ్",
        StatusImproved => "మెరుగుపడింది",
        StatusSame => "అలాగే ఉంది",
        StatusWorsened => "అధ్వాన్నంగా",
        SubmitUpdate => "అప్‌డేట్ సబ్మిట్ చేయండి",
        AppTitle | Back | LanguageTitle | LanguageSubtitle => return None,
    })
}

fn tamil(key: TextKey) -> Option<&'static str> {
    use TextKey::*;
    Some(match key {
        CredentialTitle => "API கீ செட்அப்",
        CredentialSubtitle => "ஸ்மார்ட் அம்சங்களை இயக்க உங்கள் AI API கீயை உள்ளிடவும்",
        CredentialSubmit => "சரிபார் & தொடர்",
        CredentialValidating => "சரிபார்க்கிறோம்...",
        CredentialValid => "API கீ செல்லுபடியாகும்!",
        CredentialInvalid => "தவறான API கீ. மீண்டும் முயற்சிக்கவும்.",
        CredentialRequired => "தொடர API கீ தேவை",
        DashboardTitle => "ஆரோக்கிய டாஷ்போர்டு",
        DashboardGreeting => "காலை வணக்கம்! இன்று நீங்கள் எப்படி உணர்கிறீர்கள்?",
        Settings => "அமைப்புகள்",
        SymptomCheckerTitle => "அறிகுறி சரிபார்ப்பு",
        SelectBodyPart => "வரைபடத்திலிருந்து உடல் பகுதியைத் தேர்ந்தெடுக்கவும்",
        SelectSymptoms => "உங்கள் அறிகுறிகளைத் தேர்ந்தெடுக்கவும்:",
        PossibleConditions => "சாத்தியமான நிலைகள்",
        Disclaimer => "இது தகவல் நோக்கங்களுக்காக மட்டுமே. நோயறிதலுக்கு சுகாதார நிபுணரை அணுகவும்.",
        ChatTitle => "AI ஆரோக்கிய உதவியாளர்",
        ChatWelcome => "உங்கள் ஆரோக்கியத்தைப் பற்றி எதையும் கேளுங்கள்",
        DoctorPortalTitle => "மருத்துவர் போர்ட்டல்",
        ResourcesTitle => "மருத்துவ ஆதாரங்கள்",
        FollowUpTitle => "பின்தொடர்தல் அமைப்பு",
        StatusImproved => "மேம்பட்டது",
        StatusSame => "அப்படியே",
        StatusWorsened => "மோசமாகிவிட்டது",
        SubmitUpdate => "புதுப்பிப்பைச் சமர்ப்பிக்கவும்",
        AppTitle | Back | LanguageTitle | LanguageSubtitle => return None,
    })
}

#[cfg(test)]
mod tests {
    use carelink_contracts::{language::Locale, text::TextKey};
    use carelink_core::traits::TranslationProvider;

    use super::StaticTranslations;

    #[test]
    fn english_covers_every_key() {
        for key in TextKey::ALL {
            let s = StaticTranslations.lookup(Locale::En, key);
            assert!(s.is_some_and(|s| !s.is_empty()), "missing English text for {key:?}");
        }
    }

    #[test]
    fn every_locale_resolves_every_key() {
        for locale in Locale::ALL {
            for key in TextKey::ALL {
                assert!(!StaticTranslations.text(locale.code(), key).is_empty());
            }
        }
    }

    #[test]
    fn locales_return_their_own_text() {
        let t = StaticTranslations;
        assert_eq!(t.text("en", TextKey::DashboardTitle), "Health Dashboard");
        assert_eq!(t.text("hi", TextKey::DashboardTitle), "स्वास्थ्य डैशबोर्ड");
        assert_eq!(t.text("te", TextKey::StatusImproved), "మెరుగుపడింది");
        assert_eq!(t.text("ta", TextKey::ChatWelcome), "உங்கள் ஆரோக்கியத்தைப் பற்றி எதையும் கேளுங்கள்");
    }

    #[test]
    fn missing_keys_and_unknown_codes_fall_back_to_english() {
        let t = StaticTranslations;
        assert_eq!(t.lookup(Locale::Hi, TextKey::Back), None);
        assert_eq!(t.text("hi", TextKey::Back), "Back");
        assert_eq!(t.text("fr", TextKey::CredentialSubmit), "Verify & Continue");
        assert_eq!(t.text("", TextKey::AppTitle), "HealthCare Assistant");
    }
}
