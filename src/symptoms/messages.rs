use serde::Serialize;

use crate::models::enums::Language;

/// Canned chatbot strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BotMessages {
    pub welcome: &'static str,
    pub no_symptom: &'static str,
    pub symptom_not_found: &'static str,
    pub disclaimer: &'static str,
    pub emergency: &'static str,
    pub typing: &'static str,
    pub loading: &'static str,
}

static EN: BotMessages = BotMessages {
    welcome: "Hello! I'm your AI symptom checker. Describe your symptoms and I'll help identify possible conditions. Remember, this is not medical advice - consult a doctor for diagnosis.",
    no_symptom: "Please describe your symptoms so I can help you better.",
    symptom_not_found: "I couldn't find specific information for that symptom. Please try describing it differently or mention specific symptoms like headache, fever, cough, etc.",
    disclaimer: "⚠️ AI-powered symptom checker • Not a substitute for medical advice",
    emergency: "🚨 EMERGENCY WARNING: If you're experiencing severe symptoms like chest pain, difficulty breathing, or loss of consciousness, seek immediate medical attention!",
    typing: "AI is analyzing...",
    loading: "🔄 Fetching symptom data...",
};

static HI: BotMessages = BotMessages {
    welcome: "नमस्ते! मैं आपका AI लक्षण जांचकर्ता हूं। अपने लक्षणों का वर्णन करें और मैं संभावित स्थितियों की पहचान करने में मदद करूंगा। याद रखें, यह चिकित्सा सलाह नहीं है - निदान के लिए डॉक्टर से सलाह लें।",
    no_symptom: "कृपया अपने लक्षणों का वर्णन करें ताकि मैं आपकी बेहतर मदद कर सकूं।",
    symptom_not_found: "मुझे उस लक्षण की विशिष्ट जानकारी नहीं मिल सकी। कृपया इसे अलग तरीके से वर्णन करने का प्रयास करें या सिरदर्द, बुखार, खांसी आदि जैसे विशिष्ट लक्षणों का उल्लेख करें।",
    disclaimer: "⚠️ AI-संचालित लक्षण जांचकर्ता • चिकित्सा सलाह का विकल्प नहीं",
    emergency: "🚨 आपातकालीन चेतावनी: यदि आप गंभीर लक्षणों का अनुभव कर रहे हैं जैसे सीने में दर्द, सांस लेने में तकलीफ, या चेतना खोना, तो तत्काल चिकित्सा सहायता लें!",
    typing: "AI विश्लेषण कर रहा है...",
    loading: "🔄 लक्षण डेटा प्राप्त कर रहा है...",
};

static PA: BotMessages = BotMessages {
    welcome: "ਸਤ ਸ੍ਰੀ ਅਕਾਲ! ਮੈਂ ਤੁਹਾਡਾ AI ਲੱਛਣ ਚੈਕਰ ਹਾਂ। ਆਪਣੇ ਲੱਛਣਾਂ ਦਾ ਵਰਣਨ ਕਰੋ ਅਤੇ ਮੈਂ ਸੰਭਾਵਿਤ ਸਥਿਤੀਆਂ ਦੀ ਪਛਾਣ ਕਰਨ ਵਿੱਚ ਮਦਦ ਕਰਾਂਗਾ। ਯਾਦ ਰੱਖੋ, ਇਹ ਮੈਡੀਕਲ ਸਲਾਹ ਨਹੀਂ ਹੈ - ਨਿਦਾਨ ਲਈ ਡਾਕਟਰ ਨਾਲ ਸਲਾਹ ਲਓ।",
    no_symptom: "ਕਿਰਪਾ ਕਰਕੇ ਆਪਣੇ ਲੱਛਣਾਂ ਦਾ ਵਰਣਨ ਕਰੋ ਤਾਂ ਜੋ ਮੈਂ ਤੁਹਾਡੀ ਬਿਹਤਰ ਮਦਦ ਕਰ ਸਕਾਂ।",
    symptom_not_found: "ਮੈਨੂੰ ਉਸ ਲੱਛਣ ਦੀ ਵਿਸ਼ੇਸ਼ ਜਾਣਕਾਰੀ ਨਹੀਂ ਮਿਲ ਸਕੀ। ਕਿਰਪਾ ਕਰਕੇ ਇਸਨੂੰ ਵੱਖਰੇ ਢੰਗ ਨਾਲ ਵਰਣਨ ਕਰਨ ਦੀ ਕੋਸ਼ਿਸ਼ ਕਰੋ ਜਾਂ ਖਾਸ ਲੱਛਣਾਂ ਜਿਵੇਂ ਸਿਰਦਰਦ, ਬੁਖਾਰ, ਖਾਂਸੀ ਆਦਿ ਦਾ ਜ਼ਿਕਰ ਕਰੋ।",
    disclaimer: "⚠️ AI-ਸੰਚਾਲਿਤ ਲੱਛਣ ਚੈਕਰ • ਮੈਡੀਕਲ ਸਲਾਹ ਦਾ ਵਿਕਲਪ ਨਹੀਂ",
    emergency: "🚨 ਐਮਰਜੈਂਸੀ ਚੇਤਾਵਨੀ: ਜੇਕਰ ਤੁਸੀਂ ਗੰਭੀਰ ਲੱਛਣਾਂ ਦਾ ਅਨੁਭਵ ਕਰ ਰਹੇ ਹੋ ਜਿਵੇਂ ਛਾਤੀ ਵਿੱਚ ਦਰਦ, ਸਾਹ ਲੈਣ ਵਿੱਚ ਮੁਸ਼ਕਲ, ਜਾ ਹੋਸ਼ ਖੋ ਦੇਣਾ, ਤਾਂ ਤੁਰੰਤ ਮੈਡੀਕਲ ਸਹਾਇਤਾ ਲਓ!",
    typing: "AI ਵਿਸ਼ਲੇਸ਼ਣ ਕਰ ਰਿਹਾ ਹੈ...",
    loading: "🔄 ਲੱਛਣ ਡੇਟਾ ਪ੍ਰਾਪਤ ਕਰ ਰਿਹਾ ਹੈ...",
};

/// Get the canned chatbot strings for a language.
pub fn bot_messages(language: Language) -> &'static BotMessages {
    match language {
        Language::English => &EN,
        Language::Hindi => &HI,
        Language::Punjabi => &PA,
    }
}

/// Shown when building a response fails. Not localized.
pub const GENERIC_APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

/// Home-screen support chat greeting.
pub const SUPPORT_WELCOME: &str =
    "Hello! Welcome to Chiktisa365 Chat Support. How can I help you today?";

/// Home-screen support chat reply to every user message.
pub const SUPPORT_ACKNOWLEDGEMENT: &str = "Thank you for your message. Your query has been \
     submitted to our support team. We will get back to you shortly.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_all_strings() {
        for lang in Language::ALL {
            let m = bot_messages(*lang);
            for s in [
                m.welcome,
                m.no_symptom,
                m.symptom_not_found,
                m.disclaimer,
                m.emergency,
                m.typing,
                m.loading,
            ] {
                assert!(!s.is_empty(), "empty bot string for {lang}");
            }
        }
    }

    #[test]
    fn disclaimers_share_warning_prefix() {
        for lang in Language::ALL {
            assert!(bot_messages(*lang).disclaimer.starts_with("⚠️"));
        }
    }

    #[test]
    fn not_found_messages_differ_per_language() {
        let en = bot_messages(Language::English).symptom_not_found;
        let hi = bot_messages(Language::Hindi).symptom_not_found;
        let pa = bot_messages(Language::Punjabi).symptom_not_found;
        assert_ne!(en, hi);
        assert_ne!(hi, pa);
        assert!(en.contains("headache, fever, cough"));
    }
}
