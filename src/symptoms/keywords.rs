use crate::models::enums::Language;

/// Keyword lists per symptom key. Declaration order is match priority:
/// the first key with any keyword contained in the input wins.
type KeywordTable = &'static [(&'static str, &'static [&'static str])];

static EN_KEYWORDS: KeywordTable = &[
    ("headache", &["headache", "head pain", "head ache", "migraine"]),
    ("fever", &["fever", "temperature", "hot", "burning up"]),
    ("cough", &["cough", "coughing", "hack", "chest cough"]),
    ("stomach pain", &["stomach pain", "abdominal pain", "belly ache", "tummy pain"]),
    ("chest pain", &["chest pain", "heart pain", "chest discomfort"]),
    ("nausea", &["nausea", "sick", "queasy", "feel like vomiting"]),
    ("dizziness", &["dizziness", "lightheaded", "vertigo", "spinning"]),
    ("fatigue", &["fatigue", "tired", "exhausted", "weakness"]),
    ("back pain", &["back pain", "backache", "spine pain"]),
    ("sore throat", &["sore throat", "throat pain", "difficulty swallowing"]),
    ("rash", &["rash", "skin irritation", "red spots", "hives"]),
    ("shortness of breath", &["shortness of breath", "breathing difficulty", "can't breathe"]),
    ("joint pain", &["joint pain", "arthritis", "knee pain", "hip pain"]),
    ("diarrhea", &["diarrhea", "loose motion", "watery stool"]),
    ("constipation", &["constipation", "can't pass stool", "bowel problem"]),
];

static HI_KEYWORDS: KeywordTable = &[
    ("सिरदर्द", &["सिरदर्द", "सिर में दर्द", "माइग्रेन", "सिर का दर्द"]),
    ("बुखार", &["बुखार", "ताप", "गर्मी", "ज्वर"]),
    ("खांसी", &["खांसी", "कफ", "छाती में खांसी"]),
    ("पेट दर्द", &["पेट दर्द", "पेट में दर्द", "उदर शूल", "पेट का दर्द"]),
];

static PA_KEYWORDS: KeywordTable = &[
    ("ਸਿਰਦਰਦ", &["ਸਿਰਦਰਦ", "ਸਿਰ ਦਾ ਦਰਦ", "ਮਾਈਗ੍ਰੇਨ"]),
    ("ਬੁਖਾਰ", &["ਬੁਖਾਰ", "ਤਾਪ", "ਗਰਮੀ"]),
    ("ਖਾਂਸੀ", &["ਖਾਂਸੀ", "ਕਫ", "ਛਾਤੀ ਵਿੱਚ ਖਾਂਸੀ"]),
];

fn keyword_table(language: Language) -> KeywordTable {
    match language {
        Language::English => EN_KEYWORDS,
        Language::Hindi => HI_KEYWORDS,
        Language::Punjabi => PA_KEYWORDS,
    }
}

/// Which key matched, and through which keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordHit {
    pub symptom_key: &'static str,
    pub keyword: &'static str,
}

/// Find the first symptom key (in declaration order) with a keyword that is
/// a substring of `normalized_input`. Input must already be lowercased.
pub fn find_symptom_match(normalized_input: &str, language: Language) -> Option<KeywordHit> {
    keyword_table(language).iter().find_map(|(key, keywords)| {
        keywords
            .iter()
            .find(|kw| normalized_input.contains(*kw))
            .map(|kw| KeywordHit {
                symptom_key: *key,
                keyword: *kw,
            })
    })
}

/// All symptom keys with keywords for a language, in priority order.
pub fn symptom_keys(language: Language) -> impl Iterator<Item = &'static str> {
    keyword_table(language).iter().map(|(key, _)| *key)
}

/// Keywords configured for one symptom key.
pub fn keywords_for(language: Language, symptom_key: &str) -> &'static [&'static str] {
    keyword_table(language)
        .iter()
        .find(|(key, _)| *key == symptom_key)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}
