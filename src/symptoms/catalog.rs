//! Per-language symptom detail tables.
//!
//! Keys here are the symptom keys produced by `keywords`. Not every key with
//! keywords has a detail entry (`nausea`, `पेट दर्द`, ...); the matcher
//! treats those as not found.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::enums::{Language, Severity};
use crate::models::{Condition, SymptomEntry};

// ═══════════════════════════════════════════
// English
// ═══════════════════════════════════════════

static EN: &[(&str, SymptomEntry)] = &[
    (
        "headache",
        SymptomEntry {
            name: "Headache",
            possible_conditions: &[
                Condition {
                    name: "Tension Headache",
                    accuracy: 85,
                    description: "Mild to moderate pain often described as a tight band around the head",
                    severity: Severity::Low,
                    recommendations: &[
                        "Rest in a quiet, dark room",
                        "Apply cold or warm compress to forehead",
                        "Practice relaxation techniques",
                        "Stay hydrated",
                    ],
                    when_to_see_doctor: &[
                        "Headache persists for more than 2 days",
                        "Pain becomes severe",
                        "Accompanied by fever or vision changes",
                    ],
                },
                Condition {
                    name: "Migraine",
                    accuracy: 75,
                    description: "Throbbing pain usually on one side, often with nausea and sensitivity to light",
                    severity: Severity::Medium,
                    recommendations: &[
                        "Rest in dark, quiet environment",
                        "Apply cold compress",
                        "Avoid strong smells and loud noises",
                        "Consider OTC migraine medication",
                    ],
                    when_to_see_doctor: &[
                        "First migraine experience",
                        "Symptoms different from previous migraines",
                        "Lasts more than 72 hours",
                    ],
                },
            ],
            general_advice: "Most headaches are not serious. Monitor patterns and triggers.",
            emergency_warning: None,
        },
    ),
    (
        "fever",
        SymptomEntry {
            name: "Fever",
            possible_conditions: &[Condition {
                name: "Viral Infection",
                accuracy: 80,
                description: "Common viral illnesses causing elevated body temperature",
                severity: Severity::Low,
                recommendations: &[
                    "Rest and stay hydrated",
                    "Use fever-reducing medication if needed",
                    "Take lukewarm baths",
                    "Wear light clothing",
                ],
                when_to_see_doctor: &[
                    "Fever above 103°F (39.4°C)",
                    "Lasts more than 3 days",
                    "Accompanied by rash or difficulty breathing",
                ],
            }],
            general_advice: "Fever helps fight infection. Focus on comfort and hydration.",
            emergency_warning: None,
        },
    ),
    (
        "cough",
        SymptomEntry {
            name: "Cough",
            possible_conditions: &[Condition {
                name: "Common Cold",
                accuracy: 85,
                description: "Viral infection affecting upper respiratory tract",
                severity: Severity::Low,
                recommendations: &[
                    "Drink warm fluids with honey",
                    "Use humidifier",
                    "Get plenty of rest",
                    "Try cough drops or lozenges",
                ],
                when_to_see_doctor: &[
                    "Cough lasts more than 3 weeks",
                    "Produces blood",
                    "Accompanied by chest pain",
                ],
            }],
            general_advice: "Most coughs resolve on their own within 1-3 weeks.",
            emergency_warning: None,
        },
    ),
    (
        "stomach pain",
        SymptomEntry {
            name: "Stomach Pain",
            possible_conditions: &[Condition {
                name: "Indigestion",
                accuracy: 80,
                description: "Discomfort in upper abdomen often after eating",
                severity: Severity::Low,
                recommendations: &[
                    "Eat smaller meals",
                    "Avoid spicy and fatty foods",
                    "Stay upright after eating",
                    "Try antacids if needed",
                ],
                when_to_see_doctor: &[
                    "Severe or persistent pain",
                    "Accompanied by vomiting or fever",
                    "Blood in stool",
                ],
            }],
            general_advice: "Monitor food triggers and eating habits.",
            emergency_warning: None,
        },
    ),
    (
        "chest pain",
        SymptomEntry {
            name: "Chest Pain",
            possible_conditions: &[Condition {
                name: "Acid Reflux",
                accuracy: 70,
                description: "Burning sensation in chest often after meals",
                severity: Severity::Low,
                recommendations: &[
                    "Avoid trigger foods",
                    "Eat smaller meals",
                    "Elevate head while sleeping",
                    "Avoid lying down after eating",
                ],
                when_to_see_doctor: &[
                    "Severe chest pain",
                    "Pain radiating to arm or jaw",
                    "Shortness of breath",
                ],
            }],
            general_advice: "⚠️ Chest pain can be serious. Seek immediate help if severe.",
            emergency_warning: Some(
                "If chest pain is severe, radiates to arm/jaw, or causes shortness of breath, seek emergency care immediately!",
            ),
        },
    ),
];

// ═══════════════════════════════════════════
// Hindi
// ═══════════════════════════════════════════

static HI: &[(&str, SymptomEntry)] = &[
    (
        "सिरदर्द",
        SymptomEntry {
            name: "सिरदर्द",
            possible_conditions: &[Condition {
                name: "तनाव सिरदर्द",
                accuracy: 85,
                description: "हल्का से मध्यम दर्द जो अक्सर सिर के चारों ओर तंग बैंड के रूप में वर्णित किया जाता है",
                severity: Severity::Low,
                recommendations: &[
                    "शांत, अंधेरे कमरे में आराम करें",
                    "माथे पर ठंडा या गर्म सेक लगाएं",
                    "विश्राम तकनीकों का अभ्यास करें",
                    "हाइड्रेटेड रहें",
                ],
                when_to_see_doctor: &[
                    "सिरदर्द 2 दिनों से अधिक समय तक बना रहे",
                    "दर्द गंभीर हो जाए",
                    "बुखार या दृष्टि में बदलाव के साथ",
                ],
            }],
            general_advice: "अधिकांश सिरदर्द गंभीर नहीं होते। पैटर्न और ट्रिगर्स पर नज़र रखें।",
            emergency_warning: None,
        },
    ),
    (
        "बुखार",
        SymptomEntry {
            name: "बुखार",
            possible_conditions: &[Condition {
                name: "वायरल संक्रमण",
                accuracy: 80,
                description: "सामान्य वायरल बीमारियाँ जो शरीर के तापमान को बढ़ाती हैं",
                severity: Severity::Low,
                recommendations: &[
                    "आराम करें और हाइड्रेटेड रहें",
                    "जरूरत पड़ने पर बुखार कम करने वाली दवा लें",
                    "गुनगुने पानी से स्नान करें",
                    "हल्के कपड़े पहनें",
                ],
                when_to_see_doctor: &[
                    "103°F (39.4°C) से अधिक बुखार",
                    "3 दिनों से अधिक समय तक बना रहे",
                    "दाने या सांस लेने में तकलीफ के साथ",
                ],
            }],
            general_advice: "बुखार संक्रमण से लड़ने में मदद करता है। आराम और हाइड्रेशन पर ध्यान दें।",
            emergency_warning: None,
        },
    ),
    (
        "खांसी",
        SymptomEntry {
            name: "खांसी",
            possible_conditions: &[Condition {
                name: "सामान्य सर्दी",
                accuracy: 85,
                description: "वायरल संक्रमण जो ऊपरी श्वसन पथ को प्रभावित करता है",
                severity: Severity::Low,
                recommendations: &[
                    "शहद के साथ गर्म तरल पदार्थ पिएं",
                    "ह्यूमिडिफायर का उपयोग करें",
                    "भरपूर आराम करें",
                    "खांसी की गोलियाँ आज़माएं",
                ],
                when_to_see_doctor: &[
                    "खांसी 3 सप्ताह से अधिक समय तक बनी रहे",
                    "खून आए",
                    "सीने में दर्द के साथ",
                ],
            }],
            general_advice: "अधिकांश खांसी 1-3 सप्ताह के भीतर अपने आप ठीक हो जाती है।",
            emergency_warning: None,
        },
    ),
];

// ═══════════════════════════════════════════
// Punjabi
// ═══════════════════════════════════════════

static PA: &[(&str, SymptomEntry)] = &[
    (
        "ਸਿਰਦਰਦ",
        SymptomEntry {
            name: "ਸਿਰਦਰਦ",
            possible_conditions: &[Condition {
                name: "ਤਣਾਅ ਸਿਰਦਰਦ",
                accuracy: 85,
                description: "ਹਲਕਾ ਤੋਂ ਦਰਮਿਆਨਾ ਦਰਦ ਜੋ ਅਕਸਰ ਸਿਰ ਦੇ ਚਾਰਾਂ ਪਾਸੇ ਤੰਗ ਬੈਂਡ ਵਜੋਂ ਵਰਣਿਤ ਕੀਤਾ ਜਾਂਦਾ ਹੈ",
                severity: Severity::Low,
                recommendations: &[
                    "ਚੁੱਪ, ਅੰਧੇਰੇ ਕਮਰੇ ਵਿੱਚ ਆਰਾਮ ਕਰੋ",
                    "ਮੱਥੇ ਤੇ ਠੰਡਾ ਜਾਂ ਗਰਮ ਸੇਕ ਲਗਾਓ",
                    "ਆਰਾਮ ਦੀਆਂ ਤਕਨੀਕਾਂ ਦਾ ਅਭਿਆਸ ਕਰੋ",
                    "ਹਾਈਡਰੇਟਿਡ ਰਹੋ",
                ],
                when_to_see_doctor: &[
                    "ਸਿਰਦਰਦ 2 ਦਿਨਾਂ ਤੋਂ ਵੱਧ ਸਮੇਂ ਤੱਕ ਰਹੇ",
                    "ਦਰਦ ਗੰਭੀਰ ਹੋ ਜਾਵੇ",
                    "ਬੁਖਾਰ ਜਾਂ ਦ੍ਰਿਸ਼ਟੀ ਵਿੱਚ ਬਦਲਾਅ ਦੇ ਨਾਲ",
                ],
            }],
            general_advice: "ਜ਼ਿਆਦਾਤਰ ਸਿਰਦਰਦ ਗੰਭੀਰ ਨਹੀਂ ਹੁੰਦੇ। ਪੈਟਰਨ ਅਤੇ ਟਰਿੱਗਰਾਂ ਤੇ ਨਜ਼ਰ ਰੱਖੋ।",
            emergency_warning: None,
        },
    ),
    (
        "ਬੁਖਾਰ",
        SymptomEntry {
            name: "ਬੁਖਾਰ",
            possible_conditions: &[Condition {
                name: "ਵਾਇਰਲ ਇਨਫੈਕਸ਼ਨ",
                accuracy: 80,
                description: "ਸਾਧਾਰਣ ਵਾਇਰਲ ਬੀਮਾਰੀਆਂ ਜੋ ਸਰੀਰ ਦੇ ਤਾਪਮਾਨ ਨੂੰ ਵਧਾਉਂਦੀਆਂ ਹਨ",
                severity: Severity::Low,
                recommendations: &[
                    "ਆਰਾਮ ਕਰੋ ਅਤੇ ਹਾਈਡਰੇਟਿਡ ਰਹੋ",
                    "ਲੋੜ ਪੈਣ ਤੇ ਬੁਖਾਰ ਘਟਾਉਣ ਵਾਲੀ ਦਵਾਈ ਲਓ",
                    "ਗੁਨਗੁਨੇ ਪਾਣੀ ਨਾਲ ਨਹਾਓ",
                    "ਹਲਕੇ ਕੱਪੜੇ ਪਹਿਨੋ",
                ],
                when_to_see_doctor: &[
                    "103°F (39.4°C) ਤੋਂ ਵੱਧ ਬੁਖਾਰ",
                    "3 ਦਿਨਾਂ ਤੋਂ ਵੱਧ ਸਮੇਂ ਤੱਕ ਰਹੇ",
                    "ਚੱਕੱਤੇ ਜਾਂ ਸਾਹ ਲੈਣ ਵਿੱਚ ਤਕਲੀਫ ਦੇ ਨਾਲ",
                ],
            }],
            general_advice: "ਬੁਖਾਰ ਇਨਫੈਕਸ਼ਨ ਨਾਲ ਲੜਨ ਵਿੱਚ ਮਦਦ ਕਰਦਾ ਹੈ। ਆਰਾਮ ਅਤੇ ਹਾਈਡਰੇਸ਼ਨ ਤੇ ਧਿਆਨ ਦਿਓ।",
            emergency_warning: None,
        },
    ),
    (
        "ਖਾਂਸੀ",
        SymptomEntry {
            name: "ਖਾਂਸੀ",
            possible_conditions: &[Condition {
                name: "ਸਾਧਾਰਣ ਜ਼ੁਕਾਮ",
                accuracy: 85,
                description: "ਵਾਇਰਲ ਇਨਫੈਕਸ਼ਨ ਜੋ ਉੱਪਰੀ ਸਾਹ ਲੈਣ ਵਾਲੇ ਮਾਰਗ ਨੂੰ ਪ੍ਰਭਾਵਿਤ ਕਰਦਾ ਹੈ",
                severity: Severity::Low,
                recommendations: &[
                    "ਸ਼ਹਿਦ ਨਾਲ ਗਰਮ ਤਰਲ ਪਦਾਰਥ ਪੀਓ",
                    "ਹਿਊਮਿਡੀਫਾਇਰ ਦੀ ਵਰਤੋਂ ਕਰੋ",
                    "ਭਰਪੂਰ ਆਰਾਮ ਕਰੋ",
                    "ਖਾਂਸੀ ਦੀਆਂ ਗੋਲੀਆਂ ਅਜ਼ਮਾਓ",
                ],
                when_to_see_doctor: &[
                    "ਖਾਂਸੀ 3 ਹਫ਼ਤਿਆਂ ਤੋਂ ਵੱਧ ਸਮੇਂ ਤੱਕ ਰਹੇ",
                    "ਖੂਨ ਆਵੇ",
                    "ਛਾਤੀ ਵਿੱਚ ਦਰਦ ਦੇ ਨਾਲ",
                ],
            }],
            general_advice: "ਜ਼ਿਆਦਾਤਰ ਖਾਂਸੀ 1-3 ਹਫ਼ਤਿਆਂ ਵਿੱਚ ਆਪਣੇ ਆਪ ਠੀਕ ਹੋ ਜਾਂਦੀ ਹੈ।",
            emergency_warning: None,
        },
    ),
];

fn table(language: Language) -> &'static [(&'static str, SymptomEntry)] {
    match language {
        Language::English => EN,
        Language::Hindi => HI,
        Language::Punjabi => PA,
    }
}

static INDEX: LazyLock<HashMap<(Language, &'static str), &'static SymptomEntry>> =
    LazyLock::new(|| {
        Language::ALL
            .iter()
            .flat_map(|&lang| {
                table(lang)
                    .iter()
                    .map(move |(key, entry)| ((lang, *key), entry))
            })
            .collect()
    });

/// Look up the detail entry for a symptom key in one language.
pub fn lookup(language: Language, key: &str) -> Option<&'static SymptomEntry> {
    INDEX.get(&(language, key)).copied()
}

/// Symptom keys with detail entries, in declaration order.
pub fn documented_keys(language: Language) -> impl Iterator<Item = &'static str> {
    table(language).iter().map(|(key, _)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_language_scoped() {
        assert!(lookup(Language::English, "headache").is_some());
        assert!(lookup(Language::Punjabi, "headache").is_none());
        assert!(lookup(Language::Hindi, "सिरदर्द").is_some());
        assert!(lookup(Language::English, "सिरदर्द").is_none());
    }

    #[test]
    fn headache_lists_two_conditions_in_order() {
        let entry = lookup(Language::English, "headache").unwrap();
        let names: Vec<_> = entry.possible_conditions.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Tension Headache", "Migraine"]);
    }

    #[test]
    fn only_chest_pain_carries_emergency_warning() {
        for lang in Language::ALL {
            for key in documented_keys(*lang) {
                let entry = lookup(*lang, key).unwrap();
                assert_eq!(
                    entry.emergency_warning.is_some(),
                    *lang == Language::English && key == "chest pain",
                    "unexpected warning state for {lang}/{key}"
                );
            }
        }
    }

    #[test]
    fn accuracy_within_percentage_range() {
        for lang in Language::ALL {
            for key in documented_keys(*lang) {
                for condition in lookup(*lang, key).unwrap().possible_conditions {
                    assert!(condition.accuracy <= 100);
                    assert!(!condition.recommendations.is_empty());
                    assert!(!condition.when_to_see_doctor.is_empty());
                }
            }
        }
    }

    #[test]
    fn documented_key_counts() {
        assert_eq!(documented_keys(Language::English).count(), 5);
        assert_eq!(documented_keys(Language::Hindi).count(), 3);
        assert_eq!(documented_keys(Language::Punjabi).count(), 3);
    }
}
