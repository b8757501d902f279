/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Serde goes through the same string form so JSON and `as_str` agree.
macro_rules! str_enum {
    (
        $(#[$attr:meta])*
        $name:ident { $($(#[$vattr:meta])* $variant:ident => $s:literal),+ $(,)? }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $(#[$attr])*
        pub enum $name {
            $($(#[$vattr])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err($crate::models::ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use str_enum;

str_enum!(
    #[derive(Default)]
    Language {
        #[default]
        English => "en",
        Hindi => "hi",
        Punjabi => "pa",
    }
);

impl Language {
    /// Name of the language written in its own script.
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "हिंदी",
            Self::Punjabi => "ਪੰਜਾਬੀ",
        }
    }
}

str_enum!(UserRole {
    Patient => "patient",
    Doctor => "doctor",
});

str_enum!(Severity {
    Low => "Low",
    Medium => "Medium",
    High => "High",
});

str_enum!(MessageRole {
    User => "user",
    Bot => "bot",
});

str_enum!(ConsultationType {
    General => "general",
    Specialist => "specialist",
    FollowUp => "followup",
    Emergency => "emergency",
});

impl ConsultationType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General Consultation",
            Self::Specialist => "Specialist Consultation",
            Self::FollowUp => "Follow-up Visit",
            Self::Emergency => "Emergency",
        }
    }
}

str_enum!(TimeSlot {
    Morning => "1",
    Afternoon => "2",
    Evening => "3",
});

impl TimeSlot {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Slot 1: 9:00 AM - 11:00 AM",
            Self::Afternoon => "Slot 2: 2:00 PM - 4:00 PM",
            Self::Evening => "Slot 3: 6:00 PM - 8:00 PM",
        }
    }
}

str_enum!(MedicineTiming {
    Morning => "morning",
    Afternoon => "afternoon",
    Evening => "evening",
    Bedtime => "bedtime",
    AsNeeded => "as_needed",
});

impl MedicineTiming {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Morning (Before Breakfast)",
            Self::Afternoon => "Afternoon (After Lunch)",
            Self::Evening => "Evening (Before Dinner)",
            Self::Bedtime => "Bedtime",
            Self::AsNeeded => "As Needed",
        }
    }
}

str_enum!(ConsultationPriority {
    Low => "low",
    Normal => "normal",
    High => "high",
});

str_enum!(PatientStatus {
    Waiting => "waiting",
    InConsultation => "in-consultation",
});

str_enum!(RegistrationType {
    SelfRegistration => "self",
    Asha => "asha",
    HealthCentre => "health-centre",
});

impl RegistrationType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SelfRegistration => "Self Registration",
            Self::Asha => "ASHA Worker",
            Self::HealthCentre => "Health Centre",
        }
    }
}

str_enum!(Gender {
    Male => "Male",
    Female => "Female",
    Other => "Other",
});

str_enum!(RecordType {
    Consultation => "consultation",
    Lab => "lab",
    Prescription => "prescription",
    Vaccination => "vaccination",
    Surgery => "surgery",
});

impl RecordType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Consultation => "Consultation",
            Self::Lab => "Lab Test",
            Self::Prescription => "Prescription",
            Self::Vaccination => "Vaccination",
            Self::Surgery => "Surgery",
        }
    }
}

str_enum!(RecordStatus {
    Completed => "completed",
    Active => "active",
    Pending => "pending",
    Cancelled => "cancelled",
});

str_enum!(RecordPriority {
    Routine => "routine",
    Important => "important",
    Urgent => "urgent",
});

str_enum!(MedicationStatus {
    Active => "active",
    Completed => "completed",
    Discontinued => "discontinued",
});

str_enum!(VitalType {
    BloodPressure => "blood_pressure",
    HeartRate => "heart_rate",
    Temperature => "temperature",
    Oxygen => "oxygen",
});

str_enum!(VitalStatus {
    Normal => "normal",
    Low => "low",
    High => "high",
    Critical => "critical",
});
