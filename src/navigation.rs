//! Screen routes and outbound links.
//!
//! Every user action resolves to a `NavTarget`: either a screen inside the
//! app or a URL handed to the platform's opener.

use serde::Serialize;

use crate::models::enums::str_enum;

str_enum!(Route {
    Home => "/",
    Login => "/Login",
    RegistrationLinks => "/RegistrationLinks",
    PatientRegister => "/Patient-register",
    DoctorRegister => "/Doctor-register",
    PatientDashboard => "/dashboard",
    DoctorDashboard => "/Doctor-dashboard",
    SymptomChecker => "/AISymptomsChecker",
    HealthRecords => "/Health-records",
    Profile => "/Profile",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalLink {
    VideoConsultation,
    Pharmacy,
    AyushmanBharat,
    GovernmentSchemes,
}

impl ExternalLink {
    pub fn url(&self) -> &'static str {
        match self {
            Self::VideoConsultation => "https://video-one-livid.vercel.app/",
            Self::Pharmacy => "https://multi-language-pharm-ns5y.bolt.host",
            Self::AyushmanBharat => "https://www.pmjay.gov.in/",
            Self::GovernmentSchemes => "https://pmjay.gov.in/",
        }
    }
}

/// Where an action takes the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum NavTarget {
    Screen(Route),
    Link(ExternalLink),
}

impl NavTarget {
    /// Path or URL to hand to the router / opener.
    pub fn location(&self) -> &'static str {
        match self {
            Self::Screen(route) => route.as_str(),
            Self::Link(link) => link.url(),
        }
    }
}

/// A government health scheme shown on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GovernmentScheme {
    pub title: &'static str,
    pub description: &'static str,
    pub link: ExternalLink,
}

pub static GOVERNMENT_SCHEMES: &[GovernmentScheme] = &[
    GovernmentScheme {
        title: "Ayushman Bharat",
        description: "Free health insurance for families.",
        link: ExternalLink::AyushmanBharat,
    },
    GovernmentScheme {
        title: "PM National Dialysis",
        description: "Subsidized dialysis for kidney patients.",
        link: ExternalLink::GovernmentSchemes,
    },
    GovernmentScheme {
        title: "National Health Mission",
        description: "Improving healthcare infrastructure.",
        link: ExternalLink::GovernmentSchemes,
    },
    GovernmentScheme {
        title: "Janani Shishu Suraksha",
        description: "Free delivery and newborn care.",
        link: ExternalLink::GovernmentSchemes,
    },
];

/// Home-screen scheme carousel. Advances one card per tick, wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemeCarousel {
    index: usize,
}

impl SchemeCarousel {
    /// Time each scheme stays on screen.
    pub const INTERVAL: std::time::Duration = std::time::Duration::from_secs(3);

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&'static GovernmentScheme> {
        GOVERNMENT_SCHEMES.get(self.index)
    }

    pub fn advance(&mut self) -> Option<&'static GovernmentScheme> {
        self.index = next_scheme(self.index, GOVERNMENT_SCHEMES.len());
        self.current()
    }
}

/// Index after `index` in a carousel of `len` cards. Stays at 0 when empty.
pub fn next_scheme(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + 1) % len
}

/// Home-screen quick actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeAction {
    SignIn,
    SymptomChecker,
    Register,
    Pharmacy,
    Consult,
    Records,
    Profile,
}

impl HomeAction {
    pub fn target(&self) -> NavTarget {
        match self {
            Self::SignIn | Self::Consult => NavTarget::Screen(Route::Login),
            Self::SymptomChecker => NavTarget::Screen(Route::SymptomChecker),
            Self::Register => NavTarget::Screen(Route::RegistrationLinks),
            Self::Pharmacy => NavTarget::Link(ExternalLink::Pharmacy),
            Self::Records => NavTarget::Screen(Route::HealthRecords),
            Self::Profile => NavTarget::Screen(Route::Profile),
        }
    }
}
