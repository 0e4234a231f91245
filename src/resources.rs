use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Article,
    Audio,
    Video,
    Crisis,
}

#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: ResourceKind,
    pub category: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<&'static str>,
    pub link: &'static str,
    pub emergency: bool,
}

#[derive(Debug, Serialize)]
pub struct ResourcesResponse {
    pub emergency: Vec<Resource>,
    pub regular: Vec<Resource>,
    pub self_care_tips: &'static [&'static str],
}

pub const RESOURCES: &[Resource] = &[
    Resource {
        id: "1",
        title: "Crisis Hotline",
        description: "Immediate support for mental health emergencies",
        kind: ResourceKind::Crisis,
        category: "Emergency",
        duration: None,
        link: "tel:988",
        emergency: true,
    },
    Resource {
        id: "2",
        title: "5-Minute Breathing Exercise",
        description: "Quick guided meditation to reduce anxiety and stress",
        kind: ResourceKind::Audio,
        category: "Mindfulness",
        duration: Some("5 min"),
        link: "#",
        emergency: false,
    },
    Resource {
        id: "3",
        title: "Understanding Depression",
        description: "Comprehensive guide to recognizing and managing depression",
        kind: ResourceKind::Article,
        category: "Education",
        duration: Some("10 min read"),
        link: "#",
        emergency: false,
    },
    Resource {
        id: "4",
        title: "Progressive Muscle Relaxation",
        description: "Video guide for releasing physical tension and stress",
        kind: ResourceKind::Video,
        category: "Relaxation",
        duration: Some("15 min"),
        link: "#",
        emergency: false,
    },
    Resource {
        id: "5",
        title: "Cognitive Behavioral Techniques",
        description: "Practical CBT strategies for managing negative thoughts",
        kind: ResourceKind::Article,
        category: "Therapy",
        duration: Some("12 min read"),
        link: "#",
        emergency: false,
    },
    Resource {
        id: "6",
        title: "Sleep Hygiene Guide",
        description: "Evidence-based tips for better sleep and mental health",
        kind: ResourceKind::Article,
        category: "Wellness",
        duration: Some("8 min read"),
        link: "#",
        emergency: false,
    },
];

pub const SELF_CARE_TIPS: &[&str] = &[
    "Take 5 deep breaths: in for 4, hold for 4, out for 6",
    "Even a 5-minute walk can boost your mood and energy",
    "Drink a glass of water - dehydration affects mood",
    "Name 3 things you're grateful for today",
];

pub fn directory() -> ResourcesResponse {
    let (emergency, regular): (Vec<_>, Vec<_>) = RESOURCES.iter().cloned().partition(|resource| resource.emergency);
    ResourcesResponse {
        emergency,
        regular,
        self_care_tips: SELF_CARE_TIPS,
    }
}
