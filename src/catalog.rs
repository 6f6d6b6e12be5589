//! Static site content. Every interactive component receives its data from
//! here at construction time; nothing is fetched at runtime.

use engine::{quiz::QuestionSet, validator};
use model::{activity::Activity, campaign::Campaign, question::Question};
use serde::Deserialize;
use serde_json::error::Category;
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    /// JSON syntax error detected.
    Syntax,
    /// Unexpected JSON data types encountered.
    Data,
    /// The questions parsed but failed validation.
    InvalidQuestions,
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::Data,
            _ => Self::Syntax,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Syntax => "Syntax error in JSON detected.",
            Self::Data => "Unexpected data types in JSON detected.",
            Self::InvalidQuestions => "The question list failed validation.",
        })
    }
}

pub type Result<T> = core::result::Result<T, Error>;

/// Everything the pages need, bundled together.
#[derive(Debug, Deserialize)]
pub struct Catalog {
    pub questions: Vec<Question>,
    pub activities: Vec<Activity>,
    pub campaigns: Vec<Campaign>,
}

impl Catalog {
    /// Parses a catalog from JSON and validates its question list.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let catalog: Self = serde_json::from_slice(bytes)?;
        if !validator::is_valid_set(&catalog.questions) {
            log::error!("rejecting catalog with invalid question list");
            return Err(Error::InvalidQuestions);
        }
        Ok(catalog)
    }

    /// Validated question set ready for a quiz session.
    pub fn question_set(&self) -> Option<QuestionSet> {
        QuestionSet::new(self.questions.clone())
    }

    /// The content the site actually ships with.
    pub fn built_in() -> Self {
        Self { questions: built_in_questions(), activities: built_in_activities(), campaigns: built_in_campaigns() }
    }
}

fn question(prompt: &str, options: [&str; 4], answer: u8, explanation: &str) -> Question {
    Question {
        prompt: prompt.into(),
        options: options.map(String::from).to_vec(),
        answer,
        explanation: explanation.into(),
    }
}

fn built_in_questions() -> Vec<Question> {
    vec![
        question(
            "You are brushing your teeth. The water is running from the tap. What is the best thing to do?",
            [
                "Let the water flow so you can hear the nice sound.",
                "Turn off the tap while you are brushing and turn it back on to rinse.",
                "Try to brush your teeth faster than the water fills the sink.",
                "Open the tap even more so the toothbrush gets cleaner.",
            ],
            1,
            "Turning off the tap saves a lot of water. This helps protect the environment and keeps more water in our rivers and lakes.",
        ),
        question(
            "Which of these activities uses the MOST water in a typical household?",
            ["Washing dishes", "Toilet flushing", "Showering", "Laundry"],
            1,
            "Toilet flushing typically uses the most water in households, accounting for about 30% of indoor water use.",
        ),
        question(
            "What should you do if you see trash near a river?",
            [
                "Leave it - it's not my problem",
                "Pick it up and dispose of it properly",
                "Push it into the water",
                "Take a photo and walk away",
            ],
            1,
            "Always pick up trash near rivers and dispose of it properly. Trash can harm aquatic life and pollute water sources.",
        ),
        question(
            "How long does it take for a plastic bottle to decompose in water?",
            ["1 year", "10 years", "100 years", "450+ years"],
            3,
            "Plastic bottles can take 450 years or more to decompose, causing long-term pollution in rivers and oceans.",
        ),
        question(
            "What is the best time to water plants to conserve water?",
            ["Midday when it's hottest", "Early morning or evening", "Anytime is fine", "Only at night"],
            1,
            "Watering early morning or evening reduces evaporation, ensuring plants get more water while conserving resources.",
        ),
        question(
            "Which action helps protect river ecosystems the most?",
            [
                "Using chemical fertilizers",
                "Disposing motor oil in drains",
                "Planting trees along riverbanks",
                "Building more concrete structures",
            ],
            2,
            "Planting trees along riverbanks prevents erosion, filters pollutants, and provides habitat for wildlife.",
        ),
    ]
}

fn activity(id: &str, name: &str, water_usage: u32, duration: &str, tips: [&str; 3], image: &str) -> Activity {
    Activity {
        id: id.into(),
        name: name.into(),
        water_usage,
        duration: duration.into(),
        tips: tips.map(String::from).to_vec(),
        image: image.into(),
    }
}

fn built_in_activities() -> Vec<Activity> {
    vec![
        activity(
            "shower",
            "Shower",
            65,
            "10 minutes",
            [
                "Reduce shower time to 5 minutes to save 32 liters",
                "Install a low-flow showerhead to reduce usage by 40%",
                "Turn off water while soaping",
            ],
            "/modern-bathroom-with-rainfall-shower-head.jpg",
        ),
        activity(
            "dishes",
            "Washing Dishes",
            40,
            "15 minutes",
            [
                "Use a dishwasher when full - saves up to 20 liters",
                "Don't pre-rinse dishes before dishwasher",
                "Fill sink basin instead of running water",
            ],
            "/person-washing-dishes-in-kitchen-sink.jpg",
        ),
        activity(
            "laundry",
            "Laundry",
            50,
            "1 load",
            [
                "Only run full loads to maximize efficiency",
                "Use cold water when possible",
                "Choose high-efficiency washing machines",
            ],
            "/modern-front-loading-washing-machine.jpg",
        ),
        activity(
            "cooking",
            "Cooking",
            15,
            "30 minutes",
            [
                "Reuse pasta water for plants",
                "Steam vegetables instead of boiling",
                "Keep a pitcher of water in fridge instead of running tap",
            ],
            "/person-cooking-vegetables-in-modern-kitchen.jpg",
        ),
        activity(
            "brushing",
            "Brushing Teeth",
            8,
            "2 minutes",
            [
                "Turn off tap while brushing - saves 6 liters",
                "Use a cup to rinse instead of running water",
                "Fix leaky faucets immediately",
            ],
            "/person-brushing-teeth-at-bathroom-sink.jpg",
        ),
        activity(
            "garden",
            "Watering Garden",
            75,
            "20 minutes",
            [
                "Water early morning or evening to reduce evaporation",
                "Use drip irrigation systems",
                "Collect rainwater for garden use",
            ],
            "/person-watering-green-garden-plants.jpg",
        ),
    ]
}

fn campaign(id: &str, name: &str, location: &str, description: &str, image: &str, schedule: &str) -> Campaign {
    Campaign {
        id: id.into(),
        name: name.into(),
        location: location.into(),
        description: description.into(),
        image: image.into(),
        schedule: schedule.into(),
    }
}

fn built_in_campaigns() -> Vec<Campaign> {
    vec![
        campaign(
            "yangtze",
            "Yangtze Cleanup",
            "Yangtze River, China",
            "Join us in cleaning the longest river in Asia and protecting its diverse ecosystem.",
            "/yangtze-river-cleanup.jpg",
            "Every Saturday",
        ),
        campaign(
            "nile",
            "Nile Initiative",
            "Nile River, Egypt",
            "Help preserve the historic Nile River by removing plastic waste and debris.",
            "/nile-river-cleanup.jpg",
            "Monthly Events",
        ),
        campaign(
            "amazon",
            "Amazon Project",
            "Amazon River, Brazil",
            "Protect the waterways and support local communities in conservation efforts.",
            "/amazon-river-cleanup.jpg",
            "Quarterly Campaigns",
        ),
        campaign(
            "ganges",
            "Ganges Restoration",
            "Ganges River, India",
            "Participate in cleaning one of the world's most sacred rivers and restoring its purity.",
            "/ganges-river-cleanup.jpg",
            "Weekly Activities",
        ),
        campaign(
            "mississippi",
            "Mississippi Care",
            "Mississippi River, USA",
            "Join volunteers in keeping North America's mighty river clean and healthy.",
            "/mississippi-river-cleanup.jpg",
            "Bi-weekly Events",
        ),
    ]
}
