//! Mood assistant data.
//!
//! The mood picked by the user only adapts the suggested study advice;
//! it is transient widget state and is never persisted.

use serde::{Deserialize, Serialize};

/// Closed set of moods the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Motivated,
    #[default]
    Calm,
    Tired,
    Stressed,
    Bored,
}

impl Mood {
    /// All moods in picker display order.
    pub const ALL: [Mood; 5] = [
        Mood::Motivated,
        Mood::Calm,
        Mood::Tired,
        Mood::Stressed,
        Mood::Bored,
    ];

    /// Short badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Motivated => "Motivated",
            Self::Calm => "Calm",
            Self::Tired => "Tired",
            Self::Stressed => "Stressed",
            Self::Bored => "Bored",
        }
    }

    /// Main coaching message for this mood.
    pub fn message(self) -> &'static str {
        match self {
            Self::Motivated => {
                "You're on fire today. Stack your hardest tasks first while this energy is high."
            }
            Self::Calm => {
                "Nice, you're in a steady state. Perfect for consistent, distraction-free studying."
            }
            Self::Tired => {
                "You're low on energy, and that's okay. Choose lighter tasks and shorter focus blocks."
            }
            Self::Stressed => {
                "Your brain is overloaded. Don't push harder; work smarter and slower."
            }
            Self::Bored => {
                "Boredom is your brain asking for novelty. Change how you study, not just what."
            }
        }
    }

    /// Concrete study tip for this mood.
    pub fn tip(self) -> &'static str {
        match self {
            Self::Motivated => {
                "Try a 45-minute deep focus block followed by a strong 10-minute break."
            }
            Self::Calm => "Use a classic 25/5 Pomodoro and keep notifications silent.",
            Self::Tired => "Try 15 minutes of gentle focus plus a short walk or stretch break.",
            Self::Stressed => {
                "Do a 10-minute focus sprint on one tiny task, then breathe and step away."
            }
            Self::Bored => "Switch subjects, use active recall, or turn reading into mini quizzes.",
        }
    }
}
