//! Story scene entity - narrative text, dialogue and choices

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{GeneratedImage, SceneId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneType {
    Story,
    Combat,
    Puzzle,
}

/// A choice offered to the player at the end of a scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneChoice {
    pub text: String,
    /// Action token the client sends back when the choice is picked
    pub action: String,
}

impl SceneChoice {
    pub fn new(text: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: action.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryScene {
    pub id: SceneId,
    pub title: String,
    pub description: String,
    pub dialogue: Vec<String>,
    pub choices: Vec<SceneChoice>,
    pub background_image: Option<GeneratedImage>,
    pub scene_type: SceneType,
}

impl StoryScene {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: SceneId::new(),
            title: title.into(),
            description: description.into(),
            dialogue: Vec::new(),
            choices: Vec::new(),
            background_image: None,
            scene_type: SceneType::Story,
        }
    }

    pub fn with_dialogue(mut self, line: impl Into<String>) -> Self {
        self.dialogue.push(line.into());
        self
    }

    pub fn with_choice(mut self, choice: SceneChoice) -> Self {
        self.choices.push(choice);
        self
    }

    pub fn with_background(mut self, image: GeneratedImage) -> Self {
        self.background_image = Some(image);
        self
    }
}
