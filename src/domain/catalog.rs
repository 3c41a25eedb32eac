//! Content catalog - the compiled-in story and enemy roster
//!
//! The catalog is built once at startup and shared read-only. Scenes keep
//! stable ids for the life of the process; enemies are templates and get a
//! fresh identity each time the roster is instantiated.

use crate::domain::entities::{Enemy, EnemyTemplate, SceneChoice, StoryScene};
use crate::domain::value_objects::EnemyKind;

/// A story scene plus the description used to paint its background
#[derive(Debug, Clone)]
pub struct CatalogScene {
    pub scene: StoryScene,
    pub background_prompt: Option<&'static str>,
}

const DEFAULT_BACKGROUND_PROMPT: &str = "Generic dark atmospheric scene, 1920s setting";

impl CatalogScene {
    /// Scene-specific backdrop description, or a generic one
    pub fn background_description(&self) -> &'static str {
        self.background_prompt.unwrap_or(DEFAULT_BACKGROUND_PROMPT)
    }
}

const ENEMY_ROSTER: [EnemyTemplate; 3] = [
    EnemyTemplate {
        name: "Masked Cultist",
        kind: EnemyKind::Cultist,
        max_hp: 45,
        sanity_damage: 10,
        abilities: &["Dark Chant", "Ritual Blade"],
        description: "A hooded figure wearing a fish-like mask, wielding ancient daggers inscribed with blasphemous runes.",
    },
    EnemyTemplate {
        name: "Shoggoth Spawn",
        kind: EnemyKind::CosmicHorror,
        max_hp: 80,
        sanity_damage: 25,
        abilities: &["Tentacle Lash", "Mind Rend", "Shapeshift"],
        description: "A writhing mass of eyes and tentacles, defying all natural law and reason.",
    },
    EnemyTemplate {
        name: "The Whispering Librarian",
        kind: EnemyKind::Boss,
        max_hp: 150,
        sanity_damage: 35,
        abilities: &["Forbidden Knowledge", "Reality Tear", "Summon Shadows"],
        description: "Once the head librarian, now transformed into something that should not exist, speaking truths that shatter minds.",
    },
];

#[derive(Debug, Clone)]
pub struct ContentCatalog {
    scenes: Vec<CatalogScene>,
    enemies: Vec<EnemyTemplate>,
}

impl ContentCatalog {
    pub fn new(scenes: Vec<CatalogScene>, enemies: Vec<EnemyTemplate>) -> Self {
        Self { scenes, enemies }
    }

    /// The Arkham demo chapter
    pub fn arkham_demo() -> Self {
        let whispering_shadows = StoryScene::new(
            "The Whispering Shadows",
            "Arkham, 1928. Strange disappearances plague the city. Four unlikely allies gather in the shadows of the old library, each harboring dark secrets that may be the key to stopping an ancient evil from awakening.",
        )
        .with_dialogue("Detective Murphy: 'The missing persons reports... they all mention the same thing. Whispers in the dark.'")
        .with_dialogue("Witch Morgana: 'The old ones stir. I can feel their presence growing stronger.'")
        .with_dialogue("Dr. Eliza Cross: 'My experiments have shown unusual cellular mutations in the victims.'")
        .with_dialogue("Healer Marcus: 'The plague spreads not through flesh, but through the soul itself.'")
        .with_choice(SceneChoice::new("Investigate the library", "enter_library"))
        .with_choice(SceneChoice::new("Examine the victims", "examine_victims"))
        .with_choice(SceneChoice::new("Seek ancient knowledge", "seek_knowledge"));

        let cursed_library = StoryScene::new(
            "The Cursed Library",
            "The Miskatonic University library stands before you, its gothic architecture shrouded in an unnatural mist. The air itself seems to whisper forbidden secrets.",
        )
        .with_dialogue("As you approach the library, the temperature drops suddenly.")
        .with_dialogue("Ancient symbols begin to glow faintly on the stone walls.")
        .with_dialogue("You hear chanting from within... but the library was supposed to be empty.")
        .with_choice(SceneChoice::new("Enter through the main door", "main_entrance"))
        .with_choice(SceneChoice::new("Find a back entrance", "back_entrance"))
        .with_choice(SceneChoice::new("Investigate the glowing symbols", "examine_symbols"));

        Self::new(
            vec![
                CatalogScene {
                    scene: whispering_shadows,
                    background_prompt: Some("Dark library exterior at night, gothic architecture, mysterious mist, 1920s Arkham setting"),
                },
                CatalogScene {
                    scene: cursed_library,
                    background_prompt: Some("Ancient library interior, towering bookshelves, glowing occult symbols, eerie atmosphere"),
                },
            ],
            ENEMY_ROSTER.to_vec(),
        )
    }

    pub fn scenes(&self) -> &[CatalogScene] {
        &self.scenes
    }

    pub fn enemy_templates(&self) -> &[EnemyTemplate] {
        &self.enemies
    }

    /// Instantiate the whole roster with fresh ids
    pub fn instantiate_enemies(&self) -> Vec<Enemy> {
        self.enemies.iter().map(Enemy::from_template).collect()
    }

    /// Instantiate the first `count` roster entries
    pub fn instantiate_first_enemies(&self, count: usize) -> Vec<Enemy> {
        self.enemies
            .iter()
            .take(count)
            .map(Enemy::from_template)
            .collect()
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::arkham_demo()
    }
}
