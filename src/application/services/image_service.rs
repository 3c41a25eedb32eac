//! Image Service - prompt building and placeholder fallback
//!
//! Every request is attempted once against the remote generator, bounded by a
//! timeout. Any failure is logged and answered with locally drawn placeholder
//! art so callers always get an image back.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use tracing::{debug, instrument, warn};

use crate::application::ports::outbound::{
    ImageGenerationError, ImageGenerationPort, PlaceholderImagePort,
};
use crate::domain::catalog::CatalogScene;
use crate::domain::entities::{Enemy, StoryScene};
use crate::domain::value_objects::{CharacterClass, EnemyKind, GeneratedImage, ImageSubject};

pub const DEFAULT_STYLE: &str =
    "16-bit pixel art SNES style, dark Lovecraftian palette with deep purples, sickly greens, and smoky blacks";
const CHARACTER_STYLE: &str = "16-bit pixel art SNES style, dark Lovecraftian palette with deep purples, sickly greens, and smoky blacks, character sprite, front-facing view";
const ENEMY_STYLE: &str = "16-bit pixel art SNES style, dark Lovecraftian palette with deep purples, sickly greens, and smoky blacks, enemy sprite, menacing appearance";
const BACKGROUND_STYLE: &str = "16-bit pixel art SNES style, dark atmospheric background, deep purples, sickly greens, and smoky blacks, detailed environment";

/// Result of an image request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    Generated(GeneratedImage),
    Placeholder(GeneratedImage),
}

impl ImageOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    pub fn into_image(self) -> GeneratedImage {
        match self {
            Self::Generated(image) | Self::Placeholder(image) => image,
        }
    }
}

pub struct ImageService {
    generator: Arc<dyn ImageGenerationPort>,
    placeholders: Arc<dyn PlaceholderImagePort>,
    timeout: Duration,
}

impl ImageService {
    pub fn new(
        generator: Arc<dyn ImageGenerationPort>,
        placeholders: Arc<dyn PlaceholderImagePort>,
        timeout: Duration,
    ) -> Self {
        Self {
            generator,
            placeholders,
            timeout,
        }
    }

    pub fn portrait_prompt(class: CharacterClass, name: &str) -> String {
        match class {
            CharacterClass::Detective => format!("16-bit pixel art detective character sprite named {name}, 1920s Arkham setting, dark coat and hat, mysterious aura, SNES style graphics"),
            CharacterClass::Witch => format!("16-bit pixel art witch character sprite named {name}, dark robes with occult symbols, crystal ball, blood magic aura, SNES style graphics"),
            CharacterClass::Scientist => format!("16-bit pixel art scientist character sprite named {name}, lab coat with strange mutations, steampunk goggles, eldritch experiments, SNES style graphics"),
            CharacterClass::Healer => format!("16-bit pixel art healer character sprite named {name}, tattered medical robes, plague doctor mask, cursed healing symbols, SNES style graphics"),
        }
    }

    pub fn enemy_prompt(name: &str, kind: EnemyKind) -> String {
        match kind {
            EnemyKind::Cultist => format!("16-bit pixel art cultist enemy sprite, {name}, fish-mask, dark robes, occult symbols, SNES style graphics"),
            EnemyKind::CosmicHorror => format!("16-bit pixel art cosmic horror enemy sprite, {name}, tentacles, multiple eyes, otherworldly form, SNES style graphics"),
            EnemyKind::Boss => format!("16-bit pixel art boss enemy sprite, {name}, massive eldritch abomination, multiple forms, terrifying presence, SNES style graphics"),
        }
    }

    pub fn background_prompt(description: &str) -> String {
        format!("16-bit pixel art background scene: {description}, 1920s Arkham/Dunwich setting, SNES style graphics")
    }

    #[instrument(skip(self))]
    pub async fn generate_portrait(&self, class: CharacterClass, name: &str) -> ImageOutcome {
        let prompt = format!("{}, {}", Self::portrait_prompt(class, name), CHARACTER_STYLE);
        self.generate_or_placeholder(&prompt, ImageSubject::Character(class))
            .await
    }

    #[instrument(skip(self))]
    pub async fn generate_enemy_sprite(&self, name: &str, kind: EnemyKind) -> ImageOutcome {
        let prompt = format!("{}, {}", Self::enemy_prompt(name, kind), ENEMY_STYLE);
        self.generate_or_placeholder(&prompt, ImageSubject::Enemy(kind))
            .await
    }

    #[instrument(skip(self))]
    pub async fn generate_background(&self, description: &str) -> ImageOutcome {
        let prompt = format!("{}, {}", Self::background_prompt(description), BACKGROUND_STYLE);
        self.generate_or_placeholder(&prompt, ImageSubject::Background)
            .await
    }

    /// Free-form request; `style_modifiers` defaults to the house style
    #[instrument(skip(self))]
    pub async fn generate_custom(
        &self,
        prompt: &str,
        subject: ImageSubject,
        style_modifiers: Option<&str>,
    ) -> ImageOutcome {
        let style = style_modifiers.unwrap_or(DEFAULT_STYLE);
        let prompt = format!("{prompt}, {style}");
        self.generate_or_placeholder(&prompt, subject).await
    }

    /// Attach a sprite to every enemy; requests run concurrently
    pub async fn illustrate_enemies(&self, enemies: Vec<Enemy>) -> Vec<Enemy> {
        let sprites = join_all(
            enemies
                .iter()
                .map(|enemy| self.generate_enemy_sprite(&enemy.name, enemy.kind)),
        )
        .await;

        enemies
            .into_iter()
            .zip(sprites)
            .map(|(enemy, sprite)| enemy.with_sprite(sprite.into_image()))
            .collect()
    }

    /// Copy catalog scenes and paint a background onto each
    pub async fn illustrate_scenes(&self, scenes: &[CatalogScene]) -> Vec<StoryScene> {
        let backgrounds = join_all(
            scenes
                .iter()
                .map(|entry| self.generate_background(entry.background_description())),
        )
        .await;

        scenes
            .iter()
            .zip(backgrounds)
            .map(|(entry, background)| entry.scene.clone().with_background(background.into_image()))
            .collect()
    }

    async fn generate_or_placeholder(&self, prompt: &str, subject: ImageSubject) -> ImageOutcome {
        let result = match tokio::time::timeout(self.timeout, self.generator.generate(prompt)).await
        {
            Ok(result) => result,
            Err(_) => Err(ImageGenerationError::Timeout(self.timeout)),
        };

        match result {
            Ok(image) => {
                debug!(?subject, "Generated image");
                ImageOutcome::Generated(image)
            }
            Err(ImageGenerationError::Unavailable) => {
                debug!(?subject, "Image generation not configured, drawing placeholder");
                ImageOutcome::Placeholder(self.placeholders.render(subject))
            }
            Err(e) => {
                warn!(?subject, error = %e, "Image generation failed, drawing placeholder");
                ImageOutcome::Placeholder(self.placeholders.render(subject))
            }
        }
    }
}
