use crate::Ability;
use crate::Subject;
use crate::encounter;
use crate::subject::Slot;

/// A fully resolved creature, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    subject: Subject,
    abilities: Vec<Ability>,
    encounters: encounter::Index,
    sprites: Vec<Sprite>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub slot: Slot,
    pub url: String,
}

impl View {
    pub fn new(subject: Subject, abilities: Vec<Ability>, encounters: encounter::Index) -> Self {
        let sprites = Slot::ALL
            .into_iter()
            .filter_map(|slot| {
                Some(Sprite {
                    slot,
                    url: subject.sprites.get(slot)?.to_owned(),
                })
            })
            .collect();

        Self {
            subject,
            abilities,
            encounters,
            sprites,
        }
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn encounters(&self) -> &encounter::Index {
        &self.encounters
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// The official artwork, or the default front sprite without it.
    pub fn image(&self) -> Option<&str> {
        self.subject
            .artwork
            .as_deref()
            .or_else(|| self.subject.sprites.get(Slot::FrontDefault))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::subject::{Id, Sprites};

    fn subject(sprites: Sprites, artwork: Option<&str>) -> Subject {
        Subject {
            id: Id(1),
            name: "bulbasaur".to_owned(),
            height: 7,
            weight: 69,
            types: vec!["grass".to_owned(), "poison".to_owned()],
            stats: Vec::new(),
            sprites,
            artwork: artwork.map(str::to_owned),
            abilities: Vec::new(),
            encounters: String::new(),
        }
    }

    #[test]
    fn only_present_sprites_are_kept() {
        let view = View::new(
            subject(
                Sprites {
                    back_default: Some("back.png".to_owned()),
                    ..Sprites::default()
                },
                None,
            ),
            Vec::new(),
            encounter::Index::new(),
        );

        assert_eq!(
            view.sprites(),
            [Sprite {
                slot: Slot::BackDefault,
                url: "back.png".to_owned(),
            }]
        );
        assert_eq!(view.sprites()[0].slot.label(), "Default (Back)");
    }

    #[test]
    fn sprites_keep_slot_order() {
        let view = View::new(
            subject(
                Sprites {
                    front_default: Some("front.png".to_owned()),
                    front_shiny: Some("front-shiny.png".to_owned()),
                    back_default: Some("back.png".to_owned()),
                    back_shiny: Some("back-shiny.png".to_owned()),
                },
                None,
            ),
            Vec::new(),
            encounter::Index::new(),
        );

        let labels: Vec<_> = view.sprites().iter().map(|sprite| sprite.slot.label()).collect();

        assert_eq!(labels, ["Default", "Shiny", "Default (Back)", "Shiny (Back)"]);
    }

    #[test]
    fn image_prefers_artwork() {
        let sprites = Sprites {
            front_default: Some("front.png".to_owned()),
            ..Sprites::default()
        };

        let with_artwork = View::new(
            subject(sprites.clone(), Some("artwork.png")),
            Vec::new(),
            encounter::Index::new(),
        );
        let without_artwork =
            View::new(subject(sprites, None), Vec::new(), encounter::Index::new());

        assert_eq!(with_artwork.image(), Some("artwork.png"));
        assert_eq!(without_artwork.image(), Some("front.png"));
    }

    #[test]
    fn no_image_without_artwork_or_front_sprite() {
        let view = View::new(
            subject(Sprites::default(), None),
            Vec::new(),
            encounter::Index::new(),
        );

        assert_eq!(view.image(), None);
        assert!(view.sprites().is_empty());
    }
}
