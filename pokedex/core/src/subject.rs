use crate::Resource;

use rand::Rng;
use serde::Deserialize;

use std::fmt;

/// A creature record, as served by the `pokemon/{id}` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Raw")]
pub struct Subject {
    pub id: Id,
    pub name: String,
    /// Height in decimeters.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    pub types: Vec<String>,
    pub stats: Vec<Stat>,
    pub sprites: Sprites,
    pub artwork: Option<String>,
    pub abilities: Vec<Resource>,
    pub encounters: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct Id(pub(crate) u32);

impl Id {
    pub const MIN: u32 = 1;
    /// As of Gen IX.
    pub const MAX: u32 = 1010;

    pub fn new(id: u32) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&id).then_some(Self(id))
    }

    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    pub fn random_with(rng: &mut impl Rng) -> Self {
        Self(rng.random_range(Self::MIN..=Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub base: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub back_shiny: Option<String>,
}

impl Sprites {
    pub fn get(&self, slot: Slot) -> Option<&str> {
        let url = match slot {
            Slot::FrontDefault => &self.front_default,
            Slot::FrontShiny => &self.front_shiny,
            Slot::BackDefault => &self.back_default,
            Slot::BackShiny => &self.back_shiny,
        };

        url.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    FrontDefault,
    FrontShiny,
    BackDefault,
    BackShiny,
}

impl Slot {
    pub const ALL: [Self; 4] = [
        Self::FrontDefault,
        Self::FrontShiny,
        Self::BackDefault,
        Self::BackShiny,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FrontDefault => "Default",
            Self::FrontShiny => "Shiny",
            Self::BackDefault => "Default (Back)",
            Self::BackShiny => "Shiny (Back)",
        }
    }
}

#[derive(Deserialize)]
struct Raw {
    id: Id,
    name: String,
    height: u32,
    weight: u32,
    #[serde(default)]
    types: Vec<RawType>,
    #[serde(default)]
    stats: Vec<RawStat>,
    sprites: RawSprites,
    #[serde(default)]
    abilities: Vec<RawAbility>,
    location_area_encounters: String,
}

#[derive(Deserialize)]
struct RawType {
    #[serde(rename = "type")]
    type_: Resource,
}

#[derive(Deserialize)]
struct RawStat {
    base_stat: u32,
    stat: Resource,
}

#[derive(Deserialize)]
struct RawAbility {
    ability: Resource,
}

#[derive(Deserialize)]
struct RawSprites {
    #[serde(flatten)]
    sprites: Sprites,
    #[serde(default)]
    other: Option<Other>,
}

#[derive(Deserialize)]
struct Other {
    #[serde(default, rename = "official-artwork")]
    official_artwork: Option<Artwork>,
}

#[derive(Deserialize)]
struct Artwork {
    #[serde(default)]
    front_default: Option<String>,
}

impl From<Raw> for Subject {
    fn from(raw: Raw) -> Self {
        let artwork = raw
            .sprites
            .other
            .and_then(|other| other.official_artwork)
            .and_then(|artwork| artwork.front_default)
            .filter(|url| !url.is_empty());

        Self {
            id: raw.id,
            name: raw.name,
            height: raw.height,
            weight: raw.weight,
            types: raw.types.into_iter().map(|type_| type_.type_.name).collect(),
            stats: raw
                .stats
                .into_iter()
                .map(|stat| Stat {
                    name: stat.stat.name,
                    base: stat.base_stat,
                })
                .collect(),
            sprites: raw.sprites.sprites,
            artwork,
            abilities: raw
                .abilities
                .into_iter()
                .map(|ability| ability.ability)
                .collect(),
            encounters: raw.location_area_encounters,
        }
    }
}
