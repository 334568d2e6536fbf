use crate::projection::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Weapons,
    Stickers,
    Collections,
    Crates,
    Keys,
    Collectibles,
    Agents,
    Patches,
    Graffiti,
    MusicKits,
}

impl Category {
    pub const ALL: [Self; 10] = [
        Self::Weapons,
        Self::Stickers,
        Self::Collections,
        Self::Crates,
        Self::Keys,
        Self::Collectibles,
        Self::Agents,
        Self::Patches,
        Self::Graffiti,
        Self::MusicKits,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weapons => "weapons",
            Self::Stickers => "stickers",
            Self::Collections => "collections",
            Self::Crates => "crates",
            Self::Keys => "keys",
            Self::Collectibles => "collectibles",
            Self::Agents => "agents",
            Self::Patches => "patches",
            Self::Graffiti => "graffiti",
            Self::MusicKits => "music-kits",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace('_', "-").as_str() {
            "weapons" | "skins" => Some(Self::Weapons),
            "stickers" => Some(Self::Stickers),
            "collections" => Some(Self::Collections),
            "crates" => Some(Self::Crates),
            "keys" => Some(Self::Keys),
            "collectibles" => Some(Self::Collectibles),
            "agents" => Some(Self::Agents),
            "patches" => Some(Self::Patches),
            "graffiti" => Some(Self::Graffiti),
            "music-kits" => Some(Self::MusicKits),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Weapons => "Weapons",
            Self::Stickers => "Stickers",
            Self::Collections => "Collections",
            Self::Crates => "Crates",
            Self::Keys => "Keys",
            Self::Collectibles => "Collectibles",
            Self::Agents => "Agents",
            Self::Patches => "Patches",
            Self::Graffiti => "Graffiti",
            Self::MusicKits => "Music Kits",
        }
    }

    /// Id of the page element that triggers this category's fetch.
    pub const fn trigger_id(self) -> &'static str {
        match self {
            Self::Weapons => "fetch-weapons",
            Self::Stickers => "fetch-stickers",
            Self::Collections => "fetch-collections",
            Self::Crates => "fetch-crates",
            Self::Keys => "fetch-keys",
            Self::Collectibles => "fetch-collectibles",
            Self::Agents => "fetch-agents",
            Self::Patches => "fetch-patches",
            Self::Graffiti => "fetch-graffiti",
            Self::MusicKits => "fetch-music-kits",
        }
    }

    /// Remote file holding this category's JSON array, relative to the API base.
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Weapons => "skins.json",
            Self::Stickers => "stickers.json",
            Self::Collections => "collections.json",
            Self::Crates => "crates.json",
            Self::Keys => "keys.json",
            Self::Collectibles => "collectibles.json",
            Self::Agents => "agents.json",
            Self::Patches => "patches.json",
            Self::Graffiti => "graffiti.json",
            Self::MusicKits => "music_kits.json",
        }
    }

    pub const fn card_class(self) -> &'static str {
        match self {
            Self::Weapons => "weapon",
            Self::Stickers => "sticker",
            Self::Collections => "collection",
            Self::Crates => "crate",
            Self::Keys => "key",
            Self::Collectibles => "collectible",
            Self::Agents => "agent",
            Self::Patches => "patch",
            Self::Graffiti => "graffiti",
            Self::MusicKits => "music-kit",
        }
    }

    /// Descriptive lines shown between a card's heading and its image, in order.
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::Weapons => &[Field::Category, Field::Rarity],
            Self::Crates => &[Field::Type],
            Self::Agents => &[Field::Team],
            Self::Collections | Self::Keys => &[],
            Self::Stickers
            | Self::Collectibles
            | Self::Patches
            | Self::Graffiti
            | Self::MusicKits => &[Field::Rarity],
        }
    }

    pub const fn image_width(self) -> u32 {
        match self {
            Self::Weapons => 300,
            _ => 150,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
