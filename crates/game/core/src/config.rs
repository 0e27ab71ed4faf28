/// Game configuration constants and tunable parameters.
///
/// The tunable fields describe the new-player template and are loaded from
/// `config.toml` by the content crate; the constants are rule invariants the
/// engine relies on directly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Token bank capacity a fresh account starts with. The bank only ever
    /// drains from bout rewards; refills are outside the engine.
    pub starting_bank: u32,

    /// Brawler every new account owns and has selected.
    pub starting_brawler: String,

    /// Skin the starting brawler is unlocked with.
    pub starting_skin: String,

    /// Game mode a fresh account has selected.
    pub starting_game_mode: String,
}

impl GameConfig {
    // ===== rule invariants =====
    /// Brawler levels live in [MIN_BRAWLER_LEVEL, MAX_BRAWLER_LEVEL].
    pub const MIN_BRAWLER_LEVEL: u8 = 1;
    pub const MAX_BRAWLER_LEVEL: u8 = 10;

    /// Hit rolls are a d10; an attack lands on rolls up to this value.
    pub const ATTACK_HIT_WINDOW: u32 = 8;
    /// Ultimates are easier to land than normal attacks.
    pub const ULTIMATE_HIT_WINDOW: u32 = 9;

    // ===== new-player defaults =====
    pub const DEFAULT_STARTING_BANK: u32 = 200;
    pub const DEFAULT_STARTING_BRAWLER: &'static str = "Shelly";
    pub const DEFAULT_STARTING_SKIN: &'static str = "Default";
    pub const DEFAULT_STARTING_GAME_MODE: &'static str = "Gem Grab";

    pub fn new() -> Self {
        Self {
            starting_bank: Self::DEFAULT_STARTING_BANK,
            starting_brawler: Self::DEFAULT_STARTING_BRAWLER.to_owned(),
            starting_skin: Self::DEFAULT_STARTING_SKIN.to_owned(),
            starting_game_mode: Self::DEFAULT_STARTING_GAME_MODE.to_owned(),
        }
    }

    /// Clamp a brawler level into the legal range.
    pub fn clamp_level(level: u8) -> u8 {
        level.clamp(Self::MIN_BRAWLER_LEVEL, Self::MAX_BRAWLER_LEVEL)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
