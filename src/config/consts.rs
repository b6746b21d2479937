// src/config/consts.rs

// Net config
pub const SOURCE_URL: &str = "https://pokemondb.net/pokedex/all";
pub const SOURCE_HOST: &str = "pokemondb.net";
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; PokemonStatsExporter/1.0)";

// Scrape
pub const TABLE_ID: &str = "pokedex";
pub const MIN_CELLS: usize = 10;
pub const ID_COLUMN: usize = 0;
pub const NAME_COLUMN: usize = 1;
pub const FIRST_STAT_COLUMN: usize = 4; // HP..Spe occupy 4..=9

// Entries
pub const PLACEHOLDER_NAME: &str = "(placeholder)";
pub const UNKNOWN_NAME: &str = "Unknown";

// Export
pub const OUTPUT_PATH: &str = "PokemonBaseStatsArray.txt";
pub const ARRAY_TYPE: &str = "BaseStats";
pub const BASE_TABLE: &str = "BASE_STATS_TABLE";
pub const STAT_WIDTH: usize = 3;
