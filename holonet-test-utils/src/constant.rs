//! Canonical fixture values shared across tests.

/// Username used for fixture users.
pub static TEST_USERNAME: &str = "skywalker";

/// Email used for fixture users.
pub static TEST_EMAIL: &str = "luke@example.com";

/// Password used for fixture users. Never expected in any serialized output.
pub static TEST_PASSWORD: &str = "bluemilk";

/// First name used for fixture users.
pub static TEST_FIRSTNAME: &str = "Luke";

/// Last name used for fixture users.
pub static TEST_LASTNAME: &str = "Skywalker";

/// Name used for fixture characters.
pub static TEST_CHARACTER_NAME: &str = "Leia Organa";

/// Gender used for fixture characters.
pub static TEST_CHARACTER_GENDER: &str = "female";

/// Species used for fixture characters.
pub static TEST_CHARACTER_SPECIES: &str = "human";

/// Name used for fixture planets.
pub static TEST_PLANET_NAME: &str = "Dagobah";

/// Population used for fixture planets.
pub static TEST_PLANET_POPULATION: i64 = 200_000;

/// Terrain used for fixture planets.
pub static TEST_PLANET_TERRAIN: &str = "swamp";
