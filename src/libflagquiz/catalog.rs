use crate::Error;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

const EMBEDDED: &str = include_str!("../../data/countries.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
}

impl Continent {
    pub const ALL: [Continent; 6] = [
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
    ];
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
        };
        write!(f, "{}", s)
    }
}

/// Squash "North America", "north-america" and "north_america" to the same key.
fn region_key(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Continent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = region_key(s);
        Continent::ALL
            .into_iter()
            .find(|c| region_key(&c.to_string()) == key)
            .ok_or_else(|| format!("unknown continent {:?}", s))
    }
}

/// The area a quiz draws countries from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    World,
    Continent(Continent),
}

impl Region {
    pub fn contains(&self, continent: Continent) -> bool {
        match self {
            Region::World => true,
            Region::Continent(c) => *c == continent,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::World => write!(f, "World"),
            Region::Continent(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if region_key(s) == "world" {
            Ok(Region::World)
        } else {
            Continent::from_str(s)
                .map(Region::Continent)
                .map_err(|_| format!("unknown region {:?} (try world or a continent)", s))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrivingSide {
    Left,
    Right,
}

impl fmt::Display for DrivingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrivingSide::Left => write!(f, "left"),
            DrivingSide::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub flag: String,
    pub continent: Continent,
    pub geoguessr: bool,
    pub dialing_prefix: String,
    pub drives_on: DrivingSide,
}

/// Position of a country in its [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryId(pub usize);

/// Which countries a queue or a distractor pool may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    pub region: Region,
    pub geoguessr_only: bool,
}

impl Filter {
    pub fn matches(&self, country: &Country) -> bool {
        if self.geoguessr_only && !country.geoguessr {
            return false;
        }
        self.region.contains(country.continent)
    }
}

/// The immutable list of countries a session quizzes on.
#[derive(Debug, Clone)]
pub struct Catalog {
    countries: Vec<Country>,
}

impl Catalog {
    /// The data set compiled into the binary.
    pub fn embedded() -> Result<Catalog, Error> {
        Self::from_json_str(EMBEDDED)
    }

    pub fn from_path(path: &Path) -> Result<Catalog, Error> {
        info!("[Catalog] Reading {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn from_json_str(json: &str) -> Result<Catalog, Error> {
        let now = Instant::now();
        let countries: Vec<Country> = serde_json::from_str(json)?;
        let catalog = Self::new(countries)?;
        debug!(
            "[Catalog] Loaded {} countries in {} ms.",
            catalog.len(),
            now.elapsed().as_millis()
        );
        Ok(catalog)
    }

    /// Names and flags both serve as prompts, so each must be unique.
    pub fn new(countries: Vec<Country>) -> Result<Catalog, Error> {
        if countries.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for country in &countries {
            if !seen.insert(country.name.as_str()) {
                return Err(Error::DuplicateCountry(country.name.clone()));
            }
            if !seen.insert(country.flag.as_str()) {
                return Err(Error::DuplicateCountry(country.flag.clone()));
            }
        }
        Ok(Catalog { countries })
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn get(&self, id: CountryId) -> Option<&Country> {
        self.countries.get(id.0)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn ids(&self) -> impl Iterator<Item = CountryId> + '_ {
        (0..self.countries.len()).map(CountryId)
    }

    /// Ids of every country the filter lets through, in catalog order.
    pub fn filtered(&self, filter: &Filter) -> Vec<CountryId> {
        self.ids()
            .filter(|id| filter.matches(&self.countries[id.0]))
            .collect()
    }

    /// Finds a country by its name or its flag.
    pub fn find(&self, value: &str) -> Option<CountryId> {
        self.countries
            .iter()
            .position(|c| c.name == value || c.flag == value)
            .map(CountryId)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(&self.countries)?)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn country(name: &str, flag: &str, continent: Continent, geoguessr: bool) -> Country {
        Country {
            name: name.to_string(),
            flag: flag.to_string(),
            continent,
            geoguessr,
            dialing_prefix: "+0".to_string(),
            drives_on: DrivingSide::Right,
        }
    }

    /// Six countries: four in Europe (one not on GeoGuessr), one in Asia and one in Oceania.
    pub(crate) fn small_catalog() -> Catalog {
        Catalog::new(vec![
            country("France", "🇫🇷", Continent::Europe, true),
            country("Germany", "🇩🇪", Continent::Europe, true),
            country("Spain", "🇪🇸", Continent::Europe, true),
            country("Belarus", "🇧🇾", Continent::Europe, false),
            country("Japan", "🇯🇵", Continent::Asia, true),
            country("Tonga", "🇹🇴", Continent::Oceania, false),
        ])
        .unwrap()
    }

    #[test]
    fn embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.len() > 100);
        let france = catalog.find("France").unwrap();
        let france = catalog.get(france).unwrap();
        assert_eq!(france.flag, "🇫🇷");
        assert_eq!(france.dialing_prefix, "+33");
        assert_eq!(france.drives_on, DrivingSide::Right);
        for continent in Continent::ALL {
            let filter = Filter {
                region: Region::Continent(continent),
                geoguessr_only: true,
            };
            assert!(!catalog.filtered(&filter).is_empty(), "{continent} is empty");
        }
    }

    #[test]
    fn find_by_name_or_flag() {
        let catalog = small_catalog();
        assert_eq!(catalog.find("Japan"), Some(CountryId(4)));
        assert_eq!(catalog.find("🇯🇵"), Some(CountryId(4)));
        assert_eq!(catalog.find("Atlantis"), None);
    }

    #[test]
    fn rejects_duplicates_and_empty() {
        let dup = Catalog::new(vec![
            country("France", "🇫🇷", Continent::Europe, true),
            country("France", "🇩🇪", Continent::Europe, true),
        ]);
        assert!(matches!(dup, Err(Error::DuplicateCountry(name)) if name == "France"));
        assert!(matches!(Catalog::new(vec![]), Err(Error::EmptyCatalog)));
        assert!(matches!(
            Catalog::from_json_str("{\"name\": 1}"),
            Err(Error::CatalogParse(_))
        ));
    }

    #[test]
    fn filter_applies_region_and_geoguessr() {
        let catalog = small_catalog();
        let europe_geo = Filter {
            region: Region::Continent(Continent::Europe),
            geoguessr_only: true,
        };
        assert_eq!(
            catalog.filtered(&europe_geo),
            vec![CountryId(0), CountryId(1), CountryId(2)]
        );
        let world_all = Filter {
            region: Region::World,
            geoguessr_only: false,
        };
        assert_eq!(catalog.filtered(&world_all).len(), 6);
    }

    #[test]
    fn parses_regions() {
        assert_eq!("world".parse::<Region>(), Ok(Region::World));
        assert_eq!(
            "North America".parse::<Region>(),
            Ok(Region::Continent(Continent::NorthAmerica))
        );
        assert_eq!(
            "south_america".parse::<Region>(),
            Ok(Region::Continent(Continent::SouthAmerica))
        );
        assert_eq!(
            "EUROPE".parse::<Region>(),
            Ok(Region::Continent(Continent::Europe))
        );
        assert!("Atlantis".parse::<Region>().is_err());
    }

    #[test]
    fn json_export_reloads() {
        let catalog = small_catalog();
        let again = Catalog::from_json_str(&catalog.to_json().unwrap()).unwrap();
        assert_eq!(again.countries(), catalog.countries());
    }
}
