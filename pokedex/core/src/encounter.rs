use crate::Resource;

use serde::Deserialize;

use std::collections::{BTreeMap, HashSet};

/// A record of the `pokemon/{id}/encounters` resource.
#[derive(Debug, Clone, Deserialize)]
pub struct Encounter {
    pub location_area: Resource,
    #[serde(default)]
    pub version_details: Vec<VersionDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionDetail {
    pub version: Resource,
}

/// Locations where a creature can be found, grouped by game version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    versions: BTreeMap<String, HashSet<String>>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_encounters<'a>(encounters: impl IntoIterator<Item = &'a Encounter>) -> Self {
        let mut index = Self::new();

        for encounter in encounters {
            let location = location_name(&encounter.location_area.name);

            for detail in &encounter.version_details {
                index.insert(&detail.version.name, &location);
            }
        }

        index
    }

    pub fn insert(&mut self, version: &str, location: &str) -> bool {
        self.versions
            .entry(version.to_owned())
            .or_default()
            .insert(location.to_owned())
    }

    pub fn get(&self, version: &str) -> Option<&HashSet<String>> {
        self.versions.get(version)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashSet<String>)> {
        self.versions
            .iter()
            .map(|(version, locations)| (version.as_str(), locations))
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

pub fn location_name(area: &str) -> String {
    area.replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn encounters() -> Vec<Encounter> {
        serde_json::from_value(json!([
            {
                "location_area": { "name": "kanto-route-2-south-towards-viridian-city", "url": "" },
                "version_details": [
                    { "max_chance": 10, "version": { "name": "red" } },
                    { "max_chance": 10, "version": { "name": "blue" } }
                ]
            },
            {
                "location_area": { "name": "viridian-forest-area", "url": "" },
                "version_details": [
                    { "max_chance": 5, "version": { "name": "red" } }
                ]
            },
            {
                "location_area": { "name": "viridian-forest-area", "url": "" },
                "version_details": [
                    { "max_chance": 5, "version": { "name": "red" } },
                    { "max_chance": 5, "version": { "name": "omega-ruby" } }
                ]
            }
        ]))
        .unwrap()
    }

    #[test]
    fn locations_are_grouped_by_version() {
        let index = Index::from_encounters(&encounters());

        assert_eq!(index.len(), 3);
        assert_eq!(
            index.get("red"),
            Some(&HashSet::from([
                "kanto route 2 south towards viridian city".to_owned(),
                "viridian forest area".to_owned(),
            ]))
        );
        assert_eq!(
            index.get("blue"),
            Some(&HashSet::from([
                "kanto route 2 south towards viridian city".to_owned()
            ]))
        );
        assert_eq!(
            index.get("omega-ruby"),
            Some(&HashSet::from(["viridian forest area".to_owned()]))
        );
    }

    #[test]
    fn record_order_does_not_matter() {
        let encounters = encounters();
        let expected = Index::from_encounters(&encounters);

        let permutations = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];

        for permutation in permutations {
            let index = Index::from_encounters(permutation.iter().map(|&i| &encounters[i]));

            assert_eq!(index, expected, "permutation {permutation:?}");
        }
    }

    #[test]
    fn no_encounters_yield_empty_index() {
        let index = Index::from_encounters(&Vec::<Encounter>::new());

        assert!(index.is_empty());
        assert_eq!(index.iter().count(), 0);
    }
}
